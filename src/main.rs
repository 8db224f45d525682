pub mod cli;
pub mod config;
pub mod csv_handler;
pub mod error;
pub mod page;
pub mod taxon;

use clap::Parser;
use cli::{Cli, Command};
use config::{PageConfig, load_config};
use csv_handler::{ColumnConfig, load_and_validate_csv, write_formatted_csv};
use error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use page::dom::Document;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use taxon::{OutputMode, format_name};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(level)
        .try_init()
        .expect("Failed to initialize logger");

    let result = match cli.command {
        Command::Format { names, mode } => run_format(names, mode),
        Command::Csv {
            input_file,
            output_file,
            column,
            target_column,
            mode,
        } => {
            let columns = ColumnConfig {
                name_column: column,
                target_column,
                mode,
            };
            run_csv(&input_file, &output_file, &columns)
        }
        Command::Page {
            input_file,
            config,
            clicks,
            output_file,
        } => run_page(&input_file, config.as_deref(), clicks, output_file),
    };

    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

fn run_format(names: Vec<String>, mode: OutputMode) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if names.is_empty() {
        info!("Reading names from stdin ({} output)", mode);
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            writeln!(out, "{}", format_name(&line, mode))?;
        }
    } else {
        for name in &names {
            writeln!(out, "{}", format_name(name, mode))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_csv(input: &Path, output: &Path, columns: &ColumnConfig) -> Result<()> {
    let start_time = Instant::now();
    info!("Input file: {:?}", input);
    info!("Output file: {:?}", output);
    info!(
        "Formatting column '{}' as {} into '{}'",
        columns.name_column, columns.mode, columns.target_column
    );

    let table = load_and_validate_csv(input, columns)?;
    info!("Loaded {} records.", table.records.len());
    if table.records.is_empty() {
        warn!("Input CSV contains no records; writing header only.");
    }

    let pb = ProgressBar::new(table.records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .expect("Failed to set progress bar style")
            .progress_chars("##-"),
    );
    let written = write_formatted_csv(&table, columns, output, || pb.inc(1))?;
    pb.finish_with_message("Formatting complete.");

    info!(
        "Wrote {} records to {:?} in {:.2?}",
        written,
        output,
        start_time.elapsed()
    );
    Ok(())
}

fn run_page(
    input: &Path,
    config_path: Option<&Path>,
    clicks: usize,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => PageConfig::default(),
    };
    let mut document = Document::load(input)?;
    info!(
        "Loaded page {:?} with {} elements",
        input,
        document.elements.len()
    );

    let setup = page::initialize(&mut document, &config);
    info!("Formatted {} scientific name(s)", setup.names_formatted);

    match setup.toggle {
        Some(mut toggle) => {
            for _ in 0..clicks {
                toggle.click(&mut document);
            }
            info!("Sensitive info after {} click(s): {:?}", clicks, toggle.state());
            if !toggle.is_in_sync(&document) {
                warn!("Sensitive rows do not match the toggle state");
            }
        }
        None if clicks > 0 => {
            warn!("Page has no toggle control; ignoring {} click(s)", clicks);
        }
        None => {}
    }

    let json = document.to_json()?;
    match output {
        Some(path) => {
            fs::write(&path, format!("{}\n", json))?;
            info!("Page written to {:?}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
