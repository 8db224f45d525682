use crate::error::{CrateError, Result};
use crate::taxon::{OutputMode, format_name};
use csv::StringRecord;
use std::path::Path;

/// Which column holds the names and where the formatted copy goes.
#[derive(Debug, Clone)]
pub struct ColumnConfig {
    pub name_column: String,
    pub target_column: String,
    pub mode: OutputMode,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            name_column: "scientific_name".to_string(),
            target_column: "formatted_name".to_string(),
            mode: OutputMode::Html,
        }
    }
}

// A loaded export: the header row plus every data row as read.
#[derive(Debug)]
pub struct NameTable {
    pub headers: StringRecord,
    pub name_index: usize,
    pub records: Vec<StringRecord>,
}

// Loads the CSV file and locates the name column.
pub fn load_and_validate_csv(file_path: &Path, config: &ColumnConfig) -> Result<NameTable> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let headers = reader.headers()?.clone();
    let name_index = headers
        .iter()
        .position(|h| h == config.name_column)
        .ok_or_else(|| CrateError::MissingHeader(config.name_column.clone()))?;

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(result?);
    }

    Ok(NameTable {
        headers,
        name_index,
        records,
    })
}

impl NameTable {
    /// Formats the name cell of one row. Blank cells give an empty string.
    pub fn formatted_name(&self, row: usize, mode: OutputMode) -> String {
        self.records
            .get(row)
            .and_then(|r| r.get(self.name_index))
            .map(|name| format_name(name.trim(), mode))
            .unwrap_or_default()
    }
}

/// Writes every row of `table` to `output` with the formatted name appended as
/// `config.target_column`. `on_row` runs after each row is written.
pub fn write_formatted_csv<F: FnMut()>(
    table: &NameTable,
    config: &ColumnConfig,
    output: &Path,
    mut on_row: F,
) -> Result<usize> {
    let mut writer = csv::Writer::from_path(output)?;
    let mut headers = table.headers.clone();
    headers.push_field(&config.target_column);
    writer.write_record(&headers)?;

    for (row, record) in table.records.iter().enumerate() {
        let mut out = record.clone();
        out.push_field(&table.formatted_name(row, config.mode));
        writer.write_record(&out)?;
        on_row();
    }

    writer.flush()?;
    Ok(table.records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_valid_csv() {
        let content = "id,vernacular_name,scientific_name,family\n1,月季,Rosa chinensis,Rosaceae\n2,凤尾竹,Bambusa multiplex,Poaceae";
        let file = create_test_csv(content);
        let table = load_and_validate_csv(file.path(), &ColumnConfig::default()).unwrap();
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.name_index, 2);
        assert_eq!(
            table.formatted_name(0, OutputMode::Html),
            "<i>Rosa</i> <i>chinensis</i>"
        );
        assert_eq!(
            table.formatted_name(1, OutputMode::Markdown),
            "*Bambusa* *multiplex*"
        );
        assert_eq!(table.formatted_name(9, OutputMode::Html), "");
    }

    #[test]
    fn test_missing_header() {
        let content = "id,vernacular_name\n1,月季";
        let file = create_test_csv(content);
        let result = load_and_validate_csv(file.path(), &ColumnConfig::default());
        assert!(matches!(result, Err(CrateError::MissingHeader(h)) if h == "scientific_name"));
    }

    #[test]
    fn test_custom_column() {
        let content = "family\nRosaceae\nRosa";
        let file = create_test_csv(content);
        let config = ColumnConfig {
            name_column: "family".to_string(),
            ..ColumnConfig::default()
        };
        let table = load_and_validate_csv(file.path(), &config).unwrap();
        assert_eq!(table.formatted_name(0, OutputMode::Html), "Rosaceae");
        assert_eq!(table.formatted_name(1, OutputMode::Html), "<i>Rosa</i>");
    }

    #[test]
    fn test_malformed_csv() {
        let content = "id,scientific_name\n1,Rosa canina,extra";
        let file = create_test_csv(content);
        let result = load_and_validate_csv(file.path(), &ColumnConfig::default());
        assert!(matches!(result, Err(CrateError::CsvError(_))));
    }

    #[test]
    fn test_write_formatted_csv() {
        let content = "id,scientific_name\n1,Rosa chinensis var. spontanea\n2,\n3,蔷薇";
        let input = create_test_csv(content);
        let output = NamedTempFile::new().unwrap();
        let config = ColumnConfig::default();

        let table = load_and_validate_csv(input.path(), &config).unwrap();
        let mut rows_seen = 0;
        let written = write_formatted_csv(&table, &config, output.path(), || rows_seen += 1).unwrap();
        assert_eq!(written, 3);
        assert_eq!(rows_seen, 3);

        let mut reader = csv::Reader::from_path(output.path()).unwrap();
        let headers: Vec<&str> = reader.headers().unwrap().iter().collect();
        assert_eq!(headers, vec!["id", "scientific_name", "formatted_name"]);
        let rows: Vec<StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "Rosa chinensis var. spontanea");
        assert_eq!(
            &rows[0][2],
            "<i>Rosa</i> <i>chinensis</i> var. <i>spontanea</i>"
        );
        assert_eq!(&rows[1][2], "");
        assert_eq!(&rows[2][2], "蔷薇");
        assert!(!fs::read_to_string(output.path()).unwrap().is_empty());
    }

    #[test]
    fn test_empty_csv() {
        let content = "id,scientific_name";
        let file = create_test_csv(content);
        let table = load_and_validate_csv(file.path(), &ColumnConfig::default()).unwrap();
        assert!(table.records.is_empty());
    }
}
