use crate::error::CrateError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

// CJK Unified Ideographs, the range vernacular names are written in.
static CJK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{4e00}-\x{9fa5}]").expect("valid CJK regex"));

const FAMILY_SUFFIX: &str = "aceae";

/// Rank abbreviations that stay upright inside an italicized name.
pub const RANK_MARKERS: [&str; 3] = ["subsp.", "var.", "f."];

/// How emphasis is written into a rendered name.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// `*Rosa* *canina*`
    #[default]
    Markdown,
    /// `<i>Rosa</i> <i>canina</i>`
    Html,
    /// No markers.
    Plain,
}

impl OutputMode {
    fn emphasize(self, token: &str) -> String {
        match self {
            OutputMode::Markdown => format!("*{}*", token),
            OutputMode::Html => format!("<i>{}</i>", token),
            OutputMode::Plain => token.to_string(),
        }
    }
}

impl FromStr for OutputMode {
    type Err = CrateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markdown" => Ok(OutputMode::Markdown),
            "html" => Ok(OutputMode::Html),
            "plain" => Ok(OutputMode::Plain),
            other => Err(CrateError::UnknownOutputMode(other.to_string())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutputMode::Markdown => "markdown",
            OutputMode::Html => "html",
            OutputMode::Plain => "plain",
        };
        f.write_str(label)
    }
}

/// One whitespace-separated token of a scientific name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameComponent<'a> {
    /// Genus, species or infraspecific epithet; italicized.
    Epithet(&'a str),
    /// `subsp.`, `var.` or `f.` in any letter case; never italicized.
    RankMarker(&'a str),
}

impl<'a> NameComponent<'a> {
    fn classify(token: &'a str) -> Self {
        let lower = token.to_lowercase();
        if RANK_MARKERS.contains(&lower.as_str()) {
            NameComponent::RankMarker(token)
        } else {
            NameComponent::Epithet(token)
        }
    }
}

/// A raw name sorted into the rule that decides its display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonName<'a> {
    /// Contains CJK characters; shown as written.
    Vernacular(&'a str),
    /// Family rank (`-aceae`); shown as written.
    Family(&'a str),
    Components(Vec<NameComponent<'a>>),
}

impl<'a> TaxonName<'a> {
    /// Rules are checked in order: vernacular, then family, then components.
    pub fn parse(name: &'a str) -> Self {
        if CJK_REGEX.is_match(name) {
            return TaxonName::Vernacular(name);
        }
        if name.ends_with(FAMILY_SUFFIX) {
            return TaxonName::Family(name);
        }
        TaxonName::Components(name.split_whitespace().map(NameComponent::classify).collect())
    }

    pub fn render(&self, mode: OutputMode) -> String {
        match self {
            TaxonName::Vernacular(name) | TaxonName::Family(name) => name.to_string(),
            TaxonName::Components(parts) => parts
                .iter()
                .map(|part| match part {
                    NameComponent::RankMarker(token) => token.to_string(),
                    NameComponent::Epithet(token) => mode.emphasize(token),
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Formats a taxon name for display, italicizing the parts nomenclature
/// conventions italicize.
///
/// Vernacular (CJK) and family-rank names come back unchanged. Anything else is
/// split on whitespace and every token except a rank abbreviation is wrapped
/// according to `mode`. Not idempotent for `Markdown` and `Html`.
pub fn format_name(name: &str, mode: OutputMode) -> String {
    TaxonName::parse(name).render(mode)
}
