use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Result;
use crate::reply_status::{Outcome, ReplyStatus};

/// One row of the `replystatus list` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub name: &'static str,
    pub value: i16,
    pub outcome: Outcome,
    pub interception_point: &'static str,
}

impl From<ReplyStatus> for StatusEntry {
    fn from(status: ReplyStatus) -> Self {
        let outcome = status.outcome();
        Self {
            name: status.name(),
            value: status.encode(),
            outcome,
            interception_point: outcome.interception_point(),
        }
    }
}

/// Rows for every known reply status.
pub fn all_entries() -> Vec<StatusEntry> {
    ReplyStatus::ALL.iter().copied().map(StatusEntry::from).collect()
}

/// Format entries as a fixed-width table.
pub fn format_status_table(entries: &[StatusEntry]) -> String {
    let header = format!(
        "{:<20} {:<6} {:<10} {}",
        "NAME", "VALUE", "OUTCOME", "INTERCEPTION POINT"
    );
    let mut lines = vec![header];
    for entry in entries {
        lines.push(format!(
            "{:<20} {:<6} {:<10} {}",
            entry.name,
            entry.value,
            entry.outcome.to_string(),
            entry.interception_point
        ));
    }
    lines.join("\n")
}

/// Format entries as a YAML sequence.
pub fn format_status_yaml(entries: &[StatusEntry]) -> Result<String> {
    Ok(serde_yaml::to_string(entries)?)
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
}

impl OutputFormat {
    pub fn render(self, entries: &[StatusEntry]) -> Result<String> {
        match self {
            Self::Text => Ok(format_status_table(entries)),
            Self::Yaml => format_status_yaml(entries),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!(
                "Invalid output format '{}'. Must be one of: text, yaml",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
