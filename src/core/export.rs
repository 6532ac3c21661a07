//! Configuration export
//!
//! Builds a snapshot of both collections plus an export timestamp and renders
//! it as pretty-printed JSON or block-style YAML. The same text backs the live
//! preview and the downloaded file.
//!
//! YAML goes through [`serde_yaml::Value`] but is laid out here: sequences sit
//! two spaces under their key, and strings a YAML 1.1 reader would load as a
//! boolean, number, null or timestamp are double-quoted.
//!
//! # Example
//!
//! ```
//! use netsketch::core::export::{ExportFormat, prepare};
//! use netsketch::Error;
//!
//! // Nothing to export yet
//! let result = prepare(&[], &[], ExportFormat::Json, chrono::Utc::now());
//! assert!(matches!(result, Err(Error::NoData)));
//! ```

use crate::core::error::{Error, Result};
use crate::core::network::{FirewallRule, NetworkSegment};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// Indent step for YAML output
const YAML_INDENT: usize = 2;

/// Plain words YAML 1.1 resolves to booleans or null
const YAML_RESERVED_WORDS: [&str; 10] = [
    "y", "n", "yes", "no", "on", "off", "true", "false", "null", "~",
];

/// Output format chosen on the export page
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ExportFormat {
    #[default]
    #[strum(to_string = "JSON")]
    Json,
    #[strum(to_string = "YAML", serialize = "yml")]
    Yaml,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Json, ExportFormat::Yaml];

    pub const fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    /// Filter label for native save dialogs
    pub const fn filter_name(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Yaml => "YAML",
        }
    }
}

/// Everything written to an export file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfiguration {
    pub segments: Vec<NetworkSegment>,
    pub rules: Vec<FirewallRule>,
    #[serde(rename = "exportedAt")]
    pub exported_at: String,
}

impl NetworkConfiguration {
    pub fn snapshot(
        segments: &[NetworkSegment],
        rules: &[FirewallRule],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            segments: segments.to_vec(),
            rules: rules.to_vec(),
            exported_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ExportFormat::Yaml => Ok(to_block_yaml(&serde_yaml::to_value(self)?)),
        }
    }
}

/// A rendered export ready to be written somewhere
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub format: ExportFormat,
    pub file_name: String,
    pub contents: String,
}

/// `network-config-<epoch-millis>.<ext>`
pub fn file_name(format: ExportFormat, now: DateTime<Utc>) -> String {
    format!(
        "network-config-{}.{}",
        now.timestamp_millis(),
        format.extension()
    )
}

/// Renders an export file, refusing when there are no segments and no rules
pub fn prepare(
    segments: &[NetworkSegment],
    rules: &[FirewallRule],
    format: ExportFormat,
    now: DateTime<Utc>,
) -> Result<ExportFile> {
    if segments.is_empty() && rules.is_empty() {
        return Err(Error::NoData);
    }
    let contents = NetworkConfiguration::snapshot(segments, rules, now).render(format)?;
    Ok(ExportFile {
        format,
        file_name: file_name(format, now),
        contents,
    })
}

/// Text shown in the live preview pane
pub fn preview(
    segments: &[NetworkSegment],
    rules: &[FirewallRule],
    format: ExportFormat,
    now: DateTime<Utc>,
) -> String {
    NetworkConfiguration::snapshot(segments, rules, now)
        .render(format)
        .unwrap_or_else(|e| format!("# preview unavailable: {e}"))
}

/// Parses a JSON export back into its snapshot
pub fn parse_json(json: &str) -> Result<NetworkConfiguration> {
    Ok(serde_json::from_str(json)?)
}

/// Parses a YAML export back into its snapshot
pub fn parse_yaml(yaml: &str) -> Result<NetworkConfiguration> {
    Ok(serde_yaml::from_str(yaml)?)
}

fn to_block_yaml(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Mapping(map) if !map.is_empty() => write_mapping(&mut out, map, 0, false),
        other => write_inline(&mut out, other),
    }
    out
}

fn pad(out: &mut String, indent: usize) {
    out.extend(std::iter::repeat_n(' ', indent));
}

/// Writes `map` at `indent`; with `after_dash` the first key continues a `- ` line
fn write_mapping(out: &mut String, map: &Mapping, indent: usize, after_dash: bool) {
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 || !after_dash {
            pad(out, indent);
        }
        out.push_str(&scalar(key));
        out.push(':');
        match value {
            Value::Mapping(inner) if !inner.is_empty() => {
                out.push('\n');
                write_mapping(out, inner, indent + YAML_INDENT, false);
            }
            Value::Sequence(items) if !items.is_empty() => {
                out.push('\n');
                write_sequence(out, items, indent + YAML_INDENT);
            }
            other => {
                out.push(' ');
                write_inline(out, other);
            }
        }
    }
}

fn write_sequence(out: &mut String, items: &[Value], indent: usize) {
    for item in items {
        pad(out, indent);
        out.push('-');
        match item {
            Value::Mapping(map) if !map.is_empty() => {
                out.push(' ');
                write_mapping(out, map, indent + YAML_INDENT, true);
            }
            Value::Sequence(inner) if !inner.is_empty() => {
                out.push('\n');
                write_sequence(out, inner, indent + YAML_INDENT);
            }
            other => {
                out.push(' ');
                write_inline(out, other);
            }
        }
    }
}

/// Scalars and empty collections, terminated by a newline
fn write_inline(out: &mut String, value: &Value) {
    match value {
        Value::Mapping(_) => out.push_str("{}"),
        Value::Sequence(_) => out.push_str("[]"),
        other => out.push_str(&scalar(other)),
    }
    out.push('\n');
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => string_scalar(s),
        Value::Tagged(tagged) => scalar(&tagged.value),
        Value::Mapping(_) | Value::Sequence(_) => serde_yaml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn string_scalar(s: &str) -> String {
    if is_plain_string(s) {
        return s.to_string();
    }
    // JSON string syntax is valid YAML double-quoted syntax
    serde_json::to_string(s).unwrap_or_else(|_| format!("'{}'", s.replace('\'', "''")))
}

/// True when `s` can be written unquoted and still load back as the same string
fn is_plain_string(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return false;
    };
    if first.is_ascii_digit() || matches!(first, '+' | '-' | '.') {
        return false;
    }
    if YAML_RESERVED_WORDS
        .iter()
        .any(|word| s.eq_ignore_ascii_case(word))
    {
        return false;
    }
    // serde_yaml quotes or folds anything else that is unsafe as a plain scalar
    serde_yaml::to_string(s).is_ok_and(|out| out.strip_suffix('\n') == Some(s))
}

/// Writes `file` into `dir` under its generated name and returns the path
pub fn write_to_dir(dir: &Path, file: &ExportFile) -> Result<PathBuf> {
    let path = dir.join(&file.file_name);
    std::fs::write(&path, &file.contents)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::network::{Action, RuleDraft, SegmentDraft};
    use chrono::TimeZone;
    use std::str::FromStr;
    use uuid::Uuid;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
    }

    fn sample() -> (Vec<NetworkSegment>, Vec<FirewallRule>) {
        let segments = vec![
            NetworkSegment::from_draft(
                Uuid::new_v4(),
                SegmentDraft::new("LAN", "192.168.1.0/24", "Internal Network", 0),
            ),
            NetworkSegment::from_draft(
                Uuid::new_v4(),
                SegmentDraft::new("DMZ", "10.0.1.0/24", "Public Zone", 1).with_color("#ef4444"),
            ),
        ];
        let rules = vec![FirewallRule::from_draft(
            Uuid::new_v4(),
            RuleDraft::new("Block telnet", "ANY", "10.0.1.0/24", "23")
                .with_action(Action::Deny)
                .with_priority(10),
        )];
        (segments, rules)
    }

    #[test]
    fn test_empty_export_refused() {
        let result = prepare(&[], &[], ExportFormat::Yaml, fixed_now());
        assert!(matches!(result, Err(Error::NoData)));
    }

    #[test]
    fn test_rules_only_export_allowed() {
        let (_, rules) = sample();
        assert!(prepare(&[], &rules, ExportFormat::Json, fixed_now()).is_ok());
    }

    #[test]
    fn test_json_export_shape() {
        let (segments, rules) = sample();
        let file = prepare(&segments, &rules, ExportFormat::Json, fixed_now()).unwrap();
        assert_eq!(file.format, ExportFormat::Json);

        let value: serde_json::Value = serde_json::from_str(&file.contents).unwrap();
        assert_eq!(value["segments"].as_array().unwrap().len(), 2);
        assert_eq!(value["rules"][0]["action"], "DENY");
        let exported_at = value["exportedAt"].as_str().unwrap();
        assert_eq!(exported_at, "2024-03-01T12:30:00.000Z");
        assert!(DateTime::parse_from_rfc3339(exported_at).is_ok());

        // Pretty-printed with 2-space indent
        assert!(file.contents.starts_with("{\n  \"segments\": ["));
    }

    #[test]
    fn test_json_round_trip() {
        let (segments, rules) = sample();
        let file = prepare(&segments, &rules, ExportFormat::Json, fixed_now()).unwrap();
        let parsed = parse_json(&file.contents).unwrap();
        assert_eq!(parsed.segments, segments);
        assert_eq!(parsed.rules, rules);
    }

    #[test]
    fn test_yaml_export_block_style() {
        let (segments, rules) = sample();
        let file = prepare(&segments, &rules, ExportFormat::Yaml, fixed_now()).unwrap();
        assert!(file.contents.starts_with("segments:\n  - id: "));
        assert!(file.contents.contains("\n    name: LAN\n"));
        assert!(file.contents.contains("\nrules:\n  - id: "));
        assert!(file.contents.contains("    action: DENY\n"));
        assert!(!file.contents.contains('{'));
    }

    #[test]
    fn test_yaml_quotes_ambiguous_strings() {
        let segment = NetworkSegment::from_draft(
            Uuid::nil(),
            SegmentDraft::new("LAN", "192.168.1.0/24", "yes", 0),
        );
        let rule = FirewallRule::from_draft(
            Uuid::nil(),
            RuleDraft::new("Off hours", "ANY", "null", "443"),
        );
        let file = prepare(&[segment], &[rule], ExportFormat::Yaml, fixed_now()).unwrap();

        assert!(file.contents.contains("    role: \"yes\"\n"));
        assert!(file.contents.contains("    cidr: \"192.168.1.0/24\"\n"));
        assert!(file.contents.contains("    destination: \"null\"\n"));
        assert!(file.contents.contains("    port: \"443\"\n"));
        assert!(file.contents.contains("    source: ANY\n"));
        assert!(
            file.contents
                .ends_with("exportedAt: \"2024-03-01T12:30:00.000Z\"\n")
        );
    }

    #[test]
    fn test_yaml_round_trip() {
        let (mut segments, rules) = sample();
        segments[0].role = "on".to_string();
        segments[1].name = "multi\nline: value".to_string();
        let file = prepare(&segments, &rules, ExportFormat::Yaml, fixed_now()).unwrap();

        let parsed = parse_yaml(&file.contents).unwrap();
        assert_eq!(parsed.segments, segments);
        assert_eq!(parsed.rules, rules);
        assert_eq!(parsed.exported_at, "2024-03-01T12:30:00.000Z");

        let raw: Value = serde_yaml::from_str(&file.contents).unwrap();
        assert!(raw["exportedAt"].is_string());
        assert!(raw["segments"][0]["role"].is_string());
    }

    #[test]
    fn test_yaml_empty_collections() {
        let text = preview(&[], &[], ExportFormat::Yaml, fixed_now());
        assert!(text.starts_with("segments: []\nrules: []\n"));
        let parsed = parse_yaml(&text).unwrap();
        assert!(parsed.segments.is_empty());
        assert!(parsed.rules.is_empty());
    }

    #[test]
    fn test_file_names() {
        let now = fixed_now();
        let millis = now.timestamp_millis();
        assert_eq!(
            file_name(ExportFormat::Json, now),
            format!("network-config-{millis}.json")
        );
        assert_eq!(
            file_name(ExportFormat::Yaml, now),
            format!("network-config-{millis}.yaml")
        );
    }

    #[test]
    fn test_preview_of_empty_data_renders_empty_document() {
        let text = preview(&[], &[], ExportFormat::Json, fixed_now());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value["segments"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_format_parsing_and_display() {
        assert_eq!(ExportFormat::from_str("yaml").unwrap(), ExportFormat::Yaml);
        assert_eq!(ExportFormat::from_str("JSON").unwrap(), ExportFormat::Json);
        assert!(ExportFormat::from_str("xml").is_err());
        assert_eq!(ExportFormat::Yaml.to_string(), "YAML");
    }

    #[test]
    fn test_write_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let (segments, rules) = sample();
        let file = prepare(&segments, &rules, ExportFormat::Yaml, fixed_now()).unwrap();
        let path = write_to_dir(dir.path(), &file).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), file.contents);
    }
}
