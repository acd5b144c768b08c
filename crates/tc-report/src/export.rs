//! CSV and JSON rendering of state records.

use crate::records::StateRecord;
use crate::{ReportError, ReportResult};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ReportError::Unknown {
                what: "export format",
                value: s.to_string(),
            }),
        }
    }
}

/// Render records; missing values become empty CSV cells or JSON `null`.
pub fn render(records: &[StateRecord], format: ExportFormat) -> ReportResult<String> {
    match format {
        ExportFormat::Csv => Ok(to_csv(records)),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}

fn to_csv(records: &[StateRecord]) -> String {
    let mut out = StateRecord::HEADER.join(",");
    out.push('\n');
    for rec in records {
        out.push_str(&rec.label);
        for value in rec.values() {
            out.push(',');
            if let Some(v) = value {
                // infallible for String
                let _ = write!(out, "{v}");
            }
        }
        out.push('\n');
    }
    out
}

pub fn write_report(path: &Path, contents: &str) -> ReportResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str, p: Option<f64>) -> StateRecord {
        StateRecord {
            label: label.to_string(),
            p_pa: p,
            t_k: Some(300.0),
            v_m3_per_kg: None,
            u_j_per_kg: None,
            h_j_per_kg: None,
            s_j_per_kg_k: Some(-1.5),
        }
    }

    #[test]
    fn csv_leaves_missing_cells_empty() {
        let csv = render(&[record("1", Some(1e5)), record("1.1", None)], ExportFormat::Csv).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("label,P [Pa],T [K]"));
        assert_eq!(lines[1], "1,100000,300,,,,-1.5");
        assert_eq!(lines[2], "1.1,,300,,,,-1.5");
    }

    #[test]
    fn json_uses_null_for_missing() {
        let json = render(&[record("2", None)], ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["label"], "2");
        assert!(value[0]["p_pa"].is_null());
        assert_eq!(value[0]["t_k"], 300.0);

        let back: Vec<StateRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![record("2", None)]);
    }

    #[test]
    fn format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(ReportError::Unknown { .. })
        ));
    }
}
