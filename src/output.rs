use anyhow::Result;

use crate::cli::OutputFormat;
use crate::scan::ScanReport;

pub fn format_report(report: &ScanReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("Total lines of code: {}", report.total_lines)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ScanReport {
        let mut report = ScanReport {
            total_lines: 42,
            files_counted: 3,
            ..Default::default()
        };
        report.languages.insert("go".to_string(), 42);
        report
    }

    #[test]
    fn test_text_format() {
        let out = format_report(&report(), OutputFormat::Text).unwrap();
        assert_eq!(out, "Total lines of code: 42");
    }

    #[test]
    fn test_json_format() {
        let out = format_report(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["total_lines"], 42);
        assert_eq!(value["files_counted"], 3);
        assert_eq!(value["languages"]["go"], 42);
    }
}
