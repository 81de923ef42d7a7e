//! Output formatting and writing utilities
//!
//! Renders the audit report in human-readable or JSON form. The report's
//! structured content comes straight from `tokenaudit-core`; everything
//! here is presentation.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use std::io::{self, Write};
use tokenaudit_core::{Report, Verdict};

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer targeting stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message (human format only)
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }
        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a section header
    fn section(&mut self, title: &str) -> Result<()> {
        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Render the full audit report in the configured format
    pub fn report(&mut self, report: &Report, show_passes: bool) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let rendered = serde_json::to_string(&report.to_json())?;
                self.writeln(&rendered)
            }
            OutputFormat::JsonPretty => {
                let rendered = serde_json::to_string_pretty(&report.to_json())?;
                self.writeln(&rendered)
            }
            OutputFormat::Human => self.report_human(report, show_passes),
        }
    }

    fn report_human(&mut self, report: &Report, show_passes: bool) -> Result<()> {
        if !report.critical.is_empty() {
            self.section("Critical")?;
            for finding in &report.critical {
                self.finding_line("✗", finding, |s| s.red().to_string())?;
            }
        }
        if !report.warnings.is_empty() {
            self.section("Warnings")?;
            for finding in &report.warnings {
                self.finding_line("⚠", finding, |s| s.yellow().to_string())?;
            }
        }
        if show_passes && !report.pass.is_empty() {
            self.section("Passed")?;
            for finding in &report.pass {
                self.finding_line("✓", finding, |s| s.green().to_string())?;
            }
        }

        self.section("Statistics")?;
        let stats = &report.stats;
        self.writeln(&format!(
            "  tokens audited:      {} ({} primitive, {} semantic)",
            stats.total_tokens, stats.primitive_tokens, stats.semantic_tokens
        ))?;
        self.writeln(&format!(
            "  references checked:  {} ({} invalid)",
            stats.references_checked, stats.invalid_references
        ))?;
        self.writeln(&format!("  missing $type:       {}", stats.missing_kind))?;
        self.writeln(&format!(
            "  missing description: {}",
            stats.missing_description
        ))?;

        self.writeln("")?;
        self.writeln(&format!("Score: {}/100", report.score()))?;
        let verdict = report.verdict();
        let verdict_text = format!("Verdict: {}", verdict);
        if self.use_color {
            let colored_text = match verdict {
                Verdict::Ready => verdict_text.green().to_string(),
                Verdict::ReadyWithWarnings => verdict_text.yellow().to_string(),
                Verdict::NotReady => verdict_text.red().bold().to_string(),
            };
            self.writeln(&colored_text)
        } else {
            self.writeln(&verdict_text)
        }
    }

    fn finding_line<F>(&mut self, marker: &str, finding: &str, paint: F) -> Result<()>
    where
        F: Fn(&str) -> String,
    {
        let line = format!("  {} {}", marker, finding);
        if self.use_color {
            self.writeln(&paint(&line))
        } else {
            self.writeln(&line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn sample_report() -> Report {
        let mut report = Report::new();
        report.pass("color.brand.600: color value well-formed");
        report.warn("color.brand.600: description shorter than 10 characters");
        report.stats.total_tokens = 1;
        report.stats.primitive_tokens = 1;
        report
    }

    #[test]
    fn test_human_report_sections_and_verdict() {
        let buf = SharedBuf::default();
        let mut writer = OutputWriter::with_writer(
            OutputFormat::Human,
            false,
            false,
            Box::new(buf.clone()),
        );
        writer.report(&sample_report(), false).unwrap();
        let rendered = buf.contents();
        assert!(rendered.contains("=== Warnings ==="));
        assert!(!rendered.contains("=== Passed ==="));
        assert!(rendered.contains("Score: 50/100"));
        assert!(rendered.contains("Verdict: ready with warnings"));
    }

    #[test]
    fn test_show_passes_includes_pass_section() {
        let buf = SharedBuf::default();
        let mut writer = OutputWriter::with_writer(
            OutputFormat::Human,
            false,
            false,
            Box::new(buf.clone()),
        );
        writer.report(&sample_report(), true).unwrap();
        assert!(buf.contents().contains("=== Passed ==="));
    }

    #[test]
    fn test_json_report_round_trips() {
        let buf = SharedBuf::default();
        let mut writer =
            OutputWriter::with_writer(OutputFormat::Json, false, false, Box::new(buf.clone()));
        writer.report(&sample_report(), false).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(buf.contents().trim()).unwrap();
        assert_eq!(parsed["score"], 50);
        assert_eq!(parsed["verdict"], "ready_with_warnings");
        assert_eq!(parsed["stats"]["total_tokens"], 1);
    }
}
