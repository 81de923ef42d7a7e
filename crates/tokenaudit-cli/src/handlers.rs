//! Audit command handler

use crate::cli::AuditArgs;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use tokenaudit_core::{load_tree, AuditConfig, Auditor, StateDepthTolerance};
use tracing::{debug, info, instrument, warn};

/// Handle the audit command
#[instrument(skip(args, output), fields(primitives = %args.primitives.display(), semantics = %args.semantics.display()))]
pub fn handle_audit(args: AuditArgs, output: &mut OutputWriter) -> Result<()> {
    info!("Starting token audit");
    output.info(&format!(
        "Auditing {} against {}",
        args.primitives.display(),
        args.semantics.display()
    ))?;

    debug!("Loading primitive token document");
    let primitive = load_tree(&args.primitives)?;
    debug!("Loading semantic token document");
    let semantic = load_tree(&args.semantics)?;

    let mut config = if args.minimal {
        AuditConfig::minimal()
    } else {
        AuditConfig::default()
    };
    config.max_depth = args.max_depth;
    if args.warn_state_depth {
        config.state_depth_tolerance = StateDepthTolerance::Warn;
    }

    let report = Auditor::new(config).run(&primitive, &semantic)?;
    info!(
        critical = report.critical.len(),
        warnings = report.warnings.len(),
        score = report.score(),
        "Audit complete"
    );

    output.report(&report, args.show_passes)?;

    if report.is_ready() {
        Ok(())
    } else {
        warn!("Corpus is not ready for consumption");
        Err(Error::NotReady {
            count: report.critical.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::io::Write as _;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_doc(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn args(primitives: PathBuf, semantics: PathBuf) -> AuditArgs {
        AuditArgs {
            primitives,
            semantics,
            max_depth: 4,
            warn_state_depth: false,
            minimal: true,
            show_passes: false,
        }
    }

    fn sink() -> OutputWriter {
        OutputWriter::with_writer(OutputFormat::Json, false, true, Box::new(std::io::sink()))
    }

    #[test]
    fn test_clean_corpus_succeeds() {
        let dir = TempDir::new().unwrap();
        let primitives = write_doc(
            &dir,
            "primitives.json",
            r#"{
                "color": {
                    "brand": {
                        "600": {
                            "$type": "color",
                            "$value": {"colorSpace": "hsl", "components": [243, 75, 59], "alpha": 1, "hex": "4f46e5"},
                            "$description": "Primary brand indigo for emphasis"
                        }
                    }
                }
            }"#,
        );
        let semantics = write_doc(
            &dir,
            "semantics.json",
            r#"{
                "color": {
                    "background": {
                        "brand": {
                            "default": {
                                "$type": "color",
                                "$value": "{color.brand.600}",
                                "$description": "Default brand surface background"
                            }
                        }
                    }
                }
            }"#,
        );
        let result = handle_audit(args(primitives, semantics), &mut sink());
        assert!(result.is_ok(), "{result:?}");
    }

    #[test]
    fn test_critical_findings_map_to_not_ready() {
        let dir = TempDir::new().unwrap();
        let primitives = write_doc(&dir, "primitives.json", "{}");
        let semantics = write_doc(
            &dir,
            "semantics.json",
            r#"{
                "color": {
                    "accent": {
                        "default": {
                            "$type": "color",
                            "$value": "{color.missing}",
                            "$description": "References a token that does not exist"
                        }
                    }
                }
            }"#,
        );
        let error = handle_audit(args(primitives, semantics), &mut sink()).unwrap_err();
        assert_eq!(error.exit_code(), 1);
        assert!(matches!(error, Error::NotReady { count: 1 }));
    }

    #[test]
    fn test_unparseable_document_is_fatal() {
        let dir = TempDir::new().unwrap();
        let primitives = write_doc(&dir, "primitives.json", "not json at all");
        let semantics = write_doc(&dir, "semantics.json", "{}");
        let error = handle_audit(args(primitives, semantics), &mut sink()).unwrap_err();
        assert!(matches!(error, Error::Audit(_)));
        assert_eq!(error.exit_code(), 2);
    }
}
