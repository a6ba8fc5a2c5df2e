use anyhow::{Context, Result};
use std::fs;
use std::process::ExitCode;
use crate::cli::{CheckArgs, OutputFormat};
use file_license_auditor::config::load_config;
use file_license_auditor::ignore::{load_ignore_config, IgnorePolicy};
use file_license_auditor::license::{CommandDetector, FixedLicenses, LicenseDetector};
use file_license_auditor::mapping::load_mapping;
use file_license_auditor::output::{format_json_output, format_table_output};
use file_license_auditor::repo::RepoSource;
use file_license_auditor::{Audit, AuditReport};

pub fn handle_check(args: CheckArgs, quiet: bool) -> Result<ExitCode> {
    // Load configuration from license-audit.toml
    let config = load_config()?;

    // Mapping and ignore documents are read before anything is cloned
    let mapping_path = args.mapping.clone().unwrap_or_else(|| config.mapping_path());
    let mapping = load_mapping(&mapping_path)?;

    let (ignore_path, required) = match &args.ignore {
        Some(path) => (path.clone(), true),
        None => config.ignore_path(),
    };
    let ignore = load_ignore_config(&ignore_path, required)?;

    // CLI arguments override config values
    let policy = IgnorePolicy {
        skip_hidden_dirs: args.skip_hidden_dirs || config.skip_hidden_dirs.unwrap_or(false),
        skip_root_files: args.skip_root_files || config.skip_root_files.unwrap_or(false),
        nesting: args.nesting.map(Into::into).or(config.nesting).unwrap_or_default(),
        patterns: ignore.patterns,
    };

    // Dropping `source` removes a cloned checkout
    let source = RepoSource::open(&args.target)?;

    let detector: Box<dyn LicenseDetector> = if args.licenses.is_empty() {
        let program = args
            .detector
            .clone()
            .or(config.detector.clone())
            .unwrap_or_else(|| "license-detector".to_string());
        Box::new(CommandDetector::new(program))
    } else {
        Box::new(FixedLicenses(args.licenses.iter().cloned().collect()))
    };
    let licenses = detector.detect(source.root())?;

    let audit = Audit::new(mapping, licenses, &policy)?;
    let (files, summary) = audit.evaluate(source.root())?;

    let report = AuditReport {
        project: source.project_name(),
        licenses: audit.licenses().clone(),
        files,
        summary,
    };

    // Determine output format
    let format = args.format.unwrap_or_else(|| match config.format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Table,
    });

    let output_content = match format {
        OutputFormat::Json => format_json_output(&report)?,
        OutputFormat::Table => format_table_output(&report),
    };

    match &args.output {
        Some(path) => fs::write(path, &output_content)
            .with_context(|| format!("Failed to write report to {}", path.display()))?,
        None => {
            if !quiet {
                print!("{}", output_content);
                if !output_content.ends_with('\n') {
                    println!();
                }
            }
        }
    }

    if let Some(threshold) = args.fail_under.or(config.fail_under) {
        if report.summary.score < threshold {
            if !quiet {
                eprintln!(
                    "Score {:.2}% is below the required {:.2}%",
                    report.summary.score, threshold
                );
            }
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
