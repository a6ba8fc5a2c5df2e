use anyhow::Result;
use std::process::ExitCode;
use file_license_auditor::config::{load_config, Config};
use file_license_auditor::ignore::load_ignore_config;
use file_license_auditor::mapping::load_mapping;

pub fn handle_config(show: bool, validate: bool, quiet: bool) -> Result<ExitCode> {
    if !show && !validate {
        if !quiet {
            eprintln!("Use --show or --validate");
        }
        return Ok(ExitCode::FAILURE);
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            if !quiet {
                eprintln!("❌ Error loading configuration: {:#}", e);
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    if show && !quiet {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    if validate {
        if let Err(e) = validate_documents(&config) {
            if !quiet {
                eprintln!("❌ Configuration validation failed: {}", e);
            }
            return Ok(ExitCode::FAILURE);
        }
        if !quiet {
            println!("✅ Configuration is valid");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn validate_documents(config: &Config) -> Result<()> {
    load_mapping(config.mapping_path())?;

    let (ignore_path, required) = config.ignore_path();
    let ignore = load_ignore_config(&ignore_path, required)?;
    let matcher = file_license_auditor::IgnoreMatcher::new(&ignore.patterns);
    if let Some(bad) = matcher.rejected().first() {
        return Err(bad.clone().into());
    }
    Ok(())
}
