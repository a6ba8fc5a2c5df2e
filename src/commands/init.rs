use anyhow::Result;
use file_license_auditor::init;

pub fn handle_init(force: bool, quiet: bool) -> Result<()> {
    let written = init::generate_config(force)?;

    if !quiet {
        for path in &written {
            println!("✅ Wrote {}", path.display());
        }
    }

    Ok(())
}
