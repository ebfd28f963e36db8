use omnyo_site_core::SiteEnv;
use omnyo_site_validator::validate_site;
use std::path::PathBuf;

use super::load_site;

pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating site at: {}", path.display());

    let site = load_site(&path)?;
    println!("✓ site.toml valid");
    println!("  Site: {} ({})", site.config.site.name, site.urls.root());

    let report = validate_site(&site.config, &site.translations, &SiteEnv::from_env());

    for line in &report.info {
        println!("  {}", line);
    }
    for warning in &report.warnings {
        eprintln!("⚠ {}", warning);
    }
    for error in &report.errors {
        eprintln!("✗ {}", error);
    }

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!(
        "\n✓ Validation passed ({} warning(s))",
        report.warnings.len()
    );
    Ok(())
}
