pub mod build;
pub mod init;
pub mod preview;
pub mod route;
pub mod routes;
pub mod validate;

use anyhow::{Context, Result};
use omnyo_site_core::SiteEnv;
use omnyo_site_core::config::EnvOverrides;
use omnyo_site_generator::Site;
use std::path::Path;

/// Load the project, with `<project>/.env` filling in unset variables
pub fn load_site(project_dir: &Path) -> Result<Site> {
    let env_file = project_dir.join(".env");
    if env_file.exists() {
        dotenvy::from_path(&env_file)
            .with_context(|| format!("Failed to load {}", env_file.display()))?;
        tracing::debug!(path = %env_file.display(), "loaded env file");
    }
    Site::load(project_dir, &SiteEnv::from_env(), &EnvOverrides::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SITE_TOML: &str = r##"
[site]
name = "Omnyo"
tagline = "Modern workforce scheduling"
description = "Shift management for small teams"
url = "https://omnyo.com"
theme_color = "#F88B24"
logo = "/brand/omnyo-logo.png"

[social]
instagram = "https://www.instagram.com/omnyo_scheduling/"
linkedin = "https://www.linkedin.com/company/myomnyo"
"##;

    #[test]
    fn test_load_site_without_env_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), SITE_TOML).unwrap();

        let site = load_site(dir.path()).unwrap();
        assert_eq!(site.config.site.name, "Omnyo");
    }

    #[test]
    fn test_load_site_rejects_malformed_env_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), SITE_TOML).unwrap();
        fs::write(dir.path().join(".env"), "OMNYO_SITE_BROKEN=\"unterminated\n").unwrap();

        let err = load_site(dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load"));
        assert!(err.to_string().ends_with(".env"));
    }
}
