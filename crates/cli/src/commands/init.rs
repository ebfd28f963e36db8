use anyhow::{Context, Result};
use omnyo_site_core::site::FALLBACK_SITE_URL;
use omnyo_site_generator::SITE_TOML;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_NAME: &str = "Omnyo";

/// Escape a string for safe inclusion in a TOML basic string
///
/// Handles the required escape sequences:
/// - Backslash (\\) -> \\\\
/// - Quote (\") -> \\\"
/// - Backspace, form feed, newline, carriage return, tab
///
/// The template keeps its comments, so it is written by hand rather than
/// serialized with the toml crate.
///
/// See: https://toml.io/en/v1.0.0#string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Create a site.toml with defaults in an existing project directory.
///
/// # Errors
///
/// Returns an error if the directory doesn't exist or already holds a
/// site.toml.
pub async fn run(path: PathBuf, name: Option<String>, url: Option<String>) -> Result<()> {
    println!("Initializing site directory: {}", path.display());

    if !path.exists() {
        anyhow::bail!(
            "Directory '{}' does not exist. Create it first: mkdir {}",
            path.display(),
            path.display()
        );
    }

    let site_toml_path = path.join(SITE_TOML);
    if site_toml_path.exists() {
        anyhow::bail!(
            "{} already exists at {}\nHint: Delete it first or use a different directory",
            SITE_TOML,
            site_toml_path.display()
        );
    }

    write_site_toml(
        &path,
        name.as_deref().unwrap_or(DEFAULT_NAME),
        url.as_deref().unwrap_or(FALLBACK_SITE_URL),
    )?;

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  └── site.toml           ← Edit this to set tagline, social links, etc.");

    println!("\nNext steps:");
    println!("  1. Edit site.toml");
    println!("  2. Check: omnyo-site validate {}", path.display());
    println!("  3. Preview: omnyo-site preview {}", path.display());

    Ok(())
}

fn write_site_toml(dir: &Path, name: &str, url: &str) -> Result<()> {
    let content = format!(
        r##"# Site configuration
# Environment variables override some of these values:
#   SITE_URL, BASE_PATH, GA4_ID, GOOGLE_SITE_VERIFICATION,
#   BING_SITE_VERIFICATION, PRERENDER

[site]
name = "{name}"
tagline = "Modern workforce scheduling for businesses that run on shifts"
description = "A smart, mobile-first shift management system for hospitality, retail, and logistics."
url = "{url}"
theme_color = "#F88B24"
logo = "/brand/omnyo-logo.png"
default_theme = "light"
keywords = ["shift management", "employee scheduling", "workforce management"]

[social]
instagram = "https://www.instagram.com/omnyo_scheduling/"
linkedin = "https://www.linkedin.com/company/myomnyo"

# [verification]
# google = ""
# bing = ""

# [analytics]
# ga4_id = "G-XXXXXXXXXX"

[build]
output = "dist"
# locales = "locales"
"##,
        name = toml_escape_string(name),
        url = toml_escape_string(url),
    );

    let path = dir.join(SITE_TOML);
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("✓ Created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnyo_site_core::config::parse_site_toml;
    use tempfile::TempDir;

    #[test]
    fn test_toml_escape_string() {
        assert_eq!(toml_escape_string("Omnyo"), "Omnyo");
        assert_eq!(toml_escape_string(r#"The "Best""#), r#"The \"Best\""#);
        assert_eq!(toml_escape_string(r"C:\sites"), r"C:\\sites");
        assert_eq!(toml_escape_string("a\nb\tc"), "a\\nb\\tc");
    }

    #[tokio::test]
    async fn test_init_creates_parseable_site_toml() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path().to_path_buf(),
            Some("Omnyo \"Beta\"".to_string()),
            Some("https://example.com/app/".to_string()),
        )
        .await
        .unwrap();

        let config = parse_site_toml(dir.path().join(SITE_TOML)).unwrap();
        assert_eq!(config.site.name, "Omnyo \"Beta\"");
        assert_eq!(config.site.url, "https://example.com/app/");
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(config.analytics.ga4_id.is_none());
    }

    #[tokio::test]
    async fn test_init_defaults() {
        let dir = TempDir::new().unwrap();
        run(dir.path().to_path_buf(), None, None).await.unwrap();

        let config = parse_site_toml(dir.path().join(SITE_TOML)).unwrap();
        assert_eq!(config.site.name, "Omnyo");
        assert_eq!(config.site.url, "https://omnyo.com");
    }

    #[tokio::test]
    async fn test_init_refuses_existing_site_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SITE_TOML), "").unwrap();

        let result = run(dir.path().to_path_buf(), None, None).await;
        assert!(result.unwrap_err().to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_init_requires_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let result = run(missing, None, None).await;
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }
}
