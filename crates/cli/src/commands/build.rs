use anyhow::{Context, Result};
use omnyo_site_generator::{BuildOptions, generate_site};
use std::path::PathBuf;

use super::load_site;

/// Build the static artifacts for deployment
pub async fn run(path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());

    let site = load_site(&path)?;
    let output = output.unwrap_or_else(|| path.join(&site.config.build.output));
    println!("   Output: {}", output.display());
    println!();

    println!("✓ Loaded: {}", site.config.site.name);
    println!("  Origin: {}", site.urls.origin());
    if !site.urls.base_path().is_empty() {
        println!("  Base path: {}", site.urls.base_path());
    }
    println!();

    let options = BuildOptions::today();
    let generated = generate_site(&site, &options);

    if generated.pages.is_empty() {
        println!("📄 Page shells skipped (prerender disabled)");
    } else {
        println!("📄 Rendering {} page shells...", generated.pages.len());
    }
    println!("🗺  Generating sitemap.xml and robots.txt...");

    let written = generated
        .write_to(&output)
        .with_context(|| format!("Failed to write site to {}", output.display()))?;
    println!("   ✓ Wrote {} files", written);

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();

    Ok(())
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

    #[tokio::test]
    async fn test_build_writes_artifacts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), SITE_TOML).unwrap();
        let output = dir.path().join("out");

        run(dir.path().to_path_buf(), Some(output.clone()))
            .await
            .unwrap();

        assert!(output.join("sitemap.xml").exists());
        assert!(output.join("robots.txt").exists());
        assert!(output.join("404.html").exists());
        let sitemap = fs::read_to_string(output.join("sitemap.xml")).unwrap();
        assert_eq!(sitemap.matches("<url>").count(), 10);
    }

    #[tokio::test]
    async fn test_build_requires_site_toml() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path().to_path_buf(), None).await;
        assert!(result.unwrap_err().to_string().contains("site.toml not found"));
    }
}
