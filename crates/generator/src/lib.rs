// Static site generation: page shells, sitemap.xml and robots.txt

pub mod head;
pub mod html;
pub mod page;
pub mod robots;
pub mod sitemap;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use omnyo_site_core::config::EnvOverrides;
use omnyo_site_core::{
    Language, RenderContext, RouteId, SiteConfig, SiteEnv, SiteUrls, Translations,
    parse_site_toml,
};
use std::fs;
use std::path::Path;

pub const SITE_TOML: &str = "site.toml";
pub const NOT_FOUND_FILE: &str = "404.html";

/// Everything a build needs, resolved once
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub translations: Translations,
    pub urls: SiteUrls,
}

impl Site {
    pub fn new(config: SiteConfig, translations: Translations, env: &SiteEnv) -> Self {
        let urls = SiteUrls::resolve(env, &config.site.url);
        Self {
            config,
            translations,
            urls,
        }
    }

    /// Load site.toml and catalogues from a project directory
    pub fn load(project_dir: &Path, env: &SiteEnv, overrides: &EnvOverrides) -> Result<Self> {
        if !project_dir.exists() {
            anyhow::bail!(
                "Project directory does not exist: {}",
                project_dir.display()
            );
        }

        let site_toml = project_dir.join(SITE_TOML);
        if !site_toml.exists() {
            anyhow::bail!(
                "{} not found in {}\nRun 'omnyo-site init {}' first",
                SITE_TOML,
                project_dir.display(),
                project_dir.display()
            );
        }

        let config = parse_site_toml(&site_toml)
            .with_context(|| format!("Failed to parse {}", site_toml.display()))?
            .with_overrides(overrides);

        let translations = match &config.build.locales {
            Some(dir) => {
                let dir = project_dir.join(dir);
                Translations::from_dir(&dir)
                    .with_context(|| format!("Failed to load catalogues from {}", dir.display()))?
            }
            None => Translations::embedded().context("Failed to load embedded catalogues")?,
        };

        Ok(Self::new(config, translations, env))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Add the live reload script to every page
    pub is_preview: bool,
    /// Date stamped on every sitemap entry
    pub lastmod: NaiveDate,
}

impl BuildOptions {
    pub fn today() -> Self {
        Self {
            is_preview: false,
            lastmod: chrono::Utc::now().date_naive(),
        }
    }
}

pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,   // (path, html)
    pub assets: Vec<(String, Vec<u8>)>, // (path, data)
}

impl GeneratedSite {
    /// Write every page and asset below `output`. Returns the file count.
    pub fn write_to(&self, output: &Path) -> Result<usize> {
        for (path, html) in &self.pages {
            write_file(&output.join(path), html.as_bytes())?;
        }
        for (path, data) in &self.assets {
            write_file(&output.join(path), data)?;
        }
        let count = self.pages.len() + self.assets.len();
        tracing::info!(output = %output.display(), files = count, "site written");
        Ok(count)
    }
}

/// Render the whole site in memory
pub fn generate_site(site: &Site, options: &BuildOptions) -> GeneratedSite {
    let mut pages = Vec::new();

    if site.config.build.prerender {
        for language in Language::ALL {
            let ctx = RenderContext::new(language, site.config.site.default_theme);
            for route in RouteId::ALL {
                let file = if route == RouteId::NotFound && language.is_default() {
                    NOT_FOUND_FILE.to_string()
                } else {
                    page::page_file(route.path(language))
                };
                pages.push((file, page::render_page(site, route, ctx, options.is_preview)));
            }
        }
    } else {
        tracing::debug!("prerender disabled, skipping page shells");
    }

    let sitemap = sitemap::Sitemap::build(&site.urls, options.lastmod);
    tracing::debug!(urls = sitemap.len(), "sitemap built");
    let assets = vec![
        (
            sitemap::SITEMAP_FILE.to_string(),
            sitemap.to_xml().into_bytes(),
        ),
        (
            robots::ROBOTS_FILE.to_string(),
            robots::robots_txt(&site.urls).into_bytes(),
        ),
    ];

    GeneratedSite { pages, assets }
}

/// Write a file, creating its parent directories
pub(crate) fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))
}
