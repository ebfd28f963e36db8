use crate::error::{Error, Result};
use crate::site::non_blank;
use crate::types::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const GA4_ID_VAR: &str = "GA4_ID";
pub const GOOGLE_VERIFICATION_VAR: &str = "GOOGLE_SITE_VERIFICATION";
pub const BING_VERIFICATION_VAR: &str = "BING_SITE_VERIFICATION";
pub const PRERENDER_VAR: &str = "PRERENDER";

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: SiteInfo,
    social: Social,
    #[serde(default)]
    verification: Verification,
    #[serde(default)]
    analytics: Analytics,
    #[serde(default)]
    build: RawBuild,
}

#[derive(Debug, Default, Deserialize)]
struct RawBuild {
    output: Option<String>,
    locales: Option<String>,
    prerender: Option<bool>,
}

/// Complete site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub social: Social,
    pub verification: Verification,
    pub analytics: Analytics,
    pub build: BuildConfig,
}

/// Site identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Fallback origin when no site URL override is set
    pub url: String,
    pub theme_color: String,
    pub logo: String,
    #[serde(default)]
    pub default_theme: Theme,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Social profiles, emitted as Organization `sameAs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Social {
    pub linkedin: String,
    pub instagram: String,
}

/// Search console verification tokens
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Verification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bing: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analytics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ga4_id: Option<String>,
}

/// Build output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory, relative to the project directory
    pub output: PathBuf,
    /// Directory of `<code>.json` catalogues replacing the embedded ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locales: Option<PathBuf>,
    /// Emit a static page shell per route
    pub prerender: bool,
}

/// Values taken from the environment that win over site.toml
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub ga4_id: Option<String>,
    pub google_verification: Option<String>,
    pub bing_verification: Option<String>,
    pub prerender: Option<bool>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        let var = |name: &str| non_blank(std::env::var(name).ok());
        Self {
            ga4_id: var(GA4_ID_VAR),
            google_verification: var(GOOGLE_VERIFICATION_VAR),
            bing_verification: var(BING_VERIFICATION_VAR),
            prerender: var(PRERENDER_VAR).map(|v| v.trim() != "false"),
        }
    }
}

impl SiteConfig {
    /// Apply environment overrides on top of the file values
    pub fn with_overrides(mut self, overrides: &EnvOverrides) -> Self {
        if let Some(id) = &overrides.ga4_id {
            self.analytics.ga4_id = Some(id.clone());
        }
        if let Some(token) = &overrides.google_verification {
            self.verification.google = Some(token.clone());
        }
        if let Some(token) = &overrides.bing_verification {
            self.verification.bing = Some(token.clone());
        }
        if let Some(prerender) = overrides.prerender {
            self.build.prerender = prerender;
        }
        self
    }
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    if raw.site.name.trim().is_empty() {
        return Err(Error::ConfigParse("site.name must not be empty".to_string()));
    }

    let output = validate_path(raw.build.output.as_deref().unwrap_or("dist"), "build.output")?;
    let locales = match raw.build.locales {
        Some(dir) => Some(validate_path(&dir, "build.locales")?),
        None => None,
    };

    Ok(SiteConfig {
        site: raw.site,
        social: raw.social,
        verification: Verification {
            google: non_blank(raw.verification.google),
            bing: non_blank(raw.verification.bing),
        },
        analytics: Analytics {
            ga4_id: non_blank(raw.analytics.ga4_id),
        },
        build: BuildConfig {
            output,
            locales,
            prerender: raw.build.prerender.unwrap_or(true),
        },
    })
}

/// Validate and convert a path string to PathBuf.
///
/// Rejects absolute paths and parent directory references (`..`) so that
/// a site.toml can only point inside its own project directory.
fn validate_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    let path = Path::new(path_str);

    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    if path.is_absolute() {
        return Err(Error::ConfigParse(format!(
            "Absolute paths not allowed in '{}': '{}'. Use relative paths only.",
            field_name, path_str
        )));
    }

    for component in path.components() {
        if component == std::path::Component::ParentDir {
            return Err(Error::ConfigParse(format!(
                "Parent directory references (..) not allowed in '{}': '{}'",
                field_name, path_str
            )));
        }
    }

    Ok(path.to_path_buf())
}
