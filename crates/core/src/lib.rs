pub mod config;
pub mod error;
pub mod i18n;
pub mod router;
pub mod routes;
pub mod seo;
pub mod site;
pub mod types;

pub use config::{SiteConfig, parse_site_toml};
pub use error::{Error, Result};
pub use i18n::{Translations, UiKey};
pub use routes::{resolve_route, routes};
pub use seo::{SeoEntry, seo_entry};
pub use site::{SiteEnv, SiteUrls};
pub use types::*;
