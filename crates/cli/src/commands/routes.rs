use anyhow::Result;
use omnyo_site_core::routes::prerender_routes;

/// Print the prerender route list as a JSON array
pub fn run() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&prerender_routes())?);
    Ok(())
}
