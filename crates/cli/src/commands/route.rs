use anyhow::Result;
use omnyo_site_core::router::{Location, Navigator, switch_language};
use omnyo_site_core::{Language, resolve_route};

/// Navigator that records the target instead of moving anywhere
#[derive(Default)]
struct Recorder {
    target: Option<Location>,
}

impl Navigator for Recorder {
    fn navigate(&mut self, to: &Location) {
        self.target = Some(to.clone());
    }
}

/// Explain how `url` resolves and, with `to`, where a language switch lands
pub fn run(url: &str, to: Option<&str>) -> Result<()> {
    let current = Location::parse(url);
    let (route, language) = resolve_route(&current.path);

    println!("Path:     {}", current.path);
    println!("Route:    {}", route);
    println!("Language: {} ({})", language, language.html_tag());

    if let Some(code) = to {
        let Some(target) = Language::from_code(code) else {
            anyhow::bail!("Unknown language code: '{}' (expected en, gr or el)", code);
        };
        println!("Switch:   {}", switch_href(&current, target));
    }

    Ok(())
}

fn switch_href(current: &Location, target: Language) -> String {
    let mut recorder = Recorder::default();
    if switch_language(&mut recorder, current, target) {
        recorder
            .target
            .map(|loc| loc.to_string())
            .unwrap_or_else(|| current.to_string())
    } else {
        current.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_href() {
        let current = Location::parse("/contact?ref=nav#form");
        assert_eq!(switch_href(&current, Language::Gr), "/el/contact?ref=nav#form");
        assert_eq!(switch_href(&current, Language::En), "/contact?ref=nav#form");
        assert_eq!(switch_href(&Location::parse("/el"), Language::En), "/");
    }

    #[test]
    fn test_run_rejects_unknown_language() {
        let err = run("/pricing", Some("de")).unwrap_err();
        assert!(err.to_string().contains("Unknown language code"));
        assert!(run("/pricing", Some("el")).is_ok());
    }
}
