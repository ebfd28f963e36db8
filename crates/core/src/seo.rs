//! Per-page, per-language SEO metadata.

use crate::site::SiteUrls;
use crate::types::{Language, RouteId};
use serde::Serialize;

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

/// Value of the `max-image-preview` robots directive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePreview {
    #[default]
    Large,
    Standard,
    None,
}

impl ImagePreview {
    pub const fn as_str(self) -> &'static str {
        match self {
            ImagePreview::Large => "large",
            ImagePreview::Standard => "standard",
            ImagePreview::None => "none",
        }
    }
}

/// Robots directives. Unset fields mean the permissive default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RobotsDirectives {
    pub index: Option<bool>,
    pub follow: Option<bool>,
    pub max_image_preview: Option<ImagePreview>,
    pub max_snippet: Option<i32>,
    pub max_video_preview: Option<i32>,
}

/// Structured-data blocks a page asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StructuredData {
    Breadcrumbs,
    SoftwareApplication,
}

/// SEO record for one page in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub canonical_path: &'static str,
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub og_image: &'static str,
    pub og_image_alt: &'static str,
    pub og_image_width: u32,
    pub og_image_height: u32,
    pub twitter_title: &'static str,
    pub twitter_description: &'static str,
    pub twitter_image: &'static str,
    pub robots: Option<RobotsDirectives>,
    pub structured_data: &'static [StructuredData],
    pub breadcrumb: Option<&'static str>,
}

impl SeoEntry {
    pub fn is_indexable(&self) -> bool {
        self.robots.and_then(|r| r.index) != Some(false)
    }

    pub fn is_followable(&self) -> bool {
        self.robots.and_then(|r| r.follow) != Some(false)
    }

    pub fn wants(&self, data: StructuredData) -> bool {
        self.structured_data.contains(&data)
    }

    /// Content of the `robots` meta tag.
    ///
    /// Preview limits are only appended for indexable pages.
    pub fn robots_directive_string(&self) -> String {
        let robots = self.robots.unwrap_or_default();
        let index = self.is_indexable();
        let mut parts = vec![
            String::from(if index { "index" } else { "noindex" }),
            String::from(if self.is_followable() { "follow" } else { "nofollow" }),
        ];

        if index {
            parts.push(format!(
                "max-image-preview:{}",
                robots.max_image_preview.unwrap_or_default().as_str()
            ));
            parts.push(format!("max-snippet:{}", robots.max_snippet.unwrap_or(-1)));
            parts.push(format!(
                "max-video-preview:{}",
                robots.max_video_preview.unwrap_or(-1)
            ));
        }

        parts.join(", ")
    }
}

/// One `<link rel="alternate" hreflang>` target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HreflangLink {
    pub hreflang: &'static str,
    pub href: String,
}

/// Alternate-language links for a page, plus the `x-default` entry
/// pointing at the default language.
pub fn hreflang_links(route: RouteId, urls: &SiteUrls) -> Vec<HreflangLink> {
    let mut links: Vec<HreflangLink> = Language::ALL
        .into_iter()
        .map(|language| HreflangLink {
            hreflang: language.html_tag(),
            href: urls.absolute(route.path(language)),
        })
        .collect();
    links.push(HreflangLink {
        hreflang: "x-default",
        href: urls.absolute(route.path(Language::DEFAULT)),
    });
    links
}

/// Copy that differs per page; everything else is derived
struct PageCopy {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    image_alt: &'static str,
    breadcrumb: &'static str,
}

const NO_INDEX: RobotsDirectives = RobotsDirectives {
    index: Some(false),
    follow: Some(false),
    max_image_preview: None,
    max_snippet: None,
    max_video_preview: None,
};

/// SEO lookup. Total over every route and language.
pub fn seo_entry(route: RouteId, language: Language) -> SeoEntry {
    let copy = page_copy(route, language);
    let (robots, structured_data): (Option<RobotsDirectives>, &'static [StructuredData]) =
        match route {
            RouteId::Home => (None, &[]),
            RouteId::Product => (
                None,
                &[StructuredData::Breadcrumbs, StructuredData::SoftwareApplication],
            ),
            RouteId::Pricing | RouteId::Contact | RouteId::About => {
                (None, &[StructuredData::Breadcrumbs])
            }
            RouteId::NotFound => (Some(NO_INDEX), &[]),
        };

    SeoEntry {
        title: copy.title,
        description: copy.description,
        canonical_path: route.path(language),
        og_title: copy.title,
        og_description: copy.description,
        og_image: copy.image,
        og_image_alt: copy.image_alt,
        og_image_width: OG_IMAGE_WIDTH,
        og_image_height: OG_IMAGE_HEIGHT,
        twitter_title: copy.title,
        twitter_description: copy.description,
        twitter_image: copy.image,
        robots,
        structured_data,
        breadcrumb: Some(copy.breadcrumb),
    }
}

fn page_copy(route: RouteId, language: Language) -> PageCopy {
    match (route, language) {
        (RouteId::Home, Language::En) => PageCopy {
            title: "Omnyo - Modern Shift Management for Growing Teams",
            description: "Replace spreadsheets, paper schedules, and WhatsApp chaos with Omnyo. A smart, mobile-first shift management system for hospitality, retail, and logistics.",
            image: "/og/og-home.png",
            image_alt: "Omnyo shift management platform",
            breadcrumb: "Home",
        },
        (RouteId::Home, Language::Gr) => PageCopy {
            title: "Omnyo - Σύγχρονη Διαχείριση Βαρδιών για Αναπτυσσόμενες Ομάδες",
            description: "Αντικαταστήστε τα υπολογιστικά φύλλα, τα χάρτινα προγράμματα και το χάος του WhatsApp με το Omnyo. Ένα έξυπνο, mobile-first σύστημα διαχείρισης βαρδιών για φιλοξενία, λιανική και logistics.",
            image: "/og/og-home.png",
            image_alt: "Πλατφόρμα διαχείρισης βαρδιών Omnyo",
            breadcrumb: "Αρχική",
        },
        (RouteId::Product, Language::En) => PageCopy {
            title: "Product - How Omnyo Works | Shift Management Features",
            description: "Discover how Omnyo simplifies shift scheduling for managers and employees. Visual builder, real-time notifications, and mobile access.",
            image: "/og/og-product.png",
            image_alt: "Omnyo product overview",
            breadcrumb: "Product",
        },
        (RouteId::Product, Language::Gr) => PageCopy {
            title: "Προϊόν - Πώς Λειτουργεί το Omnyo | Χαρακτηριστικά Βαρδιών",
            description: "Ανακαλύψτε πώς το Omnyo απλοποιεί τον προγραμματισμό βαρδιών για managers και εργαζομένους. Οπτικός δημιουργός, ειδοποιήσεις σε πραγματικό χρόνο και πρόσβαση από κινητό.",
            image: "/og/og-product.png",
            image_alt: "Επισκόπηση προϊόντος Omnyo",
            breadcrumb: "Προϊόν",
        },
        (RouteId::Pricing, Language::En) => PageCopy {
            title: "Pricing - Early Access Program | Omnyo",
            description: "Join Omnyo's early access pilot program. Full features and dedicated support for early adopters.",
            image: "/og/og-pricing.png",
            image_alt: "Omnyo early access program",
            breadcrumb: "Pricing",
        },
        (RouteId::Pricing, Language::Gr) => PageCopy {
            title: "Τιμολόγηση - Πρόγραμμα Πρόωρης Πρόσβασης | Omnyo",
            description: "Εγγραφείτε στο πιλοτικό πρόγραμμα πρόωρης πρόσβασης του Omnyo. Πλήρη χαρακτηριστικά και αφιερωμένη υποστήριξη για πρώτους χρήστες.",
            image: "/og/og-pricing.png",
            image_alt: "Πρόγραμμα πρόωρης πρόσβασης Omnyo",
            breadcrumb: "Τιμολόγηση",
        },
        (RouteId::Contact, Language::En) => PageCopy {
            title: "Contact - Get in Touch | Omnyo",
            description: "Contact Omnyo to learn more about our shift management platform or join our early access waitlist.",
            image: "/og/og-contact.png",
            image_alt: "Contact Omnyo",
            breadcrumb: "Contact",
        },
        (RouteId::Contact, Language::Gr) => PageCopy {
            title: "Επικοινωνία - Επικοινωνήστε Μαζί Μας | Omnyo",
            description: "Επικοινωνήστε με το Omnyo για να μάθετε περισσότερα για την πλατφόρμα διαχείρισης βαρδιών ή να εγγραφείτε στη λίστα αναμονής πρόωρης πρόσβασης.",
            image: "/og/og-contact.png",
            image_alt: "Επικοινωνήστε με το Omnyo",
            breadcrumb: "Επικοινωνία",
        },
        (RouteId::About, Language::En) => PageCopy {
            title: "About - Our Mission | Omnyo",
            description: "Learn about Omnyo's mission to modernize shift scheduling for businesses that run on shifts. Our values: simplicity, fairness, and flexibility.",
            image: "/og/og-about.png",
            image_alt: "About Omnyo",
            breadcrumb: "About",
        },
        (RouteId::About, Language::Gr) => PageCopy {
            title: "Σχετικά - Η Αποστολή Μας | Omnyo",
            description: "Μάθετε για την αποστολή του Omnyo να εκσυγχρονίσει τον προγραμματισμό βαρδιών για επιχειρήσεις που λειτουργούν με βάρδιες. Αξίες: απλότητα, δικαιοσύνη και ευελιξία.",
            image: "/og/og-about.png",
            image_alt: "Σχετικά με το Omnyo",
            breadcrumb: "Σχετικά",
        },
        (RouteId::NotFound, Language::En) => PageCopy {
            title: "Page Not Found | Omnyo",
            description: "Sorry, the page you're looking for doesn't exist.",
            image: "/og/og-default.png",
            image_alt: "Omnyo shift management platform",
            breadcrumb: "404",
        },
        (RouteId::NotFound, Language::Gr) => PageCopy {
            title: "Δεν Βρέθηκε Σελίδα | Omnyo",
            description: "Η σελίδα που αναζητάτε δεν υπάρχει.",
            image: "/og/og-default.png",
            image_alt: "Πλατφόρμα διαχείρισης βαρδιών Omnyo",
            breadcrumb: "404",
        },
    }
}
