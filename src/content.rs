//! Static page content.
//!
//! Everything a non-technical editor may change lives in `content/site.json`.
//! Field names and array order are the contract: arrays render in the order
//! they are written.

use serde::Deserialize;

use crate::error::UiError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub menu: Vec<MenuItem>,
    pub hero: Hero,
    pub services: Services,
    pub academy: Academy,
    pub pricing: Pricing,
    pub testimonials: Testimonials,
    pub contact: Contact,
    pub variants: Variants,
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Content bundled into the binary. Falls back to an empty page if the
    /// bundle does not parse.
    pub fn bundled() -> Self {
        match Self::parse(SITE_JSON) {
            Ok(content) => content,
            Err(err) => {
                log::error!("{}", err);
                Self::default()
            }
        }
    }

    pub fn variant(&self, kind: VariantKind) -> &PageVariant {
        match kind {
            VariantKind::Full => &self.variants.full,
            VariantKind::Classic => &self.variants.classic,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Brand {
    pub mark: String,
    pub name: String,
    pub tagline: String,
    pub book_label: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub target_anchor: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Hero {
    pub eyebrow: String,
    pub title_accent: String,
    pub title: String,
    pub artist_label: String,
    pub artist: String,
    pub actions: Vec<HeroAction>,
    pub poster: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct HeroAction {
    pub label: String,
    #[serde(default)]
    pub outline: bool,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Services {
    pub eyebrow: String,
    pub heading: String,
    pub cta_label: String,
    pub cards: Vec<ServiceCard>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ServiceCard {
    pub title: String,
    pub tag: String,
    pub description: String,
    pub image: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Academy {
    pub stats: Vec<Stat>,
    pub heading: String,
    pub body: String,
    pub courses: Vec<String>,
    pub cta_label: String,
    pub image: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Pricing {
    pub eyebrow: String,
    pub heading: String,
    pub tiers: Vec<PricingTier>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PricingTier {
    pub title: String,
    pub description: String,
    pub lines: Vec<PriceLine>,
    pub cta_label: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PriceLine {
    pub item: String,
    pub price: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Testimonials {
    pub eyebrow: String,
    pub heading: String,
    pub entries: Vec<Testimonial>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Contact {
    pub whatsapp_link: String,
    pub phone_display: String,
    pub email: String,
    pub address_lines: Vec<String>,
    pub hours: String,
    pub visit_heading: String,
    pub touch_heading: String,
    pub enquiry_label: String,
    pub cta_label: String,
    #[serde(default)]
    pub socials: Vec<Social>,
}

/// A social profile shown as a glyph in the footer.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Social {
    pub name: String,
    pub glyph: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantKind {
    Full,
    Classic,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Variants {
    pub full: PageVariant,
    pub classic: PageVariant,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PageVariant {
    pub sections: Vec<Section>,
    pub copyright: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    Services,
    Academy,
    Pricing,
    Testimonials,
    Contact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_parses() {
        let content = SiteContent::parse(SITE_JSON).unwrap();
        assert_eq!(content.brand.name, "ERA");
        assert_eq!(content.services.cards.len(), 3);
        assert_eq!(content.pricing.tiers.len(), 2);
        assert!(!content.testimonials.entries.is_empty());
        assert!(content.contact.whatsapp_link.starts_with("https://wa.me/"));
    }

    #[test]
    fn test_menu_order_is_declaration_order() {
        let content = SiteContent::bundled();
        let labels: Vec<&str> = content.menu.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, ["Home", "Services", "Academy", "Gallery", "Contact"]);
        assert!(content.menu.iter().all(|item| item.target_anchor.starts_with('#')));
    }

    #[test]
    fn test_variants_differ() {
        let content = SiteContent::bundled();
        let full = content.variant(VariantKind::Full);
        let classic = content.variant(VariantKind::Classic);

        assert_eq!(full.sections.first(), Some(&Section::Hero));
        assert_eq!(full.sections.last(), Some(&Section::Contact));
        assert!(full.sections.len() > classic.sections.len());
        assert_ne!(full.copyright, classic.copyright);
    }

    #[test]
    fn test_invalid_json_is_content_error() {
        let err = SiteContent::parse("{\"brand\": 1}").unwrap_err();
        assert!(matches!(err, UiError::Content(_)));
    }

    #[test]
    fn test_footer_lists_socials() {
        let content = SiteContent::bundled();
        let names: Vec<&str> = content.contact.socials.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Instagram", "Facebook"]);
        assert!(content.contact.socials.iter().all(|s| !s.glyph.is_empty()));
    }

    #[test]
    fn test_repeated_entries_are_kept() {
        let tier: PricingTier = serde_json::from_str(
            r#"{
                "title": "BRIDAL",
                "description": "",
                "lines": [
                    {"item": "Airbrush", "price": "15000"},
                    {"item": "Airbrush", "price": "21000"}
                ],
                "cta_label": "BOOK"
            }"#,
        )
        .unwrap();
        let prices: Vec<&str> = tier.lines.iter().map(|line| line.price.as_str()).collect();
        assert_eq!(prices, ["15000", "21000"]);
    }

    #[test]
    fn test_hero_action_outline_defaults_off() {
        let action: HeroAction = serde_json::from_str(r#"{"label": "JOIN"}"#).unwrap();
        assert!(!action.outline);
    }
}
