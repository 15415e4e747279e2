//! Static content records rendered by the page sections.
//!
//! Records are supplied by an external catalog source and are never mutated
//! once loaded. Each record exposes the identifier used as its reconciliation
//! key through [`Keyed`].

use serde::{Deserialize, Serialize};

/// A record that can be projected into a keyed visual node.
pub trait Keyed {
    /// Stable identifier used to match a rendered node to its source record.
    fn key(&self) -> &str;
}

/// In-page navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Text shown in the navigation bar and footer (e.g., "Expertise").
    pub label: String,
    /// Anchor reference into the page (e.g., "#expertise").
    pub href: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Icon tags understood by the skills grid.
///
/// Any tag outside the known set deserializes to [`IconTag::Unknown`] so a
/// catalog with a misspelled or newer icon still loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IconTag {
    Bot,
    BarChart3,
    PenTool,
    #[default]
    Target,
    #[serde(other)]
    Unknown,
}

/// A single expertise card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: IconTag,
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntry {
    /// Stable identifier, unique within the portfolio list.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Cover image URL. Displayed as text only; never fetched.
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A partner quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    /// Quote text.
    pub content: String,
    pub image: String,
}

/// The four ordered content lists that drive the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCatalog {
    #[serde(default)]
    pub nav_items: Vec<NavItem>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioEntry>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl Keyed for NavItem {
    fn key(&self) -> &str {
        &self.label
    }
}

impl Keyed for Skill {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for PortfolioEntry {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Testimonial {
    fn key(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_icon_tags_deserialize_to_unknown() {
        let skill: Skill = serde_json::from_str(r#"{"name":"Ops","description":"d","icon":"Sparkles"}"#).expect("parse skill");
        assert_eq!(skill.icon, IconTag::Unknown);

        let skill: Skill = serde_json::from_str(r#"{"name":"Ops","description":"d","icon":"Unknown"}"#).expect("parse skill");
        assert_eq!(skill.icon, IconTag::Unknown);
    }

    #[test]
    fn missing_icon_defaults_to_target() {
        let skill: Skill = serde_json::from_str(r#"{"name":"Ops","description":"d"}"#).expect("parse skill");
        assert_eq!(skill.icon, IconTag::Target);
    }

    #[test]
    fn catalog_reads_camel_case_lists_from_yaml() {
        let yaml = r##"
navItems:
  - label: Expertise
    href: "#expertise"
portfolio:
  - id: lead-engine
    title: Lead Engine
    description: n8n pipeline
    image: https://picsum.photos/seed/lead/800/600
    category: Automation
    tags: [n8n, AI]
"##;
        let catalog: ContentCatalog = serde_yaml::from_str(yaml).expect("parse catalog");
        assert_eq!(catalog.nav_items[0].key(), "Expertise");
        assert_eq!(catalog.portfolio[0].key(), "lead-engine");
        assert_eq!(catalog.portfolio[0].tags, vec!["n8n", "AI"]);
        assert!(catalog.skills.is_empty());
        assert!(catalog.testimonials.is_empty());
    }

    #[test]
    fn keys_follow_the_identifying_field() {
        let testimonial = Testimonial {
            name: "Ayesha Khan".into(),
            role: "CMO".into(),
            company: "Aurora".into(),
            content: "Great".into(),
            image: "https://picsum.photos/seed/a/100/100".into(),
        };
        assert_eq!(testimonial.key(), "Ayesha Khan");
        assert_eq!(NavItem::new("Work", "#portfolio").key(), "Work");
    }
}
