//! Content catalog shape.
//!
//! # Responsibility
//! - Describe every piece of static page copy handed to the renderer.
//! - Keep the serialized shape stable for host renderers reading JSON.
//!
//! # Invariants
//! - Vector order is render order.
//! - Icons and accents are symbolic; the host maps them to glyphs and styles.

use crate::model::section::SectionId;
use serde::Serialize;

/// Decorative glyph names rendered by the host icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Mail,
    Phone,
    Linkedin,
    Code,
    Database,
    Server,
    Terminal,
    ChevronDown,
    Menu,
    Close,
    ExternalLink,
    Sparkles,
}

/// Accent palette entry used for borders, chips and timeline dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Cyan,
    Blue,
    Purple,
    Green,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    /// Shown as the nav logo and inside the hero avatar.
    pub initials: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
}

/// Where a hero call-to-action leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroTarget {
    /// In-page navigation through the page controller.
    Section(SectionId),
    /// Static outbound link.
    Link(&'static str),
}

/// One hero call-to-action, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroAction {
    /// `None` for icon-only controls.
    pub label: Option<&'static str>,
    pub icon: Icon,
    pub target: HeroTarget,
}

impl HeroAction {
    /// Section this action navigates to, if it is in-page.
    pub fn section(&self) -> Option<SectionId> {
        match self.target {
            HeroTarget::Section(section) => Some(section),
            HeroTarget::Link(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub detail: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct About {
    pub lead: &'static str,
    pub body: &'static str,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    Employment,
    Education,
}

/// One card on the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub period: &'static str,
    pub title: &'static str,
    /// Secondary lines under the title (employer, field, institution).
    pub details: Vec<&'static str>,
    pub bullets: Vec<&'static str>,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub label: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub items: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
    pub practices: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: Vec<&'static str>,
    pub impact: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Profile,
}

/// Static outbound link; none of these are live integrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub display: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    /// Opens in a new browsing context with `rel="noopener noreferrer"`.
    pub opens_new_context: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub heading: &'static str,
    pub intro: &'static str,
    pub links: Vec<ContactLink>,
}

/// All static page copy, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentCatalog {
    pub profile: Profile,
    pub hero_actions: Vec<HeroAction>,
    pub about: About,
    pub timeline: Vec<TimelineEntry>,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub contact: Contact,
    pub footer: &'static str,
}

impl ContentCatalog {
    /// Looks up the first contact link of `kind`.
    pub fn contact_link(&self, kind: ContactKind) -> Option<&ContactLink> {
        self.contact.links.iter().find(|link| link.kind == kind)
    }

    /// Serializes the catalog for host renderers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
