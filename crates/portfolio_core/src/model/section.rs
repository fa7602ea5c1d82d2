//! Page section identity.
//!
//! # Responsibility
//! - Define the closed, ordered set of page sections.
//! - Parse host-supplied section ids at string boundaries.
//!
//! # Invariants
//! - Exactly six sections exist, always in page order.
//! - `as_str()` output doubles as the rendered element id.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the fixed named regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in page (and scroll-spy scan) order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Stable element id used by the rendered tree.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => SECTION_HOME,
            Self::About => SECTION_ABOUT,
            Self::Experience => SECTION_EXPERIENCE,
            Self::Skills => SECTION_SKILLS,
            Self::Projects => SECTION_PROJECTS,
            Self::Contact => SECTION_CONTACT,
        }
    }

    /// Navigation label shown in desktop nav and mobile menu.
    pub fn display_label(self) -> &'static str {
        self.descriptor().display_label
    }

    /// Static descriptor for this section.
    pub fn descriptor(self) -> &'static SectionDescriptor {
        // SECTIONS follows enum declaration order.
        &SECTIONS[self as usize]
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = SectionIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_section_id(value)
    }
}

pub const SECTION_HOME: &str = "home";
pub const SECTION_ABOUT: &str = "about";
pub const SECTION_EXPERIENCE: &str = "experience";
pub const SECTION_SKILLS: &str = "skills";
pub const SECTION_PROJECTS: &str = "projects";
pub const SECTION_CONTACT: &str = "contact";

/// Static, read-only navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub display_label: &'static str,
}

/// Navigation table in render order.
pub static SECTIONS: [SectionDescriptor; 6] = [
    SectionDescriptor {
        id: SectionId::Home,
        display_label: "Home",
    },
    SectionDescriptor {
        id: SectionId::About,
        display_label: "About",
    },
    SectionDescriptor {
        id: SectionId::Experience,
        display_label: "Experience",
    },
    SectionDescriptor {
        id: SectionId::Skills,
        display_label: "Skills",
    },
    SectionDescriptor {
        id: SectionId::Projects,
        display_label: "Projects",
    },
    SectionDescriptor {
        id: SectionId::Contact,
        display_label: "Contact",
    },
];

/// Parses one section id as rendered in the page.
///
/// Surrounding whitespace is ignored; matching is otherwise exact.
pub fn parse_section_id(value: &str) -> Result<SectionId, SectionIdError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(SectionIdError::EmptySectionId);
    }

    match normalized {
        SECTION_HOME => Ok(SectionId::Home),
        SECTION_ABOUT => Ok(SectionId::About),
        SECTION_EXPERIENCE => Ok(SectionId::Experience),
        SECTION_SKILLS => Ok(SectionId::Skills),
        SECTION_PROJECTS => Ok(SectionId::Projects),
        SECTION_CONTACT => Ok(SectionId::Contact),
        other => Err(SectionIdError::UnknownSectionId(other.to_string())),
    }
}

/// Section id parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionIdError {
    EmptySectionId,
    UnknownSectionId(String),
}

impl Display for SectionIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySectionId => write!(f, "section id must not be empty"),
            Self::UnknownSectionId(value) => write!(f, "unknown section id: {value}"),
        }
    }
}

impl Error for SectionIdError {}
