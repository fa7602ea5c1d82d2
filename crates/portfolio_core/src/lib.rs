//! Core state and content for the single-page portfolio.
//! This crate is the single source of truth for navigation behavior.

pub mod config;
pub mod content;
pub mod controller;
pub mod logging;
pub mod model;
pub mod spy;

pub use config::PageConfig;
pub use content::builtin::builtin_catalog;
pub use content::catalog::{
    Accent, ContactKind, ContactLink, ContentCatalog, HeroAction, HeroTarget, Icon, Project,
    SkillCategory, TimelineEntry, TimelineKind,
};
pub use controller::host::{NoopSurface, RenderSurface, ScrollBehavior, SectionLayout};
pub use controller::mount::{mount, EventBus, ListenerId, ListenerKind, MountGuard, Subscription};
pub use controller::page::{NavigateOutcome, PageController};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::section::{parse_section_id, SectionDescriptor, SectionId, SectionIdError, SECTIONS};
pub use model::viewport::{NavBarStyle, PointerPosition, SectionRect, ViewportState};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
