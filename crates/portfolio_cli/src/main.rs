//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `portfolio_core` linkage without a UI shell.
//! - Dump the content catalog and replay one scroll-spy pass.
//!
//! Usage:
//!   portfolio_cli
//!   portfolio_cli catalog
//!   portfolio_cli spy <scroll_y> [<section>=<top>:<bottom> ...]

use clap::{Parser, Subcommand};
use portfolio_core::{
    builtin_catalog, parse_section_id, NoopSurface, PageController, ScrollBehavior, SectionId,
    SectionLayout, SectionRect, ViewportState,
};
use std::collections::BTreeMap;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "portfolio_cli", version, about = "Portfolio page core smoke CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the built-in content catalog as JSON.
    Catalog,
    /// Replay one scroll event against fixed section rects.
    Spy {
        #[arg(allow_negative_numbers = true)]
        scroll_y: f64,
        /// Section rect as `<section>=<top>:<bottom>`, viewport-relative.
        #[arg(value_parser = parse_rect_arg)]
        rects: Vec<RectArg>,
    },
}

/// One measured section passed on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RectArg {
    section: SectionId,
    rect: SectionRect,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        None => {
            println!("portfolio_core ping={}", portfolio_core::ping());
            println!("portfolio_core version={}", portfolio_core::core_version());
            Ok(())
        }
        Some(Commands::Catalog) => print_catalog(),
        Some(Commands::Spy { scroll_y, rects }) => {
            let state = run_spy(scroll_y, &rects);
            println!("active_section={}", state.active_section);
            println!("scrolled={}", state.has_scrolled_past_threshold);
            println!("menu_open={}", state.is_menu_open);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::from(2)
        }
    }
}

fn print_catalog() -> Result<(), String> {
    let json = serde_json::to_string_pretty(builtin_catalog())
        .map_err(|err| format!("catalog serialization failed: {err}"))?;
    println!("{json}");
    Ok(())
}

/// Mounts a fresh page over `rects`, delivers one scroll event and returns the state.
fn run_spy(scroll_y: f64, rects: &[RectArg]) -> ViewportState {
    let layout = StaticLayout {
        scroll_y,
        rects: rects.iter().map(|arg| (arg.section, arg.rect)).collect(),
    };

    let mut page = PageController::new(layout, NoopSurface);
    page.on_scroll();
    *page.state()
}

fn parse_rect_arg(spec: &str) -> Result<RectArg, String> {
    parse_rect(spec).map(|(section, rect)| RectArg { section, rect })
}

/// Parses `<section>=<top>:<bottom>`.
fn parse_rect(spec: &str) -> Result<(SectionId, SectionRect), String> {
    let (id, bounds) = spec
        .split_once('=')
        .ok_or_else(|| format!("expected <section>=<top>:<bottom>, got `{spec}`"))?;
    let section = parse_section_id(id).map_err(|err| err.to_string())?;
    let (top, bottom) = bounds
        .split_once(':')
        .ok_or_else(|| format!("expected <top>:<bottom>, got `{bounds}`"))?;
    let top = top
        .parse::<f64>()
        .map_err(|err| format!("invalid top `{top}`: {err}"))?;
    let bottom = bottom
        .parse::<f64>()
        .map_err(|err| format!("invalid bottom `{bottom}`: {err}"))?;
    Ok((section, SectionRect::new(top, bottom)))
}

struct StaticLayout {
    scroll_y: f64,
    rects: BTreeMap<SectionId, SectionRect>,
}

impl SectionLayout for StaticLayout {
    fn scroll_offset(&self) -> f64 {
        self.scroll_y
    }

    fn section_rect(&self, section: SectionId) -> Option<SectionRect> {
        self.rects.get(&section).copied()
    }

    fn scroll_into_view(&mut self, section: SectionId, _behavior: ScrollBehavior) -> bool {
        self.rects.contains_key(&section)
    }
}
