//! FFI page API for the UI shell.
//!
//! # Responsibility
//! - Expose the page controller to a host that owns real layout and events.
//! - Translate host-measured geometry into core layout calls.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One page session per process; calls before mount are no-ops.
//! - Navigation to a section the host has not reported is a silent no-op.
//! - A mounted session holds exactly one scroll and one pointer listener;
//!   the host attaches the listeners named in each snapshot.

use portfolio_core::{
    builtin_catalog, core_version as core_version_inner, init_logging as init_logging_inner,
    mount, parse_section_id, ping as ping_inner, EventBus, ListenerId, ListenerKind, MountGuard,
    NavBarStyle, NavigateOutcome, NoopSurface, PageController, ScrollBehavior, SectionId,
    SectionLayout, SectionRect, ViewportState,
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, OnceLock};

static PAGE_SESSION: OnceLock<Mutex<Option<PageSession>>> = OnceLock::new();
static HOST_LISTENERS: HostListeners = HostListeners {
    table: Mutex::new(ListenerTable {
        next_id: 0,
        live: BTreeMap::new(),
    }),
};

type PageControl = PageController<'static, HostFrame, NoopSurface>;

struct PageSession {
    controller: PageControl,
    _listeners: MountGuard<'static, HostListeners>,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One section bounding box measured by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRectInput {
    /// Section element id (`home|about|experience|skills|projects|contact`).
    pub section_id: String,
    /// Viewport-relative top edge in logical pixels.
    pub top: f64,
    /// Viewport-relative bottom edge in logical pixels.
    pub bottom: f64,
}

/// Render-ready page state returned by every page call.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    /// Whether a page session is active.
    pub mounted: bool,
    pub active_section: String,
    pub is_menu_open: bool,
    /// Nav bar uses the opaque scrolled style.
    pub nav_solid: bool,
    /// Cursor ring top-left corner.
    pub cursor_x: f64,
    pub cursor_y: f64,
    /// Element id the host must smoothly scroll into view, if any.
    pub scroll_target: Option<String>,
    /// Window events the host must keep subscribed (`scroll`, `mousemove`);
    /// empty once unmounted.
    pub listeners: Vec<String>,
    /// Human-readable diagnostics; empty when nothing noteworthy happened.
    pub message: String,
}

/// Starts (or restarts) the page session in its page-load state.
///
/// `present_sections` lists section ids the host rendered; unknown ids are
/// ignored. Scroll reports can add to this set but never shrink it.
#[flutter_rust_bridge::frb(sync)]
pub fn page_mount(present_sections: Vec<String>) -> PageSnapshot {
    let frame = HostFrame {
        present: present_sections
            .iter()
            .filter_map(|id| parse_section_id(id).ok())
            .collect(),
        ..HostFrame::default()
    };

    let mut slot = lock_session();
    *slot = Some(PageSession {
        controller: PageController::new(frame, NoopSurface),
        _listeners: mount(&HOST_LISTENERS),
    });
    log::debug!("event=page_mount module=ffi status=ok");
    snapshot_of(slot.as_ref().map(|session| &session.controller), None, String::new())
}

/// Ends the page session.
#[flutter_rust_bridge::frb(sync)]
pub fn page_unmount() -> PageSnapshot {
    let mut slot = lock_session();
    if slot.take().is_some() {
        log::debug!("event=page_unmount module=ffi status=ok");
    }
    snapshot_of(None, None, String::new())
}

/// Reports one scroll event with freshly measured geometry.
///
/// # FFI contract
/// - Rectangles with unknown section ids are skipped.
/// - `rects` is this frame's geometry only; sections missing from it keep
///   their mount-time presence and stay navigable.
#[flutter_rust_bridge::frb(sync)]
pub fn page_on_scroll(scroll_y: f64, rects: Vec<SectionRectInput>) -> PageSnapshot {
    with_session(|page| {
        page.layout_mut().replace_geometry(scroll_y, &rects);
        page.on_scroll();
        (None, String::new())
    })
}

/// Reports pointer movement in client coordinates.
#[flutter_rust_bridge::frb(sync)]
pub fn page_on_pointer_move(x: f64, y: f64) -> PageSnapshot {
    with_session(|page| {
        page.on_pointer_move(x, y);
        (None, String::new())
    })
}

/// Flips the mobile menu.
#[flutter_rust_bridge::frb(sync)]
pub fn page_toggle_menu() -> PageSnapshot {
    with_session(|page| {
        page.toggle_menu();
        (None, String::new())
    })
}

/// Navigates to `section_id` from any navigation control.
///
/// # FFI contract
/// - On success `scroll_target` names the element to smooth-scroll to.
/// - Unknown ids and unrendered sections leave state unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn page_navigate_to(section_id: String) -> PageSnapshot {
    with_session(|page| match page.navigate_to_id(section_id.as_str()) {
        Ok(NavigateOutcome::Scrolled) => {
            let target = page.layout_mut().take_scroll_target();
            (target.map(|section| section.as_str().to_string()), String::new())
        }
        Ok(NavigateOutcome::SectionMissing) => (None, String::new()),
        Err(err) => (None, format!("page_navigate_to ignored: {err}")),
    })
}

/// Returns current page state without changing it.
#[flutter_rust_bridge::frb(sync)]
pub fn page_snapshot() -> PageSnapshot {
    let slot = lock_session();
    snapshot_of(slot.as_ref().map(|session| &session.controller), None, String::new())
}

/// Returns static page content as JSON for the host renderer.
///
/// Never panics; returns an empty string if serialization fails.
#[flutter_rust_bridge::frb(sync)]
pub fn content_catalog_json() -> String {
    match builtin_catalog().to_json() {
        Ok(json) => json,
        Err(err) => {
            log::error!("event=catalog_export module=ffi status=error error={err}");
            String::new()
        }
    }
}

/// Rendered sections plus the last geometry reported by the host.
#[derive(Debug, Default)]
struct HostFrame {
    scroll_y: f64,
    rects: BTreeMap<SectionId, SectionRect>,
    present: BTreeSet<SectionId>,
    pending_scroll: Option<SectionId>,
}

impl HostFrame {
    fn replace_geometry(&mut self, scroll_y: f64, rects: &[SectionRectInput]) {
        self.scroll_y = scroll_y;
        self.rects = rects
            .iter()
            .filter_map(|input| {
                parse_section_id(input.section_id.as_str())
                    .ok()
                    .map(|section| (section, SectionRect::new(input.top, input.bottom)))
            })
            .collect();
        self.present.extend(self.rects.keys().copied());
    }

    fn take_scroll_target(&mut self) -> Option<SectionId> {
        self.pending_scroll.take()
    }
}

impl SectionLayout for HostFrame {
    fn scroll_offset(&self) -> f64 {
        self.scroll_y
    }

    fn section_rect(&self, section: SectionId) -> Option<SectionRect> {
        self.rects.get(&section).copied()
    }

    fn scroll_into_view(&mut self, section: SectionId, _behavior: ScrollBehavior) -> bool {
        // Host always animates; the snapshot only carries the target.
        if !self.present.contains(&section) {
            return false;
        }
        self.pending_scroll = Some(section);
        true
    }
}

struct ListenerTable {
    next_id: u64,
    live: BTreeMap<ListenerId, ListenerKind>,
}

/// Listener bookkeeping mirrored to the host through `PageSnapshot::listeners`.
struct HostListeners {
    table: Mutex<ListenerTable>,
}

impl HostListeners {
    fn lock_table(&self) -> MutexGuard<'_, ListenerTable> {
        self.table
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn active_event_names(&self) -> Vec<String> {
        self.lock_table()
            .live
            .values()
            .map(|kind| kind.as_str().to_string())
            .collect()
    }
}

impl EventBus for HostListeners {
    fn add_listener(&self, kind: ListenerKind) -> ListenerId {
        let mut table = self.lock_table();
        let id = ListenerId(table.next_id);
        table.next_id += 1;
        table.live.insert(id, kind);
        id
    }

    fn remove_listener(&self, _kind: ListenerKind, id: ListenerId) {
        self.lock_table().live.remove(&id);
    }
}

fn lock_session() -> MutexGuard<'static, Option<PageSession>> {
    PAGE_SESSION
        .get_or_init(|| Mutex::new(None))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn with_session(f: impl FnOnce(&mut PageControl) -> (Option<String>, String)) -> PageSnapshot {
    let mut slot = lock_session();
    match slot.as_mut() {
        Some(session) => {
            let (scroll_target, message) = f(&mut session.controller);
            snapshot_of(Some(&session.controller), scroll_target, message)
        }
        None => snapshot_of(None, None, "page is not mounted".to_string()),
    }
}

fn snapshot_of(
    page: Option<&PageControl>,
    scroll_target: Option<String>,
    message: String,
) -> PageSnapshot {
    let Some(page) = page else {
        let default_state = ViewportState::default();
        return PageSnapshot {
            mounted: false,
            active_section: default_state.active_section.as_str().to_string(),
            is_menu_open: default_state.is_menu_open,
            nav_solid: false,
            cursor_x: 0.0,
            cursor_y: 0.0,
            scroll_target: None,
            listeners: HOST_LISTENERS.active_event_names(),
            message,
        };
    };

    let state = page.state();
    let cursor = page.cursor_overlay_origin();
    PageSnapshot {
        mounted: true,
        active_section: state.active_section.as_str().to_string(),
        is_menu_open: state.is_menu_open,
        nav_solid: state.nav_bar_style() == NavBarStyle::Solid,
        cursor_x: cursor.x,
        cursor_y: cursor.y,
        scroll_target,
        listeners: HOST_LISTENERS.active_event_names(),
        message,
    }
}
