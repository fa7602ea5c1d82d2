mod common;

use common::{FakeLayout, RecordingSurface};
use portfolio_core::{
    NavBarStyle, NavigateOutcome, PageController, PointerPosition, ScrollBehavior, SectionId,
    SectionIdError, SectionRect,
};

fn controller_with(layout: FakeLayout) -> PageController<'static, FakeLayout, RecordingSurface> {
    PageController::new(layout, RecordingSurface::default())
}

#[test]
fn fresh_controller_starts_at_home_closed_and_unscrolled() {
    let controller = controller_with(FakeLayout::all_sections());
    let state = controller.state();

    assert_eq!(state.active_section, SectionId::Home);
    assert!(!state.is_menu_open);
    assert!(!state.has_scrolled_past_threshold);
    assert_eq!(state.pointer, PointerPosition::default());
    assert!(controller.surface().frames.is_empty());
}

#[test]
fn navigate_sets_active_and_closes_menu_for_every_section() {
    for target in SectionId::ALL {
        for menu_open in [false, true] {
            let mut controller = controller_with(FakeLayout::all_sections());
            controller.navigate_to(SectionId::Contact);
            if menu_open {
                controller.toggle_menu();
            }

            let outcome = controller.navigate_to(target);

            assert_eq!(outcome, NavigateOutcome::Scrolled);
            assert_eq!(controller.state().active_section, target);
            assert!(!controller.state().is_menu_open);
            assert_eq!(
                controller.layout().scroll_requests.last(),
                Some(&(target, ScrollBehavior::Smooth))
            );
        }
    }
}

#[test]
fn toggle_menu_twice_restores_original_value() {
    let mut controller = controller_with(FakeLayout::all_sections());

    controller.toggle_menu();
    assert!(controller.state().is_menu_open);
    controller.toggle_menu();
    assert!(!controller.state().is_menu_open);
}

#[test]
fn scroll_threshold_is_strictly_greater_than_fifty() {
    let mut controller = controller_with(FakeLayout::all_sections());

    for (offset, expected) in [(0.0, false), (50.0, false), (50.01, true), (51.0, true)] {
        controller.layout_mut().place_stacked(offset);
        controller.on_scroll();
        assert_eq!(
            controller.state().has_scrolled_past_threshold,
            expected,
            "offset {offset}"
        );
    }

    assert_eq!(controller.state().nav_bar_style(), NavBarStyle::Solid);
    controller.layout_mut().place_stacked(10.0);
    controller.on_scroll();
    assert_eq!(controller.state().nav_bar_style(), NavBarStyle::Transparent);
}

#[test]
fn scroll_selects_section_straddling_reference_line() {
    let mut layout = FakeLayout::all_sections();
    layout.place_offscreen();
    layout
        .rects
        .insert(SectionId::Skills, SectionRect::new(80.0, 150.0));
    let mut controller = controller_with(layout);

    controller.on_scroll();

    assert_eq!(controller.state().active_section, SectionId::Skills);
}

#[test]
fn scroll_without_straddling_section_keeps_previous_active() {
    let mut controller = controller_with(FakeLayout::all_sections());
    controller.layout_mut().place_stacked(3_200.0);
    controller.on_scroll();
    assert_eq!(controller.state().active_section, SectionId::Projects);

    controller.layout_mut().place_offscreen();
    controller.on_scroll();

    assert_eq!(controller.state().active_section, SectionId::Projects);
}

#[test]
fn overlapping_sections_resolve_to_first_in_page_order() {
    let mut layout = FakeLayout::default();
    layout
        .rects
        .insert(SectionId::Contact, SectionRect::new(0.0, 500.0));
    layout
        .rects
        .insert(SectionId::About, SectionRect::new(100.0, 100.0));
    let mut controller = controller_with(layout);

    controller.on_scroll();

    assert_eq!(controller.state().active_section, SectionId::About);
}

#[test]
fn repeated_scroll_events_recompute_from_current_geometry() {
    let mut controller = controller_with(FakeLayout::all_sections());

    for step in 0..200 {
        let offset = f64::from(step) * 24.0;
        controller.layout_mut().place_stacked(offset);
        controller.on_scroll();
    }
    controller.layout_mut().place_stacked(850.0);
    controller.on_scroll();

    assert_eq!(controller.state().active_section, SectionId::About);
    assert!(controller.state().has_scrolled_past_threshold);
}

#[test]
fn pointer_moves_never_touch_navigation_state() {
    let mut controller = controller_with(FakeLayout::all_sections());
    controller.navigate_to(SectionId::Experience);
    controller.toggle_menu();
    let before = *controller.state();

    for (x, y) in [(0.0, 0.0), (640.5, 12.0), (-5.0, 9_999.0)] {
        controller.on_pointer_move(x, y);
        assert_eq!(controller.state().active_section, before.active_section);
        assert_eq!(controller.state().is_menu_open, before.is_menu_open);
    }
    assert_eq!(
        controller.state().pointer,
        PointerPosition { x: -5.0, y: 9_999.0 }
    );
}

#[test]
fn cursor_overlay_is_offset_by_configured_radius() {
    let mut controller = controller_with(FakeLayout::all_sections());
    controller.on_pointer_move(300.0, 200.0);

    assert_eq!(
        controller.cursor_overlay_origin(),
        PointerPosition { x: 284.0, y: 184.0 }
    );
}

#[test]
fn navigate_to_missing_section_is_silent_noop() {
    let mut layout = FakeLayout::all_sections();
    layout.rects.remove(&SectionId::Projects);
    let mut controller = controller_with(layout);
    controller.toggle_menu();
    let frames_before = controller.surface().frames.len();

    let outcome = controller.navigate_to(SectionId::Projects);

    assert_eq!(outcome, NavigateOutcome::SectionMissing);
    assert_eq!(controller.state().active_section, SectionId::Home);
    assert!(controller.state().is_menu_open);
    assert_eq!(controller.surface().frames.len(), frames_before);
    assert!(controller.layout().scroll_requests.is_empty());
}

#[test]
fn second_navigate_during_animation_wins() {
    let mut controller = controller_with(FakeLayout::all_sections());

    controller.navigate_to(SectionId::Projects);
    controller.navigate_to(SectionId::About);

    assert_eq!(controller.state().active_section, SectionId::About);
    let targets = controller
        .layout()
        .scroll_requests
        .iter()
        .map(|(section, _)| *section)
        .collect::<Vec<_>>();
    assert_eq!(targets, vec![SectionId::Projects, SectionId::About]);
}

#[test]
fn navigate_by_id_parses_host_strings() {
    let mut controller = controller_with(FakeLayout::all_sections());

    let outcome = controller
        .navigate_to_id("skills")
        .expect("known id should navigate");
    assert_eq!(outcome, NavigateOutcome::Scrolled);
    assert_eq!(controller.state().active_section, SectionId::Skills);

    let err = controller
        .navigate_to_id("blog")
        .expect_err("unknown id must be rejected");
    assert_eq!(err, SectionIdError::UnknownSectionId("blog".to_string()));
    assert_eq!(controller.state().active_section, SectionId::Skills);
}

#[test]
fn every_state_change_is_rendered() {
    let mut controller = controller_with(FakeLayout::all_sections());

    controller.on_scroll();
    controller.on_pointer_move(1.0, 2.0);
    controller.toggle_menu();
    controller.navigate_to(SectionId::Contact);

    let frames = &controller.surface().frames;
    assert_eq!(frames.len(), 4);
    assert!(frames[2].is_menu_open);
    let last = controller.surface().last().expect("last frame");
    assert_eq!(last.active_section, SectionId::Contact);
    assert!(!last.is_menu_open);
}
