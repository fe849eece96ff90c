mod common;

use approx::assert_relative_eq;

use duoview_core::controller::{LoadOutcome, Selection, SessionState, Slot};
use duoview_core::error::DuoviewError;
use duoview_core::geometry::{ImageSize, Point};
use duoview_core::layout::LayoutMode;
use duoview_core::surface::{Gesture, MouseButton};

use common::{controller, selection, AREA_400X300, AREA_800X600};

fn press_left(at: Point) -> Gesture {
    Gesture::PressStart {
        button: MouseButton::Left,
        position: at,
    }
}

fn move_to(x: f64, y: f64) -> Gesture {
    Gesture::PointerMove {
        position: Point::new(x, y),
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn test_matching_sizes_reach_both_loaded() {
    let mut ctrl = controller(AREA_800X600);

    let first = ctrl.load_into(Slot::First, selection("a.png", 800, 600)).unwrap();
    assert_eq!(
        first,
        LoadOutcome::Loaded {
            slot: Slot::First,
            size: ImageSize::new(800, 600)
        }
    );
    assert_eq!(ctrl.state(), SessionState::FirstLoaded);
    assert!(ctrl.can_load(Slot::Second));
    assert_relative_eq!(ctrl.viewport(Slot::First).fit_scale(), 1.0);

    let second = ctrl.load_into(Slot::Second, selection("b.png", 800, 600)).unwrap();
    assert_eq!(
        second,
        LoadOutcome::BothLoaded {
            size: ImageSize::new(800, 600)
        }
    );
    assert!(ctrl.both_loaded());
    assert!(!ctrl.mismatch_pending());
    assert_eq!(
        ctrl.path(Slot::Second).map(|p| p.to_string_lossy().into_owned()),
        Some("/images/b.png".to_string())
    );
}

#[test]
fn test_mismatch_rejected_clears_only_second() {
    let mut ctrl = controller(AREA_400X300);
    ctrl.load_into(Slot::First, selection("a.png", 800, 600)).unwrap();
    let fit_before = ctrl.viewport(Slot::First).fit_scale();

    let outcome = ctrl.load_into(Slot::Second, selection("b.png", 640, 480)).unwrap();
    assert_eq!(
        outcome,
        LoadOutcome::SizeMismatch {
            first: ImageSize::new(800, 600),
            second: ImageSize::new(640, 480),
        }
    );
    assert_eq!(ctrl.state(), SessionState::SizeMismatchPending);

    let state = ctrl.resolve_mismatch(false).unwrap();
    assert_eq!(state, SessionState::FirstLoaded);
    assert!(!ctrl.both_loaded());
    assert!(!ctrl.viewport(Slot::Second).is_loaded());
    assert!(ctrl.path(Slot::Second).is_none());

    assert_eq!(ctrl.image_size(Slot::First), Some(ImageSize::new(800, 600)));
    assert_relative_eq!(ctrl.viewport(Slot::First).fit_scale(), fit_before);
    assert!(ctrl.path(Slot::First).is_some());
}

#[test]
fn test_mismatch_accepted_keeps_independent_fit_scales() {
    let mut ctrl = controller(AREA_400X300);
    ctrl.load_into(Slot::First, selection("a.png", 800, 600)).unwrap();
    ctrl.load_into(Slot::Second, selection("b.png", 1600, 1200)).unwrap();

    let state = ctrl.resolve_mismatch(true).unwrap();
    assert_eq!(state, SessionState::BothLoaded);
    assert!(ctrl.path(Slot::Second).is_some());
    assert_relative_eq!(ctrl.viewport(Slot::First).fit_scale(), 0.5);
    assert_relative_eq!(ctrl.viewport(Slot::Second).fit_scale(), 0.25);
}

#[test]
fn test_resolve_without_pending_mismatch_is_error() {
    let mut ctrl = controller(AREA_800X600);
    ctrl.load_into(Slot::First, selection("a.png", 800, 600)).unwrap();
    assert!(matches!(
        ctrl.resolve_mismatch(true),
        Err(DuoviewError::NoPendingMismatch)
    ));
}

#[test]
fn test_cancelled_selection_changes_nothing() {
    let mut ctrl = controller(AREA_800X600);
    let outcome = ctrl
        .load_into(Slot::First, Selection::from_parts("", ImageSize::ZERO))
        .unwrap();
    assert_eq!(outcome, LoadOutcome::Cancelled);
    assert_eq!(ctrl.state(), SessionState::Empty);
    assert!(ctrl.path(Slot::First).is_none());
    assert!(ctrl.image_size(Slot::First).is_none());
    assert_relative_eq!(ctrl.viewport(Slot::First).current_scale(), 1.0);
    assert!(!ctrl.can_load(Slot::Second));
    assert!(!ctrl.can_clear());
}

#[test]
fn test_cancelled_second_selection_keeps_first() {
    let mut ctrl = controller(AREA_800X600);
    ctrl.load_into(Slot::First, selection("a.png", 800, 600)).unwrap();
    let outcome = ctrl.load_into(Slot::Second, Selection::Cancelled).unwrap();
    assert_eq!(outcome, LoadOutcome::Cancelled);
    assert_eq!(ctrl.state(), SessionState::FirstLoaded);
}

#[test]
fn test_second_before_first_is_refused() {
    let mut ctrl = controller(AREA_800X600);
    let err = ctrl
        .load_into(Slot::Second, selection("b.png", 800, 600))
        .unwrap_err();
    assert!(matches!(err, DuoviewError::FirstImageRequired));
    assert!(!ctrl.viewport(Slot::Second).is_loaded());
}

#[test]
fn test_clear_all_returns_to_empty() {
    let mut ctrl = controller(AREA_800X600);
    ctrl.load_into(Slot::First, selection("a.png", 800, 600)).unwrap();
    ctrl.load_into(Slot::Second, selection("b.png", 800, 600)).unwrap();
    ctrl.on_zoom_gesture(2.0).unwrap();

    ctrl.clear_all();
    assert_eq!(ctrl.state(), SessionState::Empty);
    assert!(!ctrl.both_loaded());
    assert!(!ctrl.can_clear());
    assert!(ctrl.visible_summary().is_none());
    for slot in Slot::ALL {
        assert!(!ctrl.viewport(slot).is_loaded());
        assert!(ctrl.path(slot).is_none());
        // The layout hands the viewports their display size back.
        assert_relative_eq!(ctrl.viewport(slot).viewport_size().width, 800.0);
    }
}

// ---------------------------------------------------------------------------
// Broadcast navigation
// ---------------------------------------------------------------------------

fn both_loaded_400() -> duoview_core::controller::ComparisonController {
    let mut ctrl = controller(AREA_400X300);
    ctrl.load_into(Slot::First, selection("a.png", 800, 600)).unwrap();
    ctrl.load_into(Slot::Second, selection("b.png", 800, 600)).unwrap();
    ctrl
}

#[test]
fn test_wheel_on_first_zooms_both_by_half() {
    let mut ctrl = both_loaded_400();
    ctrl.dispatch(Slot::First, Gesture::WheelRotate { delta: 240.0 })
        .unwrap();

    for slot in Slot::ALL {
        assert_relative_eq!(ctrl.viewport(slot).current_scale(), 0.25);
        assert_relative_eq!(ctrl.viewport(slot).mapped_scale(), 0.5);
    }
    let summary = ctrl.visible_summary().unwrap();
    assert_relative_eq!(summary.width, 1600.0);
    assert_relative_eq!(summary.height, 1200.0);
}

#[test]
fn test_zoom_from_either_viewport_is_identical() {
    let mut ctrl = both_loaded_400();
    ctrl.dispatch(Slot::Second, Gesture::WheelRotate { delta: -120.0 })
        .unwrap();
    ctrl.dispatch(Slot::First, Gesture::WheelRotate { delta: -360.0 })
        .unwrap();
    let a = ctrl.viewport(Slot::First).current_scale();
    let b = ctrl.viewport(Slot::Second).current_scale();
    assert_eq!(a, b);
    assert_relative_eq!(a, 0.5 * 4.0);
}

#[test]
fn test_drag_moves_both_centers_together() {
    let mut ctrl = both_loaded_400();
    ctrl.dispatch(Slot::First, press_left(Point::new(100.0, 100.0)))
        .unwrap();
    ctrl.dispatch(Slot::First, move_to(100.0, 100.0)).unwrap();
    ctrl.dispatch(Slot::First, move_to(120.0, 110.0)).unwrap();

    // 20x10 screen points at a 0.5 display scale is 40x20 image pixels.
    for slot in Slot::ALL {
        let center = ctrl.viewport(slot).center();
        assert_relative_eq!(center.x, 360.0, epsilon = 1e-9);
        assert_relative_eq!(center.y, 280.0, epsilon = 1e-9);
    }

    ctrl.dispatch(Slot::First, Gesture::ReleaseLeft).unwrap();
    ctrl.dispatch(Slot::First, move_to(300.0, 300.0)).unwrap();
    assert_relative_eq!(ctrl.viewport(Slot::Second).center().x, 360.0, epsilon = 1e-9);
}

#[test]
fn test_drag_is_normalized_by_zoom() {
    let mut ctrl = both_loaded_400();
    ctrl.on_zoom_gesture(2.0).unwrap();
    ctrl.dispatch(Slot::Second, press_left(Point::ORIGIN)).unwrap();
    ctrl.dispatch(Slot::Second, move_to(50.0, 50.0)).unwrap();
    ctrl.dispatch(Slot::Second, move_to(70.0, 40.0)).unwrap();

    for slot in Slot::ALL {
        let center = ctrl.viewport(slot).center();
        assert_relative_eq!(center.x, 380.0, epsilon = 1e-9);
        assert_relative_eq!(center.y, 310.0, epsilon = 1e-9);
    }
}

#[test]
fn test_drag_moves_image_with_pointer_on_screen() {
    let mut ctrl = both_loaded_400();
    let before = ctrl.viewport(Slot::Second).image_rect_in_view().unwrap();

    ctrl.dispatch(Slot::First, press_left(Point::new(100.0, 100.0)))
        .unwrap();
    ctrl.dispatch(Slot::First, move_to(100.0, 100.0)).unwrap();
    ctrl.dispatch(Slot::First, move_to(200.0, 100.0)).unwrap();

    for slot in Slot::ALL {
        let after = ctrl.viewport(slot).image_rect_in_view().unwrap();
        assert_relative_eq!(after.x - before.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(after.y, before.y, epsilon = 1e-9);
    }

    // Same on-screen distance after zooming in.
    ctrl.dispatch(Slot::First, Gesture::ReleaseLeft).unwrap();
    ctrl.on_zoom_gesture(3.0).unwrap();
    let before = ctrl.viewport(Slot::First).image_rect_in_view().unwrap();
    ctrl.dispatch(Slot::First, press_left(Point::new(50.0, 50.0)))
        .unwrap();
    ctrl.dispatch(Slot::First, move_to(50.0, 50.0)).unwrap();
    ctrl.dispatch(Slot::First, move_to(50.0, 20.0)).unwrap();
    let after = ctrl.viewport(Slot::First).image_rect_in_view().unwrap();
    assert_relative_eq!(after.x, before.x, epsilon = 1e-9);
    assert_relative_eq!(after.y - before.y, -30.0, epsilon = 1e-9);
}

#[test]
fn test_gestures_ignored_while_mismatch_pending() {
    let mut ctrl = controller(AREA_400X300);
    ctrl.load_into(Slot::First, selection("a.png", 800, 600)).unwrap();
    ctrl.load_into(Slot::Second, selection("b.png", 640, 480)).unwrap();

    ctrl.dispatch(Slot::First, Gesture::WheelRotate { delta: -240.0 })
        .unwrap();
    assert_relative_eq!(ctrl.viewport(Slot::First).mapped_scale(), 1.0);
}

#[test]
fn test_single_image_can_be_navigated() {
    let mut ctrl = controller(AREA_400X300);
    ctrl.load_into(Slot::First, selection("a.png", 800, 600)).unwrap();
    ctrl.dispatch(Slot::First, Gesture::WheelRotate { delta: -240.0 })
        .unwrap();
    assert_relative_eq!(ctrl.viewport(Slot::First).mapped_scale(), 2.0);
    assert!(!ctrl.viewport(Slot::Second).is_loaded());
}

#[test]
fn test_gestures_on_empty_viewport_are_noops() {
    let mut ctrl = controller(AREA_400X300);
    ctrl.load_into(Slot::First, selection("a.png", 800, 600)).unwrap();
    ctrl.dispatch(Slot::Second, Gesture::WheelRotate { delta: -240.0 })
        .unwrap();
    assert_relative_eq!(ctrl.viewport(Slot::First).mapped_scale(), 1.0);
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[test]
fn test_side_by_side_splits_width() {
    let ctrl = controller(AREA_800X600);
    let a = ctrl.viewport_rect(Slot::First);
    let b = ctrl.viewport_rect(Slot::Second);
    assert_relative_eq!(a.width, 800.0);
    assert_relative_eq!(b.width, 800.0);
    assert_relative_eq!(b.x, 815.0);
    assert_eq!(ctrl.slot_at(Point::new(10.0, 10.0)), Some(Slot::First));
    assert_eq!(ctrl.slot_at(Point::new(900.0, 10.0)), Some(Slot::Second));
    assert_eq!(ctrl.slot_at(Point::new(810.0, 10.0)), None);
}

#[test]
fn test_overlay_uses_full_width() {
    let mut ctrl = controller(AREA_800X600);
    ctrl.set_layout_mode(LayoutMode::Overlay);
    for slot in Slot::ALL {
        assert_relative_eq!(ctrl.viewport_rect(slot).width, 1610.0);
        assert_relative_eq!(ctrl.viewport(slot).viewport_size().width, 1610.0);
    }
    assert_eq!(ctrl.slot_at(Point::new(100.0, 100.0)), Some(Slot::Second));
    assert_eq!(ctrl.layout_label(), "Layout (overlay: image 2)");
}

#[test]
fn test_right_click_toggles_front_in_overlay() {
    let mut ctrl = both_loaded_400();
    ctrl.set_layout_mode(LayoutMode::Overlay);

    let right = Gesture::PressStart {
        button: MouseButton::Right,
        position: Point::new(10.0, 10.0),
    };
    ctrl.dispatch(Slot::Second, right).unwrap();
    ctrl.dispatch(Slot::Second, Gesture::ReleaseRight).unwrap();

    assert_relative_eq!(ctrl.viewport_rect(Slot::Second).height, 0.0);
    assert_relative_eq!(ctrl.viewport(Slot::Second).viewport_size().height, 300.0);
    assert_eq!(ctrl.layout_label(), "Layout (overlay: image 1)");
    assert_eq!(ctrl.slot_at(Point::new(100.0, 100.0)), Some(Slot::First));

    ctrl.dispatch(Slot::First, right).unwrap();
    ctrl.dispatch(Slot::First, Gesture::ReleaseRight).unwrap();
    assert_relative_eq!(ctrl.viewport_rect(Slot::Second).height, 300.0);
    assert_eq!(ctrl.layout_label(), "Layout (overlay: image 2)");
}

#[test]
fn test_right_click_ignored_side_by_side() {
    let mut ctrl = both_loaded_400();
    assert!(!ctrl.on_right_click_release());
    assert_relative_eq!(ctrl.viewport_rect(Slot::Second).height, 300.0);
    assert_eq!(ctrl.layout_label(), "Layout");
}

#[test]
fn test_switching_layout_restores_front() {
    let mut ctrl = both_loaded_400();
    ctrl.set_layout_mode(LayoutMode::Overlay);
    assert!(ctrl.on_right_click_release());
    ctrl.set_layout_mode(LayoutMode::SideBySide);
    ctrl.set_layout_mode(LayoutMode::Overlay);
    assert_relative_eq!(ctrl.viewport_rect(Slot::Second).height, 300.0);
}

#[test]
fn test_load_behind_overlay_front_keeps_fit() {
    let mut ctrl = controller(AREA_400X300);
    ctrl.set_layout_mode(LayoutMode::Overlay);
    ctrl.load_into(Slot::First, selection("a.png", 600, 800)).unwrap();
    assert!(ctrl.on_right_click_release());

    ctrl.load_into(Slot::Second, selection("b.png", 600, 800)).unwrap();
    assert!(ctrl.on_right_click_release());

    let second = ctrl.viewport(Slot::Second);
    assert_relative_eq!(second.fit_scale(), 300.0 / 800.0);
    assert_relative_eq!(second.fit_scale(), ctrl.viewport(Slot::First).fit_scale());
    let rect = second.image_rect_in_view().unwrap();
    assert!(rect.x.is_finite() && rect.y.is_finite());
    assert_relative_eq!(rect.height, 300.0);
}

#[test]
fn test_clear_all_restores_overlay_front() {
    let mut ctrl = both_loaded_400();
    ctrl.set_layout_mode(LayoutMode::Overlay);
    assert!(ctrl.on_right_click_release());

    ctrl.clear_all();
    assert_eq!(ctrl.layout_label(), "Layout (overlay: image 2)");
    assert_relative_eq!(ctrl.viewport_rect(Slot::Second).height, 300.0);

    ctrl.load_into(Slot::First, selection("a.png", 800, 600)).unwrap();
    ctrl.load_into(Slot::Second, selection("b.png", 800, 600)).unwrap();
    // 810pt overlay width holds the 800px image unscaled.
    assert_relative_eq!(ctrl.viewport(Slot::Second).fit_scale(), 1.0);
}

#[test]
fn test_session_state_labels() {
    assert_eq!(SessionState::Empty.to_string(), "No images");
    assert_eq!(
        SessionState::SizeMismatchPending.to_string(),
        "Waiting for size confirmation"
    );
    assert_eq!(SessionState::BothLoaded.to_string(), "Both images loaded");
}

#[test]
fn test_selection_from_parts_detects_dismissed_chooser() {
    assert_eq!(
        Selection::from_parts(std::path::PathBuf::new(), ImageSize::ZERO),
        Selection::Cancelled
    );
    assert!(matches!(
        Selection::from_parts("/images/a.png", ImageSize::new(8, 6)),
        Selection::Image { .. }
    ));
}
