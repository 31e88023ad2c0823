use super::*;
use crate::foundation::core::Point;

fn zoom() -> TransitionState {
    let from = GridConfig::configure(2, 8.0, 8.0, 375.0);
    TransitionState::begin(from, from.with_column_count(1))
}

#[test]
fn endpoints_match_steady_state_frames() {
    let t = zoom();
    for i in 0..40 {
        let idx = ItemIndex(i);
        assert_eq!(t.frame_during(0.0, idx), t.source_config().frame_for_index(idx));
        assert_eq!(t.frame_during(1.0, idx), t.target_config().frame_for_index(idx));
    }
}

#[test]
fn endpoints_hold_for_every_curve() {
    for curve in [
        TransitionCurve::EaseIn,
        TransitionCurve::EaseOut,
        TransitionCurve::EaseInOut,
    ] {
        let t = zoom().with_curve(curve);
        let idx = ItemIndex(7);
        assert_eq!(t.frame_during(0.0, idx), t.source_config().frame_for_index(idx));
        assert_eq!(t.frame_during(1.0, idx), t.target_config().frame_for_index(idx));
    }
}

#[test]
fn halfway_size_is_linear_midpoint() {
    let mut t = zoom();
    t.set_progress(0.5);
    // (175.5 + 359) / 2
    assert_eq!(t.item_size(), Size::new(267.25, 267.25));
    assert_eq!(t.frame(ItemIndex(0)).size(), Size::new(267.25, 267.25));
    assert_eq!(t.frame(ItemIndex(0)).origin(), Point::new(8.0, 0.0));
}

#[test]
fn progress_is_clamped() {
    let mut t = zoom();
    t.set_progress(1.5);
    assert_eq!(t.progress(), 1.0);
    assert!(t.is_complete());
    t.set_progress(-2.0);
    assert_eq!(t.progress(), 0.0);
    t.set_progress(f64::NAN);
    assert_eq!(t.progress(), 0.0);
    assert!(!t.is_complete());
}

#[test]
fn resize_in_place_keeps_origin() {
    let mut t = zoom();
    t.set_progress(1.0);
    let visible = Rect::new(191.5, 184.0, 367.0, 359.5);
    let resized = t.resize_in_place(visible);
    assert_eq!(resized.origin(), visible.origin());
    assert_eq!(resized.size(), Size::new(359.0, 359.0));
}

#[test]
fn size_range_tracks_progress() {
    let mut t = zoom();
    assert_eq!(t.size_range().min, Size::new(175.5, 175.5));
    t.set_progress(1.0);
    assert_eq!(t.size_range().max, Size::new(359.0, 359.0));
}

#[test]
fn finish_yields_target_config() {
    let t = zoom();
    let target = *t.target_config();
    assert_eq!(t.finish(), target);
}
