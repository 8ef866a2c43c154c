//! GeometryState owns the inset rectangle of one panel and derives its
//! width, height, output rect, and style.

mod output;
mod types;

pub use output::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use dragbox_common::{Insets, PanelError, ParentSize, Unit};

    fn parent() -> ParentSize {
        ParentSize::new(800.0, 600.0)
    }

    #[test]
    fn record_state_from_pixel_props() {
        let mut state = GeometryState::with_parent(parent(), Unit::Px);
        state
            .record_state(&PanelProps::new(10.0, 20.0, 100.0, 50.0))
            .unwrap();

        assert_eq!(state.insets(), Insets::new(20.0, 690.0, 530.0, 10.0));
        assert_eq!(state.width(), 100.0);
        assert_eq!(state.height(), 50.0);
    }

    #[test]
    fn insets_and_size_sum_to_parent() {
        let mut state = GeometryState::with_parent(parent(), Unit::Px);
        state
            .record_state(&PanelProps::new(33.3, 12.7, 101.9, 77.1))
            .unwrap();

        let i = state.insets();
        assert!((i.left + i.right + state.width() - 800.0).abs() < 1e-4);
        assert!((i.top + i.bottom + state.height() - 600.0).abs() < 1e-4);
    }

    #[test]
    fn record_state_from_percent_props() {
        let mut state = GeometryState::with_parent(parent(), Unit::Percent);
        state
            .record_state(&PanelProps::new("10%", "50%", "25%", 10.0))
            .unwrap();

        assert_eq!(state.insets().left, 80.0);
        assert_eq!(state.insets().top, 300.0);
        assert_eq!(state.width(), 200.0);
        assert_eq!(state.height(), 60.0);
    }

    #[test]
    fn record_state_rejects_unparseable_percent() {
        let mut state = GeometryState::with_parent(parent(), Unit::Percent);
        state
            .record_state(&PanelProps::new(0.0, 0.0, 50.0, 50.0))
            .unwrap();
        let before = state.insets();

        let err = state
            .record_state(&PanelProps::new(0.0, 0.0, "half", 50.0))
            .unwrap_err();
        assert!(matches!(err, PanelError::InvalidValue { field: "w", .. }));
        // A failed sync leaves the previous geometry in place.
        assert_eq!(state.insets(), before);
    }

    #[test]
    fn commit_rounds_to_four_decimals() {
        let mut state = GeometryState::with_parent(parent(), Unit::Px);
        state.commit(Insets::new(1.000_04, 2.123_456, 3.0, 4.999_99));
        assert_eq!(state.insets(), Insets::new(1.0, 2.1235, 3.0, 5.0));
    }

    #[test]
    fn rect_is_rounded_to_integers() {
        let mut state = GeometryState::with_parent(parent(), Unit::Px);
        state.commit(Insets::from_rect(parent(), 10.4, 20.6, 100.5, 49.2));
        let rect = state.rect();
        assert_eq!(rect.left, 10.0);
        assert_eq!(rect.top, 21.0);
        assert_eq!(rect.width, 101.0);
        assert_eq!(rect.height, 49.0);

        let precise = state.precise_rect();
        assert_eq!(precise.left, 10.4);
        assert_eq!(precise.width, 100.5);
    }

    #[test]
    fn rect_and_style_in_percent() {
        let mut state = GeometryState::with_parent(parent(), Unit::Percent);
        state
            .record_state(&PanelProps::new(12.5, 25.0, 50.0, 10.0))
            .unwrap();

        let rect = state.rect();
        assert_eq!(rect.left, 13.0);
        assert_eq!(rect.top, 25.0);
        assert_eq!(rect.width, 50.0);
        assert_eq!(rect.height, 10.0);

        let style = state.style();
        assert_eq!(style.left, "12.5%");
        assert_eq!(style.top, "25%");
        assert_eq!(style.width, "50%");
        assert_eq!(style.height, "10%");
    }

    #[test]
    fn style_in_pixels() {
        let mut state = GeometryState::with_parent(parent(), Unit::Px);
        state
            .record_state(&PanelProps::new(10.0, 20.0, 100.0, 50.0))
            .unwrap();
        let style = state.style();
        assert_eq!(style.top, "20px");
        assert_eq!(style.left, "10px");
        assert_eq!(style.width, "100px");
        assert_eq!(style.height, "50px");
    }

    #[test]
    fn set_parent_keeps_insets() {
        let mut state = GeometryState::with_parent(parent(), Unit::Px);
        state
            .record_state(&PanelProps::new(10.0, 20.0, 100.0, 50.0))
            .unwrap();
        state.set_parent(ParentSize::new(1000.0, 600.0));
        assert_eq!(state.insets().right, 690.0);
        assert_eq!(state.width(), 300.0);
    }

    #[test]
    fn snapshot_captures_dimensions() {
        let mut state = GeometryState::with_parent(parent(), Unit::Px);
        state
            .record_state(&PanelProps::new(10.0, 20.0, 100.0, 50.0))
            .unwrap();
        let snap = state.snapshot();
        assert_eq!(snap.insets, state.insets());
        assert_eq!(snap.width, 100.0);
        assert_eq!(snap.height, 50.0);
    }

    #[test]
    fn bounding_box_uses_edge_coordinates() {
        let mut state = GeometryState::with_parent(parent(), Unit::Px);
        state
            .record_state(&PanelProps::new(10.0, 20.0, 100.0, 50.0))
            .unwrap();
        let b = state.bounding_box();
        assert_eq!(b.left, 10.0);
        assert_eq!(b.top, 20.0);
        assert_eq!(b.right, 110.0);
        assert_eq!(b.bottom, 70.0);
    }
}
