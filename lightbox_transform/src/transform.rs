// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::modes::{TransitionHint, ZoomSettings};
use crate::pan::PanAnchor;

/// Snapshot of an item's visual transform.
///
/// Whenever `scale` equals the configured minimum, `translation` is zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Zoom multiplier.
    pub scale: f64,
    /// Pan offset in host coordinates.
    pub translation: Vec2,
    /// `true` while a drag-to-pan is active.
    pub is_dragging: bool,
}

impl TransformState {
    /// The unscaled, uncentered, idle state.
    ///
    /// This is the initial state only for the default zoom range; see
    /// [`ItemTransform::initial_state`] for custom ranges.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
        is_dragging: false,
    };

    /// Returns the affine transform `translate(translation) * scale(scale)`.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Zoom and pan state machine for the active media item.
///
/// `ItemTransform` owns the scale, translation and drag flag and applies
/// gesture-level operations to them. Every input is clamped rather than
/// rejected; operations that are illegal in the current state (panning while
/// unzoomed, a pan move without a pan start) are ignored.
///
/// Each mutating method returns `true` when the visible state changed.
#[derive(Clone, Debug)]
pub struct ItemTransform {
    settings: ZoomSettings,
    scale: f64,
    translation: Vec2,
    pan: PanAnchor,
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self::new(ZoomSettings::default())
    }
}

impl ItemTransform {
    /// Creates an unzoomed transform using `settings` (normalized first).
    #[must_use]
    pub fn new(settings: ZoomSettings) -> Self {
        let settings = settings.normalized();
        Self {
            scale: settings.min_scale,
            settings,
            translation: Vec2::ZERO,
            pan: PanAnchor::default(),
        }
    }

    /// Returns the zoom settings in use.
    #[must_use]
    pub fn settings(&self) -> ZoomSettings {
        self.settings
    }

    /// Returns the current zoom multiplier.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current pan offset.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Returns `true` while a drag-to-pan is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pan.is_active()
    }

    /// Returns `true` when the scale is above the minimum.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale > self.settings.min_scale
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> TransformState {
        TransformState {
            scale: self.scale,
            translation: self.translation,
            is_dragging: self.is_dragging(),
        }
    }

    /// The state [`ItemTransform::reset`] returns to: minimum scale, zero
    /// translation, no drag.
    #[must_use]
    pub fn initial_state(&self) -> TransformState {
        TransformState {
            scale: self.settings.min_scale,
            translation: Vec2::ZERO,
            is_dragging: false,
        }
    }

    /// How the renderer should apply the current state.
    #[must_use]
    pub fn transition_hint(&self) -> TransitionHint {
        if self.is_dragging() {
            TransitionHint::Instant
        } else {
            TransitionHint::Smooth
        }
    }

    /// Shorthand for `transition_hint().suppresses_transition()`.
    #[must_use]
    pub fn suppress_transition(&self) -> bool {
        self.transition_hint().suppresses_transition()
    }

    /// Steps the scale by one wheel increment in or out.
    ///
    /// Translation is left as is unless the step lands on the minimum scale.
    pub fn wheel_zoom(&mut self, zoom_in: bool) -> bool {
        let step = if zoom_in {
            self.settings.wheel_step
        } else {
            -self.settings.wheel_step
        };
        self.set_scale(self.scale + step)
    }

    /// Multiplies the scale by a pinch ratio.
    ///
    /// Non-finite or non-positive ratios are ignored.
    pub fn pinch(&mut self, ratio: f64) -> bool {
        if !ratio.is_finite() || ratio <= 0.0 {
            return false;
        }
        self.set_scale(self.scale * ratio)
    }

    /// Toggles between unzoomed and the double-activate scale.
    ///
    /// While zoomed this resets scale and translation and ends any active pan.
    /// While unzoomed it sets the double-activate scale and leaves translation
    /// untouched.
    pub fn double_activate(&mut self) -> bool {
        if self.is_zoomed() {
            self.reset()
        } else {
            self.set_scale(self.settings.double_activate_scale)
        }
    }

    /// Begins a drag-to-pan at `point`.
    ///
    /// Ignored while unzoomed.
    pub fn pan_start(&mut self, point: Point) -> bool {
        if !self.is_zoomed() {
            return false;
        }
        let was_dragging = self.is_dragging();
        self.pan.start(point, self.translation);
        !was_dragging
    }

    /// Moves an active pan so the content follows `point`.
    ///
    /// Ignored unless a pan is active and the item is zoomed.
    pub fn pan_move(&mut self, point: Point) -> bool {
        if !self.is_zoomed() {
            return false;
        }
        let Some(translation) = self.pan.translation_at(point) else {
            return false;
        };
        if translation == self.translation {
            return false;
        }
        self.translation = translation;
        true
    }

    /// Ends the active pan. The transform itself is unchanged.
    pub fn pan_end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.pan.end();
        was_dragging
    }

    /// Sets the scale, clamped into the configured range.
    ///
    /// Landing on the minimum scale also clears the translation and ends any
    /// active pan.
    pub fn set_scale(&mut self, scale: f64) -> bool {
        if !scale.is_finite() {
            return false;
        }
        let clamped = self.settings.clamp_scale(scale);
        let before = self.state();
        self.scale = clamped;
        if !self.is_zoomed() {
            self.translation = Vec2::ZERO;
            self.pan.end();
        }
        self.state() != before
    }

    /// Resets to the initial state: minimum scale, zero translation, no drag.
    pub fn reset(&mut self) -> bool {
        let before = self.state();
        self.pan.end();
        self.scale = self.settings.min_scale;
        self.translation = Vec2::ZERO;
        self.state() != before
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{ItemTransform, TransformState};
    use crate::modes::{TransitionHint, ZoomSettings};

    fn zoomed(scale: f64) -> ItemTransform {
        let mut t = ItemTransform::default();
        t.set_scale(scale);
        t
    }

    #[test]
    fn starts_at_identity() {
        let t = ItemTransform::default();
        assert_eq!(t.state(), TransformState::IDENTITY);
        assert!(!t.is_zoomed());
        assert_eq!(t.transition_hint(), TransitionHint::Smooth);
    }

    #[test]
    fn wheel_steps_are_clamped() {
        let mut t = ItemTransform::default();
        assert!(t.wheel_zoom(true));
        assert!((t.scale() - 1.2).abs() < 1e-12);

        for _ in 0..50 {
            t.wheel_zoom(true);
        }
        assert_eq!(t.scale(), 4.0);
        assert!(!t.wheel_zoom(true));

        for _ in 0..50 {
            t.wheel_zoom(false);
        }
        assert_eq!(t.scale(), 1.0);
        assert!(!t.wheel_zoom(false));
    }

    #[test]
    fn wheel_round_trip_lands_exactly_on_minimum() {
        let mut t = ItemTransform::default();
        for _ in 0..7 {
            t.wheel_zoom(true);
        }
        for _ in 0..7 {
            t.wheel_zoom(false);
        }
        assert_eq!(t.scale(), 1.0);
        assert!(!t.is_zoomed());
    }

    #[test]
    fn wheel_keeps_translation_while_zoomed() {
        let mut t = zoomed(2.0);
        t.pan_start(Point::new(0.0, 0.0));
        t.pan_move(Point::new(30.0, -10.0));
        t.pan_end();

        t.wheel_zoom(true);
        assert_eq!(t.translation(), Vec2::new(30.0, -10.0));
    }

    #[test]
    fn wheel_out_to_minimum_clears_translation() {
        let mut t = zoomed(1.2);
        t.pan_start(Point::new(0.0, 0.0));
        t.pan_move(Point::new(30.0, -10.0));
        t.pan_end();

        t.wheel_zoom(false);
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.translation(), Vec2::ZERO);
    }

    #[test]
    fn pinch_multiplies_and_clamps() {
        let mut t = ItemTransform::default();
        assert!(t.pinch(1.5));
        assert_eq!(t.scale(), 1.5);
        t.pinch(10.0);
        assert_eq!(t.scale(), 4.0);
        t.pinch(0.01);
        assert_eq!(t.scale(), 1.0);
    }

    #[test]
    fn pinch_ignores_degenerate_ratios() {
        let mut t = zoomed(2.0);
        assert!(!t.pinch(0.0));
        assert!(!t.pinch(-1.0));
        assert!(!t.pinch(f64::NAN));
        assert!(!t.pinch(f64::INFINITY));
        assert_eq!(t.scale(), 2.0);
    }

    #[test]
    fn double_activate_toggles() {
        let mut t = ItemTransform::default();
        assert!(t.double_activate());
        assert_eq!(t.scale(), 2.5);

        t.pan_start(Point::new(0.0, 0.0));
        t.pan_move(Point::new(8.0, 8.0));
        t.pan_end();

        assert!(t.double_activate());
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.translation(), Vec2::ZERO);
    }

    #[test]
    fn pan_is_a_no_op_while_unzoomed() {
        let mut t = ItemTransform::default();
        assert!(!t.pan_start(Point::new(5.0, 5.0)));
        assert!(!t.is_dragging());
        assert!(!t.pan_move(Point::new(50.0, 50.0)));
        assert!(!t.pan_end());
        assert_eq!(t.state(), TransformState::IDENTITY);
    }

    #[test]
    fn pan_move_without_start_is_ignored() {
        let mut t = zoomed(2.0);
        assert!(!t.pan_move(Point::new(50.0, 50.0)));
        assert_eq!(t.translation(), Vec2::ZERO);
    }

    #[test]
    fn pan_uses_absolute_anchor() {
        let mut t = zoomed(2.0);
        t.pan_start(Point::new(100.0, 100.0));
        assert!(t.is_dragging());
        assert_eq!(t.transition_hint(), TransitionHint::Instant);
        assert!(t.suppress_transition());

        t.pan_move(Point::new(110.0, 90.0));
        assert_eq!(t.translation(), Vec2::new(10.0, -10.0));
        t.pan_end();
        assert!(!t.suppress_transition());

        // A second pan continues from the current translation.
        t.pan_start(Point::new(0.0, 0.0));
        t.pan_move(Point::new(5.0, 5.0));
        assert_eq!(t.translation(), Vec2::new(15.0, -5.0));
    }

    #[test]
    fn pinching_to_minimum_mid_drag_stops_panning() {
        let mut t = zoomed(2.0);
        t.pan_start(Point::new(0.0, 0.0));
        t.pan_move(Point::new(20.0, 0.0));
        t.pinch(0.1);
        assert_eq!(t.translation(), Vec2::ZERO);
        assert!(!t.is_dragging());
        assert!(!t.suppress_transition());
        assert!(!t.pan_move(Point::new(40.0, 0.0)));
        assert_eq!(t.translation(), Vec2::ZERO);
    }

    #[test]
    fn double_activate_mid_drag_ends_the_pan() {
        let mut t = zoomed(2.5);
        t.pan_start(Point::new(0.0, 0.0));
        t.pan_move(Point::new(100.0, 0.0));

        assert!(t.double_activate());
        assert_eq!(t.state(), TransformState::IDENTITY);
        assert_eq!(t.transition_hint(), TransitionHint::Smooth);

        // Zooming back in must not revive the old anchor.
        t.wheel_zoom(true);
        assert!(!t.pan_move(Point::new(101.0, 0.0)));
        assert_eq!(t.translation(), Vec2::ZERO);
    }

    #[test]
    fn wheel_out_to_minimum_mid_drag_ends_the_pan() {
        let mut t = zoomed(1.2);
        t.pan_start(Point::new(0.0, 0.0));
        t.pan_move(Point::new(10.0, 5.0));
        t.wheel_zoom(false);
        assert!(!t.is_dragging());
        assert_eq!(t.translation(), Vec2::ZERO);
    }

    #[test]
    fn reset_returns_to_initial_state_for_custom_range() {
        let mut t = ItemTransform::new(ZoomSettings {
            min_scale: 0.5,
            max_scale: 3.0,
            ..ZoomSettings::default()
        });
        t.double_activate();
        t.pan_start(Point::new(0.0, 0.0));
        t.pan_move(Point::new(7.0, 7.0));
        t.reset();
        assert_eq!(t.state(), t.initial_state());
        assert_eq!(t.scale(), 0.5);
        assert_ne!(t.state(), TransformState::IDENTITY);
    }

    #[test]
    fn reset_clears_everything() {
        let mut t = zoomed(3.0);
        t.pan_start(Point::new(0.0, 0.0));
        t.pan_move(Point::new(20.0, 20.0));
        assert!(t.reset());
        assert_eq!(t.state(), TransformState::IDENTITY);
        assert!(!t.reset());
    }

    #[test]
    fn custom_settings_are_normalized() {
        let t = ItemTransform::new(ZoomSettings {
            min_scale: 3.0,
            max_scale: 0.5,
            wheel_step: 0.25,
            double_activate_scale: 10.0,
        });
        let settings = t.settings();
        assert_eq!(settings.min_scale, 0.5);
        assert_eq!(settings.max_scale, 3.0);
        assert_eq!(settings.double_activate_scale, 3.0);
        assert_eq!(t.scale(), 0.5);
    }

    #[test]
    fn affine_matches_state() {
        let mut t = zoomed(2.0);
        t.pan_start(Point::new(0.0, 0.0));
        t.pan_move(Point::new(10.0, 0.0));
        let p = t.state().to_affine() * Point::new(1.0, 1.0);
        assert_eq!(p, Point::new(12.0, 2.0));
    }
}
