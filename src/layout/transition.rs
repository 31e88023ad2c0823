use crate::{
    animation::ease::TransitionCurve,
    foundation::core::{ItemIndex, Rect, Size},
    foundation::math::{lerp_point, lerp_size},
    layout::config::{GridConfig, ItemSizing},
};

/// Interpolation state for an animated switch between two grid configurations.
///
/// The host drives `progress` from 0 to 1 and calls [`TransitionState::finish`] once the
/// animation completes; the state is not meant to outlive the animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TransitionState {
    from: GridConfig,
    to: GridConfig,
    progress: f64,
    curve: TransitionCurve,
}

impl TransitionState {
    /// Start a linear transition at progress 0.
    pub fn begin(from: GridConfig, to: GridConfig) -> Self {
        Self {
            from,
            to,
            progress: 0.0,
            curve: TransitionCurve::Linear,
        }
    }

    /// Replace the timing curve.
    pub fn with_curve(mut self, curve: TransitionCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Configuration the transition starts from.
    pub fn source_config(&self) -> &GridConfig {
        &self.from
    }

    /// Configuration the transition ends at.
    pub fn target_config(&self) -> &GridConfig {
        &self.to
    }

    /// Timing curve applied to progress.
    pub fn curve(&self) -> TransitionCurve {
        self.curve
    }

    /// Raw progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Set progress; values are clamped into `[0, 1]` and NaN resets to 0.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
    }

    /// Whether progress has reached 1.
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Frame of `index` at an explicit `progress`.
    ///
    /// Both the cell origin and the cell size are interpolated between the two
    /// configurations, so progress 0 reproduces the `from` frame exactly and progress 1
    /// the `to` frame.
    pub fn frame_during(&self, progress: f64, index: ItemIndex) -> Rect {
        let t = self.curve.apply(progress);
        let origin = lerp_point(
            self.from.origin_for_index(index),
            self.to.origin_for_index(index),
            t,
        );
        Rect::from_origin_size(origin, self.size_at(t))
    }

    /// Frame of `index` at the current progress.
    pub fn frame(&self, index: ItemIndex) -> Rect {
        self.frame_during(self.progress, index)
    }

    /// Keep `frame`'s origin and swap in the interpolated item size.
    ///
    /// This is how already-visible cells are re-measured on every progress tick.
    pub fn resize_in_place(&self, frame: Rect) -> Rect {
        Rect::from_origin_size(frame.origin(), self.item_size())
    }

    /// End the transition, yielding the configuration to install.
    pub fn finish(self) -> GridConfig {
        tracing::debug!(
            from_columns = self.from.column_count(),
            to_columns = self.to.column_count(),
            progress = self.progress,
            "grid transition finished"
        );
        self.to
    }

    fn size_at(&self, t: f64) -> Size {
        lerp_size(self.from.item_size(), self.to.item_size(), t)
    }
}

impl ItemSizing for TransitionState {
    fn item_size(&self) -> Size {
        self.size_at(self.curve.apply(self.progress))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/transition.rs"]
mod tests;
