use iced::Size;

/// Width of the navigation panel in logical units.
pub(crate) const PANEL_WIDTH_DP: f32 = 256.0;

/// Display metrics captured once when the window opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DisplayMetrics {
    pub(crate) width_px: f32,
    pub(crate) density: f32,
}

impl DisplayMetrics {
    pub(crate) const FALLBACK: Self = Self {
        width_px: 800.0,
        density: 1.0,
    };

    /// Build metrics from a logical window size and its scale factor.
    pub(crate) fn from_window(size: Size, scale_factor: f32) -> Self {
        Self {
            width_px: size.width * scale_factor,
            density: scale_factor,
        }
    }

    /// Whether the metrics can size an animation.
    pub(crate) fn is_usable(&self) -> bool {
        self.width_px.is_finite()
            && self.width_px > 0.0
            && self.density.is_finite()
            && self.density > 0.0
    }

    /// Return these metrics, or the fallback when they are degenerate.
    pub(crate) fn sanitized(self) -> Self {
        if self.is_usable() {
            self
        } else {
            log::warn!(
                "unusable display metrics {self:?}; using {:?}",
                Self::FALLBACK
            );
            Self::FALLBACK
        }
    }

    pub(crate) fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.sanitized_density()
    }

    pub(crate) fn px_to_dp(&self, px: f32) -> f32 {
        px / self.sanitized_density()
    }

    /// Distance the panel travels to leave the screen, in physical pixels.
    pub(crate) fn panel_offset_px(&self) -> f32 {
        if !self.is_usable() {
            return Self::FALLBACK.dp_to_px(PANEL_WIDTH_DP);
        }
        self.dp_to_px(PANEL_WIDTH_DP)
    }

    fn sanitized_density(&self) -> f32 {
        if self.density.is_finite() && self.density > 0.0 {
            self.density
        } else {
            Self::FALLBACK.density
        }
    }
}
