use super::animation::PanelProps;
use crate::display::{DisplayMetrics, PANEL_WIDTH_DP};

/// Read-only snapshot consumed by the sidebar views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel {
    pub(crate) collapsed: bool,
    pub(crate) props: PanelProps,
    pub(crate) metrics: DisplayMetrics,
}

impl SidebarViewModel {
    /// Visible part of the panel in logical units, given its translation.
    pub(crate) fn visible_panel_width(&self) -> f32 {
        let translation = self.metrics.px_to_dp(self.props.translation_x);
        (PANEL_WIDTH_DP + translation).clamp(0.0, PANEL_WIDTH_DP)
    }
}

#[cfg(test)]
mod tests {
    use super::SidebarViewModel;
    use crate::display::{DisplayMetrics, PANEL_WIDTH_DP};
    use crate::widgets::sidebar::animation::PanelProps;

    fn vm(translation_x: f32) -> SidebarViewModel {
        SidebarViewModel {
            collapsed: false,
            props: PanelProps {
                translation_x,
                overlay_alpha: 0.0,
                overlay_visible: false,
            },
            metrics: DisplayMetrics {
                width_px: 2160.0,
                density: 2.0,
            },
        }
    }

    #[test]
    fn given_translation_when_visible_width_computed_then_it_is_in_logical_units()
     {
        assert_eq!(vm(0.0).visible_panel_width(), PANEL_WIDTH_DP);
        assert_eq!(
            vm(-PANEL_WIDTH_DP).visible_panel_width(),
            PANEL_WIDTH_DP / 2.0
        );
        assert_eq!(vm(-PANEL_WIDTH_DP * 2.0).visible_panel_width(), 0.0);
    }
}
