use iced::Size;

use crate::display::DisplayMetrics;

/// Window geometry state.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) window_size: Size,
    metrics_captured: bool,
}

impl State {
    /// Create state with the given initial window size.
    pub(crate) fn new(window_size: Size) -> Self {
        Self {
            window_size,
            metrics_captured: false,
        }
    }

    /// Record metrics from the first opened window. Later calls return
    /// `None`: metrics are read once per screen.
    pub(crate) fn capture_metrics(
        &mut self,
        size: Size,
        scale_factor: f32,
    ) -> Option<DisplayMetrics> {
        if self.metrics_captured {
            return None;
        }
        self.metrics_captured = true;
        self.window_size = size;
        Some(DisplayMetrics::from_window(size, scale_factor))
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::State;

    #[test]
    fn given_second_open_event_when_capturing_then_metrics_are_not_requeried() {
        let mut state = State::new(Size::new(800.0, 600.0));

        let first = state.capture_metrics(Size::new(1024.0, 768.0), 1.0);
        let second = state.capture_metrics(Size::new(640.0, 480.0), 1.0);

        assert_eq!(first.map(|m| m.width_px), Some(1024.0));
        assert!(second.is_none());
        assert_eq!(state.window_size, Size::new(1024.0, 768.0));
    }
}
