mod animation;
mod debounce;
mod event;
mod model;
mod reducer;
mod source;
mod state;
pub(crate) mod view;

use std::time::Duration;

use iced::Task;

pub(crate) use self::event::{
    SidebarEffect, SidebarEvent, SidebarIntent, ToggleSource,
};
pub(crate) use self::model::SidebarViewModel;
pub(crate) use self::reducer::SidebarCtx;
use self::animation::AnimationCoordinator;
use self::debounce::{Debouncer, TOGGLE_DEBOUNCE_MS};
use self::source::ToggleEventSource;
use self::state::SidebarStateMachine;
use crate::display::DisplayMetrics;

/// Sidebar widget: merges the three toggle triggers, debounces them, flips
/// the collapsed flag and animates the panel and its overlay.
pub(crate) struct SidebarWidget {
    source: ToggleEventSource,
    debouncer: Debouncer,
    machine: SidebarStateMachine,
    coordinator: AnimationCoordinator,
}

impl SidebarWidget {
    /// Construct a collapsed sidebar sized for `metrics`.
    pub(crate) fn new(metrics: DisplayMetrics) -> Self {
        let machine = SidebarStateMachine::default();
        Self {
            source: ToggleEventSource::new(),
            debouncer: Debouncer::new(Duration::from_millis(
                TOGGLE_DEBOUNCE_MS,
            )),
            coordinator: AnimationCoordinator::new(machine.state(), metrics),
            machine,
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
        ctx: &SidebarCtx,
    ) -> Task<SidebarEvent> {
        reducer::reduce(self, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarViewModel {
        SidebarViewModel {
            collapsed: self.machine.state().collapsed,
            props: self.coordinator.props(),
            metrics: self.coordinator.metrics(),
        }
    }

    /// Adopt the display metrics reported by the window.
    pub(crate) fn set_metrics(&mut self, metrics: DisplayMetrics) {
        self.coordinator.set_metrics(metrics, self.machine.state());
    }

    /// Whether the frame clock must keep ticking: a toggle is waiting for
    /// its quiet period or an animation is in flight.
    pub(crate) fn needs_frames(&self) -> bool {
        !self.is_torn_down()
            && (self.debouncer.is_pending() || self.coordinator.is_animating())
    }

    /// Return whether the screen released its streams.
    pub(crate) fn is_torn_down(&self) -> bool {
        !self.source.is_attached()
    }

    #[cfg(test)]
    pub(crate) fn is_animating(&self) -> bool {
        self.coordinator.is_animating()
    }

    #[cfg(test)]
    pub(crate) fn pending_deadline(&self) -> Option<std::time::Instant> {
        self.debouncer.deadline()
    }

    #[cfg(test)]
    pub(crate) fn transitions_started(&self) -> u64 {
        self.coordinator.runs_started()
    }

    #[cfg(test)]
    pub(crate) fn cancellations(&self) -> u64 {
        self.coordinator.cancellations()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{SidebarCtx, SidebarIntent, SidebarWidget, ToggleSource};
    use crate::display::DisplayMetrics;

    #[test]
    fn given_new_widget_when_created_then_panel_is_collapsed_and_idle() {
        let widget = SidebarWidget::new(DisplayMetrics::FALLBACK);
        let vm = widget.vm();

        assert!(vm.collapsed);
        assert!(!vm.props.overlay_visible);
        assert_eq!(vm.visible_panel_width(), 0.0);
        assert!(!widget.needs_frames());
        assert!(!widget.is_torn_down());
    }

    #[test]
    fn given_trigger_press_when_reduced_then_frames_are_requested_until_deadline()
     {
        let now = Instant::now();
        let mut widget = SidebarWidget::new(DisplayMetrics::FALLBACK);
        let _task = widget.reduce(
            SidebarIntent::Trigger(ToggleSource::OverlayTap),
            &SidebarCtx { now },
        );

        assert!(widget.needs_frames());
        assert_eq!(
            widget.pending_deadline(),
            Some(now + Duration::from_millis(200))
        );
    }

    #[test]
    fn given_torn_down_widget_when_reduced_then_input_is_rejected() {
        let now = Instant::now();
        let mut widget = SidebarWidget::new(DisplayMetrics::FALLBACK);
        let _task =
            widget.reduce(SidebarIntent::Teardown, &SidebarCtx { now });
        let _task = widget.reduce(
            SidebarIntent::Trigger(ToggleSource::OpenButton),
            &SidebarCtx { now },
        );

        assert!(widget.is_torn_down());
        assert_eq!(widget.pending_deadline(), None);
    }
}
