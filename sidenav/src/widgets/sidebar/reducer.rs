use std::time::Instant;

use iced::Task;

use super::SidebarWidget;
use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};

/// Read-only context for sidebar reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarCtx {
    pub(crate) now: Instant,
}

/// Reduce a sidebar intent into pipeline updates and effect events.
pub(super) fn reduce(
    widget: &mut SidebarWidget,
    event: SidebarIntent,
    ctx: &SidebarCtx,
) -> Task<SidebarEvent> {
    if widget.is_torn_down() {
        return Task::none();
    }

    match event {
        SidebarIntent::Trigger(source) => {
            if let Some(request) = widget.source.emit(source, ctx.now) {
                log::debug!("toggle requested by {:?}", request.source);
                widget.debouncer.push(request);
            }
            Task::none()
        },
        SidebarIntent::Frame(now) => {
            let effects = advance(widget, now);
            Task::batch(
                effects
                    .into_iter()
                    .map(|effect| Task::done(SidebarEvent::Effect(effect))),
            )
        },
        SidebarIntent::Teardown => {
            teardown(widget, ctx.now);
            Task::none()
        },
    }
}

fn advance(widget: &mut SidebarWidget, now: Instant) -> Vec<SidebarEffect> {
    let mut effects = Vec::new();

    if let Some(burst) = widget.debouncer.poll(now) {
        log::debug!(
            "{} toggle(s) coalesced, last from {:?}",
            burst.count,
            burst.latest.source
        );
        let target = widget.machine.apply(&burst);
        let start = widget.coordinator.begin(target, now);
        effects.push(SidebarEffect::TransitionStarted {
            id: start.id,
            collapsed: target.collapsed,
            cancelled: start.cancelled,
        });
    }

    if let Some(settled) = widget.coordinator.tick(now) {
        effects.push(SidebarEffect::TransitionSettled {
            id: settled.id,
            collapsed: settled.target.collapsed,
        });
    }

    effects
}

fn teardown(widget: &mut SidebarWidget, now: Instant) {
    widget.source.detach();
    widget.debouncer.cancel();
    widget.coordinator.cancel(now);
    log::info!(
        "sidebar torn down: {} toggle request(s), {} animation run(s), {} cancelled",
        widget.source.emitted(),
        widget.coordinator.runs_started(),
        widget.coordinator.cancellations()
    );
}
