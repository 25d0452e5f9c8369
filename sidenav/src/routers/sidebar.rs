use std::time::Instant;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{
    SidebarCtx, SidebarEffect, SidebarEvent, SidebarIntent,
};

/// Route a sidebar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(event) => route_intent_event(app, event),
        SidebarEvent::Effect(effect) => route_effect_event(effect),
    }
}

fn route_intent_event(app: &mut App, event: SidebarIntent) -> Task<AppEvent> {
    let ctx = SidebarCtx {
        now: Instant::now(),
    };
    app.widgets
        .sidebar
        .reduce(event, &ctx)
        .map(AppEvent::Sidebar)
}

fn route_effect_event(effect: SidebarEffect) -> Task<AppEvent> {
    match effect {
        SidebarEffect::TransitionStarted {
            id,
            collapsed,
            cancelled,
        } => {
            if let Some(cancelled) = cancelled {
                log::debug!("transition {cancelled:?} superseded by {id:?}");
            }
            log::debug!("sidebar {} ({id:?})", phase(collapsed, false));
        },
        SidebarEffect::TransitionSettled { id, collapsed } => {
            log::debug!("sidebar {} ({id:?})", phase(collapsed, true));
        },
    }
    Task::none()
}

fn phase(collapsed: bool, settled: bool) -> &'static str {
    match (collapsed, settled) {
        (true, false) => "collapsing",
        (true, true) => "collapsed",
        (false, false) => "expanding",
        (false, true) => "expanded",
    }
}
