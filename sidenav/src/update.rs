use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        AppEvent::Window(event) => routers::window::route(app, event),
    }
}
