use iced::{Subscription, window};

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    let mut subs = vec![win_subs];

    // Frame clock only while a toggle waits out its window or the panel
    // is moving; dropped for good once the sidebar is torn down.
    if app.widgets.sidebar.needs_frames() {
        let frames = window::frames().map(|at| {
            AppEvent::Sidebar(SidebarEvent::Intent(SidebarIntent::Frame(at)))
        });
        subs.push(frames);
    }

    Subscription::batch(subs)
}
