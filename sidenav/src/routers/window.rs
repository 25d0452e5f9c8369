use iced::{Size, Task, window};

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Route a window event to the owning handler.
pub(crate) fn route(app: &mut App, event: window::Event) -> Task<AppEvent> {
    match event {
        window::Event::Opened { size, .. } => {
            handle_opened(app, size);
            Task::none()
        },
        window::Event::Resized(size) => {
            app.state.window_size = size;
            Task::none()
        },
        window::Event::CloseRequested => handle_close_requested(app),
        _ => Task::none(),
    }
}

fn handle_opened(app: &mut App, size: Size) {
    // iced reports logical sizes; one logical unit per pixel.
    if let Some(metrics) = app.state.capture_metrics(size, 1.0) {
        log::info!("display metrics captured: {metrics:?}");
        app.widgets.sidebar.set_metrics(metrics);
    }
}

fn handle_close_requested(app: &mut App) -> Task<AppEvent> {
    let teardown = if app.widgets.sidebar.is_torn_down() {
        Task::none()
    } else {
        super::sidebar::route(
            app,
            SidebarEvent::Intent(SidebarIntent::Teardown),
        )
    };

    teardown.chain(window::latest().and_then(window::close))
}
