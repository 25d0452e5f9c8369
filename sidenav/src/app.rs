#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Size, Subscription, Task, Theme, window};

use crate::display::DisplayMetrics;
use crate::state::State;
use crate::widgets::content::ContentWidget;
use crate::widgets::navigation::NavigationWidget;
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};

pub(crate) const APP_TITLE: &str = "sidenav";
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 480.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Direct operations
    Window(window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) sidebar: SidebarWidget,
    pub(crate) navigation: NavigationWidget,
    pub(crate) content: ContentWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let window_size = Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        };
        // Replaced by the real metrics once the window reports it opened.
        let metrics = DisplayMetrics::from_window(window_size, 1.0);

        let mut content = ContentWidget::new();
        // iced never hands back saved screen state: every launch is fresh.
        content.on_create(None);

        let widgets = Widgets {
            sidebar: SidebarWidget::new(metrics),
            navigation: NavigationWidget::load(),
            content,
        };

        let app = App {
            state: State::new(window_size),
            widgets,
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from(APP_TITLE)
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::{App, AppEvent};
    use crate::widgets::content::model::ContentView;
    use crate::widgets::sidebar::{SidebarEvent, SidebarIntent, ToggleSource};

    #[test]
    fn given_fresh_launch_when_app_created_then_default_content_is_mounted_once()
    {
        let (app, _task) = App::new();

        assert_eq!(app.widgets.content.default_mounts(), 1);
        assert_eq!(
            app.widgets.content.vm().mounted,
            Some(ContentView::RecentUpdates)
        );
        assert!(app.widgets.sidebar.vm().collapsed);
    }

    #[test]
    fn given_close_request_when_routed_then_sidebar_releases_frame_clock() {
        let (mut app, _task) = App::new();
        let _task = app.update(AppEvent::Sidebar(SidebarEvent::Intent(
            SidebarIntent::Trigger(ToggleSource::OpenButton),
        )));
        assert!(app.widgets.sidebar.needs_frames());

        let _task =
            app.update(AppEvent::Window(iced::window::Event::CloseRequested));

        assert!(app.widgets.sidebar.is_torn_down());
        assert!(!app.widgets.sidebar.needs_frames());

        let _task = app.update(AppEvent::Sidebar(SidebarEvent::Intent(
            SidebarIntent::Frame(Instant::now()),
        )));
        assert!(app.widgets.sidebar.vm().collapsed);
    }
}
