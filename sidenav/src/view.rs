use iced::widget::{Stack, column, container, row};
use iced::{Element, Length, Theme};

use super::{APP_TITLE, App, AppEvent};
use crate::widgets::content::view::content_slot::{self, ContentSlotProps};
use crate::widgets::navigation::view::nav_list::{self, NavListProps};
use crate::widgets::sidebar::view::header_bar::{self, HeaderBarProps};
use crate::widgets::sidebar::view::nav_panel::{self, NavPanelProps};
use crate::widgets::sidebar::view::overlay::{self, OverlayProps};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Render the root application view.
///
/// The panel and the main column slide together: the panel occupies its
/// visible width and the main column keeps the full window width, so the
/// row overflows to the right and is clipped.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let sidebar_vm = app.widgets.sidebar.vm();
    let content_vm = app.widgets.content.vm();

    let nav_list = nav_list::view(NavListProps {
        rows: app.widgets.navigation.rows(),
    });
    let panel = nav_panel::view(
        NavPanelProps {
            vm: sidebar_vm,
            title: APP_TITLE,
        },
        nav_list,
    )
    .map(sidebar_intent);

    let header = header_bar::view(HeaderBarProps {
        title: content_vm
            .mounted
            .map(|view| view.title())
            .unwrap_or(APP_TITLE),
    })
    .map(sidebar_intent);

    let content = content_slot::view(ContentSlotProps { vm: content_vm });

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> = vec![
        column![header, content]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    ];

    if sidebar_vm.props.overlay_visible {
        layers.push(
            overlay::view(OverlayProps {
                alpha: sidebar_vm.props.overlay_alpha,
            })
            .map(sidebar_intent),
        );
    }

    let main = container(Stack::with_children(layers))
        .width(Length::Fixed(app.state.window_size.width))
        .height(Length::Fill);

    container(row![panel, main])
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .into()
}

fn sidebar_intent(intent: SidebarIntent) -> AppEvent {
    AppEvent::Sidebar(SidebarEvent::Intent(intent))
}
