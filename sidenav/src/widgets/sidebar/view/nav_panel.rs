use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length, Theme, alignment};

use super::super::event::{SidebarIntent, ToggleSource};
use super::super::model::SidebarViewModel;
use super::header_bar::HEADER_BAR_HEIGHT;
use super::trigger_button;
use crate::display::PANEL_WIDTH_DP;

const NAV_PANEL_PADDING: f32 = 8.0;
const NAV_PANEL_TITLE_SIZE: f32 = 16.0;

/// Props for the sliding navigation panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavPanelProps<'a> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) title: &'a str,
}

/// Render the panel, showing only the part its translation leaves on
/// screen. The navigation list is composed by the caller.
pub(crate) fn view<'a>(
    props: NavPanelProps<'a>,
    nav_list: Element<'a, SidebarIntent>,
) -> Element<'a, SidebarIntent> {
    let panel_header = row![
        text(props.title).size(NAV_PANEL_TITLE_SIZE),
        Space::new().width(Length::Fill),
        trigger_button("\u{2715}", ToggleSource::CloseButton),
    ]
    .align_y(alignment::Vertical::Center)
    .padding([0.0, NAV_PANEL_PADDING])
    .height(Length::Fixed(HEADER_BAR_HEIGHT));

    let panel = container(column![panel_header, nav_list])
        .width(Length::Fixed(PANEL_WIDTH_DP))
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(
                theme.extended_palette().background.strong.color.into(),
            ),
            ..Default::default()
        });

    container(panel)
        .width(Length::Fixed(props.vm.visible_panel_width()))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .clip(true)
        .into()
}
