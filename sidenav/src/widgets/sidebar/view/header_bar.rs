use iced::widget::{container, row, text};
use iced::{Element, Length, Theme, alignment};

use super::super::event::{SidebarIntent, ToggleSource};
use super::trigger_button;

pub(crate) const HEADER_BAR_HEIGHT: f32 = 48.0;
const HEADER_BAR_PADDING: f32 = 8.0;
const HEADER_BAR_TITLE_SIZE: f32 = 18.0;

/// Props for rendering the app header.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderBarProps<'a> {
    pub(crate) title: &'a str,
}

/// Render the app header carrying the open trigger.
pub(crate) fn view(props: HeaderBarProps<'_>) -> Element<'_, SidebarIntent> {
    let content = row![
        trigger_button("\u{2630}", ToggleSource::OpenButton),
        text(props.title).size(HEADER_BAR_TITLE_SIZE),
    ]
    .spacing(HEADER_BAR_PADDING)
    .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_BAR_HEIGHT))
        .padding([0.0, HEADER_BAR_PADDING])
        .align_y(alignment::Vertical::Center)
        .style(|theme: &Theme| container::Style {
            background: Some(
                theme.extended_palette().background.weak.color.into(),
            ),
            ..Default::default()
        })
        .into()
}
