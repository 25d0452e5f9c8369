use iced::widget::{Column, container, scrollable, text};
use iced::{Element, Length, Theme};

use super::super::model::NavRow;

const NAV_ROW_HEIGHT: f32 = 44.0;
const NAV_ROW_PADDING: f32 = 16.0;
const NAV_ROW_TEXT_SIZE: f32 = 14.0;

/// Props for the navigation list.
#[derive(Debug, Clone)]
pub(crate) struct NavListProps<'a> {
    pub(crate) rows: Vec<NavRow<'a>>,
}

/// Render rows top to bottom in a vertical scroll area.
pub(crate) fn view<'a, Message: 'a>(
    props: NavListProps<'a>,
) -> Element<'a, Message> {
    let rows = props.rows.into_iter().map(|row| {
        container(text(row.label).size(NAV_ROW_TEXT_SIZE))
            .width(Length::Fill)
            .padding([0.0, NAV_ROW_PADDING])
            .center_y(Length::Fixed(NAV_ROW_HEIGHT))
            .style(|theme: &Theme| container::Style {
                text_color: Some(theme.palette().text),
                ..Default::default()
            })
            .into()
    });

    scrollable(Column::with_children(rows).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
