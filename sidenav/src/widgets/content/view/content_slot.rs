use iced::widget::{Space, column, container, text};
use iced::{Element, Length, alignment};

use super::super::model::{ContentView, ContentViewModel};

const CONTENT_PADDING: f32 = 24.0;
const CONTENT_TITLE_SIZE: f32 = 22.0;
const CONTENT_BODY_SIZE: f32 = 14.0;
const CONTENT_SPACING: f32 = 12.0;

/// Props for the content region.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContentSlotProps {
    pub(crate) vm: ContentViewModel,
}

/// Render whatever is mounted in the content slot.
pub(crate) fn view<'a, Message: 'a>(
    props: ContentSlotProps,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match props.vm.mounted {
        Some(view @ ContentView::RecentUpdates) => column![
            text(view.title()).size(CONTENT_TITLE_SIZE),
            text("Nothing published yet.").size(CONTENT_BODY_SIZE),
        ]
        .spacing(CONTENT_SPACING)
        .into(),
        None => Space::new().into(),
    };

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(CONTENT_PADDING)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .into()
}
