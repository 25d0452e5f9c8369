pub(crate) mod header_bar;
pub(crate) mod nav_panel;
pub(crate) mod overlay;

use iced::widget::{button, text};
use iced::{Element, Length};

use super::event::{SidebarIntent, ToggleSource};

const TRIGGER_BUTTON_SIZE: f32 = 36.0;
const TRIGGER_GLYPH_SIZE: f32 = 18.0;

/// Square text button that emits a toggle trigger.
fn trigger_button<'a>(
    glyph: &'a str,
    source: ToggleSource,
) -> Element<'a, SidebarIntent> {
    button(text(glyph).size(TRIGGER_GLYPH_SIZE).center())
        .on_press(SidebarIntent::Trigger(source))
        .width(Length::Fixed(TRIGGER_BUTTON_SIZE))
        .height(Length::Fixed(TRIGGER_BUTTON_SIZE))
        .style(button::text)
        .into()
}
