use iced::widget::{Space, container, mouse_area, opaque};
use iced::{Color, Element, Length};

use super::super::event::{SidebarIntent, ToggleSource};

/// Props for the dimming overlay.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OverlayProps {
    pub(crate) alpha: f32,
}

/// Render the dimming layer; it swallows every press and turns it into an
/// overlay toggle.
pub(crate) fn view<'a>(props: OverlayProps) -> Element<'a, SidebarIntent> {
    let scrim_color = Color {
        a: props.alpha.clamp(0.0, 1.0),
        ..Color::BLACK
    };

    let scrim = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(scrim_color.into()),
            ..Default::default()
        });

    opaque(
        mouse_area(scrim)
            .on_press(SidebarIntent::Trigger(ToggleSource::OverlayTap)),
    )
}
