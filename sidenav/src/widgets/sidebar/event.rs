use std::time::Instant;

use super::animation::AnimationId;

/// Trigger that produced a raw toggle press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToggleSource {
    OpenButton,
    CloseButton,
    OverlayTap,
}

/// Intent events handled by the sidebar presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    /// One of the three toggle triggers was pressed.
    Trigger(ToggleSource),
    /// Frame clock tick used to flush the debounce window and animate.
    Frame(Instant),
    /// Screen is going away; release every stream.
    Teardown,
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEffect {
    TransitionStarted {
        id: AnimationId,
        collapsed: bool,
        cancelled: Option<AnimationId>,
    },
    TransitionSettled {
        id: AnimationId,
        collapsed: bool,
    },
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
