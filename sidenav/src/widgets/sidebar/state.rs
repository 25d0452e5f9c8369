use super::debounce::ToggleBurst;
use super::source::ToggleRequest;

/// Collapsed/expanded flag of the navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SidebarState {
    pub(crate) collapsed: bool,
}

impl SidebarState {
    pub(crate) const COLLAPSED: Self = Self { collapsed: true };
    pub(crate) const EXPANDED: Self = Self { collapsed: false };
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::COLLAPSED
    }
}

/// Every request flips the panel, whichever trigger produced it.
pub(crate) fn next(
    current: SidebarState,
    _request: &ToggleRequest,
) -> SidebarState {
    if current.collapsed {
        SidebarState::EXPANDED
    } else {
        SidebarState::COLLAPSED
    }
}

/// Owner of the single [`SidebarState`] instance.
#[derive(Debug, Default)]
pub(super) struct SidebarStateMachine {
    state: SidebarState,
}

impl SidebarStateMachine {
    pub(super) fn state(&self) -> SidebarState {
        self.state
    }

    /// Fold every press coalesced into `burst`, so the result follows the
    /// parity of the raw presses.
    pub(super) fn apply(&mut self, burst: &ToggleBurst) -> SidebarState {
        for _ in 0..burst.count {
            self.state = next(self.state, &burst.latest);
        }
        self.state
    }
}
