/// Views the content slot can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContentView {
    RecentUpdates,
}

impl ContentView {
    /// The view mounted on a fresh start.
    pub(crate) const DEFAULT: Self = Self::RecentUpdates;

    pub(crate) fn title(&self) -> &'static str {
        match self {
            Self::RecentUpdates => "Recent updates",
        }
    }
}

/// Transient shell state handed back by a host that restores the screen.
/// Its presence alone means the content slot already holds a view.
#[derive(Debug, Clone, Default)]
pub(crate) struct RestoredShell {
    pub(crate) mounted: Option<ContentView>,
}

/// Read-only snapshot of the content slot.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContentViewModel {
    pub(crate) mounted: Option<ContentView>,
}
