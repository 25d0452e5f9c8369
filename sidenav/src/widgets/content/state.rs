use super::model::ContentView;

/// The single content region; holds at most one mounted view.
#[derive(Debug, Default)]
pub(super) struct ContentSlot {
    mounted: Option<ContentView>,
}

impl ContentSlot {
    pub(super) fn mounted(&self) -> Option<ContentView> {
        self.mounted
    }

    /// Mount `view`, returning the view it replaced.
    pub(super) fn mount(&mut self, view: ContentView) -> Option<ContentView> {
        self.mounted.replace(view)
    }
}
