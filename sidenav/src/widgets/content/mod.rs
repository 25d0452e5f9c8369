pub(crate) mod model;
mod state;
pub(crate) mod view;

use self::model::{ContentView, ContentViewModel, RestoredShell};
use self::state::ContentSlot;

/// Content router owning the single content slot.
pub(crate) struct ContentWidget {
    slot: ContentSlot,
    default_mounts: u32,
}

impl ContentWidget {
    /// Create a router with an empty slot.
    pub(crate) fn new() -> Self {
        Self {
            slot: ContentSlot::default(),
            default_mounts: 0,
        }
    }

    /// First-load guard: mount the default view on a fresh start only. A
    /// restored screen keeps whatever its host brought back.
    pub(crate) fn on_create(&mut self, restored: Option<&RestoredShell>) {
        match restored {
            None => self.show_default(),
            Some(restored) => {
                log::info!(
                    "content restored with {:?}; default view not mounted",
                    restored.mounted
                );
                if let Some(view) = restored.mounted {
                    self.slot.mount(view);
                }
            },
        }
    }

    /// Mount the default content view into the slot.
    pub(crate) fn show_default(&mut self) {
        let replaced = self.slot.mount(ContentView::DEFAULT);
        self.default_mounts += 1;
        log::info!(
            "content slot mounted {:?} (replaced {replaced:?})",
            ContentView::DEFAULT
        );
    }

    /// Number of times the default view was mounted.
    pub(crate) fn default_mounts(&self) -> u32 {
        self.default_mounts
    }

    /// Build a read-only view model for the content region.
    pub(crate) fn vm(&self) -> ContentViewModel {
        ContentViewModel {
            mounted: self.slot.mounted(),
        }
    }
}
