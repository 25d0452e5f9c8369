use std::time::Instant;

use super::event::ToggleSource;

/// A single raw toggle press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ToggleRequest {
    pub(crate) source: ToggleSource,
    pub(crate) timestamp: Instant,
}

/// Merges the open button, close button and overlay presses into one
/// ordered stream of [`ToggleRequest`]s.
#[derive(Debug)]
pub(super) struct ToggleEventSource {
    attached: bool,
    emitted: u64,
}

impl ToggleEventSource {
    pub(super) fn new() -> Self {
        Self {
            attached: true,
            emitted: 0,
        }
    }

    /// Turn a trigger activation into a request. Detached sources drop
    /// every activation.
    pub(super) fn emit(
        &mut self,
        source: ToggleSource,
        at: Instant,
    ) -> Option<ToggleRequest> {
        if !self.attached {
            log::debug!("toggle from {source:?} ignored: source detached");
            return None;
        }

        self.emitted += 1;
        Some(ToggleRequest {
            source,
            timestamp: at,
        })
    }

    pub(super) fn detach(&mut self) {
        self.attached = false;
    }

    pub(super) fn is_attached(&self) -> bool {
        self.attached
    }

    pub(super) fn emitted(&self) -> u64 {
        self.emitted
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{ToggleEventSource, ToggleSource};

    #[test]
    fn given_three_triggers_when_activated_then_requests_keep_activation_order()
    {
        let mut source = ToggleEventSource::new();
        let start = Instant::now();
        let presses = [
            ToggleSource::OverlayTap,
            ToggleSource::OpenButton,
            ToggleSource::CloseButton,
        ];

        let requests: Vec<_> = presses
            .iter()
            .enumerate()
            .filter_map(|(idx, &trigger)| {
                source.emit(trigger, start + Duration::from_millis(idx as u64))
            })
            .collect();

        let sources: Vec<_> = requests.iter().map(|r| r.source).collect();
        assert_eq!(sources, presses);
        assert!(requests.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert_eq!(source.emitted(), 3);
    }

    #[test]
    fn given_detached_source_when_activated_then_nothing_is_emitted() {
        let mut source = ToggleEventSource::new();
        source.detach();

        assert!(!source.is_attached());
        assert!(
            source
                .emit(ToggleSource::OpenButton, Instant::now())
                .is_none()
        );
        assert_eq!(source.emitted(), 0);
    }
}
