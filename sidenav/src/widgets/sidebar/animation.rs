use std::f32::consts::PI;
use std::time::{Duration, Instant};

use super::state::SidebarState;
use crate::display::DisplayMetrics;

/// Duration of one panel slide / overlay fade.
pub(crate) const PANEL_ANIMATION_MS: u64 = 400;
/// Overlay opacity while the panel is expanded.
pub(crate) const EXPANDED_OVERLAY_ALPHA: f32 = 0.16;

/// Token identifying one animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct AnimationId(u64);

/// End values of a transition, derived from the target state only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AnimationSpec {
    pub(crate) panel_translation_x: f32,
    pub(crate) overlay_alpha: f32,
    pub(crate) duration: Duration,
}

impl AnimationSpec {
    pub(crate) fn for_state(
        target: SidebarState,
        metrics: &DisplayMetrics,
    ) -> Self {
        let (panel_translation_x, overlay_alpha) = if target.collapsed {
            (-metrics.panel_offset_px(), 0.0)
        } else {
            (0.0, EXPANDED_OVERLAY_ALPHA)
        };

        Self {
            panel_translation_x,
            overlay_alpha,
            duration: Duration::from_millis(PANEL_ANIMATION_MS),
        }
    }
}

/// View properties mutated by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PanelProps {
    /// Horizontal translation of the panel container, physical pixels.
    pub(crate) translation_x: f32,
    pub(crate) overlay_alpha: f32,
    pub(crate) overlay_visible: bool,
}

impl PanelProps {
    /// Properties of a panel at rest in `state`.
    pub(crate) fn settled(state: SidebarState, metrics: &DisplayMetrics) -> Self {
        let spec = AnimationSpec::for_state(state, metrics);
        Self {
            translation_x: spec.panel_translation_x,
            overlay_alpha: spec.overlay_alpha,
            overlay_visible: !state.collapsed,
        }
    }
}

/// Outcome of [`AnimationCoordinator::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AnimationStart {
    pub(crate) id: AnimationId,
    pub(crate) cancelled: Option<AnimationId>,
}

/// Emitted once when a run reaches its end values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AnimationSettled {
    pub(crate) id: AnimationId,
    pub(crate) target: SidebarState,
}

#[derive(Debug, Clone, Copy)]
struct AnimationRun {
    id: AnimationId,
    target: SidebarState,
    spec: AnimationSpec,
    from_translation_x: f32,
    from_overlay_alpha: f32,
    started_at: Instant,
}

impl AnimationRun {
    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.spec.duration.as_secs_f32()).min(1.0)
    }

    fn sample(&self, now: Instant) -> (f32, f32, bool) {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return (
                self.spec.panel_translation_x,
                self.spec.overlay_alpha,
                true,
            );
        }

        let eased = accelerate_decelerate(progress);
        (
            lerp(
                self.from_translation_x,
                self.spec.panel_translation_x,
                eased,
            ),
            lerp(self.from_overlay_alpha, self.spec.overlay_alpha, eased),
            false,
        )
    }
}

/// Drives the synchronized panel slide and overlay fade, and sequences the
/// overlay visibility around each run.
///
/// At most one run is in flight. Beginning a new run while another is in
/// flight cancels it and continues from the values it had reached.
#[derive(Debug)]
pub(super) struct AnimationCoordinator {
    metrics: DisplayMetrics,
    props: PanelProps,
    run: Option<AnimationRun>,
    next_id: u64,
    cancellations: u64,
}

impl AnimationCoordinator {
    pub(super) fn new(initial: SidebarState, metrics: DisplayMetrics) -> Self {
        let metrics = metrics.sanitized();
        Self {
            props: PanelProps::settled(initial, &metrics),
            metrics,
            run: None,
            next_id: 0,
            cancellations: 0,
        }
    }

    pub(super) fn props(&self) -> PanelProps {
        self.props
    }

    pub(super) fn metrics(&self) -> DisplayMetrics {
        self.metrics
    }

    pub(super) fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    pub(super) fn cancellations(&self) -> u64 {
        self.cancellations
    }

    pub(super) fn runs_started(&self) -> u64 {
        self.next_id
    }

    /// Replace display metrics. A panel at rest snaps to the new offset; a
    /// run in flight keeps its end values.
    pub(super) fn set_metrics(
        &mut self,
        metrics: DisplayMetrics,
        state: SidebarState,
    ) {
        self.metrics = metrics.sanitized();
        if self.run.is_none() {
            self.props = PanelProps::settled(state, &self.metrics);
        }
    }

    /// Start the transition towards `target`.
    pub(super) fn begin(
        &mut self,
        target: SidebarState,
        now: Instant,
    ) -> AnimationStart {
        let cancelled = self.cancel(now);

        // Overlay must catch taps before the fade-in starts.
        if !target.collapsed {
            self.props.overlay_visible = true;
        }

        self.next_id += 1;
        let id = AnimationId(self.next_id);
        let spec = AnimationSpec::for_state(target, &self.metrics);
        self.run = Some(AnimationRun {
            id,
            target,
            spec,
            from_translation_x: self.props.translation_x,
            from_overlay_alpha: self.props.overlay_alpha,
            started_at: now,
        });

        log::debug!(
            "animation {id:?} started towards collapsed={} (cancelled {cancelled:?})",
            target.collapsed
        );

        AnimationStart { id, cancelled }
    }

    /// Advance the run in flight to `now`.
    pub(super) fn tick(&mut self, now: Instant) -> Option<AnimationSettled> {
        let run = self.run?;
        let (translation_x, overlay_alpha, finished) = run.sample(now);
        self.props.translation_x = translation_x;
        self.props.overlay_alpha = overlay_alpha;

        if !finished {
            return None;
        }

        self.run = None;
        if run.target.collapsed {
            self.props.overlay_visible = false;
        }
        log::debug!("animation {:?} settled", run.id);

        Some(AnimationSettled {
            id: run.id,
            target: run.target,
        })
    }

    /// Stop the run in flight at its current interpolated values.
    pub(super) fn cancel(&mut self, now: Instant) -> Option<AnimationId> {
        let run = self.run.take()?;
        let (translation_x, overlay_alpha, _) = run.sample(now);
        self.props.translation_x = translation_x;
        self.props.overlay_alpha = overlay_alpha;
        self.cancellations += 1;
        log::debug!("animation {:?} cancelled", run.id);
        Some(run.id)
    }
}

/// Slow start and end, fast middle.
fn accelerate_decelerate(t: f32) -> f32 {
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
