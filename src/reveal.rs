use crate::{foundation::core::TimerDelay, stage::ElementId};

/// One visibility callback from the host: how much of the element currently
/// intersects the (bias-adjusted) viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEvent {
    pub element: ElementId,
    pub visible_ratio: f64,
}

/// An element under reveal observation, with its per-element delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTarget {
    pub element: ElementId,
    pub delay: TimerDelay,
}

/// Threshold-crossing observer decoupled from any viewport API.
///
/// The host feeds [`VisibilityEvent`]s; the observer reports each transition
/// into view so the caller can schedule the delayed class addition. Targets
/// are never unobserved, so re-entry re-schedules — harmless, because class
/// addition is idempotent at the stage.
#[derive(Debug)]
pub struct RevealObserver {
    min_visible_ratio: f64,
    targets: Vec<RevealTarget>,
    in_view: Vec<bool>,
}

impl RevealObserver {
    pub fn new(min_visible_ratio: f64) -> Self {
        Self {
            min_visible_ratio,
            targets: Vec::new(),
            in_view: Vec::new(),
        }
    }

    pub fn observe(&mut self, target: RevealTarget) {
        self.targets.push(target);
        self.in_view.push(false);
    }

    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    /// Feed one visibility event. Returns the target when it just entered
    /// view (ratio crossed the threshold from below).
    pub fn on_visibility(&mut self, event: VisibilityEvent) -> Option<RevealTarget> {
        let idx = self
            .targets
            .iter()
            .position(|t| t.element == event.element);
        let Some(idx) = idx else {
            tracing::debug!(element = event.element.0, "visibility event for unobserved element");
            return None;
        };

        let entered = event.visible_ratio >= self.min_visible_ratio;
        let was_in_view = self.in_view[idx];
        self.in_view[idx] = entered;

        if entered && !was_in_view {
            return Some(self.targets[idx]);
        }
        None
    }
}
