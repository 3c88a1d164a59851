use crate::{
    foundation::{
        core::{ScrollMetrics, TimerDelay},
        error::StardriftResult,
    },
    model::Choreography,
    reveal::{RevealObserver, RevealTarget, VisibilityEvent},
    runtime::{FrameGate, TimerQueue},
    stage::{ElementId, Stage, StyleProp},
};

/// Session counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Coalesced frames that ran.
    pub frames_run: u64,
    /// Scroll events seen.
    pub scroll_events: u64,
    /// Scroll events dropped by the frame gate.
    pub scroll_events_coalesced: u64,
    /// Reveal class additions scheduled (includes the title cue).
    pub reveals_scheduled: u64,
    /// Timer tasks fired (class additions applied, stale targets included).
    pub classes_applied: u64,
}

#[derive(Clone, Debug)]
struct ScheduledClass {
    element: ElementId,
    class: String,
}

/// One page's choreography wired to one stage.
///
/// The host delivers four callbacks: scroll events, animation frames,
/// visibility events, and clock advances (virtual milliseconds since
/// `start`). Everything runs single-threaded; the frame gate is the only
/// shared flag.
pub struct ScrollSession<S: Stage> {
    choreography: Choreography,
    stage: S,
    gate: FrameGate,
    timers: TimerQueue<ScheduledClass>,
    observer: RevealObserver,
    latest: ScrollMetrics,
    now_ms: u64,
    stats: SessionStats,
}

impl<S: Stage> ScrollSession<S> {
    /// Fails fast on an invalid choreography; every later failure mode is
    /// silent-skip.
    pub fn new(choreography: Choreography, stage: S) -> StardriftResult<Self> {
        choreography.validate()?;
        let observer = RevealObserver::new(choreography.reveal.min_visible_ratio);
        Ok(Self {
            choreography,
            stage,
            gate: FrameGate::new(),
            timers: TimerQueue::new(),
            observer,
            latest: ScrollMetrics::default(),
            now_ms: 0,
            stats: SessionStats::default(),
        })
    }

    pub fn choreography(&self) -> &Choreography {
        &self.choreography
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    pub fn into_stage(self) -> S {
        self.stage
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Elements currently under reveal observation.
    pub fn observed_targets(&self) -> &[RevealTarget] {
        self.observer.targets()
    }

    /// Startup trigger: place props, register reveal targets, run one
    /// immediate flight update, and schedule the title cue.
    #[tracing::instrument(skip(self))]
    pub fn start(&mut self, initial: ScrollMetrics) -> StardriftResult<()> {
        self.latest = initial;
        self.place_props();
        self.register_reveal_targets();
        self.apply_flight()?;

        if let Some(cue) = self.choreography.title_cue.clone()
            && let Some(el) = self.stage.resolve(&cue.selector)
        {
            self.schedule_class(el, cue.delay);
        }
        Ok(())
    }

    /// Record the newest scroll metrics and arm the frame gate. Returns true
    /// when this event owns scheduling the next frame; dropped events still
    /// update the metrics, so the frame always sees the newest position.
    pub fn handle_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        self.latest = metrics;
        self.stats.scroll_events += 1;
        let armed = self.gate.arm();
        if !armed {
            self.stats.scroll_events_coalesced += 1;
        }
        armed
    }

    /// Animation-frame callback: run at most one flight update, then reopen
    /// the gate. Returns whether a frame ran.
    #[tracing::instrument(skip(self))]
    pub fn run_frame(&mut self) -> StardriftResult<bool> {
        if !self.gate.is_armed() {
            return Ok(false);
        }
        self.apply_flight()?;
        self.gate.disarm();
        self.stats.frames_run += 1;
        Ok(true)
    }

    /// Visibility callback: on a target's entry into view, schedule its
    /// delayed class addition.
    pub fn handle_visibility(&mut self, event: VisibilityEvent) {
        if let Some(target) = self.observer.on_visibility(event) {
            self.schedule_class(target.element, target.delay);
        }
    }

    /// Fire every timer due at or before `now_ms` (virtual milliseconds
    /// since `start`), in deadline-then-insertion order.
    pub fn advance_clock(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
        while let Some(task) = self.timers.pop_due(self.now_ms) {
            self.stage.add_class(task.element, &task.class);
            self.stats.classes_applied += 1;
        }
    }

    fn schedule_class(&mut self, element: ElementId, delay: TimerDelay) {
        let due = self.now_ms.saturating_add(delay.as_millis());
        self.timers.schedule(
            due,
            ScheduledClass {
                element,
                class: self.choreography.reveal.class_name.clone(),
            },
        );
        self.stats.reveals_scheduled += 1;
    }

    fn place_props(&mut self) {
        for prop in self.choreography.props.clone() {
            let Some(el) = self.stage.resolve(&prop.selector) else {
                tracing::debug!(selector = %prop.selector, "prop not found, skipping");
                continue;
            };
            self.stage.set_style(el, StyleProp::Top, prop.top_pct);
            self.stage.set_style(el, StyleProp::Left, prop.left_pct);
        }
    }

    fn register_reveal_targets(&mut self) {
        let selectors = self.choreography.reveal.selectors.clone();
        let delay_attr = self.choreography.reveal.delay_attr.clone();
        for selector in selectors {
            for el in self.stage.resolve_all(&selector) {
                let delay = TimerDelay::parse_attr(self.stage.attr(el, &delay_attr).as_deref());
                self.observer.observe(RevealTarget { element: el, delay });
            }
        }
    }

    /// Both the craft and the viewer must resolve for any update to happen;
    /// otherwise the whole update is skipped and prior visual state stands.
    fn apply_flight(&mut self) -> StardriftResult<()> {
        let plan = &self.choreography.flight;
        let (Some(craft), Some(viewer)) = (
            self.stage.resolve(&plan.craft_selector),
            self.stage.resolve(&plan.viewer_selector),
        ) else {
            tracing::debug!(
                craft = %plan.craft_selector,
                viewer = %plan.viewer_selector,
                "craft or viewer missing, flight update skipped"
            );
            return Ok(());
        };

        let frame = plan.sample(self.latest.progress(plan.speed_multiplier))?;

        self.stage
            .set_style(craft, StyleProp::Top, frame.position_pct.y);
        self.stage
            .set_style(craft, StyleProp::Left, frame.position_pct.x);
        self.stage
            .set_style(craft, StyleProp::Opacity, frame.opacity);
        self.stage
            .set_attr(viewer, "camera-orbit", &frame.orbit.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dsl::ChoreographyBuilder, stage::MemoryStage};

    fn metrics(offset: f64) -> ScrollMetrics {
        ScrollMetrics::new(offset, 2000.0, 800.0)
    }

    fn stage_with_flight_elements() -> MemoryStage {
        let mut stage = MemoryStage::new();
        stage.insert("#spaceship");
        stage.insert("#spaceship-viewer");
        stage
    }

    #[test]
    fn start_places_props_once() {
        let mut stage = stage_with_flight_elements();
        let p1 = stage.insert(".planet-1");

        let ch = ChoreographyBuilder::new().no_title_cue().build().unwrap();
        let mut session = ScrollSession::new(ch, stage).unwrap();
        session.start(metrics(0.0)).unwrap();

        let stage = session.stage();
        assert_eq!(stage.style(p1, StyleProp::Top), Some(25.0));
        assert_eq!(stage.style(p1, StyleProp::Left), Some(75.0));
    }

    #[test]
    fn scroll_burst_runs_one_frame() {
        let ch = ChoreographyBuilder::new().no_title_cue().build().unwrap();
        let mut session = ScrollSession::new(ch, stage_with_flight_elements()).unwrap();
        session.start(metrics(0.0)).unwrap();

        assert!(session.handle_scroll(metrics(100.0)));
        assert!(!session.handle_scroll(metrics(200.0)));
        assert!(!session.handle_scroll(metrics(300.0)));

        assert!(session.run_frame().unwrap());
        assert!(!session.run_frame().unwrap());

        let stats = session.stats();
        assert_eq!(stats.frames_run, 1);
        assert_eq!(stats.scroll_events, 3);
        assert_eq!(stats.scroll_events_coalesced, 2);
    }

    #[test]
    fn coalesced_frame_uses_newest_metrics() {
        let ch = ChoreographyBuilder::new().no_title_cue().build().unwrap();
        let mut session = ScrollSession::new(ch, stage_with_flight_elements()).unwrap();
        session.start(metrics(0.0)).unwrap();

        session.handle_scroll(metrics(100.0));
        session.handle_scroll(metrics(600.0)); // dropped, but metrics stick
        session.run_frame().unwrap();

        let craft = session.stage().resolve("#spaceship").unwrap();
        // progress 0.5 over span 70.
        assert_eq!(session.stage().style(craft, StyleProp::Top), Some(35.0));
    }

    #[test]
    fn missing_craft_or_viewer_skips_update() {
        let mut stage = MemoryStage::new();
        stage.insert("#spaceship"); // viewer absent

        let ch = ChoreographyBuilder::new().no_title_cue().build().unwrap();
        let mut session = ScrollSession::new(ch, stage).unwrap();
        session.start(metrics(0.0)).unwrap();

        session.handle_scroll(metrics(500.0));
        assert!(session.run_frame().unwrap());
        assert!(session.stage().mutations().is_empty());
    }

    #[test]
    fn title_cue_fires_after_its_delay() {
        let mut stage = stage_with_flight_elements();
        let title = stage.insert("#main-title");

        let mut session = ScrollSession::new(Choreography::default(), stage).unwrap();
        session.start(metrics(0.0)).unwrap();

        session.advance_clock(99);
        assert!(!session.stage().has_class(title, "animate"));
        session.advance_clock(100);
        assert!(session.stage().has_class(title, "animate"));
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut stage = stage_with_flight_elements();
        let title = stage.insert("#main-title");

        let mut session = ScrollSession::new(Choreography::default(), stage).unwrap();
        session.start(metrics(0.0)).unwrap();

        session.advance_clock(500);
        assert!(session.stage().has_class(title, "animate"));
        session.advance_clock(0); // stale callback; now stays at 500
        session.handle_visibility(VisibilityEvent {
            element: title,
            visible_ratio: 1.0,
        });
        session.advance_clock(500);
        assert_eq!(session.stats().classes_applied, 2);
    }
}
