use crate::{
    foundation::{core::TimerDelay, error::StardriftResult},
    model::{Choreography, FlightPlan, PropPlacement, RevealPlan, TitleCue},
};

/// Programmatic construction of a [`Choreography`].
///
/// Starts from the built-in defaults so tests and demos only override what
/// they care about; `build` runs full validation.
pub struct ChoreographyBuilder {
    flight: FlightPlan,
    props: Vec<PropPlacement>,
    reveal: RevealPlan,
    title_cue: Option<TitleCue>,
}

impl ChoreographyBuilder {
    pub fn new() -> Self {
        let defaults = Choreography::default();
        Self {
            flight: defaults.flight,
            props: defaults.props,
            reveal: defaults.reveal,
            title_cue: defaults.title_cue,
        }
    }

    pub fn flight(mut self, flight: FlightPlan) -> Self {
        self.flight = flight;
        self
    }

    pub fn waypoints(mut self, waypoints_x_pct: Vec<f64>) -> Self {
        self.flight.waypoints_x_pct = waypoints_x_pct;
        self
    }

    pub fn speed_multiplier(mut self, speed: f64) -> Self {
        self.flight.speed_multiplier = speed;
        self
    }

    pub fn clear_props(mut self) -> Self {
        self.props.clear();
        self
    }

    pub fn prop(mut self, selector: impl Into<String>, top_pct: f64, left_pct: f64) -> Self {
        self.props.push(PropPlacement {
            selector: selector.into(),
            top_pct,
            left_pct,
        });
        self
    }

    pub fn reveal(mut self, reveal: RevealPlan) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn reveal_selectors(mut self, selectors: Vec<String>) -> Self {
        self.reveal.selectors = selectors;
        self
    }

    pub fn title_cue(mut self, selector: impl Into<String>, delay: TimerDelay) -> Self {
        self.title_cue = Some(TitleCue {
            selector: selector.into(),
            delay,
        });
        self
    }

    pub fn no_title_cue(mut self) -> Self {
        self.title_cue = None;
        self
    }

    pub fn build(self) -> StardriftResult<Choreography> {
        let ch = Choreography {
            flight: self.flight,
            props: self.props,
            reveal: self.reveal,
            title_cue: self.title_cue,
        };
        ch.validate()?;
        Ok(ch)
    }
}

impl Default for ChoreographyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_compose() {
        let ch = ChoreographyBuilder::new()
            .waypoints(vec![0.0, 100.0])
            .speed_multiplier(2.0)
            .clear_props()
            .prop(".moon", 10.0, 90.0)
            .title_cue("#hero", TimerDelay(50))
            .build()
            .unwrap();

        assert_eq!(ch.flight.waypoints_x_pct, vec![0.0, 100.0]);
        assert_eq!(ch.flight.speed_multiplier, 2.0);
        assert_eq!(ch.props.len(), 1);
        assert_eq!(ch.props[0].selector, ".moon");
        assert_eq!(ch.title_cue.unwrap().delay, TimerDelay(50));
    }

    #[test]
    fn build_rejects_invalid_overrides() {
        assert!(ChoreographyBuilder::new().waypoints(vec![]).build().is_err());
        assert!(
            ChoreographyBuilder::new()
                .speed_multiplier(-1.0)
                .build()
                .is_err()
        );
    }
}
