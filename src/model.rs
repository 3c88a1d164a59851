use crate::foundation::{
    core::TimerDelay,
    error::{StardriftError, StardriftResult},
};

/// Complete choreography for one page: the craft's flight plan, one-shot prop
/// placements, reveal observation, and an optional startup title cue.
///
/// Every knob lives here instead of in process-wide constants so sessions can
/// be constructed independently and driven from tests.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Choreography {
    pub flight: FlightPlan,
    pub props: Vec<PropPlacement>,
    pub reveal: RevealPlan,
    pub title_cue: Option<TitleCue>,
}

/// The moving element's configuration.
///
/// Horizontal waypoints are percentages of viewport width and may repeat or
/// lie outside 0..100 (intentional overshoot for off-screen entry/exit).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlightPlan {
    pub waypoints_x_pct: Vec<f64>,
    pub speed_multiplier: f64,
    /// Vertical ramp span: top = progress * span.
    pub descent_span_pct: f64,
    pub yaw_right_deg: f64,
    pub yaw_left_deg: f64,
    pub pitch_deg: f64,
    pub camera_distance_pct: f64,
    pub craft_selector: String,
    pub viewer_selector: String,
}

/// A decorative element placed once at session start.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PropPlacement {
    pub selector: String,
    pub top_pct: f64,
    pub left_pct: f64,
}

/// Which elements to observe for viewport entry, and how to reveal them.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealPlan {
    pub selectors: Vec<String>,
    /// Visible fraction at which an element counts as entered.
    pub min_visible_ratio: f64,
    /// Biases the trigger region upward; host adapters subtract this from the
    /// bottom of the viewport when computing visible ratios.
    pub bottom_bias_px: f64,
    pub class_name: String,
    /// Attribute holding an optional per-element delay in milliseconds.
    pub delay_attr: String,
}

/// Class addition scheduled unconditionally at session start.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TitleCue {
    pub selector: String,
    pub delay: TimerDelay,
}

impl Default for Choreography {
    fn default() -> Self {
        Self {
            flight: FlightPlan::default(),
            props: vec![
                PropPlacement {
                    selector: ".planet-1".to_string(),
                    top_pct: 25.0,
                    left_pct: 75.0,
                },
                PropPlacement {
                    selector: ".planet-2".to_string(),
                    top_pct: 45.0,
                    left_pct: 25.0,
                },
                PropPlacement {
                    selector: ".planet-3".to_string(),
                    top_pct: 70.0,
                    left_pct: 70.0,
                },
                // Intentionally below the fold.
                PropPlacement {
                    selector: ".planet-4".to_string(),
                    top_pct: 110.0,
                    left_pct: 40.0,
                },
            ],
            reveal: RevealPlan::default(),
            title_cue: Some(TitleCue {
                selector: "#main-title".to_string(),
                delay: TimerDelay(100),
            }),
        }
    }
}

impl Default for FlightPlan {
    fn default() -> Self {
        Self {
            waypoints_x_pct: vec![50.0, -5.0, 70.0, -15.0, 100.0, 100.0, 100.0],
            speed_multiplier: 1.0,
            descent_span_pct: 70.0,
            yaw_right_deg: -90.0,
            yaw_left_deg: 90.0,
            pitch_deg: 80.0,
            camera_distance_pct: 105.0,
            craft_selector: "#spaceship".to_string(),
            viewer_selector: "#spaceship-viewer".to_string(),
        }
    }
}

impl Default for RevealPlan {
    fn default() -> Self {
        Self {
            selectors: vec![
                ".page-section".to_string(),
                ".planet-row".to_string(),
                ".astronaut".to_string(),
                "#main-title".to_string(),
                "#nontech-title".to_string(),
                ".endurance-img-container".to_string(),
            ],
            min_visible_ratio: 0.1,
            bottom_bias_px: 50.0,
            class_name: "animate".to_string(),
            delay_attr: "data-delay".to_string(),
        }
    }
}

impl Choreography {
    pub fn validate(&self) -> StardriftResult<()> {
        self.flight.validate()?;

        for prop in &self.props {
            if prop.selector.trim().is_empty() {
                return Err(StardriftError::validation(
                    "prop selector must be non-empty",
                ));
            }
            if !prop.top_pct.is_finite() || !prop.left_pct.is_finite() {
                return Err(StardriftError::validation(format!(
                    "prop '{}' has non-finite coordinates",
                    prop.selector
                )));
            }
        }

        self.reveal.validate()?;

        if let Some(cue) = &self.title_cue
            && cue.selector.trim().is_empty()
        {
            return Err(StardriftError::validation(
                "title cue selector must be non-empty",
            ));
        }

        Ok(())
    }
}

impl FlightPlan {
    pub fn validate(&self) -> StardriftResult<()> {
        if self.waypoints_x_pct.is_empty() {
            return Err(StardriftError::validation(
                "flight waypoints must be non-empty",
            ));
        }
        if !self.waypoints_x_pct.iter().all(|x| x.is_finite()) {
            return Err(StardriftError::validation(
                "flight waypoints must be finite",
            ));
        }
        if !(self.speed_multiplier.is_finite() && self.speed_multiplier > 0.0) {
            return Err(StardriftError::validation(
                "speed_multiplier must be finite and > 0",
            ));
        }
        for (name, v) in [
            ("descent_span_pct", self.descent_span_pct),
            ("yaw_right_deg", self.yaw_right_deg),
            ("yaw_left_deg", self.yaw_left_deg),
            ("pitch_deg", self.pitch_deg),
            ("camera_distance_pct", self.camera_distance_pct),
        ] {
            if !v.is_finite() {
                return Err(StardriftError::validation(format!(
                    "flight {name} must be finite"
                )));
            }
        }
        if self.craft_selector.trim().is_empty() || self.viewer_selector.trim().is_empty() {
            return Err(StardriftError::validation(
                "craft and viewer selectors must be non-empty",
            ));
        }
        Ok(())
    }
}

impl RevealPlan {
    pub fn validate(&self) -> StardriftResult<()> {
        if self.selectors.iter().any(|s| s.trim().is_empty()) {
            return Err(StardriftError::validation(
                "reveal selectors must be non-empty",
            ));
        }
        if !(self.min_visible_ratio > 0.0 && self.min_visible_ratio <= 1.0) {
            return Err(StardriftError::validation(
                "min_visible_ratio must be in (0, 1]",
            ));
        }
        if !self.bottom_bias_px.is_finite() {
            return Err(StardriftError::validation("bottom_bias_px must be finite"));
        }
        if self.class_name.trim().is_empty() {
            return Err(StardriftError::validation(
                "reveal class_name must be non-empty",
            ));
        }
        if self.delay_attr.trim().is_empty() {
            return Err(StardriftError::validation(
                "reveal delay_attr must be non-empty",
            ));
        }
        Ok(())
    }
}
