use kurbo::Point;

use crate::{
    foundation::{
        error::{StardriftError, StardriftResult},
        math::lerp,
    },
    model::FlightPlan,
};

/// Which way the craft faces along the current path segment.
///
/// Chosen by a strict greater-than comparison of the two bracketing
/// waypoints, so equal adjacent waypoints face `Leftward`. That tie-break is
/// load-bearing for the trailing `[100, 100, 100]` hold in the default path
/// and is kept as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Facing {
    Rightward,
    Leftward,
}

impl Facing {
    pub fn from_segment(current_x: f64, next_x: f64) -> Self {
        if next_x > current_x {
            Self::Rightward
        } else {
            Self::Leftward
        }
    }
}

/// Camera orientation written to the viewer element, formatted as
/// `"<yaw>deg <pitch>deg <distance>%"`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraOrbit {
    pub yaw_deg: f64,
    pub pitch_deg: f64,
    pub distance_pct: f64,
}

impl std::fmt::Display for CameraOrbit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}deg {}deg {}%",
            self.yaw_deg, self.pitch_deg, self.distance_pct
        )
    }
}

/// One evaluated flight sample: everything the session needs to write to the
/// stage for a given scroll progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FlightFrame {
    pub progress: f64,
    /// x = left percent, y = top percent.
    pub position_pct: Point,
    pub facing: Facing,
    pub orbit: CameraOrbit,
    /// Binary step: 0.0 exactly at progress 1.0, else 1.0. Not a fade.
    pub opacity: f64,
}

impl FlightPlan {
    /// Sample the flight at a scroll progress.
    ///
    /// Vertical position is a linear ramp over `descent_span_pct`; horizontal
    /// position is piecewise-linear over the waypoints with the upper index
    /// clamped to the last waypoint (no extrapolation). Out-of-range progress
    /// is clamped to [0, 1].
    pub fn sample(&self, progress: f64) -> StardriftResult<FlightFrame> {
        let wp = &self.waypoints_x_pct;
        if wp.is_empty() {
            return Err(StardriftError::sample("flight plan has no waypoints"));
        }

        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let top_pct = progress * self.descent_span_pct;

        let path_pos = progress * (wp.len() - 1) as f64;
        let i = (path_pos.floor() as usize).min(wp.len() - 1);
        let j = (i + 1).min(wp.len() - 1);
        let seg_t = path_pos - i as f64;
        let left_pct = lerp(&wp[i], &wp[j], seg_t);

        let facing = Facing::from_segment(wp[i], wp[j]);
        let yaw_deg = match facing {
            Facing::Rightward => self.yaw_right_deg,
            Facing::Leftward => self.yaw_left_deg,
        };

        let opacity = if progress >= 1.0 { 0.0 } else { 1.0 };

        Ok(FlightFrame {
            progress,
            position_pct: Point::new(left_pct, top_pct),
            facing,
            orbit: CameraOrbit {
                yaw_deg,
                pitch_deg: self.pitch_deg,
                distance_pct: self.camera_distance_pct,
            },
            opacity,
        })
    }
}
