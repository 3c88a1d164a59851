//! Stardrift choreographs decorative elements on a scrollable page: a craft
//! element flies a configured waypoint path as the page scrolls, fixed props
//! are placed once at startup, and observed sections receive a one-shot
//! reveal class when they enter the viewport.
//!
//! # Pipeline overview
//!
//! 1. **Model**: a validated, serde-serializable [`Choreography`] holds every
//!    knob (waypoints, prop placements, reveal selectors, title cue).
//! 2. **Sample**: `FlightPlan::sample` maps scroll progress to a pure
//!    [`FlightFrame`] (position, facing, camera orbit, opacity).
//! 3. **Apply**: a [`ScrollSession`] writes frames, prop placements, and
//!    reveal classes through the [`Stage`] trait; [`MemoryStage`] is the
//!    in-memory host for tests and the CLI.
//!
//! The host delivers scroll, animation-frame, visibility, and clock
//! callbacks; scroll bursts coalesce to at most one flight update per frame
//! via [`FrameGate`]. Configuration errors fail fast; runtime failures
//! (missing elements, malformed delay attributes) degrade silently.
#![forbid(unsafe_code)]

pub mod dsl;
pub mod flight;
pub mod foundation;
pub mod model;
pub mod reveal;
pub mod runtime;
pub mod session;
pub mod stage;

pub use dsl::ChoreographyBuilder;
pub use flight::{CameraOrbit, Facing, FlightFrame};
pub use foundation::core::{Point, ScrollMetrics, TimerDelay, Vec2};
pub use foundation::error::{StardriftError, StardriftResult};
pub use model::{Choreography, FlightPlan, PropPlacement, RevealPlan, TitleCue};
pub use reveal::{RevealObserver, RevealTarget, VisibilityEvent};
pub use runtime::{FrameGate, TimerQueue};
pub use session::{ScrollSession, SessionStats};
pub use stage::{ElementId, MemoryStage, Mutation, Stage, StyleProp};
