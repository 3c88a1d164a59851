pub use kurbo::{Point, Vec2};

/// Raw scroll signal reported by the host for one scroll event.
///
/// All fields are in CSS pixels. The derived progress is what the rest of the
/// engine consumes; the raw fields are never stored beyond the latest event.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    pub offset_px: f64,
    pub page_height_px: f64,
    pub viewport_height_px: f64,
}

impl ScrollMetrics {
    pub fn new(offset_px: f64, page_height_px: f64, viewport_height_px: f64) -> Self {
        Self {
            offset_px,
            page_height_px,
            viewport_height_px,
        }
    }

    /// Scrollable distance in pixels. May be zero or negative when the page
    /// fits inside the viewport.
    pub fn scrollable_px(self) -> f64 {
        self.page_height_px - self.viewport_height_px
    }

    /// Scroll progress in [0, 1] after applying the speed multiplier.
    ///
    /// A non-positive scrollable distance never reaches the division: the
    /// progress is 1.0 if any positive adjusted offset exists, else 0.0.
    pub fn progress(self, speed_multiplier: f64) -> f64 {
        let adjusted = self.offset_px * speed_multiplier;
        let scrollable = self.scrollable_px();
        if scrollable <= 0.0 {
            return if adjusted > 0.0 { 1.0 } else { 0.0 };
        }
        (adjusted / scrollable).clamp(0.0, 1.0)
    }
}

/// Fire-and-forget timer delay in milliseconds.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct TimerDelay(pub u64);

impl TimerDelay {
    pub const ZERO: Self = Self(0);

    pub fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Parse a per-element delay attribute. Absent or malformed values fall
    /// back to zero; no error is surfaced.
    pub fn parse_attr(raw: Option<&str>) -> Self {
        let ms = raw
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or_default();
        Self(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_to_unit_interval() {
        let m = ScrollMetrics::new(-200.0, 2000.0, 800.0);
        assert_eq!(m.progress(1.0), 0.0);

        let m = ScrollMetrics::new(99_999.0, 2000.0, 800.0);
        assert_eq!(m.progress(1.0), 1.0);

        let m = ScrollMetrics::new(600.0, 2000.0, 800.0);
        assert_eq!(m.progress(1.0), 0.5);
    }

    #[test]
    fn speed_multiplier_scales_progress() {
        let m = ScrollMetrics::new(300.0, 2000.0, 800.0);
        assert_eq!(m.progress(2.0), 0.5);
        assert_eq!(m.progress(0.5), 0.125);
    }

    #[test]
    fn non_positive_scrollable_never_divides() {
        let flat = ScrollMetrics::new(0.0, 800.0, 800.0);
        assert_eq!(flat.progress(1.0), 0.0);

        let scrolled = ScrollMetrics::new(10.0, 800.0, 800.0);
        assert_eq!(scrolled.progress(1.0), 1.0);

        let inverted = ScrollMetrics::new(10.0, 500.0, 800.0);
        assert_eq!(inverted.progress(1.0), 1.0);
    }

    #[test]
    fn delay_attr_falls_back_to_zero() {
        assert_eq!(TimerDelay::parse_attr(None), TimerDelay::ZERO);
        assert_eq!(TimerDelay::parse_attr(Some("")), TimerDelay::ZERO);
        assert_eq!(TimerDelay::parse_attr(Some("soon")), TimerDelay::ZERO);
        assert_eq!(TimerDelay::parse_attr(Some("-5")), TimerDelay::ZERO);
        assert_eq!(TimerDelay::parse_attr(Some(" 250 ")), TimerDelay(250));
    }
}
