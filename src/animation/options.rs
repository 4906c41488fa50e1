/// Direction of the offset a target starts from before it is revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OffsetAxis {
    Vertical,
    Horizontal,
}

/// Named easing curves used across the site, rendered as CSS timing functions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Power3Out,
    Power2InOut,
    /// Overshoots slightly past the end before settling.
    BackOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Easing::Power2InOut => "cubic-bezier(0.455, 0.03, 0.515, 0.955)",
            Easing::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

pub const DEFAULT_VIEWPORT_THRESHOLD: f64 = 0.80;

/// How a group of targets moves from hidden to revealed.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub offset_axis: OffsetAxis,
    /// Pixels along `offset_axis`; negative values start above / left of the resting place.
    pub offset_magnitude: f64,
    pub scale_from: f64,
    pub stagger_seconds: f64,
    pub easing: Easing,
    pub duration_seconds: f64,
    /// Fraction of the viewport height the trigger's top edge has to reach.
    pub viewport_threshold: f64,
    pub delay_seconds: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            offset_axis: OffsetAxis::Vertical,
            offset_magnitude: 60.0,
            scale_from: 1.0,
            stagger_seconds: 0.0,
            easing: Easing::Power3Out,
            duration_seconds: 0.8,
            viewport_threshold: DEFAULT_VIEWPORT_THRESHOLD,
            delay_seconds: 0.0,
        }
    }
}

impl RevealOptions {
    /// Slide up from `pixels` below.
    pub fn rise(pixels: f64) -> Self {
        Self {
            offset_axis: OffsetAxis::Vertical,
            offset_magnitude: pixels,
            ..Self::default()
        }
    }

    /// Slide in horizontally; negative starts from the left.
    pub fn slide(pixels: f64) -> Self {
        Self {
            offset_axis: OffsetAxis::Horizontal,
            offset_magnitude: pixels,
            ..Self::default()
        }
    }

    /// Grow in place from `scale`.
    pub fn pop(scale: f64) -> Self {
        Self {
            offset_magnitude: 0.0,
            scale_from: scale,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale_from = scale;
        self
    }

    pub fn with_stagger(mut self, seconds: f64) -> Self {
        self.stagger_seconds = seconds;
        self
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_threshold(mut self, fraction: f64) -> Self {
        self.viewport_threshold = fraction.clamp(0.0, 1.0);
        self
    }

    pub fn with_delay(mut self, seconds: f64) -> Self {
        self.delay_seconds = seconds;
        self
    }

    pub fn start_delay(&self, index: usize) -> f64 {
        self.delay_seconds + index as f64 * self.stagger_seconds
    }

    pub fn hidden_transform(&self) -> String {
        let (x, y) = match self.offset_axis {
            OffsetAxis::Vertical => (0.0, self.offset_magnitude),
            OffsetAxis::Horizontal => (self.offset_magnitude, 0.0),
        };
        format!("translate3d({}px, {}px, 0px) scale({})", x, y, self.scale_from)
    }

    pub fn transition(&self, index: usize) -> String {
        format!(
            "opacity {d}s {e} {s}s, transform {d}s {e} {s}s",
            d = self.duration_seconds,
            e = self.easing.css(),
            s = self.start_delay(index),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_section_headers() {
        let options = RevealOptions::default();
        assert_eq!(options.viewport_threshold, 0.80);
        assert_eq!(options.offset_axis, OffsetAxis::Vertical);
        assert_eq!(options.duration_seconds, 0.8);
        assert_eq!(options.easing, Easing::Power3Out);
    }

    #[test]
    fn stagger_delays_grow_by_index() {
        let options = RevealOptions::rise(60.0).with_stagger(0.15).with_delay(0.5);
        assert_eq!(options.start_delay(0), 0.5);
        assert!((options.start_delay(2) - 0.8).abs() < 1e-9);
        assert!((options.start_delay(4) - 1.1).abs() < 1e-9);
    }

    #[test]
    fn hidden_transform_follows_axis() {
        assert_eq!(
            RevealOptions::slide(-60.0).hidden_transform(),
            "translate3d(-60px, 0px, 0px) scale(1)"
        );
        assert_eq!(
            RevealOptions::rise(100.0).with_scale(0.9).hidden_transform(),
            "translate3d(0px, 100px, 0px) scale(0.9)"
        );
        assert_eq!(
            RevealOptions::pop(0.7).hidden_transform(),
            "translate3d(0px, 0px, 0px) scale(0.7)"
        );
    }

    #[test]
    fn transition_carries_delay_and_curve() {
        let options = RevealOptions::rise(40.0)
            .with_duration(1.0)
            .with_stagger(0.2)
            .with_easing(Easing::BackOut);
        assert_eq!(
            options.transition(1),
            "opacity 1s cubic-bezier(0.34, 1.56, 0.64, 1) 0.2s, transform 1s cubic-bezier(0.34, 1.56, 0.64, 1) 0.2s"
        );
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealOptions::default().with_threshold(1.4).viewport_threshold, 1.0);
        assert_eq!(RevealOptions::default().with_threshold(0.85).viewport_threshold, 0.85);
    }
}
