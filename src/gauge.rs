//! The projection gauge: a resource spent while the view is planar.

use crate::config::GaugeConfig;
use crate::{Mode, GAUGE_MAX};

/// Bounded scalar in `[0, max]` that drains in planar mode and refills in
/// chase mode. `max` never exceeds [`GAUGE_MAX`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    value: f32,
    max: f32,
}

impl Gauge {
    /// Creates a full gauge. `max` is capped at [`GAUGE_MAX`].
    #[must_use]
    pub fn full(max: f32) -> Self {
        let capped = max.clamp(0.0, GAUGE_MAX);
        Self {
            value: capped,
            max: capped,
        }
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Upper bound, for scaling a HUD bar.
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Returns `true` once the gauge has been drained.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.value <= 0.0
    }

    /// Applies one tick of drain or recovery for `mode`.
    ///
    /// Returns `true` if the gauge is empty after the update while in
    /// [`Mode::Planar`].
    pub fn update(&mut self, mode: Mode, config: &GaugeConfig) -> bool {
        let delta = match mode {
            Mode::Planar => -config.deplete_rate,
            Mode::Chase => config.recover_rate,
        };
        self.value = (self.value + delta).clamp(0.0, self.max);
        mode.is_planar() && self.is_depleted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rates(deplete_rate: f32, recover_rate: f32) -> GaugeConfig {
        GaugeConfig {
            deplete_rate,
            recover_rate,
            ..GaugeConfig::default()
        }
    }

    #[test]
    fn recovery_is_clamped_at_max() {
        let mut gauge = Gauge::full(100.0);
        assert!(!gauge.update(Mode::Chase, &rates(1.0, 5.0)));
        assert_eq!(gauge.value(), 100.0);
    }

    #[test]
    fn oversized_maximum_is_capped() {
        let mut gauge = Gauge::full(500.0);
        assert_eq!(gauge.max(), GAUGE_MAX);
        assert!(!gauge.update(Mode::Chase, &rates(1.0, 50.0)));
        assert_eq!(gauge.value(), GAUGE_MAX);
    }

    #[test]
    fn reaching_zero_in_planar_mode_depletes() {
        let mut gauge = Gauge::full(3.0);
        let config = rates(1.0, 1.0);
        assert!(!gauge.update(Mode::Planar, &config));
        assert!(!gauge.update(Mode::Planar, &config));
        assert!(gauge.update(Mode::Planar, &config));
        assert_eq!(gauge.value(), 0.0);
    }

    #[rstest]
    #[case(7.0)]
    #[case(150.0)]
    fn drain_never_goes_negative(#[case] deplete_rate: f32) {
        let mut gauge = Gauge::full(100.0);
        let config = rates(deplete_rate, 1.0);
        for _ in 0..40 {
            gauge.update(Mode::Planar, &config);
            assert!((0.0..=100.0).contains(&gauge.value()));
        }
        assert!(gauge.is_depleted());
    }

    #[test]
    fn empty_gauge_in_chase_mode_is_not_a_failure() {
        let mut gauge = Gauge::full(100.0);
        gauge.update(Mode::Planar, &rates(100.0, 0.0));
        assert!(!gauge.update(Mode::Chase, &rates(100.0, 0.0)));
    }
}
