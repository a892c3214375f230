//! Synthetic sensor feed for the simulator.
//!
//! Each quantity follows its own slow sine wave. The swings deliberately
//! leave the default ranges so auto-expansion shows up on screen, and every
//! [`GLITCH_INTERVAL`]th light sample is NaN to exercise rejection.

use weather_gauges::Quantity;

/// Every Nth light sample is invalid.
const GLITCH_INTERVAL: u32 = 97;

/// Signal shape per quantity: `(min, max, freq)`.
const fn signal_params(quantity: Quantity) -> (f32, f32, f32) {
    match quantity {
        Quantity::Pressure => (970.0, 1062.0, 0.02),
        Quantity::Humidity => (20.0, 90.0, 0.03),
        Quantity::Temperature => (-5.0, 43.0, 0.025),
        Quantity::Light => (0.0, 1300.0, 0.05),
    }
}

/// Generates one sample per quantity per call to [`DemoFeed::sample`].
pub struct DemoFeed {
    samples: u32,
}

impl DemoFeed {
    pub const fn new() -> Self {
        Self { samples: 0 }
    }

    /// Sample every quantity at time `t`.
    pub fn sample(&mut self, t: f32) -> [(Quantity, f32); 4] {
        self.samples = self.samples.wrapping_add(1);
        let glitch = self.samples.is_multiple_of(GLITCH_INTERVAL);

        Quantity::ALL.map(|q| {
            let (min, max, freq) = signal_params(q);
            let value = if glitch && q == Quantity::Light {
                f32::NAN
            } else {
                fake_signal(t, min, max, freq)
            };
            (q, value)
        })
    }
}

/// Sinusoid oscillating between `min` and `max`.
fn fake_signal(t: f32, min: f32, max: f32, freq: f32) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_signal_stays_in_range() {
        for i in 0..1000 {
            let v = fake_signal(i as f32 * 0.37, 970.0, 1062.0, 0.02);
            assert!((970.0..=1062.0).contains(&v), "sample {i} out of range: {v}");
        }
    }

    #[test]
    fn test_fake_signal_midpoint_at_zero() {
        assert!((fake_signal(0.0, 0.0, 100.0, 1.0) - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_sample_covers_every_quantity() {
        let mut feed = DemoFeed::new();
        let samples = feed.sample(1.0);
        for (i, (q, v)) in samples.iter().enumerate() {
            assert_eq!(*q, Quantity::ALL[i]);
            assert!(v.is_finite(), "{q:?} should be finite outside a glitch");
        }
    }

    #[test]
    fn test_light_glitch_interval() {
        let mut feed = DemoFeed::new();
        let mut glitches = 0;
        for _ in 0..GLITCH_INTERVAL * 2 {
            let samples = feed.sample(3.0);
            glitches += samples.iter().filter(|(_, v)| v.is_nan()).count();
            assert!(samples[..3].iter().all(|(_, v)| v.is_finite()), "only light glitches");
        }
        assert_eq!(glitches, 2);
    }

    #[test]
    fn test_swings_exceed_default_ranges() {
        for q in [Quantity::Pressure, Quantity::Temperature, Quantity::Light] {
            let (min, max, _) = signal_params(q);
            let (dmin, dmax) = q.default_range();
            assert!(min < dmin || max > dmax, "{q:?} demo should leave the default range");
        }
    }
}
