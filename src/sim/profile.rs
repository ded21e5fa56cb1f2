//! Synthetic daylight profile over a fixed 06:00-18:00 window.

use std::f32::consts::PI;

use crate::model::Predictor;

use super::scaling::scale;
use super::types::{DailyProfile, HourlyPoint, WeatherSample};

/// First modeled daylight hour (sunrise).
pub const SUNRISE_HOUR: u32 = 6;
/// Last modeled daylight hour (sunset, inclusive).
pub const SUNSET_HOUR: u32 = 18;

/// Synthetic irradiance at integer hour `h`.
///
/// `max(0, sin((h - 6) * pi / 12))`: a half-sine from 0 at sunrise through
/// 1 at solar noon back to 0 at sunset. The window is independent of
/// location and season.
pub fn synthetic_irradiance(hour: u32) -> f32 {
    let offset = hour as f32 - SUNRISE_HOUR as f32;
    (offset * PI / 12.0).sin().max(0.0)
}

/// Builds the hourly power series for one day.
///
/// Temperature is held constant at `temperature_c` for every hour. Points
/// are in ascending hour order and the result depends only on the inputs.
pub fn daily_profile<P: Predictor + ?Sized>(
    predictor: &P,
    temperature_c: f32,
    total_capacity_w: f32,
) -> DailyProfile {
    let hours: Vec<u32> = (SUNRISE_HOUR..=SUNSET_HOUR).collect();
    let samples: Vec<WeatherSample> = hours
        .iter()
        .map(|&h| WeatherSample::new(temperature_c, synthetic_irradiance(h)))
        .collect();
    let base = predictor.predict_many(&samples);

    let points = hours
        .into_iter()
        .zip(samples)
        .zip(base)
        .map(|((hour, sample), base_power_w)| HourlyPoint {
            hour,
            irradiance: sample.irradiance,
            base_power_w,
            scaled_power_w: scale(base_power_w, total_capacity_w),
        })
        .collect();
    DailyProfile::from_points(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Base power proportional to irradiance, peaking at the reference peak.
    struct Proportional;

    impl Predictor for Proportional {
        fn predict(&self, _temperature_c: f32, irradiance: f32) -> f32 {
            950.0 * irradiance
        }
    }

    #[test]
    fn irradiance_endpoints() {
        assert_eq!(synthetic_irradiance(6), 0.0);
        assert!((synthetic_irradiance(12) - 1.0).abs() < 1e-6);
        assert!(synthetic_irradiance(18).abs() < 1e-6);
    }

    #[test]
    fn irradiance_is_non_negative_and_symmetric() {
        for h in SUNRISE_HOUR..=SUNSET_HOUR {
            assert!(synthetic_irradiance(h) >= 0.0, "hour {h}");
        }
        for d in 1..6 {
            let a = synthetic_irradiance(12 - d);
            let b = synthetic_irradiance(12 + d);
            assert!((a - b).abs() < 1e-5, "hour offset {d}");
        }
    }

    #[test]
    fn profile_covers_daylight_window() {
        let p = daily_profile(&Proportional, 25.0, 2200.0);
        let hours: Vec<u32> = p.iter().map(|pt| pt.hour).collect();
        assert_eq!(hours, (6..=18).collect::<Vec<_>>());
        assert_eq!(p.len(), 13);
    }

    #[test]
    fn profile_scales_to_capacity() {
        let p = daily_profile(&Proportional, 25.0, 2200.0);
        let noon = p.iter().find(|pt| pt.hour == 12).map(|pt| pt.scaled_power_w);
        assert!(noon.is_some_and(|w| (w - 2200.0).abs() < 0.01));
        assert_eq!(p.peak().map(|pt| pt.hour), Some(12));
    }

    #[test]
    fn profile_is_deterministic() {
        let a = daily_profile(&Proportional, 30.0, 1000.0);
        let b = daily_profile(&Proportional, 30.0, 1000.0);
        assert_eq!(a, b);
    }
}
