//! Capacity scaling from the reference array to the installed array.

use serde::Serialize;

use crate::model::MODEL_PEAK_OUTPUT_W;

/// Ratio `total_capacity_w / peak_w`, or `0.0` when `peak_w <= 0`.
///
/// Reported alongside the prediction; scaling itself divides last.
pub fn scaling_factor(total_capacity_w: f32, peak_w: f32) -> f32 {
    if peak_w > 0.0 {
        total_capacity_w / peak_w
    } else {
        0.0
    }
}

/// Scales a base prediction to the installed capacity.
///
/// `base_power_w * total_capacity_w / MODEL_PEAK_OUTPUT_W`. The result is not
/// clamped: a predictor calibrated above the reference peak can yield more
/// than `total_capacity_w`.
pub fn scale(base_power_w: f32, total_capacity_w: f32) -> f32 {
    scale_with_peak(base_power_w, total_capacity_w, MODEL_PEAK_OUTPUT_W)
}

fn scale_with_peak(base_power_w: f32, total_capacity_w: f32, peak_w: f32) -> f32 {
    if peak_w > 0.0 {
        base_power_w * total_capacity_w / peak_w
    } else {
        0.0
    }
}

/// Instantaneous prediction before and after capacity scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledPrediction {
    /// Raw predictor output (W) against the reference peak.
    pub base_power_w: f32,
    /// `total_capacity_w / peak_w`.
    pub scaling_factor: f32,
    /// Output scaled to the installed array (W).
    pub scaled_power_w: f32,
    /// `scaled_power_w / total_capacity_w` clamped to `[0, 1]`.
    pub capacity_ratio: f32,
}

impl ScaledPrediction {
    /// Scales `base_power_w` against `MODEL_PEAK_OUTPUT_W`.
    pub fn new(base_power_w: f32, total_capacity_w: f32) -> Self {
        Self::with_peak(base_power_w, total_capacity_w, MODEL_PEAK_OUTPUT_W)
    }

    /// Scales `base_power_w` against an explicit reference peak.
    pub fn with_peak(base_power_w: f32, total_capacity_w: f32, peak_w: f32) -> Self {
        let scaled = scale_with_peak(base_power_w, total_capacity_w, peak_w);
        let capacity_ratio = if total_capacity_w > 0.0 {
            (scaled / total_capacity_w).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            base_power_w,
            scaling_factor: scaling_factor(total_capacity_w, peak_w),
            scaled_power_w: scaled,
            capacity_ratio,
        }
    }

    /// `true` when scaled output exceeds installed capacity (mis-calibrated predictor).
    pub fn exceeds_capacity(&self, total_capacity_w: f32) -> bool {
        self.scaled_power_w > total_capacity_w
    }
}
