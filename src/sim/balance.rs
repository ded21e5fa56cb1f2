//! Generation-versus-load balance.

use std::fmt;

use serde::Serialize;

/// Outcome of comparing generation with load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BalanceVerdict {
    /// No load requested; informational only.
    Neutral,
    /// Generation covers the load.
    Stable,
    /// Generation falls short by `amount_w`.
    Deficit { amount_w: f32 },
}

impl BalanceVerdict {
    pub fn is_stable(&self) -> bool {
        matches!(self, BalanceVerdict::Stable)
    }

    /// Shortfall in watts, `0.0` unless this is a deficit.
    pub fn deficit_w(&self) -> f32 {
        match self {
            BalanceVerdict::Deficit { amount_w } => *amount_w,
            _ => 0.0,
        }
    }
}

impl fmt::Display for BalanceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceVerdict::Neutral => write!(f, "no load"),
            BalanceVerdict::Stable => write!(f, "stable"),
            BalanceVerdict::Deficit { amount_w } => write!(f, "deficit {amount_w:.2} W"),
        }
    }
}

/// Verdict plus the bounded load-to-generation ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceReport {
    pub verdict: BalanceVerdict,
    /// `min(load / generation, 1)` when generation is positive, else `0`.
    pub utilization_ratio: f32,
    /// Generation minus load when stable (W), else `0`.
    pub surplus_w: f32,
}

/// Compares instantaneous scaled generation with total load.
///
/// The utilization ratio only drives a progress indicator; it never affects
/// the verdict.
pub fn evaluate(scaled_power_w: f32, total_load_w: f32) -> BalanceReport {
    let utilization_ratio = if scaled_power_w > 0.0 {
        (total_load_w / scaled_power_w).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let verdict = if total_load_w == 0.0 {
        BalanceVerdict::Neutral
    } else if scaled_power_w >= total_load_w {
        BalanceVerdict::Stable
    } else {
        BalanceVerdict::Deficit {
            amount_w: total_load_w - scaled_power_w,
        }
    };

    let surplus_w = if verdict.is_stable() {
        scaled_power_w - total_load_w
    } else {
        0.0
    };

    BalanceReport {
        verdict,
        utilization_ratio,
        surplus_w,
    }
}
