use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// A rooftop solar array made of identical panels.
///
/// Immutable per evaluation and passed by value into the engine.
///
/// # Examples
///
/// ```
/// use solar_balance::devices::SystemConfig;
///
/// let array = SystemConfig::new(550.0, 4).unwrap();
/// assert_eq!(array.total_capacity_w(), 2200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemConfig {
    /// Rated output of one panel (W).
    pub panel_wattage_w: f32,
    /// Number of installed panels.
    pub panel_count: u32,
}

impl SystemConfig {
    /// Creates an array description.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `panel_wattage_w` is not a positive
    /// finite number or `panel_count` is zero.
    pub fn new(panel_wattage_w: f32, panel_count: u32) -> EngineResult<Self> {
        let cfg = Self {
            panel_wattage_w,
            panel_count,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Re-checks the invariants; fields are public so callers may build the struct directly.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.panel_wattage_w.is_finite() || self.panel_wattage_w <= 0.0 {
            return Err(EngineError::validation(
                "panel_wattage_w",
                format!("must be > 0, got {}", self.panel_wattage_w),
            ));
        }
        if self.panel_count == 0 {
            return Err(EngineError::validation("panel_count", "must be >= 1, got 0"));
        }
        Ok(())
    }

    /// Total installed capacity, `panel_wattage_w * panel_count` (W).
    pub fn total_capacity_w(&self) -> f32 {
        self.panel_wattage_w * self.panel_count as f32
    }

    /// Total installed capacity in kW.
    pub fn total_capacity_kw(&self) -> f32 {
        self.total_capacity_w() / 1000.0
    }
}
