//! Power estimation and load-balance engine.

/// Stable/deficit verdict and utilization ratio.
pub mod balance;
pub mod engine;
/// Appliance load aggregation.
pub mod load;
/// Synthetic daylight irradiance and hourly power profile.
pub mod profile;
pub mod savings;
/// Reference-peak to installed-capacity scaling.
pub mod scaling;
pub mod types;
