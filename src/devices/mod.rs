//! Physical components: the solar array and the household appliances it supplies.

/// Appliance catalog resolving names to rated wattage.
pub mod appliance;
/// Solar array description and installed capacity.
pub mod array;

// Re-export the main types for convenience
pub use appliance::{Appliance, ApplianceCatalog};
pub use array::SystemConfig;
