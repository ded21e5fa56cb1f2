//! Household load aggregation.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::devices::ApplianceCatalog;
use crate::error::{EngineError, EngineResult};

/// Selected appliances plus a free-form manual addend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadSpec {
    /// Appliance names; each must resolve in the catalog.
    pub selected_appliances: BTreeSet<String>,
    /// Extra load not covered by the catalog (W, >= 0).
    pub manual_load_w: f32,
}

impl LoadSpec {
    pub fn new<I, S>(selected: I, manual_load_w: f32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_appliances: selected.into_iter().map(Into::into).collect(),
            manual_load_w,
        }
    }

    /// Total load against `catalog`. See [`aggregate`].
    pub fn total_load_w(&self, catalog: &ApplianceCatalog) -> EngineResult<f32> {
        aggregate(catalog, &self.selected_appliances, self.manual_load_w)
    }
}

/// Sums the rated wattage of every selected appliance plus `manual_load_w`.
///
/// Catalog wattages are summed as integers before the manual addend is added.
///
/// # Errors
///
/// * [`EngineError::Validation`] if `manual_load_w` is negative or not finite
/// * [`EngineError::UnknownAppliance`] for the first name missing from the catalog
pub fn aggregate(
    catalog: &ApplianceCatalog,
    selected: &BTreeSet<String>,
    manual_load_w: f32,
) -> EngineResult<f32> {
    if !manual_load_w.is_finite() || manual_load_w < 0.0 {
        return Err(EngineError::validation(
            "manual_load_w",
            format!("must be >= 0, got {manual_load_w}"),
        ));
    }

    let mut appliance_w: u64 = 0;
    for name in selected {
        let w = catalog
            .wattage(name)
            .ok_or_else(|| EngineError::UnknownAppliance(name.clone()))?;
        appliance_w += u64::from(w);
    }
    Ok(appliance_w as f32 + manual_load_w)
}
