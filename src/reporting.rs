//! Human-readable and JSON rendering of an evaluation.

use std::fmt::Write;

use crate::sim::balance::BalanceVerdict;
use crate::sim::types::Evaluation;

/// Renders the full report as plain text.
///
/// `currency` labels monetary values (e.g. `"PKR"`).
pub fn render_text(eval: &Evaluation, currency: &str) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_text(&mut out, eval, currency);
    out
}

fn write_text(out: &mut String, eval: &Evaluation, currency: &str) -> std::fmt::Result {
    let p = &eval.prediction;
    writeln!(out, "--- Live Power Output ---")?;
    writeln!(
        out,
        "System capacity:    {:.2} kW ({} x {:.0} W)",
        eval.system.total_capacity_kw(),
        eval.system.panel_count,
        eval.system.panel_wattage_w
    )?;
    writeln!(
        out,
        "Conditions:         {:.1} °C, irradiance {:.2}",
        eval.weather.temperature_c, eval.weather.irradiance
    )?;
    writeln!(out, "Predicted power:    {:.2} W", p.scaled_power_w)?;
    writeln!(out, "Capacity used:      {:.0}%", p.capacity_ratio * 100.0)?;

    writeln!(out, "\n--- Load ---")?;
    writeln!(
        out,
        "Total load:         {:.0} W ({:.3} kW)",
        eval.total_load_w,
        eval.total_load_kw()
    )?;
    writeln!(
        out,
        "Load vs generation: {:.0}%",
        eval.balance.utilization_ratio * 100.0
    )?;
    match eval.balance.verdict {
        BalanceVerdict::Neutral => {}
        BalanceVerdict::Stable => writeln!(
            out,
            "System Stable: current generation is sufficient for the selected load ({:.2} W spare).",
            eval.balance.surplus_w
        )?,
        BalanceVerdict::Deficit { amount_w } => writeln!(
            out,
            "Power Alert: generation is insufficient. You need an additional {amount_w:.2} Watts."
        )?,
    }

    writeln!(out, "\n--- Daily Performance Forecast ---")?;
    writeln!(out, "Hour  Irradiance  Power (W)")?;
    for pt in eval.profile.iter() {
        writeln!(
            out,
            "{:02}:00 {:>10.3} {:>10.2}",
            pt.hour, pt.irradiance, pt.scaled_power_w
        )?;
    }

    writeln!(out, "\n--- Daily Savings ---")?;
    writeln!(
        out,
        "Daily generation:   {:.2} kWh",
        eval.savings.daily_energy_kwh
    )?;
    writeln!(
        out,
        "Unit price:         {currency} {:.2}",
        eval.savings.unit_price
    )?;
    write!(
        out,
        "Estimated savings:  {currency} {:.2}",
        eval.savings.total_savings
    )
}

/// Serializes the evaluation as pretty JSON.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn render_json(eval: &Evaluation, currency: &str) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(eval)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("currency".to_string(), serde_json::Value::from(currency));
        obj.insert(
            "total_load_kw".to_string(),
            serde_json::Value::from(eval.total_load_kw()),
        );
    }
    serde_json::to_string_pretty(&value)
}
