//! CSV export for the daily power profile.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::DailyProfile;

/// Column header for the profile CSV.
const HEADER: &str = "hour,irradiance,base_power_w,scaled_power_w";

/// Exports the daily profile to a CSV file at the given path.
///
/// Writes a header row followed by one row per hour in ascending order.
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_profile_csv(profile: &DailyProfile, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_profile_csv(profile, buf)
}

/// Writes the daily profile as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_profile_csv(profile: &DailyProfile, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for p in profile.iter() {
        wtr.write_record(&[
            p.hour.to_string(),
            format!("{:.4}", p.irradiance),
            format!("{:.2}", p.base_power_w),
            format!("{:.2}", p.scaled_power_w),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
