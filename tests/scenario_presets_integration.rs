use std::path::Path;
use std::process::Command;

#[derive(Debug)]
struct Report {
    predicted_power_w: f64,
    savings: f64,
    stdout: String,
}

#[test]
fn scenario_presets_run_via_cli_and_produce_distinct_outcomes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let model = dir.path().join("solar_model.json");
    write_reference_model(&model);

    let baseline = run_and_parse_report("scenarios/baseline.toml", &model);
    let evening_peak = run_and_parse_report("scenarios/evening_peak.toml", &model);
    let overcast = run_and_parse_report("scenarios/overcast.toml", &model);

    assert!(
        (baseline.predicted_power_w - evening_peak.predicted_power_w).abs() < 1e-6,
        "same array and weather should predict the same power: baseline={:.2}, evening_peak={:.2}",
        baseline.predicted_power_w,
        evening_peak.predicted_power_w
    );
    assert!(
        overcast.predicted_power_w < baseline.predicted_power_w,
        "expected overcast power below baseline: overcast={:.2}, baseline={:.2}",
        overcast.predicted_power_w,
        baseline.predicted_power_w
    );
    assert!(
        overcast.savings <= baseline.savings,
        "cooler weather should not raise the reference model's daily savings: overcast={:.2}, baseline={:.2}",
        overcast.savings,
        baseline.savings
    );

    assert!(!baseline.stdout.contains("System Stable"));
    assert!(!baseline.stdout.contains("Power Alert"));
    assert!(evening_peak.stdout.contains("Power Alert"));
    assert!(overcast.stdout.contains("System Stable"));
}

fn write_reference_model(path: &Path) {
    let status = Command::new(env!("CARGO_BIN_EXE_solar-balance"))
        .arg("--write-reference-model")
        .arg(path)
        .status()
        .expect("solar-balance process should run");
    assert!(status.success(), "writing the reference model failed");
}

fn run_and_parse_report(path: &str, model: &Path) -> Report {
    let output = Command::new(env!("CARGO_BIN_EXE_solar-balance"))
        .args(["--scenario", path])
        .arg("--model")
        .arg(model)
        .output()
        .expect("solar-balance process should run");

    assert!(
        output.status.success(),
        "scenario run failed for {path}: stderr={} ",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout should be valid UTF-8");
    Report {
        predicted_power_w: parse_metric(&stdout, "Predicted power:", "W"),
        savings: parse_metric(&stdout, "Estimated savings:", ""),
        stdout,
    }
}

fn parse_metric(stdout: &str, label: &str, unit: &str) -> f64 {
    let line = stdout
        .lines()
        .find(|line| line.trim_start().starts_with(label))
        .unwrap_or_else(|| panic!("missing report line `{label}` in output: {stdout}"));

    let raw = line
        .split_once(':')
        .map(|(_, right)| right.trim())
        .unwrap_or_else(|| panic!("invalid report format for line `{line}`"));

    // trailing unit, or leading currency label
    let numeric = raw
        .strip_suffix(unit)
        .unwrap_or(raw)
        .trim()
        .rsplit(' ')
        .next()
        .unwrap_or(raw);
    numeric
        .parse::<f64>()
        .unwrap_or_else(|_| panic!("failed parsing `{numeric}` from report line `{line}`"))
}
