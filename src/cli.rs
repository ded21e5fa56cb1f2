use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use solar_balance::config::ScenarioConfig;

/// Report format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What the invocation should do.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    Evaluate,
    ListAppliances,
    WriteReferenceModel(PathBuf),
    Help,
}

/// Per-field overrides applied on top of the loaded scenario.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub temperature_c: Option<f32>,
    pub irradiance: Option<f32>,
    pub panel_wattage_w: Option<f32>,
    pub panel_count: Option<u32>,
    /// Replaces the scenario's appliance list when non-empty.
    pub appliances: Vec<String>,
    pub manual_load_w: Option<f32>,
    pub unit_price: Option<f32>,
}

impl Overrides {
    pub fn apply(&self, cfg: &mut ScenarioConfig) {
        if let Some(t) = self.temperature_c {
            cfg.weather.temperature_c = t;
        }
        if let Some(irr) = self.irradiance {
            cfg.weather.irradiance = irr;
        }
        if let Some(w) = self.panel_wattage_w {
            cfg.system.panel_wattage_w = w;
        }
        if let Some(n) = self.panel_count {
            cfg.system.panel_count = n;
        }
        if !self.appliances.is_empty() {
            cfg.load.appliances = self.appliances.clone();
        }
        if let Some(w) = self.manual_load_w {
            cfg.load.manual_load_w = w;
        }
        if let Some(p) = self.unit_price {
            cfg.tariff.unit_price = p;
        }
    }
}

#[derive(Debug, Default)]
pub struct CliOptions {
    pub command: Command,
    pub scenario: Option<PathBuf>,
    pub preset: Option<String>,
    pub model: Option<PathBuf>,
    pub profile_out: Option<PathBuf>,
    pub format: OutputFormat,
    pub overrides: Overrides,
}

pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(args)
}

fn parse_args_from(args: Vec<String>) -> Result<CliOptions, String> {
    parse_options(&args)
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut opts = CliOptions::default();

    while i < args.len() {
        match args[i].as_str() {
            "--scenario" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --scenario (expected a TOML file path)",
                )?;
                if opts.scenario.replace(PathBuf::from(path)).is_some() {
                    return Err("--scenario provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name =
                    args.next_or_err(i, "missing value for --preset (expected a preset name)")?;
                if opts.preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--model" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --model (expected a file path)")?;
                opts.model = Some(PathBuf::from(path));
            }
            "--temperature" => {
                i += 1;
                opts.overrides.temperature_c =
                    Some(args.parse_at(i, "--temperature", "a number")?);
            }
            "--irradiance" => {
                i += 1;
                opts.overrides.irradiance = Some(args.parse_at(i, "--irradiance", "a number")?);
            }
            "--panel-wattage" => {
                i += 1;
                opts.overrides.panel_wattage_w =
                    Some(args.parse_at(i, "--panel-wattage", "a number")?);
            }
            "--panels" => {
                i += 1;
                opts.overrides.panel_count =
                    Some(args.parse_at(i, "--panels", "a positive integer")?);
            }
            "--appliance" => {
                i += 1;
                let name = args.next_or_err(
                    i,
                    "missing value for --appliance (expected an appliance name)",
                )?;
                opts.overrides.appliances.push(name.to_string());
            }
            "--manual-load" => {
                i += 1;
                opts.overrides.manual_load_w =
                    Some(args.parse_at(i, "--manual-load", "a number")?);
            }
            "--unit-price" => {
                i += 1;
                opts.overrides.unit_price = Some(args.parse_at(i, "--unit-price", "a number")?);
            }
            "--profile-out" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --profile-out (expected a file path)",
                )?;
                if opts.profile_out.replace(PathBuf::from(path)).is_some() {
                    return Err("--profile-out provided more than once".to_string());
                }
            }
            "--json" => opts.format = OutputFormat::Json,
            "--list-appliances" => opts.command = Command::ListAppliances,
            "--write-reference-model" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --write-reference-model (expected a file path)",
                )?;
                opts.command = Command::WriteReferenceModel(PathBuf::from(path));
            }
            "--help" | "-h" => {
                opts.command = Command::Help;
                return Ok(opts);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if opts.scenario.is_some() && opts.preset.is_some() {
        return Err(
            "arguments `--scenario` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }

    Ok(opts)
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
    fn parse_at<T: FromStr>(&self, index: usize, flag: &str, expected: &str) -> Result<T, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }

    fn parse_at<T: FromStr>(&self, index: usize, flag: &str, expected: &str) -> Result<T, String> {
        let raw = self.next_or_err(
            index,
            &format!("missing value for {flag} (expected {expected})"),
        )?;
        raw.parse::<T>()
            .map_err(|_| format!("{flag} value \"{raw}\" is not {expected}"))
    }
}

pub fn print_usage() {
    eprintln!("solar-balance - solar array output, load balance, and daily savings estimator");
    eprintln!();
    eprintln!("Usage: solar-balance [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>               Load scenario from TOML config file");
    eprintln!(
        "  --preset <name>                 Use a built-in preset ({})",
        ScenarioConfig::PRESETS.join(", ")
    );
    eprintln!("  --model <path>                  Model artifact (default: solar_model.json)");
    eprintln!("  --temperature <c>               Override temperature (°C)");
    eprintln!("  --irradiance <0-1>              Override sunlight intensity");
    eprintln!("  --panel-wattage <w>             Override watts per panel");
    eprintln!("  --panels <n>                    Override number of panels");
    eprintln!("  --appliance <name>              Select an appliance (repeatable)");
    eprintln!("  --manual-load <w>               Override custom load (W)");
    eprintln!("  --unit-price <p>                Override electricity price per kWh");
    eprintln!("  --profile-out <path>            Export the daily profile to CSV");
    eprintln!("  --json                          Print the report as JSON");
    eprintln!("  --list-appliances               Print the appliance catalog and exit");
    eprintln!("  --write-reference-model <path>  Write the reference model artifact and exit");
    eprintln!("  --help                          Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_evaluate_text() {
        let opts = parse_args_from(Vec::new()).expect("parse should succeed");
        assert_eq!(opts.command, Command::Evaluate);
        assert_eq!(opts.format, OutputFormat::Text);
        assert!(opts.scenario.is_none() && opts.preset.is_none());
    }

    #[test]
    fn supports_scenario_cli() {
        let opts =
            parse_args_from(args(&["--scenario", "site.toml"])).expect("parse should succeed");
        assert_eq!(
            opts.scenario.as_deref().and_then(|p| p.to_str()),
            Some("site.toml")
        );
        assert!(opts.preset.is_none());
    }

    #[test]
    fn scenario_and_preset_are_exclusive() {
        let err = parse_args_from(args(&["--scenario", "a.toml", "--preset", "baseline"]))
            .expect_err("should fail");
        assert!(err.contains("mutually exclusive"));
    }

    #[test]
    fn collects_overrides() {
        let opts = parse_args_from(args(&[
            "--temperature",
            "31.5",
            "--irradiance",
            "0.75",
            "--panels",
            "6",
            "--appliance",
            "Fan",
            "--appliance",
            "Air Conditioner",
            "--manual-load",
            "20",
            "--unit-price",
            "40",
            "--json",
        ]))
        .expect("parse should succeed");
        assert_eq!(opts.overrides.temperature_c, Some(31.5));
        assert_eq!(opts.overrides.irradiance, Some(0.75));
        assert_eq!(opts.overrides.panel_count, Some(6));
        assert_eq!(opts.overrides.appliances, vec!["Fan", "Air Conditioner"]);
        assert_eq!(opts.overrides.manual_load_w, Some(20.0));
        assert_eq!(opts.overrides.unit_price, Some(40.0));
        assert_eq!(opts.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_non_numeric_value() {
        let err = parse_args_from(args(&["--panels", "four"])).expect_err("should fail");
        assert!(err.contains("--panels"));
        assert!(err.contains("\"four\""));
    }

    #[test]
    fn rejects_missing_value() {
        let err = parse_args_from(args(&["--temperature"])).expect_err("should fail");
        assert!(err.starts_with("missing value for --temperature"));
    }

    #[test]
    fn rejects_unknown_argument() {
        assert!(parse_args_from(args(&["--bogus"])).is_err());
    }

    #[test]
    fn write_reference_model_command() {
        let opts = parse_args_from(args(&["--write-reference-model", "m.json"]))
            .expect("parse should succeed");
        assert_eq!(
            opts.command,
            Command::WriteReferenceModel(PathBuf::from("m.json"))
        );
    }

    #[test]
    fn overrides_apply_to_scenario() {
        let mut cfg = ScenarioConfig::evening_peak();
        let overrides = Overrides {
            irradiance: Some(1.0),
            appliances: vec!["LED Light".to_string()],
            ..Overrides::default()
        };
        overrides.apply(&mut cfg);
        assert_eq!(cfg.weather.irradiance, 1.0);
        assert_eq!(cfg.weather.temperature_c, 25.0);
        assert_eq!(cfg.load.appliances, vec!["LED Light"]);
        assert_eq!(cfg.load.manual_load_w, 25.0);
    }
}
