//! solar-balance entry point: CLI wiring and config-driven evaluation.

mod cli;

use std::process;

use solar_balance::config::ScenarioConfig;
use solar_balance::devices::ApplianceCatalog;
use solar_balance::io::export::export_profile_csv;
use solar_balance::logging::init_logging;
use solar_balance::model::ModelArtifact;
use solar_balance::reporting::{render_json, render_text};
use solar_balance::sim::engine::Engine;

use cli::{CliOptions, Command, OutputFormat};

fn load_scenario(cli: &CliOptions) -> ScenarioConfig {
    // --scenario and --preset are exclusive; baseline when neither is given
    let loaded = if let Some(ref path) = cli.scenario {
        ScenarioConfig::from_toml_file(path)
    } else if let Some(ref name) = cli.preset {
        ScenarioConfig::from_preset(name)
    } else {
        Ok(ScenarioConfig::baseline())
    };
    let mut scenario = loaded.unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    cli.overrides.apply(&mut scenario);
    if let Some(ref model) = cli.model {
        scenario.model.path = Some(model.clone());
    }
    scenario
}

fn list_appliances(catalog: &ApplianceCatalog) {
    for appliance in catalog.iter() {
        println!("{:<24}{:>6} W", appliance.name, appliance.rated_w);
    }
}

fn main() {
    let cli = cli::parse_args().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        cli::print_usage();
        process::exit(1);
    });

    let catalog = ApplianceCatalog::builtin();

    match cli.command {
        Command::Help => {
            cli::print_usage();
            return;
        }
        Command::ListAppliances => {
            list_appliances(&catalog);
            return;
        }
        Command::WriteReferenceModel(ref path) => {
            if let Err(e) = ModelArtifact::reference().save(path) {
                eprintln!("error: failed to write model: {e}");
                process::exit(1);
            }
            eprintln!("Reference model written to {}", path.display());
            return;
        }
        Command::Evaluate => {}
    }

    let scenario = load_scenario(&cli);

    let errors = scenario.validate(&catalog);
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    init_logging(&scenario.logging.level);

    let model = ModelArtifact::load(&scenario.model_path()).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    let engine = Engine::new(&model, &catalog);
    let evaluation = engine.evaluate(&scenario.to_input()).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    let currency = scenario.tariff.currency.as_str();
    match cli.format {
        OutputFormat::Text => println!("{}", render_text(&evaluation, currency)),
        OutputFormat::Json => match render_json(&evaluation, currency) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize report: {e}");
                process::exit(1);
            }
        },
    }

    if let Some(ref path) = cli.profile_out {
        if let Err(e) = export_profile_csv(&evaluation.profile, path) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Profile written to {}", path.display());
    }
}
