//! Integration tests for the default evaluation scenario.

mod common;

use common::{Constant, Proportional, assert_close, catalog, default_input, default_system};
use solar_balance::error::EngineError;
use solar_balance::model::ModelArtifact;
use solar_balance::sim::balance::BalanceVerdict;
use solar_balance::sim::engine::Engine;
use solar_balance::sim::load::LoadSpec;
use solar_balance::sim::savings::SavingsResult;
use solar_balance::sim::types::WeatherSample;

#[test]
fn live_power_scales_to_installed_capacity() {
    let catalog = catalog();
    let predictor = Constant(500.0);
    let engine = Engine::new(&predictor, &catalog);
    let p = engine.live_power(&default_system(), WeatherSample::new(25.0, 0.5));
    assert_close(p.scaled_power_w, 1157.89, 0.01);
    assert_close(p.scaling_factor, 2200.0 / 950.0, 1e-5);
    assert!(p.capacity_ratio > 0.52 && p.capacity_ratio < 0.53);
}

#[test]
fn no_load_is_neutral() {
    let catalog = catalog();
    let predictor = Constant(500.0);
    let eval = Engine::new(&predictor, &catalog)
        .evaluate(&default_input(LoadSpec::default()))
        .expect("evaluation should succeed");
    assert_eq!(eval.total_load_w, 0.0);
    assert_eq!(eval.balance.verdict, BalanceVerdict::Neutral);
    assert_eq!(eval.balance.utilization_ratio, 0.0);
}

#[test]
fn evening_load_reports_deficit() {
    let catalog = catalog();
    let predictor = Constant(500.0);
    let eval = Engine::new(&predictor, &catalog)
        .evaluate(&default_input(LoadSpec::new(["Air Conditioner", "Fan"], 25.0)))
        .expect("evaluation should succeed");
    assert_eq!(eval.total_load_w, 1600.0);
    assert_close(eval.balance.verdict.deficit_w(), 442.11, 0.01);
    assert_eq!(eval.balance.utilization_ratio, 1.0);
}

#[test]
fn light_load_is_stable() {
    let catalog = catalog();
    let predictor = Constant(500.0);
    let eval = Engine::new(&predictor, &catalog)
        .evaluate(&default_input(LoadSpec::new(["Fan", "LED Light"], 0.0)))
        .expect("evaluation should succeed");
    assert!(eval.balance.verdict.is_stable());
    assert_close(eval.balance.surplus_w, 1157.89 - 95.0, 0.01);
}

#[test]
fn ten_kwh_at_35_saves_350() {
    let s = SavingsResult::from_energy(10.0, 35.0).expect("valid price");
    assert_close(s.total_savings, 350.0, 1e-3);
    assert_eq!(s.to_string(), "10.00 kWh x 35.00 = 350.00");
}

#[test]
fn profile_covers_daylight_hours() {
    let catalog = catalog();
    let eval = Engine::new(&Proportional, &catalog)
        .evaluate(&default_input(LoadSpec::default()))
        .expect("evaluation should succeed");
    let hours: Vec<u32> = eval.profile.iter().map(|p| p.hour).collect();
    assert_eq!(hours, (6..=18).collect::<Vec<_>>());

    let peak = eval.profile.peak().expect("non-empty profile");
    assert_eq!(peak.hour, 12);
    assert_close(peak.scaled_power_w, 2200.0, 0.01);

    // sum of sin(k*pi/12) for k in 0..=12 is cot(pi/24)
    let expected_kwh = 2.2 * (std::f32::consts::PI / 24.0).tan().recip();
    assert_close(eval.savings.daily_energy_kwh, expected_kwh, 1e-3);
    assert_close(eval.savings.total_savings, expected_kwh * 35.0, 0.05);
}

#[test]
fn unknown_appliance_is_rejected() {
    let catalog = catalog();
    let predictor = Constant(500.0);
    let err = Engine::new(&predictor, &catalog)
        .evaluate(&default_input(LoadSpec::new(["Jacuzzi"], 0.0)))
        .expect_err("unknown appliance should fail");
    assert!(matches!(err, EngineError::UnknownAppliance(ref name) if name == "Jacuzzi"));
}

#[test]
fn reference_model_drives_engine() {
    let catalog = catalog();
    let model = ModelArtifact::reference();
    let eval = Engine::new(&model, &catalog)
        .evaluate(&default_input(LoadSpec::new(["Air Conditioner", "Fan"], 25.0)))
        .expect("evaluation should succeed");
    assert_close(eval.prediction.base_power_w, 450.0, 1e-3);
    assert!(matches!(eval.balance.verdict, BalanceVerdict::Deficit { .. }));
    assert_eq!(eval.profile.len(), 13);
    assert!(eval.savings.daily_energy_kwh > 0.0);
}

#[test]
fn profile_samples_carry_input_temperature() {
    let catalog = catalog();
    let recorder = common::Recorder::default();
    let profile = Engine::new(&recorder, &catalog).daily_profile(&default_system(), 37.5);
    let seen = recorder.seen.borrow();
    assert_eq!(seen.len(), 13);
    assert!(seen.iter().all(|s| s.temperature_c == 37.5));
    assert_eq!(profile.len(), 13);
}
