//! Solar array power estimation and household load balance.

pub mod config;
pub mod devices;
pub mod error;
pub mod io;
pub mod logging;
/// Regression predictors and serialized model artifacts.
pub mod model;
pub mod reporting;
/// Estimation engine: scaling, daily profile, load, balance, and savings.
pub mod sim;
