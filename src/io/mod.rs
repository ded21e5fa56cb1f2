//! File output for evaluation results.

pub mod export;
