//! Scenario-based tests for templated-pipeline

mod file_processing;
mod run_plans;
