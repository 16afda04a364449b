//! Core library for the ClearPath Life agency platform: the coverage/cost
//! estimation engine used across the marketing pages, the lead intake
//! pipeline behind the site's forms, and the supporting configuration,
//! telemetry, and error plumbing.

pub mod config;
pub mod error;
pub mod estimator;
pub mod leads;
pub mod telemetry;
