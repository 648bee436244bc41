//! PiCalc-rs library: application logic for the pi digit calculator.

pub mod app;
pub mod config;
pub mod errors;
