//! # picalc-orchestration
//!
//! Computation requests, formula selection, and the digit computation driver.

pub mod driver;
pub mod formula_selection;
pub mod interfaces;
pub mod report;
pub mod request;

pub use driver::{Driver, Outcome};
pub use interfaces::ResultPresenter;
pub use report::{FormulaVerdict, TestReport};
pub use request::{ComputationRequest, FormulaSelector, Mode};
