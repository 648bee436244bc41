//! Workspace-level integration tests for PiCalc-rs.
//!
//! The tests themselves live under `tests/`; this crate has no code.
