//! Constants for digit computation, CLI defaults, and exit codes.

/// Default number of guard digits carried beyond the requested precision.
///
/// The effective guard is this value plus the number of decimal digits of
/// the precision itself, since per-term truncation error grows linearly
/// with the number of series terms.
pub const DEFAULT_GUARD_DIGITS: usize = 10;

/// Formula used when the caller does not name one.
pub const DEFAULT_FORMULA: &str = "agm";

/// Selector that expands to every registered formula.
pub const ALL_FORMULAS: &str = "all";

/// Default art width in characters (also the raw-mode digit count).
pub const DEFAULT_WIDTH: u32 = 80;

/// Default art height in lines.
pub const DEFAULT_HEIGHT: u32 = 24;

/// Default reference image for art mode.
pub const DEFAULT_SOURCE_IMAGE: &str = "pi.png";

/// Precisions a self-test checks when none is given: "3" followed by
/// 10, 100, 1000 and 10,000 decimals.
pub const SELF_TEST_PRECISIONS: [usize; 4] = [11, 101, 1001, 10_001];

/// The first 10,001 digits of pi ("3" followed by 10,000 decimals).
///
/// Used as the fixed comparison basis of the self-test.
pub const REFERENCE_DIGITS: &str = include_str!("../data/pi_reference.txt");

/// Exit codes for the `picalc` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A formula did not converge within its iteration bound.
    pub const ERROR_CONVERGENCE: i32 = 2;
    /// At least one formula failed the self-test.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration (unknown formula, bad precision, bad image).
    pub const ERROR_CONFIG: i32 = 4;
}
