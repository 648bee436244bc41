//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use picalc_core::constants::{
    DEFAULT_HEIGHT, DEFAULT_SOURCE_IMAGE, DEFAULT_WIDTH, SELF_TEST_PRECISIONS,
};
use picalc_core::options::Options;

/// PiCalc-rs: digits of pi as raw text or ASCII art.
#[derive(Parser, Debug)]
#[command(name = "picalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Art width in characters; number of digits in raw mode.
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Art height in lines.
    #[arg(short = 'l', long, visible_alias = "lines", default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Reference image the digits are laid over.
    #[arg(short, long, default_value = DEFAULT_SOURCE_IMAGE)]
    pub source_image: PathBuf,

    /// Put digits on light pixels instead of dark ones.
    #[arg(short, long)]
    pub inverted: bool,

    /// Derive the art height from the image proportions.
    #[arg(short, long)]
    pub keep_aspect_ratio: bool,

    /// Print the digits only.
    #[arg(short, long)]
    pub raw: bool,

    /// Formula to use: bbp, machin, agm, or all [default: agm].
    #[arg(short, long, env = "PICALC_FORMULA")]
    pub formula: Option<String>,

    /// Check every formula against the reference digits.
    #[arg(long, conflicts_with = "test_formula")]
    pub test_formulas: bool,

    /// Check one formula against the reference digits.
    #[arg(long, value_name = "NAME")]
    pub test_formula: Option<String>,

    /// Number of digits (defaults to the width in raw mode; test mode checks
    /// 11, 101, 1001 and 10001 digits).
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Guard digits beyond the precision (0 = default).
    #[arg(long, default_value = "0")]
    pub guard_digits: usize,

    /// Iteration cap for every formula (0 = formula's own bound).
    #[arg(long, default_value = "0")]
    pub max_iterations: u64,

    /// Write raw digits to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the self-test report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Show full digit strings when listing several formulas.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the self-test table; the verdict is in the exit code.
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// `true` when a self-test was requested.
    #[must_use]
    pub fn is_self_test(&self) -> bool {
        self.test_formulas || self.test_formula.is_some()
    }

    /// Digit count for raw mode.
    #[must_use]
    pub fn raw_precision(&self) -> usize {
        self.precision.unwrap_or(self.width as usize)
    }

    /// Digit counts to check in self-test mode.
    #[must_use]
    pub fn test_precisions(&self) -> Vec<usize> {
        self.precision
            .map_or_else(|| SELF_TEST_PRECISIONS.to_vec(), |p| vec![p])
    }

    /// Computation options from the tuning flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            guard_digits: self.guard_digits,
            max_iterations: self.max_iterations,
        }
        .normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("picalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 24);
        assert_eq!(config.source_image, PathBuf::from("pi.png"));
        assert!(!config.raw);
        assert!(!config.is_self_test());
        if std::env::var_os("PICALC_FORMULA").is_none() {
            assert_eq!(config.formula, None);
        }
        assert_eq!(config.raw_precision(), 80);
        assert_eq!(config.test_precisions(), vec![11, 101, 1001, 10_001]);
        assert_eq!(config.options(), Options::default());
    }

    #[test]
    fn short_flags() {
        let config = parse(&["-w", "10", "-l", "5", "-s", "x.png", "-i", "-k", "-r", "-f", "bbp"]);
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 5);
        assert_eq!(config.source_image, PathBuf::from("x.png"));
        assert!(config.inverted && config.keep_aspect_ratio && config.raw);
        assert_eq!(config.formula.as_deref(), Some("bbp"));
    }

    #[test]
    fn lines_alias() {
        assert_eq!(parse(&["--lines", "7"]).height, 7);
    }

    #[test]
    fn precision_overrides_width() {
        let config = parse(&["-r", "-w", "10", "-p", "25"]);
        assert_eq!(config.raw_precision(), 25);
        assert_eq!(config.test_precisions(), vec![25]);
    }

    #[test]
    fn self_test_flags() {
        assert!(parse(&["--test-formulas"]).is_self_test());
        let config = parse(&["--test-formula", "machin"]);
        assert_eq!(config.test_formula.as_deref(), Some("machin"));
        assert!(config.is_self_test());
    }

    #[test]
    fn self_test_flags_conflict() {
        let result = AppConfig::try_parse_from([
            "picalc",
            "--test-formulas",
            "--test-formula",
            "bbp",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn tuning_options() {
        let config = parse(&["--guard-digits", "20", "--max-iterations", "5"]);
        assert_eq!(
            config.options(),
            Options {
                guard_digits: 20,
                max_iterations: 5
            }
        );
    }

    #[test]
    fn invalid_width_rejected() {
        assert!(AppConfig::try_parse_from(["picalc", "-w", "wide"]).is_err());
    }
}
