//! Error handling and exit codes.

use picalc_cli::art::ArtError;
use picalc_core::constants::exit_codes;
use picalc_core::formula::PiError;

/// Exit code for a computation error.
pub fn handle_error(err: &PiError) -> i32 {
    match err {
        PiError::UnknownFormula(_)
        | PiError::InvalidPrecision(_)
        | PiError::PrecisionTooLarge { .. }
        | PiError::ReferenceExhausted { .. }
        | PiError::UnsupportedRequest(_) => exit_codes::ERROR_CONFIG,
        PiError::Convergence { .. } => exit_codes::ERROR_CONVERGENCE,
        PiError::DuplicateName(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error, found from the first known cause.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(pi) = cause.downcast_ref::<PiError>() {
            return handle_error(pi);
        }
        if cause.downcast_ref::<ArtError>().is_some() {
            return exit_codes::ERROR_CONFIG;
        }
    }
    exit_codes::ERROR_GENERIC
}
