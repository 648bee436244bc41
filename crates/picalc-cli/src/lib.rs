//! # picalc-cli
//!
//! CLI output, ASCII-art rendering, report display, and shell completion.

pub mod art;
pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use art::{ArtError, Canvas};
pub use presenter::CLIResultPresenter;
