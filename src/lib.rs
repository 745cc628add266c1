pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::build_source, CliConfig};

pub use adapters::{ChatDbSource, CommandSource};
pub use crate::core::probe::{classify, run_probe, Probe};
pub use domain::model::{ExitStatus, ProbeOutcome};
pub use domain::ports::MessageSource;
pub use utils::error::{ProbeError, Result};
