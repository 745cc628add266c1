pub mod probe;

pub use crate::domain::model::{ExitStatus, Message, ProbeOutcome, Sender};
pub use crate::domain::ports::MessageSource;
pub use crate::utils::error::Result;
