// Adapters layer: concrete message sources behind the `MessageSource` port.

pub mod chat_db;
pub mod command;

pub use chat_db::ChatDbSource;
pub use command::CommandSource;
