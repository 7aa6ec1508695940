//! Event-Typen der Anwendung: Intents (Eingaben) und Commands (Mutationen).

pub mod command;
pub mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
