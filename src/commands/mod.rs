mod command;

pub use command::{Action, Command};
