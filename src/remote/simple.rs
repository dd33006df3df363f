use crate::commands::Command;
use crate::console::Console;
use anyhow::Result;
use log::debug;

/// Remote with a single button.
#[derive(Debug)]
pub struct SimpleRemote<'a> {
    command: Command<'a>,
}

impl<'a> SimpleRemote<'a> {
    pub fn new(console: &'a Console) -> Self {
        Self {
            command: Command::noop(console),
        }
    }

    pub fn set_command(&mut self, command: Command<'a>) {
        self.command = command;
    }

    pub fn command(&self) -> &Command<'a> {
        &self.command
    }

    pub fn button_pressed(&self) -> Result<()> {
        debug!("Button pressed: {}", self.command);
        self.command.execute()
    }
}
