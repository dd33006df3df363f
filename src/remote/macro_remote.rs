use crate::commands::Command;
use crate::console::Console;
use crate::error::RemoteError;
use crate::receiver::ReceiverId;
use anyhow::Result;
use log::{debug, trace};

/// Remote with an on and an off button for every receiver slot.
///
/// Both tables are filled with the no-op command up front, so every button
/// is always wired to something.
#[derive(Debug)]
pub struct MacroRemote<'a> {
    on_commands: [Command<'a>; ReceiverId::COUNT],
    off_commands: [Command<'a>; ReceiverId::COUNT],
}

impl<'a> MacroRemote<'a> {
    pub fn new(console: &'a Console) -> Self {
        let noop = Command::noop(console);

        Self {
            on_commands: [noop; ReceiverId::COUNT],
            off_commands: [noop; ReceiverId::COUNT],
        }
    }

    pub fn set_command(&mut self, id: ReceiverId, on: Command<'a>, off: Command<'a>) {
        trace!("Slot {}: on = {}, off = {}", id, on, off);

        self.on_commands[id.index()] = on;
        self.off_commands[id.index()] = off;
    }

    pub fn set_command_at(
        &mut self,
        index: usize,
        on: Command<'a>,
        off: Command<'a>,
    ) -> Result<(), RemoteError> {
        let id = ReceiverId::try_from(index)?;
        self.set_command(id, on, off);
        Ok(())
    }

    pub fn commands(&self, id: ReceiverId) -> (&Command<'a>, &Command<'a>) {
        (&self.on_commands[id.index()], &self.off_commands[id.index()])
    }

    pub fn on_button_pressed(&self, id: ReceiverId) -> Result<()> {
        let command = &self.on_commands[id.index()];
        debug!("On button pressed for {}: {}", id, command);
        command.execute()
    }

    pub fn off_button_pressed(&self, id: ReceiverId) -> Result<()> {
        let command = &self.off_commands[id.index()];
        debug!("Off button pressed for {}: {}", id, command);
        command.execute()
    }

    pub fn on_button_pressed_at(&self, index: usize) -> Result<()> {
        self.on_button_pressed(ReceiverId::try_from(index)?)
    }

    pub fn off_button_pressed_at(&self, index: usize) -> Result<()> {
        self.off_button_pressed(ReceiverId::try_from(index)?)
    }
}
