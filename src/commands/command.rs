use crate::appliance::Appliance;
use crate::console::Console;
use anyhow::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    On,
    Off,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::On => f.write_str("on"),
            Action::Off => f.write_str("off"),
        }
    }
}

/// An action bound to the appliance it acts on.
///
/// Commands borrow their appliance, so they can be copied into as many
/// remote slots as needed.
#[derive(Clone, Copy)]
pub enum Command<'a> {
    Noop {
        console: &'a Console,
    },
    Switch {
        appliance: &'a dyn Appliance,
        action: Action,
    },
}

impl<'a> Command<'a> {
    pub fn noop(console: &'a Console) -> Self {
        Command::Noop { console }
    }

    pub fn on(appliance: &'a dyn Appliance) -> Self {
        Command::Switch {
            appliance,
            action: Action::On,
        }
    }

    pub fn off(appliance: &'a dyn Appliance) -> Self {
        Command::Switch {
            appliance,
            action: Action::Off,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Command::Noop { .. })
    }

    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Noop { console } => {
                console.print("Null command: do nothing")?;
                Ok(())
            }
            Command::Switch {
                appliance,
                action: Action::On,
            } => appliance.on(),
            Command::Switch {
                appliance,
                action: Action::Off,
            } => appliance.off(),
        }
    }
}

impl fmt::Display for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Noop { .. } => f.write_str("noop"),
            Command::Switch { appliance, action } => {
                write!(f, "{} {}", appliance.name(), action)
            }
        }
    }
}

impl fmt::Debug for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Noop { .. } => f.debug_struct("Noop").finish(),
            Command::Switch { appliance, action } => f
                .debug_struct("Switch")
                .field("appliance", &appliance.name())
                .field("action", action)
                .finish(),
        }
    }
}
