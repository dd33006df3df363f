//! The two walkthroughs run by the binary.

use crate::appliance::{Fan, Light, Oven};
use crate::commands::Command;
use crate::console::Console;
use crate::receiver::ReceiverId;
use crate::remote::{MacroRemote, SimpleRemote};
use anyhow::Result;
use log::info;

pub fn run(console: &Console) -> Result<()> {
    console.print("Simple command test:")?;
    simple_command_test(console)?;
    console.print("")?;
    console.print("")?;

    console.print("Macro command test:")?;
    macro_command_test(console)?;
    console.print("")?;
    console.print("")?;

    Ok(())
}

pub fn simple_command_test(console: &Console) -> Result<()> {
    info!("Running simple command test");

    let light = Light::new(console.clone());

    let light_on = Command::on(&light);
    let light_off = Command::off(&light);

    let mut remote = SimpleRemote::new(console);

    remote.set_command(light_on);
    remote.button_pressed()?;

    remote.set_command(light_off);
    remote.button_pressed()?;

    Ok(())
}

pub fn macro_command_test(console: &Console) -> Result<()> {
    info!("Running macro command test");

    let light = Light::new(console.clone());
    let fan = Fan::new(console.clone());
    let oven = Oven::new(console.clone());

    let mut remote = MacroRemote::new(console);

    remote.set_command(ReceiverId::Light, Command::on(&light), Command::off(&light));
    remote.on_button_pressed(ReceiverId::Light)?;
    remote.off_button_pressed(ReceiverId::Light)?;

    remote.set_command(ReceiverId::Fan, Command::on(&fan), Command::off(&fan));
    remote.on_button_pressed(ReceiverId::Fan)?;
    remote.off_button_pressed(ReceiverId::Fan)?;

    remote.set_command(ReceiverId::Oven, Command::on(&oven), Command::off(&oven));
    remote.on_button_pressed(ReceiverId::Oven)?;
    remote.off_button_pressed(ReceiverId::Oven)?;

    remote.set_command(
        ReceiverId::None,
        Command::noop(console),
        Command::noop(console),
    );
    remote.on_button_pressed(ReceiverId::None)?;

    Ok(())
}
