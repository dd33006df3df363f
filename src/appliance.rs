use crate::console::Console;
use anyhow::Result;

/// Something a remote can switch on and off.
pub trait Appliance {
    fn name(&self) -> &'static str;
    fn on(&self) -> Result<()>;
    fn off(&self) -> Result<()>;
}

fn announce(console: &Console, name: &str, state: &str) -> Result<()> {
    console.print(format!("The {} is {}", name, state))?;
    Ok(())
}

#[derive(Debug)]
pub struct Light {
    console: Console,
}

impl Light {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Appliance for Light {
    fn name(&self) -> &'static str {
        "light"
    }

    fn on(&self) -> Result<()> {
        announce(&self.console, self.name(), "on")
    }

    fn off(&self) -> Result<()> {
        announce(&self.console, self.name(), "off")
    }
}

#[derive(Debug)]
pub struct Fan {
    console: Console,
}

impl Fan {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Appliance for Fan {
    fn name(&self) -> &'static str {
        "fan"
    }

    fn on(&self) -> Result<()> {
        announce(&self.console, self.name(), "on")
    }

    fn off(&self) -> Result<()> {
        announce(&self.console, self.name(), "off")
    }
}

#[derive(Debug)]
pub struct Oven {
    console: Console,
}

impl Oven {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Appliance for Oven {
    fn name(&self) -> &'static str {
        "oven"
    }

    fn on(&self) -> Result<()> {
        announce(&self.console, self.name(), "on")
    }

    fn off(&self) -> Result<()> {
        announce(&self.console, self.name(), "off")
    }
}

#[cfg(test)]
mod tests {
    use super::{Appliance, Fan, Light, Oven};
    use crate::console::Console;

    #[test]
    fn each_appliance_reports_its_own_state() {
        let console = Console::recording();
        let light = Light::new(console.clone());
        let fan = Fan::new(console.clone());
        let oven = Oven::new(console.clone());

        light.on().unwrap();
        light.off().unwrap();
        fan.on().unwrap();
        fan.off().unwrap();
        oven.on().unwrap();
        oven.off().unwrap();

        assert_eq!(
            console.lines(),
            vec![
                "The light is on",
                "The light is off",
                "The fan is on",
                "The fan is off",
                "The oven is on",
                "The oven is off",
            ]
        );
    }

    #[test]
    fn separate_consoles_stay_separate() {
        let light_console = Console::recording();
        let fan_console = Console::recording();
        let light = Light::new(light_console.clone());
        let _fan = Fan::new(fan_console.clone());

        light.on().unwrap();

        assert_eq!(light_console.lines(), vec!["The light is on"]);
        assert!(fan_console.lines().is_empty());
    }
}
