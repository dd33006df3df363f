use log::info;
use remote_control::{console::Console, demo};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    info!("Welcome to {}", env!("CARGO_PKG_NAME"));

    demo::run(&Console::stdout())
}
