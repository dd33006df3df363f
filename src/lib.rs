pub mod appliance;
pub mod commands;
pub mod console;
pub mod demo;
pub mod error;
pub mod receiver;
pub mod remote;
