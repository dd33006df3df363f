mod macro_remote;
mod simple;

pub use macro_remote::MacroRemote;
pub use simple::SimpleRemote;
