pub mod command;
pub mod controller;
pub mod input;

pub use command::MenuCommand;
pub use controller::{MenuController, MENU_TEXT};
pub use input::TokenReader;
