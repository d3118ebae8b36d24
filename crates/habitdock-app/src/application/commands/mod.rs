pub mod achievement_commands;
pub mod command_handler;
pub mod habit_commands;
pub mod handlers;

pub use achievement_commands::*;
pub use command_handler::{Command, CommandHandler};
pub use habit_commands::*;
