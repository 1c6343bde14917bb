mod commands;
mod server;

pub use commands::{get_commands_list, handle_command};
pub use server::StudioHost;
