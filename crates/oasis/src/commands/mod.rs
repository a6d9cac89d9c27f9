//! Command dispatch: bridges CLI args -> directory operations -> output.

pub mod auth;
pub mod categories;
pub mod config_cmd;
pub mod resources;
pub mod saved;
pub mod util;

use oasis_core::Directory;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a directory-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    directory: &Directory,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Resources(args) => resources::handle(directory, args, global).await,
        Command::Categories(args) => categories::handle(directory, args, global).await,
        Command::Saved(args) => saved::handle(directory, args, global).await,
        Command::Auth(args) => auth::handle(directory, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
