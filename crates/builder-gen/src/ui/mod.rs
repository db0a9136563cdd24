pub(crate) mod cli;
pub(crate) mod commands;

pub(crate) use cli::{Cli, Commands, ListCommands};
