use clap::Parser;

use crate::ui::{Cli, Commands, ListCommands};

mod generator;
mod naming;
mod ui;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Commands::List { list_command } => match list_command {
      ListCommands::Fields { input } => ui::commands::list_fields(&input)?,
    },
    Commands::Generate(command) => ui::commands::generate_code(&command)?,
  }

  Ok(())
}
