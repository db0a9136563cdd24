use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "builder-gen")]
#[command(author, version, about = "Java builder-pattern source generator")]
pub(crate) struct Cli {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
  /// List information from a class model file
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate builder source from a class model file
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub(crate) struct GenerateCommand {
  /// Path to the JSON class model file
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Path where the generated source will be written
  #[arg(short, long, value_name = "FILE")]
  pub output: PathBuf,

  /// Emit a copy constructor plus the matching static factory overload
  #[arg(long, default_value_t = false)]
  pub copy_constructor: bool,

  /// Emit a build() convenience factory on the origin class itself
  #[arg(long, default_value_t = false)]
  pub bean_factory: bool,

  /// Name accessors with<Name> instead of the bare base name
  #[arg(long, default_value_t = false)]
  pub with_prefix: bool,

  /// Emit Added/Removed mutator pairs for collection fields
  #[arg(long, default_value_t = false)]
  pub collection_add_remove: bool,

  /// Emit variable-arity overloads for collection fields
  #[arg(long, default_value_t = false)]
  pub collection_varargs: bool,

  /// Pretty-print the result (best-effort; kept unformatted on decline)
  #[arg(long, default_value_t = false)]
  pub format: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum ListCommands {
  /// List the fields of the class model with their derived names
  Fields {
    /// Path to the JSON class model file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
