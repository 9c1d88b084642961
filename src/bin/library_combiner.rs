use clap::Parser;
use sdk_release_tools::cli::{get_styles, handle_error};
use sdk_release_tools::commands;
use sdk_release_tools::core::logging;

/// Merge static libraries with the archiver for the current build target
///
/// The archiver is chosen from the CONFIGURATION environment variable
/// (embedded targets end in STM, CM4 or CM4SF) and the host OS.
#[derive(Parser)]
#[command(name = "library-combiner")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Input libraries in merge order, followed by the output library
  #[arg(required = true, num_args = 1.., value_name = "LIBRARY", allow_hyphen_values = true)]
  libraries: Vec<String>,
}

fn main() {
  let cli = Cli::parse();
  logging::init();

  if let Err(err) = commands::run_combine(cli.libraries) {
    handle_error(err);
  }
}
