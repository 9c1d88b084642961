use clap::Parser;
use sdk_release_tools::cli::{get_styles, handle_error};
use sdk_release_tools::commands;
use sdk_release_tools::core::logging;

/// Promote a built SDK version to the release channel and republish its docs
#[derive(Parser)]
#[command(name = "promote")]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Version to promote
  #[arg(long, required = true)]
  version: String,

  /// Print every step instead of executing it
  #[arg(long)]
  dryrun: bool,
}

fn main() {
  let cli = Cli::parse();
  logging::init();

  if let Err(err) = commands::run_promote(cli.version, cli.dryrun) {
    handle_error(err);
  }
}
