use color_eyre::eyre::Result;
use tracing::trace;

use crate::args::{Args, Commands};

mod args;
mod cmd;
mod logging;

pub fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::new();

    let _guard = logging::init(
        args.get_log_level_or_default(),
        args.get_log_format_or_default(),
    )?;

    trace!("Command-line parameters: {args:?}");

    match &args.command {
        Commands::Inspect(cmd) => cmd.run(),
    }
}
