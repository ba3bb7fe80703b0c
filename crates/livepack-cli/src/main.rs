//! livepack - bundle `client/src/index.ts` into `static/dist`.

use clap::Parser;
use livepack_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    commands::build_execute(&args)
        .await
        .map_err(error::cli_error_to_miette)
}
