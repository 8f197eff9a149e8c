use super::args::{Cli, Commands, ViewModeArgs};
use super::context::ExecutionContext;
use super::handlers::{self, HandlerContext};
use super::logging::{self, LogTarget};
use anyhow::Result;
use is_terminal::IsTerminal;
use spexplorer_runtime::resolve_data_dir;

const LOG_FILE_NAME: &str = "spexplorer.log";

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Tui);

    // The TUI owns the terminal, so its logs go to a file
    let interactive = matches!(command, Commands::Tui) && std::io::stdout().is_terminal();
    let log_path = data_dir.join(LOG_FILE_NAME);
    let log_target = if interactive {
        LogTarget::File(&log_path)
    } else {
        LogTarget::Stderr
    };
    logging::init(cli.log_level, log_target)?;

    match command {
        Commands::Init { force } => {
            let hctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
            handlers::init::handle(&data_dir, force, &hctx)
        }

        Commands::Lists { view_mode } => {
            let ctx = ExecutionContext::new(data_dir, cli.user, cli.token, cli.fixture.as_deref())?;
            handlers::lists::handle(&ctx, &HandlerContext::new(cli.format, &view_mode))
        }

        Commands::Columns { list, view_mode } => {
            let ctx = ExecutionContext::new(data_dir, cli.user, cli.token, cli.fixture.as_deref())?;
            handlers::columns::handle(
                &ctx,
                list.as_deref(),
                &HandlerContext::new(cli.format, &view_mode),
            )
        }

        Commands::Tui => {
            let ctx = ExecutionContext::new(data_dir, cli.user, cli.token, cli.fixture.as_deref())?;
            if interactive {
                handlers::tui::handle(ctx)
            } else {
                tracing::warn!("stdout is not a terminal; printing the list selector instead");
                let hctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
                handlers::lists::handle(&ctx, &hctx)
            }
        }
    }
}
