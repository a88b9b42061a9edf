use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// No subcommand means `status`.
pub fn dispatch(
    command: Option<Commands>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        None | Some(Commands::Status) => commands::status::handle(ctx, flags),
        Some(Commands::Scans) => commands::scans::handle(ctx, flags),
        Some(Commands::Review(args)) => commands::review::handle(&args, ctx, flags),
        Some(Commands::Schema(args)) => commands::schema::handle(&args, flags),
    }
}
