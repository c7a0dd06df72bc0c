use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Topics => commands::topics::handle(flags),
        Commands::Story { action } => commands::story::handle(&action, ctx, flags).await,
        Commands::Quiz { story_id } => commands::quiz::handle(&story_id, ctx, flags).await,
        Commands::Child { action } => commands::child::handle(&action, ctx, flags).await,
    }
}
