use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to its handler.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Open(args) => commands::open::handle(&args, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Recommendations(args) => {
            commands::recommendations::handle(&args, ctx, flags).await
        }
        Commands::Weather(args) => commands::weather::handle(&args, ctx, flags).await,
        Commands::Forum { action } => commands::forum::handle(&action, ctx, flags).await,
        Commands::Resources { action } => commands::resources::handle(&action, ctx, flags).await,
        Commands::Profile { action } => commands::profile::handle(&action, ctx, flags).await,
        Commands::Route(_) | Commands::Options(_) => {
            unreachable!("route/options are pre-dispatched in main")
        }
    }
}
