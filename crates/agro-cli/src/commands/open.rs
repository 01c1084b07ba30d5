use crate::cli::GlobalFlags;
use crate::cli::root_commands::OpenArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `agro open`: route the path, mount and load the screen, print it.
pub async fn handle(args: &OpenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (route, screen) = ctx.shell.open(&args.path).await?;
    tracing::info!(location = %route.location(), screen = screen.name(), "opened");
    output(&screen.render()?, flags.format)
}
