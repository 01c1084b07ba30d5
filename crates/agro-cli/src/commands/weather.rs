use agro_app::PageController;
use agro_app::controllers::WeatherController;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WeatherArgs;
use crate::commands::shared::page::emit;
use crate::context::AppContext;

/// Handle `agro weather`.
pub async fn handle(args: &WeatherArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = ctx.config();
    let mut page = WeatherController::new(
        ctx.store(),
        config.weather.clone(),
        config.general.default_state.clone(),
    );
    page.load().await;
    if args.refresh {
        page.refresh().await;
    }
    emit(&page, page.view(), flags)
}
