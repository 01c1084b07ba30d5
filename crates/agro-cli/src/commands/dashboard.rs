use agro_app::PageController;
use agro_app::controllers::DashboardController;

use crate::cli::GlobalFlags;
use crate::commands::shared::page::emit;
use crate::context::AppContext;

/// Handle `agro dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut page = DashboardController::new(ctx.store());
    page.load().await;
    emit(&page, page.view(), flags)
}
