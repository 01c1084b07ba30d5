use agro_app::PageController;
use agro_app::controllers::ResourcesController;
use agro_app::criteria::Choice;
use agro_app::pipelines::resources::ResourceCriteria;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ResourceCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::page::emit;
use crate::context::AppContext;
use crate::output::output;

fn criteria(
    category: &str,
    resource_type: &str,
    difficulty: &str,
    search: Option<&str>,
) -> anyhow::Result<ResourceCriteria> {
    Ok(ResourceCriteria {
        category: Choice::parse(category, "category")?,
        resource_type: Choice::parse(resource_type, "resource_type")?,
        difficulty_level: Choice::parse(difficulty, "difficulty_level")?,
        search: search.unwrap_or_default().to_string(),
    })
}

/// Handle `agro resources`.
pub async fn handle(
    action: &ResourceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut page = ResourcesController::new(ctx.store());
    match action {
        ResourceCommands::List {
            category,
            resource_type,
            difficulty,
            search,
            limit,
        } => {
            page.set_criteria(criteria(
                category,
                resource_type,
                difficulty,
                search.as_deref(),
            )?);
            page.load().await;
            let limit = effective_limit(*limit, flags.limit, ctx.config().general.default_limit);
            let view = page.view().map(|mut view| {
                view.resources.truncate(limit);
                view
            });
            emit(&page, view, flags)
        }
        ResourceCommands::Open { id } => output(&page.open(id).await?, flags.format),
        ResourceCommands::Like { id } => output(&page.like(id).await?, flags.format),
    }
}
