use agro_app::PageController;
use agro_app::controllers::forum::PostForm;
use agro_app::controllers::{ForumController, PostDetailsController};
use agro_app::criteria::Choice;
use agro_app::pipelines::forum::ForumCriteria;
use agro_core::enums::{ForumCategory, parse_enum};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ForumCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::page::emit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `agro forum`.
pub async fn handle(
    action: &ForumCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ForumCommands::List {
            category,
            search,
            limit,
        } => {
            let mut page = ForumController::new(ctx.store());
            page.set_criteria(ForumCriteria {
                category: Choice::parse(category, "category")?,
                search: search.clone().unwrap_or_default(),
            });
            page.load().await;
            let limit = effective_limit(*limit, flags.limit, ctx.config().general.default_limit);
            let view = page.view().map(|mut view| {
                view.posts.truncate(limit);
                view
            });
            emit(&page, view, flags)
        }
        ForumCommands::Show { id } => {
            let mut page = PostDetailsController::new(ctx.store(), id.as_str());
            page.load().await;
            emit(&page, page.view(), flags)
        }
        ForumCommands::Post {
            title,
            content,
            category,
            tags,
        } => {
            // Blank category reaches the form as missing, like an unpicked select.
            let category = if category.trim().is_empty() {
                None
            } else {
                Some(parse_enum::<ForumCategory>(category, "category")?)
            };
            let mut page = ForumController::new(ctx.store());
            let post = page
                .create_post(PostForm {
                    title: title.clone(),
                    content: content.clone(),
                    category,
                    tags: tags.clone(),
                })
                .await?;
            output(&post, flags.format)
        }
        ForumCommands::Reply { post_id, content } => {
            let mut page = PostDetailsController::new(ctx.store(), post_id.as_str());
            page.submit_reply(content).await?;
            emit(&page, page.view(), flags)
        }
        ForumCommands::Like { post_id, reply } => {
            let mut page = PostDetailsController::new(ctx.store(), post_id.as_str());
            match reply {
                Some(reply_id) => {
                    page.like_reply(reply_id).await?;
                }
                None => {
                    page.like_post().await?;
                }
            }
            emit(&page, page.view(), flags)
        }
    }
}
