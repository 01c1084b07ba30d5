use agro_app::PageController;
use agro_app::controllers::RecommendationsController;
use agro_app::criteria::Choice;
use agro_app::pipelines::recommendations::RecommendationCriteria;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RecommendationArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::page::emit;
use crate::context::AppContext;

fn criteria(args: &RecommendationArgs) -> anyhow::Result<RecommendationCriteria> {
    Ok(RecommendationCriteria {
        state: Choice::text(&args.state),
        season: Choice::parse(&args.season, "season")?,
        water_requirement: Choice::parse(&args.water_requirement, "water_requirement")?,
        market_potential: Choice::parse(&args.market_potential, "market_potential")?,
    })
}

/// Handle `agro recommendations`.
pub async fn handle(
    args: &RecommendationArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let criteria = criteria(args)?;
    let mut page = RecommendationsController::new(ctx.store());
    page.set_criteria(criteria);
    page.load().await;
    if args.my_state && !page.show_my_state() {
        tracing::warn!("--my-state ignored: no farm profile yet");
    }

    let limit = effective_limit(
        args.limit,
        flags.limit,
        ctx.config().general.default_limit,
    );
    let view = page.view().map(|mut view| {
        view.recommendations.truncate(limit);
        view
    });
    emit(&page, view, flags)
}

#[cfg(test)]
mod tests {
    use agro_app::criteria::Choice;
    use agro_core::enums::{Level, Season};

    use super::criteria;
    use crate::cli::root_commands::RecommendationArgs;

    fn args(season: &str, water: &str) -> RecommendationArgs {
        RecommendationArgs {
            state: "Kano".into(),
            season: season.into(),
            water_requirement: water.into(),
            market_potential: "all".into(),
            my_state: false,
            limit: None,
        }
    }

    #[test]
    fn flags_map_to_criteria() {
        let parsed = criteria(&args("dry-season", "low")).expect("criteria should parse");
        assert_eq!(parsed.state, Choice::Only("Kano".to_string()));
        assert_eq!(parsed.season, Choice::Only(Season::DrySeason));
        assert_eq!(parsed.water_requirement, Choice::Only(Level::Low));
        assert!(parsed.market_potential.is_all());
    }

    #[test]
    fn unknown_season_is_rejected() {
        let err = criteria(&args("monsoon", "all")).expect_err("should fail");
        assert!(err.to_string().contains("monsoon"));
    }
}
