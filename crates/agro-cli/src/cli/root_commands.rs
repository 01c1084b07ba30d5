use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{ForumCommands, ProfileCommands, ResourceCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Open a URL path the way the browser shell would and print the page.
    Open(OpenArgs),
    /// Print the URL for a logical page name.
    Route(RouteArgs),
    /// Print a picker's option list.
    Options(OptionsArgs),
    /// Farm summary, alerts, and quick insights.
    Dashboard,
    /// Crop recommendations ranked by climate resilience.
    Recommendations(RecommendationArgs),
    /// Current weather, forecast, and weather insights.
    Weather(WeatherArgs),
    /// Community forum.
    Forum {
        #[command(subcommand)]
        action: ForumCommands,
    },
    /// Learning resources.
    Resources {
        #[command(subcommand)]
        action: ResourceCommands,
    },
    /// User and farm profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// Path such as `/weather` or `/community?id=pst-…`
    pub path: String,
}

#[derive(Clone, Debug, Args)]
pub struct RouteArgs {
    /// Logical page name, e.g. `Dashboard`
    pub page: String,

    /// Query parameter as key=value; repeatable, kept in order
    #[arg(long = "param", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OptionKind {
    States,
    RecommendationStates,
    Crops,
    SoilTypes,
    ForumCategories,
    ResourceCategories,
}

#[derive(Clone, Debug, Args)]
pub struct OptionsArgs {
    pub kind: OptionKind,
}

#[derive(Clone, Debug, Args)]
pub struct RecommendationArgs {
    /// State name, or `all`
    #[arg(long, default_value = "all")]
    pub state: String,
    #[arg(long, default_value = "all")]
    pub season: String,
    #[arg(long = "water", default_value = "all")]
    pub water_requirement: String,
    #[arg(long = "market", default_value = "all")]
    pub market_potential: String,
    /// Filter to the farm's state (overrides --state)
    #[arg(long)]
    pub my_state: bool,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct WeatherArgs {
    /// Re-run the weather feed after the initial load
    #[arg(long)]
    pub refresh: bool,
}
