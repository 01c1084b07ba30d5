use clap::{Args, Subcommand};

/// Profile commands. Unset flags keep the current value.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show the current user and farm.
    Show,
    /// Save name, phone, and bio. An empty phone or bio clears it.
    SavePersonal {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
    /// Save the farm, creating it if none exists yet.
    SaveFarm(SaveFarmArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SaveFarmArgs {
    #[arg(long)]
    pub farm_name: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    /// Hectares; unparseable input saves as 0
    #[arg(long)]
    pub size: Option<String>,
    #[arg(long)]
    pub soil_type: Option<String>,
    /// Whole years; unparseable input saves as 0
    #[arg(long)]
    pub experience: Option<String>,
    #[arg(long)]
    pub irrigation: Option<bool>,
    /// Crop to add (free text); repeatable
    #[arg(long = "crop")]
    pub crops: Vec<String>,
    /// Crop to add from the common crop list; repeatable
    #[arg(long = "common-crop")]
    pub common_crops: Vec<String>,
    /// Crop to remove; repeatable
    #[arg(long = "remove-crop")]
    pub remove_crops: Vec<String>,
}
