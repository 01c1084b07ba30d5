use clap::Subcommand;

/// Learning resource commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ResourceCommands {
    /// List resources with featured items and category counts.
    List {
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long = "type", default_value = "all")]
        resource_type: String,
        #[arg(long, default_value = "all")]
        difficulty: String,
        /// Matches title, description, or tags
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Open a resource (counts a view).
    Open { id: String },
    /// Like a resource.
    Like { id: String },
}
