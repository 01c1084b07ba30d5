use clap::Subcommand;

/// Forum commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ForumCommands {
    /// List posts, newest first.
    List {
        /// Category, or `all`
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a post with its replies.
    Show { id: String },
    /// Create a post as the current user.
    Post {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        category: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Reply to a post as the current user.
    Reply {
        post_id: String,
        #[arg(long)]
        content: String,
    },
    /// Like a post, or one of its replies.
    Like {
        post_id: String,
        #[arg(long)]
        reply: Option<String>,
    },
}
