use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level parser for the `agro` binary.
#[derive(Debug, Parser)]
#[command(name = "agro", version, about = "agrodash - farmer dashboard in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max list items to print
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only in the log)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{ForumCommands, ProfileCommands, ResourceCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_and_after_subcommand() {
        let cli = Cli::try_parse_from(["agro", "--format", "table", "-l", "5", "dashboard"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(5));
        assert!(matches!(cli.command, Commands::Dashboard));

        let cli = Cli::try_parse_from(["agro", "dashboard", "--format", "raw", "--quiet"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["agro", "--format", "xml", "dashboard"]).is_err());
    }

    #[test]
    fn open_takes_a_path_with_query() {
        let cli = Cli::try_parse_from(["agro", "open", "/community?id=pst-1"])
            .expect("cli should parse");
        match cli.command {
            Commands::Open(args) => assert_eq!(args.path, "/community?id=pst-1"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn route_collects_repeated_params_in_order() {
        let cli = Cli::try_parse_from([
            "agro", "route", "Forum", "--param", "id=pst-1", "--param", "tab=replies",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Route(args) => {
                assert_eq!(args.page, "Forum");
                assert_eq!(
                    args.params,
                    vec![
                        ("id".to_string(), "pst-1".to_string()),
                        ("tab".to_string(), "replies".to_string()),
                    ]
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn route_param_without_equals_is_rejected() {
        assert!(Cli::try_parse_from(["agro", "route", "Forum", "--param", "id"]).is_err());
    }

    #[test]
    fn forum_post_accepts_repeated_tags() {
        let cli = Cli::try_parse_from([
            "agro", "forum", "post", "--title", "t", "--content", "c", "--category",
            "pest_control", "--tag", "maize", "--tag", "armyworm",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Forum {
                action: ForumCommands::Post { tags, .. },
            } => assert_eq!(tags, vec!["maize", "armyworm"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn resource_and_profile_actions_parse() {
        let cli = Cli::try_parse_from(["agro", "resources", "like", "res-1"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Resources {
                action: ResourceCommands::Like { .. }
            }
        ));

        let cli = Cli::try_parse_from([
            "agro", "profile", "save-farm", "--size", "2.5", "--irrigation", "false",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Profile {
                action: ProfileCommands::SaveFarm(args),
            } => {
                assert_eq!(args.size.as_deref(), Some("2.5"));
                assert_eq!(args.irrigation, Some(false));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
