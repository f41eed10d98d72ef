use chrono::NaiveDate;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use roadmap_core::{RoadmapCategoryId, RoadmapElementId, RoadmapElementRequest, RoadmapId};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "roadmap", version, about = "Manage roadmap elements")]
pub(crate) struct Cli {
    /// SQLite database file; created and migrated on first use.
    #[arg(long, env = "ROADMAP_DB", default_value = "roadmap.sqlite3", global = true)]
    pub(crate) db: PathBuf,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "ROADMAP_LOG_DIR", global = true)]
    pub(crate) log_dir: Option<String>,

    /// trace|debug|info|warn|error; defaults per build mode.
    #[arg(long, env = "ROADMAP_LOG_LEVEL", global = true)]
    pub(crate) log_level: Option<String>,

    /// Reject categories and elements that belong to another roadmap.
    /// The env var accepts the usual truthy spellings (`1`, `yes`, `on`).
    #[arg(
        long,
        env = "ROADMAP_STRICT_OWNERSHIP",
        global = true,
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub(crate) strict_ownership: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Roadmap seeding.
    Roadmap {
        #[command(subcommand)]
        command: RoadmapCommand,
    },
    /// Category seeding.
    Category {
        #[command(subcommand)]
        command: CategoryCommand,
    },
    /// Element create/list/update/delete.
    Element {
        #[command(subcommand)]
        command: ElementCommand,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum RoadmapCommand {
    Add {
        #[arg(long)]
        title: String,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum CategoryCommand {
    Add {
        #[arg(long)]
        roadmap_id: RoadmapId,
        #[arg(long)]
        title: String,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum ElementCommand {
    Create {
        #[arg(long)]
        roadmap_id: RoadmapId,
        #[arg(long)]
        category_id: RoadmapCategoryId,
        #[command(flatten)]
        fields: ElementFields,
    },
    List {
        #[arg(long)]
        roadmap_id: RoadmapId,
        #[arg(long)]
        category_id: RoadmapCategoryId,
    },
    Update {
        #[arg(long)]
        roadmap_id: RoadmapId,
        #[arg(long)]
        element_id: RoadmapElementId,
        #[command(flatten)]
        fields: ElementFields,
    },
    Delete {
        #[arg(long)]
        roadmap_id: RoadmapId,
        #[arg(long)]
        element_id: RoadmapElementId,
    },
}

/// Element fields shared by create and update; dates are `YYYY-MM-DD`.
#[derive(Debug, Args)]
pub(crate) struct ElementFields {
    #[arg(long)]
    title: String,
    #[arg(long)]
    content: String,
    #[arg(long)]
    start_date: NaiveDate,
    #[arg(long)]
    end_date: NaiveDate,
}

impl From<ElementFields> for RoadmapElementRequest {
    fn from(fields: ElementFields) -> Self {
        RoadmapElementRequest::new(fields.title, fields.content, fields.start_date, fields.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, ElementCommand};
    use clap::{CommandFactory, Parser};
    use roadmap_core::RoadmapElementRequest;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_element_create_with_dates() {
        let cli = Cli::try_parse_from([
            "roadmap",
            "--db",
            "/tmp/r.sqlite3",
            "element",
            "create",
            "--roadmap-id",
            "1",
            "--category-id",
            "2",
            "--title",
            "Learn X",
            "--content",
            "basics",
            "--start-date",
            "2024-01-01",
            "--end-date",
            "2024-02-01",
        ])
        .unwrap();

        match cli.command {
            Command::Element {
                command:
                    ElementCommand::Create {
                        roadmap_id,
                        category_id,
                        fields,
                    },
            } => {
                assert_eq!((roadmap_id, category_id), (1, 2));
                let request = RoadmapElementRequest::from(fields);
                assert_eq!(request.title, "Learn X");
                assert_eq!(request.end_date.to_string(), "2024-02-01");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn strict_ownership_reads_truthy_env_values() {
        let list = ["roadmap", "element", "list", "--roadmap-id", "1", "--category-id", "1"];

        std::env::set_var("ROADMAP_STRICT_OWNERSHIP", "1");
        let enabled = Cli::try_parse_from(list).unwrap();
        std::env::set_var("ROADMAP_STRICT_OWNERSHIP", "off");
        let disabled = Cli::try_parse_from(list).unwrap();
        std::env::remove_var("ROADMAP_STRICT_OWNERSHIP");
        let unset = Cli::try_parse_from(list).unwrap();

        assert!(enabled.strict_ownership);
        assert!(!disabled.strict_ownership);
        assert!(!unset.strict_ownership);
    }

    #[test]
    fn strict_ownership_flag_takes_no_value() {
        let cli = Cli::try_parse_from([
            "roadmap",
            "--strict-ownership",
            "element",
            "delete",
            "--roadmap-id",
            "1",
            "--element-id",
            "2",
        ])
        .unwrap();
        assert!(cli.strict_ownership);
    }

    #[test]
    fn rejects_malformed_date() {
        let result = Cli::try_parse_from([
            "roadmap",
            "element",
            "update",
            "--roadmap-id",
            "1",
            "--element-id",
            "3",
            "--title",
            "t",
            "--content",
            "c",
            "--start-date",
            "01/01/2024",
            "--end-date",
            "2024-02-01",
        ]);
        assert!(result.is_err());
    }
}
