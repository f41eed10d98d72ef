//! Command-line front end for the roadmap core.
//!
//! # Responsibility
//! - Wire SQLite repositories into the element service (composition root).
//! - Print results as JSON and map typed failures to exit codes.

mod args;

use args::{CategoryCommand, Cli, Command, ElementCommand, RoadmapCommand};
use clap::Parser;
use log::info;
use roadmap_core::db::{open_db, DbError};
use roadmap_core::{
    default_log_level, init_logging, sqlite_element_service, NewRoadmap, NewRoadmapCategory,
    OwnershipCheck, RepoError, RoadmapCategoryRepository, RoadmapElementRequest,
    RoadmapRepository, RoadmapServiceError, ServiceOptions, SqliteRoadmapCategoryRepository,
    SqliteRoadmapRepository,
};
use rusqlite::Connection;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::process::ExitCode;

const EXIT_FAILURE: u8 = 1;
const EXIT_NOT_FOUND: u8 = 2;

#[derive(Debug)]
enum CliError {
    Logging(String),
    Db(DbError),
    Repo(RepoError),
    Service(RoadmapServiceError),
    Output(serde_json::Error),
}

impl CliError {
    fn exit_status(&self) -> u8 {
        match self {
            Self::Service(err) if err.code().is_not_found() => EXIT_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }

    fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(message) => write!(f, "error message=logging setup failed: {message}"),
            Self::Db(err) => write!(f, "error message={err}"),
            Self::Repo(err) => write!(f, "error message={err}"),
            Self::Service(err) => write!(
                f,
                "error code={} status={} message={err}",
                err.code(),
                err.status_code()
            ),
            Self::Output(err) => write!(f, "error message=failed to encode output: {err}"),
        }
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<RoadmapServiceError> for CliError {
    fn from(value: RoadmapServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            err.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(CliError::Logging)?;
    }

    let conn = open_db(&cli.db)?;
    info!(
        "event=cli_command module=cli status=start version={} db={}",
        roadmap_core::core_version(),
        cli.db.display()
    );

    let options = ServiceOptions {
        ownership_check: if cli.strict_ownership {
            OwnershipCheck::Strict
        } else {
            OwnershipCheck::Lenient
        },
    };

    match cli.command {
        Command::Roadmap {
            command: RoadmapCommand::Add { title },
        } => {
            let repo = SqliteRoadmapRepository::try_new(&conn)?;
            print_json(&repo.create_roadmap(&NewRoadmap::new(title))?)
        }
        Command::Category {
            command: CategoryCommand::Add { roadmap_id, title },
        } => {
            let roadmaps = SqliteRoadmapRepository::try_new(&conn)?;
            if roadmaps.get_roadmap(roadmap_id)?.is_none() {
                return Err(RoadmapServiceError::RoadmapNotFound(roadmap_id).into());
            }
            let repo = SqliteRoadmapCategoryRepository::try_new(&conn)?;
            print_json(&repo.create_category(&NewRoadmapCategory::new(roadmap_id, title))?)
        }
        Command::Element { command } => run_element(&conn, options, command),
    }
}

fn run_element(
    conn: &Connection,
    options: ServiceOptions,
    command: ElementCommand,
) -> Result<(), CliError> {
    let service = sqlite_element_service(conn, options)?;

    match command {
        ElementCommand::Create {
            roadmap_id,
            category_id,
            fields,
        } => {
            let request = RoadmapElementRequest::from(fields);
            print_json(&service.create_roadmap_element(&request, roadmap_id, category_id)?)
        }
        ElementCommand::List {
            roadmap_id,
            category_id,
        } => print_json(&service.read_all_roadmap_element_list(roadmap_id, category_id)?),
        ElementCommand::Update {
            roadmap_id,
            element_id,
            fields,
        } => {
            let request = RoadmapElementRequest::from(fields);
            service.update_roadmap_element(&request, roadmap_id, element_id)?;
            Ok(())
        }
        ElementCommand::Delete {
            roadmap_id,
            element_id,
        } => {
            service.delete_roadmap_element(roadmap_id, element_id)?;
            Ok(())
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
