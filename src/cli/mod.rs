//! Command-line harness around the four operations.
//!
//! Each command reads a JSON document from a file (or stdin with `-`) and
//! renders its result as pretty-printed JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coursekit_config::DashboardConfig;
use coursekit_models::{CoursePayload, CourseVideo, Enrollment, navigation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::utils::input::load_json;
use crate::{aggregate, assemble, normalize, summarize, validate};

#[derive(Parser)]
#[command(name = "coursekit")]
#[command(about = "Coursekit - course content and progress tools", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply defaults to a course payload
    Normalize {
        /// Course payload JSON file, or `-` for stdin
        path: PathBuf,
    },
    /// Validate a course payload and list every violation
    Validate {
        /// Course payload JSON file, or `-` for stdin
        path: PathBuf,

        /// Normalize the payload before validating it
        #[arg(short = 'n', long)]
        normalize: bool,
    },
    /// Build the module tree of a fetched course
    Assemble {
        /// Course JSON file, or `-` for stdin
        path: PathBuf,

        /// Separately fetched video list, used when the course has no modules
        #[arg(short = 'l', long)]
        lessons: Option<PathBuf>,

        /// Include content totals next to the modules
        #[arg(short = 's', long)]
        summary: bool,
    },
    /// Compute dashboard statistics from a student's enrollments
    Aggregate {
        /// Enrollments JSON file (array, or page object with `content`/`data`)
        path: PathBuf,

        /// Number of recent courses to list (default from DASHBOARD_RECENT_LIMIT)
        #[arg(short = 'r', long)]
        recent: Option<usize>,
    },
    /// Print the navigation links for a role
    Nav {
        /// Role name, e.g. student, teacher, admin
        role: String,
    },
}

/// Enrollment lists arrive either bare or wrapped in a page object.
#[derive(Deserialize)]
#[serde(untagged)]
enum EnrollmentsDocument {
    List(Vec<Enrollment>),
    Page { content: Vec<Enrollment> },
    Wrapped { data: Vec<Enrollment> },
}

impl EnrollmentsDocument {
    fn into_vec(self) -> Vec<Enrollment> {
        match self {
            Self::List(items) | Self::Page { content: items } | Self::Wrapped { data: items } => {
                items
            }
        }
    }
}

/// Rendered result of a command.
#[derive(Debug)]
pub struct CommandOutput {
    pub body: String,
    /// `false` when the command ran but the input was rejected
    pub success: bool,
}

impl CommandOutput {
    fn render<T: Serialize>(value: &T, success: bool) -> Result<Self> {
        Ok(Self {
            body: serde_json::to_string_pretty(value).context("Failed to render output")?,
            success,
        })
    }
}

pub fn execute(command: Commands, dashboard: &DashboardConfig) -> Result<CommandOutput> {
    match command {
        Commands::Normalize { path } => handle_normalize(path),
        Commands::Validate { path, normalize } => handle_validate(path, normalize),
        Commands::Assemble {
            path,
            lessons,
            summary,
        } => handle_assemble(path, lessons, summary),
        Commands::Aggregate { path, recent } => {
            handle_aggregate(path, recent.unwrap_or(dashboard.recent_limit))
        }
        Commands::Nav { role } => handle_nav(&role),
    }
}

fn handle_normalize(path: PathBuf) -> Result<CommandOutput> {
    let payload: CoursePayload = load_json(&path)?;
    CommandOutput::render(&normalize(&payload), true)
}

fn handle_validate(path: PathBuf, apply_defaults: bool) -> Result<CommandOutput> {
    let mut payload: CoursePayload = load_json(&path)?;
    if apply_defaults {
        payload = normalize(&payload);
    }
    let result = validate(&payload);
    info!(
        valid = result.is_valid,
        errors = result.errors.len(),
        "Validated {}",
        path.display()
    );
    CommandOutput::render(&result, result.is_valid)
}

fn handle_assemble(
    path: PathBuf,
    lessons: Option<PathBuf>,
    summary: bool,
) -> Result<CommandOutput> {
    let course: CoursePayload = load_json(&path)?;
    let videos: Option<Vec<CourseVideo>> = lessons
        .map(|lessons_path| load_json(&lessons_path))
        .transpose()
        .context("Failed to load the video list")?;

    let modules = assemble(&course, videos.as_deref());
    if summary {
        let totals = summarize(&modules);
        CommandOutput::render(&json!({ "modules": modules, "summary": totals }), true)
    } else {
        CommandOutput::render(&modules, true)
    }
}

fn handle_aggregate(path: PathBuf, recent: usize) -> Result<CommandOutput> {
    let document: EnrollmentsDocument = load_json(&path)?;
    let stats = aggregate(&document.into_vec(), recent);
    CommandOutput::render(&stats, true)
}

fn handle_nav(role: &str) -> Result<CommandOutput> {
    let role: navigation::Role = role.parse().map_err(anyhow::Error::msg)?;
    CommandOutput::render(&navigation::links_for(role), true)
}
