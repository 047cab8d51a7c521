//! CLI argument definitions for the portfolio gallery tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use folio_cli::step::CarouselStep;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Portfolio gallery - browse projects and check contact messages",
    long_about = "Browse the portfolio project catalog the way the site shows it.\n\n\
                  Filters by category and search text, steps through a project's\n\
                  image carousel, and validates contact form submissions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include contact form values in logs (names, email addresses).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the projects visible for a category and search text.
    Projects(ProjectsArgs),

    /// List the filter categories and what each one matches.
    Categories(CategoriesArgs),

    /// Open a project's image carousel and step through it.
    Show(ShowArgs),

    /// Validate a contact message and send it.
    Contact(ContactArgs),
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Project catalog JSON file (default: built-in catalog).
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct CategoriesArgs {
    /// Category table JSON file (default: built-in categories).
    #[arg(long = "categories", value_name = "FILE")]
    pub categories: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ProjectsArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub categories: CategoriesArgs,

    /// Page whose category buttons and default category to use.
    #[arg(long = "page", value_enum, default_value = "projects")]
    pub page: PageArg,

    /// Category to select (default: the page's default category).
    #[arg(long = "category", value_name = "TOKEN")]
    pub category: Option<String>,

    /// Search text, matched case-insensitively against titles,
    /// descriptions and technologies.
    #[arg(long = "search", value_name = "TEXT", default_value = "")]
    pub search: String,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Id of the project to open.
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Navigation to apply after opening: next, prev or an image index.
    /// May be repeated.
    #[arg(long = "step", value_name = "STEP")]
    pub steps: Vec<CarouselStep>,
}

#[derive(Parser)]
pub struct ContactArgs {
    #[arg(long = "name", default_value = "")]
    pub name: String,

    #[arg(long = "email", default_value = "")]
    pub email: String,

    #[arg(long = "subject", default_value = "")]
    pub subject: String,

    #[arg(long = "message", default_value = "")]
    pub message: String,

    /// Simulated delivery time in milliseconds.
    #[arg(long = "delay-ms", value_name = "MS", default_value_t = 1500)]
    pub delay_ms: u64,
}

/// Pages that list projects.
#[derive(Clone, Copy, ValueEnum)]
pub enum PageArg {
    Home,
    Projects,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
