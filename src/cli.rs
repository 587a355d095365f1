use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "a11y-guard")]
#[command(author, version, about = "Static WCAG accessibility audit for UI component files")]
#[command(long_about = "Audits component source files against a fixed catalog of WCAG rules \
    without executing or rendering them.\n\n\
    Exit codes:\n  \
    0 - Audit completed, conformity at or above threshold\n  \
    1 - Overall conformity below the configured minimum\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit components against the WCAG rule catalog
    Audit(AuditArgs),

    /// Print the rule catalog
    Rules(RulesArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct AuditArgs {
    /// Root directory of component files to audit
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rules to evaluate (comma-separated ids or slugs, e.g. 1.1.1,keyboard)
    #[arg(long, value_delimiter = ',')]
    pub rules: Option<Vec<String>>,

    /// Minimum overall conformity percent (0-100); below it, exit code is 1
    #[arg(long)]
    pub min_conformity: Option<f64>,

    /// Component types to audit (comma-separated: page, layout, item, generic)
    #[arg(long, value_delimiter = ',')]
    pub component_types: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write an SVG conformity badge to this path
    #[arg(long)]
    pub badge: Option<PathBuf>,

    /// Report violations but never exit non-zero
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Show full rule descriptions
    #[arg(long)]
    pub long: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".a11y-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
