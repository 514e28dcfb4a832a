//! crumbtrail CLI
//!
//! Generates and renders breadcrumb trails from declarative definition files.
//! Definitions are loaded from TOML or JSON files and resolved exactly as a
//! web application would resolve them at request time.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crumbtrail_core::{
    format_trail, load_into, BreadcrumbManager, FormatRenderer, OutputFormat, StaticContext,
};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// CLI for breadcrumb trail generation
#[derive(Parser)]
#[command(name = "crumbtrail")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate and render breadcrumb trails from declarative definitions")]
#[command(long_about = r#"
crumbtrail: Breadcrumb Trail Generation

Loads breadcrumb definitions from one or more TOML or JSON files, resolves a
named breadcrumb through its parent chain, and prints the resulting trail.

Definition files:
  - TOML: a [[breadcrumb]] array of tables
  - JSON: an array of definition objects

Output formats:
  - JSON - Structured array of crumb objects for programmatic use
  - YAML - Human-readable YAML format
  - ANSI - Colored terminal output
  - Text - Titles joined with " > "

Examples:
  crumbtrail -f breadcrumbs.toml generate blog
  crumbtrail -f breadcrumbs.toml generate post --param '"42"'
  crumbtrail -f breadcrumbs.toml render blog --template text
  crumbtrail -f breadcrumbs.toml list
  crumbtrail -f breadcrumbs.toml check shop
"#)]
pub struct Args {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Definition file (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Append, global = true)]
    pub file: Vec<PathBuf>,

    /// Output format (default: ansi on a terminal, json otherwise)
    #[arg(short = 'F', long, value_enum, global = true)]
    pub format: Option<OutputFormatArg>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Route name used when a command omits the breadcrumb name
    #[arg(long, global = true)]
    pub route: Option<String>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the trail for a breadcrumb name
    Generate {
        /// Breadcrumb name (default: the --route name)
        name: Option<String>,

        /// Positional parameter, parsed as JSON with plain-string fallback
        /// (can be specified multiple times)
        #[arg(short, long, action = clap::ArgAction::Append)]
        param: Vec<String>,
    },

    /// Generate and render the trail through the configured renderer
    Render {
        /// Breadcrumb name (default: the --route name)
        name: Option<String>,

        /// Template id (default: the output format name)
        #[arg(short, long)]
        template: Option<String>,

        /// Positional parameter (can be specified multiple times)
        #[arg(short, long, action = clap::ArgAction::Append)]
        param: Vec<String>,
    },

    /// List registered breadcrumb names
    List,

    /// Check whether a breadcrumb name is registered (exit code 1 if not)
    Check {
        /// Breadcrumb name
        name: String,
    },
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Ansi,
    Text,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Ansi => OutputFormat::Ansi,
            OutputFormatArg::Text => OutputFormat::Text,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut manager = build_manager(&args)?;

    match &args.command {
        Commands::Generate { name, param } => run_generate(&mut manager, name, param, &args),
        Commands::Render {
            name,
            template,
            param,
        } => run_render(&mut manager, name, template, param, &args),
        Commands::List => run_list(&manager, &args),
        Commands::Check { name } => run_check(&manager, name),
    }
}

/// Build a manager from the definition files and global flags
fn build_manager(args: &Args) -> Result<BreadcrumbManager> {
    let mut manager = BreadcrumbManager::new().with_renderer(FormatRenderer);

    if let Some(route) = &args.route {
        manager = manager.with_context(StaticContext::new(route));
    }

    for file in &args.file {
        load_into(file, &mut manager)
            .with_context(|| format!("Failed to load definitions from {}", file.display()))?;
    }

    Ok(manager)
}

/// Resolve the output format, defaulting by terminal detection
fn resolve_format(args: &Args) -> OutputFormat {
    match args.format {
        Some(format) => format.into(),
        None if atty::is(atty::Stream::Stdout) => OutputFormat::Ansi,
        None => OutputFormat::Json,
    }
}

/// Parse CLI parameters: JSON values, plain strings as fallback
fn parse_params(raw: &[String]) -> Vec<Value> {
    raw.iter()
        .map(|param| {
            serde_json::from_str(param).unwrap_or_else(|_| Value::String(param.clone()))
        })
        .collect()
}

fn run_generate(
    manager: &mut BreadcrumbManager,
    name: &Option<String>,
    param: &[String],
    args: &Args,
) -> Result<()> {
    let params = parse_params(param);

    let trail = manager
        .generate(name.as_deref(), &params)
        .context("Failed to generate breadcrumb trail")?;

    let output = format_trail(&trail, resolve_format(args))?;
    write_output(&output, args.output.as_ref())
}

fn run_render(
    manager: &mut BreadcrumbManager,
    name: &Option<String>,
    template: &Option<String>,
    param: &[String],
    args: &Args,
) -> Result<()> {
    let params = parse_params(param);
    let template = template
        .clone()
        .unwrap_or_else(|| resolve_format(args).name().to_string());

    let output = manager
        .view(&template, name.as_deref(), &params)
        .context("Failed to render breadcrumb trail")?;

    write_output(&output, args.output.as_ref())
}

fn run_list(manager: &BreadcrumbManager, args: &Args) -> Result<()> {
    let output = manager.names().join("\n");
    write_output(&output, args.output.as_ref())
}

fn run_check(manager: &BreadcrumbManager, name: &str) -> Result<()> {
    if manager.exists(Some(name)) {
        println!("breadcrumb `{name}` is registered");
        Ok(())
    } else {
        eprintln!("breadcrumb `{name}` is not registered");
        std::process::exit(1);
    }
}

fn write_output(output: &str, path: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, output).context("Failed to write output file")?;
    } else {
        println!("{}", output);
    }
    Ok(())
}
