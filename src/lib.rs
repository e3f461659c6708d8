//! Slidesmith: markdown-to-deck generator.
//!
//! Slidesmith turns a markdown document plus a presentation template into a
//! populated slide deck. A template is analyzed once into a layout catalog;
//! markdown is segmented into per-slide chunks; each chunk is planned and
//! designed into a final slide by an external text-understanding service,
//! with optional generated imagery; and the resulting presentation plan is
//! written into the template by exact placeholder-name matching.
//!
//! # Modules
//!
//! - [`model`]: catalog, intent, and plan types plus their JSON files
//! - [`document`]: logical template and deck documents
//! - [`pipeline`]: segmenting, planning, asset resolution, design
//! - [`populate`]: the placeholder population engine
//! - [`validate`]: plan-against-catalog validation
//! - [`services`]: external planning/design and image-generation clients
//! - [`error`]: error types for slidesmith operations

pub mod document;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod populate;
pub mod services;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::SlidesmithError;

/// The slidesmith CLI application.
#[derive(Parser)]
#[command(name = "slidesmith")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Analyze a template and write its layout catalog.
    Analyze(AnalyzeArgs),
    /// Turn markdown content into a presentation plan.
    Plan(PlanArgs),
    /// Populate a template from a presentation plan.
    Generate(GenerateArgs),
    /// Validate a presentation plan against a layout catalog.
    Validate(ValidateArgs),
}

/// Arguments for the analyze subcommand.
#[derive(clap::Args)]
struct AnalyzeArgs {
    /// Template document to analyze.
    #[arg(long)]
    template: PathBuf,

    /// Path for the layout catalog file.
    #[arg(long, default_value = "layouts.json")]
    output: PathBuf,
}

/// Arguments for the plan subcommand.
#[derive(clap::Args)]
struct PlanArgs {
    /// Markdown content to turn into slides.
    #[arg(long)]
    markdown: PathBuf,

    /// Layout catalog file produced by 'analyze'.
    #[arg(long)]
    catalog: PathBuf,

    /// Path for the presentation plan file.
    #[arg(long, default_value = "presentation.json")]
    output: PathBuf,

    /// Directory generated images are saved under.
    #[arg(long, default_value = "images")]
    images_dir: PathBuf,

    /// Skip image generation entirely.
    #[arg(long)]
    skip_images: bool,

    /// API key for the text-understanding service.
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model name for the text-understanding service.
    #[arg(long, env = "OPENROUTER_MODEL_NAME", default_value = "openai/gpt-4o-mini")]
    model: String,

    /// Base URL of the text-understanding service.
    #[arg(long, env = "OPENROUTER_BASE_URL", default_value = "https://openrouter.ai/api/v1")]
    base_url: String,

    /// Base URL of the image-generation server, if any.
    #[arg(long, env = "SD_FORGE_SERVER_URL")]
    image_server: Option<String>,

    /// Model name for the image-generation server.
    #[arg(long, env = "FLUX_MODEL_NAME", default_value = "black-forest-labs/FLUX.1-schnell")]
    image_model: String,
}

/// Arguments for the generate subcommand.
#[derive(clap::Args)]
struct GenerateArgs {
    /// Presentation plan file produced by 'plan'.
    #[arg(long)]
    plan: PathBuf,

    /// Template document to populate.
    #[arg(long)]
    template: PathBuf,

    /// Path for the generated deck file.
    #[arg(long, default_value = "deck.json")]
    output: PathBuf,

    /// Directory searched for image files after the literal path.
    #[arg(long, default_value = "images")]
    images_dir: PathBuf,

    /// Output format for the population report ('text' or 'json').
    #[arg(long, default_value = "text")]
    report: String,
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// Presentation plan file to validate.
    #[arg(long)]
    plan: PathBuf,

    /// Layout catalog file to validate against.
    #[arg(long)]
    catalog: PathBuf,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the slidesmith CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), SlidesmithError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze(args)) => run_analyze(args),
        Some(Commands::Plan(args)) => run_plan(args),
        Some(Commands::Generate(args)) => run_generate(args),
        Some(Commands::Validate(args)) => run_validate(args),
        None => {
            println!("slidesmith {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Markdown-to-deck generator.");
            println!();
            println!("Run 'slidesmith --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the analyze subcommand.
fn run_analyze(args: AnalyzeArgs) -> Result<(), SlidesmithError> {
    let template = document::io_json::read_template(&args.template)?;
    let catalog = model::LayoutCatalog::analyze(&template, args.template.display().to_string())?;

    model::io_json::write_catalog(&args.output, &catalog)?;
    println!(
        "Layout catalog with {} layout(s) saved to {}",
        catalog.layouts.len(),
        args.output.display()
    );
    Ok(())
}

/// Execute the plan subcommand.
fn run_plan(args: PlanArgs) -> Result<(), SlidesmithError> {
    let Some(api_key) = args.api_key else {
        return Err(SlidesmithError::MissingConfig(
            "an API key is required; pass --api-key or set OPENROUTER_API_KEY".to_string(),
        ));
    };

    let markdown = std::fs::read_to_string(&args.markdown)?;
    let catalog = model::io_json::read_catalog(&args.catalog)?;

    let planner = services::OpenRouterClient::new(args.base_url, api_key, args.model);
    let options = pipeline::PipelineOptions {
        images_dir: args.images_dir,
        generate_images: !args.skip_images && args.image_server.is_some(),
    };

    let (plan, report) = match &args.image_server {
        Some(server) => {
            let images = services::ForgeClient::new(server.clone(), Some(args.image_model));
            pipeline::run_pipeline(&planner, &images, &markdown, &catalog, &options)
        }
        None => {
            if !args.skip_images {
                log::warn!("no image server configured; image generation disabled");
            }
            let images = services::NullImageGenerator;
            pipeline::run_pipeline(&planner, &images, &markdown, &catalog, &options)
        }
    };

    model::io_json::write_plan(&args.output, &plan)?;
    println!(
        "Presentation plan with {} slide(s) saved to {}",
        plan.slides.len(),
        args.output.display()
    );
    if !report.is_clean() {
        print!("{report}");
    }
    Ok(())
}

/// Execute the generate subcommand.
fn run_generate(args: GenerateArgs) -> Result<(), SlidesmithError> {
    let plan = model::io_json::read_plan(&args.plan)?;
    let template = document::io_json::read_template(&args.template)?;

    let options = populate::PopulateOptions {
        images_dir: args.images_dir,
    };
    let (deck, report) = populate::populate(&plan, &template, &options);

    document::io_json::write_deck(&args.output, &deck)?;
    println!(
        "Deck with {} slide(s) saved to {}",
        deck.slides.len(),
        args.output.display()
    );

    match args.report.as_str() {
        "json" => {
            let rendered = serde_json::to_string_pretty(&report).map_err(|source| {
                SlidesmithError::JsonWrite {
                    path: args.output.clone(),
                    source,
                }
            })?;
            println!("{rendered}");
        }
        _ => print!("{report}"),
    }

    Ok(())
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), SlidesmithError> {
    let plan = model::io_json::read_plan(&args.plan)?;
    let catalog = model::io_json::read_catalog(&args.catalog)?;

    let opts = validate::ValidateOptions {
        strict: args.strict,
    };
    let report = validate::validate_plan(&plan, &catalog, &opts);

    match args.output.as_str() {
        "json" => {
            let rendered = serde_json::to_string_pretty(&report).map_err(|source| {
                SlidesmithError::JsonWrite {
                    path: args.plan.clone(),
                    source,
                }
            })?;
            println!("{rendered}");
        }
        _ => print!("{report}"),
    }

    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(SlidesmithError::PlanValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}
