//! feigngen CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::{Parser, ValueEnum};
use feigngen_core::{
    context::TemplateVariables, models::load_models, options::LIBRARY, Config, GenerationRun,
    Java2Generator, ModelDescriptor, RawOptions,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "feigngen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the options the generator recognizes
    Options,
    /// Process options and models and print the resulting generation run
    Process {
        /// Generator configuration file (YAML or TOML)
        ///
        /// Defaults to $FEIGNGEN_CONFIG, ./feigngen.yaml, or the user config directory
        #[arg(long)]
        config: Option<PathBuf>,
        /// Model list to annotate (YAML or JSON)
        #[arg(long)]
        models: Option<PathBuf>,
        /// Option override, e.g. --opt clientName=PetClient
        #[arg(long = "opt", value_name = "KEY=VALUE", value_parser = RawOptions::parse_pair)]
        opts: Vec<(String, String)>,
        /// Library template (sub-template) to use
        #[arg(short, long)]
        library: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// What `process` prints.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProcessReport {
    generator: &'static str,
    template_variables: TemplateVariables,
    #[serde(flatten)]
    run: GenerationRun,
    models: Vec<ModelDescriptor>,
    diagnostics: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Options => print_options(),
        Commands::Process {
            config,
            models,
            opts,
            library,
            format,
        } => process(config, models, opts, library, format).await?,
    }
    Ok(())
}

fn print_options() {
    let generator = Java2Generator::new(Config::default());
    println!("{} ({}): {}", generator.name(), generator.tag(), generator.help());
    println!();
    for option in generator.registry().register_options() {
        match option.default_value() {
            Some(default) => println!(
                "  {:<20} {} (default: {})",
                option.name, option.description, default
            ),
            None => println!("  {:<20} {}", option.name, option.description),
        }
        if let feigngen_core::options::OptionKind::Enum { values, .. } = &option.kind {
            for (value, description) in values {
                println!("  {:<20}   {}: {}", "", value, description);
            }
        }
    }
}

async fn process(
    config_path: Option<PathBuf>,
    models_path: Option<PathBuf>,
    opts: Vec<(String, String)>,
    library: Option<String>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let config = match config_path.or_else(Config::discover) {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            Config::from_file(&path)
                .await
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    let mut overrides: RawOptions = opts.into_iter().collect();
    if let Some(library) = library {
        overrides.insert(LIBRARY, library);
    }

    let generator = Java2Generator::new(config);
    let run = generator
        .process_opts(&overrides)
        .context("Failed to process generator options")?;

    let models = match models_path {
        Some(path) => load_models(&path)
            .await
            .with_context(|| format!("Failed to load models from {}", path.display()))?,
        None => Vec::new(),
    };
    let models = generator.post_process_models(models, &run.context);
    tracing::info!("Annotated {} model(s)", models.len());

    let report = ProcessReport {
        generator: generator.name(),
        template_variables: run.context.template_variables(),
        diagnostics: run
            .context
            .diagnostics()
            .iter()
            .map(ToString::to_string)
            .collect(),
        run,
        models,
    };

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Yaml => serde_yaml::to_string(&report)?,
    };
    println!("{}", rendered);
    Ok(())
}
