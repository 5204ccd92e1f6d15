//! brain-features CLI - inspect feature-tag permissions and accessor names.

use anyhow::{Context, Result, bail};
use brain_features::{FeatureSurface, FeaturesConfig, create_registry, naming};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "brain-features", version, about = "Feature-tag permission tools")]
struct Cli {
    /// Project root used to find .brain/features.toml
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Read this config file instead of the global/project layering
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether a tag's capability is enabled
    Check {
        tag: String,
        /// Evaluate as a guest
        #[arg(long)]
        guest: bool,
    },
    /// Evaluate a synthesized accessor by name (e.g. hasGenUI)
    Call {
        accessor: String,
        #[arg(long)]
        guest: bool,
    },
    /// List accessors for the effective catalog
    Accessors {
        #[arg(long)]
        json: bool,
    },
    /// Print the effective disabled-tag list
    Tags {
        #[arg(long)]
        json: bool,
    },
    /// Convert a tag identifier to an accessor name
    Name {
        identifier: String,
        #[arg(long, default_value = naming::DEFAULT_VERB)]
        verb: String,
        /// Prefix to strip before converting
        #[arg(long)]
        strip: Option<String>,
        /// Print only the PascalCase form
        #[arg(long)]
        pascal: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Name {
            identifier,
            verb,
            strip,
            pascal,
        } => {
            let strip = strip.as_deref();
            if pascal {
                println!("{}", naming::to_pascal(&identifier, strip));
            } else {
                println!("{}", naming::to_accessor_name(&identifier, &verb, strip));
            }
        }
        Command::Check { tag, guest } => {
            let surface = load_surface(&cli.root, cli.config.as_deref())?;
            println!("{}", status(surface.is_enabled(&tag, guest)));
        }
        Command::Call { accessor, guest } => {
            let surface = load_surface(&cli.root, cli.config.as_deref())?;
            match surface.call(&accessor, guest) {
                Some(enabled) => println!("{}", status(enabled)),
                None => bail!("unknown accessor {accessor:?}"),
            }
        }
        Command::Accessors { json } => {
            let surface = load_surface(&cli.root, cli.config.as_deref())?;
            if json {
                let entries: Vec<_> = surface
                    .accessors()
                    .map(|a| serde_json::json!({ "name": a.name, "tag": a.tag }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for a in surface.accessors() {
                    println!("{} -> {}", a.name, a.tag);
                }
            }
        }
        Command::Tags { json } => {
            let surface = load_surface(&cli.root, cli.config.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(surface.tags())?);
            } else {
                for tag in surface.get_tags() {
                    println!("{tag}");
                }
            }
        }
    }

    Ok(())
}

fn load_surface(root: &std::path::Path, config: Option<&std::path::Path>) -> Result<FeatureSurface> {
    let config = match config {
        Some(path) => FeaturesConfig::load_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => FeaturesConfig::load(root),
    };
    Ok(create_registry(config.surface_options()))
}

fn status(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}
