use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use stack_version::config::{self, Config};
use stack_version::version::registries::TagFileRegistry;
use stack_version::{Image, best_semver_match, logging, resolve_image_version, sorted_valid_versions};

#[derive(Parser)]
#[command(name = "stack-version")]
#[command(version, about = "Resolve container image versions from semver ranges and registry tags")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also write logs to the default log file in the data directory
    #[arg(long, global = true)]
    log_to_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the valid versions among TAGS, newest first
    Sort { tags: Vec<String> },

    /// Print the best match for RANGE (e.g. ~1.2.0 or ^1.0.0) among TAGS
    Match {
        range: String,
        tags: Vec<String>,
    },

    /// Resolve an image reference such as registry/app:${APP_VERSION}
    Resolve {
        image: String,

        /// Service environment entry, KEY=VALUE (repeatable)
        #[arg(long = "env", value_parser = parse_env_entry)]
        env: Vec<(String, String)>,

        /// JSON file mapping image names to tags (overrides the config)
        #[arg(long)]
        tags_file: Option<PathBuf>,
    },
}

fn parse_env_entry(entry: &str) -> Result<(String, String), String> {
    entry
        .split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.trim_matches('"').to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{entry}'"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    if cli.log_to_file && config.log.file.is_none() {
        config.log.file = Some(config::log_path());
    }
    let _guard = logging::init(&config.log)?;

    match cli.command {
        Command::Sort { tags } => {
            for version in sorted_valid_versions(&tags) {
                println!("{version}");
            }
        }
        Command::Match { range, tags } => {
            let sorted = sorted_valid_versions(&tags);
            println!("{}", best_semver_match(&sorted, &range)?);
        }
        Command::Resolve {
            image,
            env,
            tags_file,
        } => {
            let Some(tags_file) = tags_file.or(config.registry.tags_file) else {
                bail!("no tags file given; pass --tags-file or set registry.tagsFile");
            };
            let registry = TagFileRegistry::from_path(&tags_file)
                .with_context(|| format!("loading tags from {}", tags_file.display()))?;
            let environment: HashMap<String, String> = env.into_iter().collect();
            let mut image = Image::parse(&image)?;

            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(resolve_image_version(&mut image, &environment, &registry))?;

            println!("{}", serde_json::to_string_pretty(&image)?);
        }
    }

    Ok(())
}
