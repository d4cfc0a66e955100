//! Command-line interface for gpuname

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use gpuname::{GpuNameResolver, ReplayRunner, Resolution, ResolverConfig};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gpuname")]
#[command(version = gpuname::VERSION)]
#[command(about = "Report the graphics adapter name from system_profiler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output verbosity
    #[arg(short, long, value_enum, default_value_t = Verbosity::Normal, global = true)]
    verbosity: Verbosity,

    /// Profiler executable to run
    #[arg(long, env = "GPUNAME_PROGRAM", global = true)]
    program: Option<String>,

    /// JSON resolver configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the selected GPU name (default)
    Name,

    /// List every adapter the profiler reports
    Adapters {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Parse a saved profiler report instead of running the profiler
    Parse {
        /// Report file captured from `system_profiler SPDisplaysDataType`
        #[arg(short, long)]
        from: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Verbosity {
    Minimal,
    Normal,
    Detailed,
    Debug,
}

impl From<Verbosity> for LevelFilter {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Minimal => LevelFilter::Error,
            Verbosity::Normal => LevelFilter::Warn,
            Verbosity::Detailed => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbosity.into())
        .parse_default_env()
        .init();

    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Commands::Name) {
        Commands::Name => {
            let name = GpuNameResolver::with_config(config).resolve();
            if name.is_empty() {
                eprintln!("Error: could not determine the GPU name");
                std::process::exit(1);
            }
            println!("{}", name);
        }

        Commands::Adapters { format } => {
            let resolution = GpuNameResolver::with_config(config)
                .try_resolve()
                .context("failed to query the system profiler")?;
            print_resolution(&resolution, format)?;
        }

        Commands::Parse { from, format } => {
            let runner = ReplayRunner::from_file(&from)
                .with_context(|| format!("failed to read report {}", from.display()))?;
            let resolution = GpuNameResolver::with_config(config)
                .with_runner(runner)
                .try_resolve()
                .with_context(|| format!("failed to parse report {}", from.display()))?;
            print_resolution(&resolution, format)?;
        }

        Commands::Version => {
            println!("gpuname v{}", gpuname::version());
            println!("Library for graphics adapter name resolution");
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<ResolverConfig> {
    let mut config = match &cli.config {
        Some(path) => ResolverConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ResolverConfig::default(),
    };

    if let Some(program) = &cli.program {
        config.program = program.clone();
    }

    Ok(config)
}

fn print_resolution(resolution: &Resolution, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("GPU: {}", resolution.name);
            println!("Adapters: {}", resolution.adapters.len());
            for adapter in &resolution.adapters {
                let bus = if adapter.bus.is_empty() { "unknown bus" } else { adapter.bus.as_str() };
                println!("  • {} ({})", adapter.name, bus);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(resolution)?);
        }
    }
    Ok(())
}
