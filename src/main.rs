use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tomato_clock::OutputFormat;
use tomato_clock::commands;
use tomato_clock::config;
use tomato_clock::logging;
use tomato_clock::time::Precision;

#[derive(Parser)]
#[command(name = "tomato")]
#[command(about = "Duration literals and h:m:s formatting for the tomato interval timer")]
#[command(version)]
struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a duration literal such as 1h30m20s
    Parse {
        #[arg(help = "Duration literal (units: h, m, s)")]
        literal: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Format a number of seconds as colon-separated fields
    Format {
        #[arg(help = "Duration in seconds")]
        seconds: u32,
        #[arg(long, value_enum, help = "Most significant unit (defaults to config)")]
        upper: Option<Precision>,
        #[arg(long, value_enum, help = "Least significant unit (defaults to config)")]
        lower: Option<Precision>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Parse a literal and print it in the units it was written with
    Convert {
        #[arg(help = "Duration literal (units: h, m, s)")]
        literal: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get {
        key: String,
    },
    /// Write a default config file
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = config::config_path()?;
    let config_found = config_path.exists();
    let loaded = if config_found {
        config::load_from_path(&config_path)
    } else {
        Ok(config::Config::default())
    };
    let config = match (loaded, &cli.command) {
        (Ok(config), _) => config,
        // A broken file must not block rewriting it
        (Err(_), Commands::Config(ConfigArgs {
            action: ConfigAction::Init { force: true },
        })) => config::Config::default(),
        (Err(e), _) => return Err(e),
    };

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        config.log.level()?
    };
    logging::init(level);

    if !config_found {
        tracing::info!(
            "No config found at {}, using defaults. Run 'tomato config init' to create one",
            config_path.display()
        );
    }

    match &cli.command {
        Commands::Parse { literal, format } => {
            commands::time::parse(literal, *format)?;
        }
        Commands::Format {
            seconds,
            upper,
            lower,
            format,
        } => {
            commands::time::format(&config, *seconds, *upper, *lower, *format)?;
        }
        Commands::Convert { literal, format } => {
            commands::time::convert(literal, *format)?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
            ConfigAction::Init { force } => commands::config::init(*force)?,
        },
    }

    Ok(())
}
