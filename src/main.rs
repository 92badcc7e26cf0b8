use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxdash::core::indicators::Indicator;
use fxdash::core::log::init_logging;
use fxdash::core::series::Timeframe;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxdash::AppCommand {
    fn from(cmd: Commands) -> fxdash::AppCommand {
        match cmd {
            Commands::Dashboard { pair, timeframe } => {
                fxdash::AppCommand::Dashboard { pair, timeframe }
            }
            Commands::Pairs { pair } => fxdash::AppCommand::Pairs { pair },
            Commands::Chart { pair, timeframe } => fxdash::AppCommand::Chart { pair, timeframe },
            Commands::Volume => fxdash::AppCommand::Volume,
            Commands::Heatmap => fxdash::AppCommand::Heatmap,
            Commands::Convert {
                amount,
                from,
                to,
                swap,
            } => fxdash::AppCommand::Convert {
                amount,
                from,
                to,
                swap,
            },
            Commands::Indicators { indicators } => fxdash::AppCommand::Indicators { indicators },
            Commands::Watch {
                interval,
                pair,
                timeframe,
            } => fxdash::AppCommand::Watch {
                interval_secs: interval,
                pair,
                timeframe,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display every dashboard panel
    Dashboard {
        /// Selected pair, e.g. EUR/USD
        #[arg(short, long)]
        pair: Option<String>,
        /// Chart timeframe: 1D, 1W, 1M, 3M or 1Y
        #[arg(short, long)]
        timeframe: Option<Timeframe>,
    },
    /// Display market summary and major pairs
    Pairs {
        /// Pair to highlight
        #[arg(short, long)]
        pair: Option<String>,
    },
    /// Display the exchange rate chart
    Chart {
        #[arg(short, long)]
        pair: Option<String>,
        /// Chart timeframe: 1D, 1W, 1M, 3M or 1Y
        #[arg(short, long)]
        timeframe: Option<Timeframe>,
    },
    /// Display trading volume by pair
    Volume,
    /// Display the market heatmap
    Heatmap,
    /// Convert an amount between two currencies
    Convert {
        amount: f64,
        /// Source currency code
        #[arg(short, long)]
        from: Option<String>,
        /// Target currency code
        #[arg(short, long)]
        to: Option<String>,
        /// Swap source and target currencies
        #[arg(short, long)]
        swap: bool,
    },
    /// Display technical indicators
    Indicators {
        /// Indicator to show (ema, rsi, macd); repeat for several
        #[arg(short, long = "indicator")]
        indicators: Vec<Indicator>,
    },
    /// Redraw the dashboard until Ctrl-C
    Watch {
        /// Refresh interval in seconds
        #[arg(short, long, default_value_t = 5)]
        interval: u64,
        #[arg(short, long)]
        pair: Option<String>,
        #[arg(short, long)]
        timeframe: Option<Timeframe>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => fxdash::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> Result<()> {
    let path = fxdash::cli::setup::setup()?;
    println!("Created configuration at {}", path.display());
    Ok(())
}
