use clap::{CommandFactory, Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{
    estimate::EstimateArgs, estimate_segments::EstimateSegmentsArgs, generate::GenerateSubcommands,
    route::RouteArgs,
};

mod estimate;
mod estimate_segments;
mod file_utils;
mod generate;
mod parsers;
mod route;
mod table;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate saved CO₂ for one request file or a folder of them
    Estimate {
        #[command(flatten)]
        args: EstimateArgs,
    },
    /// Estimate saved CO₂ for route alternatives given on the command line
    EstimateSegments {
        #[command(flatten)]
        args: EstimateSegmentsArgs,
    },
    /// Fetch route alternatives from a provider and estimate saved CO₂
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Estimate { args }) => estimate::run(args)?,
        Some(Commands::EstimateSegments { args }) => estimate_segments::run(args)?,
        Some(Commands::Route { args }) => route::run(args).await?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => Cli::command().print_help()?,
    }

    Ok(())
}
