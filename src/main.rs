use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;

mod aws;
mod commands;
mod display;
mod error;
mod logging;
mod naming;
mod templates;
mod types;
mod validation;

use commands::deploy::{deploy, DeployArgs};

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "warehouse-deploy")]
#[command(about = "Submit a CloudFormation change set for the NCCID data-warehouse stack")]
#[command(
    long_about = "warehouse-deploy reads the warehouse stack template, fills in the bucket name and allowed upload CIDR parameters, and submits a change set, creating or updating the stack as needed.\n\nThe change set is only submitted. Review and execute it from the CloudFormation console or CLI."
)]
#[command(version)]
struct Cli {
    #[arg(
        short = 's',
        long,
        help = "Suffix to use for stack and bucket names (e.g. dev)"
    )]
    suffix: Option<String>,

    #[arg(
        short = 'a',
        long = "allowed-cidr",
        help = "Allowed CIDR block for 'raw/' uploads, can specify multiple times"
    )]
    allowed_cidr: Vec<String>,

    #[arg(long, help = "AWS region (default: eu-west-2)")]
    region: Option<String>,

    #[arg(
        long = "templates-dir",
        default_value = "templates",
        help = "Directory containing the stack templates"
    )]
    templates_dir: PathBuf,

    #[arg(
        short = 'o',
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format: text or json"
    )]
    format: OutputFormat,
}

#[tokio::main]
async fn main() {
    logging::init_logging();

    let cli = Cli::parse();

    let args = DeployArgs {
        suffix: cli.suffix,
        allowed_cidr: cli.allowed_cidr,
        region: cli.region,
        templates_dir: cli.templates_dir,
    };

    if let Err(e) = deploy(args, &cli.format).await {
        tracing::error!("{}", e);
        process::exit(1);
    }
}
