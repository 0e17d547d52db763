pub mod commands;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "haulbot",
    about = "Haulbot freight quote engine CLI",
    long_about = "Classify chatbot messages, price shipments, persist quotes, and run migrations.",
    after_help = "Examples:\n  haulbot classify --text \"what does a 14ft cost?\"\n  haulbot estimate --origin Nigha --destination Varanasi --weight-kg 1200\n  haulbot quote --origin Nigha --destination Varanasi --weight-kg 1200 --user-id web:alice"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Classify free text into an intent (quote/track/booking/faq/handoff/fallback)")]
    Classify {
        #[arg(long, help = "Message text to classify")]
        text: String,
    },
    #[command(about = "Price a shipment without persisting anything")]
    Estimate(EstimateArgs),
    #[command(about = "Price a shipment and append the quote to the ledger")]
    Quote(QuoteArgs),
    #[command(about = "Run one chatbot turn: classify and return the acknowledgement reply")]
    Chat(ChatArgs),
    #[command(about = "Apply pending database migrations")]
    Migrate,
    #[command(about = "Inspect the effective configuration (tiers, distances, constants)")]
    Config,
}

#[derive(Debug, Args)]
pub struct EstimateArgs {
    #[arg(long)]
    pub origin: String,
    #[arg(long)]
    pub destination: String,
    #[arg(long)]
    pub weight_kg: f64,
    #[arg(long, default_value = "14ft", help = "pickup/14ft/17ft/22ft; unknown values price as 14ft")]
    pub vehicle: String,
    #[arg(long, help = "Explicit distance override in km")]
    pub distance_km: Option<f64>,
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub estimate: EstimateArgs,
    #[arg(long, help = "Opaque user identifier from the originating channel")]
    pub user_id: String,
}

#[derive(Debug, Args)]
pub struct ChatArgs {
    #[arg(long)]
    pub user_id: String,
    #[arg(long)]
    pub text: String,
    #[arg(long, default_value = "web", help = "web or whatsapp")]
    pub channel: String,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Classify { text } => commands::classify::run(&text),
        Command::Estimate(args) => commands::estimate::run(&args),
        Command::Quote(args) => commands::quote::run(&args),
        Command::Chat(args) => commands::chat::run(&args),
        Command::Migrate => commands::migrate::run(),
        Command::Config => commands::config::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
