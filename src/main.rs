use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_pricing::application::context::PricingContext;
use payment_pricing::domain::ports::FeeScheduleProviderBox;
use payment_pricing::infrastructure::in_memory::InMemoryFeeScheduleProvider;
use payment_pricing::infrastructure::json_catalog::load_catalog;
use payment_pricing::infrastructure::sample_catalog::sample_catalog;
use payment_pricing::interfaces::csv::quote_writer::PriceQuoteWriter;
use payment_pricing::interfaces::csv::request_reader::PaymentRequestReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests CSV file
    input: PathBuf,

    /// JSON fee schedule catalog (optional). Uses the built-in sample catalog otherwise.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = match cli.catalog {
        Some(path) => load_catalog(path).into_diagnostic()?,
        None => {
            tracing::debug!("no catalog given, using the sample fee schedules");
            sample_catalog()
        }
    };
    let provider: FeeScheduleProviderBox =
        Box::new(InMemoryFeeScheduleProvider::from_catalog(catalog));
    let context = PricingContext::with_default_strategies(provider);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = PaymentRequestReader::new(file);

    let stdout = io::stdout();
    let mut writer = PriceQuoteWriter::new(stdout.lock());

    let (mut priced, mut failed) = (0usize, 0usize);
    for request_result in reader.requests() {
        match request_result {
            Ok(request) => match context.calculate_price(&request).await {
                Ok(final_price) => {
                    writer.write_quote(&request, final_price).into_diagnostic()?;
                    priced += 1;
                }
                Err(e) => {
                    eprintln!("Error calculating price: {}", e);
                    failed += 1;
                }
            },
            Err(e) => {
                eprintln!("Error reading payment request: {}", e);
                failed += 1;
            }
        }
    }
    writer.flush().into_diagnostic()?;

    tracing::info!(priced, failed, "pricing run finished");
    Ok(())
}
