use clap::Parser;
use loancore::application::engine::LoanEngine;
use loancore::domain::ports::{LoanStoreBox, PaymentStoreBox, RiskScorerBox};
use loancore::infrastructure::in_memory::{InMemoryLoanStore, InMemoryPaymentStore};
use loancore::infrastructure::mock_risk::MockRiskScorer;
#[cfg(feature = "storage-rocksdb")]
use loancore::infrastructure::rocksdb::RocksDBStore;
use loancore::interfaces::csv::application_reader::ApplicationReader;
use loancore::interfaces::csv::record_writer::RecordWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input loan applications CSV file
    input: PathBuf,

    /// Seed for the mock risk scorer. Fixing it makes runs reproducible.
    #[arg(long)]
    seed: Option<u64>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[cfg(feature = "storage-rocksdb")]
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let scorer: RiskScorerBox = match cli.seed {
        Some(seed) => Box::new(MockRiskScorer::with_seed(seed)),
        None => Box::new(MockRiskScorer::new()),
    };

    #[cfg(feature = "storage-rocksdb")]
    let (loan_store, payment_store): (LoanStoreBox, PaymentStoreBox) =
        if let Some(db_path) = cli.db_path {
            // Use persistent storage (RocksDB); one handle serves both ports.
            let store = RocksDBStore::open(db_path).into_diagnostic()?;
            (Box::new(store.clone()), Box::new(store))
        } else {
            (
                Box::new(InMemoryLoanStore::new()),
                Box::new(InMemoryPaymentStore::new()),
            )
        };

    #[cfg(not(feature = "storage-rocksdb"))]
    let (loan_store, payment_store): (LoanStoreBox, PaymentStoreBox) = (
        Box::new(InMemoryLoanStore::new()),
        Box::new(InMemoryPaymentStore::new()),
    );

    let engine = LoanEngine::new(loan_store, payment_store, scorer);

    // Process applications
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = ApplicationReader::new(file);
    for application_result in reader.applications() {
        match application_result {
            Ok(application) => {
                if let Err(e) = engine.process_application(application).await {
                    eprintln!("Error processing application: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading application: {}", e);
            }
        }
    }

    // Collect final state from engine
    let records = engine.into_results().await.into_diagnostic()?;

    // Output final state
    let stdout = io::stdout();
    let mut writer = RecordWriter::new(stdout.lock());
    writer.write_records(records).into_diagnostic()?;

    Ok(())
}
