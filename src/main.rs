use clap::Parser;
use ledger::application::accounts_service::AccountsService;
use ledger::domain::ports::{AccountStoreBox, NotifierBox};
use ledger::infrastructure::in_memory::InMemoryAccountStore;
use ledger::infrastructure::notifier::LoggingNotifier;
use ledger::interfaces::csv::account_reader::AccountReader;
use ledger::interfaces::csv::account_writer::AccountWriter;
use ledger::interfaces::csv::transfer_reader::TransferReader;
use ledger::logging;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Opening accounts CSV file (account_id,balance)
    accounts: PathBuf,

    /// Transfers CSV file (account_from_id,account_to_id,amount), applied in order
    transfers: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.log_json);

    let store: AccountStoreBox = Box::new(InMemoryAccountStore::new());
    let notifier: NotifierBox = Box::new(LoggingNotifier::new());
    let service = AccountsService::new(store, notifier);

    let file = File::open(&cli.accounts).into_diagnostic()?;
    for account in AccountReader::new(file).accounts() {
        match account {
            Ok(account) => {
                if let Err(e) = service.create_account(account).await {
                    eprintln!("Error creating account: {}", e);
                }
            }
            Err(e) => eprintln!("Error reading account: {}", e),
        }
    }

    if let Some(path) = cli.transfers {
        let file = File::open(path).into_diagnostic()?;
        for request in TransferReader::new(file).transfers() {
            match request {
                Ok(request) => {
                    if let Err(e) = service.transfer_funds(request).await {
                        eprintln!("Error processing transfer: {}", e);
                    }
                }
                Err(e) => eprintln!("Error reading transfer: {}", e),
            }
        }
    }

    let accounts = service.accounts().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(accounts).into_diagnostic()?;

    Ok(())
}
