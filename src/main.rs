use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_strategy::application::executor::PaymentExecutor;
use payment_strategy::config::{Cli, Command};
use payment_strategy::interfaces::csv::payment_reader::PaymentReader;
use payment_strategy::interfaces::csv::receipt_writer::ReceiptWriter;
use payment_strategy::observability::init_logging;
use std::fs::File;
use std::io;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format());

    let executor = PaymentExecutor::new(cli.strategies());
    info!(modes = ?executor.registered_modes(), "payment executor ready");

    match &cli.command {
        Command::Pay { mode, amount } => {
            let confirmation = executor.process_payment(*mode, *amount).into_diagnostic()?;
            println!("{confirmation}");
        }
        Command::Modes => {
            for mode in executor.registered_modes() {
                println!("{mode}");
            }
        }
        Command::Batch {
            input,
            format,
            strict,
        } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = PaymentReader::new(file);

            let stdout = io::stdout();
            let mut writer = ReceiptWriter::new(stdout.lock(), *format);

            let mut failures = 0usize;
            for request in reader.requests() {
                match request.and_then(|request| executor.process_request(&request)) {
                    Ok(receipt) => writer.write(&receipt).into_diagnostic()?,
                    Err(e) => {
                        failures += 1;
                        eprintln!("Error processing payment: {}", e);
                    }
                }
            }
            writer.flush().into_diagnostic()?;

            info!(failures, "batch complete");
            if *strict && failures > 0 {
                return Err(miette::miette!("{} payment(s) failed", failures));
            }
        }
    }

    Ok(())
}
