//! Command line configuration.

use crate::domain::amount::Amount;
use crate::domain::payment_mode::PaymentMode;
use crate::domain::ports::PaymentStrategyBox;
use crate::infrastructure::strategies::{default_strategies, strategies_for};
use crate::interfaces::csv::receipt_writer::ReceiptFormat;
use crate::observability::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dispatch payments to the strategy registered for their mode.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Comma separated payment modes to register strategies for. Defaults to all modes.
    #[arg(long, global = true, value_delimiter = ',')]
    pub modes: Vec<PaymentMode>,

    /// Log output format. Falls back to the LOG_FORMAT environment variable.
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dispatch a single payment and print its confirmation.
    Pay {
        mode: PaymentMode,
        #[arg(allow_negative_numbers = true)]
        amount: Amount,
    },
    /// Dispatch every payment in a CSV file with a `mode,amount` header.
    Batch {
        input: PathBuf,

        /// Receipt output format.
        #[arg(long, value_enum, default_value_t = ReceiptFormat::Csv)]
        format: ReceiptFormat,

        /// Exit with an error if any payment in the batch fails.
        #[arg(long)]
        strict: bool,
    },
    /// List the modes that have a registered strategy.
    Modes,
}

impl Cli {
    /// The strategies selected by `--modes`, in the order given.
    pub fn strategies(&self) -> Vec<PaymentStrategyBox> {
        if self.modes.is_empty() {
            default_strategies()
        } else {
            strategies_for(self.modes.iter().copied())
        }
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format.unwrap_or_else(LogFormat::from_env)
    }
}
