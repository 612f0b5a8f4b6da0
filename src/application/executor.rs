use crate::domain::amount::Amount;
use crate::domain::payment::{PaymentRequest, Receipt};
use crate::domain::payment_mode::PaymentMode;
use crate::domain::ports::PaymentStrategyBox;
use crate::error::{PaymentError, Result};
use crate::infrastructure::strategies::default_strategies;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Routes payments to the strategy registered for their mode.
///
/// The mode-to-strategy table is built once in [`PaymentExecutor::new`] and is
/// never mutated afterwards, so a shared `PaymentExecutor` (for example behind
/// an `Arc`) can be read from any number of threads without locking.
#[derive(Debug)]
pub struct PaymentExecutor {
    strategies: HashMap<PaymentMode, PaymentStrategyBox>,
}

impl PaymentExecutor {
    /// Creates a new `PaymentExecutor` from the given strategies.
    ///
    /// Each strategy is keyed by the mode it returns from `register()`. When two
    /// strategies register the same mode, the one that comes later wins.
    ///
    /// # Arguments
    ///
    /// * `strategies` - The strategies to route to. May be empty.
    pub fn new(strategies: impl IntoIterator<Item = PaymentStrategyBox>) -> Self {
        let mut table = HashMap::new();
        for strategy in strategies {
            let mode = strategy.register();
            debug!(%mode, ?strategy, "registering payment strategy");
            if let Some(previous) = table.insert(mode, strategy) {
                warn!(%mode, ?previous, "payment strategy replaced by a later registration");
            }
        }

        Self { strategies: table }
    }

    /// Creates a `PaymentExecutor` with a strategy for every known mode.
    pub fn with_default_strategies() -> Self {
        Self::new(default_strategies())
    }

    /// Dispatches a payment to the strategy registered for `mode`.
    ///
    /// Returns the strategy's confirmation unchanged, or
    /// [`PaymentError::UnsupportedMode`] when no strategy handles `mode`.
    pub fn process_payment(&self, mode: PaymentMode, amount: Amount) -> Result<String> {
        let Some(strategy) = self.strategies.get(&mode) else {
            warn!(%mode, %amount, "no payment strategy registered");
            return Err(PaymentError::UnsupportedMode(mode));
        };

        debug!(%mode, %amount, "dispatching payment");
        Ok(strategy.execute(amount))
    }

    /// Dispatches a batch request and wraps the outcome in a [`Receipt`].
    pub fn process_request(&self, request: &PaymentRequest) -> Result<Receipt> {
        let confirmation = self.process_payment(request.mode, request.amount)?;
        Ok(Receipt {
            mode: request.mode,
            amount: request.amount,
            confirmation,
        })
    }

    /// Returns `true` if a strategy is registered for `mode`.
    pub fn supports(&self, mode: PaymentMode) -> bool {
        self.strategies.contains_key(&mode)
    }

    /// The registered modes in declaration order.
    pub fn registered_modes(&self) -> Vec<PaymentMode> {
        let mut modes: Vec<PaymentMode> = self.strategies.keys().copied().collect();
        modes.sort();
        modes
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for PaymentExecutor {
    fn default() -> Self {
        Self::with_default_strategies()
    }
}
