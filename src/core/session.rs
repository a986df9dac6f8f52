use crate::core::amount::parse_amount;
use crate::domain::model::{Money, SessionState, DEFAULT_PIN};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AuthError, DepositError, StateError, WithdrawError};
use rust_decimal::Decimal;

/// In-memory account session: one balance behind a PIN gate.
///
/// Starts locked with a zero balance. Deposit, Withdraw and Inquire are
/// refused until [`Session::unlock`] succeeds. The balance never goes
/// negative.
#[derive(Debug, Clone)]
pub struct Session {
    balance: Decimal,
    state: SessionState,
    expected_pin: String,
}

impl Session {
    pub fn new(expected_pin: impl Into<String>) -> Self {
        Self {
            balance: Decimal::ZERO,
            state: SessionState::Locked,
            expected_pin: expected_pin.into(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.expected_pin())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == SessionState::Unlocked
    }

    /// Compares `pin` with the expected PIN. A mismatch never re-locks an
    /// already unlocked session.
    pub fn unlock(&mut self, pin: &str) -> Result<(), AuthError> {
        if pin != self.expected_pin {
            tracing::warn!("PIN rejected");
            return Err(AuthError::IncorrectPin);
        }

        if self.state == SessionState::Locked {
            tracing::info!("Session unlocked");
        }
        self.state = SessionState::Unlocked;
        Ok(())
    }

    /// Adds the parsed amount and returns the new balance.
    pub fn deposit(&mut self, amount_text: &str) -> Result<Decimal, DepositError> {
        self.ensure_unlocked()?;
        let amount = parse_amount(amount_text)?;

        let balance = self
            .balance
            .checked_add(amount.value())
            .ok_or(DepositError::BalanceOverflow)?;
        self.balance = balance;

        tracing::info!("Deposited {}, balance now {}", amount, Money(balance));
        Ok(balance)
    }

    /// Subtracts the parsed amount and returns the new balance.
    pub fn withdraw(&mut self, amount_text: &str) -> Result<Decimal, WithdrawError> {
        self.ensure_unlocked()?;
        let amount = parse_amount(amount_text)?;

        if amount.value() > self.balance {
            tracing::warn!(
                "Withdrawal of {} refused, balance is {}",
                amount,
                Money(self.balance)
            );
            return Err(WithdrawError::InsufficientFunds);
        }
        self.balance -= amount.value();

        tracing::info!("Withdrew {}, balance now {}", amount, Money(self.balance));
        Ok(self.balance)
    }

    pub fn inquire(&self) -> Result<Decimal, StateError> {
        self.ensure_unlocked()?;
        tracing::debug!("Balance inquiry: {}", Money(self.balance));
        Ok(self.balance)
    }

    fn ensure_unlocked(&self) -> Result<(), StateError> {
        match self.state {
            SessionState::Unlocked => Ok(()),
            SessionState::Locked => {
                tracing::debug!("Operation refused while locked");
                Err(StateError::Locked)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_PIN)
    }
}
