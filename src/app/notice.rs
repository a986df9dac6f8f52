use crate::domain::model::Money;
use crate::utils::error::{AuthError, DepositError, InputError, StateError, WithdrawError};
use rust_decimal::Decimal;
use std::fmt;

pub const PIN_ACCEPTED: &str = "PIN accepted. You can now access the ATM functions.";
pub const INCORRECT_PIN: &str = "Incorrect PIN. Please try again.";
pub const ALREADY_LOGGED_IN: &str = "You are already logged in.";
pub const INSUFFICIENT_FUNDS: &str = "Insufficient funds.";
pub const NON_POSITIVE: &str = "Amount must be greater than zero.";
pub const NOT_A_NUMBER: &str = "Invalid input. Please enter a number.";
pub const LOCKED: &str = "Please log in with your PIN first.";
pub const BALANCE_OVERFLOW: &str = "Amount is too large for this account.";
pub const WELCOME: &str = "Welcome to the ATM Simulator. Log in with 'login <pin>'.";
pub const GOODBYE: &str = "Goodbye.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Balance,
    Info,
}

impl NoticeKind {
    pub fn title(self) -> &'static str {
        match self {
            NoticeKind::Success => "Success",
            NoticeKind::Error => "Error",
            NoticeKind::Balance => "Current Balance",
            NoticeKind::Info => "Info",
        }
    }
}

/// A titled message shown to the user after each command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    pub fn pin_accepted() -> Self {
        Self::success(PIN_ACCEPTED)
    }

    pub fn deposited(amount: Decimal) -> Self {
        Self::success(format!("You have deposited {}.", Money(amount)))
    }

    pub fn withdrawn(amount: Decimal) -> Self {
        Self::success(format!("You have withdrawn {}.", Money(amount)))
    }

    pub fn balance(balance: Decimal) -> Self {
        Self::new(
            NoticeKind::Balance,
            format!("Your current balance is {}.", Money(balance)),
        )
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.title(), self.message)
    }
}

impl From<AuthError> for Notice {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::IncorrectPin => Notice::error(INCORRECT_PIN),
        }
    }
}

impl From<InputError> for Notice {
    fn from(err: InputError) -> Self {
        match err {
            InputError::NotANumber => Notice::error(NOT_A_NUMBER),
            InputError::NonPositive => Notice::error(NON_POSITIVE),
        }
    }
}

impl From<StateError> for Notice {
    fn from(err: StateError) -> Self {
        match err {
            StateError::Locked => Notice::error(LOCKED),
        }
    }
}

impl From<DepositError> for Notice {
    fn from(err: DepositError) -> Self {
        match err {
            DepositError::Locked(e) => e.into(),
            DepositError::Input(e) => e.into(),
            DepositError::BalanceOverflow => Notice::error(BALANCE_OVERFLOW),
        }
    }
}

impl From<WithdrawError> for Notice {
    fn from(err: WithdrawError) -> Self {
        match err {
            WithdrawError::Locked(e) => e.into(),
            WithdrawError::Input(e) => e.into(),
            WithdrawError::InsufficientFunds => Notice::error(INSUFFICIENT_FUNDS),
        }
    }
}
