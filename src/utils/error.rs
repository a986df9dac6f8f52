use thiserror::Error;

/// Rejected PIN entry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("incorrect PIN")]
    IncorrectPin,
}

/// Amount text that could not become a positive amount.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("amount is not a number")]
    NotANumber,

    #[error("amount must be greater than zero")]
    NonPositive,
}

/// Operation attempted before the session was unlocked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("session is locked")]
    Locked,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositError {
    #[error(transparent)]
    Locked(#[from] StateError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("deposit would overflow the balance")]
    BalanceOverflow,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawError {
    #[error(transparent)]
    Locked(#[from] StateError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("insufficient funds")]
    InsufficientFunds,
}

#[derive(Error, Debug)]
pub enum AtmError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a startup failure of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AtmError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AtmError::IoError(_) => ErrorCategory::Io,
            AtmError::ConfigValidationError { .. } | AtmError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AtmError::IoError(e) => format!("Could not read the configuration file: {}", e),
            AtmError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            AtmError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AtmError::IoError(_) => "Check that the file exists and is readable",
            AtmError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the configuration file"
            }
            AtmError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the configuration file or pass it on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AtmError>;
