pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::console::{Command, Console, ConsoleSummary};
pub use crate::app::notice::{Notice, NoticeKind};
pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::{amount::parse_amount, session::Session};
pub use crate::domain::model::{Amount, Money, SessionState, DEFAULT_PIN};
pub use crate::domain::ports::{ConfigProvider, DefaultConfig};
pub use crate::utils::error::{
    AtmError, AuthError, DepositError, InputError, Result, StateError, WithdrawError,
};
