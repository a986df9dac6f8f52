pub mod amount;
pub mod session;

pub use crate::domain::model::{Amount, Money, SessionState};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
