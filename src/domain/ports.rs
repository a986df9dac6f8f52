use crate::domain::model::DEFAULT_PIN;

/// Source of the settings a session and its console need.
pub trait ConfigProvider {
    fn expected_pin(&self) -> &str;

    fn log_level(&self) -> Option<&str> {
        None
    }

    fn json_logs(&self) -> bool {
        false
    }
}

/// Built-in settings: PIN `1234`, default logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfig;

impl ConfigProvider for DefaultConfig {
    fn expected_pin(&self) -> &str {
        DEFAULT_PIN
    }
}
