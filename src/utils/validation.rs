use crate::utils::error::{AtmError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const PIN_MIN_LENGTH: usize = 4;
pub const PIN_MAX_LENGTH: usize = 12;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AtmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AtmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

// The PIN value is masked in errors so it never ends up in logs.
pub fn validate_pin(field_name: &str, pin: &str) -> Result<()> {
    validate_non_empty_string(field_name, pin)?;

    if !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(AtmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "****".to_string(),
            reason: "PIN must contain only digits".to_string(),
        });
    }

    validate_range(field_name, pin.len(), PIN_MIN_LENGTH, PIN_MAX_LENGTH).map_err(|_| {
        AtmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "****".to_string(),
            reason: format!(
                "PIN length must be between {} and {} digits",
                PIN_MIN_LENGTH, PIN_MAX_LENGTH
            ),
        }
    })
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(AtmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Unsupported log level. Valid levels: {}", LOG_LEVELS.join(", ")),
        });
    }
    Ok(())
}
