use crate::utils::error::{CosmicError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_latitude(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(-90.0..=90.0).contains(&value) {
        return Err(CosmicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Latitude must be between -90 and 90 degrees".to_string(),
        });
    }
    Ok(())
}

pub fn validate_longitude(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(-180.0..=180.0).contains(&value) {
        return Err(CosmicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Longitude must be between -180 and 180 degrees".to_string(),
        });
    }
    Ok(())
}

/// 24 小時制時刻字串（HH:MM）
pub fn validate_clock(field_name: &str, value: &str) -> Result<(u32, u32)> {
    let invalid = |reason: String| CosmicError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason,
    };

    let (h, m) = value
        .split_once(':')
        .ok_or_else(|| invalid("Expected HH:MM".to_string()))?;
    let hour: u32 = h
        .parse()
        .map_err(|_| invalid(format!("'{}' is not a valid hour", h)))?;
    let minute: u32 = m
        .parse()
        .map_err(|_| invalid(format!("'{}' is not a valid minute", m)))?;

    if hour > 23 || minute > 59 {
        return Err(invalid("Hour must be 0-23 and minute 0-59".to_string()));
    }
    Ok((hour, minute))
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CosmicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CosmicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CosmicError::InvalidConfigValueError {
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
        return Err(CosmicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
