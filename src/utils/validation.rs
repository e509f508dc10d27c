use crate::utils::error::{LabelError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LabelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LabelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_min_u32(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(LabelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_positive_dimension(field_name: &str, value_mm: f32) -> Result<()> {
    if !value_mm.is_finite() || value_mm <= 0.0 {
        return Err(LabelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value_mm.to_string(),
            reason: "Dimension must be a positive number of millimetres".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative_dimension(field_name: &str, value_mm: f32) -> Result<()> {
    if !value_mm.is_finite() || value_mm < 0.0 {
        return Err(LabelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value_mm.to_string(),
            reason: "Dimension cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LabelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_path() {
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "schedule.csv").is_ok());
    }

    #[test]
    fn rejects_values_below_minimum() {
        assert!(validate_min_u32("step_minutes", 0, 1).is_err());
        assert!(validate_min_u32("step_minutes", 1, 1).is_ok());
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(validate_positive_dimension("label_width", 0.0).is_err());
        assert!(validate_positive_dimension("label_width", -3.0).is_err());
        assert!(validate_positive_dimension("label_width", f32::NAN).is_err());
        assert!(validate_positive_dimension("label_width", 38.0).is_ok());
    }

    #[test]
    fn margins_may_be_zero_but_not_negative() {
        assert!(validate_non_negative_dimension("margin_x", 0.0).is_ok());
        assert!(validate_non_negative_dimension("margin_x", -1.0).is_err());
    }
}
