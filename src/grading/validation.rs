use crate::config::WeightingConfig;

/// Validate a configured weighting at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weighting(config: &WeightingConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let fields = [
        ("midterm1", config.midterm1),
        ("midterm2", config.midterm2),
        ("final_exam", config.final_exam),
    ];

    for (name, value) in fields {
        if !value.is_finite() {
            errors.push(format!("weighting.{}: must be a finite number, got {}", name, value));
        }
    }

    // A non-finite field already makes the total meaningless
    if errors.is_empty() && config.midterm1 + config.midterm2 + config.final_exam == 0.0 {
        errors.push("weighting: total should not be 0".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighting(m1: f64, m2: f64, f: f64) -> WeightingConfig {
        WeightingConfig {
            midterm1: m1,
            midterm2: m2,
            final_exam: f,
        }
    }

    #[test]
    fn test_valid_weighting() {
        assert!(validate_weighting(&weighting(25.0, 25.0, 50.0)).is_ok());
    }

    #[test]
    fn test_negative_component_allowed() {
        assert!(validate_weighting(&weighting(-5.0, 55.0, 50.0)).is_ok());
    }

    #[test]
    fn test_zero_total() {
        let errors = validate_weighting(&weighting(0.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("total should not be 0"));
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = validate_weighting(&weighting(f64::NAN, f64::INFINITY, 50.0)).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("weighting.midterm1"));
        assert!(errors[1].contains("weighting.midterm2"));
    }
}
