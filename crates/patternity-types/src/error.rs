use thiserror::Error;

/// Errors related to recipe catalogue operations.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("recipe not found: '{0}'")]
    NotFound(String),

    #[error("invalid recipe name: '{0}' (only alphanumeric, hyphens and underscores allowed)")]
    InvalidName(String),

    #[error("recipe '{0}' has no steps")]
    NoSteps(String),
}

/// Errors from the opt-in stricter construction contract.
///
/// The base contract is total: builders store out-of-domain literals
/// verbatim. These errors are only produced by the checked path
/// (`Recipe::validate`, `Director::apply_checked`).
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("step {index}: seat count must not be negative (got {seats})")]
    NegativeSeats { index: usize, seats: i32 },

    #[error("step {index}: engine name must not be empty")]
    EmptyEngine { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_error_display() {
        let err = RecipeError::NotFound("hovercraft".to_string());
        assert_eq!(err.to_string(), "recipe not found: 'hovercraft'");
    }

    #[test]
    fn test_invalid_name_display() {
        let err = RecipeError::InvalidName("has spaces!".to_string());
        assert!(err.to_string().contains("has spaces!"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::NegativeSeats { index: 2, seats: -4 };
        assert_eq!(
            err.to_string(),
            "step 2: seat count must not be negative (got -4)"
        );

        let err = ValidationError::EmptyEngine { index: 0 };
        assert_eq!(err.to_string(), "step 0: engine name must not be empty");
    }
}
