//! Number rule

use serde_json::Value;

use crate::foundation::{Context, Validate, ValidationErrors};
use crate::validators::type_mismatch;

/// Validates that a present value is a JSON number, optionally bounded below.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberRule {
    min: Option<f64>,
}

impl NumberRule {
    /// Requires the number to be at least `min`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }
}

impl Validate for NumberRule {
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        let Some(value) = input else {
            return Ok(());
        };
        let Some(number) = value.as_f64() else {
            return Err(type_mismatch(cx, value, "number.base", "a number"));
        };

        match self.min {
            Some(min) if number < min => Err(cx
                .error(
                    "number.min",
                    format!("\"{}\" must be greater than or equal to {min}", cx.label()),
                )
                .with_param("limit", min.to_string())
                .with_value(value.clone())
                .into()),
            _ => Ok(()),
        }
    }
}

pub fn number() -> NumberRule {
    NumberRule::default()
}
