//! Validation helpers built on stillwater's `Validation`.
//!
//! Unlike `Result`, a `Validation` accumulates every error instead of
//! stopping at the first one, so `roimap validate` can report all input
//! problems in a single run.
//!
//! # Usage
//!
//! ```rust
//! use roimap::effects::{combine_validations, validation_failure, validation_success};
//! use roimap::errors::RoiError;
//!
//! let checks = vec![
//!     validation_success(()),
//!     validation_failure(RoiError::validation("hourly_cost must be non-negative")),
//!     validation_failure(RoiError::validation("current_month must be in 1..=12")),
//! ];
//!
//! let combined = combine_validations(checks);
//! assert!(combined.is_failure());
//! ```

use stillwater::{NonEmptyVec, Validation};

use crate::errors::RoiError;

/// Accumulated errors; never empty.
pub type InputErrors = NonEmptyVec<RoiError>;

/// Validation type for roimap inputs and configuration.
pub type InputValidation<T> = Validation<T, InputErrors>;

/// Create a successful validation result.
pub fn validation_success<T>(value: T) -> InputValidation<T> {
    Validation::Success(value)
}

/// Create a failed validation result with a single error.
pub fn validation_failure<T>(error: RoiError) -> InputValidation<T> {
    Validation::Failure(NonEmptyVec::new(error, Vec::new()))
}

/// Turn a list of errors into a validation: success when the list is empty.
pub fn validation_from_errors(errors: Vec<RoiError>) -> InputValidation<()> {
    match NonEmptyVec::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

/// Combine multiple validations, accumulating all errors.
pub fn combine_validations<T>(validations: Vec<InputValidation<T>>) -> InputValidation<Vec<T>> {
    let mut successes = Vec::new();
    let mut failures: Vec<RoiError> = Vec::new();

    for v in validations {
        match v {
            Validation::Success(value) => successes.push(value),
            Validation::Failure(errors) => failures.extend(errors),
        }
    }

    match NonEmptyVec::from_vec(failures) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(successes),
    }
}

/// Convert a validation into a `Result`, keeping every error.
pub fn into_result<T>(validation: InputValidation<T>) -> Result<T, Vec<RoiError>> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(errors.into_vec()),
    }
}

/// Convert a validation to `anyhow::Result`, formatting all errors as a list.
pub fn run_validation<T>(validation: InputValidation<T>) -> anyhow::Result<T> {
    into_result(validation).map_err(errors_to_anyhow)
}

/// Render accumulated errors as one `anyhow::Error`.
///
/// The result still downcasts to [`RoiError`], so callers can classify it.
pub fn errors_to_anyhow(mut errors: Vec<RoiError>) -> anyhow::Error {
    if errors.len() == 1 {
        if let Some(error) = errors.pop() {
            return anyhow::Error::new(error);
        }
    }
    anyhow::Error::new(RoiError::Invalid(errors))
}
