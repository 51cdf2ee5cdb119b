pub mod search;
pub mod words;

use crate::data::models::{ApiError, DIALECTS};

pub(crate) fn validate_dialect(dialect: &str) -> Result<(), ApiError> {
    if DIALECTS.contains(&dialect) {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "dialect must be one of {:?}",
            DIALECTS
        )))
    }
}
