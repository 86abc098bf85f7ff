use thiserror::Error;

use crate::types::ValidationError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("No more {0} ids are available")]
    IdsExhausted(&'static str),
}
