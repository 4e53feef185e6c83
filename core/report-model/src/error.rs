//! FILENAME: core/report-model/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Malformed report payload: {0}")]
    Json(#[from] serde_json::Error),
}
