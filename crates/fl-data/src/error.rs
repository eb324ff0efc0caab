use thiserror::Error;

use fl_core::FacilityId;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("facility CSV parse error: {0}")]
    Parse(String),

    #[error("duplicate FacilityID {id} in data row {row}")]
    DuplicateId { id: FacilityId, row: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DataResult<T> = Result<T, DataError>;
