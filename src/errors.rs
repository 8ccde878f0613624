//! Errors raised at the workbench boundary.
//! The store and the aggregator never fail; only names arriving as text from a
//! view layer (field names, list kinds, views) can be rejected.

use thiserror::Error;

use crate::models::component::{ItemField, ListKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkbenchError {
    #[error("Unknown item field: {0}")]
    UnknownField(String),

    #[error("Unknown component list: {0}")]
    UnknownListKind(String),

    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("Field '{field}' does not exist on {kind} items")]
    FieldNotInList { field: ItemField, kind: ListKind },
}

pub type WorkbenchResult<T> = Result<T, WorkbenchError>;
