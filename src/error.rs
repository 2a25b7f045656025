use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Motion,
    Study,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Motion => f.write_str("motion"),
            EntityKind::Study => f.write_str("study"),
        }
    }
}

#[derive(Error, Debug)]
pub enum StudyError {
    #[error("{kind} not found: {key}")]
    NotFound { kind: EntityKind, key: String },
    #[error("invalid motion code: {0}")]
    InvalidMotionCode(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl StudyError {
    pub fn motion_not_found(code: impl Into<String>) -> Self {
        StudyError::NotFound {
            kind: EntityKind::Motion,
            key: code.into(),
        }
    }

    pub fn study_not_found(id: impl Into<String>) -> Self {
        StudyError::NotFound {
            kind: EntityKind::Study,
            key: id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    InvalidMotionCode,
    InvalidInput,
    Internal,
}

/// Error shape handed to the transport layer.
#[derive(Debug, Clone, Serialize)]
pub struct CommandError {
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<StudyError> for CommandError {
    fn from(err: StudyError) -> Self {
        let kind = match &err {
            StudyError::NotFound { .. } => ErrorKind::NotFound,
            StudyError::InvalidMotionCode(_) => ErrorKind::InvalidMotionCode,
            StudyError::InvalidInput(_) => ErrorKind::InvalidInput,
            StudyError::Storage(_) => ErrorKind::Internal,
        };
        Self {
            kind,
            message: format!("{err:#}"),
        }
    }
}
