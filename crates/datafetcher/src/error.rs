use database::db::ConfigError;
use sea_orm::DbErr;
use std::{error::Error as StdError, path::PathBuf};
use thiserror::Error;

/// Failure of a single call to the course-data API
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("TOKEN is not set. You're missing the .env file! See .env.example for the keys.")]
    MissingToken,

    #[error("could not resolve the current term: {0}")]
    Term(#[source] FetchError),

    #[error("could not fetch the courses for term {term}: {source}")]
    Courses {
        term: String,
        #[source]
        source: FetchError,
    },

    #[error("could not read {}: {source}", .path.display())]
    DataFile {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to store catalog data: {0}")]
    Store(#[source] Box<dyn StdError + Send + Sync>),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl PipelineError {
    /// Wraps an error raised by a [`CatalogSink`](crate::pipeline::CatalogSink)
    pub fn store<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Store(Box::new(err))
    }
}
