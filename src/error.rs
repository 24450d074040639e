use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of the cleaning pipeline. Every stage validates eagerly
/// and the first error aborts the whole run; nothing is retried or skipped.
#[derive(Debug, Error)]
pub enum CleanseError {
    #[error("no input CSV files provided")]
    NoInputs,

    #[error("'{path}' does not exist")]
    NotFound { path: PathBuf },

    #[error("'{path}' does not have the .csv extension")]
    Extension { path: PathBuf },

    #[error("the columns of '{path}' are not valid (found: {found:?})")]
    Schema { path: PathBuf, found: Vec<String> },

    #[error("error while reading '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("no country in the vocabulary matches '{value}'")]
    NoMatch { value: String },

    #[error("error while writing the output file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

pub type Result<T, E = CleanseError> = std::result::Result<T, E>;
