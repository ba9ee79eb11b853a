pub mod check;
pub mod compare;
pub mod parse;
pub mod sort;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(code(debver::version))]
    VersionError(#[from] debver::VersionError),
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

type Result<T> = miette::Result<T, Error>;

/// A comparison result as the integer sign used on the command line.
pub fn sign(ordering: std::cmp::Ordering) -> i8 {
    ordering as i8
}
