use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrewPayError>;

#[derive(Error, Debug)]
pub enum BrewPayError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("unknown topping: {0}")]
    UnknownTopping(String),
}
