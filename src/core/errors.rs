use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("ScoutError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for ScoutError {
    fn from(error: std::io::Error) -> Self {
        ScoutError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for ScoutError {
    fn from(error: reqwest::Error) -> Self {
        ScoutError::Reqwest(Box::new(error))
    }
}
