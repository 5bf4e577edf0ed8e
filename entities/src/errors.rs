use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("the server responded with status {0}")]
    BadResponse(u16),
    #[error("the request could not be completed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("the response does not match the expected shape: {0}")]
    MalformedJson(String),
    #[error("App could not load the data from external server {0}")]
    WrongDateFormat(String),
}

/// Every way fetching shifts can fail. The `Display` text is what the list
/// screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftsError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("the week to fetch could not be computed")]
    CannotComputeWindow,
    #[error("Required data not found")]
    NoData,
    #[error("shifts are already being fetched")]
    FetchInProgress,
}
