use std::fmt::{Display, Formatter, Result as FmtResult};

/// Everything that can go wrong while talking to an upstream API.
///
/// None of these reach the user: they are logged where the fetch was started.
/// Unparseable price fields are not errors at all and surface as NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response.
    Network(String),
    /// The upstream answered with a non-2xx status.
    HttpStatus { status: u16, status_text: String },
    /// The body was not JSON or lacked the expected key.
    MalformedResponse(String),
    /// Symbol search returned no usable match for these keywords.
    NoSymbolMatch(String),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::HttpStatus { status, status_text } => {
                write!(f, "HTTP error: {} - {}", status, status_text)
            }
            FetchError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            FetchError::NoSymbolMatch(keywords) => {
                write!(f, "No matching symbol found for \"{}\"", keywords)
            }
        }
    }
}

impl std::error::Error for FetchError {}

pub type FetchResult<T> = Result<T, FetchError>;
