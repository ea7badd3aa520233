#[derive(Debug)]
pub enum Error {
    Http(reqwest::Error),
    UnexpectedStatus { expected: u16, actual: u16 },
    MissingMarker(&'static str),
    InvalidBody(String),
    Config(String),
    StepFailed(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP Error: {err}"),
            Error::UnexpectedStatus { expected, actual } => {
                write!(f, "Unexpected Status: expected {expected}, got {actual}")
            }
            Error::MissingMarker(marker) => write!(f, "Missing Marker: {marker}"),
            Error::InvalidBody(msg) => write!(f, "Invalid Body: {msg}"),
            Error::Config(msg) => write!(f, "Config Error: {msg}"),
            Error::StepFailed(step) => write!(f, "Step Failed: {step}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidBody(err.to_string())
    }
}
