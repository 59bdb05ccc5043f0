use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum MitoplotError {
    Message(String),
    UnknownSample(String),
    Io(std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    Render(String),
}

impl Error for MitoplotError {}

impl fmt::Display for MitoplotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MitoplotError::Message(msg) => write!(f, "{msg}"),
            MitoplotError::UnknownSample(name) => {
                write!(f, "Sample '{name}' not found in the input")
            }
            MitoplotError::Io(err) => write!(f, "I/O error: {err}"),
            MitoplotError::Csv(err) => write!(f, "Table error: {err}"),
            MitoplotError::Serde(err) => write!(f, "JSON error: {err}"),
            MitoplotError::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl From<String> for MitoplotError {
    fn from(err: String) -> Self {
        MitoplotError::Message(err)
    }
}

impl From<std::io::Error> for MitoplotError {
    fn from(err: std::io::Error) -> Self {
        MitoplotError::Io(err)
    }
}

impl From<csv::Error> for MitoplotError {
    fn from(err: csv::Error) -> Self {
        MitoplotError::Csv(err)
    }
}

impl From<serde_json::Error> for MitoplotError {
    fn from(err: serde_json::Error) -> Self {
        MitoplotError::Serde(err)
    }
}

impl From<std::fmt::Error> for MitoplotError {
    fn from(err: std::fmt::Error) -> Self {
        MitoplotError::Render(err.to_string())
    }
}
