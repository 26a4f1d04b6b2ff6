use std::fmt::{Display, Formatter};
use std::sync::PoisonError;

use crate::modules::layout::LayoutError;

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub String);

impl<G> From<PoisonError<G>> for Error {
    fn from(_: PoisonError<G>) -> Self {
        Self("Concurrency error: the storage mutex has been poisoned".into())
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error(format!("IO error: {error}"))
    }
}

impl From<rmp_serde::encode::Error> for Error {
    fn from(error: rmp_serde::encode::Error) -> Self {
        Error(format!("encoding error: {error}"))
    }
}

impl From<rmp_serde::decode::Error> for Error {
    fn from(error: rmp_serde::decode::Error) -> Self {
        Error(format!("decoding error: {error}"))
    }
}

impl From<time::error::Format> for Error {
    fn from(error: time::error::Format) -> Self {
        Error(format!("time formatting error: {error}"))
    }
}

impl From<LayoutError> for Error {
    fn from(error: LayoutError) -> Self {
        Error(format!("layout error: {error}"))
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        Error(String::from(error))
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error(error)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for Error {}
