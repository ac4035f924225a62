//! Conversions between error descriptors and plain strings.

use std::fmt;

use super::Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&String> for Error {
    fn from(message: &String) -> Self {
        Self::new(message.as_str())
    }
}

/// Render a descriptor as its message. Payload-only descriptors become `""`.
impl From<Error> for String {
    fn from(error: Error) -> Self {
        error.as_str().to_owned()
    }
}

impl PartialEq<str> for Error {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Error {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for Error {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<Error> for &str {
    fn eq(&self, other: &Error) -> bool {
        *self == other.as_str()
    }
}
