use std::error;
use std::fmt;
use std::io;
use std::result;

/// Errors produced by iteration and diagram export.
#[derive(Debug)]
pub enum Error {
    /// An iterator was dereferenced after it yielded its last value.
    EndOfSequence,
    /// Writing an exported diagram failed.
    IOError(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::EndOfSequence => None,
            Error::IOError(error) => Some(error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EndOfSequence => write!(f, "iterator dereferenced past the end of the sequence"),
            Error::IOError(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
