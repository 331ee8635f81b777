use core::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A root query (`dequeue`, `peek`, `peek_priority`, ...) was made on an
    /// empty queue. The queue is left unchanged.
    EmptyQueue,
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::EmptyQueue => write!(fmt, "queue is empty"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
