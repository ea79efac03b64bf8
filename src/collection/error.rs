use anyhow::anyhow;

/// An error to do with memory collection.
#[derive(Debug)]
pub enum CollectionError {
    /// A general error to propagate back up. A wrapper around [`anyhow::Error`].
    General(anyhow::Error),

    /// The OS reported more free space than there is in total.
    Inconsistent {
        what: &'static str,
        total: u64,
        free: u64,
    },

    /// The collection is unsupported.
    Unsupported,
}

impl CollectionError {
    #[cfg_attr(not(target_os = "windows"), expect(dead_code))]
    pub(crate) fn general<E: Into<anyhow::Error>>(error: E) -> Self {
        Self::General(error.into())
    }

    pub(crate) fn from_str(msg: &'static str) -> Self {
        Self::General(anyhow!(msg))
    }
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionError::General(err) => err.fmt(f),
            CollectionError::Inconsistent { what, total, free } => {
                write!(
                    f,
                    "the OS reported {free} free {what} bytes out of a total of {total}"
                )
            }
            CollectionError::Unsupported => {
                write!(
                    f,
                    "winfree does not support reading memory usage on this platform."
                )
            }
        }
    }
}

impl std::error::Error for CollectionError {}

/// A [`Result`] with the error type being a [`CollectionError`].
pub type CollectionResult<T> = Result<T, CollectionError>;
