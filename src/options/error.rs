use std::borrow::Cow;

/// An error around some option-setting, and the reason.
///
/// These are meant to be user-facing (e.g. explain why it's broken and what
/// to fix), and as so treat it as such!
#[derive(Debug, PartialEq)]
pub enum OptionError {
    Argument(Cow<'static, str>),
    Other(Cow<'static, str>),
}

impl OptionError {
    /// Create a new [`OptionError::Argument`].
    pub(crate) fn arg<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        OptionError::Argument(reason.into())
    }

    /// Create a new [`OptionError::Other`].
    pub(crate) fn other<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        OptionError::Other(reason.into())
    }
}

pub type OptionResult<T> = Result<T, OptionError>;

impl std::fmt::Display for OptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionError::Argument(reason) => write!(f, "Argument error: {reason}"),
            OptionError::Other(reason) => write!(f, "Error with the arguments: {reason}"),
        }
    }
}

impl std::error::Error for OptionError {}

impl From<clap::Error> for OptionError {
    fn from(err: clap::Error) -> Self {
        use clap::error::ErrorKind;

        // Keep only the first line; the caller decides how to show usage.
        let rendered = err.render().to_string();
        let reason = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();

        match err.kind() {
            ErrorKind::Io | ErrorKind::Format => OptionError::other(reason),
            _ => OptionError::arg(reason),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            OptionError::arg("'--seconds' is missing a value").to_string(),
            "Argument error: '--seconds' is missing a value"
        );
        assert_eq!(
            OptionError::other("oops").to_string(),
            "Error with the arguments: oops"
        );
    }
}
