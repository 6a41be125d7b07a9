//! CommandResult — the outcome of every interpreter execution.

/// Sentinel output of the `clear`/`cls` command.
///
/// Not filesystem state: the presentation layer interprets it as
/// "erase the visible log".
pub const CLEAR_SCREEN: &str = "CLEAR";

/// The result of executing one command line.
///
/// A failed command carries its message in `error` and has empty `output`;
/// the interpreter never lets a filesystem failure escape as a panic or an
/// `Err` return.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    /// Text output to display.
    pub output: String,
    /// Error message, if the command failed.
    pub error: Option<String>,
}

impl CommandResult {
    /// Create a successful result with output.
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: None,
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            error: Some(error.into()),
        }
    }

    /// Create an empty successful result (no output, no error).
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if the command succeeded.
    pub fn ok(&self) -> bool {
        self.error.is_none()
    }
}
