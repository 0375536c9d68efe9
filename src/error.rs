/// Error surfaced by the edges of the tool (catalog fetches, files, CLI checks).
///
/// The matching core never fails; only I/O and configuration paths produce one of
/// these. Each error carries the process exit code `xref` should terminate with:
///
/// - `1`: a check ran to completion and found problems (e.g. stale overrides)
/// - `2`: configuration or input problems (missing key, unreadable/invalid file)
/// - `4`: upstream catalog failures (HTTP errors, malformed payloads)
#[derive(Clone, thiserror::Error)]
#[error("{message}")]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Configuration/input error (exit code 2).
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// Upstream catalog error (exit code 4).
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}
