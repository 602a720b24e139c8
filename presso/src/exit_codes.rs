#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,

    /// Invalid CLI/context input (bad flags, unreadable YAML, rejected parameters).
    InvalidInput = 30,

    /// Internal/runtime error (IO errors other than a missing context file).
    RuntimeError = 40,
}

impl ExitCode {
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
