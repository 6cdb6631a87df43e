use thiserror::Error;

/// Errors produced while analyzing an IPPcode20 source.
///
/// Every variant is fatal: the parser rejects the whole source on the
/// first defect and produces no partial output. `line` is the 1-based
/// physical line number in the input, counting blanks and comments.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing or malformed '.IPPcode20' header")]
    BadHeader,
    #[error("unknown opcode '{opcode}' on line {line}")]
    UnknownOpcode { opcode: String, line: usize },
    #[error("{message} on line {line}")]
    Syntax { message: String, line: usize },
}

impl ParseError {
    /// Stable process exit code for this error class. The external test
    /// harness distinguishes error classes by exit status, not by
    /// message text.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::BadHeader => 21,
            ParseError::UnknownOpcode { .. } => 22,
            ParseError::Syntax { .. } => 23,
        }
    }
}
