use std::fmt::Formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignError {
    /// Alignment was zero or negative.
    BadAlignment,
    Overflow,
}

impl std::fmt::Display for AlignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            AlignError::BadAlignment => f.write_str("alignment must be positive"),
            AlignError::Overflow => f.write_str("aligned value overflows its type"),
        }
    }
}

impl std::error::Error for AlignError {}
