// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lot_desk_domain::DomainError;

/// Errors that can occur during record assembly.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// One or more domain rules were violated.
    ///
    /// Every failing sub-check is collected; the record is left
    /// untouched, so the caller can correct input and retry.
    Validation(Vec<DomainError>),
    /// A defect in the calling code, not user input.
    ///
    /// Propagated rather than swallowed; never produced by bad form data.
    Internal(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => {
                write!(f, "Validation failed ({} violations): ", errors.len())?;
                let mut first: bool = true;
                for error in errors {
                    if !first {
                        write!(f, "; ")?;
                    }
                    write!(f, "{error}")?;
                    first = false;
                }
                Ok(())
            }
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<Vec<DomainError>> for CoreError {
    fn from(errors: Vec<DomainError>) -> Self {
        Self::Validation(errors)
    }
}

impl From<DomainError> for CoreError {
    fn from(error: DomainError) -> Self {
        Self::Validation(vec![error])
    }
}
