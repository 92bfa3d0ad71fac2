//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for the document crate.

use thiserror::Error;

/// Result type alias for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors raised while mutating a [`Document`](crate::Document).
///
/// A failed operation never touches the input document, so every error is
/// recoverable by asking the user for a different selection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The selected range cannot be styled.
    #[error("Invalid range {start}..{end} for document of length {len}: {fault}")]
    InvalidRange {
        /// First selected character offset
        start: usize,
        /// One past the last selected character offset
        end: usize,
        /// Length of the document in characters
        len: usize,
        /// Why the range was rejected
        fault: RangeFault,
    },
}

impl DocumentError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DocumentError::InvalidRange { .. })
    }

    /// The reason a range was rejected.
    pub fn fault(&self) -> RangeFault {
        match self {
            DocumentError::InvalidRange { fault, .. } => *fault,
        }
    }
}

/// Reason a selection range was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeFault {
    /// `start == end`, nothing is selected.
    Empty,
    /// `start > end`.
    Reversed,
    /// `end` lies past the end of the document.
    OutOfBounds,
    /// The selection only contains whitespace.
    Blank,
}

impl std::fmt::Display for RangeFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeFault::Empty => write!(f, "selection is empty"),
            RangeFault::Reversed => write!(f, "start is after end"),
            RangeFault::OutOfBounds => write!(f, "selection extends past the end of the document"),
            RangeFault::Blank => write!(f, "selection only contains whitespace"),
        }
    }
}
