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

//! Error types for the ansicodec crate.
//!
//! Serializing into a `String` cannot fail. These errors only surface from the
//! writer and byte-stream paths, where the destination itself may fail.

use thiserror::Error;

/// Result type alias for operations that may fail with an [`AnsiCodecError`].
pub type AnsiCodecResult<T> = Result<T, AnsiCodecError>;

/// Errors raised while writing serialized output.
#[derive(Debug, Error)]
pub enum AnsiCodecError {
    /// I/O error from the destination
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Formatter error from a `std::fmt::Write` destination
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),
}
