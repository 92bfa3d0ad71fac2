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

//! Styled segment documents.
//!
//! A [`Document`] is a short piece of text split into [`Segment`]s, each
//! carrying one [`StyleSet`]. Styling a selection is a pure operation that
//! returns a new document:
//!
//! ```rust
//! use ansiscribe_document::{Document, StyleOperation};
//!
//! let document = Document::new("Hello World")
//!     .apply_style(6..11, StyleOperation::SetBold)
//!     .unwrap();
//! assert_eq!(document.segment_count(), 2);
//! ```

mod config;
mod document;
mod operation;
mod result;
mod segment;
mod style;

pub use self::config::DocumentConfig;
pub use self::document::Document;
pub use self::operation::StyleOperation;
pub use self::result::{DocumentError, DocumentResult, RangeFault};
pub use self::segment::Segment;
pub use self::style::{Background, Foreground, StyleSet};
