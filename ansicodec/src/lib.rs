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

//! ANSI serialization of styled documents for Discord code blocks.

mod codec;
mod config;
pub mod consts;
mod result;
mod serializer;
mod strip;
mod style;

pub use self::codec::AnsiCodec;
pub use self::config::AnsiConfig;
pub use self::result::{AnsiCodecError, AnsiCodecResult};
pub use self::serializer::{AnsiSerializer, serialize};
pub use self::strip::{strip_ansi_codes, unfence};
pub use self::style::{AnsiSelectGraphicRendition, SGRParameter};
