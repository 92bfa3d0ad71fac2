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

/// Opening fence of a Discord ANSI code block, including its newline.
pub const FENCE_OPEN: &str = "```ansi\n";

/// Closing fence of a Discord ANSI code block, including the preceding newline.
pub const FENCE_CLOSE: &str = "\n```";

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Final byte of a Select Graphic Rendition sequence.
pub const SGR_FINAL: char = 'm';

