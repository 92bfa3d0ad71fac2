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

use crate::config::AnsiConfig;
use crate::result::{AnsiCodecError, AnsiCodecResult};
use crate::serializer::AnsiSerializer;
use ansiscribe_document::Document;
use tokio_util::bytes::BytesMut;
use tokio_util::codec::Encoder;
use tracing::instrument;

/// Encoder writing serialized documents into a byte stream.
///
/// `AnsiCodec` implements the tokio_util [`Encoder`] trait so documents can be
/// sent through a `FramedWrite` sink, for example to a clipboard helper process
/// or a socket.
#[derive(Clone, Debug, Default)]
pub struct AnsiCodec {
    serializer: AnsiSerializer,
}

impl AnsiCodec {
    /// Creates a new codec with the given configuration.
    pub fn new(config: AnsiConfig) -> Self {
        Self {
            serializer: AnsiSerializer::new(config),
        }
    }

    /// Get a reference to the serializer
    pub fn serializer(&self) -> &AnsiSerializer {
        &self.serializer
    }
}

impl Encoder<&Document> for AnsiCodec {
    type Error = AnsiCodecError;

    #[instrument(skip_all)]
    fn encode(&mut self, item: &Document, dst: &mut BytesMut) -> AnsiCodecResult<()> {
        dst.reserve(self.serializer.len(item));
        self.serializer.encode(item, dst)?;
        Ok(())
    }
}
