// +-----------------------------------------------------------------------------------------------+
// | Copyright 2016 Sean Kerr                                                                      |
// |                                                                                               |
// | Licensed under the Apache License, Version 2.0 (the "License");                               |
// | you may not use this file except in compliance with the License.                              |
// | You may obtain a copy of the License at                                                       |
// |                                                                                               |
// |  http://www.apache.org/licenses/LICENSE-2.0                                                   |
// |                                                                                               |
// | Unless required by applicable law or agreed to in writing, software                           |
// | distributed under the License is distributed on an "AS IS" BASIS,                             |
// | WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.                      |
// | See the License for the specific language governing permissions and                           |
// | limitations under the License.                                                                |
// +-----------------------------------------------------------------------------------------------+

//! Framing header matcher.

/// `Connection` header name.
pub const CONNECTION: &'static [u8] = b"connection";

/// `Content-Length` header name.
pub const CONTENT_LENGTH: &'static [u8] = b"content-length";

/// `Transfer-Encoding` header name.
pub const TRANSFER_ENCODING: &'static [u8] = b"transfer-encoding";

/// `Upgrade` header name.
pub const UPGRADE: &'static [u8] = b"upgrade";

/// `chunked` transfer coding.
pub const CHUNKED: &'static [u8] = b"chunked";

/// `keep-alive` connection option.
pub const KEEP_ALIVE: &'static [u8] = b"keep-alive";

/// `close` connection option.
pub const CLOSE: &'static [u8] = b"close";

/// Incremental matcher for the headers that affect message framing.
///
/// Header bytes are matched one at a time, lower-cased, as they are scanned
/// off the stream, so header recognition never requires buffering a name or
/// value. Any mismatch collapses the matcher to `Anything` for the rest of
/// the header line.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum HeaderState {
    /// The header does not affect framing.
    Anything,

    /// Matched `c`; could become `connection` or `content-length`.
    FieldC,

    /// Matched `co`.
    FieldCo,

    /// Matched `con`.
    FieldCon,

    /// Matching `connection` with `usize` bytes matched.
    FieldConnection(usize),

    /// Matching `content-length` with `usize` bytes matched.
    FieldContentLength(usize),

    /// Matching `transfer-encoding` with `usize` bytes matched.
    FieldTransferEncoding(usize),

    /// Matching `upgrade` with `usize` bytes matched.
    FieldUpgrade(usize),

    /// Matching a `chunked` transfer coding with `usize` bytes matched.
    ValueChunked(usize),

    /// Matching a `close` connection option with `usize` bytes matched.
    ValueClose(usize),

    /// Collecting decimal digits of a content length value.
    ValueContentLength,

    /// Matching a `keep-alive` connection option with `usize` bytes matched.
    ValueKeepAlive(usize)
}

impl HeaderState {
    /// Start matching from the first lower-cased byte of a header field name.
    pub fn first_field_byte(byte: u8) -> HeaderState {
        match byte {
            b'c' => HeaderState::FieldC,
            b't' => HeaderState::FieldTransferEncoding(1),
            b'u' => HeaderState::FieldUpgrade(1),
            _    => HeaderState::Anything
        }
    }

    /// Advance the matcher with one lower-cased header field name byte.
    pub fn on_field_byte(self, byte: u8) -> HeaderState {
        match self {
            HeaderState::FieldC => {
                if byte == b'o' {
                    HeaderState::FieldCo
                } else {
                    HeaderState::Anything
                }
            },
            HeaderState::FieldCo => {
                if byte == b'n' {
                    HeaderState::FieldCon
                } else {
                    HeaderState::Anything
                }
            },
            HeaderState::FieldCon => {
                match byte {
                    b'n' => HeaderState::FieldConnection(4),
                    b't' => HeaderState::FieldContentLength(4),
                    _    => HeaderState::Anything
                }
            },
            HeaderState::FieldConnection(index) => {
                advance(CONNECTION, index, byte, HeaderState::FieldConnection)
            },
            HeaderState::FieldContentLength(index) => {
                advance(CONTENT_LENGTH, index, byte, HeaderState::FieldContentLength)
            },
            HeaderState::FieldTransferEncoding(index) => {
                advance(TRANSFER_ENCODING, index, byte, HeaderState::FieldTransferEncoding)
            },
            HeaderState::FieldUpgrade(index) => {
                advance(UPGRADE, index, byte, HeaderState::FieldUpgrade)
            },
            _ => {
                HeaderState::Anything
            }
        }
    }

    /// Collapse the matcher at the field/value separating colon.
    ///
    /// The state survives only if the entire field name matched.
    pub fn finish_field(self) -> HeaderState {
        match self {
            HeaderState::FieldConnection(index)
            if index == CONNECTION.len() => {
                self
            },
            HeaderState::FieldContentLength(index)
            if index == CONTENT_LENGTH.len() => {
                self
            },
            HeaderState::FieldTransferEncoding(index)
            if index == TRANSFER_ENCODING.len() => {
                self
            },
            HeaderState::FieldUpgrade(index)
            if index == UPGRADE.len() => {
                self
            },
            _ => {
                HeaderState::Anything
            }
        }
    }

    /// Advance the matcher with one lower-cased header value byte.
    pub fn on_value_byte(self, byte: u8) -> HeaderState {
        match self {
            HeaderState::ValueChunked(index) => {
                advance(CHUNKED, index, byte, HeaderState::ValueChunked)
            },
            HeaderState::ValueClose(index) => {
                advance(CLOSE, index, byte, HeaderState::ValueClose)
            },
            HeaderState::ValueKeepAlive(index) => {
                advance(KEEP_ALIVE, index, byte, HeaderState::ValueKeepAlive)
            },
            other => {
                other
            }
        }
    }
}

// Compare `byte` against `literal[index]`, advancing the match on success.
fn advance(literal: &'static [u8], index: usize, byte: u8,
           state: fn(usize) -> HeaderState)
-> HeaderState {
    if index < literal.len() && literal[index] == byte {
        state(index + 1)
    } else {
        HeaderState::Anything
    }
}
