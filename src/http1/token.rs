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

//! HTTP 1.x lexer tokens.

use std::fmt;

/// Token kinds.
#[derive(Clone,Copy,Debug,PartialEq)]
#[repr(u8)]
pub enum TokenKind {
    /// The stream was exhausted before a token could be completed. Lex again
    /// once more bytes have been read.
    Eagain,

    /// The connection is finished. After a protocol upgrade the token data
    /// holds the remaining non-HTTP bytes; otherwise it is empty.
    Eof,

    /// A new message is starting.
    MsgStart,

    /// Request method.
    Method,

    /// Request URL.
    Url,

    /// Header field name.
    Field,

    /// Header field value.
    Value,

    /// The header section is finished and body framing has been decided.
    HeaderEnd,

    /// A segment of message body data.
    Body,

    /// The current message is finished.
    MsgEnd
}

/// A single lexed unit borrowed from the caller's stream.
#[derive(Clone,Copy,PartialEq)]
pub struct Token<'a> {
    /// Token data.
    data: &'a [u8],

    /// Stream index one past the last consumed byte.
    end: usize,

    /// Token kind.
    kind: TokenKind,

    /// Indicates that the token was cut short by end-of-stream.
    partial: bool
}

impl<'a> Token<'a> {
    /// Create a new `Token`.
    pub fn new(kind: TokenKind, data: &'a [u8], end: usize, partial: bool)
    -> Token<'a> {
        Token {
            data:    data,
            end:     end,
            kind:    kind,
            partial: partial
        }
    }

    /// Token data.
    ///
    /// Dataless kinds such as `MsgStart`, `HeaderEnd`, and `MsgEnd` carry an
    /// empty slice.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Stream index one past the last byte this call consumed.
    ///
    /// Resume lexing with `&stream[token.end()..]`.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Token kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Indicates that the token was cut short by end-of-stream, and that the
    /// next token of the same kind continues it.
    pub fn is_partial(&self) -> bool {
        self.partial
    }
}

impl<'a> fmt::Debug for Token<'a> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "Token({:?}, {:?}, end: {}, partial: {})",
            self.kind,
            String::from_utf8_lossy(self.data),
            self.end,
            self.partial
        )
    }
}
