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

//! HTTP 1.x lexer errors.

use std::fmt;

/// Lexer errors.
///
/// Errors are fatal. Once `Lexer::execute()` has returned one, the lexer is
/// dead and the connection should be closed.
#[derive(Clone,Copy,PartialEq)]
pub enum LexerError {
    /// Invalid byte within a chunk extension.
    ChunkExtension(u8),

    /// Invalid byte within a chunk size.
    ChunkSize(u8),

    /// Invalid byte within a content length value.
    ContentLength(u8),

    /// Invalid byte within an expected CRLF sequence.
    CrlfSequence(u8),

    /// The lexer was used again after it returned an error.
    Dead,

    /// Invalid byte within a header field name.
    HeaderField(u8),

    /// Invalid byte within a request method.
    Method(u8),

    /// Invalid byte within a request URL.
    Url(u8),

    /// Invalid byte within a request HTTP version.
    Version(u8)
}

impl fmt::Debug for LexerError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LexerError::ChunkExtension(byte) => {
                write!(formatter, "LexerError::ChunkExtension(Invalid chunk extension on byte {})", byte)
            },
            LexerError::ChunkSize(byte) => {
                write!(formatter, "LexerError::ChunkSize(Invalid chunk size on byte {})", byte)
            },
            LexerError::ContentLength(byte) => {
                write!(formatter, "LexerError::ContentLength(Invalid content length on byte {})", byte)
            },
            LexerError::CrlfSequence(byte) => {
                write!(formatter, "LexerError::CrlfSequence(Invalid CRLF sequence on byte {})", byte)
            },
            LexerError::Dead => {
                write!(formatter, "LexerError::Dead(Lexer is dead)")
            },
            LexerError::HeaderField(byte) => {
                write!(formatter, "LexerError::HeaderField(Invalid header field on byte {})", byte)
            },
            LexerError::Method(byte) => {
                write!(formatter, "LexerError::Method(Invalid method on byte {})", byte)
            },
            LexerError::Url(byte) => {
                write!(formatter, "LexerError::Url(Invalid URL on byte {})", byte)
            },
            LexerError::Version(byte) => {
                write!(formatter, "LexerError::Version(Invalid HTTP version on byte {})", byte)
            }
        }
    }
}

impl fmt::Display for LexerError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LexerError::ChunkExtension(byte) => {
                write!(formatter, "Invalid chunk extension on byte {}", byte)
            },
            LexerError::ChunkSize(byte) => {
                write!(formatter, "Invalid chunk size on byte {}", byte)
            },
            LexerError::ContentLength(byte) => {
                write!(formatter, "Invalid content length on byte {}", byte)
            },
            LexerError::CrlfSequence(byte) => {
                write!(formatter, "Invalid CRLF sequence on byte {}", byte)
            },
            LexerError::Dead => {
                write!(formatter, "Lexer is dead")
            },
            LexerError::HeaderField(byte) => {
                write!(formatter, "Invalid header field on byte {}", byte)
            },
            LexerError::Method(byte) => {
                write!(formatter, "Invalid method on byte {}", byte)
            },
            LexerError::Url(byte) => {
                write!(formatter, "Invalid URL on byte {}", byte)
            },
            LexerError::Version(byte) => {
                write!(formatter, "Invalid HTTP version on byte {}", byte)
            }
        }
    }
}
