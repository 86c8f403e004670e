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

//! HTTP 1.x lexer states.

/// Lexer states.
#[derive(Clone,Copy,Debug,PartialEq)]
#[repr(u8)]
pub enum LexerState {
    /// An error was returned from a call to `Lexer::execute()`.
    Dead,

    // ---------------------------------------------------------------------------------------------
    // REQUEST LINE
    // ---------------------------------------------------------------------------------------------

    /// Stripping empty lines before the next request.
    RequestStart,

    /// Lexing request method.
    RequestMethod,

    /// Lexing request URL byte 1.
    RequestUrl1,

    /// Lexing request URL byte 2+.
    RequestUrl2,

    /// Lexing request HTTP version byte 1.
    RequestHttp1,

    /// Lexing request HTTP version byte 2.
    RequestHttp2,

    /// Lexing request HTTP version byte 3.
    RequestHttp3,

    /// Lexing request HTTP version byte 4.
    RequestHttp4,

    /// Lexing request HTTP version byte 5.
    RequestHttp5,

    /// Lexing request HTTP major version.
    RequestVersionMajor,

    /// Lexing period between HTTP major and minor versions.
    RequestVersionPeriod,

    /// Lexing request HTTP minor version.
    RequestVersionMinor,

    /// Lexing carriage return after request HTTP minor version.
    RequestLineCr,

    /// Lexing line feed after request line.
    RequestLineLf,

    // ---------------------------------------------------------------------------------------------
    // HEADERS
    // ---------------------------------------------------------------------------------------------

    /// Lexing first byte of header field name.
    HeaderFieldStart,

    /// Lexing header field name.
    HeaderField,

    /// Stripping linear white space before header field value.
    HeaderValueStart,

    /// Lexing header field value.
    HeaderValue,

    /// Lexing line feed after header field value.
    HeaderValueLf,

    /// Lexing line feed terminating the header section.
    HeaderEndLf,

    // ---------------------------------------------------------------------------------------------
    // BODY
    // ---------------------------------------------------------------------------------------------

    /// Lexing body data by content length.
    IdentityBody,

    /// Lexing chunk length byte 1.
    ChunkLength1,

    /// Lexing chunk length byte 2+.
    ChunkLength2,

    /// Lexing chunk extension.
    ChunkExtension,

    /// Lexing line feed after chunk length.
    ChunkLengthLf,

    /// Lexing chunk data.
    ChunkData,

    /// Lexing carriage return after chunk data.
    ChunkDataCr,

    /// Lexing line feed after chunk data.
    ChunkDataLf,

    // ---------------------------------------------------------------------------------------------
    // FINISHED
    // ---------------------------------------------------------------------------------------------

    /// Lexing the current message has finished.
    MessageEnd,

    /// Lexing the connection has finished.
    EndOfStream,

    /// The connection was switched to another protocol.
    Upgraded
}
