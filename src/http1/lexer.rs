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

//! HTTP 1.x request lexer.

use byte::{ hex_to_byte, is_chunk_extension_char, is_field_char, is_method_char, is_url_char };
use fsm::LexerValue;
use http1::header_state::{ HeaderState, CHUNKED, CLOSE, KEEP_ALIVE };
use http1::lexer_error::LexerError;
use http1::lexer_state::LexerState;
use http1::token::{ Token, TokenKind };

use byte_slice::ByteStream;

/// Connection is keep-alive.
const F_CONNECTION_KEEP_ALIVE: u8 = 1 << 0;

/// Connection is close.
const F_CONNECTION_CLOSE: u8 = 1 << 1;

/// Body uses chunked transfer encoding.
const F_TRANSFER_ENCODING_CHUNKED: u8 = 1 << 2;

/// Lexing trailing headers after a chunked body.
const F_TRAILER: u8 = 1 << 3;

/// Message requested a protocol upgrade.
const F_UPGRADE: u8 = 1 << 4;

// -------------------------------------------------------------------------------------------------

/// Incremental HTTP 1.x request lexer.
///
/// One `Lexer` tracks one connection. It holds no buffers; every call to
/// [`execute()`](#method.execute) scans the caller's bytes and returns one
/// borrowed [`Token`](struct.Token.html).
pub struct Lexer {
    /// Length of the chunk currently being lexed.
    chunk_length: u64,

    /// Chunk data bytes lexed so far.
    chunk_read: u64,

    /// Message body length, when a content length header was given.
    content_length: Option<u64>,

    /// Body bytes lexed so far.
    content_read: u64,

    /// Lexer flags.
    flags: u8,

    /// Framing header matcher state.
    header_state: HeaderState,

    /// Current state.
    state: LexerState,

    /// HTTP major version.
    version_major: u8,

    /// HTTP minor version.
    version_minor: u8
}

impl Lexer {
    /// Create a new `Lexer` awaiting the first request.
    pub fn new() -> Lexer {
        Lexer {
            chunk_length:   0,
            chunk_read:     0,
            content_length: None,
            content_read:   0,
            flags:          0,
            header_state:   HeaderState::Anything,
            state:          LexerState::RequestStart,
            version_major:  0,
            version_minor:  9
        }
    }

    /// Reset the `Lexer` back to its initial state, awaiting a new
    /// connection.
    pub fn reset(&mut self) {
        self.state = LexerState::RequestStart;

        self.reset_message();
    }

    // Reset per-message details.
    fn reset_message(&mut self) {
        self.chunk_length   = 0;
        self.chunk_read     = 0;
        self.content_length = None;
        self.content_read   = 0;
        self.flags          = 0;
        self.header_state   = HeaderState::Anything;
        self.version_major  = 0;
        self.version_minor  = 9;
    }

    /// Message body length, when the current message gave a content length
    /// header.
    ///
    /// Meaningful from the `HeaderEnd` token until the end of the message.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Indicates that the current message requested a protocol upgrade.
    pub fn is_upgrade(&self) -> bool {
        has_flag!(self, F_UPGRADE)
    }

    /// Indicates that the connection stays open for another message once the
    /// current one ends.
    ///
    /// HTTP/1.1 defaults to keep-alive unless `Connection: close` was given.
    /// Earlier versions default to close unless `Connection: keep-alive` was
    /// given.
    pub fn should_keep_alive(&self) -> bool {
        if self.version_major == 1 && self.version_minor == 1 {
            !has_flag!(self, F_CONNECTION_CLOSE)
        } else {
            has_flag!(self, F_CONNECTION_KEEP_ALIVE)
        }
    }

    /// Current state.
    pub fn state(&self) -> LexerState {
        self.state
    }

    /// HTTP major version.
    ///
    /// A request line without a version lexes as `0.9`.
    pub fn version_major(&self) -> u8 {
        self.version_major
    }

    /// HTTP minor version.
    pub fn version_minor(&self) -> u8 {
        self.version_minor
    }

    /// Lex the next token out of `stream`.
    ///
    /// Bytes are consumed until one token is complete or the stream is
    /// exhausted, whichever comes first. The stream is never consumed past
    /// the end of the returned token, so the next call resumes with
    /// `&stream[token.end()..]`.
    ///
    /// An `Eagain` token means the stream was exhausted between tokens; feed
    /// more bytes in. A token with `is_partial()` set was cut short by
    /// end-of-stream and continues in the next call. Errors are fatal and
    /// leave the lexer dead.
    #[inline]
    pub fn execute<'a>(&mut self, stream: &'a [u8])
    -> Result<Token<'a>, LexerError> {
        let mut context = ByteStream::new(stream);

        loop {
            match self.dispatch(&mut context) {
                Ok(LexerValue::Continue) => {
                },
                Ok(LexerValue::Exit(token)) => {
                    return Ok(token);
                },
                Err(error) => {
                    self.state = LexerState::Dead;

                    return Err(error);
                }
            }
        }
    }

    #[inline]
    fn dispatch<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        match self.state {
            LexerState::RequestStart         => self.request_start(context),
            LexerState::RequestMethod        => self.request_method(context),
            LexerState::RequestUrl1          => self.request_url1(context),
            LexerState::RequestUrl2          => self.request_url2(context),
            LexerState::RequestHttp1         => self.request_http1(context),
            LexerState::RequestHttp2         => self.request_http2(context),
            LexerState::RequestHttp3         => self.request_http3(context),
            LexerState::RequestHttp4         => self.request_http4(context),
            LexerState::RequestHttp5         => self.request_http5(context),
            LexerState::RequestVersionMajor  => self.request_version_major(context),
            LexerState::RequestVersionPeriod => self.request_version_period(context),
            LexerState::RequestVersionMinor  => self.request_version_minor(context),
            LexerState::RequestLineCr        => self.request_line_cr(context),
            LexerState::RequestLineLf        => self.request_line_lf(context),
            LexerState::HeaderFieldStart     => self.header_field_start(context),
            LexerState::HeaderField          => self.header_field(context),
            LexerState::HeaderValueStart     => self.header_value_start(context),
            LexerState::HeaderValue          => self.header_value(context),
            LexerState::HeaderValueLf        => self.header_value_lf(context),
            LexerState::HeaderEndLf          => self.header_end_lf(context),
            LexerState::IdentityBody         => self.identity_body(context),
            LexerState::ChunkLength1         => self.chunk_length1(context),
            LexerState::ChunkLength2         => self.chunk_length2(context),
            LexerState::ChunkExtension       => self.chunk_extension(context),
            LexerState::ChunkLengthLf        => self.chunk_length_lf(context),
            LexerState::ChunkData            => self.chunk_data(context),
            LexerState::ChunkDataCr          => self.chunk_data_cr(context),
            LexerState::ChunkDataLf          => self.chunk_data_lf(context),
            LexerState::MessageEnd           => self.message_end(context),
            LexerState::EndOfStream          => self.end_of_stream(context),
            LexerState::Upgraded             => self.upgraded(context),
            LexerState::Dead                 => Err(LexerError::Dead)
        }
    }

    // ---------------------------------------------------------------------------------------------
    // REQUEST LINE STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn request_start<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            if is_method_char(context.byte) {
                // the first method byte stays unconsumed so the method token
                // starts cleanly on the next call
                self.reset_message();

                bs_replay!(context);

                set_state!(self, RequestMethod);

                exit_point!(context, MsgStart);
            } else if context.byte != b' '
                   && context.byte != b'\r'
                   && context.byte != b'\n' {
                return Err(LexerError::Method(context.byte));
            }
        }
    }

    #[inline]
    fn request_method<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        loop {
            if bs_is_eos!(context) {
                exit_partial!(context, Method);
            }

            bs_next!(context);

            if context.byte == b' ' {
                // the space is re-examined by the URL state
                bs_replay!(context);

                set_state!(self, RequestUrl1);

                exit_token!(context, Method, bs_slice!(context));
            } else if !is_method_char(context.byte) {
                return Err(LexerError::Method(context.byte));
            }
        }
    }

    #[inline]
    fn request_url1<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            if context.byte == b' ' {
                continue;
            }

            if is_url_char(context.byte) {
                bs_replay!(context);

                transition!(self, context, RequestUrl2);
            }

            return Err(LexerError::Url(context.byte));
        }
    }

    #[inline]
    fn request_url2<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        loop {
            if bs_is_eos!(context) {
                exit_partial!(context, Url);
            }

            bs_next!(context);

            if !is_url_char(context.byte) {
                // the terminator is re-examined by the version states
                bs_replay!(context);

                set_state!(self, RequestHttp1);

                exit_token!(context, Url, bs_slice!(context));
            }
        }
    }

    #[inline]
    fn request_http1<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            match context.byte {
                b' ' => {
                },
                b'H' => {
                    transition!(self, context, RequestHttp2);
                },
                b'\r' => {
                    // HTTP/0.9 style request line
                    transition!(self, context, RequestLineLf);
                },
                b'\n' => {
                    transition!(self, context, HeaderFieldStart);
                },
                _ => {
                    return Err(LexerError::Version(context.byte));
                }
            }
        }
    }

    #[inline]
    fn request_http2<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'T' {
            transition!(self, context, RequestHttp3);
        }

        Err(LexerError::Version(context.byte))
    }

    #[inline]
    fn request_http3<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'T' {
            transition!(self, context, RequestHttp4);
        }

        Err(LexerError::Version(context.byte))
    }

    #[inline]
    fn request_http4<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'P' {
            transition!(self, context, RequestHttp5);
        }

        Err(LexerError::Version(context.byte))
    }

    #[inline]
    fn request_http5<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'/' {
            // an explicit version replaces the implied 0.9
            self.version_major = 0;
            self.version_minor = 0;

            transition!(self, context, RequestVersionMajor);
        }

        Err(LexerError::Version(context.byte))
    }

    #[inline]
    fn request_version_major<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_next!(context);

        if is_digit!(context.byte) {
            self.version_major = context.byte - b'0';

            transition!(self, context, RequestVersionPeriod);
        }

        Err(LexerError::Version(context.byte))
    }

    #[inline]
    fn request_version_period<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'.' {
            transition!(self, context, RequestVersionMinor);
        }

        Err(LexerError::Version(context.byte))
    }

    #[inline]
    fn request_version_minor<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_next!(context);

        if is_digit!(context.byte) {
            self.version_minor = context.byte - b'0';

            transition!(self, context, RequestLineCr);
        }

        Err(LexerError::Version(context.byte))
    }

    #[inline]
    fn request_line_cr<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            match context.byte {
                b' ' => {
                },
                b'\r' => {
                    transition!(self, context, RequestLineLf);
                },
                b'\n' => {
                    transition!(self, context, HeaderFieldStart);
                },
                _ => {
                    return Err(LexerError::CrlfSequence(context.byte));
                }
            }
        }
    }

    #[inline]
    fn request_line_lf<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'\n' {
            transition!(self, context, HeaderFieldStart);
        }

        Err(LexerError::CrlfSequence(context.byte))
    }

    // ---------------------------------------------------------------------------------------------
    // HEADER STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn header_field_start<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            if context.byte == b'\r' {
                transition!(self, context, HeaderEndLf);
            } else if context.byte == b'\n' {
                return self.headers_finished(context);
            } else if context.byte == b' ' {
                // stray spaces before a field name
            } else if is_field_char(context.byte) {
                self.header_state = if has_flag!(self, F_TRAILER) {
                    // trailing headers can no longer affect framing
                    HeaderState::Anything
                } else {
                    HeaderState::first_field_byte(lower!(context.byte))
                };

                set_state!(self, HeaderField);

                bs_mark!(context, context.stream_index - 1);

                return Ok(LexerValue::Continue);
            } else {
                // also rejects the obsolete line folding syntax
                return Err(LexerError::HeaderField(context.byte));
            }
        }
    }

    #[inline]
    fn header_field<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        loop {
            if bs_is_eos!(context) {
                exit_partial!(context, Field);
            }

            bs_next!(context);

            if context.byte == b':' {
                // the token ends at the colon, but the colon is consumed
                self.header_state = self.header_state.finish_field();

                set_state!(self, HeaderValueStart);

                exit_token!(context, Field, bs_slice_ignore!(context));
            }

            if !is_field_char(context.byte) {
                return Err(LexerError::HeaderField(context.byte));
            }

            self.header_state = self.header_state.on_field_byte(lower!(context.byte));
        }
    }

    #[inline]
    fn header_value_start<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            if context.byte == b' ' {
                continue;
            }

            bs_replay!(context);

            // the first value byte selects the literal the value is matched
            // against, if any
            self.header_state = match self.header_state {
                HeaderState::FieldConnection(_) => {
                    match lower!(context.byte) {
                        b'k' => HeaderState::ValueKeepAlive(0),
                        b'c' => HeaderState::ValueClose(0),
                        _    => HeaderState::Anything
                    }
                },
                HeaderState::FieldContentLength(_) => {
                    self.content_length = Some(0);

                    HeaderState::ValueContentLength
                },
                HeaderState::FieldTransferEncoding(_) => {
                    HeaderState::ValueChunked(0)
                },
                HeaderState::FieldUpgrade(_) => {
                    set_flag!(self, F_UPGRADE);

                    HeaderState::Anything
                },
                other => {
                    other
                }
            };

            transition!(self, context, HeaderValue);
        }
    }

    #[inline]
    fn header_value<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        loop {
            if bs_is_eos!(context) {
                exit_partial!(context, Value);
            }

            bs_next!(context);

            if context.byte == b'\r' || context.byte == b'\n' {
                // the token ends at the line break, but the first line break
                // byte is consumed
                self.finish_value();

                if context.byte == b'\r' {
                    set_state!(self, HeaderValueLf);
                } else {
                    set_state!(self, HeaderFieldStart);
                }

                exit_token!(context, Value, bs_slice_ignore!(context));
            }

            match self.header_state {
                HeaderState::Anything => {
                },
                HeaderState::ValueContentLength => {
                    if !is_digit!(context.byte) {
                        return Err(LexerError::ContentLength(context.byte));
                    }

                    let length = self.content_length
                                     .unwrap_or(0)
                                     .checked_mul(10)
                                     .and_then(|length| {
                                         length.checked_add((context.byte - b'0') as u64)
                                     });

                    match length {
                        Some(length) => {
                            self.content_length = Some(length);
                        },
                        None => {
                            return Err(LexerError::ContentLength(context.byte));
                        }
                    }
                },
                _ => {
                    self.header_state = self.header_state.on_value_byte(lower!(context.byte));
                }
            }
        }
    }

    #[inline]
    fn header_value_lf<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'\n' {
            transition!(self, context, HeaderFieldStart);
        }

        Err(LexerError::CrlfSequence(context.byte))
    }

    #[inline]
    fn header_end_lf<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'\n' {
            return self.headers_finished(context);
        }

        Err(LexerError::CrlfSequence(context.byte))
    }

    // Runs once the empty line terminating a header section has been
    // consumed. Decides body framing; a trailing header section instead
    // routes straight to the end of the message.
    #[inline]
    fn headers_finished<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        if has_flag!(self, F_TRAILER) {
            // framing was decided before the chunked body
            set_state!(self, MessageEnd);

            return Ok(LexerValue::Continue);
        }

        self.content_read = 0;

        if has_flag!(self, F_UPGRADE) {
            // remaining bytes belong to the other protocol
            set_state!(self, MessageEnd);
        } else if has_flag!(self, F_TRANSFER_ENCODING_CHUNKED) {
            set_state!(self, ChunkLength1);
        } else {
            match self.content_length {
                Some(length) if length > 0 => {
                    set_state!(self, IdentityBody);
                },
                _ => {
                    set_state!(self, MessageEnd);
                }
            }
        }

        exit_point!(context, HeaderEnd);
    }

    // Runs at the end of a header value. A fully matched literal sets its
    // framing flag.
    fn finish_value(&mut self) {
        match self.header_state {
            HeaderState::ValueChunked(index) => {
                if index == CHUNKED.len() {
                    set_flag!(self, F_TRANSFER_ENCODING_CHUNKED);
                }
            },
            HeaderState::ValueClose(index) => {
                if index == CLOSE.len() {
                    set_flag!(self, F_CONNECTION_CLOSE);
                }
            },
            HeaderState::ValueKeepAlive(index) => {
                if index == KEEP_ALIVE.len() {
                    set_flag!(self, F_CONNECTION_KEEP_ALIVE);
                }
            },
            _ => {
            }
        }
    }

    // ---------------------------------------------------------------------------------------------
    // BODY STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn identity_body<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_mark!(context, context.stream_index);

        let remaining = match self.content_length {
            Some(length) => length - self.content_read,
            None         => 0
        };

        if bs_available!(context) as u64 >= remaining {
            // collect the rest of the body
            bs_collect_length!(context, remaining as usize);

            self.content_read += remaining;

            set_state!(self, MessageEnd);

            exit_token!(context, Body, bs_slice!(context));
        }

        // collect the rest of the stream
        self.content_read += bs_available!(context) as u64;

        bs_collect_length!(context, bs_available!(context));

        exit_partial!(context, Body);
    }

    #[inline]
    fn chunk_length1<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_next!(context);

        match hex_to_byte(context.byte) {
            Some(digit) => {
                self.chunk_length = digit as u64;
                self.chunk_read   = 0;

                transition!(self, context, ChunkLength2);
            },
            None => {
                Err(LexerError::ChunkSize(context.byte))
            }
        }
    }

    #[inline]
    fn chunk_length2<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            match hex_to_byte(context.byte) {
                Some(digit) => {
                    let length = self.chunk_length
                                     .checked_mul(16)
                                     .and_then(|length| {
                                         length.checked_add(digit as u64)
                                     });

                    match length {
                        Some(length) => {
                            self.chunk_length = length;
                        },
                        None => {
                            return Err(LexerError::ChunkSize(context.byte));
                        }
                    }
                },
                None => {
                    if context.byte == b'\r' {
                        transition!(self, context, ChunkLengthLf);
                    }

                    if is_chunk_extension_char(context.byte) {
                        transition!(self, context, ChunkExtension);
                    }

                    return Err(LexerError::ChunkSize(context.byte));
                }
            }
        }
    }

    #[inline]
    fn chunk_extension<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        loop {
            exit_if_eos!(context);
            bs_next!(context);

            if context.byte == b'\r' {
                transition!(self, context, ChunkLengthLf);
            }

            if !is_chunk_extension_char(context.byte) {
                return Err(LexerError::ChunkExtension(context.byte));
            }
        }
    }

    #[inline]
    fn chunk_length_lf<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'\n' {
            if self.chunk_length == 0 {
                // last chunk; trailing headers may follow
                set_flag!(self, F_TRAILER);

                transition!(self, context, HeaderFieldStart);
            }

            transition!(self, context, ChunkData);
        }

        Err(LexerError::CrlfSequence(context.byte))
    }

    #[inline]
    fn chunk_data<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_mark!(context, context.stream_index);

        let remaining = self.chunk_length - self.chunk_read;

        if bs_available!(context) as u64 >= remaining {
            // collect the rest of the chunk
            bs_collect_length!(context, remaining as usize);

            self.chunk_read += remaining;

            set_state!(self, ChunkDataCr);

            exit_token!(context, Body, bs_slice!(context));
        }

        // collect the rest of the stream
        self.chunk_read += bs_available!(context) as u64;

        bs_collect_length!(context, bs_available!(context));

        exit_partial!(context, Body);
    }

    #[inline]
    fn chunk_data_cr<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'\r' {
            transition!(self, context, ChunkDataLf);
        }

        Err(LexerError::CrlfSequence(context.byte))
    }

    #[inline]
    fn chunk_data_lf<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_if_eos!(context);
        bs_next!(context);

        if context.byte == b'\n' {
            transition!(self, context, ChunkLength1);
        }

        Err(LexerError::CrlfSequence(context.byte))
    }

    // ---------------------------------------------------------------------------------------------
    // FINISHED STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn message_end<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        if has_flag!(self, F_UPGRADE) {
            set_state!(self, Upgraded);
        } else if self.should_keep_alive() {
            set_state!(self, RequestStart);
        } else {
            set_state!(self, EndOfStream);
        }

        exit_point!(context, MsgEnd);
    }

    #[inline]
    fn end_of_stream<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        exit_point!(context, Eof);
    }

    #[inline]
    fn upgraded<'a>(&mut self, context: &mut ByteStream<'a>)
    -> Result<LexerValue<Token<'a>>, LexerError> {
        // everything left in the stream belongs to the other protocol
        bs_mark!(context, context.stream_index);
        bs_jump!(context, bs_available!(context));

        exit_token!(context, Eof, bs_slice!(context));
    }
}
