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

use http1::{ Lexer, LexerError, LexerState, TokenKind };

/// Build one expected `(kind, data)` entry.
macro_rules! tok {
    ($kind:ident) => (
        (TokenKind::$kind, vec![])
    );

    ($kind:ident, $data:expr) => (
        (TokenKind::$kind, $data.to_vec())
    );
}

/// Lex `stream` to completion, merging partial tokens into whole ones.
///
/// Lexing stops at `Eagain` on a fully consumed stream, or at `Eof`.
pub fn collect_tokens(lexer: &mut Lexer, stream: &[u8])
-> Vec<(TokenKind, Vec<u8>)> {
    feed(lexer, stream, stream.len())
}

/// Same as `collect_tokens()`, but delivering the stream at most `size`
/// bytes at a time.
pub fn feed(lexer: &mut Lexer, stream: &[u8], size: usize)
-> Vec<(TokenKind, Vec<u8>)> {
    let mut tokens:  Vec<(TokenKind, Vec<u8>)>    = Vec::new();
    let mut pending: Option<(TokenKind, Vec<u8>)> = None;
    let mut offset = 0;

    loop {
        let limit = if offset + size < stream.len() {
            offset + size
        } else {
            stream.len()
        };

        let token = match lexer.execute(&stream[offset..limit]) {
            Ok(token)  => token,
            Err(error) => panic!("feed() unexpected error: {}", error)
        };

        offset += token.end();

        if token.kind() == TokenKind::Eagain {
            if offset == stream.len() {
                break;
            }

            continue;
        }

        let (kind, data) = match pending.take() {
            Some((kind, mut data)) => {
                assert_eq!(
                    kind,
                    token.kind(),
                    "feed() partial token continued as a different kind"
                );

                data.extend_from_slice(token.data());

                (kind, data)
            },
            None => {
                (token.kind(), token.data().to_vec())
            }
        };

        if token.is_partial() {
            pending = Some((kind, data));
        } else {
            tokens.push((kind, data));
        }

        if token.kind() == TokenKind::Eof {
            break;
        }
    }

    assert!(
        pending.is_none(),
        "feed() stream ended inside a partial token"
    );

    tokens
}

/// Lex `stream` expecting `error`, which must leave the lexer dead.
pub fn assert_error(lexer: &mut Lexer, stream: &[u8], error: LexerError) {
    let mut offset = 0;

    loop {
        match lexer.execute(&stream[offset..]) {
            Ok(token) => {
                if token.kind() == TokenKind::Eagain
                || token.kind() == TokenKind::Eof {
                    panic!("assert_error() expected {:?}, got {:?}", error, token);
                }

                offset += token.end();
            },
            Err(error_) => {
                assert_eq!(error, error_);
                assert_eq!(LexerState::Dead, lexer.state());

                return;
            }
        }
    }
}

mod headers;
mod lifecycle;
