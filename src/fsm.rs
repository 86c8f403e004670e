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

//! Finite state machine macros and types.

/// Exit the lexer with an `Eagain` token at the current stream index.
macro_rules! exit_eagain {
    ($context:expr) => ({
        return Ok(LexerValue::Exit(Token::new(
            TokenKind::Eagain,
            &$context.stream[$context.stream_index..$context.stream_index],
            $context.stream_index,
            false
        )));
    });
}

/// Exit the lexer with an `Eagain` token if the stream is at end-of-stream.
macro_rules! exit_if_eos {
    ($context:expr) => ({
        if bs_is_eos!($context) {
            exit_eagain!($context);
        }
    });
}

/// Exit the lexer with a dataless token at the current stream index.
macro_rules! exit_point {
    ($context:expr, $kind:ident) => ({
        return Ok(LexerValue::Exit(Token::new(
            TokenKind::$kind,
            &$context.stream[$context.stream_index..$context.stream_index],
            $context.stream_index,
            false
        )));
    });
}

/// Exit the lexer with a completed data token.
macro_rules! exit_token {
    ($context:expr, $kind:ident, $data:expr) => ({
        return Ok(LexerValue::Exit(Token::new(
            TokenKind::$kind,
            $data,
            $context.stream_index,
            false
        )));
    });
}

/// Exit the lexer with a partial data token covering the marked bytes.
///
/// The next call continues the same token.
macro_rules! exit_partial {
    ($context:expr, $kind:ident) => ({
        return Ok(LexerValue::Exit(Token::new(
            TokenKind::$kind,
            bs_slice!($context),
            $context.stream_index,
            true
        )));
    });
}

/// Set the lexer state.
macro_rules! set_state {
    ($lexer:expr, $state:ident) => ({
        $lexer.state = LexerState::$state;
    });
}

/// Set the lexer state, mark the current stream index as the start of new
/// token data, and continue the lexer loop.
macro_rules! transition {
    ($lexer:expr, $context:expr, $state:ident) => ({
        set_state!($lexer, $state);

        bs_mark!($context, $context.stream_index);

        return Ok(LexerValue::Continue);
    });
}

/// Indicates that a lexer flag is set.
macro_rules! has_flag {
    ($lexer:expr, $flag:expr) => (
        $lexer.flags & $flag == $flag
    );
}

/// Set a lexer flag.
macro_rules! set_flag {
    ($lexer:expr, $flag:expr) => ({
        $lexer.flags |= $flag;
    });
}

// -------------------------------------------------------------------------------------------------

/// Lexing function return values.
pub enum LexerValue<T> {
    /// Continue the lexer loop.
    Continue,

    /// Exit the lexer loop with a token.
    Exit(T)
}
