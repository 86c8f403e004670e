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

//! HTTP 1.x request lexer, tokens, states, and errors.
//!
//! Each message produces the token sequence:
//!
//! ```text
//! MsgStart Method Url
//! (Field Value)*
//! HeaderEnd
//! Body*
//! (Field Value)*
//! MsgEnd
//! ```
//!
//! with the second `(Field Value)*` group present only after a chunked body
//! that carries trailing headers. The sequence repeats for as long as
//! keep-alive holds, then ends with a single `Eof`.

mod header_state;
mod lexer;
mod lexer_error;
mod lexer_state;
mod token;

pub use self::lexer::Lexer;
pub use self::lexer_error::LexerError;
pub use self::lexer_state::LexerState;
pub use self::token::{ Token, TokenKind };

#[cfg(test)]
mod test;
