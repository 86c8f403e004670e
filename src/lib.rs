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

//! An incremental, zero-copy HTTP/1.1 request lexer.
//!
//! The lexer performs no I/O and no allocation. The caller reads bytes off a
//! connection into a buffer of its choosing and pulls tokens out one at a
//! time with [`Lexer::execute()`](http1/struct.Lexer.html#method.execute).
//! Every token borrows its data from the caller's buffer, and the lexer can
//! be suspended and resumed at any byte boundary.

#![crate_name = "http_lex"]

#[macro_use]
extern crate byte_slice;

#[macro_use]
pub mod byte;

#[macro_use]
pub mod fsm;

pub mod http1;

/// Major version.
pub const VERSION_MAJOR: &'static str = env!("CARGO_PKG_VERSION_MAJOR");

/// Minor version.
pub const VERSION_MINOR: &'static str = env!("CARGO_PKG_VERSION_MINOR");

/// Patch version.
pub const VERSION_PATCH: &'static str = env!("CARGO_PKG_VERSION_PATCH");
