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

//! Byte verification functions.

/// Lower-case an alphabetical byte.
macro_rules! lower {
    ($byte:expr) => (
        $byte | 0x20
    );
}

/// Indicates that a byte is a decimal digit.
macro_rules! is_digit {
    ($byte:expr) => (
        $byte > 0x2F && $byte < 0x3A
    );
}

/// Indicates that a byte is allowed within a request method.
#[inline]
pub fn is_method_char(byte: u8) -> bool {
       (byte > 0x40 && byte < 0x5B)
    || (byte > 0x60 && byte < 0x7B)
    || byte == b'-'
}

/// Indicates that a byte is allowed within a header field name.
#[inline]
pub fn is_field_char(byte: u8) -> bool {
       (byte > 0x40 && byte < 0x5B)
    || (byte > 0x60 && byte < 0x7B)
    || (byte > 0x2F && byte < 0x3A)
    || byte == b'-'
}

/// Indicates that a byte is allowed within a chunk extension.
#[inline]
pub fn is_chunk_extension_char(byte: u8) -> bool {
       (byte > 0x40 && byte < 0x5B)
    || (byte > 0x60 && byte < 0x7B)
    || (byte > 0x2F && byte < 0x3A)
    || byte == b'='
    || byte == b' '
    || byte == b';'
}

/// Indicates that a byte is allowed within a request URL.
///
/// This accepts all visible characters plus the non-ASCII range `0x80` thru
/// `0xFF`, and rejects control characters, SPC `0x20`, DEL `0x7F`, and:
///
/// `"`, `\`, `^`, `{`, `|`, `}`
#[inline]
pub fn is_url_char(byte: u8) -> bool {
    [

    // NUL SOH    STX    ETX    EOT    ENQ    ACK    BEL    BS     TAB
    false, false, false, false, false, false, false, false, false, false,

    // LF  VT     FF     CR     SO     SI     DLE    DC1    DC2    DC3
    false, false, false, false, false, false, false, false, false, false,

    // DC4 NAK    SYN    ETB    CAN    EM     SUB    ESC    FS     GS
    false, false, false, false, false, false, false, false, false, false,

    // RS  US
    false, false,

    // space
    false,

    // !   "      #      $      %      &      '      (      )      *
    true,  false, true,  true,  true,  true,  true,  true,  true,  true,

    // +   ,      -      .      /
    true,  true,  true,  true,  true,

    // 0   1      2      3      4      5      6      7      8      9
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // :   ;      <      =      >      ?      @
    true,  true,  true,  true,  true,  true,  true,

    // A   B      C      D      E      F      G      H      I      J
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // K   L      M      N      O      P      Q      R      S      T
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // U   V      W      X      Y      Z
    true,  true,  true,  true,  true,  true,

    // [   \      ]      ^      _      `
    true,  false, true,  false, true,  true,

    // a   b      c      d      e      f      g      h      i      j
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // k   l      m      n      o      p      q      r      s      t
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // u   v      w      x      y      z
    true,  true,  true,  true,  true,  true,

    // {   |      }      ~
    false, false, false, true,

    // DEL
    false,

    // 128 - 255
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true

    ][byte as usize]
}

/// Convert a hex byte to its decimal value.
#[inline]
pub fn hex_to_byte(byte: u8) -> Option<u8> {
    if byte > 0x2F && byte < 0x3A {
        Some(byte - b'0')
    } else if byte > 0x40 && byte < 0x47 {
        Some(byte - 0x37)
    } else if byte > 0x60 && byte < 0x67 {
        Some(byte - 0x57)
    } else {
        None
    }
}
