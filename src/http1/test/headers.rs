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

use http1::*;
use http1::test::*;

#[test]
fn single() {
    let mut l = Lexer::new();

    assert_eq!(
        collect_tokens(&mut l, b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n"),
        vec![
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/"),
            tok!(Field, b"Host"),
            tok!(Value, b"example.com"),
            tok!(HeaderEnd),
            tok!(MsgEnd)
        ]
    );
}

#[test]
fn multiple() {
    let mut l = Lexer::new();

    assert_eq!(
        collect_tokens(
            &mut l,
            b"GET / HTTP/1.1\r\n\
              Host: example.com\r\n\
              Accept: */*\r\n\
              User-Agent: curl/7.51.0\r\n\
              \r\n"
        ),
        vec![
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/"),
            tok!(Field, b"Host"),
            tok!(Value, b"example.com"),
            tok!(Field, b"Accept"),
            tok!(Value, b"*/*"),
            tok!(Field, b"User-Agent"),
            tok!(Value, b"curl/7.51.0"),
            tok!(HeaderEnd),
            tok!(MsgEnd)
        ]
    );
}

#[test]
fn value_leading_space_stripped() {
    let mut l = Lexer::new();

    assert_eq!(
        collect_tokens(&mut l, b"GET / HTTP/1.1\r\nHost:     example.com\r\n\r\n"),
        vec![
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/"),
            tok!(Field, b"Host"),
            tok!(Value, b"example.com"),
            tok!(HeaderEnd),
            tok!(MsgEnd)
        ]
    );
}

#[test]
fn empty_value() {
    let mut l = Lexer::new();

    assert_eq!(
        collect_tokens(&mut l, b"GET / HTTP/1.1\r\nX-Empty:\r\n\r\n"),
        vec![
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/"),
            tok!(Field, b"X-Empty"),
            tok!(Value, b""),
            tok!(HeaderEnd),
            tok!(MsgEnd)
        ]
    );
}

#[test]
fn bare_lf_line_breaks() {
    let mut l = Lexer::new();

    assert_eq!(
        collect_tokens(&mut l, b"GET / HTTP/1.1\nHost: example.com\n\n"),
        vec![
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/"),
            tok!(Field, b"Host"),
            tok!(Value, b"example.com"),
            tok!(HeaderEnd),
            tok!(MsgEnd)
        ]
    );
}

#[test]
fn content_length_value() {
    let mut l = Lexer::new();

    // the body has not arrived yet; the length is known at HeaderEnd
    collect_tokens(&mut l, b"POST / HTTP/1.1\r\nContent-Length: 1234\r\n\r\n");

    assert_eq!(Some(1234), l.content_length());
}

#[test]
fn content_length_case_insensitive() {
    let mut l = Lexer::new();

    assert_eq!(
        collect_tokens(&mut l, b"POST / HTTP/1.1\r\nCONTENT-LENGTH: 5\r\n\r\nhello"),
        vec![
            tok!(MsgStart),
            tok!(Method, b"POST"),
            tok!(Url, b"/"),
            tok!(Field, b"CONTENT-LENGTH"),
            tok!(Value, b"5"),
            tok!(HeaderEnd),
            tok!(Body, b"hello"),
            tok!(MsgEnd)
        ]
    );
}

#[test]
fn framing_header_near_miss() {
    let mut l = Lexer::new();

    // one byte longer than the framing header; must lex as an ordinary
    // header and frame no body
    assert_eq!(
        collect_tokens(&mut l, b"GET / HTTP/1.1\r\nContent-Lengthy: 5\r\n\r\n"),
        vec![
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/"),
            tok!(Field, b"Content-Lengthy"),
            tok!(Value, b"5"),
            tok!(HeaderEnd),
            tok!(MsgEnd)
        ]
    );

    assert_eq!(None, l.content_length());
}

#[test]
fn framing_value_near_miss() {
    let mut l = Lexer::new();

    // "closed" is not "close"
    collect_tokens(&mut l, b"GET / HTTP/1.1\r\nConnection: closed\r\n\r\n");

    assert!(l.should_keep_alive());
}

#[test]
fn framing_value_trailing_space_defeats_match() {
    let mut l = Lexer::new();

    collect_tokens(&mut l, b"GET / HTTP/1.1\r\nConnection: close \r\n\r\n");

    assert!(l.should_keep_alive());
}

#[test]
fn connection_close() {
    let mut l = Lexer::new();

    collect_tokens(&mut l, b"GET / HTTP/1.1\r\nConnection: close\r\n\r\n");

    assert!(!l.should_keep_alive());
}

#[test]
fn connection_close_case_insensitive() {
    let mut l = Lexer::new();

    collect_tokens(&mut l, b"GET / HTTP/1.1\r\nConnection: CLOSE\r\n\r\n");

    assert!(!l.should_keep_alive());
}
