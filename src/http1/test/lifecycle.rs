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
fn pipelined() {
    let mut l = Lexer::new();

    assert_eq!(
        collect_tokens(
            &mut l,
            b"GET /one HTTP/1.1\r\n\r\n\
              GET /two HTTP/1.1\r\n\r\n"
        ),
        vec![
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/one"),
            tok!(HeaderEnd),
            tok!(MsgEnd),
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/two"),
            tok!(HeaderEnd),
            tok!(MsgEnd)
        ]
    );
}

#[test]
fn pipelined_with_body() {
    let mut l = Lexer::new();

    assert_eq!(
        collect_tokens(
            &mut l,
            b"POST /a HTTP/1.1\r\n\
              Content-Length: 3\r\n\
              \r\n\
              abc\
              GET /b HTTP/1.1\r\n\r\n"
        ),
        vec![
            tok!(MsgStart),
            tok!(Method, b"POST"),
            tok!(Url, b"/a"),
            tok!(Field, b"Content-Length"),
            tok!(Value, b"3"),
            tok!(HeaderEnd),
            tok!(Body, b"abc"),
            tok!(MsgEnd),
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/b"),
            tok!(HeaderEnd),
            tok!(MsgEnd)
        ]
    );
}

#[test]
fn framing_resets_between_messages() {
    let mut l = Lexer::new();

    collect_tokens(
        &mut l,
        b"POST /a HTTP/1.1\r\n\
          Content-Length: 3\r\n\
          \r\n\
          abc\
          GET /b HTTP/1.1\r\n\r\n"
    );

    // the second message carried no content length
    assert_eq!(None, l.content_length());
}

#[test]
fn http10_defaults_to_close() {
    let mut l = Lexer::new();

    let tokens = collect_tokens(&mut l, b"GET / HTTP/1.0\r\n\r\n");

    assert!(!l.should_keep_alive());
    assert_eq!(tok!(Eof), tokens[tokens.len() - 1]);
}

#[test]
fn http10_keep_alive() {
    let mut l = Lexer::new();

    assert_eq!(
        collect_tokens(
            &mut l,
            b"GET /one HTTP/1.0\r\n\
              Connection: keep-alive\r\n\
              \r\n\
              GET /two HTTP/1.0\r\n\r\n"
        ),
        vec![
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/one"),
            tok!(Field, b"Connection"),
            tok!(Value, b"keep-alive"),
            tok!(HeaderEnd),
            tok!(MsgEnd),
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/two"),
            tok!(HeaderEnd),
            tok!(MsgEnd),
            tok!(Eof)
        ]
    );
}

#[test]
fn http11_close_ends_stream() {
    let mut l = Lexer::new();

    assert_eq!(
        collect_tokens(
            &mut l,
            b"GET / HTTP/1.1\r\n\
              Connection: close\r\n\
              \r\n"
        ),
        vec![
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/"),
            tok!(Field, b"Connection"),
            tok!(Value, b"close"),
            tok!(HeaderEnd),
            tok!(MsgEnd),
            tok!(Eof)
        ]
    );
}

#[test]
fn eof_is_sticky() {
    let mut l = Lexer::new();

    collect_tokens(&mut l, b"GET / HTTP/1.0\r\n\r\n");

    // every call after the end of the connection lexes another Eof
    for _ in 0..3 {
        let token = l.execute(b"GET / HTTP/1.1\r\n\r\n").unwrap();

        assert_eq!(TokenKind::Eof, token.kind());
        assert_eq!(0, token.end());
    }
}

#[test]
fn upgrade() {
    let mut l = Lexer::new();

    let tokens = collect_tokens(
        &mut l,
        b"GET /chat HTTP/1.1\r\n\
          Upgrade: websocket\r\n\
          Connection: upgrade\r\n\
          \r\n\
          \x81\x05hello"
    );

    assert!(l.is_upgrade());

    assert_eq!(
        tokens,
        vec![
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/chat"),
            tok!(Field, b"Upgrade"),
            tok!(Value, b"websocket"),
            tok!(Field, b"Connection"),
            tok!(Value, b"upgrade"),
            tok!(HeaderEnd),
            tok!(MsgEnd),
            tok!(Eof, b"\x81\x05hello")
        ]
    );
}

#[test]
fn upgrade_has_no_body() {
    let mut l = Lexer::new();

    // content length is ignored once an upgrade was requested
    assert_eq!(
        collect_tokens(
            &mut l,
            b"GET / HTTP/1.1\r\n\
              Upgrade: tls/1.2\r\n\
              Content-Length: 5\r\n\
              \r\n\
              after"
        ),
        vec![
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/"),
            tok!(Field, b"Upgrade"),
            tok!(Value, b"tls/1.2"),
            tok!(Field, b"Content-Length"),
            tok!(Value, b"5"),
            tok!(HeaderEnd),
            tok!(MsgEnd),
            tok!(Eof, b"after")
        ]
    );
}

#[test]
fn reset_starts_a_new_connection() {
    let mut l = Lexer::new();

    collect_tokens(&mut l, b"GET / HTTP/1.0\r\n\r\n");

    assert!(!l.should_keep_alive());

    l.reset();

    assert_eq!(
        collect_tokens(&mut l, b"GET /again HTTP/1.1\r\n\r\n"),
        vec![
            tok!(MsgStart),
            tok!(Method, b"GET"),
            tok!(Url, b"/again"),
            tok!(HeaderEnd),
            tok!(MsgEnd)
        ]
    );
}
