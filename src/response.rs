//! The constant HTTP response.
//!
//! Every connection receives these bytes exactly, regardless of what the
//! client sent. The declared `Content-Length` must equal the body length.

/// Response body. Exactly 21 bytes, matching the declared `Content-Length`.
pub const BODY: &[u8] = b"Hello, World from C!\n";

/// The full response written to every connection, byte for byte: status
/// line, two headers, blank line, body.
pub const RESPONSE: &[u8] =
    b"HTTP/1.1 200 OK\r\nContent-Length: 21\r\nContent-Type: text/plain\r\n\r\nHello, World from C!\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shape() {
        assert!(RESPONSE.starts_with(b"HTTP/1.1 200 OK\r\n"));
        assert!(RESPONSE.ends_with(BODY));
        assert_eq!(RESPONSE.len(), 85);

        // Headers and body are separated by exactly one blank line
        let text = std::str::from_utf8(RESPONSE).unwrap();
        let (head, body) = text.split_once("\r\n\r\n").unwrap();
        assert_eq!(body.as_bytes(), BODY);
        assert!(head.contains("Content-Type: text/plain"));
    }

    #[test]
    fn test_declared_length_matches_body() {
        let text = std::str::from_utf8(RESPONSE).unwrap();
        let declared: usize = text
            .lines()
            .find_map(|line| line.strip_prefix("Content-Length: "))
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(declared, BODY.len());
        assert_eq!(declared, 21);
    }
}
