//! TwiML response envelope
//!
//! Twilio expects webhook replies as a TwiML document with a single
//! `<Message>` element. The body is plain text, so only the XML-reserved
//! characters need escaping.

/// Content type for TwiML responses
pub const CONTENT_TYPE: &str = "text/xml";

/// Wrap reply text in a single-message TwiML envelope
pub fn message_response(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
        escape(body)
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        assert_eq!(
            message_response("hello"),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>hello</Message></Response>"
        );
    }

    #[test]
    fn test_reserved_characters_escaped() {
        let xml = message_response("a & b <ok> \"x\" 'y'");
        assert!(xml.contains("a &amp; b &lt;ok&gt; &quot;x&quot; &apos;y&apos;"));
        assert!(!xml.contains("<ok>"));
    }

    #[test]
    fn test_newlines_preserved() {
        let xml = message_response("line one\nline two");
        assert!(xml.contains("line one\nline two"));
    }
}
