pub const TWIML_CONTENT_TYPE: &str = "application/xml";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// TwiML `<Response>` carrying zero or more `<Message>` replies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessagingResponse {
    messages: Vec<String>,
}

impl MessagingResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, body: impl Into<String>) -> Self {
        self.messages.push(body.into());
        self
    }

    pub fn render(&self) -> String {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str("<Response>");
        for body in &self.messages {
            xml.push_str("<Message>");
            xml.push_str(&escape_xml(body));
            xml.push_str("</Message>");
        }
        xml.push_str("</Response>");
        xml
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
