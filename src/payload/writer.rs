//! Minimal indenting XML writer.

/// Indentation used for each nesting level (2 spaces).
const XML_INDENT: &str = "  ";

/// Escapes text for use in XML element content or attribute values.
///
/// # Examples
///
/// ```
/// use cspace_client::payload::escape_xml;
///
/// assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// ```
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Builds an XML document one element at a time.
///
/// Every `start` must be matched by an `end`; [`finish`](Self::finish)
/// closes anything still open.
#[derive(Debug)]
pub struct XmlWriter {
    output: String,
    open: Vec<String>,
}

impl XmlWriter {
    /// Starts a document with a UTF-8 XML declaration.
    pub fn new() -> Self {
        Self {
            output: String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"),
            open: Vec::new(),
        }
    }

    /// Opens an element with the given attributes.
    pub fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> &mut Self {
        self.indent();
        self.output.push('<');
        self.output.push_str(name);
        for (key, value) in attributes {
            self.output.push(' ');
            self.output.push_str(key);
            self.output.push_str("=\"");
            self.output.push_str(&escape_xml(value));
            self.output.push('"');
        }
        self.output.push_str(">\n");
        self.open.push(name.to_string());
        self
    }

    /// Writes `<name>text</name>` on its own line.
    pub fn text_element(&mut self, name: &str, text: &str) -> &mut Self {
        self.indent();
        self.output.push('<');
        self.output.push_str(name);
        self.output.push('>');
        self.output.push_str(&escape_xml(text));
        self.output.push_str("</");
        self.output.push_str(name);
        self.output.push_str(">\n");
        self
    }

    /// Closes the innermost open element.
    pub fn end(&mut self) -> &mut Self {
        if let Some(name) = self.open.pop() {
            self.indent();
            self.output.push_str("</");
            self.output.push_str(&name);
            self.output.push_str(">\n");
        }
        self
    }

    /// Closes all open elements and returns the document.
    pub fn finish(mut self) -> String {
        while !self.open.is_empty() {
            self.end();
        }
        self.output
    }

    fn indent(&mut self) {
        for _ in 0..self.open.len() {
            self.output.push_str(XML_INDENT);
        }
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}
