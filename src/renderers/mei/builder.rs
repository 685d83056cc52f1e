// MEI document builder

/// Accumulates an indented XML document string
pub struct MeiBuilder {
    buffer: String,
    depth: usize,
}

impl MeiBuilder {
    /// Create a builder holding the XML declaration
    pub fn new() -> Self {
        Self {
            buffer: String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"),
            depth: 0,
        }
    }

    /// Open an element with the given attributes
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.buffer.push('<');
        self.buffer.push_str(tag);
        self.push_attrs(attrs);
        self.buffer.push_str(">\n");
        self.depth += 1;
    }

    /// Close the most recently opened element
    pub fn close(&mut self, tag: &str) {
        self.depth -= 1;
        self.indent();
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push_str(">\n");
    }

    /// Write a self-closing element
    pub fn empty(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.buffer.push('<');
        self.buffer.push_str(tag);
        self.push_attrs(attrs);
        self.buffer.push_str("/>\n");
    }

    /// Consume the builder, returning the finished document
    pub fn finalize(self) -> String {
        self.buffer
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str("  ");
        }
    }

    fn push_attrs(&mut self, attrs: &[(&str, &str)]) {
        for (name, value) in attrs {
            self.buffer.push(' ');
            self.buffer.push_str(name);
            self.buffer.push_str("=\"");
            self.buffer.push_str(&xml_escape(value));
            self.buffer.push('"');
        }
    }
}

impl Default for MeiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape XML special characters in attribute values
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_elements_indent() {
        let mut builder = MeiBuilder::new();
        builder.open("outer", &[("n", "1")]);
        builder.empty("inner", &[]);
        builder.close("outer");
        assert_eq!(
            builder.finalize(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<outer n=\"1\">\n  <inner/>\n</outer>\n"
        );
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("a<b&c\"d"), "a&lt;b&amp;c&quot;d");
    }
}
