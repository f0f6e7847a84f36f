/*!
 * Indented XML writer with an explicit open-element stack.
 *
 * Each opening tag outside a whitespace-preserving region is written on its
 * own line, indented two spaces per nesting level. Inside a preserved region
 * tags and text are appended verbatim so message content stays exact.
 */

use quick_xml::escape::escape;

use crate::errors::XmlError;

const INDENT_STEP: &str = "  ";

/// Formatting options for a single tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagOptions {
    /// Switch whitespace preservation on or off once the tag is written
    pub preserve_whitespace: Option<bool>,
    /// Write `<name/>` without pushing it onto the element stack
    pub self_closing: bool,
}

impl TagOptions {
    /// Start preserving whitespace after this tag
    pub fn preserve() -> Self {
        Self { preserve_whitespace: Some(true), self_closing: false }
    }

    /// Stop preserving whitespace after this tag
    pub fn release() -> Self {
        Self { preserve_whitespace: Some(false), self_closing: false }
    }

    pub fn self_closing() -> Self {
        Self { preserve_whitespace: None, self_closing: true }
    }
}

/// Stateful XML event sink
#[derive(Debug, Default)]
pub struct XmlFile {
    output: String,
    indent: String,
    elements: Vec<String>,
    preserving_whitespace: bool,
}

impl XmlFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `name`, writing attributes in the given order
    ///
    /// Attributes with an empty value are omitted.
    pub fn start_tag(&mut self, name: &str, attributes: &[(&str, &str)], options: TagOptions) -> &mut Self {
        if !self.preserving_whitespace {
            self.output.push_str(&self.indent);
        }

        self.output.push('<');
        self.output.push_str(name);
        for (attr_name, attr_value) in attributes {
            if attr_value.is_empty() {
                continue;
            }
            self.output.push(' ');
            self.output.push_str(attr_name);
            self.output.push_str("=\"");
            self.output.push_str(&escape(*attr_value));
            self.output.push('"');
        }

        if options.self_closing {
            self.output.push_str("/>");
        } else {
            self.output.push('>');
            self.elements.push(name.to_string());
            self.indent.push_str(INDENT_STEP);
        }

        self.finish_tag(options.preserve_whitespace);
        self
    }

    /// Close `name`, which must be the innermost open element
    pub fn end_tag(&mut self, name: &str, options: TagOptions) -> Result<&mut Self, XmlError> {
        if self.current_element() != Some(name) {
            return Err(XmlError::UnexpectedClosingTag {
                found: name.to_string(),
                expected: self.elements.last().cloned(),
            });
        }
        self.elements.pop();

        let new_len = self.indent.len().saturating_sub(INDENT_STEP.len());
        self.indent.truncate(new_len);

        if !self.preserving_whitespace {
            self.output.push_str(&self.indent);
        }
        self.output.push_str("</");
        self.output.push_str(name);
        self.output.push('>');

        self.finish_tag(options.preserve_whitespace);
        Ok(self)
    }

    /// Append escaped character data
    pub fn text(&mut self, value: &str) -> &mut Self {
        self.output.push_str(&escape(value));
        self
    }

    /// Name of the innermost open element
    pub fn current_element(&self) -> Option<&str> {
        self.elements.last().map(String::as_str)
    }

    /// Finish the document, failing if any element is still open
    pub fn into_string(self) -> Result<String, XmlError> {
        if !self.elements.is_empty() {
            return Err(XmlError::UnclosedTags(self.elements));
        }
        Ok(self.output)
    }

    fn finish_tag(&mut self, preserve_whitespace: Option<bool>) {
        if let Some(preserve) = preserve_whitespace {
            self.preserving_whitespace = preserve;
        }
        if !self.preserving_whitespace {
            self.output.push('\n');
        }
    }
}
