//! XFDF (XML Forms Data Format) parsing.
//!
//! XFDF carries AcroForm field values as a flat `name -> value` map:
//!
//! ```xml
//! <xfdf><fields><field name="FirstName"><value>Jane</value></field></fields></xfdf>
//! ```
//!
//! Field names are case-sensitive; unknown elements are ignored rather than
//! rejected, and an empty `<value/>` means the empty string.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XfdfError {
    #[error("malformed XFDF XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed XFDF XML: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// The parsed `name -> value` map from an XFDF document's `<fields>` block.
#[derive(Debug, Clone, Default)]
pub struct XfdfDocument {
    pub values: HashMap<String, String>,
}

impl XfdfDocument {
    pub fn parse(xml: &[u8]) -> Result<Self, XfdfError> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(false);

        let mut values = HashMap::new();
        let mut field_stack: Vec<String> = Vec::new();
        let mut in_value = false;
        let mut current_value = String::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let name = e.name();
                    let local = std::str::from_utf8(name.as_ref())?;
                    if local == "field" {
                        let mut field_name = String::new();
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"name" {
                                field_name = attr.unescape_value()?.into_owned();
                            }
                        }
                        field_stack.push(field_name);
                        in_value = false;
                        current_value.clear();
                    } else if local == "value" {
                        in_value = true;
                        current_value.clear();
                    }
                }
                Event::Empty(e) => {
                    let name = e.name();
                    let local = std::str::from_utf8(name.as_ref())?;
                    if local == "value" {
                        if let Some(name) = field_stack.last() {
                            values.insert(name.clone(), String::new());
                        }
                    } else if local == "field" {
                        let mut field_name = String::new();
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"name" {
                                field_name = attr.unescape_value()?.into_owned();
                            }
                        }
                        values.entry(field_name).or_insert_with(String::new);
                    }
                }
                Event::Text(e) => {
                    if in_value {
                        current_value.push_str(&e.unescape()?);
                    }
                }
                Event::End(e) => {
                    let name = e.name();
                    let local = std::str::from_utf8(name.as_ref())?;
                    if local == "value" {
                        if let Some(name) = field_stack.last() {
                            values.insert(name.clone(), current_value.clone());
                        }
                        in_value = false;
                    } else if local == "field" {
                        field_stack.pop();
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_and_button_fields() {
        let xml = br#"<xfdf><fields>
            <field name="FirstName"><value>Jane</value></field>
            <field name="Subscribed"><value>Yes</value></field>
        </fields></xfdf>"#;
        let doc = XfdfDocument::parse(xml).unwrap();
        assert_eq!(doc.get("FirstName"), Some("Jane"));
        assert_eq!(doc.get("Subscribed"), Some("Yes"));
    }

    #[test]
    fn empty_value_means_empty_string() {
        let xml = br#"<xfdf><fields><field name="Middle"><value/></field></fields></xfdf>"#;
        let doc = XfdfDocument::parse(xml).unwrap();
        assert_eq!(doc.get("Middle"), Some(""));
    }

    #[test]
    fn unknown_field_is_absent() {
        let xml = br#"<xfdf><fields><field name="A"><value>1</value></field></fields></xfdf>"#;
        let doc = XfdfDocument::parse(xml).unwrap();
        assert_eq!(doc.get("B"), None);
    }
}
