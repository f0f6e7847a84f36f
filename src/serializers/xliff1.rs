/*!
 * XLIFF 1.2 serializer.
 *
 * Every placeholder, paired or not, is written as an `<x id="NAME"/>` marker.
 */

use log::debug;

use crate::errors::SerializeError;
use crate::message::Message;
use crate::xml_file::{TagOptions, XmlFile};

use super::{unit_id, TranslationSerializer};

const XLIFF_VERSION: &str = "1.2";
const XLIFF_NAMESPACE: &str = "urn:oasis:names:tc:xliff:document:1.2";

/// Writes messages as an XLIFF 1.2 document
#[derive(Debug, Clone, Copy, Default)]
pub struct Xliff1Serializer;

impl TranslationSerializer for Xliff1Serializer {
    fn render_file(&self, messages: &[Message], locale: &str, is_target_only: bool) -> Result<String, SerializeError> {
        debug!("Rendering {} message(s) as XLIFF {} for locale '{}'", messages.len(), XLIFF_VERSION, locale);

        let mut xml = XmlFile::new();
        xml.start_tag("xliff", &[("version", XLIFF_VERSION), ("xmlns", XLIFF_NAMESPACE)], TagOptions::default());
        xml.start_tag(
            "file",
            &[("source-language", locale), ("datatype", "plaintext"), ("original", "ng2.template")],
            TagOptions::default(),
        );
        xml.start_tag("body", &[], TagOptions::default());

        for (index, message) in messages.iter().enumerate() {
            let id = unit_id(message, index)?;
            xml.start_tag("trans-unit", &[("id", id), ("datatype", "html")], TagOptions::default());

            // 1.2 extraction output carries no target unless one is asked for
            let tag_name = if is_target_only { "target" } else { "source" };
            xml.start_tag(tag_name, &[], TagOptions::preserve());
            render_message(&mut xml, message, id)?;
            xml.end_tag(tag_name, TagOptions::release())?;

            if let Some(description) = message.description_text() {
                render_note(&mut xml, "description", description)?;
            }
            if let Some(meaning) = message.meaning_text() {
                render_note(&mut xml, "meaning", meaning)?;
            }

            xml.end_tag("trans-unit", TagOptions::default())?;
        }

        xml.end_tag("body", TagOptions::default())?;
        xml.end_tag("file", TagOptions::default())?;
        xml.end_tag("xliff", TagOptions::default())?;
        Ok(xml.into_string()?)
    }
}

fn render_message(xml: &mut XmlFile, message: &Message, id: &str) -> Result<(), SerializeError> {
    let Some(first) = message.message_parts.first() else {
        return Ok(());
    };
    xml.text(first);

    for (i, part) in message.message_parts.iter().enumerate().skip(1) {
        let name = message.placeholder_names.get(i - 1).ok_or_else(|| SerializeError::MissingPlaceholder {
            id: id.to_string(),
            position: i,
        })?;
        xml.start_tag("x", &[("id", name.as_str())], TagOptions::self_closing());
        xml.text(part);
    }

    Ok(())
}

fn render_note(xml: &mut XmlFile, from: &str, value: &str) -> Result<(), SerializeError> {
    xml.start_tag("note", &[("priority", "1"), ("from", from)], TagOptions::preserve());
    xml.text(value);
    xml.end_tag("note", TagOptions::release())?;
    Ok(())
}
