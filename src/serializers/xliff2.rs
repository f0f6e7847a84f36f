/*!
 * XLIFF 2.0 serializer.
 *
 * Paired placeholders (`START_*` / `CLOSE_*`) become nested `<pc>` spans and
 * every other placeholder becomes a self-closing `<ph/>`. Span pairing follows
 * nesting order only: a `CLOSE_*` always closes the innermost open `<pc>`.
 */

use log::debug;

use crate::errors::SerializeError;
use crate::message::{closing_name, Message, PlaceholderKind};
use crate::xml_file::{TagOptions, XmlFile};

use super::{unit_id, TranslationSerializer};

const XLIFF_VERSION: &str = "2.0";
const XLIFF_NAMESPACE: &str = "urn:oasis:names:tc:xliff:document:2.0";

/// Writes messages as an XLIFF 2.0 document
#[derive(Debug, Clone, Copy, Default)]
pub struct Xliff2Serializer;

impl TranslationSerializer for Xliff2Serializer {
    fn render_file(&self, messages: &[Message], locale: &str, is_target_only: bool) -> Result<String, SerializeError> {
        debug!(
            "Rendering {} message(s) as XLIFF {} for locale '{}'{}",
            messages.len(),
            XLIFF_VERSION,
            locale,
            if is_target_only { " (target only)" } else { "" }
        );

        let mut xml = XmlFile::new();
        xml.start_tag(
            "xliff",
            &[
                ("version", XLIFF_VERSION),
                ("xmlns", XLIFF_NAMESPACE),
                ("srcLang", locale),
                ("trgLang", locale),
            ],
            TagOptions::default(),
        );
        xml.start_tag("file", &[], TagOptions::default());

        for (index, message) in messages.iter().enumerate() {
            let id = unit_id(message, index)?;
            xml.start_tag("unit", &[("id", id)], TagOptions::default());

            if message.has_notes() {
                xml.start_tag("notes", &[], TagOptions::default());
                if let Some(description) = message.description_text() {
                    render_note(&mut xml, "description", description)?;
                }
                if let Some(meaning) = message.meaning_text() {
                    render_note(&mut xml, "meaning", meaning)?;
                }
                xml.end_tag("notes", TagOptions::default())?;
            }

            xml.start_tag("segment", &[], TagOptions::default());
            if !is_target_only {
                render_message_tag(&mut xml, "source", message)?;
            }
            render_message_tag(&mut xml, "target", message)?;
            xml.end_tag("segment", TagOptions::default())?;

            xml.end_tag("unit", TagOptions::default())?;
        }

        xml.end_tag("file", TagOptions::default())?;
        xml.end_tag("xliff", TagOptions::default())?;
        Ok(xml.into_string()?)
    }
}

/// Write `message` wrapped in a whitespace-preserving `<tag_name>` element
fn render_message_tag(xml: &mut XmlFile, tag_name: &str, message: &Message) -> Result<(), SerializeError> {
    xml.start_tag(tag_name, &[], TagOptions::preserve());
    render_message(xml, message)?;
    xml.end_tag(tag_name, TagOptions::release())?;
    Ok(())
}

/// Write the inline content of `message`
///
/// Placeholder ids are the 1-based index of the text part that follows the
/// placeholder, so they increase across the message regardless of kind.
pub fn render_message(xml: &mut XmlFile, message: &Message) -> Result<(), SerializeError> {
    let Some(first) = message.message_parts.first() else {
        return Ok(());
    };
    xml.text(first);

    for (i, part) in message.message_parts.iter().enumerate().skip(1) {
        let name = message.placeholder_names.get(i - 1).ok_or_else(|| SerializeError::MissingPlaceholder {
            id: message.effective_id().unwrap_or_default().to_string(),
            position: i,
        })?;
        let id = i.to_string();

        match PlaceholderKind::classify(name) {
            PlaceholderKind::Start => {
                let equiv_end = closing_name(name);
                xml.start_tag(
                    "pc",
                    &[("id", id.as_str()), ("equivStart", name.as_str()), ("equivEnd", equiv_end.as_str())],
                    TagOptions::default(),
                );
            }
            PlaceholderKind::Close => {
                xml.end_tag("pc", TagOptions::default())?;
            }
            PlaceholderKind::Standalone => {
                xml.start_tag("ph", &[("id", id.as_str()), ("equiv", name.as_str())], TagOptions::self_closing());
            }
        }

        xml.text(part);
    }

    Ok(())
}

fn render_note(xml: &mut XmlFile, category: &str, value: &str) -> Result<(), SerializeError> {
    xml.start_tag("note", &[("category", category)], TagOptions::preserve());
    xml.text(value);
    xml.end_tag("note", TagOptions::release())?;
    Ok(())
}
