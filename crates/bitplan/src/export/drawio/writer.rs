//! XML serialization of a [`DocumentTree`].

use std::borrow::Cow;

use quick_xml::{
    Writer,
    escape::escape,
    events::{BytesDecl, BytesEnd, BytesStart, Event, attributes::Attribute},
    name::QName,
};

use super::document::{Cell, DocumentTree, FILE_ATTRIBUTES, MODEL_ATTRIBUTES, PAGE_ATTRIBUTES};
use crate::export::Error;

const INDENT_SIZE: usize = 2;

type XmlWriter = Writer<Vec<u8>>;

/// Serializes `tree` as an indented, UTF-8 encoded draw.io document.
pub(super) fn write_document(tree: &DocumentTree) -> Result<String, Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);

    write_event(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    open(&mut writer, "mxfile", FILE_ATTRIBUTES.map(attribute))?;
    open(&mut writer, "diagram", PAGE_ATTRIBUTES.map(attribute))?;
    open(&mut writer, "mxGraphModel", MODEL_ATTRIBUTES.map(attribute))?;
    write_event(&mut writer, Event::Start(BytesStart::new("root")))?;

    for cell in tree.cells() {
        write_cell(&mut writer, cell)?;
    }

    close(&mut writer, "root")?;
    close(&mut writer, "mxGraphModel")?;
    close(&mut writer, "diagram")?;
    close(&mut writer, "mxfile")?;

    let mut xml =
        String::from_utf8(writer.into_inner()).map_err(|err| Error::Render(err.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

fn write_cell(writer: &mut XmlWriter, cell: &Cell) -> Result<(), Error> {
    let mut attributes = vec![attribute(("id", &cell.id().to_string()))];
    if let Some(value) = cell.value() {
        attributes.push(attribute(("value", value)));
    }
    if let Some(style) = cell.style() {
        attributes.push(attribute(("style", style)));
    }
    if let Some(parent) = cell.parent() {
        attributes.push(attribute(("parent", &parent.to_string())));
    }

    let Some(rect) = cell.geometry() else {
        return empty(writer, "mxCell", attributes);
    };

    attributes.push(attribute(("vertex", "1")));
    open(writer, "mxCell", attributes)?;

    empty(
        writer,
        "mxGeometry",
        [
            attribute(("x", &rect.x().to_string())),
            attribute(("y", &rect.y().to_string())),
            attribute(("width", &rect.width().to_string())),
            attribute(("height", &rect.height().to_string())),
            attribute(("as", "geometry")),
        ],
    )?;

    close(writer, "mxCell")
}

/// Builds an attribute whose value is already escaped for XML output.
fn attribute((key, value): (&'static str, &str)) -> Attribute<'static> {
    Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(escape_value(value).into_bytes()),
    }
}

/// Escapes markup characters and line-breaking whitespace in an attribute
/// value.
///
/// Parsers normalize literal tabs and newlines inside attribute values to
/// spaces, so they are written as character references. Characters XML 1.0
/// cannot represent at all are replaced with U+FFFD.
fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in escape(value).chars() {
        match ch {
            '\t' => escaped.push_str("&#9;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            ch if is_xml_char(ch) => escaped.push(ch),
            _ => escaped.push(char::REPLACEMENT_CHARACTER),
        }
    }
    escaped
}

fn is_xml_char(ch: char) -> bool {
    !matches!(
        ch,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

fn open<'a>(
    writer: &mut XmlWriter,
    name: &str,
    attributes: impl IntoIterator<Item = Attribute<'a>>,
) -> Result<(), Error> {
    write_event(
        writer,
        Event::Start(BytesStart::new(name).with_attributes(attributes)),
    )
}

fn empty<'a>(
    writer: &mut XmlWriter,
    name: &str,
    attributes: impl IntoIterator<Item = Attribute<'a>>,
) -> Result<(), Error> {
    write_event(
        writer,
        Event::Empty(BytesStart::new(name).with_attributes(attributes)),
    )
}

fn close(writer: &mut XmlWriter, name: &str) -> Result<(), Error> {
    write_event(writer, Event::End(BytesEnd::new(name)))
}

fn write_event(writer: &mut XmlWriter, event: Event<'_>) -> Result<(), Error> {
    writer
        .write_event(event)
        .map_err(|err| Error::Render(err.to_string()))
}

#[cfg(test)]
mod tests {
    use bitplan_core::geometry::Rect;

    use super::*;
    use crate::layout::LayoutBlock;

    #[test]
    fn test_write_document_layout() {
        let tree = DocumentTree::from_blocks(
            &[LayoutBlock::new("Version", Rect::new(0, 0, 80, 40))],
            "rounded=0;",
        );

        let xml = write_document(&tree).unwrap();
        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<mxfile host="Electron" type="device">
  <diagram name="Page-1" id="diagram_1">
    <mxGraphModel dx="1422" dy="798" grid="1" gridSize="10" guides="1" tooltips="1" connect="1" arrows="1" fold="1" page="1" pageScale="1" pageWidth="850" pageHeight="1100">
      <root>
        <mxCell id="0"/>
        <mxCell id="1" parent="0"/>
        <mxCell id="cell_2" value="Version" style="rounded=0;" parent="1" vertex="1">
          <mxGeometry x="0" y="0" width="80" height="40" as="geometry"/>
        </mxCell>
      </root>
    </mxGraphModel>
  </diagram>
</mxfile>
"#;

        assert_eq!(xml, expected);
    }

    #[test]
    fn test_write_document_keeps_non_ascii_labels() {
        let tree = DocumentTree::from_blocks(
            &[LayoutBlock::new("Prüfsumme", Rect::new(0, 0, 20, 40))],
            "",
        );

        let xml = write_document(&tree).unwrap();
        assert!(xml.contains(r#"value="Prüfsumme""#));
    }

    #[test]
    fn test_escape_value_markup() {
        assert_eq!(
            escape_value(r#"<a & 'b' "c">"#),
            "&lt;a &amp; &apos;b&apos; &quot;c&quot;&gt;"
        );
    }

    #[test]
    fn test_escape_value_whitespace_references() {
        assert_eq!(escape_value("a\tb\nc\rd"), "a&#9;b&#10;c&#13;d");
    }

    #[test]
    fn test_escape_value_replaces_unrepresentable_chars() {
        assert_eq!(escape_value("a\u{0}b\u{1B}c\u{FFFF}"), "a\u{FFFD}b\u{FFFD}c\u{FFFD}");
        assert_eq!(escape_value("\u{7F}\u{85}"), "\u{7F}\u{85}");
    }

    #[test]
    fn test_write_document_control_chars_in_label() {
        let tree = DocumentTree::from_blocks(
            &[LayoutBlock::new("Ver\u{1}sion\tA", Rect::new(0, 0, 20, 40))],
            "",
        );

        let xml = write_document(&tree).unwrap();
        assert!(xml.contains("value=\"Ver\u{FFFD}sion&#9;A\""));
        assert!(!xml.contains('\u{1}'));
        assert!(!xml.contains('\t'));
    }
}
