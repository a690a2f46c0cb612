// crates/parcelmap-core/src/kml.rs

//! KML rendering.
//!
//! Output shape (two-space indent, no XML declaration):
//!
//! ```text
//! <kml>
//!   <Document>
//!     <Placemark>
//!       <name>Lot A</name>
//!       <description>Datum prodaje: ...</description>
//!       <Point>
//!         <coordinates>19.500000,44.000000,0</coordinates>
//!       </Point>
//!     </Placemark>
//!   </Document>
//! </kml>
//! ```

use crate::error::Result;
use crate::model::AnnotationEntry;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

const INDENT_SIZE: usize = 2;

/// Serializes placemarks in the order given. An empty slice still produces a
/// complete `kml`/`Document` pair.
pub fn to_kml(entries: &[AnnotationEntry]) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);

    writer.write_event(Event::Start(BytesStart::new("kml")))?;
    writer.write_event(Event::Start(BytesStart::new("Document")))?;
    for entry in entries {
        write_placemark(&mut writer, entry)?;
    }
    writer.write_event(Event::End(BytesEnd::new("Document")))?;
    writer.write_event(Event::End(BytesEnd::new("kml")))?;

    Ok(writer.into_inner())
}

fn write_placemark<W: Write>(writer: &mut Writer<W>, entry: &AnnotationEntry) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("Placemark")))?;
    write_text_element(writer, "name", &entry.title)?;
    write_text_element(writer, "description", &entry.description)?;
    writer.write_event(Event::Start(BytesStart::new("Point")))?;
    write_text_element(writer, "coordinates", &entry.coordinates)?;
    writer.write_event(Event::End(BytesEnd::new("Point")))?;
    writer.write_event(Event::End(BytesEnd::new("Placemark")))?;
    Ok(())
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    // BytesText::new escapes markup characters.
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, coordinates: &str) -> AnnotationEntry {
        AnnotationEntry {
            title: title.into(),
            description: format!("about {title}"),
            coordinates: coordinates.into(),
        }
    }

    fn render(entries: &[AnnotationEntry]) -> String {
        String::from_utf8(to_kml(entries).unwrap()).unwrap()
    }

    #[test]
    fn single_placemark_layout() {
        let kml = render(&[entry("Lot A", "19.500000,44.000000,0")]);
        let expected = "\
<kml>
  <Document>
    <Placemark>
      <name>Lot A</name>
      <description>about Lot A</description>
      <Point>
        <coordinates>19.500000,44.000000,0</coordinates>
      </Point>
    </Placemark>
  </Document>
</kml>";
        assert_eq!(kml, expected);
    }

    #[test]
    fn empty_document_is_well_formed() {
        let kml = render(&[]);
        assert!(kml.starts_with("<kml>"));
        assert!(kml.contains("<Document>"));
        assert!(kml.contains("</Document>"));
        assert!(kml.ends_with("</kml>"));
        assert!(!kml.contains("<Placemark>"));
    }

    #[test]
    fn placemarks_keep_input_order() {
        let kml = render(&[entry("first", "1"), entry("second", "2"), entry("third", "3")]);
        let a = kml.find("<name>first</name>").unwrap();
        let b = kml.find("<name>second</name>").unwrap();
        let c = kml.find("<name>third</name>").unwrap();
        assert!(a < b && b < c);
        assert_eq!(kml.matches("<Placemark>").count(), 3);
    }

    #[test]
    fn text_is_escaped() {
        let kml = render(&[entry("Lot <1> & 2", "0")]);
        assert!(kml.contains("<name>Lot &lt;1&gt; &amp; 2</name>"), "{kml}");
    }

    #[test]
    fn empty_title_renders_empty_name() {
        let kml = render(&[entry("", "0")]);
        assert!(kml.contains("<name></name>"), "{kml}");
    }
}
