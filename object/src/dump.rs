//! Human readable rendering of data sets.
//! The output is meant for inspection and logging;
//! its exact shape is not a stable interface.
use crate::dataset::{DataSet, StoredElement};
use dcmset_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmset_core::value::{PrimitiveValue, Value};
use std::fmt;

/// maximum rendered width of a primitive value summary
const MAX_SUMMARY_WIDTH: usize = 64;

impl<D> DataSet<D>
where
    D: DataDictionary,
{
    /// Render the data set as one line of text per element, in tag order:
    /// the tag, the attribute name where the dictionary knows it,
    /// the value representation,
    /// and a summary of the value.
    /// Nested data sets are indented under their sequence element,
    /// unless `top_level_only` is enabled.
    ///
    /// Rendering does not decode:
    /// raw entries are summarized by their payload length.
    pub fn dump_lines(&self, indent: usize, top_level_only: bool) -> Vec<String> {
        let mut lines = Vec::new();
        self.dump_into(&mut lines, indent, top_level_only);
        lines
    }

    /// Render the top level of the data set as a single string,
    /// one line per element.
    pub fn top(&self) -> String {
        self.dump_lines(0, true).join("\n")
    }

    fn dump_into(&self, lines: &mut Vec<String>, depth: usize, top_level_only: bool) {
        let margin = "  ".repeat(depth);
        for (tag, elt) in &self.entries {
            let name = self
                .dict
                .by_tag(*tag)
                .map(|e| e.alias())
                .unwrap_or("(unknown)");
            let vr = elt.header().vr;
            match elt {
                StoredElement::Raw(raw) => {
                    lines.push(format!(
                        "{}{} {} {}: (not decoded, {} bytes)",
                        margin,
                        tag,
                        name,
                        vr,
                        raw.length()
                    ));
                }
                StoredElement::Decoded(e) => match e.value() {
                    Value::Sequence(items) => {
                        lines.push(format!(
                            "{}{} {} {}: (sequence, {} items)",
                            margin,
                            tag,
                            name,
                            vr,
                            items.len()
                        ));
                        if !top_level_only {
                            for item in items {
                                item.dump_into(lines, depth + 1, top_level_only);
                            }
                        }
                    }
                    Value::Primitive(v) => {
                        lines.push(format!(
                            "{}{} {} {}: {}",
                            margin,
                            tag,
                            name,
                            vr,
                            summarize(v)
                        ));
                    }
                },
            }
        }
    }
}

fn summarize(value: &PrimitiveValue) -> String {
    let text = match value {
        PrimitiveValue::Empty => return "(no value)".to_string(),
        PrimitiveValue::U8(data) if data.len() > 16 => {
            return format!("({} bytes)", data.len())
        }
        PrimitiveValue::Str(_) | PrimitiveValue::Strs(_) => {
            format!("\"{}\"", value.to_str())
        }
        _ => value.to_str().into_owned(),
    };
    if text.chars().count() > MAX_SUMMARY_WIDTH {
        let truncated: String = text.chars().take(MAX_SUMMARY_WIDTH).collect();
        format!("{}...", truncated)
    } else {
        text
    }
}

impl<D> fmt::Display for DataSet<D>
where
    D: DataDictionary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.dump_lines(0, false) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteordered::Endianness;
    use dcmset_core::header::VR;
    use dcmset_core::DataElement;
    use dcmset_dictionary_std::tags;
    use dcmset_encoding::decode::RawDataElement;
    use smallvec::smallvec;

    fn sample() -> DataSet {
        let mut item = DataSet::new_empty();
        item.put(DataElement::new(tags::REFERENCED_SOP_INSTANCE_UID, VR::UI, "1.2.3.1"));

        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::MODALITY, VR::CS, "MR"));
        obj.put(DataElement::new(
            tags::REFERENCED_IMAGE_SEQUENCE,
            VR::SQ,
            dcmset_core::value::Value::Sequence(smallvec![item]),
        ));
        obj.put(RawDataElement::new(
            tags::PATIENT_ID,
            VR::LO,
            b"ID0001".to_vec(),
            Endianness::Little,
        ));
        obj
    }

    #[test]
    fn dump_renders_one_line_per_element() {
        let obj = sample();
        let lines = obj.dump_lines(0, false);
        assert_eq!(
            lines,
            vec![
                "(0008,0060) Modality CS: \"MR\"",
                "(0008,1140) ReferencedImageSequence SQ: (sequence, 1 items)",
                "  (0008,1155) ReferencedSOPInstanceUID UI: \"1.2.3.1\"",
                "(0010,0020) PatientID LO: (not decoded, 6 bytes)",
            ]
        );
    }

    #[test]
    fn top_stays_at_the_first_level() {
        let obj = sample();
        let top = obj.top();
        assert!(top.contains("(sequence, 1 items)"));
        assert!(!top.contains("ReferencedSOPInstanceUID"));
    }

    #[test]
    fn long_values_are_truncated() {
        let mut obj = DataSet::new_empty();
        let long_name = "X".repeat(100);
        obj.put(DataElement::new(tags::PATIENT_NAME, VR::PN, long_name));
        let lines = obj.dump_lines(0, true);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("..."));
        assert!(lines[0].len() < 120);
    }

    #[test]
    fn byte_payloads_summarize_by_length() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            dcmset_core::value::PrimitiveValue::U8(smallvec![0; 64]),
        ));
        let lines = obj.dump_lines(0, true);
        assert_eq!(lines, vec!["(7FE0,0010) PixelData OB: (64 bytes)"]);
    }

    #[test]
    fn display_renders_all_levels() {
        let obj = sample();
        let text = obj.to_string();
        assert!(text.contains("ReferencedSOPInstanceUID"));
    }
}
