//! Build a small data set by hand and print it out.
use dcmset_core::value::Value;
use dcmset_core::{dcm_value, DataElement, VR};
use dcmset_dictionary_std::tags;
use dcmset_object::DataSet;
use smallvec::smallvec;

fn main() {
    let mut item = DataSet::new_empty();
    item.put(DataElement::new(
        tags::REFERENCED_SOP_CLASS_UID,
        VR::UI,
        "1.2.840.10008.5.1.4.1.1.7",
    ));
    item.put(DataElement::new(
        tags::REFERENCED_SOP_INSTANCE_UID,
        VR::UI,
        "2.25.1377317526003177959225",
    ));

    let mut obj = DataSet::new_empty();
    obj.put(DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"));
    obj.put(DataElement::new(tags::MODALITY, VR::CS, "CR"));
    obj.put(DataElement::new(tags::ROWS, VR::US, dcm_value!(U16, [64])));
    obj.put(DataElement::new(tags::COLUMNS, VR::US, dcm_value!(U16, [64])));
    obj.put(DataElement::new(
        tags::REFERENCED_IMAGE_SEQUENCE,
        VR::SQ,
        Value::Sequence(smallvec![item]),
    ));

    println!("{}", obj);
}
