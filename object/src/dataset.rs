//! This module contains the in-memory representation of DICOM data sets:
//! ordered, tag-indexed collections of typed elements,
//! with payload decoding deferred until a value is first requested.
use crate::io::{NoSourceSnafu, SourceLoader};
use crate::{
    AccessByNameError, AccessError, DecodeValueSnafu, FetchPayloadSnafu,
    NoSuchAttributeNameSnafu, NoSuchDataElementTagSnafu, RepeaterNameSnafu, TagMismatchError,
    TagMismatchSnafu,
};
use dcmset_core::dictionary::{DataDictionary, DataDictionaryEntry, TagRange};
use dcmset_core::header::{DataElementHeader, GroupNumber, Header, Tag, VR};
use dcmset_core::value::{Value, C};
use dcmset_core::DataElement;
use dcmset_dictionary_std::{tags, StandardDataDictionary};
use dcmset_encoding::decode::{decode_raw, RawDataElement};
use dcmset_encoding::text::{resolve_encodings, SpecificCharacterSet};
use itertools::Itertools;
use smallvec::smallvec;
use snafu::{ensure, OptionExt, ResultExt};
use std::collections::{btree_map, BTreeMap};
use std::iter::FromIterator;
use tracing::warn;

/// A DICOM data element whose sequence items, if any,
/// are nested data sets over the dictionary `D`.
pub type DataSetElement<D = StandardDataDictionary> = DataElement<DataSet<D>>;

/// A data set entry in one of its two admissible forms.
///
/// Elements enter the set either already decoded
/// or raw as obtained from the source,
/// and raw entries are replaced by their decoded form
/// on first value access.
#[derive(Debug, Clone)]
pub enum StoredElement<D = StandardDataDictionary> {
    /// An element whose payload was not interpreted yet.
    Raw(RawDataElement),
    /// An element holding its decoded value.
    Decoded(DataSetElement<D>),
}

// written out instead of derived so that `D: PartialEq` is not required
impl<D> PartialEq for StoredElement<D> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StoredElement::Raw(a), StoredElement::Raw(b)) => a == b,
            (StoredElement::Decoded(a), StoredElement::Decoded(b)) => a == b,
            _ => false,
        }
    }
}

impl<D> StoredElement<D> {
    /// Retrieve the element header, without decoding.
    pub fn header(&self) -> DataElementHeader {
        match self {
            StoredElement::Raw(e) => e.header(),
            StoredElement::Decoded(e) => e.header(),
        }
    }

    /// Whether this entry holds a decoded value.
    pub fn is_decoded(&self) -> bool {
        matches!(self, StoredElement::Decoded(_))
    }

    /// Retrieve the decoded element, if available.
    pub fn decoded(&self) -> Option<&DataSetElement<D>> {
        match self {
            StoredElement::Decoded(e) => Some(e),
            _ => None,
        }
    }
}

impl<D> Header for StoredElement<D> {
    fn tag(&self) -> Tag {
        self.header().tag
    }

    fn vr(&self) -> VR {
        self.header().vr
    }
}

impl<D> From<RawDataElement> for StoredElement<D> {
    fn from(elt: RawDataElement) -> Self {
        StoredElement::Raw(elt)
    }
}

impl<D> From<DataSetElement<D>> for StoredElement<D> {
    fn from(elt: DataSetElement<D>) -> Self {
        StoredElement::Decoded(elt)
    }
}

/// A DICOM data set,
/// where elements are indexed by their attribute tag
/// and iterated in ascending tag order
/// regardless of insertion order.
///
/// The type parameter `D` is the data dictionary implementation
/// used for by-name operations,
/// by default the standard attribute dictionary.
///
/// # Example
///
/// ```
/// # use dcmset_core::{dcm_value, DataElement, VR};
/// # use dcmset_dictionary_std::tags;
/// # use dcmset_object::DataSet;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut obj = DataSet::new_empty();
/// obj.put(DataElement::new(tags::MODALITY, VR::CS, "US"));
/// assert_eq!(obj.element(tags::MODALITY)?.to_str()?, "US");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DataSet<D = StandardDataDictionary> {
    pub(crate) entries: BTreeMap<Tag, StoredElement<D>>,
    /// values addressed by arbitrary names, outside the element map
    pub(crate) custom: BTreeMap<String, Value<DataSet<D>>>,
    pub(crate) dict: D,
    /// character sets assumed when the data set does not declare any
    pub(crate) fallback_charsets: C<SpecificCharacterSet>,
    pub(crate) loader: Option<SourceLoader>,
}

/// Equality of data sets considers the stored elements
/// and custom values only,
/// disregarding the dictionary, fallback character sets
/// and the attached source loader.
impl<D> PartialEq for DataSet<D> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.custom == other.custom
    }
}

impl DataSet<StandardDataDictionary> {
    /// Create a new empty data set
    /// with the standard attribute dictionary.
    pub fn new_empty() -> Self {
        DataSet::new_empty_with_dict(StandardDataDictionary)
    }

    /// Construct a data set from an iterator of decoded elements,
    /// with the standard attribute dictionary.
    pub fn from_element_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = DataSetElement<StandardDataDictionary>>,
    {
        iter.into_iter().collect()
    }
}

impl<D> DataSet<D> {
    /// Create a new empty data set
    /// using the given dictionary for by-name access.
    pub fn new_empty_with_dict(dict: D) -> Self {
        DataSet {
            entries: BTreeMap::new(),
            custom: BTreeMap::new(),
            dict,
            fallback_charsets: smallvec![SpecificCharacterSet::Default],
            loader: None,
        }
    }

    /// Insert a data element into the data set,
    /// replacing (and returning) any element previously stored
    /// under the same tag.
    ///
    /// If the element has a private tag in a reserved block
    /// whose private creator element is present,
    /// the incoming element is decoded if necessary
    /// and stamped with the creator's name.
    pub fn put(&mut self, elt: impl Into<StoredElement<D>>) -> Option<StoredElement<D>> {
        let elt = elt.into();
        let tag = elt.tag();
        let out = self.entries.insert(tag, elt);
        self.apply_private_attribution(tag);
        out
    }

    /// Insert a data element under the given tag,
    /// checking that the element's own tag matches it.
    pub fn insert(
        &mut self,
        tag: Tag,
        elt: impl Into<StoredElement<D>>,
    ) -> Result<Option<StoredElement<D>>, TagMismatchError> {
        let elt = elt.into();
        let actual = elt.tag();
        ensure!(actual == tag, TagMismatchSnafu { key: tag, actual });
        Ok(self.put(elt))
    }

    /// Retrieve the element with the given tag in decoded form.
    ///
    /// If the element is stored raw,
    /// its payload is fetched from the source if deferred,
    /// decoded under the data set's effective character set,
    /// and the decoded form replaces the raw one,
    /// so that subsequent accesses pay no decoding cost.
    /// Private elements in a reserved block are stamped
    /// with their private creator's name at this point.
    pub fn element(&mut self, tag: Tag) -> Result<&DataSetElement<D>, AccessError> {
        ensure!(self.entries.contains_key(&tag), NoSuchDataElementTagSnafu { tag });
        self.decode_entry(tag)?;
        match self.entries.get(&tag) {
            Some(StoredElement::Decoded(e)) => Ok(e),
            _ => NoSuchDataElementTagSnafu { tag }.fail(),
        }
    }

    /// Retrieve the element with the given tag in decoded form,
    /// with mutable access.
    pub fn element_mut(&mut self, tag: Tag) -> Result<&mut DataSetElement<D>, AccessError> {
        ensure!(self.entries.contains_key(&tag), NoSuchDataElementTagSnafu { tag });
        self.decode_entry(tag)?;
        match self.entries.get_mut(&tag) {
            Some(StoredElement::Decoded(e)) => Ok(e),
            _ => NoSuchDataElementTagSnafu { tag }.fail(),
        }
    }

    /// Retrieve the decoded element with the given tag if it exists,
    /// returning `None` when the data set does not contain it.
    ///
    /// Unlike [`element`](DataSet::element),
    /// absence is not an error,
    /// but fetching and decoding failures still are.
    pub fn element_opt(&mut self, tag: Tag) -> Result<Option<&DataSetElement<D>>, AccessError> {
        match self.element(tag) {
            Ok(e) => Ok(Some(e)),
            Err(AccessError::NoSuchDataElementTag { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Retrieve the element with the given tag in its stored form,
    /// fetching a deferred payload if necessary
    /// but leaving the payload undecoded.
    pub fn stored_element(&mut self, tag: Tag) -> Result<&StoredElement<D>, AccessError> {
        ensure!(self.entries.contains_key(&tag), NoSuchDataElementTagSnafu { tag });
        self.resolve_payload(tag)?;
        self.entries
            .get(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Peek at the stored element with the given tag,
    /// without fetching or decoding anything.
    pub fn get(&self, tag: Tag) -> Option<&StoredElement<D>> {
        self.entries.get(&tag)
    }

    /// Remove the element with the given tag,
    /// reporting whether it was present.
    pub fn remove_element(&mut self, tag: Tag) -> bool {
        self.entries.remove(&tag).is_some()
    }

    /// Remove and return the element with the given tag
    /// in its stored form.
    pub fn take_element(&mut self, tag: Tag) -> Result<StoredElement<D>, AccessError> {
        self.entries
            .remove(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Whether the data set contains an element with the given tag.
    pub fn contains(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// The number of elements in the data set,
    /// not counting custom values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the data set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Obtain an iterator over the stored elements
    /// in ascending tag order.
    pub fn iter(&self) -> btree_map::Values<'_, Tag, StoredElement<D>> {
        self.entries.values()
    }

    /// Retrieve a custom value previously recorded under the given name.
    ///
    /// Custom values live outside the element map:
    /// they are not indexed by tag and do not take part in iteration.
    pub fn custom_value(&self, name: &str) -> Option<&Value<DataSet<D>>> {
        self.custom.get(name)
    }

    /// Record a value under an arbitrary name,
    /// outside the element map,
    /// replacing (and returning) any previous value under that name.
    pub fn set_custom_value(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value<DataSet<D>>>,
    ) -> Option<Value<DataSet<D>>> {
        self.custom.insert(name.into(), value.into())
    }

    /// Create a new data set containing only the elements
    /// of the given group,
    /// sharing this data set's dictionary,
    /// fallback character sets and source loader.
    pub fn group_dataset(&self, group: GroupNumber) -> DataSet<D>
    where
        D: Clone,
    {
        DataSet {
            entries: self
                .entries
                .iter()
                .filter(|(tag, _)| tag.group() == group)
                .map(|(tag, elt)| (*tag, elt.clone()))
                .collect(),
            custom: BTreeMap::new(),
            dict: self.dict.clone(),
            fallback_charsets: self.fallback_charsets.clone(),
            loader: self.loader.clone(),
        }
    }

    /// The character sets assumed for text decoding
    /// when the data set does not declare any.
    pub fn fallback_character_sets(&self) -> &[SpecificCharacterSet] {
        &self.fallback_charsets
    }

    /// Define the character sets assumed for text decoding
    /// when the data set does not declare any.
    pub fn set_fallback_character_sets(
        &mut self,
        charsets: impl IntoIterator<Item = SpecificCharacterSet>,
    ) {
        self.fallback_charsets = charsets.into_iter().collect();
    }

    /// Attach a loader for fetching deferred payloads
    /// from the data set's original source.
    pub fn set_source_loader(&mut self, loader: SourceLoader) {
        self.loader = Some(loader);
    }

    /// The loader attached for deferred payload fetching, if any.
    pub fn source_loader(&self) -> Option<&SourceLoader> {
        self.loader.as_ref()
    }

    /// Determine the effective character sets of this data set:
    /// the _Specific Character Set_ element if present and non-blank,
    /// the fallback character sets otherwise.
    ///
    /// A raw character set declaration is interpreted ephemerally,
    /// with the default character repertoire,
    /// and is left in its stored form.
    pub fn character_set(&self) -> C<SpecificCharacterSet> {
        match self.entries.get(&tags::SPECIFIC_CHARACTER_SET) {
            Some(StoredElement::Decoded(e)) => self.charsets_from_codes(e.value().strings()),
            Some(StoredElement::Raw(raw)) => {
                match decode_raw(raw, &[SpecificCharacterSet::Default]) {
                    Ok(value) => self.charsets_from_codes(value.strings()),
                    Err(e) => {
                        warn!("could not read the character set declaration: {}", e);
                        self.fallback_charsets.clone()
                    }
                }
            }
            None => self.fallback_charsets.clone(),
        }
    }

    fn charsets_from_codes(&self, codes: Option<Vec<&str>>) -> C<SpecificCharacterSet> {
        match codes {
            Some(codes) if codes.iter().any(|code| !code.trim_end().is_empty()) => {
                resolve_encodings(codes)
            }
            _ => self.fallback_charsets.clone(),
        }
    }

    /// Fetch the element's payload from the attached source
    /// if it is stored raw and deferred.
    fn resolve_payload(&mut self, tag: Tag) -> Result<(), AccessError> {
        let deferred = matches!(
            self.entries.get(&tag),
            Some(StoredElement::Raw(raw)) if raw.is_deferred()
        );
        if !deferred {
            return Ok(());
        }
        let loader = self.loader.clone();
        let data = {
            let raw = match self.entries.get(&tag) {
                Some(StoredElement::Raw(raw)) => raw,
                _ => return Ok(()),
            };
            loader
                .as_ref()
                .context(NoSourceSnafu)
                .and_then(|loader| loader.fetch(raw))
                .context(FetchPayloadSnafu { tag })?
        };
        if let Some(StoredElement::Raw(raw)) = self.entries.get_mut(&tag) {
            raw.set_data(data);
        }
        Ok(())
    }

    /// Replace a raw entry by its decoded form,
    /// fetching the payload first if deferred.
    /// Decoded and absent entries are left untouched.
    fn decode_entry(&mut self, tag: Tag) -> Result<(), AccessError> {
        if !matches!(self.entries.get(&tag), Some(StoredElement::Raw(_))) {
            return Ok(());
        }
        self.resolve_payload(tag)?;

        // the character set declaration itself
        // is always in the default repertoire
        let charsets: C<SpecificCharacterSet> = if tag == tags::SPECIFIC_CHARACTER_SET {
            smallvec![SpecificCharacterSet::Default]
        } else {
            self.character_set()
        };
        let creator = if tag.is_private() && tag.private_block() >= 0x10 {
            self.private_creator_of(tag)
        } else {
            None
        };

        let decoded = match self.entries.get(&tag) {
            Some(StoredElement::Raw(raw)) => {
                let value = decode_raw(raw, &charsets).context(DecodeValueSnafu { tag })?;
                let header = raw.header();
                let mut elem = DataElement::new(header.tag, header.vr, value);
                if let Some(creator) = creator {
                    elem.set_private_creator(creator);
                }
                Some(elem)
            }
            _ => None,
        };
        if let Some(elem) = decoded {
            self.entries.insert(tag, StoredElement::Decoded(elem));
        }
        Ok(())
    }

    /// Stamp the element with its private creator's name,
    /// if the tag lies in a reserved private block
    /// (blocks `0x10` through `0xFF`, the range which PS3.5 §7.8.1
    /// allows creators to reserve)
    /// and the block's creator element is present.
    /// Raw elements are decoded in the process;
    /// failures degrade to a warning.
    fn apply_private_attribution(&mut self, tag: Tag) {
        if !tag.is_private() || tag.private_block() < 0x10 {
            return;
        }
        if !self.entries.contains_key(&tag.private_creator_tag()) {
            return;
        }
        let is_raw = matches!(self.entries.get(&tag), Some(StoredElement::Raw(_)));
        if is_raw {
            if let Err(e) = self.decode_entry(tag) {
                warn!("could not decode private element {} at insertion: {}", tag, e);
            }
        } else {
            let creator = self.private_creator_of(tag);
            if let Some(creator) = creator {
                if let Some(StoredElement::Decoded(e)) = self.entries.get_mut(&tag) {
                    e.set_private_creator(creator);
                }
            }
        }
    }

    /// Look up the private creator name reserving the given tag's block,
    /// decoding the creator element if necessary.
    fn private_creator_of(&mut self, tag: Tag) -> Option<String> {
        let creator_tag = tag.private_creator_tag();
        if !self.entries.contains_key(&creator_tag) {
            return None;
        }
        if let Err(e) = self.decode_entry(creator_tag) {
            warn!(
                "could not decode private creator {} of {}: {}",
                creator_tag, tag, e
            );
            return None;
        }
        match self.entries.get(&creator_tag) {
            Some(StoredElement::Decoded(e)) => {
                e.value().string().map(|s| s.trim_end().to_string())
            }
            _ => None,
        }
    }
}

impl<D> DataSet<D>
where
    D: DataDictionary,
{
    /// Resolve a standard attribute name into its tag
    /// through the data set's dictionary.
    fn lookup_name(&self, name: &str) -> Result<Tag, AccessByNameError> {
        self.dict
            .by_name(name)
            .context(NoSuchAttributeNameSnafu { name })
            .map(|e| e.tag())
    }

    /// Retrieve the element with the given attribute name
    /// in decoded form.
    pub fn element_by_name(&mut self, name: &str) -> Result<&DataSetElement<D>, AccessByNameError> {
        let tag = self.lookup_name(name)?;
        self.element(tag).map_err(|e| e.into_access_by_name(name))
    }

    /// Retrieve the value of the element with the given attribute name.
    pub fn value_by_name(&mut self, name: &str) -> Result<&Value<DataSet<D>>, AccessByNameError> {
        self.element_by_name(name).map(|e| e.value())
    }

    /// Retrieve the value of the element with the given attribute name,
    /// returning `None` if the name is unknown to the dictionary
    /// or the element is not in the data set.
    pub fn value_by_name_opt(
        &mut self,
        name: &str,
    ) -> Result<Option<&Value<DataSet<D>>>, AccessByNameError> {
        match self.value_by_name(name) {
            Ok(v) => Ok(Some(v)),
            Err(AccessByNameError::NoSuchAttributeName { .. })
            | Err(AccessByNameError::NoSuchDataElementAlias { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Assign a value under the given attribute name.
    ///
    /// If the dictionary knows the name,
    /// the element under the resolved tag is updated in place
    /// (keeping its value representation),
    /// or created with the dictionary's representation for the attribute.
    /// Either way, private-tag attribution applies
    /// as it does on [`put`](DataSet::put).
    /// Names which resolve to a repeating tag range are rejected.
    /// Names unknown to the dictionary
    /// are recorded as custom values instead,
    /// outside the element map.
    pub fn set_value_by_name(
        &mut self,
        name: &str,
        value: impl Into<Value<DataSet<D>>>,
    ) -> Result<(), AccessByNameError> {
        let value = value.into();
        let resolved = self.dict.by_name(name).map(|e| (e.tag_range(), e.vr()));
        match resolved {
            None => {
                self.custom.insert(name.to_string(), value);
                Ok(())
            }
            Some((TagRange::Single(tag), vr)) => {
                if let Some(StoredElement::Decoded(e)) = self.entries.get_mut(&tag) {
                    e.update_value(|v| *v = value);
                    // assignments re-run private attribution, like `put`
                    self.apply_private_attribution(tag);
                    return Ok(());
                }
                let elem = match self.entries.get(&tag) {
                    // raw entry: replace it outright, keeping the recorded header
                    Some(StoredElement::Raw(raw)) => {
                        let header = raw.header();
                        DataElement::new(header.tag, header.vr, value)
                    }
                    _ => DataElement::new(tag, vr.relaxed(), value),
                };
                self.put(elem);
                Ok(())
            }
            Some(_) => RepeaterNameSnafu { name }.fail(),
        }
    }

    /// Remove the element with the given attribute name,
    /// reporting whether it was present.
    ///
    /// For names unknown to the dictionary,
    /// the custom value under that name is removed instead;
    /// in that case the name must exist.
    pub fn remove_by_name(&mut self, name: &str) -> Result<bool, AccessByNameError> {
        let resolved = self.dict.by_name(name).map(|e| e.tag_range());
        match resolved {
            Some(TagRange::Single(tag)) => Ok(self.entries.remove(&tag).is_some()),
            Some(_) => RepeaterNameSnafu { name }.fail(),
            None => {
                if self.custom.remove(name).is_some() {
                    Ok(true)
                } else {
                    NoSuchAttributeNameSnafu { name }.fail()
                }
            }
        }
    }

    /// Whether the data set contains an element
    /// with the given attribute name.
    /// Names unknown to the dictionary yield `false`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.dict
            .by_name(name)
            .map(|e| self.entries.contains_key(&e.tag()))
            .unwrap_or(false)
    }

    /// List the attribute names of the elements in this data set,
    /// sorted and deduplicated,
    /// keeping only names which contain any of the given filters
    /// (case insensitive).
    /// An empty filter list keeps all names.
    /// Elements unknown to the dictionary are omitted.
    pub fn tag_names(&self, filters: &[&str]) -> Vec<String> {
        let filters: Vec<String> = filters.iter().map(|f| f.to_lowercase()).collect();
        self.entries
            .keys()
            .filter_map(|tag| self.dict.by_tag(*tag))
            .map(|e| e.alias().to_string())
            .filter(|name| {
                filters.is_empty() || {
                    let lowered = name.to_lowercase();
                    filters.iter().any(|f| lowered.contains(f.as_str()))
                }
            })
            .sorted()
            .dedup()
            .collect()
    }
}

/// Base iterator type for traversing an owned data set's elements.
#[derive(Debug)]
pub struct Iter<D> {
    inner: btree_map::IntoIter<Tag, StoredElement<D>>,
}

impl<D> Iterator for Iter<D> {
    type Item = StoredElement<D>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, elt)| elt)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<D> IntoIterator for DataSet<D> {
    type Item = StoredElement<D>;
    type IntoIter = Iter<D>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, D> IntoIterator for &'a DataSet<D> {
    type Item = &'a StoredElement<D>;
    type IntoIter = btree_map::Values<'a, Tag, StoredElement<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<D> FromIterator<DataSetElement<D>> for DataSet<D>
where
    D: Default,
{
    fn from_iter<T: IntoIterator<Item = DataSetElement<D>>>(iter: T) -> Self {
        let mut obj = DataSet::new_empty_with_dict(D::default());
        obj.extend(iter);
        obj
    }
}

impl<D> FromIterator<RawDataElement> for DataSet<D>
where
    D: Default,
{
    fn from_iter<T: IntoIterator<Item = RawDataElement>>(iter: T) -> Self {
        let mut obj = DataSet::new_empty_with_dict(D::default());
        obj.extend(iter);
        obj
    }
}

impl<D> Extend<DataSetElement<D>> for DataSet<D> {
    fn extend<I: IntoIterator<Item = DataSetElement<D>>>(&mut self, iter: I) {
        for elt in iter {
            self.put(elt);
        }
    }
}

impl<D> Extend<RawDataElement> for DataSet<D> {
    fn extend<I: IntoIterator<Item = RawDataElement>>(&mut self, iter: I) {
        for elt in iter {
            self.put(elt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteordered::Endianness;
    use dcmset_core::dcm_value;
    use dcmset_core::dictionary::{DataDictionaryEntryRef, StubDataDictionary, VirtualVr};
    use dcmset_core::value::PrimitiveValue;

    fn raw_element(tag: Tag, vr: VR, data: &[u8]) -> RawDataElement {
        RawDataElement::new(tag, vr, data.to_vec(), Endianness::Little)
    }

    static VENDOR_THING: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
        tag: TagRange::Single(Tag(0x0009, 0x1001)),
        alias: "VendorThing",
        vr: VirtualVr::Exact(VR::LO),
    };

    /// a dictionary which names a single private-block attribute
    struct VendorDictionary;

    impl DataDictionary for VendorDictionary {
        type Entry = DataDictionaryEntryRef<'static>;

        fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
            if tag == VENDOR_THING.tag.inner() {
                Some(&VENDOR_THING)
            } else {
                None
            }
        }

        fn by_name(&self, name: &str) -> Option<&Self::Entry> {
            if name == VENDOR_THING.alias {
                Some(&VENDOR_THING)
            } else {
                None
            }
        }
    }

    #[test]
    fn iteration_is_in_tag_order() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::PIXEL_DATA, VR::OW, dcm_value!(U16, [0, 1])));
        obj.put(DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"));
        obj.put(DataElement::new(tags::MODALITY, VR::CS, "MR"));

        let tags_seen: Vec<Tag> = obj.iter().map(|e| e.tag()).collect();
        assert_eq!(
            tags_seen,
            vec![tags::MODALITY, tags::PATIENT_NAME, tags::PIXEL_DATA]
        );

        // same order through the owned iterator
        let tags_owned: Vec<Tag> = obj.into_iter().map(|e| e.tag()).collect();
        assert_eq!(tags_owned, tags_seen);
    }

    #[test]
    fn from_element_iter_collects() {
        let obj = DataSet::from_element_iter(vec![
            DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4"),
            DataElement::new(tags::MODALITY, VR::CS, "CT"),
        ]);
        assert_eq!(obj.len(), 2);
        assert!(obj.contains(tags::MODALITY));
        assert!(obj.contains(tags::SOP_INSTANCE_UID));
    }

    #[test]
    fn put_replaces_and_returns_previous() {
        let mut obj = DataSet::new_empty();
        assert!(obj.put(DataElement::new(tags::MODALITY, VR::CS, "MR")).is_none());
        let previous = obj.put(DataElement::new(tags::MODALITY, VR::CS, "CT"));
        assert_eq!(
            previous,
            Some(StoredElement::Decoded(DataElement::new(
                tags::MODALITY,
                VR::CS,
                "MR"
            )))
        );
        assert_eq!(obj.len(), 1);
    }

    #[test]
    fn checked_insert_requires_matching_tag() {
        let mut obj = DataSet::new_empty();
        let e = obj
            .insert(tags::PATIENT_ID, DataElement::new(tags::MODALITY, VR::CS, "MR"))
            .unwrap_err();
        assert_eq!(e.key, tags::PATIENT_ID);
        assert_eq!(e.actual, tags::MODALITY);
        assert!(obj.is_empty());

        obj.insert(tags::MODALITY, DataElement::new(tags::MODALITY, VR::CS, "MR"))
            .unwrap();
        assert_eq!(obj.len(), 1);
    }

    #[test]
    fn element_decodes_raw_entries_in_place() {
        let mut obj = DataSet::new_empty();
        obj.put(raw_element(tags::PATIENT_NAME, VR::PN, b"Doe^John"));
        assert!(!obj.get(tags::PATIENT_NAME).unwrap().is_decoded());

        let name = obj.element(tags::PATIENT_NAME).unwrap();
        assert_eq!(name.to_str().unwrap(), "Doe^John");

        // the decoded form replaced the raw one
        assert!(obj.get(tags::PATIENT_NAME).unwrap().is_decoded());
        // and further accesses see the same element
        assert_eq!(
            obj.element(tags::PATIENT_NAME).unwrap().to_str().unwrap(),
            "Doe^John"
        );
    }

    #[test]
    fn element_opt_distinguishes_absence() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::MODALITY, VR::CS, "MR"));
        assert!(obj.element_opt(tags::MODALITY).unwrap().is_some());
        assert!(obj.element_opt(tags::PATIENT_ID).unwrap().is_none());

        let e = obj.element(tags::PATIENT_ID).unwrap_err();
        assert!(matches!(e, AccessError::NoSuchDataElementTag { .. }));
    }

    #[test]
    fn stored_element_leaves_payload_undecoded() {
        let mut obj = DataSet::new_empty();
        obj.put(raw_element(tags::MODALITY, VR::CS, b"MR"));
        let stored = obj.stored_element(tags::MODALITY).unwrap();
        assert!(!stored.is_decoded());
    }

    #[test]
    fn remove_and_take() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::MODALITY, VR::CS, "MR"));
        obj.put(raw_element(tags::PATIENT_ID, VR::LO, b"ID0001"));

        assert!(obj.remove_element(tags::MODALITY));
        assert!(!obj.remove_element(tags::MODALITY));

        let taken = obj.take_element(tags::PATIENT_ID).unwrap();
        assert_eq!(taken.tag(), tags::PATIENT_ID);
        assert!(obj.is_empty());
        assert!(matches!(
            obj.take_element(tags::PATIENT_ID),
            Err(AccessError::NoSuchDataElementTag { .. })
        ));
    }

    #[test]
    fn access_by_name() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"));

        assert_eq!(
            obj.element_by_name("PatientName").unwrap().to_str().unwrap(),
            "Doe^John"
        );
        assert!(matches!(
            obj.element_by_name("PatientID"),
            Err(AccessByNameError::NoSuchDataElementAlias { .. })
        ));
        assert!(matches!(
            obj.element_by_name("HighwayToTheDangerZone"),
            Err(AccessByNameError::NoSuchAttributeName { .. })
        ));

        assert!(obj.value_by_name_opt("PatientName").unwrap().is_some());
        assert!(obj.value_by_name_opt("PatientID").unwrap().is_none());
        assert!(obj.value_by_name_opt("HighwayToTheDangerZone").unwrap().is_none());
    }

    #[test]
    fn set_value_by_name_updates_in_place() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"));
        obj.set_value_by_name("PatientName", "Doe^Jane").unwrap();

        let e = obj.element(tags::PATIENT_NAME).unwrap();
        assert_eq!(e.vr(), VR::PN);
        assert_eq!(e.to_str().unwrap(), "Doe^Jane");
        assert_eq!(obj.len(), 1);
    }

    #[test]
    fn set_value_by_name_creates_with_dictionary_vr() {
        let mut obj = DataSet::new_empty();
        obj.set_value_by_name("Modality", "MR").unwrap();
        assert_eq!(obj.element(tags::MODALITY).unwrap().vr(), VR::CS);

        // attributes with an ambiguous representation take the relaxed form
        obj.set_value_by_name("SmallestImagePixelValue", dcm_value!(U16, [5]))
            .unwrap();
        assert_eq!(
            obj.element(tags::SMALLEST_IMAGE_PIXEL_VALUE).unwrap().vr(),
            VR::US
        );
    }

    #[test]
    fn set_value_by_name_rejects_repeaters() {
        let mut obj = DataSet::new_empty();
        let e = obj
            .set_value_by_name("OverlayData", dcm_value!(U8, [0, 1]))
            .unwrap_err();
        assert!(matches!(e, AccessByNameError::RepeaterName { .. }));
    }

    #[test]
    fn set_value_by_name_reapplies_attribution() {
        let mut obj = DataSet::new_empty_with_dict(VendorDictionary);
        obj.put(DataElement::new(Tag(0x0009, 0x1001), VR::LO, "vendor payload"));
        // too late to attribute the element above on insertion
        obj.put(DataElement::new(Tag(0x0009, 0x0010), VR::LO, "ACME 1.1"));

        obj.set_value_by_name("VendorThing", "other payload").unwrap();

        let e = obj.element(Tag(0x0009, 0x1001)).unwrap();
        assert_eq!(e.to_str().unwrap(), "other payload");
        assert_eq!(e.private_creator(), Some("ACME 1.1"));
    }

    #[test]
    fn unknown_names_go_to_custom_values() {
        let mut obj = DataSet::new_empty();
        obj.set_value_by_name("InstitutionNickname", "the lab").unwrap();

        // not an element
        assert_eq!(obj.len(), 0);
        assert!(obj.tag_names(&[]).is_empty());
        // but retrievable by name
        assert_eq!(
            obj.custom_value("InstitutionNickname").and_then(|v| v.string()),
            Some("the lab")
        );

        assert!(obj.remove_by_name("InstitutionNickname").unwrap());
        assert!(obj.custom_value("InstitutionNickname").is_none());
        assert!(matches!(
            obj.remove_by_name("InstitutionNickname"),
            Err(AccessByNameError::NoSuchAttributeName { .. })
        ));
    }

    #[test]
    fn all_names_are_custom_with_a_stub_dictionary() {
        let mut obj: DataSet<StubDataDictionary> =
            DataSet::new_empty_with_dict(StubDataDictionary);
        obj.set_value_by_name("PatientName", "Doe^John").unwrap();
        assert!(obj.is_empty());
        assert!(obj.custom_value("PatientName").is_some());
        assert!(!obj.contains_name("PatientName"));
    }

    #[test]
    fn remove_by_name_removes_elements() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::MODALITY, VR::CS, "MR"));
        assert!(obj.contains_name("Modality"));
        assert!(obj.remove_by_name("Modality").unwrap());
        assert!(!obj.remove_by_name("Modality").unwrap());
        assert!(!obj.contains_name("Modality"));
    }

    #[test]
    fn tag_names_filters_case_insensitively() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"));
        obj.put(DataElement::new(tags::PATIENT_ID, VR::LO, "ID0001"));
        obj.put(DataElement::new(tags::MODALITY, VR::CS, "MR"));

        assert_eq!(
            obj.tag_names(&[]),
            vec!["Modality", "PatientID", "PatientName"]
        );
        assert_eq!(
            obj.tag_names(&["PATIENT"]),
            vec!["PatientID", "PatientName"]
        );
        assert_eq!(obj.tag_names(&["modality", "name"]), vec!["Modality", "PatientName"]);
    }

    #[test]
    fn group_dataset_filters_by_group() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::MEDIA_STORAGE_SOP_INSTANCE_UID, VR::UI, "1.2.3"));
        obj.put(DataElement::new(tags::TRANSFER_SYNTAX_UID, VR::UI, "1.2.840.10008.1.2.1"));
        obj.put(DataElement::new(tags::MODALITY, VR::CS, "MR"));

        let meta = obj.group_dataset(0x0002);
        assert_eq!(meta.len(), 2);
        assert!(meta.contains(tags::TRANSFER_SYNTAX_UID));
        assert!(!meta.contains(tags::MODALITY));
    }

    #[test]
    fn character_set_follows_declaration() {
        let mut obj = DataSet::new_empty();
        assert_eq!(&*obj.character_set(), &[SpecificCharacterSet::Default]);

        obj.put(raw_element(tags::SPECIFIC_CHARACTER_SET, VR::CS, b"ISO_IR 100"));
        // raw declarations are interpreted without decoding them in place
        assert_eq!(&*obj.character_set(), &[SpecificCharacterSet::IsoIr100]);
        assert!(!obj.get(tags::SPECIFIC_CHARACTER_SET).unwrap().is_decoded());

        obj.put(DataElement::new(tags::SPECIFIC_CHARACTER_SET, VR::CS, "ISO_IR 192"));
        assert_eq!(&*obj.character_set(), &[SpecificCharacterSet::IsoIr192]);
    }

    #[test]
    fn blank_character_set_declaration_uses_fallback() {
        let mut obj = DataSet::new_empty();
        obj.set_fallback_character_sets(vec![SpecificCharacterSet::IsoIr144]);
        obj.put(DataElement::new(
            tags::SPECIFIC_CHARACTER_SET,
            VR::CS,
            PrimitiveValue::Empty,
        ));
        assert_eq!(&*obj.character_set(), &[SpecificCharacterSet::IsoIr144]);
    }

    #[test]
    fn text_decoding_uses_declared_character_set() {
        let mut obj = DataSet::new_empty();
        obj.put(raw_element(tags::SPECIFIC_CHARACTER_SET, VR::CS, b"ISO_IR 100"));
        obj.put(raw_element(tags::PATIENT_NAME, VR::PN, b"Sim\xF5es^Jo\xE3o"));

        let name = obj.element(tags::PATIENT_NAME).unwrap();
        assert_eq!(name.to_str().unwrap(), "Simões^João");
    }

    #[test]
    fn private_elements_are_attributed_to_their_creator() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(Tag(0x0009, 0x0010), VR::LO, "ACME 1.1"));
        obj.put(DataElement::new(Tag(0x0009, 0x1001), VR::LO, "vendor payload"));

        let e = obj.element(Tag(0x0009, 0x1001)).unwrap();
        assert_eq!(e.private_creator(), Some("ACME 1.1"));
        // the creator element itself is not attributed
        let creator = obj.element(Tag(0x0009, 0x0010)).unwrap();
        assert_eq!(creator.private_creator(), None);
    }

    #[test]
    fn attribution_does_not_apply_retroactively() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(Tag(0x0009, 0x1001), VR::LO, "vendor payload"));
        obj.put(DataElement::new(Tag(0x0009, 0x0010), VR::LO, "ACME 1.1"));

        // the creator arrived after the element was already decoded
        let e = obj.element(Tag(0x0009, 0x1001)).unwrap();
        assert_eq!(e.private_creator(), None);
    }

    #[test]
    fn attribution_applies_when_raw_entries_are_decoded() {
        let mut obj = DataSet::new_empty();
        obj.put(raw_element(Tag(0x0009, 0x1001), VR::LO, b"vendor payload"));
        obj.put(DataElement::new(Tag(0x0009, 0x0010), VR::LO, "ACME 1.1"));

        // still raw: conversion had no creator to use at insertion time
        let e = obj.element(Tag(0x0009, 0x1001)).unwrap();
        assert_eq!(e.private_creator(), Some("ACME 1.1"));
    }

    #[test]
    fn raw_private_elements_decode_at_insertion_when_creator_is_known() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(Tag(0x0009, 0x0010), VR::LO, "ACME 1.1"));
        obj.put(raw_element(Tag(0x0009, 0x1001), VR::LO, b"vendor payload"));

        let stored = obj.get(Tag(0x0009, 0x1001)).unwrap();
        assert!(stored.is_decoded());
        assert_eq!(
            stored.decoded().and_then(|e| e.private_creator()),
            Some("ACME 1.1")
        );
    }

    #[test]
    fn attribution_only_covers_reserved_blocks() {
        let mut obj = DataSet::new_empty();
        // a stray element below the creator range
        // must not pass as the creator of block 0x0F
        obj.put(DataElement::new(Tag(0x0009, 0x000F), VR::LO, "not a creator"));
        obj.put(DataElement::new(Tag(0x0009, 0x0F01), VR::LO, "vendor payload"));

        let e = obj.element(Tag(0x0009, 0x0F01)).unwrap();
        assert_eq!(e.private_creator(), None);
    }

    #[test]
    fn equality_ignores_dictionary_state() {
        let mut a = DataSet::new_empty();
        a.put(DataElement::new(tags::MODALITY, VR::CS, "MR"));
        let mut b = DataSet::new_empty();
        b.set_fallback_character_sets(vec![SpecificCharacterSet::IsoIr100]);
        b.put(DataElement::new(tags::MODALITY, VR::CS, "MR"));
        assert_eq!(a, b);

        b.set_custom_value("Note", "different");
        assert_ne!(a, b);
    }
}
