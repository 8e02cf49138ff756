//! Traversal of data sets at all depths:
//! an ordered walk with mutable access,
//! a lazy depth-first flattening iterator,
//! and the whole-tree operations built on top of them.
use crate::dataset::{DataSet, StoredElement};
use crate::AccessError;
use dcmset_core::header::{DataElementHeader, Tag};
use std::collections::btree_map;

impl<D> DataSet<D> {
    /// Visit every element of this data set in ascending tag order,
    /// passing the data set itself and the element's header
    /// to the callback,
    /// so that the visited element may be inspected, replaced or removed.
    ///
    /// When `recursive` is enabled,
    /// the items of each sequence element are visited in document order,
    /// immediately after the sequence element itself.
    /// Elements removed by the callback before their turn
    /// are not visited,
    /// and removing a sequence element skips its items.
    ///
    /// The first error returned by the callback aborts the walk.
    pub fn walk_mut<F, E>(&mut self, recursive: bool, mut callback: F) -> Result<(), E>
    where
        F: FnMut(&mut DataSet<D>, DataElementHeader) -> Result<(), E>,
    {
        self.walk_mut_impl(recursive, &mut callback)
    }

    fn walk_mut_impl<F, E>(&mut self, recursive: bool, callback: &mut F) -> Result<(), E>
    where
        F: FnMut(&mut DataSet<D>, DataElementHeader) -> Result<(), E>,
    {
        let tags: Vec<Tag> = self.entries.keys().copied().collect();
        for tag in tags {
            let header = match self.entries.get(&tag) {
                Some(elt) => elt.header(),
                // removed by a previous visit
                None => continue,
            };
            callback(self, header)?;
            if !recursive {
                continue;
            }
            // the callback may have removed or replaced this element,
            // so the entry is looked up anew
            if let Some(StoredElement::Decoded(elt)) = self.entries.get_mut(&tag) {
                if let Some(items) = elt.value_mut().items_mut() {
                    for item in items {
                        item.walk_mut_impl(recursive, callback)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Obtain an iterator over all elements at any depth,
    /// in depth-first order:
    /// each sequence element is yielded
    /// before the elements of its items.
    ///
    /// Raw sequence payloads are not expanded;
    /// call [`decode_all`](DataSet::decode_all) first
    /// if nested data sets may still be undecoded.
    pub fn iter_all(&self) -> FlattenIter<'_, D> {
        FlattenIter {
            stack: vec![self.iter()],
        }
    }

    /// Remove, at every depth, all elements with a private tag.
    pub fn remove_private_tags(&mut self) {
        let _ = self.walk_mut(true, |obj, header| {
            if header.tag.is_private() {
                obj.remove_element(header.tag);
            }
            Ok::<_, std::convert::Infallible>(())
        });
    }

    /// Decode every element of this data set and of all nested data sets,
    /// each level under its own effective character set.
    pub fn decode_all(&mut self) -> Result<(), AccessError> {
        self.walk_mut(true, |obj, header| obj.element(header.tag).map(|_| ()))
    }
}

/// A lazy iterator over all elements of a data set at any depth,
/// as created by [`DataSet::iter_all`].
#[derive(Debug)]
pub struct FlattenIter<'a, D> {
    stack: Vec<btree_map::Values<'a, Tag, StoredElement<D>>>,
}

impl<'a, D> Iterator for FlattenIter<'a, D> {
    type Item = &'a StoredElement<D>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(elt) => {
                    if let StoredElement::Decoded(e) = elt {
                        if let Some(items) = e.value().items() {
                            // the first item must come out first,
                            // so the stack receives them in reverse
                            for item in items.iter().rev() {
                                self.stack.push(item.iter());
                            }
                        }
                    }
                    return Some(elt);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
