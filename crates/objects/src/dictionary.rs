//! Ordered PDF dictionaries.
//!
//! Entries keep their insertion order, which is the order used by the textual
//! form, [`PdfNode::byte_len`] and [`PdfNode::write_bytes`] alike. Values that
//! are indirect objects are always rendered by reference.
//!
//! ```text
//! <<
//! /Type /Catalog
//! /Pages 2 0 R
//! >>
//! ```

use crate::buffer::write_str;
use crate::error::ObjectError;
use crate::indirect::IndirectObjects;
use crate::keys::KeyPolicy;
use crate::name::PdfName;
use crate::object::{PdfNode, PdfObject};
use indexmap::IndexMap;
use log::{debug, warn};
use std::fmt;
use std::sync::Arc;

/// The one key whose references may stay unresolved after [`PdfDictionary::dereference`].
///
/// Marked-content `/Obj` entries routinely point at objects missing from the
/// table. Only this key is exempt.
const OBJ_KEY: &str = "Obj";

const OPEN: &str = "<<\n";
const CLOSE: &str = ">>";

#[derive(Debug, Clone, Default)]
pub struct PdfDictionary {
    entries: IndexMap<PdfName, PdfObject>,
    allowed_keys: Option<KeyPolicy>,
}

impl PdfDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty dictionary whose validated inserts must use keys from `policy`.
    pub fn with_allowed_keys(policy: KeyPolicy) -> Self {
        Self { entries: IndexMap::new(), allowed_keys: Some(policy) }
    }

    /// Builds a dictionary from initial entries. Construction never checks the
    /// key policy; only later [`set`](Self::set) calls do.
    pub fn from_entries<I, K, V>(entries: I, allowed_keys: Option<KeyPolicy>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<PdfName>,
        V: Into<PdfObject>,
    {
        let mut dict = Self { entries: IndexMap::new(), allowed_keys };
        for (key, value) in entries {
            dict.set_unchecked(key, value);
        }
        dict
    }

    pub fn allowed_keys(&self) -> Option<&KeyPolicy> {
        self.allowed_keys.as_ref()
    }

    /// Inserts or overwrites an entry after checking the key against the
    /// dictionary's policy, if it has one.
    ///
    /// Overwriting keeps the key's original position; new keys go last.
    pub fn set(
        &mut self,
        key: impl Into<PdfName>,
        value: impl Into<PdfObject>,
    ) -> Result<&mut Self, ObjectError> {
        let key = key.into();
        if let Some(policy) = &self.allowed_keys {
            if !policy.contains(key.as_str()) {
                return Err(ObjectError::InvalidKey(key.as_str().to_string()));
            }
        }
        self.entries.insert(key, value.into());
        Ok(self)
    }

    /// Inserts or overwrites an entry without consulting the key policy.
    pub fn set_unchecked(&mut self, key: impl Into<PdfName>, value: impl Into<PdfObject>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&PdfObject> {
        self.entries.get(key.as_ref())
    }

    pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut PdfObject> {
        self.entries.get_mut(key.as_ref())
    }

    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PdfName, &PdfObject)> {
        self.entries.iter()
    }

    /// Replaces every value that is an unresolved reference with the indirect
    /// object it points at.
    ///
    /// Only this dictionary's own entries are visited; nested dictionaries and
    /// arrays are walked by the caller. A reference missing from `objects` is an
    /// error, except under the `Obj` key where it is logged and left in place.
    /// Entries visited before a failure stay resolved.
    pub fn dereference(&mut self, objects: &IndirectObjects) -> Result<(), ObjectError> {
        for (key, value) in self.entries.iter_mut() {
            let PdfObject::Reference(reference) = *value else {
                continue;
            };
            match objects.get(&reference) {
                Some(resolved) => {
                    if key.as_str() == OBJ_KEY {
                        debug!("Successfully dereferenced ({}, {})", key, reference);
                    }
                    // The key was validated when first inserted; only the value kind changes.
                    *value = PdfObject::Indirect(Arc::clone(resolved));
                }
                None if key.as_str() == OBJ_KEY => {
                    warn!("Failed to dereference: ({}, {})", key, reference);
                }
                None => {
                    return Err(ObjectError::UnresolvedReference {
                        location: key.to_string(),
                        reference,
                    });
                }
            }
        }
        Ok(())
    }
}

impl PartialEq for PdfDictionary {
    /// Compares entries in order. The key policy is not part of a dictionary's value.
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().zip(other.entries.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Into<PdfName>, V: Into<PdfObject>> FromIterator<(K, V)> for PdfDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter, None)
    }
}

impl fmt::Display for PdfDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(OPEN)?;
        for (key, value) in &self.entries {
            writeln!(f, "{} {}", key, value.embedded())?;
        }
        f.write_str(CLOSE)
    }
}

impl PdfNode for PdfDictionary {
    fn byte_len(&self) -> usize {
        let entries: usize = self
            .entries
            .iter()
            .map(|(key, value)| key.byte_len() + 1 + value.embedded().byte_len() + 1)
            .sum();
        OPEN.len() + entries + CLOSE.len()
    }

    fn write_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ObjectError> {
        let mut remaining = write_str(OPEN, buf)?;
        for (key, value) in &self.entries {
            remaining = key.write_bytes(remaining)?;
            remaining = write_str(" ", remaining)?;
            remaining = value.embedded().write_bytes(remaining)?;
            remaining = write_str("\n", remaining)?;
        }
        write_str(CLOSE, remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::PdfArray;
    use crate::buffer::to_bytes;
    use crate::indirect::{PdfIndirectObject, PdfIndirectReference};
    use crate::stream::PdfStream;
    use crate::string::PdfString;

    fn catalog() -> PdfDictionary {
        let mut dict = PdfDictionary::new();
        dict.set("Type", PdfObject::name("Catalog"))
            .unwrap()
            .set("Count", 3)
            .unwrap();
        dict
    }

    fn assert_consistent(dict: &PdfDictionary) {
        let text = dict.to_string();
        assert_eq!(dict.byte_len(), text.len(), "byte_len disagrees with {:?}", text);
        assert_eq!(to_bytes(dict).unwrap(), text.as_bytes());
    }

    #[test]
    fn test_catalog_forms() {
        let dict = catalog();
        let expected = "<<\n/Type /Catalog\n/Count 3\n>>";
        assert_eq!(dict.to_string(), expected);
        assert_eq!(dict.byte_len(), expected.len());

        let mut buf = vec![0u8; expected.len()];
        let remaining = dict.write_bytes(&mut buf).unwrap();
        assert!(remaining.is_empty());
        assert_eq!(buf, expected.as_bytes());
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = PdfDictionary::new();
        assert_eq!(dict.to_string(), "<<\n>>");
        assert_eq!(dict.byte_len(), 5);
        assert_consistent(&dict);
    }

    #[test]
    fn test_write_returns_remainder_after_dictionary() {
        let dict = catalog();
        let mut buf = vec![b'.'; dict.byte_len() + 4];
        let remaining = dict.write_bytes(&mut buf).unwrap();
        assert_eq!(remaining.len(), 4);
        assert_eq!(remaining, b"....");
    }

    #[test]
    fn test_write_into_short_buffer_fails() {
        let dict = catalog();
        let mut buf = vec![0u8; dict.byte_len() - 1];
        assert!(matches!(
            dict.write_bytes(&mut buf),
            Err(ObjectError::BufferTooSmall { .. })
        ));
    }

    #[test]
    fn test_string_and_name_keys_collide() {
        let mut dict = PdfDictionary::new();
        let value = PdfObject::name("Pages");
        dict.set("Type", value.clone()).unwrap();
        assert_eq!(dict.get(PdfName::new("Type")), Some(&value));

        let mut other = PdfDictionary::new();
        other.set(PdfName::new("Type"), value.clone()).unwrap();
        assert_eq!(other.get("Type"), Some(&value));

        other.set("Type", 1).unwrap();
        assert_eq!(other.len(), 1);
        assert_eq!(other.get(&PdfName::new("Type")), Some(&PdfObject::from(1)));
    }

    #[test]
    fn test_get_missing_key() {
        assert_eq!(catalog().get("Missing"), None);
        assert!(!catalog().contains_key("Missing"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut dict = PdfDictionary::new();
        dict.set("A", 1).unwrap().set("B", 2).unwrap().set("C", 3).unwrap();
        dict.set("B", 20).unwrap();

        let keys: Vec<_> = dict.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["A", "B", "C"]);
        assert_eq!(dict.to_string(), "<<\n/A 1\n/B 20\n/C 3\n>>");
        assert_consistent(&dict);
    }

    #[test]
    fn test_validation_gate() {
        let mut dict = PdfDictionary::with_allowed_keys(KeyPolicy::new(["Type", "Length"]));
        dict.set("Type", PdfObject::name("XObject")).unwrap();

        let err = dict.set("Rogue", 1).unwrap_err();
        assert_eq!(err, ObjectError::InvalidKey("Rogue".to_string()));
        assert_eq!(err.to_string(), "Invalid key: \"Rogue\"");
        assert!(!dict.contains_key("Rogue"));

        dict.set_unchecked("Rogue", 1);
        assert_eq!(dict.get("Rogue"), Some(&PdfObject::from(1)));
    }

    #[test]
    fn test_construction_skips_validation() {
        let dict = PdfDictionary::from_entries(
            [("Type", PdfObject::name("Catalog")), ("Rogue", PdfObject::Null)],
            Some(KeyPolicy::new(["Type"])),
        );
        assert_eq!(dict.len(), 2);
        assert!(dict.allowed_keys().is_some());
    }

    #[test]
    fn test_from_iterator() {
        let dict: PdfDictionary = [("W", 10), ("H", 20)].into_iter().collect();
        assert_eq!(dict.to_string(), "<<\n/W 10\n/H 20\n>>");
        assert!(dict.allowed_keys().is_none());
    }

    #[test]
    fn test_indirect_values_are_written_by_reference() {
        let pages = Arc::new(PdfIndirectObject::new((5, 0), PdfObject::literal("a long body")));
        let mut dict = PdfDictionary::new();
        dict.set("Pages", PdfObject::Indirect(pages)).unwrap();

        assert_eq!(dict.to_string(), "<<\n/Pages 5 0 R\n>>");
        assert_consistent(&dict);
    }

    #[test]
    fn test_nested_containers_are_consistent() {
        let mut resources = PdfDictionary::new();
        resources.set("ProcSet", vec![PdfObject::name("PDF"), PdfObject::name("Text")]).unwrap();

        let mut dict = PdfDictionary::new();
        dict.set("Type", PdfObject::name("Page"))
            .unwrap()
            .set("MediaBox", [0, 0, 612, 792].into_iter().collect::<PdfArray>())
            .unwrap()
            .set("Resources", resources)
            .unwrap()
            .set("Title", PdfObject::literal("Q1 (draft)"))
            .unwrap()
            .set("Odd Key", true)
            .unwrap();

        assert_eq!(
            dict.to_string(),
            "<<\n/Type /Page\n/MediaBox [0 0 612 792]\n/Resources <<\n/ProcSet [/PDF /Text]\n>>\n\
             /Title (Q1 \\(draft\\))\n/Odd#20Key true\n>>"
        );
        assert_consistent(&dict);
    }

    #[test]
    fn test_binary_values_keep_forms_consistent() {
        let mut dict = PdfDictionary::new();
        dict.set("Title", PdfString::literal(vec![0xE9, b'x']))
            .unwrap()
            .set("Data", PdfStream::new(PdfDictionary::new(), vec![0xFF, 0x00, 0x80]))
            .unwrap();

        assert!(dict.to_string().starts_with("<<\n/Title (\\351x)\n"));
        assert_eq!(dict.to_string().len(), dict.byte_len());
        assert_eq!(to_bytes(&dict).unwrap().len(), dict.byte_len());
    }

    #[test]
    fn test_binary_literal_matches_bytes_exactly() {
        let mut dict = PdfDictionary::new();
        dict.set("Title", PdfString::literal(vec![0xE9, b'x'])).unwrap();
        assert_consistent(&dict);
    }

    fn table_with(reference: PdfIndirectReference) -> (IndirectObjects, Arc<PdfIndirectObject>) {
        let object = Arc::new(PdfIndirectObject::new(reference, PdfObject::name("Resolved")));
        let mut table = IndirectObjects::new();
        table.insert(reference, Arc::clone(&object));
        (table, object)
    }

    #[test]
    fn test_dereference_resolves_entries() {
        let (table, object) = table_with(PdfIndirectReference::new(2, 0));
        let mut dict = PdfDictionary::with_allowed_keys(KeyPolicy::catalog());
        dict.set("Type", PdfObject::name("Catalog"))
            .unwrap()
            .set("Pages", PdfObject::reference(2, 0))
            .unwrap();

        dict.dereference(&table).unwrap();

        assert_eq!(dict.get("Pages"), Some(&PdfObject::Indirect(object)));
        assert_eq!(dict.get("Type"), Some(&PdfObject::name("Catalog")));
        assert_eq!(dict.to_string(), "<<\n/Type /Catalog\n/Pages 2 0 R\n>>");
        assert_consistent(&dict);
    }

    #[test]
    fn test_dereference_miss_is_an_error() {
        let mut dict = PdfDictionary::new();
        dict.set("Pages", PdfObject::reference(2, 0)).unwrap();

        let err = dict.dereference(&IndirectObjects::new()).unwrap_err();
        assert_eq!(
            err,
            ObjectError::UnresolvedReference {
                location: "/Pages".to_string(),
                reference: PdfIndirectReference::new(2, 0),
            }
        );
        assert_eq!(err.to_string(), "Failed to dereference: (/Pages, 2 0 R)");
    }

    #[test]
    fn test_dereference_tolerates_obj_key() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut dict = PdfDictionary::new();
        dict.set("Obj", PdfObject::reference(9, 0)).unwrap();

        dict.dereference(&IndirectObjects::new()).unwrap();
        assert_eq!(dict.get("Obj"), Some(&PdfObject::reference(9, 0)));
    }

    #[test]
    fn test_obj_exemption_is_exact() {
        let mut dict = PdfDictionary::new();
        dict.set("ObjStm", PdfObject::reference(9, 0)).unwrap();
        assert!(dict.dereference(&IndirectObjects::new()).is_err());
    }

    #[test]
    fn test_dereference_does_not_recurse() {
        let (table, _) = table_with(PdfIndirectReference::new(4, 0));
        let mut inner = PdfDictionary::new();
        inner.set("Font", PdfObject::reference(4, 0)).unwrap();
        let mut dict = PdfDictionary::new();
        dict.set("Resources", inner.clone()).unwrap();

        dict.dereference(&table).unwrap();
        assert_eq!(dict.get("Resources"), Some(&PdfObject::Dictionary(inner)));
    }

    #[test]
    fn test_failed_dereference_keeps_earlier_resolutions() {
        let (table, object) = table_with(PdfIndirectReference::new(1, 0));
        let mut dict = PdfDictionary::new();
        dict.set("First", PdfObject::reference(1, 0))
            .unwrap()
            .set("Second", PdfObject::reference(2, 0))
            .unwrap();

        assert!(dict.dereference(&table).is_err());
        assert_eq!(dict.get("First"), Some(&PdfObject::Indirect(object)));
        assert_eq!(dict.get("Second"), Some(&PdfObject::reference(2, 0)));
    }

    #[test]
    fn test_equality_ignores_key_policy() {
        let mut a = PdfDictionary::with_allowed_keys(KeyPolicy::new(["W"]));
        a.set("W", 1).unwrap();
        let b: PdfDictionary = [("W", 1)].into_iter().collect();
        assert_eq!(a, b);
    }
}
