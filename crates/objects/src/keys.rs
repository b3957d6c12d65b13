//! Allowed-key policies for dictionaries with a fixed key domain.

use std::collections::HashSet;
use std::sync::Arc;

/// The set of keys a dictionary accepts through validated inserts.
///
/// Cloning is cheap; dictionaries built from the same preset share one set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPolicy {
    keys: Arc<HashSet<Box<str>>>,
}

impl KeyPolicy {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { keys: Arc::new(keys.into_iter().map(|k| k.as_ref().into()).collect()) }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Document catalog (`/Type /Catalog`).
    pub fn catalog() -> Self {
        Self::new([
            "Type", "Version", "Extensions", "Pages", "PageLabels", "Names", "Dests",
            "ViewerPreferences", "PageLayout", "PageMode", "Outlines", "Threads", "OpenAction",
            "AA", "URI", "AcroForm", "Metadata", "StructTreeRoot", "MarkInfo", "Lang",
            "SpiderInfo", "OutputIntents", "PieceInfo", "OCProperties", "Perms", "Legal",
            "Requirements", "Collection", "NeedsRendering",
        ])
    }

    /// Page tree node (`/Type /Pages`), including inheritable page attributes.
    pub fn pages() -> Self {
        Self::new([
            "Type", "Parent", "Kids", "Count", "Resources", "MediaBox", "CropBox", "Rotate",
        ])
    }

    /// Page object (`/Type /Page`).
    pub fn page() -> Self {
        Self::new([
            "Type", "Parent", "LastModified", "Resources", "MediaBox", "CropBox", "BleedBox",
            "TrimBox", "ArtBox", "BoxColorInfo", "Contents", "Rotate", "Group", "Thumb", "B",
            "Dur", "Trans", "Annots", "AA", "Metadata", "PieceInfo", "StructParents", "ID", "PZ",
            "SeparationInfo", "Tabs", "TemplateInstantiated", "PresSteps", "UserUnit", "VP",
        ])
    }

    /// File trailer.
    pub fn trailer() -> Self {
        Self::new(["Size", "Prev", "Root", "Encrypt", "Info", "ID", "XRefStm"])
    }

    /// Document information dictionary.
    pub fn info() -> Self {
        Self::new([
            "Title", "Author", "Subject", "Keywords", "Creator", "Producer", "CreationDate",
            "ModDate", "Trapped",
        ])
    }
}
