//! Note role classification.
//!
//! # Responsibility
//! - Map a scanned note to the role it plays in the application model.
//! - Keep the heuristic behind a trait so a name-aware classifier can replace it.
//!
//! # Invariants
//! - Rules are evaluated in fixed order: Form, View, Document, Unknown.
//! - A design note mentioning both "form" and "view" is a Form.
//! - Document classification depends only on the note class.

use crate::format::scanner::RawNote;
use crate::format::{NOTE_CLASS_DESIGN, NOTE_CLASS_DOCUMENT};
use once_cell::sync::Lazy;
use regex::Regex;

static FORM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)form").expect("valid form regex"));
static VIEW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)view").expect("valid view regex"));

/// Semantic role of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteRole {
    Form,
    View,
    Document,
    /// Dropped by the model builder.
    Unknown,
}

impl NoteRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::View => "view",
            Self::Document => "document",
            Self::Unknown => "unknown",
        }
    }
}

/// Classifies notes into roles.
pub trait NoteClassifier {
    fn classify(&self, note: &RawNote) -> NoteRole;
}

/// Substring heuristic over the legacy-decoded item text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringClassifier;

impl NoteClassifier for SubstringClassifier {
    fn classify(&self, note: &RawNote) -> NoteRole {
        classify(note.note_class, &note.items.text_dump())
    }
}

/// Pure classification rule over a note class and its decoded item text.
pub fn classify(note_class: u16, decoded_item_text: &str) -> NoteRole {
    if note_class == NOTE_CLASS_DESIGN {
        if FORM_RE.is_match(decoded_item_text) {
            return NoteRole::Form;
        }
        if VIEW_RE.is_match(decoded_item_text) {
            return NoteRole::View;
        }
    }
    if note_class == NOTE_CLASS_DOCUMENT {
        return NoteRole::Document;
    }
    NoteRole::Unknown
}

#[cfg(test)]
mod tests {
    use super::{classify, NoteClassifier, NoteRole, SubstringClassifier};
    use crate::format::scanner::RawNote;

    #[test]
    fn role_labels_are_lowercase_names() {
        let labels: Vec<&str> = [
            NoteRole::Form,
            NoteRole::View,
            NoteRole::Document,
            NoteRole::Unknown,
        ]
        .into_iter()
        .map(NoteRole::as_str)
        .collect();
        assert_eq!(labels, vec!["form", "view", "document", "unknown"]);
    }

    #[test]
    fn design_note_with_form_text_is_form() {
        assert_eq!(classify(1024, "Main FORM"), NoteRole::Form);
        assert_eq!(classify(1024, "$ViewFormat Form"), NoteRole::Form);
    }

    #[test]
    fn design_note_with_view_text_is_view() {
        assert_eq!(classify(1024, "All by Date (VIEW)"), NoteRole::View);
    }

    #[test]
    fn design_note_without_keywords_is_unknown() {
        assert_eq!(classify(1024, "agent"), NoteRole::Unknown);
        assert_eq!(classify(1024, ""), NoteRole::Unknown);
    }

    #[test]
    fn document_class_ignores_text() {
        assert_eq!(classify(512, "form view"), NoteRole::Document);
        assert_eq!(classify(512, ""), NoteRole::Document);
    }

    #[test]
    fn other_classes_are_unknown() {
        assert_eq!(classify(1, "form"), NoteRole::Unknown);
        assert_eq!(classify(2048, "view"), NoteRole::Unknown);
    }

    #[test]
    fn classifier_reads_decoded_items_not_raw_payload() {
        // Text after the item region is not part of any item.
        let mut payload = vec![1, 0, 3, 0];
        payload.extend_from_slice(b"abc");
        payload.extend_from_slice(b"\0\0form");
        let note = RawNote::new(1, 1024, payload);
        assert_eq!(SubstringClassifier.classify(&note), NoteRole::Unknown);

        let note = RawNote::new(2, 1024, b"\x01\x00\x04\x00View".to_vec());
        assert_eq!(SubstringClassifier.classify(&note), NoteRole::View);
    }
}
