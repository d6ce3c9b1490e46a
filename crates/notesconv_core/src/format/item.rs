//! Item decoding for one note payload.
//!
//! # Invariants
//! - Items are read back to back; decoding stops at the first malformed item.
//! - Keys are synthesized as `item_<type>`; real item names are not recovered.
//! - A repeated type code replaces the earlier value but keeps its position.

use super::{read_u16_le, ITEM_PREFIX_LEN};
use crate::text::legacy::decode_legacy_text;

/// One item sliced out of a note payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub item_type: u16,
    pub data: Vec<u8>,
}

impl Item {
    /// Synthetic key derived from the type code.
    pub fn key(&self) -> String {
        item_key(self.item_type)
    }

    /// Declared item length (the `u16` prefix field).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Item bytes run through the legacy text decoder.
    pub fn text(&self) -> String {
        decode_legacy_text(&self.data)
    }
}

/// Returns the synthetic key for an item type code.
pub fn item_key(item_type: u16) -> String {
    format!("item_{item_type}")
}

/// Insertion-ordered item mapping keyed by item type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteItems {
    entries: Vec<Item>,
}

impl NoteItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item, replacing an existing entry with the same type in place.
    pub fn insert(&mut self, item: Item) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.item_type == item.item_type)
        {
            Some(existing) => existing.data = item.data,
            None => self.entries.push(item),
        }
    }

    /// Looks up raw bytes by synthetic key (`item_<type>`).
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        let item_type = key.strip_prefix("item_")?.parse::<u16>().ok()?;
        self.get_by_type(item_type)
    }

    pub fn get_by_type(&self, item_type: u16) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|item| item.item_type == item_type)
            .map(|item| item.data.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(Item::key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concatenated legacy-decoded text of every item, in order.
    pub fn text_dump(&self) -> String {
        self.entries.iter().map(Item::text).collect()
    }
}

impl<'a> IntoIterator for &'a NoteItems {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Splits a note payload into items.
///
/// Stops without error when fewer than 4 bytes remain, when an item declares
/// zero length, or when an item body would run past the payload.
pub fn decode_items(payload: &[u8]) -> NoteItems {
    let mut items = NoteItems::new();
    let mut offset = 0usize;

    while payload.len() - offset >= ITEM_PREFIX_LEN {
        let (Some(item_type), Some(length)) = (
            read_u16_le(payload, offset),
            read_u16_le(payload, offset + 2),
        ) else {
            break;
        };
        let length = usize::from(length);
        let body_start = offset + ITEM_PREFIX_LEN;
        if length == 0 || body_start + length > payload.len() {
            break;
        }

        items.insert(Item {
            item_type,
            data: payload[body_start..body_start + length].to_vec(),
        });
        offset = body_start + length;
    }

    items
}
