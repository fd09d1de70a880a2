#![forbid(unsafe_code)]

//! Record model for the transfer control.
//!
//! A [`TransferItem`] carries the two fields the engine reads (`key`,
//! `disabled`) plus an opaque payload the host renders however it likes.
//! The engine never inspects the payload.

/// A single transferable record.
///
/// Identity is the key; keys must be unique within one data source.
/// Duplicate keys produce an undefined partition, not a fault; uniqueness
/// is a caller guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferItem<P> {
    key: String,
    disabled: bool,
    payload: P,
}

impl<P> TransferItem<P> {
    /// Create a record with the given key and payload.
    #[must_use]
    pub fn new(key: impl Into<String>, payload: P) -> Self {
        Self {
            key: key.into(),
            disabled: false,
            payload,
        }
    }

    /// Set whether the record is pinned to its pane.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Stable unique key, before any derivation override.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the record may never be moved.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Host payload.
    #[must_use]
    pub fn payload(&self) -> &P {
        &self.payload
    }
}

/// Key derivation override applied wherever a record's key is resolved.
///
/// When configured on the engine, the derived key replaces
/// [`TransferItem::key`] during partitioning and in the disabled-record
/// filter, mirroring a host that computes row keys on the fly.
pub type KeyFn<P> = Box<dyn Fn(&TransferItem<P>) -> String>;

/// Effective key of `item` under an optional derivation override.
pub(crate) fn resolve_key<P>(item: &TransferItem<P>, key_fn: Option<&KeyFn<P>>) -> String {
    match key_fn {
        Some(f) => f(item),
        None => item.key.clone(),
    }
}
