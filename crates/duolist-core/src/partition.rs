#![forbid(unsafe_code)]

//! Splitting one record collection across the two panes.
//!
//! The target pane is ordered by the target key sequence; the source pane
//! keeps the data source's own order. A target key with no matching record
//! leaves a hole at its position, surfaced to the caller and never compacted,
//! so positional order stays honest and the defect stays visible.

use crate::item::{KeyFn, TransferItem, resolve_key};

/// A record assigned to a pane, paired with its effective key.
///
/// The key is the resolved one: when a derivation override is configured it
/// can differ from [`TransferItem::key`].
#[derive(Debug, Clone)]
pub struct PaneEntry<'a, P> {
    /// Effective key used for membership and selection.
    pub key: String,
    /// The record itself.
    pub item: &'a TransferItem<P>,
}

/// Result of splitting a data source across the two panes.
#[derive(Debug)]
pub struct Partition<'a, P> {
    /// Records not named by any target key, in data-source order.
    pub source: Vec<PaneEntry<'a, P>>,
    /// One slot per target key, in target-key order. `None` marks a target
    /// key with no matching record.
    pub target: Vec<Option<PaneEntry<'a, P>>>,
}

impl<'a, P> Partition<'a, P> {
    /// Effective keys of the source pane, in pane order.
    #[must_use]
    pub fn source_keys(&self) -> Vec<String> {
        self.source.iter().map(|entry| entry.key.clone()).collect()
    }

    /// Source-pane keys of records that are not disabled.
    ///
    /// The usual candidate list for a select-all over the source pane.
    #[must_use]
    pub fn enabled_source_keys(&self) -> Vec<String> {
        self.source
            .iter()
            .filter(|entry| !entry.item.is_disabled())
            .map(|entry| entry.key.clone())
            .collect()
    }

    /// Target-pane entries with holes skipped, still in target-key order.
    pub fn present_target(&self) -> impl Iterator<Item = &PaneEntry<'a, P>> {
        self.target.iter().flatten()
    }

    /// Whether any target key failed to resolve to a record.
    #[must_use]
    pub fn has_holes(&self) -> bool {
        self.target.iter().any(Option::is_none)
    }
}

/// Split `data` into source and target panes according to `target_keys`.
///
/// Single pass over `data` in order. Each record's key is resolved (via the
/// derivation override when present) and looked up in `target_keys`: found
/// means the record fills that position of the target pane, not found means
/// it is appended to the source pane. The linear lookup makes this
/// O(|data| × |target_keys|), a known limit that is acceptable at the row
/// counts a transfer control displays and not worth changing the order
/// semantics over.
#[must_use]
pub fn partition<'a, P>(
    data: &'a [TransferItem<P>],
    target_keys: &[String],
    key_fn: Option<&KeyFn<P>>,
) -> Partition<'a, P> {
    let mut source = Vec::new();
    let mut target: Vec<Option<PaneEntry<'a, P>>> = Vec::with_capacity(target_keys.len());
    target.resize_with(target_keys.len(), || None);

    for item in data {
        let key = resolve_key(item, key_fn);
        match target_keys.iter().position(|candidate| *candidate == key) {
            Some(index) => target[index] = Some(PaneEntry { key, item }),
            None => source.push(PaneEntry { key, item }),
        }
    }

    Partition { source, target }
}
