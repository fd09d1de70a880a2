#![forbid(unsafe_code)]

//! Independent per-pane selection sets.
//!
//! One set of selected keys per pane. The store never validates that a
//! selected key still exists in any data source: stale keys sit harmlessly
//! until the next external resync. It also knows nothing about filtering:
//! select-all candidates arrive from the caller as "the currently visible
//! keys of that pane".

use std::collections::BTreeSet;

use crate::pane::Pane;

/// Selection state for both panes of a transfer control.
///
/// Invariant: a key is only ever selected in the pane it belongs to, so the
/// two sets stay disjoint. [`SelectionState::resync_from_combined`] rebuilds
/// both sides from one combined set and re-establishes that split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    source: BTreeSet<String>,
    target: BTreeSet<String>,
}

impl SelectionState {
    /// Empty selection on both panes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected keys of one pane.
    #[must_use]
    pub fn pane(&self, pane: Pane) -> &BTreeSet<String> {
        match pane {
            Pane::Source => &self.source,
            Pane::Target => &self.target,
        }
    }

    fn pane_mut(&mut self, pane: Pane) -> &mut BTreeSet<String> {
        match pane {
            Pane::Source => &mut self.source,
            Pane::Target => &mut self.target,
        }
    }

    /// Union of both panes' selections, source keys first.
    #[must_use]
    pub fn combined(&self) -> Vec<String> {
        self.source.iter().chain(self.target.iter()).cloned().collect()
    }

    /// Total number of selected keys across both panes.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.source.len() + self.target.len()
    }

    /// Select or deselect a single key in `pane`.
    ///
    /// Adding an already-selected key or removing an absent one is
    /// structurally a no-op but still counts as a state replacement; the
    /// engine notifies downstream either way.
    pub fn select_one(&mut self, pane: Pane, key: &str, checked: bool) {
        let holder = self.pane_mut(pane);
        if checked {
            holder.insert(key.to_owned());
        } else {
            holder.remove(key);
        }
        #[cfg(feature = "tracing")]
        self.log_selection_change("select_one");
    }

    /// Merge `candidate_keys` into `pane`'s selection, or subtract them.
    ///
    /// `check_all = true` is set union, `false` is set difference. The
    /// candidates are whatever the caller currently shows in that pane.
    pub fn select_all(&mut self, pane: Pane, candidate_keys: &[String], check_all: bool) {
        let holder = self.pane_mut(pane);
        if check_all {
            holder.extend(candidate_keys.iter().cloned());
        } else {
            for key in candidate_keys {
                holder.remove(key);
            }
        }
        #[cfg(feature = "tracing")]
        self.log_selection_change("select_all");
    }

    /// Toggle membership of every candidate key in `pane`'s selection.
    pub fn invert(&mut self, pane: Pane, candidate_keys: &[String]) {
        let holder = self.pane_mut(pane);
        for key in candidate_keys {
            if !holder.remove(key) {
                holder.insert(key.clone());
            }
        }
        #[cfg(feature = "tracing")]
        self.log_selection_change("invert");
    }

    /// Replace `pane`'s selection wholesale.
    pub fn replace_pane(&mut self, pane: Pane, keys: &[String]) {
        *self.pane_mut(pane) = keys.iter().cloned().collect();
        #[cfg(feature = "tracing")]
        self.log_selection_change("replace_pane");
    }

    /// Empty `pane`'s selection.
    pub fn clear(&mut self, pane: Pane) {
        self.pane_mut(pane).clear();
        #[cfg(feature = "tracing")]
        self.log_selection_change("clear");
    }

    /// Empty both panes' selections.
    pub fn clear_both(&mut self) {
        self.source.clear();
        self.target.clear();
        #[cfg(feature = "tracing")]
        self.log_selection_change("clear_both");
    }

    /// Replace both sets from one externally supplied combined set.
    ///
    /// A key lands in the target set iff it occurs in `target_keys`;
    /// everything else falls to the source set. Not-found is the source
    /// branch, never a fault. This is how an external controlled-selection
    /// input overrides internal state.
    pub fn resync_from_combined(&mut self, combined: &[String], target_keys: &[String]) {
        let in_target = |key: &str| target_keys.iter().any(|candidate| candidate == key);
        self.source = combined.iter().filter(|key| !in_target(key.as_str())).cloned().collect();
        self.target = combined.iter().filter(|key| in_target(key.as_str())).cloned().collect();
        #[cfg(feature = "tracing")]
        self.log_selection_change("resync");
    }

    #[cfg(feature = "tracing")]
    fn log_selection_change(&self, action: &str) {
        tracing::debug!(
            message = "transfer.selection",
            action,
            source_selected = self.source.len(),
            target_selected = self.target.len()
        );
    }
}
