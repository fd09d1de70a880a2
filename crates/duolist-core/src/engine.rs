#![forbid(unsafe_code)]

//! Orchestration of partitioning, selection state, and host notification.
//!
//! The engine owns the selection sets and the behavior switches; the data
//! source and the target key sequence stay with the host and are passed into
//! every operation, so a "move" is just a new target key sequence handed
//! back. One host event maps to one synchronous operation call; there is no
//! suspension, no I/O, and no concurrent invocation to guard against.

use std::any::Any;
use std::fmt;

use ahash::AHashSet;

use crate::hooks::{MoveOutcome, TransferHooks};
use crate::item::{KeyFn, TransferItem, resolve_key};
use crate::pane::{Direction, Pane};
use crate::partition::{Partition, partition};
use crate::selection::SelectionState;

#[cfg(feature = "tracing")]
use web_time::Instant;

/// Behavior switches for a transfer engine.
pub struct TransferConfig<P> {
    one_way: bool,
    disabled: bool,
    key_fn: Option<KeyFn<P>>,
}

impl<P> Default for TransferConfig<P> {
    fn default() -> Self {
        Self {
            one_way: false,
            disabled: false,
            key_fn: None,
        }
    }
}

impl<P> TransferConfig<P> {
    /// Two-way transfer, enabled, keys read from the records.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One-way mode: records leave the target through per-row removal
    /// instead of a target→source move.
    #[must_use]
    pub fn one_way(mut self, one_way: bool) -> Self {
        self.one_way = one_way;
        self
    }

    /// Disable the whole control. Presentation-level: activation helpers
    /// report inactive, but operations themselves stay callable.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Derive record keys with `f` instead of reading [`TransferItem::key`].
    #[must_use]
    pub fn key_fn(mut self, f: impl Fn(&TransferItem<P>) -> String + 'static) -> Self {
        self.key_fn = Some(Box::new(f));
        self
    }
}

impl<P> fmt::Debug for TransferConfig<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferConfig")
            .field("one_way", &self.one_way)
            .field("disabled", &self.disabled)
            .field("key_fn", &self.key_fn.is_some())
            .finish()
    }
}

/// Persistable selection state of a transfer engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TransferPersistState {
    /// Selected keys of the source pane.
    pub source_selected: Vec<String>,
    /// Selected keys of the target pane.
    pub target_selected: Vec<String>,
}

/// The transfer control's data engine.
///
/// Composes the partitioner and the selection store to answer the user
/// intents (select item, select all, move, remove-from-target) and emits
/// the resulting deltas through [`TransferHooks`].
pub struct TransferEngine<P> {
    config: TransferConfig<P>,
    selection: SelectionState,
    hooks: TransferHooks,
}

impl<P> TransferEngine<P> {
    /// Engine with empty selections.
    #[must_use]
    pub fn new(config: TransferConfig<P>) -> Self {
        Self {
            config,
            selection: SelectionState::new(),
            hooks: TransferHooks::new(),
        }
    }

    /// Engine whose initial selections are split from a host-supplied
    /// combined key set against `target_keys`.
    #[must_use]
    pub fn with_selected_keys(
        config: TransferConfig<P>,
        selected_keys: &[String],
        target_keys: &[String],
    ) -> Self {
        let mut engine = Self::new(config);
        engine.selection.resync_from_combined(selected_keys, target_keys);
        engine
    }

    /// Register host callbacks.
    #[must_use]
    pub fn hooks(mut self, hooks: TransferHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Current selection state.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Whether the control is in one-way mode.
    #[must_use]
    pub const fn is_one_way(&self) -> bool {
        self.config.one_way
    }

    /// Whether the whole control is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Whether the source→target action has anything to move.
    #[must_use]
    pub fn right_active(&self) -> bool {
        !self.config.disabled && !self.selection.pane(Pane::Source).is_empty()
    }

    /// Whether the target→source action has anything to move. Never active
    /// in one-way mode, where the target sheds rows through removal.
    #[must_use]
    pub fn left_active(&self) -> bool {
        !self.config.disabled
            && !self.config.one_way
            && !self.selection.pane(Pane::Target).is_empty()
    }

    /// Split `data` across the two panes according to `target_keys`.
    #[must_use]
    pub fn partition<'a>(
        &self,
        data: &'a [TransferItem<P>],
        target_keys: &[String],
    ) -> Partition<'a, P> {
        partition(data, target_keys, self.config.key_fn.as_ref())
    }

    /// Move the originating pane's selection across.
    ///
    /// Disabled records are dropped from the moving set even if erroneously
    /// selected. `Right` prepends the moved keys to the target sequence;
    /// `Left` removes them from it, preserving the remainder's order. Both
    /// panes' selections are cleared, and the host is notified in order:
    /// new target keys, combined selection (now empty), per-pane selection,
    /// change payload. A move of zero keys (everything selected was
    /// disabled) still clears and still notifies.
    pub fn move_to(
        &mut self,
        direction: Direction,
        data: &[TransferItem<P>],
        target_keys: &[String],
    ) -> MoveOutcome {
        #[cfg(feature = "tracing")]
        let started = Instant::now();

        let moving: Vec<String> = self
            .selection
            .pane(direction.origin())
            .iter()
            .cloned()
            .collect();

        let disabled_keys: AHashSet<String> = data
            .iter()
            .filter(|item| item.is_disabled())
            .map(|item| resolve_key(item, self.config.key_fn.as_ref()))
            .collect();
        let effective: Vec<String> = moving
            .into_iter()
            .filter(|key| !disabled_keys.contains(key))
            .collect();

        let new_target_keys = match direction {
            Direction::Right => {
                let mut keys = effective.clone();
                keys.extend(target_keys.iter().cloned());
                keys
            }
            Direction::Left => {
                let removed: AHashSet<&String> = effective.iter().collect();
                target_keys
                    .iter()
                    .filter(|key| !removed.contains(key))
                    .cloned()
                    .collect()
            }
        };

        // The originating side empties silently; the opposite side empties
        // through the normal select-change path so the host still observes a
        // combined-selection update.
        self.selection.clear(direction.origin());
        self.hooks.emit_target_keys(&new_target_keys);
        self.selection.clear(direction.origin().opposite());
        self.notify_selection();

        let outcome = MoveOutcome {
            new_target_keys,
            direction,
            moved_keys: effective,
        };
        self.hooks.emit_change(&outcome);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "transfer.move",
            direction = ?direction,
            moved = outcome.moved_keys.len(),
            target_len = outcome.new_target_keys.len(),
            duration_us = started.elapsed().as_micros() as u64
        );

        outcome
    }

    /// Select or deselect one key in `pane`, then notify.
    ///
    /// Notifies even when the selection did not structurally change.
    pub fn select_item(&mut self, pane: Pane, key: &str, checked: bool) {
        self.selection.select_one(pane, key, checked);
        self.notify_selection();
    }

    /// Merge or subtract the currently visible keys of `pane`, then notify.
    pub fn select_all(&mut self, pane: Pane, visible_keys: &[String], check_all: bool) {
        self.selection.select_all(pane, visible_keys, check_all);
        self.notify_selection();
    }

    /// Toggle each currently visible key of `pane`, then notify.
    pub fn invert_selection(&mut self, pane: Pane, visible_keys: &[String]) {
        self.selection.invert(pane, visible_keys);
        self.notify_selection();
    }

    /// One-way mode's per-row removal from the target pane.
    ///
    /// Bypasses selection state entirely (nothing is read or cleared) and
    /// is always reported as a target→source change.
    pub fn remove_from_target(
        &mut self,
        removed_keys: &[String],
        target_keys: &[String],
    ) -> MoveOutcome {
        let removed: AHashSet<&String> = removed_keys.iter().collect();
        let new_target_keys: Vec<String> = target_keys
            .iter()
            .filter(|key| !removed.contains(key))
            .cloned()
            .collect();

        self.hooks.emit_target_keys(&new_target_keys);
        let outcome = MoveOutcome {
            new_target_keys,
            direction: Direction::Left,
            moved_keys: removed_keys.to_vec(),
        };
        self.hooks.emit_change(&outcome);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "transfer.remove",
            removed = outcome.moved_keys.len(),
            target_len = outcome.new_target_keys.len()
        );

        outcome
    }

    /// External controlled-selection override; fully replaces both panes'
    /// selections from one combined key set. Does not notify; the host
    /// already knows what it supplied.
    pub fn resync_selected(&mut self, combined: &[String], target_keys: &[String]) {
        self.selection.resync_from_combined(combined, target_keys);
    }

    /// Forward a search-box edit for `pane`.
    pub fn notify_search(&mut self, pane: Pane, query: &str) {
        self.hooks.emit_search(pane, query);
    }

    /// Forward a search-box clear for `pane`, reported as an empty query.
    pub fn notify_clear_search(&mut self, pane: Pane) {
        self.hooks.emit_search(pane, "");
    }

    /// Forward an opaque scroll payload for `pane`.
    pub fn notify_scroll(&mut self, pane: Pane, payload: &dyn Any) {
        self.hooks.emit_scroll(pane, payload);
    }

    /// Snapshot both selection sets.
    #[must_use]
    pub fn save_state(&self) -> TransferPersistState {
        TransferPersistState {
            source_selected: self.selection.pane(Pane::Source).iter().cloned().collect(),
            target_selected: self.selection.pane(Pane::Target).iter().cloned().collect(),
        }
    }

    /// Restore both selection sets from a snapshot.
    pub fn restore_state(&mut self, state: TransferPersistState) {
        self.selection.replace_pane(Pane::Source, &state.source_selected);
        self.selection.replace_pane(Pane::Target, &state.target_selected);
    }

    fn notify_selection(&mut self) {
        let combined = self.selection.combined();
        self.hooks.emit_selected_keys(&combined);
        let source: Vec<String> = self.selection.pane(Pane::Source).iter().cloned().collect();
        let target: Vec<String> = self.selection.pane(Pane::Target).iter().cloned().collect();
        self.hooks.emit_select_change(&source, &target);
    }
}

impl<P> fmt::Debug for TransferEngine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferEngine")
            .field("config", &self.config)
            .field("selection", &self.selection)
            .field("hooks", &self.hooks)
            .finish()
    }
}
