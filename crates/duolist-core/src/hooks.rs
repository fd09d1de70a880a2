#![forbid(unsafe_code)]

//! Thin notification layer between the engine and its host.
//!
//! Operations compute plain values; the engine forwards them through the
//! optional callbacks registered here. Every call is a synchronous,
//! best-effort in-process call: no retry, no rollback.

use std::any::Any;
use std::fmt;

use crate::pane::{Direction, Pane};

/// Change payload for moves and one-way removals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Replacement target key sequence the host should adopt.
    pub new_target_keys: Vec<String>,
    /// Where the moved records went.
    pub direction: Direction,
    /// Keys that actually moved, after the disabled filter. Empty when every
    /// selected key was disabled; the notification still fires.
    pub moved_keys: Vec<String>,
}

type TargetKeysFn = Box<dyn FnMut(&[String])>;
type SelectedKeysFn = Box<dyn FnMut(&[String])>;
type SelectChangeFn = Box<dyn FnMut(&[String], &[String])>;
type ChangeFn = Box<dyn FnMut(&MoveOutcome)>;
type SearchFn = Box<dyn FnMut(Pane, &str)>;
type ScrollFn = Box<dyn FnMut(Pane, &dyn Any)>;

/// Host callbacks, all optional.
///
/// Mirrors the controlled-component contract of the rendered widget: the
/// host owns the data source and the target keys, so new sequences and
/// selection snapshots flow outward through these hooks rather than being
/// stored here.
#[derive(Default)]
pub struct TransferHooks {
    on_target_keys: Option<TargetKeysFn>,
    on_selected_keys: Option<SelectedKeysFn>,
    on_select_change: Option<SelectChangeFn>,
    on_change: Option<ChangeFn>,
    on_search: Option<SearchFn>,
    on_scroll: Option<ScrollFn>,
}

impl TransferHooks {
    /// No callbacks registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the replacement target key sequence after a move or a
    /// one-way removal.
    #[must_use]
    pub fn on_target_keys(mut self, f: impl FnMut(&[String]) + 'static) -> Self {
        self.on_target_keys = Some(Box::new(f));
        self
    }

    /// Called with the combined selection (both panes) after any selection
    /// mutation, including the clear that follows a move.
    #[must_use]
    pub fn on_selected_keys(mut self, f: impl FnMut(&[String]) + 'static) -> Self {
        self.on_selected_keys = Some(Box::new(f));
        self
    }

    /// Called with the per-pane selections `(source, target)` after any
    /// selection mutation.
    #[must_use]
    pub fn on_select_change(mut self, f: impl FnMut(&[String], &[String]) + 'static) -> Self {
        self.on_select_change = Some(Box::new(f));
        self
    }

    /// Called once per move or removal with the full change payload.
    #[must_use]
    pub fn on_change(mut self, f: impl FnMut(&MoveOutcome) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Called on search-box edits; a clear reports the empty string.
    #[must_use]
    pub fn on_search(mut self, f: impl FnMut(Pane, &str) + 'static) -> Self {
        self.on_search = Some(Box::new(f));
        self
    }

    /// Called on scroll pass-throughs with an opaque payload.
    #[must_use]
    pub fn on_scroll(mut self, f: impl FnMut(Pane, &dyn Any) + 'static) -> Self {
        self.on_scroll = Some(Box::new(f));
        self
    }

    pub(crate) fn emit_target_keys(&mut self, keys: &[String]) {
        if let Some(f) = self.on_target_keys.as_mut() {
            f(keys);
        }
    }

    pub(crate) fn emit_selected_keys(&mut self, combined: &[String]) {
        if let Some(f) = self.on_selected_keys.as_mut() {
            f(combined);
        }
    }

    pub(crate) fn emit_select_change(&mut self, source: &[String], target: &[String]) {
        if let Some(f) = self.on_select_change.as_mut() {
            f(source, target);
        }
    }

    pub(crate) fn emit_change(&mut self, outcome: &MoveOutcome) {
        if let Some(f) = self.on_change.as_mut() {
            f(outcome);
        }
    }

    pub(crate) fn emit_search(&mut self, pane: Pane, query: &str) {
        if let Some(f) = self.on_search.as_mut() {
            f(pane, query);
        }
    }

    pub(crate) fn emit_scroll(&mut self, pane: Pane, payload: &dyn Any) {
        if let Some(f) = self.on_scroll.as_mut() {
            f(pane, payload);
        }
    }
}

impl fmt::Debug for TransferHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferHooks")
            .field("on_target_keys", &self.on_target_keys.is_some())
            .field("on_selected_keys", &self.on_selected_keys.is_some())
            .field("on_select_change", &self.on_select_change.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_search", &self.on_search.is_some())
            .field("on_scroll", &self.on_scroll.is_some())
            .finish()
    }
}
