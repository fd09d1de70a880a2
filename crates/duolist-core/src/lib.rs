#![forbid(unsafe_code)]

//! Selection-and-partition engine for dual-list transfer controls.
//!
//! A transfer control splits one record collection into two panes (source
//! on the left, target on the right) and moves records between them. This
//! crate owns the data side of that control: how records partition across
//! the panes, how the per-pane selections evolve under select / select-all /
//! move / remove intents, and what gets reported back to the host. Rendering,
//! search inputs, pagination, and styling live with the host; they only
//! consume what this crate produces.
//!
//! The host keeps ownership of the data source and the target key sequence;
//! every operation reads them as arguments and moves are expressed as newly
//! produced key sequences handed back through [`TransferHooks`].
//!
//! # Example
//!
//! ```
//! use duolist_core::{Direction, Pane, TransferConfig, TransferEngine, TransferItem};
//!
//! let data = vec![
//!     TransferItem::new("1", ()),
//!     TransferItem::new("2", ()),
//!     TransferItem::new("3", ()),
//! ];
//! let target_keys = vec!["2".to_string()];
//!
//! let mut engine = TransferEngine::new(TransferConfig::new());
//! let split = engine.partition(&data, &target_keys);
//! assert_eq!(split.source_keys(), ["1", "3"]);
//!
//! engine.select_item(Pane::Source, "1", true);
//! let outcome = engine.move_to(Direction::Right, &data, &target_keys);
//! assert_eq!(outcome.new_target_keys, ["1", "2"]);
//! ```
//!
//! # Features
//!
//! - `state-persistence`: serde derives on [`TransferPersistState`] so
//!   selection state can survive sessions.
//! - `tracing`: structured debug events on selection changes and moves.

pub mod engine;
pub mod hooks;
pub mod item;
pub mod pane;
pub mod partition;
pub mod selection;

pub use engine::{TransferConfig, TransferEngine, TransferPersistState};
pub use hooks::{MoveOutcome, TransferHooks};
pub use item::{KeyFn, TransferItem};
pub use pane::{Direction, Pane};
pub use partition::{PaneEntry, Partition, partition};
pub use selection::SelectionState;
