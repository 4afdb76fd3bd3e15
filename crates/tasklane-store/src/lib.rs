//! The owning layer of the board core: [`BoardStore`] holds the single
//! authoritative board for a session and persists every committed change;
//! [`DragController`] interprets drag gestures into store operations.
//!
//! An embedder constructs one store at session start, renders from its
//! snapshots, and feeds user intents back through the operation surface.
//! Older snapshots stay valid after a mutation; untouched tasks are shared
//! between a snapshot and its successor.

pub mod gesture;
pub mod store;

pub use gesture::DragController;
pub use store::BoardStore;
