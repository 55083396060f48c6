//! # hubsync-sync
//!
//! The reconciliation engine: pairs local and remote entities by name,
//! applies the three-way policy per pair (local-only, remote-only,
//! both-present), and runs remote wiring + branch hygiene on every resolved
//! repository pairing.
//!
//! Call [`sync`] with a loaded config, a [`RemoteSource`] and a [`Prompt`]
//! to run a full pass, or drive [`Reconciler`] directly.
//!
//! [`RemoteSource`]: hubsync_core::RemoteSource

pub mod branches;
pub mod error;
pub mod hooks;
pub mod pair;
pub mod prompt;
pub mod reconcile;
pub mod remotes;

pub use branches::BranchOptions;
pub use error::SyncError;
pub use pair::{zip_pairs, Pair};
pub use prompt::{ConsolePrompt, Prompt};
pub use reconcile::{sync, Reconciler, SyncFailure, SyncOptions, SyncReport};
