//! # lore-import
//!
//! Knowledge packages in and out of the store.
//!
//! Import is two-phase: `preview` validates a package, classifies each
//! draft as add or update against the merge key, and parks the drafts in a
//! [`PreviewRegistry`] under a fresh id. `confirm` takes them back out and
//! applies them. Unconfirmed previews expire and are removed by the sweeper.

pub mod export;
pub mod reconciler;
pub mod registry;
pub mod sweeper;

pub use export::export_package;
pub use reconciler::ImportReconciler;
pub use registry::{PreviewEntry, PreviewRegistry};
pub use sweeper::{spawn_preview_sweeper, SweeperHandle};
