//! In-memory build inventory for combat-robot teams.
//!
//! Each bot owns an electronics table and a mechanical table. [`BotStore`] edits
//! them as immutable snapshots, [`metrics::aggregate`] derives the weight and
//! material breakdown of a mechanical table, and [`Workbench`] holds the
//! selection and view state a front end renders from.

pub mod constants;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod utils;
pub mod workbench;

pub use errors::{WorkbenchError, WorkbenchResult};
pub use metrics::{aggregate, MechanicalSummary};
pub use models::{Bot, BotId, ElectronicsItem, ItemField, ListKind, MechanicalItem};
pub use repositories::{BotStore, IdGenerator, SequentialIds, UuidIds};
pub use workbench::{Message, View, Workbench};
