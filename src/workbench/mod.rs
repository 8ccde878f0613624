pub mod app;
pub mod constants;
pub mod formatters;
pub mod state;
pub mod types;

pub use app::Workbench;
pub use state::WorkbenchState;
pub use types::{Message, View};
