pub mod bot_store;
pub mod ids;

pub use bot_store::BotStore;
pub use ids::{IdGenerator, SequentialIds, UuidIds};
