pub mod mechanical;

pub use mechanical::{aggregate, percentage, MaterialShare, MaterialWeight, MechanicalSummary};
