pub mod logger;
pub mod numeric;
