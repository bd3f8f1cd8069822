pub mod candidate;
pub mod collector;
pub mod record;
