pub mod lengths;
pub mod pairs;
