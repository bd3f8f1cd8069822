pub mod pattern;
pub mod scorer;
pub mod strategy;
pub mod window;
