pub mod alphabet;
pub mod mutation;
pub mod nucleotide;
pub mod sequence;
