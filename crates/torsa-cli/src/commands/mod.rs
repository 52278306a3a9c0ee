pub mod energy;
pub mod prep;
