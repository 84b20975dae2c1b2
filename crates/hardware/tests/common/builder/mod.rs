/// PISA instruction encoders.
pub mod instruction;
