pub mod capacity_constraint;
pub mod constraint;
