pub mod class;
pub mod meal;
pub mod seed;
