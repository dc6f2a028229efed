pub mod class;
pub mod health;
pub mod meal;
