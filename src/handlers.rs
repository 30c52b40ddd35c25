pub mod health;
pub mod spa;
