pub mod health;
pub mod journal;
