pub mod add;
pub mod fallback;
pub mod health;
