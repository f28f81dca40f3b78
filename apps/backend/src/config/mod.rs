pub mod app;

pub use app::{Config, Environment};
