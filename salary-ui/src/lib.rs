pub mod app;
pub mod config;
pub mod csv_loader;
pub mod form;
pub mod logging;
pub mod render;
pub mod utils;

pub use app::{MessageType, SalaryApp};
pub use form::PredictionForm;
