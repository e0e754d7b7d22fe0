pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

mod app;

pub use app::run;
pub use application::PostalConverter;
pub use domain::error::{AppError, Result};
pub use domain::postal::{ConversionReport, PipelineConfig};
