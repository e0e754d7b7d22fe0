pub mod use_cases;

pub use use_cases::postal_converter::PostalConverter;
