pub mod field_mapper;
pub mod label_rules;
pub mod postal_converter;
pub mod postal_grouper;
