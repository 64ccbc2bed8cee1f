pub mod configuration;
pub mod data;
pub mod spc_code_mapping;
