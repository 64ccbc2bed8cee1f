pub mod rules;
pub mod spc_codes;
