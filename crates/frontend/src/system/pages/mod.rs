pub mod login;
pub mod ui_showcase;
