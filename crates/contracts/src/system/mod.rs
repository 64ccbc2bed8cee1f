pub mod navigation;
pub mod roles;
pub mod users;
