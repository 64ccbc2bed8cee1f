pub mod approvals;
pub mod forecast;
pub mod variance;
