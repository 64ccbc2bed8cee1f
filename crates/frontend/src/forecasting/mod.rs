pub mod approvals;
pub mod data;
pub mod monthly_forecast;
