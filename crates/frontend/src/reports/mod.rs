pub mod power_bi;
pub mod variance_report;
