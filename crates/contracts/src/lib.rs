pub mod forecasting;
pub mod master_data;
pub mod shared;
pub mod system;
