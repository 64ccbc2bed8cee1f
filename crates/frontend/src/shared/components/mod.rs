pub mod calendar;
pub mod month_selector;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod ui;

pub use calendar::Calendar;
pub use month_selector::MonthSelector;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::{StatCard, StatFormat};
