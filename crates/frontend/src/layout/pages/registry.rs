//! Page id -> view. The only place that maps navigation ids to page
//! components.

use crate::dashboards::home::HomeDashboard;
use crate::forecasting::approvals::ForecastApprovalsPage;
use crate::forecasting::monthly_forecast::MonthlyForecastPage;
use crate::master_data::configuration::MasterDataConfigurationPage;
use crate::master_data::spc_code_mapping::SpcCodeMappingPage;
use crate::reports::power_bi::PowerBiReportsPage;
use crate::reports::variance_report::VarianceReportPage;
use crate::system::settings::SystemSettingsPage;
use crate::system::users::ui::list::UsersListPage;
use contracts::system::navigation::pages;
use leptos::prelude::*;

pub fn render_page_content(page_id: &str) -> AnyView {
    match page_id {
        pages::HOME => view! { <HomeDashboard /> }.into_any(),
        pages::MONTHLY_FORECAST => view! { <MonthlyForecastPage /> }.into_any(),
        pages::FORECAST_APPROVALS => view! { <ForecastApprovalsPage /> }.into_any(),
        pages::MASTER_DATA_CONFIGURATION => view! { <MasterDataConfigurationPage /> }.into_any(),
        pages::SPC_CODE_MAPPING => view! { <SpcCodeMappingPage /> }.into_any(),
        pages::MLF_VARIANCE_REPORT => view! { <VarianceReportPage /> }.into_any(),
        pages::POWER_BI_REPORTS => view! { <PowerBiReportsPage /> }.into_any(),
        pages::USER_MANAGEMENT => view! { <UsersListPage /> }.into_any(),
        pages::SYSTEM_SETTINGS => view! { <SystemSettingsPage /> }.into_any(),
        _ => {
            log::warn!("Unknown page '{page_id}'");
            ().into_any()
        }
    }
}
