//! System settings: effective configuration, role catalog and local
//! notification preferences. Nothing here is saved.

use crate::shared::components::ui::{Badge, Card, RoleBadge, Switch, Tone};
use crate::shared::components::PageHeader;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_period;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_role;
use contracts::system::navigation::page_config;
use leptos::prelude::*;

/// Page titles for a permission list, unknown ids kept as is.
fn permission_titles(permissions: &[String]) -> Vec<String> {
    permissions
        .iter()
        .map(|p| page_config(p).map(|c| c.title.to_string()).unwrap_or_else(|| p.clone()))
        .collect()
}

#[component]
fn SettingRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="settings__row">
            <span class="settings__label">{label}</span>
            <span class="settings__value">{value}</span>
        </div>
    }
}

#[component]
pub fn SystemSettingsPage() -> impl IntoView {
    let config = use_config();
    let role_ctx = use_role();

    let notify_submission = RwSignal::new(true);
    let notify_variance = RwSignal::new(true);
    let weekly_digest = RwSignal::new(false);

    let page_sizes = config
        .ui
        .page_size_options
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <PageFrame page_id="system-settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="System Settings" subtitle="Application configuration and access roles" />

            <div class="page__content settings">
                <Card title="Configuration" description="Loaded from config.toml at startup">
                    <SettingRow label="Application" value=config.app.title.clone() />
                    <SettingRow label="Current period" value=format_period(&config.forecast.current_period) />
                    <SettingRow
                        label="Variance threshold"
                        value=format!("{:.1}%", config.forecast.variance_threshold_percent)
                    />
                    <SettingRow label="Default page size" value=config.ui.default_page_size.to_string() />
                    <SettingRow label="Page size options" value=page_sizes />
                </Card>

                <Card title="Notifications" description="Applies to this session only">
                    <Switch
                        checked=notify_submission
                        on_change=Callback::new(move |v| notify_submission.set(v))
                        label="Forecast submitted for approval"
                    />
                    <Switch
                        checked=notify_variance
                        on_change=Callback::new(move |v| notify_variance.set(v))
                        label="Craft variance above threshold"
                    />
                    <Switch
                        checked=weekly_digest
                        on_change=Callback::new(move |v| weekly_digest.set(v))
                        label="Weekly summary email"
                    />
                </Card>

                <Card title="Roles" description="Pages each role can open">
                    <div class="settings__roles">
                        {role_ctx
                            .roles()
                            .into_iter()
                            .map(|role| {
                                let pages = permission_titles(&role.permissions).join(", ");
                                view! {
                                    <div class="settings__role">
                                        <div class="settings__role-header">
                                            <RoleBadge name=role.name.clone() color=role.color.clone() />
                                            {role.read_only().then(|| view! { <Badge tone=Tone::Info>"Read only"</Badge> })}
                                        </div>
                                        <p class="settings__role-description">{role.description.clone()}</p>
                                        <p class="settings__role-pages">{pages}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Card>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_titles() {
        let titles = permission_titles(&["home".to_string(), "legacy-page".to_string()]);
        assert_eq!(titles, vec!["Home", "legacy-page"]);
    }
}
