use crate::master_data::data::mock_rules;
use crate::shared::components::ui::{use_toast, Badge, Card, Switch, TabItem, Tabs, Tone};
use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CONFIG;
use contracts::master_data::rules::{ForecastRule, RuleScope};
use leptos::prelude::*;

fn scope_for_tab(tab: &str) -> Option<RuleScope> {
    match tab {
        "l3" => Some(RuleScope::L3),
        "l4" => Some(RuleScope::L4),
        "craft" => Some(RuleScope::Craft),
        _ => None,
    }
}

/// Rules shown under `tab`; "all" and unknown tabs show everything.
pub fn rules_for_tab(rules: &[ForecastRule], tab: &str) -> Vec<ForecastRule> {
    let scope = scope_for_tab(tab);
    rules
        .iter()
        .filter(|r| scope.is_none_or(|s| r.scope == s))
        .cloned()
        .collect()
}

#[component]
pub fn MasterDataConfigurationPage() -> impl IntoView {
    let toast = use_toast();
    let rules = RwSignal::new(mock_rules());
    let tab = RwSignal::new("all".to_string());

    let shown = Memo::new(move |_| rules.with(|r| rules_for_tab(r, &tab.get())));
    let enabled_summary = move || {
        rules.with(|r| {
            let enabled = r.iter().filter(|rule| rule.enabled).count();
            format!("{enabled} of {} rules enabled", r.len())
        })
    };

    let set_enabled = move |id: String, enabled: bool| {
        let mut name = None;
        rules.update(|list| {
            if let Some(rule) = list.iter_mut().find(|r| r.id == id) {
                rule.enabled = enabled;
                name = Some(rule.name.clone());
            }
        });
        if let Some(name) = name {
            log::info!("Rule {id} enabled = {enabled}");
            let state = if enabled { "enabled" } else { "disabled" };
            toast.info(format!("{name} {state}"));
        }
    };

    view! {
        <PageFrame page_id="master-data-configuration--config" category=PAGE_CAT_CONFIG>
            <PageHeader
                title="Master Data Configuration"
                subtitle="P6 to L3/L4 breakdown rules"
            >
                <Badge tone=Tone::Info>{enabled_summary}</Badge>
            </PageHeader>

            <div class="page__content">
                <Tabs
                    tabs=vec![
                        TabItem::new("all", "All rules"),
                        TabItem::new("l3", RuleScope::L3.label()),
                        TabItem::new("l4", RuleScope::L4.label()),
                        TabItem::new("craft", RuleScope::Craft.label()),
                    ]
                    selected=tab
                />

                <div class="rule-list">
                    <For
                        each=move || shown.get()
                        key=|r| (r.id.clone(), r.enabled)
                        children=move |rule| {
                            let id = rule.id.clone();
                            let enabled = rule.enabled;
                            view! {
                                <Card title=rule.name.clone() description=rule.description.clone()>
                                    <div class="rule-list__row">
                                        <Badge tone=Tone::Primary>{rule.scope.label()}</Badge>
                                        <Switch
                                            checked=enabled
                                            label=if enabled { "Enabled" } else { "Disabled" }
                                            on_change=Callback::new(move |on| set_enabled(id.clone(), on))
                                        />
                                    </div>
                                </Card>
                            }
                        }
                    />
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_for_tab() {
        let rules = mock_rules();
        assert_eq!(rules_for_tab(&rules, "all").len(), rules.len());
        let l4 = rules_for_tab(&rules, "l4");
        assert!(!l4.is_empty());
        assert!(l4.iter().all(|r| r.scope == RuleScope::L4));
    }

    #[test]
    fn test_unknown_tab_shows_everything() {
        let rules = mock_rules();
        assert_eq!(rules_for_tab(&rules, "bogus").len(), rules.len());
    }
}
