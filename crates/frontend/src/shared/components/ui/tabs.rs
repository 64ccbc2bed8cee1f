use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub id: String,
    pub label: String,
    pub disabled: bool,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Tab strip bound to `selected`. Content is rendered by the caller from the same signal.
#[component]
pub fn Tabs(
    tabs: Vec<TabItem>,
    selected: RwSignal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div class="tabs" role="tablist">
            {tabs
                .into_iter()
                .map(|tab| {
                    let id_active = tab.id.clone();
                    let id_click = tab.id.clone();
                    view! {
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=move || selected.get() == id_active
                            role="tab"
                            disabled=tab.disabled
                            on:click=move |_| {
                                selected.set(id_click.clone());
                                if let Some(handler) = on_change {
                                    handler.run(id_click.clone());
                                }
                            }
                        >
                            {tab.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
