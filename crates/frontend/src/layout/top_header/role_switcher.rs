use crate::shared::components::ui::{use_toast, Badge, RoleBadge, Select, Tone};
use crate::system::auth::context::use_role;
use leptos::prelude::*;

/// Select over every role plus the current role badge.
#[component]
pub fn RoleSwitcher() -> impl IntoView {
    let role_ctx = use_role();
    let toast = use_toast();

    let options = Signal::derive(move || {
        role_ctx
            .roles()
            .into_iter()
            .map(|r| (r.id, r.name))
            .collect::<Vec<_>>()
    });
    let current_id = Signal::derive(move || {
        role_ctx.current.with(|c| c.as_ref().map(|r| r.id.clone()).unwrap_or_default())
    });
    let on_change = Callback::new(move |role_id: String| {
        if let Err(e) = role_ctx.switch_role(&role_id) {
            toast.error(e);
        }
    });

    let role_name = Signal::derive(move || {
        role_ctx.current.with(|c| c.as_ref().map(|r| r.name.clone()).unwrap_or_default())
    });
    let role_color = Signal::derive(move || {
        role_ctx.current.with(|c| c.as_ref().map(|r| r.color.clone()).unwrap_or_default())
    });
    let read_only = move || role_ctx.current.with(|c| c.as_ref().map(|r| r.read_only()).unwrap_or(false));

    view! {
        <div class="role-switcher">
            <Select
                value=current_id
                options=options
                on_change=on_change
                id="role-switcher"
                class="role-switcher__select"
            />
            <RoleBadge name=role_name color=role_color />
            <Show when=read_only>
                <Badge tone=Tone::Info>"Read only"</Badge>
            </Show>
        </div>
    }
}
