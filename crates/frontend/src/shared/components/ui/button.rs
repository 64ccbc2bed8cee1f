use super::variant::{class_list, ButtonVariant, Size};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: Size,
    #[prop(optional, into)] class: MaybeProp<String>,
    /// `type` attribute, "button" by default
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Leading icon name
    #[prop(optional, into)]
    icon_name: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    /// Shows "…" and disables the button
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let size_class = size.modifier("button");
    let is_loading = move || loading.get().unwrap_or(false);
    let full_class = move || {
        let extra = class.get().unwrap_or_default();
        let loading_class = if is_loading() { "button--loading" } else { "" };
        class_list(&["button", variant.class(), &size_class, loading_class, &extra])
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=full_class
            disabled=move || disabled.get().unwrap_or(false) || is_loading()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || icon_name.get().map(|name| icon(&name))}
            {children()}
            <Show when=is_loading>
                <span class="button__spinner">"…"</span>
            </Show>
        </button>
    }
}
