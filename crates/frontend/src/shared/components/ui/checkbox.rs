use super::variant::class_list;
use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    /// Secondary line under the label
    #[prop(optional, into)]
    description: MaybeProp<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let wrapper_class = class_list(&[
        "form__checkbox-wrapper",
        if disabled { "form__checkbox-wrapper--disabled" } else { "" },
    ]);

    view! {
        <div class=wrapper_class>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
                {move || description.get().map(|d| view! {
                    <span class="form__checkbox-description">{d}</span>
                })}
            </label>
        </div>
    }
}
