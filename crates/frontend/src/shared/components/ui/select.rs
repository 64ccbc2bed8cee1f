use super::variant::class_list;
use leptos::prelude::*;

#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    /// (value, label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Disabled first option with an empty value
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let select_class = move || {
        let extra = class.get().unwrap_or_default();
        class_list(&["form__select", &extra])
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>{l}</label>
            })}
            <select
                id=select_id
                class=select_class
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|p| view! {
                    <option value="" disabled=true selected=move || value.get().is_empty()>{p}</option>
                })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| {
                        let val_for_check = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == val_for_check>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
