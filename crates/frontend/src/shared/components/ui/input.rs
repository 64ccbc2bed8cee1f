use super::variant::class_list;
use leptos::prelude::*;

#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" by default
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
    /// Helper text under the field
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    /// Error text, replaces the hint and marks the field invalid
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let has_error = move || error.get().is_some_and(|e| !e.is_empty());
    let input_class = move || {
        let extra = class.get().unwrap_or_default();
        let invalid = if has_error() { "form__input--invalid" } else { "" };
        class_list(&["form__input", invalid, &extra])
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <input
                id=input_id
                class=input_class
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                aria-invalid=move || has_error().to_string()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || match (error.get().filter(|e| !e.is_empty()), hint.get()) {
                (Some(e), _) => Some(view! { <div class="form__error">{e}</div> }.into_any()),
                (None, Some(h)) => Some(view! { <div class="form__hint">{h}</div> }.into_any()),
                (None, None) => None,
            }}
        </div>
    }
}
