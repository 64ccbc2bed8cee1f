use leptos::prelude::*;

#[component]
pub fn Radio(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(into)] checked_value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    /// Groups radios together
    #[prop(into)]
    name: String,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    let radio_id = format!("radio-{}-{}", name, value);
    let value_for_check = value.clone();
    let value_for_change = value.clone();

    view! {
        <div class="form__radio-wrapper" class:form__radio-wrapper--disabled=disabled>
            <input
                id=radio_id.clone()
                type="radio"
                class="form__radio"
                name=name
                value=value
                prop:checked=move || checked_value.get() == value_for_check
                disabled=disabled
                on:change=move |_| {
                    if let Some(handler) = on_change {
                        handler.run(value_for_change.clone());
                    }
                }
            />
            <label class="form__radio-label" for=radio_id>{label}</label>
        </div>
    }
}

#[component]
pub fn RadioGroup(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(into)] name: String,
    /// (value, label) pairs
    options: Vec<(String, String)>,
    /// Lay options out in a row
    #[prop(optional)]
    inline: bool,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <div class="form__group" role="radiogroup">
            {move || label.get().map(|l| view! { <span class="form__label">{l}</span> })}
            <div class="form__radio-group" class:form__radio-group--inline=inline>
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        view! {
                            <Radio
                                label=text
                                value=val
                                checked_value=value
                                on_change=Callback::new(move |v: String| {
                                    if let Some(handler) = on_change {
                                        handler.run(v);
                                    }
                                })
                                name=name.clone()
                                disabled=disabled
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
