use leptos::prelude::*;

/// "12 / 500" counter text, `None` without a limit.
pub fn char_counter(text: &str, max_length: Option<usize>) -> Option<String> {
    max_length.map(|max| format!("{} / {}", text.chars().count(), max))
}

#[component]
pub fn Textarea(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] disabled: bool,
    /// 3 by default
    #[prop(optional)]
    rows: Option<u32>,
    /// Enables the character counter
    #[prop(optional)]
    max_length: Option<usize>,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>{l}</label>
            })}
            <textarea
                id=textarea_id
                class="form__textarea"
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=disabled
                rows=rows.unwrap_or(3)
                maxlength=max_length.map(|m| m.to_string())
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
            {move || char_counter(&value.get(), max_length).map(|c| view! {
                <div class="form__hint form__hint--right">{c}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_counter_counts_chars() {
        assert_eq!(char_counter("héllo", Some(10)), Some("5 / 10".to_string()));
        assert_eq!(char_counter("abc", None), None);
    }
}
