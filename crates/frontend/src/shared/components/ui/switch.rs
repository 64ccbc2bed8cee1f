use leptos::prelude::*;

/// On/off toggle rendered as a `role="switch"` button.
#[component]
pub fn Switch(
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <label class="switch" class:switch--disabled=disabled>
            <button
                type="button"
                role="switch"
                class="switch__track"
                class:switch__track--on=move || checked.get()
                aria-checked=move || checked.get().to_string()
                disabled=disabled
                on:click=move |_| on_change.run(!checked.get_untracked())
            >
                <span class="switch__thumb"></span>
            </button>
            {move || label.get().map(|l| view! { <span class="switch__label">{l}</span> })}
        </label>
    }
}
