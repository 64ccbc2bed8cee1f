use super::variant::Tone;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Alert(
    #[prop(optional)] tone: Tone,
    #[prop(optional, into)] title: MaybeProp<String>,
    /// Shows a close button that calls this
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("alert alert--{}", tone.as_str()) role="alert">
            <span class="alert__icon">{icon(tone.icon())}</span>
            <div class="alert__body">
                {move || title.get().map(|t| view! { <div class="alert__title">{t}</div> })}
                <div class="alert__text">{children()}</div>
            </div>
            {on_dismiss.map(|handler| view! {
                <button class="alert__close" title="Dismiss" on:click=move |_| handler.run(())>
                    {icon("x")}
                </button>
            })}
        </div>
    }
}
