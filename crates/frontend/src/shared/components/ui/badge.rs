use super::variant::{class_list, Tone};
use leptos::prelude::*;

#[component]
pub fn Badge(
    #[prop(optional, into)] tone: MaybeProp<Tone>,
    /// Small leading dot
    #[prop(optional)]
    dot: bool,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let full_class = move || {
        let tone_class = format!("badge--{}", tone.get().unwrap_or_default().as_str());
        let extra = class.get().unwrap_or_default();
        class_list(&["badge", &tone_class, &extra])
    };

    view! {
        <span class=full_class>
            {dot.then(|| view! { <span class="badge__dot"></span> })}
            {children()}
        </span>
    }
}

/// Role chip in the role's own color.
#[component]
pub fn RoleBadge(
    #[prop(into)] name: Signal<String>,
    #[prop(into)] color: Signal<String>,
) -> impl IntoView {
    view! {
        <span
            class="badge badge--role"
            style=move || format!("border-color: {0}; color: {0};", color.get())
        >
            {move || name.get()}
        </span>
    }
}
