use leptos::prelude::*;

#[component]
pub fn Card(
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional, into)] description: MaybeProp<String>,
    /// Rendered on the right side of the header
    #[prop(optional, into)]
    actions: Option<ViewFn>,
    /// Rendered under the body, separated by a border
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let has_header = title.get_untracked().is_some() || actions.is_some();

    view! {
        <div class=move || format!("card {}", class.get().unwrap_or_default())>
            {has_header.then(|| view! {
                <div class="card__header">
                    <div>
                        {move || title.get().map(|t| view! { <h3 class="card__title">{t}</h3> })}
                        {move || description.get().map(|d| view! { <p class="card__description">{d}</p> })}
                    </div>
                    {actions.map(|a| view! { <div class="card__actions">{a.run()}</div> })}
                </div>
            })}
            <div class="card__body">{children()}</div>
            {footer.map(|f| view! { <div class="card__footer">{f.run()}</div> })}
        </div>
    }
}
