use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    fn class(&self) -> &'static str {
        match self {
            ModalSize::Small => "modal modal--sm",
            ModalSize::Medium => "modal",
            ModalSize::Large => "modal modal--lg",
        }
    }
}

/// Overlay dialog. Mount it conditionally; Escape, the overlay and the close
/// button all call `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    #[prop(optional)] size: ModalSize,
    /// Buttons rendered under the body
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div
                class=size.class()
                role="dialog"
                aria-modal="true"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" title="Close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
                {footer.map(|f| view! { <div class="modal-footer">{f.run()}</div> })}
            </div>
        </div>
    }
}
