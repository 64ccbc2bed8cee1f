use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipPlacement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl TooltipPlacement {
    fn class(&self) -> &'static str {
        match self {
            TooltipPlacement::Top => "tooltip__bubble--top",
            TooltipPlacement::Bottom => "tooltip__bubble--bottom",
            TooltipPlacement::Left => "tooltip__bubble--left",
            TooltipPlacement::Right => "tooltip__bubble--right",
        }
    }
}

/// Hover/focus tooltip around arbitrary content.
#[component]
pub fn Tooltip(
    #[prop(into)] text: Signal<String>,
    #[prop(optional)] placement: TooltipPlacement,
    children: Children,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <span
            class="tooltip"
            on:mouseenter=move |_| visible.set(true)
            on:mouseleave=move |_| visible.set(false)
            on:focusin=move |_| visible.set(true)
            on:focusout=move |_| visible.set(false)
        >
            {children()}
            <Show when=move || visible.get()>
                <span class=format!("tooltip__bubble {}", placement.class()) role="tooltip">
                    {move || text.get()}
                </span>
            </Show>
        </span>
    }
}
