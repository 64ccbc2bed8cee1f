use super::variant::Tone;
use leptos::prelude::*;

/// Share of `value` in `max` as a 0..=100 percentage.
pub fn progress_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

#[component]
pub fn Progress(
    #[prop(into)] value: Signal<f64>,
    #[prop(optional, default = 100.0)] max: f64,
    #[prop(optional)] tone: Tone,
    /// Prints the percentage next to the bar
    #[prop(optional)]
    show_label: bool,
) -> impl IntoView {
    let percent = move || progress_percent(value.get(), max);

    view! {
        <div class="progress">
            <div
                class=format!("progress__track progress__track--{}", tone.as_str())
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax=max.to_string()
                aria-valuenow=move || value.get().to_string()
            >
                <div class="progress__bar" style=move || format!("width: {:.1}%;", percent())></div>
            </div>
            {show_label.then(|| view! {
                <span class="progress__label">{move || format!("{:.0}%", percent())}</span>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent_clamps() {
        assert_eq!(progress_percent(25.0, 50.0), 50.0);
        assert_eq!(progress_percent(120.0, 100.0), 100.0);
        assert_eq!(progress_percent(-5.0, 100.0), 0.0);
        assert_eq!(progress_percent(5.0, 0.0), 0.0);
        assert_eq!(progress_percent(f64::NAN, 10.0), 0.0);
    }
}
