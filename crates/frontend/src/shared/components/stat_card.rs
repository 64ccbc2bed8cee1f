use super::table::number_format::{format_hours, format_number_int};
use super::ui::Tone;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    Hours,
    Integer,
    Percent,
}

pub fn format_stat(value: f64, format: StatFormat) -> String {
    match format {
        StatFormat::Hours => format!("{} h", format_hours(value)),
        StatFormat::Integer => format_number_int(value),
        StatFormat::Percent => format!("{:.1}%", value),
    }
}

/// Arrow and modifier for a change vs. the previous period. Changes within
/// half a percent count as flat.
fn change_marker(pct: f64) -> (&'static str, &'static str) {
    if pct > 0.5 {
        ("\u{2191}", "stat-card__change stat-card__change--up")
    } else if pct < -0.5 {
        ("\u{2193}", "stat-card__change stat-card__change--down")
    } else {
        ("", "stat-card__change stat-card__change--flat")
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] icon_name: String,
    /// `None` renders a dash
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: StatFormat,
    #[prop(optional, into)] tone: MaybeProp<Tone>,
    /// Change % relative to the previous period
    #[prop(optional, into)]
    change_percent: MaybeProp<f64>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
) -> impl IntoView {
    let card_class = move || match tone.get().unwrap_or_default() {
        Tone::Neutral => "stat-card".to_string(),
        t => format!("stat-card stat-card--{}", t.as_str()),
    };

    let formatted = move || match value.get() {
        Some(v) => format_stat(v, format),
        None => "\u{2014}".to_string(),
    };

    let change_view = move || {
        change_percent.get().map(|pct| {
            let (arrow, cls) = change_marker(pct);
            view! { <span class=cls>{format!("{}{:.1}%", arrow, pct.abs())}</span> }
        })
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(18240.0, StatFormat::Hours), "18,240.0 h");
        assert_eq!(format_stat(142.0, StatFormat::Integer), "142");
        assert_eq!(format_stat(96.3, StatFormat::Percent), "96.3%");
    }

    #[test]
    fn test_change_marker() {
        assert_eq!(change_marker(3.0).0, "\u{2191}");
        assert_eq!(change_marker(-3.0).0, "\u{2193}");
        assert_eq!(change_marker(0.3).0, "");
    }
}
