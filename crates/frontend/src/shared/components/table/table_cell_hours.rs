//! Right-aligned table cell for hour values.

use super::number_format::{format_hours, format_signed_hours};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellHours(
    #[prop(into)] value: Signal<Option<f64>>,
    /// Prints a leading '+' and colors the value by sign (variance columns)
    #[prop(optional)]
    signed: bool,
    #[prop(optional)] bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) if signed => format_signed_hours(v),
        Some(v) => format_hours(v),
        None => "\u{2014}".to_string(),
    };

    let cell_style = move || {
        let mut styles = Vec::new();
        if signed {
            match value.get() {
                // over forecast burns budget
                Some(v) if v > 0.0 => styles.push("color: var(--color-error-700)"),
                Some(v) if v < 0.0 => styles.push("color: var(--color-success-700)"),
                _ => {}
            }
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>{formatted_text}</span>
        </TableCell>
    }
}
