use super::variant::Size;
use leptos::prelude::*;

/// Up to two initials from a display name: "Maria del Rio" -> "MR".
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let picked: Vec<&str> = match words.as_slice() {
        [] => vec![],
        [one] => vec![one],
        [first, .., last] => vec![first, last],
    };
    picked
        .iter()
        .filter_map(|w| w.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[component]
pub fn Avatar(
    #[prop(into)] name: Signal<String>,
    #[prop(optional)] size: Size,
    /// Background color, theme default otherwise
    #[prop(optional, into)]
    color: MaybeProp<String>,
) -> impl IntoView {
    let class = format!("avatar {}", size.modifier("avatar"));

    view! {
        <span
            class=class
            title=move || name.get()
            style=move || color.get().map(|c| format!("background-color: {c};")).unwrap_or_default()
        >
            {move || initials(&name.get())}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Maria del Rio"), "MR");
        assert_eq!(initials("  olga "), "O");
        assert_eq!(initials(""), "");
    }
}
