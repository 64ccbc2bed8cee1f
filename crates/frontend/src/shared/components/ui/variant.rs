//! Visual variants shared by the UI kit.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Secondary => "button--secondary",
            ButtonVariant::Outline => "button--outline",
            ButtonVariant::Ghost => "button--ghost",
            ButtonVariant::Danger => "button--danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    /// BEM modifier for `block`, empty for the default size.
    pub fn modifier(&self, block: &str) -> String {
        match self {
            Size::Sm => format!("{block}--sm"),
            Size::Md => String::new(),
            Size::Lg => format!("{block}--lg"),
        }
    }
}

/// Tone used by badges, alerts, toasts and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Primary,
    Success,
    Warning,
    Error,
    Info,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Primary => "primary",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Error => "error",
            Tone::Info => "info",
        }
    }

    /// Parses the names used by contracts (`ApprovalStatus::badge_variant` etc.).
    pub fn from_name(name: &str) -> Self {
        match name {
            "primary" => Tone::Primary,
            "success" => Tone::Success,
            "warning" => Tone::Warning,
            "error" => Tone::Error,
            "info" => Tone::Info,
            _ => Tone::Neutral,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tone::Success => "check-circle",
            Tone::Warning | Tone::Error => "alert-triangle",
            _ => "info",
        }
    }
}

/// Joins non-empty class fragments with single spaces.
pub fn class_list(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_skips_empty() {
        assert_eq!(
            class_list(&["button", "", "button--primary", "  "]),
            "button button--primary"
        );
    }

    #[test]
    fn test_size_modifier() {
        assert_eq!(Size::Sm.modifier("button"), "button--sm");
        assert_eq!(Size::Md.modifier("button"), "");
    }

    #[test]
    fn test_tone_round_trips_contract_names() {
        for tone in [Tone::Primary, Tone::Success, Tone::Warning, Tone::Error, Tone::Info] {
            assert_eq!(Tone::from_name(tone.as_str()), tone);
        }
        assert_eq!(Tone::from_name("whatever"), Tone::Neutral);
    }
}
