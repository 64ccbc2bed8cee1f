pub mod alert;
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod input;
pub mod progress;
pub mod radio;
pub mod select;
pub mod switch;
pub mod tabs;
pub mod textarea;
pub mod toast;
pub mod tooltip;
pub mod variant;

pub use alert::Alert;
pub use avatar::Avatar;
pub use badge::{Badge, RoleBadge};
pub use button::Button;
pub use card::Card;
pub use checkbox::Checkbox;
pub use input::Input;
pub use progress::Progress;
pub use radio::{Radio, RadioGroup};
pub use select::Select;
pub use switch::Switch;
pub use tabs::{TabItem, Tabs};
pub use textarea::Textarea;
pub use toast::{use_toast, ToastHost, ToastService};
pub use tooltip::{Tooltip, TooltipPlacement};
pub use variant::{ButtonVariant, Size, Tone};
