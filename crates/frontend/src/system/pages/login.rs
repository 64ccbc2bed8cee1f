use crate::shared::components::ui::{Alert, Badge, Button, ButtonVariant, Tone};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::system::auth::context::use_role;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Role picker. There are no credentials: choosing a role is the login.
#[component]
pub fn LoginPage() -> impl IntoView {
    let role_ctx = use_role();
    let config = use_config();
    let navigate = use_navigate();

    let selected = RwSignal::new(None::<String>);
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(role_id) = selected.get_untracked() else {
            set_error_message.set(Some("Select a role to continue".to_string()));
            return;
        };
        match role_ctx.login(&role_id) {
            Ok(()) => {
                set_error_message.set(None);
                navigate("/app", Default::default());
            }
            Err(e) => set_error_message.set(Some(e)),
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{config.app.title.clone()}</h1>
                <h2>{config.app.subtitle.clone()}</h2>

                <Show when=move || error_message.get().is_some()>
                    <Alert tone=Tone::Error>
                        {move || error_message.get().unwrap_or_default()}
                    </Alert>
                </Show>

                <form on:submit=on_submit>
                    <div class="login-roles" role="radiogroup">
                        {role_ctx
                            .roles()
                            .into_iter()
                            .map(|role| {
                                let id_check = role.id.clone();
                                let id_click = role.id.clone();
                                let read_only = role.read_only();
                                view! {
                                    <button
                                        type="button"
                                        class="login-role"
                                        class:login-role--selected=move || {
                                            selected.get().as_deref() == Some(id_check.as_str())
                                        }
                                        style=format!("--role-color: {};", role.color)
                                        on:click=move |_| {
                                            selected.set(Some(id_click.clone()));
                                            set_error_message.set(None);
                                        }
                                    >
                                        <span class="login-role__icon">{icon(&role.icon)}</span>
                                        <span class="login-role__text">
                                            <span class="login-role__name">
                                                {role.name.clone()}
                                                {read_only.then(|| view! {
                                                    <Badge tone=Tone::Info>"Read only"</Badge>
                                                })}
                                            </span>
                                            <span class="login-role__description">{role.description.clone()}</span>
                                        </span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Button
                        variant=ButtonVariant::Primary
                        button_type="submit"
                        class="login-submit"
                        disabled=Signal::derive(move || selected.get().is_none())
                    >
                        "Continue"
                    </Button>
                </form>

                <div class="login-info">
                    <a href="/ui-showcase">"Browse the UI component showcase"</a>
                </div>
            </div>
        </div>
    }
}
