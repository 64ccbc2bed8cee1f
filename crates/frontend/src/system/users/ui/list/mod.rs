mod state;

use contracts::system::roles::RoleCatalog;
use contracts::system::users::{NewUserDto, User};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{use_toast, Badge, Tone};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::users::data::mock_users;
use state::create_state;

fn role_name(catalog: &RoleCatalog, role_id: &str) -> String {
    catalog
        .find(role_id)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| role_id.to_string())
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let config = use_config();
    let toast = use_toast();
    let catalog = StoredValue::new(RoleCatalog::built_in());

    let all_users: RwSignal<Vec<User>> = RwSignal::new(mock_users());
    let state = create_state(config.ui.default_page_size);
    let visible = Memo::new(move |_| state.with(|s| all_users.with(|users| s.visible(users))));
    let show_create_form = RwSignal::new(false);

    let search = Signal::derive(move || state.with(|s| s.search_query.clone()));
    let on_search = Callback::new(move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.page = 0;
        });
    });

    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    let toggle_active = move |id: String| {
        all_users.update(|users| {
            if let Some(u) = users.iter_mut().find(|u| u.id == id) {
                u.is_active = !u.is_active;
                log::info!("User {} is_active = {}", u.id, u.is_active);
            }
        });
    };

    let on_created = Callback::new(move |user: User| {
        toast.success(format!("Added {}", user.full_name));
        all_users.update(|users| users.push(user));
        show_create_form.set(false);
    });

    view! {
        <PageFrame page_id="user-management--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"User Management"</h1>
                    <Badge>{move || visible.with(|v| v.total_count.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_create_form.set(true)
                    >
                        {icon("plus")}
                        " Add user"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <SearchInput
                                value=search
                                on_change=on_search
                                placeholder="Name, email or department..."
                            />
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || visible.with(|v| v.page))
                                total_pages=Signal::derive(move || visible.with(|v| v.total_pages))
                                total_count=Signal::derive(move || visible.with(|v| v.total_count))
                                page_size=Signal::derive(move || state.with(|s| s.page_size))
                                on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                                on_page_size_change=Callback::new(move |size| {
                                    state.update(|s| {
                                        s.page_size = size;
                                        s.page = 0;
                                    })
                                })
                            />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="user-management-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Name" sort_field="full_name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Email" sort_field="email" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Role" sort_field="role_id" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Department" sort_field="department" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Status" sort_field="is_active" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=90.0 />
                                <SortableHeaderCell label="Last login" sort_field="last_login_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=140.0 />
                                <TableHeaderCell min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || visible.get().items
                                key=|u| (u.id.clone(), u.is_active)
                                children=move |user| {
                                    let user_id = user.id.clone();
                                    let role = catalog.with_value(|c| role_name(c, &user.role_id));
                                    let last_login = user
                                        .last_login_at
                                        .as_deref()
                                        .map(format_datetime)
                                        .unwrap_or_else(|| "Never".to_string());
                                    let (status_tone, status_text) = if user.is_active {
                                        (Tone::Success, "Active")
                                    } else {
                                        (Tone::Error, "Disabled")
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{user.full_name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{user.email.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{role}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{user.department.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge tone=status_tone>{status_text}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{last_login}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| toggle_active(user_id.clone())
                                                >
                                                    {if user.is_active { "Disable" } else { "Enable" }}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <CreateUserDialog open=show_create_form on_created=on_created />
            </div>
        </PageFrame>
    }
}

#[component]
fn CreateUserDialog(open: RwSignal<bool>, on_created: Callback<User>) -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let role_id = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let roles = RoleCatalog::built_in().all().to_vec();

    let reset = move || {
        full_name.set(String::new());
        email.set(String::new());
        department.set(String::new());
        role_id.set(String::new());
        set_error.set(None);
    };

    let on_save = move |_| {
        let dto = NewUserDto {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            role_id: role_id.get_untracked(),
            department: department.get_untracked(),
        };
        match dto.validate() {
            Ok(()) => {
                let user = dto.into_user(uuid::Uuid::new_v4().to_string());
                reset();
                on_created.run(user);
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    let on_cancel = move |_| {
        reset();
        open.set(false);
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add user"</DialogTitle>
                    <DialogContent>
                        {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Full name"</Label>
                            <Input value=full_name />
                            <Label>"Email"</Label>
                            <Input value=email input_type=InputType::Email />
                            <Label>"Department"</Label>
                            <Input value=department />
                            <Label>"Role"</Label>
                            <Select value=role_id>
                                <option value="">"Select a role"</option>
                                {roles
                                    .into_iter()
                                    .map(|r| view! { <option value=r.id>{r.name}</option> })
                                    .collect_view()}
                            </Select>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=on_save>
                            "Save"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
