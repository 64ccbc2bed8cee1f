use crate::shared::list_utils::{filter_list, paginate, sort_list, PageSlice, Searchable, Sortable};
use contracts::system::users::User;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for User {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches_search(filter)
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "email" => self.email.to_lowercase().cmp(&other.email.to_lowercase()),
            "role_id" => self.role_id.cmp(&other.role_id),
            "department" => self.department.cmp(&other.department),
            "is_active" => self.is_active.cmp(&other.is_active),
            "last_login_at" => self
                .last_login_at
                .as_deref()
                .unwrap_or("")
                .cmp(other.last_login_at.as_deref().unwrap_or("")),
            _ => self.full_name.to_lowercase().cmp(&other.full_name.to_lowercase()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UsersListState {
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl UsersListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_query: String::new(),
            sort_field: "full_name".to_string(),
            sort_ascending: true,
            page: 0,
            page_size,
        }
    }

    /// Same field flips the direction, a new field starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    /// Search, then sort, then cut out the current page.
    pub fn visible(&self, users: &[User]) -> PageSlice<User> {
        let mut data = filter_list(users.to_vec(), &self.search_query);
        sort_list(&mut data, &self.sort_field, self.sort_ascending);
        paginate(&data, self.page, self.page_size)
    }
}

pub fn create_state(page_size: usize) -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::users::data::mock_users;

    #[test]
    fn test_default_order_is_by_name() {
        let state = UsersListState::new(5);
        let page = state.visible(&mock_users());
        assert_eq!(page.items[0].full_name, "Aisha Rahman");
        assert_eq!(page.total_count, 12);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_search_then_page() {
        let mut state = UsersListState::new(10);
        state.search_query = "planning".to_string();
        let page = state.visible(&mock_users());
        assert_eq!(page.total_count, 2);
        assert!(page.items.iter().all(|u| u.department == "Planning"));
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = UsersListState::new(10);
        state.toggle_sort("full_name");
        assert!(!state.sort_ascending);
        state.toggle_sort("email");
        assert_eq!(state.sort_field, "email");
        assert!(state.sort_ascending);
    }
}
