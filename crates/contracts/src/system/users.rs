use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role_id: String,
    pub department: String,
    pub is_active: bool,
    pub last_login_at: Option<String>,
}

impl User {
    /// Case-insensitive match against name, email and department.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.full_name.to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
            || self.department.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUserDto {
    pub full_name: String,
    pub email: String,
    pub role_id: String,
    pub department: String,
}

impl NewUserDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("Full name is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("A valid email is required".to_string());
        }
        if self.role_id.is_empty() {
            return Err("Select a role".to_string());
        }
        Ok(())
    }

    pub fn into_user(self, id: String) -> User {
        User {
            id,
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            role_id: self.role_id,
            department: self.department.trim().to_string(),
            is_active: true,
            last_login_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> NewUserDto {
        NewUserDto {
            full_name: "  Dana Reyes ".to_string(),
            email: "dana.reyes@example.com".to_string(),
            role_id: "planner".to_string(),
            department: "Planning".to_string(),
        }
    }

    #[test]
    fn test_matches_search() {
        let user = dto().into_user("u-1".to_string());
        assert!(user.matches_search("dana"));
        assert!(user.matches_search("EXAMPLE.COM"));
        assert!(user.matches_search("plan"));
        assert!(user.matches_search("  "));
        assert!(!user.matches_search("welding"));
    }

    #[test]
    fn test_validate() {
        assert!(dto().validate().is_ok());

        let mut bad = dto();
        bad.email = "no-at-sign".to_string();
        assert!(bad.validate().is_err());

        let mut bad = dto();
        bad.full_name = " ".to_string();
        assert!(bad.validate().is_err());

        let mut bad = dto();
        bad.role_id.clear();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_into_user_trims_and_activates() {
        let user = dto().into_user("u-7".to_string());
        assert_eq!(user.full_name, "Dana Reyes");
        assert!(user.is_active);
        assert!(user.last_login_at.is_none());
    }
}
