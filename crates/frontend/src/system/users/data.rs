use contracts::system::users::User;

fn user(
    id: &str,
    full_name: &str,
    email: &str,
    role_id: &str,
    department: &str,
    is_active: bool,
    last_login_at: Option<&str>,
) -> User {
    User {
        id: id.to_string(),
        full_name: full_name.to_string(),
        email: email.to_string(),
        role_id: role_id.to_string(),
        department: department.to_string(),
        is_active,
        last_login_at: last_login_at.map(str::to_string),
    }
}

pub fn mock_users() -> Vec<User> {
    vec![
        user("u-001", "Sarah Mitchell", "sarah.mitchell@fabyard.example", "administrator", "IT", true, Some("2026-10-14T08:12:00Z")),
        user("u-002", "James Okafor", "james.okafor@fabyard.example", "project-controls", "Project Controls", true, Some("2026-10-14T07:45:00Z")),
        user("u-003", "Linda Chen", "linda.chen@fabyard.example", "project-controls", "Project Controls", true, Some("2026-10-13T16:20:00Z")),
        user("u-004", "Marco Alvarez", "marco.alvarez@fabyard.example", "fab-management", "Fabrication", true, Some("2026-10-12T09:05:00Z")),
        user("u-005", "Priya Nair", "priya.nair@fabyard.example", "planner", "Planning", true, Some("2026-10-14T10:30:00Z")),
        user("u-006", "Tom Becker", "tom.becker@fabyard.example", "craft-supervisor", "Welding", true, Some("2026-10-11T06:55:00Z")),
        user("u-007", "Aisha Rahman", "aisha.rahman@fabyard.example", "craft-supervisor", "Pipefitting", true, Some("2026-10-10T06:40:00Z")),
        user("u-008", "Daniel Foster", "daniel.foster@fabyard.example", "executive-viewer", "Executive", true, Some("2026-10-01T12:00:00Z")),
        user("u-009", "Elena Petrova", "elena.petrova@fabyard.example", "planner", "Planning", false, Some("2026-08-22T14:10:00Z")),
        user("u-010", "Kenji Watanabe", "kenji.watanabe@fabyard.example", "craft-supervisor", "Electrical", true, Some("2026-10-13T06:35:00Z")),
        user("u-011", "Grace Holloway", "grace.holloway@fabyard.example", "fab-management", "Fabrication", true, None),
        user("u-012", "Victor Mensah", "victor.mensah@fabyard.example", "craft-supervisor", "Painting", false, None),
    ]
}
