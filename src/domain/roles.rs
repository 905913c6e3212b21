// src/domain/roles.rs

/// Seeded role ids, see sql/schema.sql.
pub const ADMIN_ROLE_ID: i64 = 1;
pub const CUSTOMER_ROLE_ID: i64 = 2;

const ADMIN_LABELS: &[&str] = &["admin", "administrator", "администратор"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    /// Single place that decides whether a stored role means "admin".
    /// Recognised by the seeded id or by its label in either language.
    pub fn classify(role_id: Option<i64>, label: Option<&str>) -> Role {
        if role_id == Some(ADMIN_ROLE_ID) {
            return Role::Admin;
        }
        match label {
            Some(l) if ADMIN_LABELS.contains(&l.trim().to_lowercase().as_str()) => Role::Admin,
            _ => Role::Customer,
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }

    pub fn id(self) -> i64 {
        match self {
            Role::Admin => ADMIN_ROLE_ID,
            Role::Customer => CUSTOMER_ROLE_ID,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Customer => "Customer",
        }
    }

    /// Parses the value posted by the admin users form.
    pub fn from_form(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "customer" => Some(Role::Customer),
            _ => None,
        }
    }
}
