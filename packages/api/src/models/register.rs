use serde::Serialize;

/// Role picked on the sign-up page. The backend stores it as an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    Guest,
    Editor,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Guest, UserRole::Editor];

    pub fn code(self) -> u8 {
        match self {
            UserRole::Admin => 0,
            UserRole::Guest => 1,
            UserRole::Editor => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Guest => "Guest",
            UserRole::Editor => "Editor",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.label() == label)
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agreed: bool,
    pub user_type: u8,
}
