use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical school role.
///
/// - `Director`: school administration (users, courses, enrollments, payments).
/// - `Profesor`: teaching staff, takes attendance.
/// - `Alumno`: enrolled student.
/// - `Femme`: student in the company (elenco) program.
/// - `Visitante`: no session or an unrecognized backend role.
///
/// Roles are disjoint capability sets, not a hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Director,
    Profesor,
    Alumno,
    Femme,
    #[default]
    Visitante,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Director,
        Role::Profesor,
        Role::Alumno,
        Role::Femme,
        Role::Visitante,
    ];

    /// Map a backend role string onto a canonical role.
    ///
    /// Matching is case-insensitive. Unknown, empty and missing values
    /// resolve to `Visitante`.
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Role::Visitante;
        };
        match raw.to_lowercase().as_str() {
            "director" => Role::Director,
            "profesor" => Role::Profesor,
            "alumno" => Role::Alumno,
            "alumno-femme" | "femme" | "elenco" => Role::Femme,
            _ => Role::Visitante,
        }
    }

    /// Upper-case canonical name, used for persistence and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Director => "DIRECTOR",
            Role::Profesor => "PROFESOR",
            Role::Alumno => "ALUMNO",
            Role::Femme => "FEMME",
            Role::Visitante => "VISITANTE",
        }
    }

    /// Human label for menus and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Director => "Dirección",
            Role::Profesor => "Profesor",
            Role::Alumno => "Alumno",
            Role::Femme => "Femme",
            Role::Visitante => "Visitante",
        }
    }
}

/// Free-function form of [`Role::normalize`].
pub fn normalize_role(raw: Option<&str>) -> Role {
    Role::normalize(raw)
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Every string deserializes: unknown values become `Visitante`.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Role::normalize(raw.as_deref()))
    }
}

/// Accept either a JSON string or number as an identifier.
fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

/// Signed-in user as held by the session store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// User object as returned by the authentication backend.
/// `role` is whatever string the backend emits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl BackendUser {
    /// Convert to a store-owned [`User`], normalizing the role.
    pub fn into_user(self) -> User {
        User {
            role: Role::normalize(self.role.as_deref()),
            id: self.id,
            name: self.name,
            email: self.email,
            avatar: self.avatar,
        }
    }
}

/// Login response from the authentication backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: BackendUser,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Credentials posted to the backend login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Current identity and authentication status.
///
/// `is_authenticated` mirrors `token.is_some()`, and a user is present
/// whenever the session is authenticated. [`Session::is_consistent`]
/// checks both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl Session {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_consistent(&self) -> bool {
        self.is_authenticated == self.token.is_some()
            && (!self.is_authenticated || self.user.is_some())
    }

    /// Role of the signed-in user, if any.
    pub fn current_role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Role of the signed-in user, `Visitante` when nobody is signed in.
    pub fn role_or_default(&self) -> Role {
        self.current_role().unwrap_or_default()
    }

    /// A session is authenticated when it holds a token.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn can(&self, permission: crate::Permission) -> bool {
        crate::has_permission(self.current_role(), permission)
    }

    pub fn account_tabs(&self) -> Vec<crate::AccountTab> {
        crate::account_tabs(self.role_or_default())
    }
}
