//! Capability tags and the static role → permission table.

use crate::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fine-grained capability checked by the UI and the route guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "view:dashboard")]
    ViewDashboard,
    #[serde(rename = "manage:users")]
    ManageUsers,
    #[serde(rename = "manage:courses")]
    ManageCourses,
    #[serde(rename = "manage:enrollments")]
    ManageEnrollments,
    #[serde(rename = "manage:payments")]
    ManagePayments,
    #[serde(rename = "view:reports")]
    ViewReports,
    #[serde(rename = "take:attendance")]
    TakeAttendance,
    #[serde(rename = "view:account")]
    ViewAccount,
    #[serde(rename = "enroll:courses")]
    EnrollCourses,
    #[serde(rename = "view:rehearsals")]
    ViewRehearsals,
}

impl Permission {
    pub const ALL: [Permission; 10] = [
        Permission::ViewDashboard,
        Permission::ManageUsers,
        Permission::ManageCourses,
        Permission::ManageEnrollments,
        Permission::ManagePayments,
        Permission::ViewReports,
        Permission::TakeAttendance,
        Permission::ViewAccount,
        Permission::EnrollCourses,
        Permission::ViewRehearsals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewDashboard => "view:dashboard",
            Permission::ManageUsers => "manage:users",
            Permission::ManageCourses => "manage:courses",
            Permission::ManageEnrollments => "manage:enrollments",
            Permission::ManagePayments => "manage:payments",
            Permission::ViewReports => "view:reports",
            Permission::TakeAttendance => "take:attendance",
            Permission::ViewAccount => "view:account",
            Permission::EnrollCourses => "enroll:courses",
            Permission::ViewRehearsals => "view:rehearsals",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const DIRECTOR: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ManageUsers,
    Permission::ManageCourses,
    Permission::ManageEnrollments,
    Permission::ManagePayments,
    Permission::ViewReports,
];
const PROFESOR: &[Permission] = &[Permission::TakeAttendance];
const ALUMNO: &[Permission] = &[Permission::ViewAccount, Permission::EnrollCourses];
const FEMME: &[Permission] = &[
    Permission::ViewAccount,
    Permission::EnrollCourses,
    Permission::ViewRehearsals,
];

/// Permissions granted to `role`. `Visitante` holds none.
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::Director => DIRECTOR,
        Role::Profesor => PROFESOR,
        Role::Alumno => ALUMNO,
        Role::Femme => FEMME,
        Role::Visitante => &[],
    }
}

/// Check whether `role` holds `permission`. A missing role holds nothing.
pub fn has_permission(role: Option<Role>, permission: Permission) -> bool {
    role.is_some_and(|r| permissions_for(r).contains(&permission))
}

/// A tab of the account dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountTab {
    Resumen,
    Usuarios,
    Cursos,
    Inscripciones,
    Pagos,
    Asistencia,
    MiCuenta,
    Ensayos,
}

impl AccountTab {
    pub const ALL: [AccountTab; 8] = [
        AccountTab::Resumen,
        AccountTab::Usuarios,
        AccountTab::Cursos,
        AccountTab::Inscripciones,
        AccountTab::Pagos,
        AccountTab::Asistencia,
        AccountTab::MiCuenta,
        AccountTab::Ensayos,
    ];

    /// Any one of these grants the tab.
    pub fn required(&self) -> &'static [Permission] {
        match self {
            AccountTab::Resumen => &[Permission::ViewDashboard],
            AccountTab::Usuarios => &[Permission::ManageUsers],
            AccountTab::Cursos => &[Permission::ManageCourses],
            AccountTab::Inscripciones => &[Permission::ManageEnrollments],
            AccountTab::Pagos => &[Permission::ManagePayments, Permission::ViewAccount],
            AccountTab::Asistencia => &[Permission::TakeAttendance],
            AccountTab::MiCuenta => &[Permission::ViewAccount],
            AccountTab::Ensayos => &[Permission::ViewRehearsals],
        }
    }

    /// Roles that see this tab.
    pub fn roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| account_tabs(*role).contains(self))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountTab::Resumen => "Resumen",
            AccountTab::Usuarios => "Usuarios",
            AccountTab::Cursos => "Cursos",
            AccountTab::Inscripciones => "Inscripciones",
            AccountTab::Pagos => "Pagos",
            AccountTab::Asistencia => "Asistencia",
            AccountTab::MiCuenta => "Mi cuenta",
            AccountTab::Ensayos => "Ensayos",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            AccountTab::Resumen => "/cuenta/resumen",
            AccountTab::Usuarios => "/cuenta/usuarios",
            AccountTab::Cursos => "/cuenta/cursos",
            AccountTab::Inscripciones => "/cuenta/inscripciones",
            AccountTab::Pagos => "/cuenta/pagos",
            AccountTab::Asistencia => "/cuenta/asistencia",
            AccountTab::MiCuenta => "/cuenta/perfil",
            AccountTab::Ensayos => "/cuenta/ensayos",
        }
    }
}

/// Account tabs visible to `role`, in menu order.
pub fn account_tabs(role: Role) -> Vec<AccountTab> {
    AccountTab::ALL
        .into_iter()
        .filter(|tab| tab.required().iter().any(|p| has_permission(Some(role), *p)))
        .collect()
}
