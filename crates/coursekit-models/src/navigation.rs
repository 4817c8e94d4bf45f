//! Role to navigation lookup table.
//!
//! Each role maps to a fixed list of sidebar links. The table is explicit so
//! a role can never silently receive another role's links.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A role that has its own navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" | "estudiante" => Ok(Self::Student),
            "teacher" | "mentor" | "instructor" | "profesor" => Ok(Self::Teacher),
            "admin" | "administrador" => Ok(Self::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// A sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

const STUDENT_LINKS: &[NavLink] = &[
    NavLink {
        label: "Inicio",
        path: "/student/dashboard",
    },
    NavLink {
        label: "Mis cursos",
        path: "/student/courses",
    },
    NavLink {
        label: "Explorar cursos",
        path: "/courses",
    },
    NavLink {
        label: "Pagos",
        path: "/student/payments",
    },
    NavLink {
        label: "Perfil",
        path: "/student/profile",
    },
];

const TEACHER_LINKS: &[NavLink] = &[
    NavLink {
        label: "Inicio",
        path: "/teacher/dashboard",
    },
    NavLink {
        label: "Mis cursos",
        path: "/teacher/courses",
    },
    NavLink {
        label: "Crear curso",
        path: "/teacher/courses/new",
    },
    NavLink {
        label: "Estudiantes",
        path: "/teacher/students",
    },
    NavLink {
        label: "Ingresos",
        path: "/teacher/earnings",
    },
    NavLink {
        label: "Perfil",
        path: "/teacher/profile",
    },
];

const ADMIN_LINKS: &[NavLink] = &[
    NavLink {
        label: "Inicio",
        path: "/admin/dashboard",
    },
    NavLink {
        label: "Usuarios",
        path: "/admin/users",
    },
    NavLink {
        label: "Cursos",
        path: "/admin/courses",
    },
    NavLink {
        label: "Categorías",
        path: "/admin/categories",
    },
];

/// Links shown to `role`.
pub fn links_for(role: Role) -> &'static [NavLink] {
    match role {
        Role::Student => STUDENT_LINKS,
        Role::Teacher => TEACHER_LINKS,
        Role::Admin => ADMIN_LINKS,
    }
}
