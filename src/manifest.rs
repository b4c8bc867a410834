//! Fixed output mapping for the bootstrap run.
//!
//! Payloads are embedded at compile time from `resources/templates/` and
//! written verbatim by the emitter. This module is pure data: no I/O.
//!
//! Entry order is the emission order. It has no functional significance
//! (every write is independent) but keeps the progress output grouped
//! backend, frontend, repo.

// =============================================================================
// Embedded Payloads - Backend (Flask + MySQL)
// =============================================================================

mod backend {
    pub const APP_INIT_PY: &str = include_str!("../resources/templates/backend/app/__init__.py");
    pub const ROUTES_PY: &str = include_str!("../resources/templates/backend/app/routes.py");
    pub const DB_PY: &str = include_str!("../resources/templates/backend/app/db.py");
    pub const RUN_PY: &str = include_str!("../resources/templates/backend/run.py");
    pub const REQUIREMENTS_TXT: &str =
        include_str!("../resources/templates/backend/requirements.txt");
}

// =============================================================================
// Embedded Payloads - Frontend (Vite + React)
// =============================================================================

mod frontend {
    pub const INDEX_HTML: &str = include_str!("../resources/templates/frontend/index.html");
    pub const APP_JSX: &str = include_str!("../resources/templates/frontend/src/App.jsx");
    pub const MAIN_JSX: &str = include_str!("../resources/templates/frontend/src/main.jsx");
    pub const VITE_CONFIG_JS: &str =
        include_str!("../resources/templates/frontend/vite.config.js");
    pub const PACKAGE_JSON: &str = include_str!("../resources/templates/frontend/package.json");
    pub const STYLE_CSS: &str =
        include_str!("../resources/templates/frontend/assets/css/style.css");
}

// =============================================================================
// Embedded Payloads - Repository files
// =============================================================================

mod repo {
    // Stored as `gitignore` so the template itself is not treated as an
    // ignore file for resources/templates/.
    pub const GITIGNORE: &str = include_str!("../resources/templates/repo/gitignore");
    pub const TODO_MD: &str = include_str!("../resources/templates/repo/TODO.md");
    pub const README_MD: &str = include_str!("../resources/templates/repo/README.md");
}

// =============================================================================
// Public API
// =============================================================================

/// A single (relative path, literal payload) entry in the emission mapping.
#[derive(Debug, Clone, Copy)]
pub struct OutputFile {
    /// Output path, relative to the target root.
    pub path: &'static str,
    /// Literal text payload, written as-is modulo line-ending normalization.
    pub content: &'static str,
}

/// Every file the bootstrap writes, in emission order.
pub const OUTPUT_FILES: &[OutputFile] = &[
    // Backend
    OutputFile {
        path: "backend/app/__init__.py",
        content: backend::APP_INIT_PY,
    },
    OutputFile {
        path: "backend/app/routes.py",
        content: backend::ROUTES_PY,
    },
    OutputFile {
        path: "backend/app/db.py",
        content: backend::DB_PY,
    },
    OutputFile {
        path: "backend/run.py",
        content: backend::RUN_PY,
    },
    OutputFile {
        path: "backend/requirements.txt",
        content: backend::REQUIREMENTS_TXT,
    },
    // Frontend
    OutputFile {
        path: "frontend/index.html",
        content: frontend::INDEX_HTML,
    },
    OutputFile {
        path: "frontend/src/App.jsx",
        content: frontend::APP_JSX,
    },
    OutputFile {
        path: "frontend/src/main.jsx",
        content: frontend::MAIN_JSX,
    },
    OutputFile {
        path: "frontend/vite.config.js",
        content: frontend::VITE_CONFIG_JS,
    },
    OutputFile {
        path: "frontend/package.json",
        content: frontend::PACKAGE_JSON,
    },
    OutputFile {
        path: "frontend/assets/css/style.css",
        content: frontend::STYLE_CSS,
    },
    // Repo files
    OutputFile {
        path: ".gitignore",
        content: repo::GITIGNORE,
    },
    OutputFile {
        path: "TODO.md",
        content: repo::TODO_MD,
    },
    OutputFile {
        path: "README.md",
        content: repo::README_MD,
    },
];
