//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        "output".into()
    }

    pub fn template() -> PathBuf {
        "templates/base.html".into()
    }

    pub fn assets() -> PathBuf {
        "assets".into()
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        8080
    }
}

// ============================================================================
// [leads] Section Defaults
// ============================================================================

pub mod leads {
    use std::path::PathBuf;

    pub fn path() -> PathBuf {
        "leads/emails.json".into()
    }
}
