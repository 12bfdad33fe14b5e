//! Compile-time configuration for routing and access control.

/// Access key expected by the admin-login guard.
///
/// Override at build time with the `GLASS_ADMIN_KEY` environment variable.
/// This value ships in the client bundle; it only hides the page.
pub const ADMIN_ACCESS_KEY: &str = match option_env!("GLASS_ADMIN_KEY") {
    Some(key) => key,
    None => "my-secret-key",
};

/// Query parameter carrying the admin access key.
pub const ADMIN_KEY_PARAM: &str = "key";

/// Where unauthorized admin-login visits are sent.
pub const ADMIN_LOGIN_FALLBACK: &str = "/";

/// Maximum number of redirects followed by a single navigation.
pub const MAX_REDIRECTS: usize = 10;

/// Route pattern limits.
pub mod pattern {
    /// Maximum length of a route pattern in bytes.
    pub const MAX_LENGTH: usize = 1024;
    /// Maximum number of segments in a route pattern.
    pub const MAX_SEGMENTS: usize = 32;
    /// Size limit for a compiled pattern regex (1 MiB).
    pub const MAX_REGEX_SIZE: usize = 1 << 20;
}
