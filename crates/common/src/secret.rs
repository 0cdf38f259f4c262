//! Credential wrappers.
//!
//! Database passwords and connection URLs travel through configuration as
//! [`SecretString`]. Its `Debug` output is redacted and the value is zeroized
//! on drop; reading it requires an explicit [`ExposeSecret::expose_secret`].

pub use secrecy::{ExposeSecret, SecretString};

/// Placeholder logged when a URL cannot be split safely.
pub const REDACTED: &str = "[REDACTED]";

/// Strip the userinfo and query parts of a connection URL for logging.
///
/// `postgres://user:pass@db:5432/catalog?sslmode=require` becomes
/// `postgres://db:5432/catalog`. Input without a scheme is replaced by
/// [`REDACTED`].
#[must_use]
pub fn redact_url(url: &SecretString) -> String {
    let raw = url.expose_secret();
    let Some((scheme, rest)) = raw.split_once("://") else {
        return REDACTED.to_string();
    };

    // Userinfo ends at the last '@', even when the password holds '/' or '?'.
    let location = rest.rsplit_once('@').map_or(rest, |(_, after)| after);
    // The query may carry `password=...`.
    let location = location.split_once('?').map_or(location, |(before, _)| before);

    format!("{scheme}://{location}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_url_debug_is_redacted() {
        let url = SecretString::from("postgres://catalog:hunter2@db:5432/catalog");
        let debug = format!("{url:?}");

        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_redact_url_drops_credentials() {
        let url = SecretString::from("postgres://catalog:hunter2@db:5432/catalog");
        assert_eq!(redact_url(&url), "postgres://db:5432/catalog");
    }

    #[test]
    fn test_redact_url_password_with_at_sign() {
        let url = SecretString::from("postgres://catalog:p@ss@db/catalog");
        assert_eq!(redact_url(&url), "postgres://db/catalog");
    }

    #[test]
    fn test_redact_url_without_userinfo() {
        let url = SecretString::from("postgres://db:5432/catalog");
        assert_eq!(redact_url(&url), "postgres://db:5432/catalog");
    }

    #[test]
    fn test_redact_url_unparseable_hides_everything() {
        let url = SecretString::from("catalog:hunter2");
        assert_eq!(redact_url(&url), REDACTED);
    }

    #[test]
    fn test_redact_url_password_with_slash() {
        let url = SecretString::from("postgres://catalog:hun/ter2@db:5432/catalog");
        let redacted = redact_url(&url);

        assert_eq!(redacted, "postgres://db:5432/catalog");
        assert!(!redacted.contains("ter2"));

        let url = SecretString::from("postgres://catalog:hun?ter2@db/catalog");
        assert_eq!(redact_url(&url), "postgres://db/catalog");
    }

    #[test]
    fn test_redact_url_drops_query() {
        let url = SecretString::from("postgres://db:5432/catalog?user=catalog&password=hunter2");
        assert_eq!(redact_url(&url), "postgres://db:5432/catalog");
    }
}
