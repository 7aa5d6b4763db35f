//! Existence checks performed against a fresh listing before a mutation.
//!
//! The listing and the mutation are separate round trips, so another actor
//! can change the collection in between. Nothing here closes that window.

use tracing::debug;

use crate::ClientError;

/// Fails with `Conflict` if any element of `existing` matches.
pub(crate) fn ensure_absent<T, F>(
    existing: &[T],
    kind: &'static str,
    key: &str,
    matches: F,
) -> Result<(), ClientError>
where
    F: Fn(&T) -> bool,
{
    if existing.iter().any(matches) {
        debug!(kind, key, "refusing to create duplicate");
        return Err(ClientError::Conflict {
            kind,
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Fails with `NotFound` if no element of `existing` matches.
pub(crate) fn ensure_present<T, F>(
    existing: &[T],
    kind: &'static str,
    key: &str,
    matches: F,
) -> Result<(), ClientError>
where
    F: Fn(&T) -> bool,
{
    if !existing.iter().any(matches) {
        debug!(kind, key, "refusing to modify missing entry");
        return Err(ClientError::NotFound {
            kind,
            key: key.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent() {
        let names = ["www", "mail"];
        assert!(ensure_absent(&names, "record", "ftp", |n| *n == "ftp").is_ok());
        assert!(matches!(
            ensure_absent(&names, "record", "www", |n| *n == "www"),
            Err(ClientError::Conflict { kind: "record", key }) if key == "www"
        ));
        assert!(ensure_absent::<&str, _>(&[], "record", "www", |_| true).is_ok());
    }

    #[test]
    fn present() {
        let ids = ["1", "2"];
        assert!(ensure_present(&ids, "record", "2", |i| *i == "2").is_ok());
        assert!(matches!(
            ensure_present(&ids, "record", "3", |i| *i == "3"),
            Err(ClientError::NotFound { kind: "record", key }) if key == "3"
        ));
        assert!(ensure_present::<&str, _>(&[], "record", "1", |_| true).is_err());
    }

    #[test]
    fn messages() {
        let err = ensure_absent(&[()], "glue record", "ns1", |_| true).unwrap_err();
        assert_eq!(err.to_string(), "glue record ns1 already exists");
        let err = ensure_present(&[], "domain", "example.com", |_: &()| true).unwrap_err();
        assert_eq!(err.to_string(), "domain example.com does not exist");
    }
}
