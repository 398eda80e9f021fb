//! Lead-capture submission handling.
//!
//! Turns a raw `application/x-www-form-urlencoded` body into either a stored
//! [`LeadRecord`] or a rejection. Holds no state of its own; everything
//! durable goes through the injected [`LeadStore`].

use crate::leads::{LeadRecord, LeadStore, StoreError};
use std::borrow::Cow;

/// `source` stamped on every record captured by the site form.
pub const SOURCE_WEBSITE: &str = "website";

/// Form field carrying the visitor's address.
const EMAIL_FIELD: &str = "email";

/// Why a submission was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MissingOrInvalidEmail,
}

impl RejectReason {
    /// Stable machine-readable code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingOrInvalidEmail => "missing_or_invalid_email",
        }
    }

    /// Short text shown to the submitter.
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingOrInvalidEmail => "Invalid email",
        }
    }
}

/// Result of handling one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected(RejectReason),
}

/// Validate `raw_body` and append one lead to `store` if it passes.
///
/// Rejections leave the store untouched. A store write failure is returned
/// as an error: the submission was not durably accepted.
pub fn handle_submission(
    raw_body: &str,
    store: &dyn LeadStore,
) -> Result<SubmissionOutcome, StoreError> {
    let Some(email) = form_value(raw_body, EMAIL_FIELD) else {
        return Ok(SubmissionOutcome::Rejected(RejectReason::MissingOrInvalidEmail));
    };
    if !is_plausible_email(&email) {
        return Ok(SubmissionOutcome::Rejected(RejectReason::MissingOrInvalidEmail));
    }

    store.append(LeadRecord::new(email.trim(), SOURCE_WEBSITE))?;
    Ok(SubmissionOutcome::Accepted)
}

/// Syntactic check only: something around an `@`.
fn is_plausible_email(email: &str) -> bool {
    !email.trim().is_empty() && email.contains('@')
}

/// First non-empty value of `key` in a urlencoded form body.
///
/// Blank values (`email=`) are skipped like absent ones.
pub fn form_value(body: &str, key: &str) -> Option<String> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(k) == key).then(|| decode_component(v))
        })
        .find(|value| !value.is_empty())
        .map(Cow::into_owned)
}

/// Decode one form component: `+` is a space, then percent-decoding.
///
/// Invalid UTF-8 is replaced rather than rejected.
fn decode_component(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['+', '%']) {
        return Cow::Borrowed(raw);
    }
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::MemoryStore;

    fn submit(body: &str) -> (SubmissionOutcome, MemoryStore) {
        let store = MemoryStore::default();
        let outcome = handle_submission(body, &store).unwrap();
        (outcome, store)
    }

    #[test]
    fn test_valid_email_accepted() {
        let (outcome, store) = submit("email=a%40b.com");

        assert_eq!(outcome, SubmissionOutcome::Accepted);
        let records = store.load_all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "a@b.com");
        assert_eq!(records[0].source, "website");
        assert!(chrono::DateTime::parse_from_rfc3339(&records[0].timestamp).is_ok());
    }

    #[test]
    fn test_literal_at_sign_accepted() {
        let (outcome, store) = submit("email=a@b.com");
        assert_eq!(outcome, SubmissionOutcome::Accepted);
        assert_eq!(store.load_all()[0].email, "a@b.com");
    }

    #[test]
    fn test_email_without_at_rejected() {
        let (outcome, store) = submit("email=notanemail");

        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected(RejectReason::MissingOrInvalidEmail)
        );
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_missing_email_rejected() {
        for body in ["", "name=Ada", "emails=a@b.com", "email=", "email"] {
            let (outcome, store) = submit(body);
            assert!(
                matches!(outcome, SubmissionOutcome::Rejected(_)),
                "{body:?}"
            );
            assert!(store.load_all().is_empty());
        }
    }

    #[test]
    fn test_whitespace_trimmed() {
        let (outcome, store) = submit("email=++guest%40example.com%0A");
        assert_eq!(outcome, SubmissionOutcome::Accepted);
        assert_eq!(store.load_all()[0].email, "guest@example.com");
    }

    #[test]
    fn test_first_value_wins() {
        let (_, store) = submit("email=first@x.com&email=second@x.com");
        let records = store.load_all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "first@x.com");
    }

    #[test]
    fn test_blank_value_skipped() {
        let (_, store) = submit("email=&email=second@x.com");
        assert_eq!(store.load_all()[0].email, "second@x.com");
    }

    #[test]
    fn test_form_value_decoding() {
        assert_eq!(form_value("a=1&b=two+words", "b").as_deref(), Some("two words"));
        assert_eq!(form_value("e%6Dail=x%40y", "email").as_deref(), Some("x@y"));
        assert_eq!(form_value("a=%FF", "a").as_deref(), Some("\u{FFFD}"));
        assert_eq!(form_value("a=1", "b"), None);
    }

    #[test]
    fn test_reject_reason_text() {
        let reason = RejectReason::MissingOrInvalidEmail;
        assert_eq!(reason.code(), "missing_or_invalid_email");
        assert_eq!(reason.message(), "Invalid email");
    }

    #[test]
    fn test_store_failure_propagates() {
        struct FailingStore;
        impl LeadStore for FailingStore {
            fn load_all(&self) -> Vec<LeadRecord> {
                Vec::new()
            }
            fn append(&self, _: LeadRecord) -> Result<(), StoreError> {
                Err(StoreError::Write(
                    "leads/emails.json".into(),
                    std::io::Error::other("disk full"),
                ))
            }
        }

        assert!(handle_submission("email=a@b.com", &FailingStore).is_err());
        // Rejections never reach the store
        assert_eq!(
            handle_submission("email=nope", &FailingStore).unwrap(),
            SubmissionOutcome::Rejected(RejectReason::MissingOrInvalidEmail)
        );
    }
}
