//! Request and response bodies for the Resend emails API.

use serde::{Deserialize, Serialize};

/// An email to send.
///
/// Exactly one of `text`/`html` is normally set; Resend accepts both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl OutgoingEmail {
    /// Plain text email to a single recipient.
    #[must_use]
    pub fn text(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: vec![to.into()],
            subject: subject.into(),
            text: Some(body.into()),
            html: None,
        }
    }

    /// HTML email to a single recipient.
    #[must_use]
    pub fn html(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: vec![to.into()],
            subject: subject.into(),
            text: None,
            html: Some(body.into()),
        }
    }
}

/// Successful send response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SentEmail {
    /// Resend message id.
    pub id: String,
}

/// Error body returned by Resend.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_text_email_omits_html() {
        let email = OutgoingEmail::text("a@b.c", "d@e.f", "Hi", "Body");
        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json["to"], serde_json::json!(["d@e.f"]));
        assert_eq!(json["text"], "Body");
        assert!(json.get("html").is_none());
    }

    #[test]
    fn test_html_email_omits_text() {
        let email = OutgoingEmail::html("a@b.c", "d@e.f", "Hi", "<p>Body</p>");
        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json["html"], "<p>Body</p>");
        assert!(json.get("text").is_none());
    }
}
