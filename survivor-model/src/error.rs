use thiserror::Error;

/// Why a read against the survivors API produced no value.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (network down, CORS refusal).
    #[error("transport failure: {0}")]
    Transport(String),
    /// Non-2xx answer. `body` keeps the start of whatever came back.
    #[error("{url} answered with HTTP {status}{}", body_suffix(.body))]
    Status {
        status: u16,
        url: String,
        body: String,
    },
    /// The body was not JSON or did not have the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

const BODY_EXCERPT_CHARS: usize = 200;

impl FetchError {
    pub fn status(status: u16, url: impl Into<String>, body: &str) -> Self {
        FetchError::Status {
            status,
            url: url.into(),
            body: body.trim().chars().take(BODY_EXCERPT_CHARS).collect(),
        }
    }
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = FetchError::status(500, "http://localhost:8080/survivors", "");
        assert_eq!(
            err.to_string(),
            "http://localhost:8080/survivors answered with HTTP 500"
        );
        assert_eq!(
            FetchError::Decode("missing field `name`".into()).to_string(),
            "malformed response: missing field `name`"
        );
    }

    #[test]
    fn status_errors_carry_the_rejected_body() {
        let err = FetchError::status(
            404,
            "http://localhost:8080/survivors/stats",
            "  {\"error\":\"no such route\"}\n",
        );
        assert_eq!(
            err.to_string(),
            r#"http://localhost:8080/survivors/stats answered with HTTP 404: {"error":"no such route"}"#
        );

        let long = "x".repeat(1000);
        let FetchError::Status { body, .. } = FetchError::status(502, "u", &long) else {
            panic!("expected a status error");
        };
        assert_eq!(body.len(), BODY_EXCERPT_CHARS);
    }
}
