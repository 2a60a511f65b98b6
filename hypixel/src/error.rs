use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Response error:\nStatusCode: {0}\nText: {1}")]
    HttpStatus(reqwest::StatusCode, String),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Key was not verified: {0}")]
    KeyRejected(String),
}

impl Error {
    /// Short label of the failure class, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Request(e) if e.is_timeout() => "timeout",
            Error::Request(_) => "network",
            Error::HttpStatus(..) => "http status",
            Error::Parse(_) => "parse",
            Error::KeyRejected(_) => "key rejected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_name_the_failure_class() {
        let status = Error::HttpStatus(reqwest::StatusCode::FORBIDDEN, "Invalid API key".into());
        assert_eq!(status.kind(), "http status");
        assert!(status.to_string().contains("403"));

        let parse = Error::from(serde_json::from_str::<u8>("nope").unwrap_err());
        assert_eq!(parse.kind(), "parse");

        assert_eq!(Error::KeyRejected("Invalid API key".into()).kind(), "key rejected");
    }
}
