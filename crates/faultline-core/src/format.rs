/// Wire representation chosen for an error response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// JSON object body
    Json,
    /// Two-part plain text body
    Text,
}

impl ResponseFormat {
    /// Choose a format from the request's declared content preference
    ///
    /// A plain substring check: any signal containing `application/json`
    /// selects JSON, everything else (including an absent header) selects
    /// plain text. No quality-value parsing, no wildcard handling.
    #[must_use]
    pub fn negotiate(accept: Option<&str>) -> Self {
        match accept {
            Some(value) if value.contains("application/json") => Self::Json,
            _ => Self::Text,
        }
    }
}
