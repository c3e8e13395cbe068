//! Outcome of a provider search

use serde::Serialize;

/// Tri-state outcome of a search against an upstream provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The provider answered and returned releases
    Ok,
    /// The provider does not know the package
    NotFound,
    /// The provider answered with any other status
    Unavailable,
}

impl Status {
    /// Translates an HTTP status code. Only an exact 200 counts as success.
    pub fn from_http(code: u16) -> Self {
        match code {
            200 => Status::Ok,
            404 => Status::NotFound,
            _ => Status::Unavailable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::NotFound => "not found",
            Status::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, Status::Ok)]
    #[case(404, Status::NotFound)]
    #[case(201, Status::Unavailable)]
    #[case(204, Status::Unavailable)]
    #[case(301, Status::Unavailable)]
    #[case(403, Status::Unavailable)]
    #[case(429, Status::Unavailable)]
    #[case(500, Status::Unavailable)]
    #[case(503, Status::Unavailable)]
    fn from_http_translates_status_code(#[case] code: u16, #[case] expected: Status) {
        assert_eq!(Status::from_http(code), expected);
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&Status::NotFound).unwrap(),
            r#""not_found""#
        );
    }
}
