//! Root Check
//!
//! Verifies the API root answers, i.e. the service is up at all.
//!
//! ## What it checks
//!
//! 1. `GET {base_url}/` returns 200

use super::traits::Check;
use crate::client::HttpMethod;

/// Root endpoint availability check
pub struct RootCheck;

impl Check for RootCheck {
    fn name(&self) -> &'static str {
        "Root API Endpoint"
    }

    fn description(&self) -> &'static str {
        "GET / answers 200"
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn endpoint(&self) -> &'static str {
        ""
    }

    fn failure_hint(&self) -> &'static str {
        "Root endpoint test failed, API may be down"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckContext;

    #[test]
    fn test_check_metadata() {
        let check = RootCheck;
        assert_eq!(check.name(), "Root API Endpoint");
        assert_eq!(check.method(), HttpMethod::Get);
        assert_eq!(check.endpoint(), "");
        assert_eq!(check.expected_status(), 200);
        assert!(check.payload(&CheckContext::new("c")).is_none());
    }
}
