//! Check registry
//!
//! The smoke sequence, in the order it runs. The order is fixed: the root
//! check first, so an unreachable API is flagged before the resource checks.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::sync::Arc;

use super::traits::Check;
use super::{CreateStatusCheck, ListStatusChecks, RootCheck};

/// Global registry of the smoke checks, keyed by short name
///
/// Uses IndexMap to preserve insertion order.
pub static CHECKS: Lazy<IndexMap<&'static str, Arc<dyn Check>>> = Lazy::new(|| {
    let mut m: IndexMap<&'static str, Arc<dyn Check>> = IndexMap::new();

    m.insert("root", Arc::new(RootCheck));
    m.insert("create-status", Arc::new(CreateStatusCheck));
    m.insert("list-status", Arc::new(ListStatusChecks));

    m
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HttpMethod;

    #[test]
    fn test_sequence_order() {
        let keys: Vec<_> = CHECKS.keys().copied().collect();
        assert_eq!(keys, vec!["root", "create-status", "list-status"]);
    }

    #[test]
    fn test_lookup_by_short_name() {
        let check = CHECKS.get("create-status").unwrap();
        assert_eq!(check.name(), "Create Status Check");
        assert_eq!(check.method(), HttpMethod::Post);
        assert!(CHECKS.get("unknown").is_none());
    }

    #[test]
    fn test_all_expect_200() {
        assert!(CHECKS.values().all(|c| c.expected_status() == 200));
    }
}
