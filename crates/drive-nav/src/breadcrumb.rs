//! Breadcrumb trail shown above drive pages.

use serde::Serialize;

/// Label and target of the shared-items breadcrumb.
pub const SHARED_LABEL: &str = "Shared";
pub const SHARED_ROUTE: &str = "/shared";

/// One entry of the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    pub route: String,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            route: route.into(),
        }
    }
}

/// Trail installed when a shared item is opened directly.
pub fn shared_root() -> Vec<Breadcrumb> {
    vec![Breadcrumb::new(SHARED_LABEL, SHARED_ROUTE)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_root_shape() {
        let json = serde_json::to_value(shared_root()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "label": "Shared", "route": "/shared" }])
        );
    }
}
