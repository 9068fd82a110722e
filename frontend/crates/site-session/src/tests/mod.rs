mod property_tests;

use site_core::Identity;

use serde_json::json;

pub(crate) fn john() -> Identity {
    Identity::new(json!({ "name": "John", "email": "john@example.com" })).unwrap()
}

pub(crate) fn jane() -> Identity {
    Identity::new(json!({ "name": "Jane", "email": "jane@example.com" })).unwrap()
}
