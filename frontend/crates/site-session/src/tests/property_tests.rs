use crate::{MemoryStorage, SessionStore, Storage};

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::Value;
use site_core::Identity;

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::from),
        ".{0,16}".prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,8}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn arb_identity() -> impl Strategy<Value = Identity> {
    arb_json().prop_filter_map("null is not an identity", Identity::new)
}

// =========================================================================
// Property-Based Tests - Session Persistence
// =========================================================================

proptest! {
    #[test]
    fn given_any_identity_when_login_and_reload_then_restored_deep_equal(identity in arb_identity()) {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::with_default_key(Arc::clone(&storage));
        store.login(identity.clone()).unwrap();

        let reloaded = SessionStore::with_default_key(storage);
        prop_assert!(reloaded.restore());
        prop_assert!(reloaded.is_authenticated());
        prop_assert_eq!(reloaded.identity(), Some(identity));
    }

    #[test]
    fn given_any_identity_when_login_then_logout_then_reload_is_unauthenticated(identity in arb_identity()) {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::with_default_key(Arc::clone(&storage));
        store.login(identity).unwrap();
        store.logout().unwrap();

        let reloaded = SessionStore::with_default_key(storage);
        prop_assert!(!reloaded.restore());
        prop_assert!(!reloaded.is_authenticated());
    }

    #[test]
    fn given_any_stored_text_when_restore_then_never_half_populated(stored in ".{0,64}") {
        let storage = MemoryStorage::new();
        storage.set("user", &stored).unwrap();
        let store = SessionStore::with_default_key(&storage);

        let restored = store.restore();

        prop_assert_eq!(restored, store.is_authenticated());
        if restored {
            let expected = serde_json::from_str::<Value>(&stored).ok().and_then(Identity::new);
            prop_assert_eq!(store.identity(), expected);
        }
    }

    #[test]
    fn given_any_login_logout_sequence_when_observed_then_flag_tracks_slot(
        ops in prop::collection::vec(prop::option::of(arb_identity()), 0..12)
    ) {
        let storage = MemoryStorage::new();
        let store = SessionStore::with_default_key(&storage);

        for op in ops {
            match op {
                Some(identity) => store.login(identity).unwrap(),
                None => store.logout().unwrap(),
            }

            prop_assert_eq!(store.is_authenticated(), store.identity().is_some());
            prop_assert_eq!(store.is_authenticated(), storage.get("user").unwrap().is_some());
        }
    }
}
