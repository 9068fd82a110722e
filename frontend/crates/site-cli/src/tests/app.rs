use super::mount;
use crate::{AccountArea, NavLink};

use std::sync::Arc;

use googletest::assert_that;
use googletest::prelude::eq;
use serde_json::json;
use site_core::{Identity, View};
use site_router::Router;
use site_session::{MemoryStorage, Storage};

fn john() -> Identity {
    Identity::new(json!({ "name": "John", "email": "john@example.com" })).unwrap()
}

// =========================================================================
// Mount
// =========================================================================

#[test]
fn given_empty_storage_when_mount_then_logged_out() {
    // Given
    let storage = Arc::new(MemoryStorage::new());

    // When
    let app = mount(&storage);

    // Then
    assert!(!app.session().is_authenticated());
    assert!(app.router().current().is_none());
}

#[test]
fn given_previous_login_when_mount_then_session_restored() {
    // Given
    let storage = Arc::new(MemoryStorage::new());
    mount(&storage).session().login(john()).unwrap();

    // When
    let app = mount(&storage);

    // Then
    assert!(app.session().is_authenticated());
    assert_eq!(app.session().identity(), Some(john()));
}

#[test]
fn given_garbage_in_storage_when_mount_then_logged_out() {
    // Given
    let storage = Arc::new(MemoryStorage::new());
    storage.set("user", "{not json").unwrap();

    // When
    let app = mount(&storage);

    // Then
    assert!(!app.session().is_authenticated());
}

// =========================================================================
// Render
// =========================================================================

#[test]
fn given_logged_out_when_render_home_then_account_links_shown() {
    // Given
    let storage = Arc::new(MemoryStorage::new());
    let mut app = mount(&storage);

    // When
    let navigation = app.router_mut().navigate("/");
    let page = app.render(&navigation);

    // Then
    assert_that!(page.title, eq("Welcome"));
    assert_eq!(page.view, Some(View::Home));
    assert!(!page.is_signed_in());
    assert_eq!(
        page.account,
        AccountArea::SignedOut {
            links: vec![
                NavLink {
                    label: "Login",
                    href: "/login",
                    active: false,
                },
                NavLink {
                    label: "Register",
                    href: "/register",
                    active: false,
                },
            ],
        }
    );
}

#[test]
fn given_logged_in_when_render_then_display_name_shown() {
    // Given
    let storage = Arc::new(MemoryStorage::new());
    let mut app = mount(&storage);
    app.session().login(john()).unwrap();

    // When
    let navigation = app.router_mut().navigate("/gallery");
    let page = app.render(&navigation);

    // Then
    assert_eq!(
        page.account,
        AccountArea::SignedIn {
            name: "John".to_string()
        }
    );
}

#[test]
fn given_identity_without_name_when_render_then_generic_account_label() {
    // Given
    let storage = Arc::new(MemoryStorage::new());
    let mut app = mount(&storage);
    app.session()
        .login(Identity::new(json!({ "id": 42 })).unwrap())
        .unwrap();

    // When
    let navigation = app.router_mut().navigate("/");
    let page = app.render(&navigation);

    // Then
    assert_eq!(
        page.account,
        AccountArea::SignedIn {
            name: "Account".to_string()
        }
    );
}

#[test]
fn given_logout_when_render_then_signed_out_again() {
    // Given
    let storage = Arc::new(MemoryStorage::new());
    let mut app = mount(&storage);
    app.session().login(john()).unwrap();
    app.session().logout().unwrap();

    // When
    let navigation = app.router_mut().navigate("/booking");
    let page = app.render(&navigation);

    // Then
    assert!(!page.is_signed_in());
    assert_that!(page.title, eq("Book an Appointment"));
}

#[test]
fn given_about_anchor_when_render_then_home_page_with_section() {
    // Given
    let storage = Arc::new(MemoryStorage::new());
    let mut app = mount(&storage);

    // When
    let navigation = app.router_mut().navigate("/#About");
    let page = app.render(&navigation);

    // Then
    assert_eq!(page.view, Some(View::Home));
    assert_eq!(page.section.as_deref(), Some("About"));

    let active: Vec<&str> = page
        .nav
        .iter()
        .filter(|link| link.active)
        .map(|link| link.label)
        .collect();
    assert_eq!(active, vec!["About"]);
}

#[test]
fn given_any_page_when_render_then_nav_excludes_account_routes() {
    // Given
    let storage = Arc::new(MemoryStorage::new());
    let mut app = mount(&storage);

    // When
    let navigation = app.router_mut().navigate("/inventory");
    let page = app.render(&navigation);

    // Then
    let labels: Vec<&str> = page.nav.iter().map(|link| link.label).collect();
    assert_eq!(
        labels,
        vec![
            "Home",
            "About",
            "Services",
            "Gallery",
            "Booking",
            "Inventory",
            "Calendar"
        ]
    );
}

#[test]
fn given_unknown_path_when_render_then_not_found_page() {
    // Given
    let storage = Arc::new(MemoryStorage::new());
    let mut app = mount(&storage);

    // When
    let navigation = app.router_mut().navigate("/pricing");
    let page = app.render(&navigation);

    // Then
    assert_that!(page.title, eq("Page Not Found"));
    assert!(page.view.is_none());
    assert!(page.nav.iter().all(|link| !link.active));
}
