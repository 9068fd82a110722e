use crate::{
    HistoryRouter, Location, NavigationTable, NavigationTrigger, Router, ScrollPolicy,
    ScrollPosition, ScrollTarget, SITE_ROUTES,
};

use proptest::prelude::*;

fn arb_href() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(SITE_ROUTES.iter().map(|entry| entry.path).collect::<Vec<_>>())
            .prop_map(str::to_string),
        "/[a-z]{0,8}(#[A-Za-z]{1,6})?",
    ]
}

#[derive(Debug, Clone)]
enum Step {
    Visit(String),
    Back,
    Forward,
    Scroll(u32),
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        arb_href().prop_map(Step::Visit),
        Just(Step::Back),
        Just(Step::Forward),
        any::<u32>().prop_map(Step::Scroll),
    ]
}

// =========================================================================
// Property-Based Tests - Resolution and Scrolling
// =========================================================================

proptest! {
    #[test]
    fn given_fragment_on_known_path_when_resolved_then_same_view_as_bare_path(
        entry in prop::sample::select(SITE_ROUTES.to_vec()),
        fragment in "[A-Za-z][A-Za-z0-9]{0,8}",
    ) {
        let table = NavigationTable::site();
        let bare = entry.location();
        let with_fragment = Location::parse(&format!("{}#{fragment}", bare.path()));

        let bare_view = table.resolve(&bare).map(|route| route.view);
        let fragment_view = table.resolve(&with_fragment).map(|route| route.view);

        prop_assert_eq!(bare_view, fragment_view);
    }

    #[test]
    fn given_any_push_when_navigate_then_never_saved_scroll(href in arb_href(), top in any::<u32>()) {
        let mut router = HistoryRouter::default();
        router.navigate(&href);
        router.record_scroll(ScrollPosition::new(0, top));

        let navigation = router.navigate(&href);

        prop_assert!(!matches!(navigation.scroll, ScrollTarget::Saved(_)));
    }

    #[test]
    fn given_any_step_sequence_when_navigating_then_scroll_follows_priority(
        steps in prop::collection::vec(arb_step(), 0..24)
    ) {
        let mut router = HistoryRouter::default();
        let policy = ScrollPolicy::default();

        for step in steps {
            let navigation = match step {
                Step::Visit(href) => Some(router.navigate(&href)),
                Step::Back => router.back(),
                Step::Forward => router.forward(),
                Step::Scroll(top) => {
                    router.record_scroll(ScrollPosition::new(0, top));
                    None
                }
            };

            if let Some(navigation) = navigation {
                match &navigation.scroll {
                    ScrollTarget::Saved(_) => {
                        prop_assert_eq!(navigation.trigger, NavigationTrigger::Traverse);
                    }
                    ScrollTarget::Element { selector, .. } => {
                        let fragment = navigation.location.fragment();
                        prop_assert_eq!(Some(&selector[1..]), fragment);
                    }
                    ScrollTarget::Top => {
                        prop_assert!(navigation.location.fragment().is_none());
                        prop_assert_eq!(
                            policy.target(&navigation.location, navigation.trigger, None),
                            ScrollTarget::Top
                        );
                    }
                }
                prop_assert_eq!(router.current(), Some(&navigation));
            }
        }
    }
}
