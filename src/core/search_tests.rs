#[cfg(test)]
mod tests {
    use std::time::{
        Duration,
        Instant,
    };

    use crate::core::{
        models::{
            CardRecord,
            CardTier,
            OfferRecord,
            NO_RESULTS_MESSAGE,
        },
        search::SearchController,
    };

    const WINDOW: Duration = Duration::from_millis(300);

    fn card(name: &str, visa_type: Option<&str>) -> CardRecord {
        CardRecord {
            name: name.to_string(),
            visa_type: visa_type.map(|v| v.to_string()),
            rating: None,
        }
    }

    fn offer(title: &str) -> OfferRecord {
        OfferRecord {
            title: title.to_string(),
            image: format!("https://img.example/{}.png", title),
            link: format!("https://example.com/{}", title),
        }
    }

    fn catalog() -> Vec<CardRecord> {
        vec![
            card("Infinite Rewards Card", Some("Visa Infinite")),
            card("Gold Cashback Visa", Some("Visa Gold")),
            card("Platinum Travel Card", Some("Visa Platinum")),
            card("Everyday Card", None),
            card("", Some("Visa Gold")),
        ]
    }

    fn controller_with_catalog() -> SearchController {
        let mut controller = SearchController::with_window(WINDOW);
        controller.catalog_loaded(catalog());
        controller
    }

    /// Type a query and let the debounce window elapse.
    fn type_and_settle(controller: &mut SearchController, query: &str, start: Instant) -> Instant {
        controller.set_query(query, start);
        let settled = start + WINDOW;
        controller.poll(settled);
        settled
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let mut controller = controller_with_catalog();
        let now = type_and_settle(&mut controller, "", Instant::now());

        assert_eq!(controller.matches().count(), 0);
        assert!(controller.empty_message().is_none());

        // Still nothing after more time passes
        controller.poll(now + WINDOW);
        assert_eq!(controller.matches().count(), 0);
    }

    #[test]
    fn test_term_and_matching_is_order_insensitive() {
        let mut controller = controller_with_catalog();
        type_and_settle(&mut controller, "gold visa", Instant::now());
        let forward: Vec<String> = controller.matches().map(|c| c.name.clone()).collect();

        let mut controller = controller_with_catalog();
        type_and_settle(&mut controller, "visa gold", Instant::now());
        let reversed: Vec<String> = controller.matches().map(|c| c.name.clone()).collect();

        assert_eq!(forward, vec!["Gold Cashback Visa".to_string()]);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let mut controller = controller_with_catalog();
        type_and_settle(&mut controller, "CARD", Instant::now());

        // Substring match, catalog order preserved, nameless row excluded
        let names: Vec<&str> = controller.matches().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Infinite Rewards Card", "Platinum Travel Card", "Everyday Card"]);
    }

    #[test]
    fn test_no_results_message() {
        let mut controller = controller_with_catalog();
        type_and_settle(&mut controller, "zzz", Instant::now());

        assert_eq!(controller.matches().count(), 0);
        assert_eq!(controller.empty_message(), Some(NO_RESULTS_MESSAGE));

        // Message clears once the query matches again
        let mut controller = controller_with_catalog();
        type_and_settle(&mut controller, "everyday", Instant::now());
        assert!(controller.empty_message().is_none());
    }

    #[test]
    fn test_debounce_collapses_rapid_keystrokes() {
        let mut controller = controller_with_catalog();
        let start = Instant::now();

        controller.set_query("g", start);
        controller.poll(start + Duration::from_millis(100));
        controller.set_query("go", start + Duration::from_millis(100));
        controller.poll(start + Duration::from_millis(200));
        controller.set_query("gold", start + Duration::from_millis(200));
        controller.poll(start + Duration::from_millis(350));

        // Window restarted on every keystroke, so nothing committed yet
        assert_eq!(controller.debounced_query(), "");
        assert_eq!(controller.matches().count(), 0);

        controller.poll(start + Duration::from_millis(500));
        assert_eq!(controller.debounced_query(), "gold");
        let names: Vec<&str> = controller.matches().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Gold Cashback Visa"]);
    }

    #[test]
    fn test_selection_clears_matches_and_sets_input() {
        let mut controller = controller_with_catalog();
        type_and_settle(&mut controller, "gold", Instant::now());
        assert!(controller.has_matches());

        let request = controller.select_card("Gold Cashback Visa").unwrap();
        assert_eq!(request.tier, CardTier::Gold);

        assert!(!controller.has_matches());
        assert_eq!(controller.raw_query(), "Gold Cashback Visa");
        assert_eq!(controller.selected().unwrap().name, "Gold Cashback Visa");
        assert!(controller.empty_message().is_none());

        // The committed query equals the name, so no later poll reopens
        // the dropdown
        controller.poll(Instant::now() + Duration::from_secs(5));
        assert!(!controller.has_matches());
    }

    #[test]
    fn test_selection_resolves_tier_resource() {
        let mut controller = controller_with_catalog();
        type_and_settle(&mut controller, "platinum", Instant::now());

        let request = controller.select_card("Platinum Travel Card").unwrap();
        assert_eq!(request.tier, CardTier::Platinum);
        assert_eq!(request.tier.resource_name(), "Visa Platinum.csv");
    }

    #[test]
    fn test_selection_without_tier_falls_back_to_standard() {
        let mut controller = controller_with_catalog();
        type_and_settle(&mut controller, "everyday", Instant::now());

        let request = controller.select_card("Everyday Card").unwrap();
        assert_eq!(request.tier, CardTier::Standard);
        assert_eq!(request.tier.resource_name(), "Visa Standard.csv");
    }

    #[test]
    fn test_selecting_unknown_name_is_no_selection() {
        let mut controller = controller_with_catalog();
        let request = controller.select_card("Not In The Catalog");

        assert!(request.is_none());
        assert!(controller.selected().is_none());
        assert!(controller.offers().is_empty());
    }

    #[test]
    fn test_typing_discards_selection_and_offers() {
        let mut controller = controller_with_catalog();
        type_and_settle(&mut controller, "gold", Instant::now());

        let request = controller.select_card("Gold Cashback Visa").unwrap();
        assert!(controller.offers_loaded(request.generation, vec![offer("lounge")]));
        assert_eq!(controller.offers().len(), 1);

        // Cleared immediately on the keystroke, before any recompute
        controller.set_query("gold c", Instant::now());
        assert!(controller.selected().is_none());
        assert!(controller.offers().is_empty());
    }

    #[test]
    fn test_stale_offers_result_is_discarded() {
        let mut controller = controller_with_catalog();
        type_and_settle(&mut controller, "card", Instant::now());

        let first = controller.select_card("Infinite Rewards Card").unwrap();
        let second = controller.select_card("Platinum Travel Card").unwrap();
        assert_ne!(first.generation, second.generation);

        // The superseded fetch resolves late and must not land
        assert!(!controller.offers_loaded(first.generation, vec![offer("stale")]));
        assert!(controller.offers().is_empty());

        assert!(controller.offers_loaded(second.generation, vec![offer("fresh")]));
        assert_eq!(controller.offers()[0].title, "fresh");
    }

    #[test]
    fn test_offers_after_deselection_are_discarded() {
        let mut controller = controller_with_catalog();
        type_and_settle(&mut controller, "card", Instant::now());
        let request = controller.select_card("Infinite Rewards Card").unwrap();

        controller.set_query("something else", Instant::now());
        assert!(!controller.offers_loaded(request.generation, vec![offer("late")]));
        assert!(controller.offers().is_empty());
    }

    #[test]
    fn test_catalog_arriving_after_query_recomputes() {
        let mut controller = SearchController::with_window(WINDOW);
        type_and_settle(&mut controller, "infinite", Instant::now());

        // Empty corpus: silently zero matches, but the message shows
        assert_eq!(controller.matches().count(), 0);
        assert_eq!(controller.empty_message(), Some(NO_RESULTS_MESSAGE));

        controller.catalog_loaded(catalog());
        let names: Vec<&str> = controller.matches().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Infinite Rewards Card"]);
        assert!(controller.empty_message().is_none());
    }

    #[test]
    fn test_end_to_end_infinite_scenario() {
        let mut controller = controller_with_catalog();
        type_and_settle(&mut controller, "infinite", Instant::now());

        let names: Vec<&str> = controller.matches().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Infinite Rewards Card"]);

        let request = controller.select_card("Infinite Rewards Card").unwrap();
        assert_eq!(request.tier.resource_name(), "Visa Infinite.csv");

        let loaded =
            controller.offers_loaded(request.generation, vec![offer("miles"), offer("lounge")]);
        assert!(loaded);
        assert_eq!(controller.offers().len(), 2);
        assert_eq!(controller.offers()[0].title, "miles");
        assert_eq!(controller.offers()[1].title, "lounge");
    }
}
