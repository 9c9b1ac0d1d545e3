//! Property tests for the catalog projection pipeline

use bookz_core::load::LoadState;
use bookz_core::projection::{filter, paginate, prioritize, total_pages, PageState};
use bookz_core::{Book, CatalogSession, CatalogConfig, PriorityList};
use proptest::prelude::*;

const CATEGORIES: [&str; 3] = ["REASONING", "GENERAL ENGLISH", "POLITY"];

fn arb_book() -> impl Strategy<Value = (String, String, usize)> {
    ("[a-cA-C ]{0,8}", "[a-cA-C ]{0,6}", 0..CATEGORIES.len())
}

fn arb_books() -> impl Strategy<Value = Vec<Book>> {
    prop::collection::vec(arb_book(), 0..40).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (title, author, cat))| {
                Book::new(i.to_string(), title, author, CATEGORIES[cat])
            })
            .collect()
    })
}

fn arb_category() -> impl Strategy<Value = Option<String>> {
    prop::option::of((0..CATEGORIES.len()).prop_map(|i| CATEGORIES[i].to_string()))
}

fn ids(books: &[&Book]) -> Vec<String> {
    books.iter().map(|b| b.id.clone()).collect()
}

proptest! {
    #[test]
    fn filter_matches_title_or_author_in_order(books in arb_books(), query in "[a-cA-C]{0,3}") {
        let matches = filter(&books, &query, None);
        let needle = query.to_lowercase();
        for book in &matches {
            prop_assert!(
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
            );
        }
        // Every match appears in collection order
        let positions: Vec<usize> = matches
            .iter()
            .map(|m| books.iter().position(|b| b.id == m.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        // Nothing that should match was dropped
        let expected = books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&needle) || b.author.to_lowercase().contains(&needle)
            })
            .count();
        prop_assert_eq!(matches.len(), expected);
    }

    #[test]
    fn filter_is_idempotent(
        books in arb_books(),
        query in "[a-c]{0,2}",
        category in arb_category(),
    ) {
        let once: Vec<Book> = filter(&books, &query, category.as_deref())
            .into_iter()
            .cloned()
            .collect();
        let twice = filter(&once, &query, category.as_deref());
        prop_assert_eq!(ids(&twice), once.iter().map(|b| b.id.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn prioritize_only_on_default_view(
        books in arb_books(),
        query in "[a-c]{0,2}",
        category in arb_category(),
        page in 1usize..5,
    ) {
        let state = PageState::from_parts(query.clone(), category.clone(), page);
        let priority = PriorityList::new(["b", "a"]);
        let matches = filter(&books, &query, category.as_deref());
        let ordered = prioritize(matches.clone(), &state, &priority);

        if state.is_default_view() {
            // Same items, reordered
            let mut a = ids(&ordered);
            let mut b = ids(&matches);
            a.sort();
            b.sort();
            prop_assert_eq!(a, b);

            // Priority titles lead, ranked by first matching entry
            let ranks: Vec<Option<usize>> =
                ordered.iter().map(|book| priority.first_match(&book.title)).collect();
            let leading = ranks.iter().take_while(|rank| rank.is_some()).count();
            prop_assert!(ranks[leading..].iter().all(|rank| rank.is_none()));
            prop_assert!(ranks[..leading].windows(2).all(|w| w[0] <= w[1]));

            // Relative order within each rank and within the rest is kept
            for window in ordered.windows(2) {
                let (x, y) = (window[0], window[1]);
                if priority.first_match(&x.title) == priority.first_match(&y.title) {
                    let px = books.iter().position(|b| b.id == x.id).unwrap();
                    let py = books.iter().position(|b| b.id == y.id).unwrap();
                    prop_assert!(px < py);
                }
            }
        } else {
            prop_assert_eq!(ids(&ordered), ids(&matches));
        }
    }

    #[test]
    fn paginate_never_exceeds_page_size_once_loaded(
        books in arb_books(),
        page in 1usize..12,
        page_size in 1usize..10,
    ) {
        let ordered: Vec<&Book> = books.iter().collect();
        let items = paginate(&ordered, page, page_size, &LoadState::Loaded);
        prop_assert!(items.len() <= page_size);
        if page <= total_pages(ordered.len(), page_size) {
            prop_assert!(!items.is_empty());
        } else {
            prop_assert!(items.is_empty());
        }
    }

    #[test]
    fn changing_filters_resets_page(
        books in arb_books(),
        page in 1usize..6,
        query in "[a-c]{1,2}",
        category in arb_category(),
    ) {
        let mut session = CatalogSession::new(&CatalogConfig::default().with_page_size(2));
        session.books_fetched(books).unwrap();
        session.go_to_page(page);
        if session.set_query(query) {
            prop_assert_eq!(session.state().page(), 1);
        }
        session.go_to_page(page);
        if session.set_category(category) {
            prop_assert_eq!(session.state().page(), 1);
        }
    }
}

#[test]
fn priority_example_orders_by_list_position() {
    let books = vec![
        Book::new("X", "contains B", "", ""),
        Book::new("Y", "contains A", "", ""),
        Book::new("Z", "neither", "", ""),
    ];
    let priority = PriorityList::new(["A", "B"]);
    let ordered = prioritize(filter(&books, "", None), &PageState::new(), &priority);
    assert_eq!(ids(&ordered), vec!["Y", "X", "Z"]);
}

#[test]
fn thirteen_items_third_page() {
    let books: Vec<Book> = (0..13)
        .map(|i| Book::new(i.to_string(), format!("Book {}", i), "", ""))
        .collect();
    let ordered: Vec<&Book> = books.iter().collect();
    assert_eq!(total_pages(ordered.len(), 6), 3);
    let items = paginate(&ordered, 3, 6, &LoadState::Loaded);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "12");
}

#[test]
fn empty_ordered_has_no_pages() {
    assert_eq!(total_pages(0, 6), 0);
    assert!(paginate(&[], 1, 6, &LoadState::Loaded).is_empty());
}
