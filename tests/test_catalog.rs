//! Tests for the shared product catalog

use shopfront::catalog::{Catalog, Item, PriceFilter};

fn names(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

#[tokio::test]
async fn test_seeded_catalog() {
    let catalog = Catalog::seeded();
    let items = catalog.items().await;

    assert_eq!(items.len(), 5);
    assert_eq!(items[0], Item::new("Product1", 100));
    assert_eq!(items[4], Item::new("Product5", 500));
}

#[tokio::test]
async fn test_filter_inclusive_price_range() {
    let catalog = Catalog::seeded();

    let items = catalog
        .filter(PriceFilter {
            min_price: 200,
            top_price: 400,
            limit: None,
        })
        .await;

    assert_eq!(names(&items), vec!["Product2", "Product3", "Product4"]);
}

#[tokio::test]
async fn test_filter_limit_keeps_insertion_order() {
    let catalog = Catalog::seeded();

    let items = catalog
        .filter(PriceFilter {
            limit: Some(2),
            ..PriceFilter::default()
        })
        .await;

    assert_eq!(names(&items), vec!["Product1", "Product2"]);
}

#[tokio::test]
async fn test_filter_limit_zero() {
    let catalog = Catalog::seeded();

    let items = catalog
        .filter(PriceFilter {
            limit: Some(0),
            ..PriceFilter::default()
        })
        .await;

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_filter_empty_range() {
    let catalog = Catalog::seeded();

    let items = catalog
        .filter(PriceFilter {
            min_price: 400,
            top_price: 200,
            limit: None,
        })
        .await;

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_append_goes_to_the_end() {
    let catalog = Catalog::seeded();
    catalog.append(Item::new("Widget", 50)).await;

    let items = catalog.items().await;
    assert_eq!(items.len(), 6);
    assert_eq!(items.last().unwrap(), &Item::new("Widget", 50));
}

#[tokio::test]
async fn test_duplicate_names_allowed() {
    let catalog = Catalog::new(vec![]);
    assert!(catalog.is_empty().await);

    catalog.append(Item::new("Same", 1)).await;
    catalog.append(Item::new("Same", 2)).await;

    assert_eq!(catalog.len().await, 2);
}

#[tokio::test]
async fn test_clones_share_items() {
    let catalog = Catalog::new(vec![]);
    let handle = catalog.clone();

    handle.append(Item::new("Shared", 10)).await;

    assert_eq!(catalog.items().await, vec![Item::new("Shared", 10)]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_are_all_visible() {
    let catalog = Catalog::new(vec![]);

    let tasks: Vec<_> = (0..32)
        .map(|i| {
            let catalog = catalog.clone();
            tokio::spawn(async move {
                catalog.append(Item::new(format!("Item{}", i), i)).await;
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(catalog.len().await, 32);
}
