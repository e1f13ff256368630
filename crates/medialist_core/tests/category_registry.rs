use medialist_core::{
    category_at, category_views, resolve, CatalogCategory, Category, ReferenceSource, Strategy,
    CATEGORIES,
};

#[test]
fn registry_order_and_labels_are_fixed() {
    let labels: Vec<_> = category_views().into_iter().map(|c| c.label).collect();
    assert_eq!(
        labels,
        vec!["popular", "top rated", "Not reviewed", "Not favorited"]
    );
    let indices: Vec<_> = category_views().into_iter().map(|c| c.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(CATEGORIES.len(), 4);
    assert_eq!(category_at(3), Some(Category::NotFavorited));
}

#[test]
fn direct_categories_map_to_catalog_keys() {
    assert_eq!(resolve(0), Some(Strategy::Direct(CatalogCategory::Popular)));
    assert_eq!(resolve(1), Some(Strategy::Direct(CatalogCategory::TopRated)));
    assert_eq!(CatalogCategory::TopRated.as_str(), "top_rated");
}

#[test]
fn exclusion_categories_use_popular_as_base() {
    assert_eq!(
        resolve(2),
        Some(Strategy::ExcludeAgainst {
            base: CatalogCategory::Popular,
            reference: ReferenceSource::Reviews,
        })
    );
    assert_eq!(
        resolve(3),
        Some(Strategy::ExcludeAgainst {
            base: CatalogCategory::Popular,
            reference: ReferenceSource::Favorites,
        })
    );
}

#[test]
fn out_of_range_index_resolves_to_none() {
    assert_eq!(resolve(4), None);
    assert_eq!(resolve(usize::MAX), None);
    assert_eq!(category_at(4), None);
}
