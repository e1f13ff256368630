//! Fixed registry of selectable categories and how each one is fetched.

/// Listing keys understood by the catalog service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogCategory {
    Popular,
    TopRated,
}

impl CatalogCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogCategory::Popular => "popular",
            CatalogCategory::TopRated => "top_rated",
        }
    }
}

/// User lists that can be subtracted from a catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceSource {
    Favorites,
    Reviews,
}

impl ReferenceSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceSource::Favorites => "favorites",
            ReferenceSource::Reviews => "reviews",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One catalog page for the given listing key.
    Direct(CatalogCategory),
    /// One page of `base`, minus every title found in the full `reference` list.
    ExcludeAgainst {
        base: CatalogCategory,
        reference: ReferenceSource,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Popular,
    TopRated,
    NotReviewed,
    NotFavorited,
}

/// Registry order is the order of the category buttons.
pub const CATEGORIES: [Category; 4] = [
    Category::Popular,
    Category::TopRated,
    Category::NotReviewed,
    Category::NotFavorited,
];

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Popular => "popular",
            Category::TopRated => "top rated",
            Category::NotReviewed => "Not reviewed",
            Category::NotFavorited => "Not favorited",
        }
    }

    pub fn strategy(self) -> Strategy {
        match self {
            Category::Popular => Strategy::Direct(CatalogCategory::Popular),
            Category::TopRated => Strategy::Direct(CatalogCategory::TopRated),
            Category::NotReviewed => Strategy::ExcludeAgainst {
                base: CatalogCategory::Popular,
                reference: ReferenceSource::Reviews,
            },
            Category::NotFavorited => Strategy::ExcludeAgainst {
                base: CatalogCategory::Popular,
                reference: ReferenceSource::Favorites,
            },
        }
    }
}

/// Category button as exposed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub label: &'static str,
    pub index: usize,
}

pub fn category_at(index: usize) -> Option<Category> {
    CATEGORIES.get(index).copied()
}

/// Bounds-checked strategy lookup by button index.
pub fn resolve(index: usize) -> Option<Strategy> {
    category_at(index).map(Category::strategy)
}

pub fn category_views() -> Vec<CategoryView> {
    CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, category)| CategoryView {
            label: category.label(),
            index,
        })
        .collect()
}
