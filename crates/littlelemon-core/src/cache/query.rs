use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Dish;
use crate::utils::{cmp_localized, contains_ignore_case, eq_ignore_case};

/// Category selector value that matches every dish
pub const ALL_CATEGORIES: &str = "all";

/// Category half of a menu filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Build from a selector value; "all" (any case) selects everything.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => eq_ignore_case(dish.category_str(), category),
        }
    }
}

/// Filter parameters of the menu list. Results are always sorted by title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuQuery {
    pub search: String,
    pub category: CategoryFilter,
}

impl MenuQuery {
    pub fn new(search: impl Into<String>, category: &str) -> Self {
        Self {
            search: search.into(),
            category: CategoryFilter::parse(category),
        }
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        contains_ignore_case(dish.title_str(), self.search.trim()) && self.category.matches(dish)
    }

    /// Run the query over a set of rows.
    pub fn apply<'a>(&self, rows: impl IntoIterator<Item = &'a Dish>) -> Vec<Dish> {
        let mut matching: Vec<Dish> = rows
            .into_iter()
            .filter(|dish| self.matches(dish))
            .cloned()
            .collect();
        matching.sort_by(by_title);
        matching
    }
}

fn by_title(a: &Dish, b: &Dish) -> Ordering {
    cmp_localized(a.title_str(), b.title_str())
}
