//! Wire format of the remote menu document.
//!
//! Decoding is strict: every field must be present with the right type,
//! otherwise the whole document is rejected.

use serde::{Deserialize, Serialize};

use super::Dish;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuList {
    pub menu: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub category: String,
}

impl MenuList {
    /// Decode a menu document from a raw response body.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// Convert every entry into a cache row, keeping document order.
    pub fn into_dishes(self) -> Vec<Dish> {
        self.menu.into_iter().map(Dish::from).collect()
    }
}

impl From<MenuItem> for Dish {
    fn from(item: MenuItem) -> Self {
        Dish {
            id: item.id,
            title: Some(item.title),
            description: Some(item.description),
            price: Some(item.price),
            image: Some(item.image),
            category: Some(item.category),
        }
    }
}
