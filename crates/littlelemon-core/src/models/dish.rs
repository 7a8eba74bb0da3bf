use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::utils::capitalize_words;

/// Title shown on the detail view when a dish has none.
const UNNAMED_DISH: &str = "Unnamed Dish";

/// A row of the menu cache.
///
/// Rows are created from the remote menu and never edited in place. The
/// text fields are optional because a stored row may predate a field; the
/// display helpers supply the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub struct Dish {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Decimal-looking text, never parsed.
    pub price: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
}

/// What to draw in the image slot of a dish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DishImage {
    Remote(Url),
    Placeholder,
}

impl Dish {
    pub fn title_str(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn category_str(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Title for list rows (blank when missing).
    pub fn list_title(&self) -> &str {
        self.title_str()
    }

    /// Title for the detail view.
    pub fn detail_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => UNNAMED_DISH,
        }
    }

    /// Price for list rows, e.g. "$12.99" or "$" when missing.
    pub fn list_price(&self) -> String {
        format!("${}", self.price.as_deref().unwrap_or(""))
    }

    /// Price for the detail view, "$0" when missing.
    pub fn detail_price(&self) -> String {
        match self.price.as_deref() {
            Some(p) if !p.is_empty() => format!("${}", p),
            _ => "$0".to_string(),
        }
    }

    pub fn category_display(&self) -> Option<String> {
        self.category.as_deref().map(capitalize_words)
    }

    /// Resolve the image slot. Anything that is not an absolute URL falls
    /// back to the placeholder.
    pub fn image_source(&self) -> DishImage {
        self.image
            .as_deref()
            .and_then(|s| Url::parse(s).ok())
            .map(DishImage::Remote)
            .unwrap_or(DishImage::Placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish() -> Dish {
        Dish {
            id: 7,
            title: Some("Lemon Dessert".to_string()),
            description: Some("Tart".to_string()),
            price: Some("4.50".to_string()),
            image: Some("https://example.com/lemon.jpg".to_string()),
            category: Some("desserts".to_string()),
        }
    }

    #[test]
    fn test_display_helpers() {
        let d = dish();
        assert_eq!(d.list_title(), "Lemon Dessert");
        assert_eq!(d.detail_title(), "Lemon Dessert");
        assert_eq!(d.list_price(), "$4.50");
        assert_eq!(d.detail_price(), "$4.50");
        assert_eq!(d.category_display().as_deref(), Some("Desserts"));
    }

    #[test]
    fn test_display_defaults() {
        let d = Dish {
            id: 1,
            title: None,
            description: None,
            price: None,
            image: None,
            category: None,
        };
        assert_eq!(d.list_title(), "");
        assert_eq!(d.detail_title(), "Unnamed Dish");
        assert_eq!(d.list_price(), "$");
        assert_eq!(d.detail_price(), "$0");
        assert_eq!(d.category_display(), None);
        assert_eq!(d.image_source(), DishImage::Placeholder);
    }

    #[test]
    fn test_image_source() {
        let d = dish();
        match d.image_source() {
            DishImage::Remote(url) => assert_eq!(url.host_str(), Some("example.com")),
            DishImage::Placeholder => panic!("expected a remote image"),
        }

        let broken = Dish {
            image: Some("not a url".to_string()),
            ..dish()
        };
        assert_eq!(broken.image_source(), DishImage::Placeholder);
    }
}
