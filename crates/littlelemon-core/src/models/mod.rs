//! Data models for Little Lemon entities.
//!
//! - `Dish`: a menu cache row plus its display helpers
//! - `MenuList`, `MenuItem`: the strict wire format of the remote menu
//! - `UserProfile`, `ProfileField`: the locally stored registration data

pub mod dish;
pub mod menu;
pub mod profile;

pub use dish::{Dish, DishImage};
pub use menu::{MenuItem, MenuList};
pub use profile::{ProfileField, UserProfile};
