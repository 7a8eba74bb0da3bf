//! Little Lemon core - the non-UI half of the Little Lemon ordering app.
//!
//! - `store`: durable key/value store and the registration/login session
//! - `cache`: the local menu table and its filter/sort query
//! - `sync`: background refresh of the menu from the remote document
//! - `app`: headless controller a GUI or mobile shell drives
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use littlelemon_core::{App, Screen};
//!
//! let _guard = littlelemon_core::logging::init_tracing(None);
//! let mut app = App::open()?;
//! if app.start_screen() == Screen::Onboarding {
//!     app.register("Tilly", "Lemon", "tilly@example.com")?;
//! }
//! app.on_menu_appear();
//! app.wait_for_sync().await;
//! app.select_category("starters");
//! for dish in app.visible_dishes() {
//!     println!("{} {}", dish.list_title(), dish.list_price());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod logging;
pub mod models;
pub mod store;
pub mod sync;
pub mod utils;

pub use app::{App, Screen, MENU_CATEGORIES};
pub use cache::{CategoryFilter, MenuCache, MenuQuery};
pub use config::{ClearPolicy, Config};
pub use models::{Dish, DishImage, ProfileField, UserProfile};
pub use store::{LocalStore, RegistrationError, Session};
pub use sync::{MenuSync, SyncOutcome};
