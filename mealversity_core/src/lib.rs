//! # mealversity-core
//!
//! State machines and static content behind the MealVersity landing page.
//!
//! Nothing in this crate touches the DOM. The Leptos front end in `landing/`
//! keeps these types inside signals and calls their transitions from event
//! handlers, so every rule the page follows can be tested natively.
//!
//! ## Quick Start
//!
//! ```rust
//! use mealversity_core::catalog::{Category, DietType, Duration, MealType};
//! use mealversity_core::wizard::PlanSelector;
//!
//! let mut wizard = PlanSelector::default();
//! wizard.select_category(Category::Individual);
//! wizard.select_duration(Duration::Weekly).unwrap();
//! wizard.select_diet_type(DietType::Veg).unwrap();
//! wizard.select_meal_type(MealType::Lunch).unwrap();
//!
//! let titles: Vec<_> = wizard.visible_plans().iter().map(|p| p.title).collect();
//! assert_eq!(titles, ["Veg Delight"]);
//! ```
//!
//! ## Architecture
//!
//! - [`catalog`] - plan catalog and the wizard's option enums
//! - [`wizard`] - ordered plan selection with the featured fallback
//! - [`modal`], [`form`], [`submit`] - modal forms and pre-registration delivery
//! - [`showcase`] - slide showcase with its own three-step flow
//! - [`carousel`], [`counter`], [`tilt`], [`theme`] - hero widgets
//! - [`content`] - team, careers and the department filter
//! - [`notice`] - toast messages
//! - [`config`] - embedded `site.toml`
//! - [`error`] - error types
//!
//! ---
//! Developed with 🍱 by The MealVersity Team (c)2025

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod content;
pub mod counter;
pub mod error;
pub mod form;
pub mod modal;
pub mod notice;
pub mod showcase;
pub mod submit;
pub mod theme;
pub mod tilt;
pub mod wizard;

pub use config::SiteConfig;
pub use error::{ConfigError, FormError, SubmitError, WizardError};
pub use modal::{ActiveModal, ModalController, ModalKind};
pub use notice::{Notice, NoticeLevel};
pub use wizard::PlanSelector;
