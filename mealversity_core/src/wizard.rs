//! Plan-selection wizard: category → duration → diet → meal type.
//!
//! Fields fill strictly in order and choosing an earlier field clears every
//! later one. The wizard only moves forward; [`PlanSelector::reset`] is the
//! one way back to [`WizardStep::Idle`].
//!
//! ```rust
//! use mealversity_core::catalog::{Category, DietType, Duration, MealType};
//! use mealversity_core::wizard::PlanSelector;
//!
//! let mut selector = PlanSelector::default();
//! selector.select_category(Category::Individual);
//! selector.select_duration(Duration::Weekly)?;
//! selector.select_diet_type(DietType::Veg)?;
//! selector.select_meal_type(MealType::Lunch)?;
//!
//! let titles: Vec<_> = selector.visible_plans().iter().map(|p| p.title).collect();
//! assert!(titles.contains(&"Veg Delight"));
//! # Ok::<(), mealversity_core::error::WizardError>(())
//! ```

use crate::catalog::{Category, DietType, Duration, MealType, PLANS, Plan};
use crate::error::WizardError;

/// Cards shown at most, whichever branch produced them.
pub const MAX_VISIBLE_PLANS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    Idle,
    CategoryChosen,
    DurationChosen,
    DietChosen,
    MealChosen,
}

/// Current wizard selection. `Default` is the initial, empty state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanSelector {
    category: Option<Category>,
    duration: Option<Duration>,
    diet: Option<DietType>,
    meal: Option<MealType>,
}

impl PlanSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn diet_type(&self) -> Option<DietType> {
        self.diet
    }

    pub fn meal_type(&self) -> Option<MealType> {
        self.meal
    }

    /// Duration used for price labels; weekly until one is chosen.
    pub fn pricing_duration(&self) -> Duration {
        self.duration.unwrap_or_default()
    }

    pub fn step(&self) -> WizardStep {
        match (self.category, self.duration, self.diet, self.meal) {
            (None, ..) => WizardStep::Idle,
            (Some(_), None, ..) => WizardStep::CategoryChosen,
            (Some(_), Some(_), None, _) => WizardStep::DurationChosen,
            (Some(_), Some(_), Some(_), None) => WizardStep::DietChosen,
            (Some(_), Some(_), Some(_), Some(_)) => WizardStep::MealChosen,
        }
    }

    /// Number of filled fields, for the progress dots.
    pub fn filled(&self) -> [bool; 4] {
        [
            self.category.is_some(),
            self.duration.is_some(),
            self.diet.is_some(),
            self.meal.is_some(),
        ]
    }

    /// Choosing a category keeps the duration but drops diet and meal.
    pub fn select_category(&mut self, category: Category) {
        tracing::debug!(category = %category, "plan category selected");
        self.category = Some(category);
        self.diet = None;
        self.meal = None;
    }

    pub fn select_duration(&mut self, duration: Duration) -> Result<(), WizardError> {
        if self.category.is_none() {
            return Err(WizardError::OutOfOrder {
                attempted: "duration",
                requires: "category",
            });
        }
        tracing::debug!(duration = %duration, "plan duration selected");
        self.duration = Some(duration);
        self.diet = None;
        self.meal = None;
        Ok(())
    }

    pub fn select_diet_type(&mut self, diet: DietType) -> Result<(), WizardError> {
        let requires = match (self.category, self.duration) {
            (None, _) => Some("category"),
            (Some(_), None) => Some("duration"),
            _ => None,
        };
        if let Some(requires) = requires {
            return Err(WizardError::OutOfOrder {
                attempted: "dietType",
                requires,
            });
        }
        tracing::debug!(diet = %diet, "diet type selected");
        self.diet = Some(diet);
        self.meal = None;
        Ok(())
    }

    pub fn select_meal_type(&mut self, meal: MealType) -> Result<(), WizardError> {
        if self.diet.is_none() {
            return Err(WizardError::OutOfOrder {
                attempted: "mealType",
                requires: "dietType",
            });
        }
        tracing::debug!(meal = %meal, "meal type selected");
        self.meal = Some(meal);
        Ok(())
    }

    pub fn select_category_id(&mut self, id: &str) -> Result<(), WizardError> {
        self.select_category(id.parse()?);
        Ok(())
    }

    pub fn select_duration_id(&mut self, id: &str) -> Result<(), WizardError> {
        self.select_duration(id.parse()?)
    }

    pub fn select_diet_type_id(&mut self, id: &str) -> Result<(), WizardError> {
        self.select_diet_type(id.parse()?)
    }

    pub fn select_meal_type_id(&mut self, id: &str) -> Result<(), WizardError> {
        self.select_meal_type(id.parse()?)
    }

    pub fn reset(&mut self) {
        tracing::debug!("plan selection reset");
        *self = Self::default();
    }

    /// Plans for the current selection, drawn from [`PLANS`].
    pub fn visible_plans(&self) -> Vec<&'static Plan> {
        visible_plans(PLANS, self)
    }
}

/// Cards to display for `selection`.
///
/// With no category nothing is shown. With a category but neither diet nor
/// meal chosen, the featured plans of that category are shown. Otherwise
/// every chosen field must match. Both branches keep catalog order and stop
/// at [`MAX_VISIBLE_PLANS`].
pub fn visible_plans<'a>(catalog: &'a [Plan], selection: &PlanSelector) -> Vec<&'a Plan> {
    let Some(category) = selection.category else {
        return Vec::new();
    };

    if selection.diet.is_none() && selection.meal.is_none() {
        return catalog
            .iter()
            .filter(|plan| plan.category == category && plan.tag.is_some_and(|t| t.is_featured()))
            .take(MAX_VISIBLE_PLANS)
            .collect();
    }

    catalog
        .iter()
        .filter(|plan| plan.matches(Some(category), selection.diet, selection.meal))
        .take(MAX_VISIBLE_PLANS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Tag;
    use pretty_assertions::assert_eq;

    fn titles(plans: &[&Plan]) -> Vec<&'static str> {
        plans.iter().map(|p| p.title).collect()
    }

    fn full(c: Category, d: Duration, diet: DietType, meal: MealType) -> PlanSelector {
        let mut s = PlanSelector::new();
        s.select_category(c);
        s.select_duration(d).unwrap();
        s.select_diet_type(diet).unwrap();
        s.select_meal_type(meal).unwrap();
        s
    }

    #[test]
    fn starts_idle_with_nothing_visible() {
        let s = PlanSelector::new();
        assert_eq!(s.step(), WizardStep::Idle);
        assert!(s.visible_plans().is_empty());
    }

    #[test]
    fn steps_advance_forward() {
        let mut s = PlanSelector::new();
        s.select_category(Category::FamilyPack);
        assert_eq!(s.step(), WizardStep::CategoryChosen);
        s.select_duration(Duration::Monthly).unwrap();
        assert_eq!(s.step(), WizardStep::DurationChosen);
        s.select_diet_type(DietType::Veg).unwrap();
        assert_eq!(s.step(), WizardStep::DietChosen);
        s.select_meal_type(MealType::Lunch).unwrap();
        assert_eq!(s.step(), WizardStep::MealChosen);
        assert_eq!(s.filled(), [true; 4]);
    }

    #[test]
    fn out_of_order_selections_are_rejected() {
        let mut s = PlanSelector::new();
        assert_eq!(
            s.select_duration(Duration::Weekly),
            Err(WizardError::OutOfOrder {
                attempted: "duration",
                requires: "category"
            })
        );
        s.select_category(Category::Individual);
        assert_eq!(
            s.select_diet_type(DietType::Veg),
            Err(WizardError::OutOfOrder {
                attempted: "dietType",
                requires: "duration"
            })
        );
        s.select_duration(Duration::Weekly).unwrap();
        assert!(s.select_meal_type(MealType::Lunch).is_err());
        assert_eq!(s.step(), WizardStep::DurationChosen);
    }

    #[test]
    fn earlier_choice_clears_later_fields() {
        let mut s = full(
            Category::Individual,
            Duration::Weekly,
            DietType::Veg,
            MealType::Lunch,
        );
        s.select_diet_type(DietType::NonVeg).unwrap();
        assert_eq!(s.meal_type(), None);

        let mut s = full(
            Category::Individual,
            Duration::Weekly,
            DietType::Veg,
            MealType::Lunch,
        );
        s.select_duration(Duration::Monthly).unwrap();
        assert_eq!((s.diet_type(), s.meal_type()), (None, None));

        let mut s = full(
            Category::Individual,
            Duration::Weekly,
            DietType::Veg,
            MealType::Lunch,
        );
        s.select_category(Category::MigrantWorker);
        assert_eq!(s.duration(), Some(Duration::Weekly));
        assert_eq!((s.diet_type(), s.meal_type()), (None, None));
    }

    #[test]
    fn reset_restores_initial_state_from_every_sequence() {
        for c in Category::ALL {
            for d in Duration::ALL {
                for diet in DietType::ALL {
                    for meal in MealType::ALL {
                        let mut s = full(c, d, diet, meal);
                        s.reset();
                        assert_eq!(s, PlanSelector::default());
                        assert_eq!(s.step(), WizardStep::Idle);
                    }
                }
            }
        }
    }

    #[test]
    fn category_only_shows_featured_plans() {
        for c in Category::ALL {
            let mut s = PlanSelector::new();
            s.select_category(c);
            let plans = s.visible_plans();
            assert!(plans.len() <= MAX_VISIBLE_PLANS);
            for plan in &plans {
                assert_eq!(plan.category, c);
                assert!(plan.tag.is_some_and(Tag::is_featured), "{}", plan.title);
            }
        }
    }

    #[test]
    fn full_filter_matches_every_field_in_catalog_order() {
        for c in Category::ALL {
            for d in Duration::ALL {
                for diet in DietType::ALL {
                    for meal in MealType::ALL {
                        let s = full(c, d, diet, meal);
                        let plans = s.visible_plans();
                        assert!(plans.len() <= MAX_VISIBLE_PLANS);
                        assert!(plans
                            .iter()
                            .all(|p| p.category == c && p.diet == diet && p.meal == meal));
                        assert!(plans.windows(2).all(|w| w[0].id < w[1].id));
                    }
                }
            }
        }
    }

    #[test]
    fn diet_without_meal_filters_by_diet() {
        let mut s = PlanSelector::new();
        s.select_category(Category::Individual);
        s.select_duration(Duration::Weekly).unwrap();
        s.select_diet_type(DietType::Veg).unwrap();
        assert_eq!(
            titles(&s.visible_plans()),
            vec!["Daily Meal Plan", "Veg Delight", "Evening Feast"]
        );
    }

    #[test]
    fn weekly_veg_lunch_shows_veg_delight() {
        let s = full(
            Category::Individual,
            Duration::Weekly,
            DietType::Veg,
            MealType::Lunch,
        );
        let plans = s.visible_plans();
        let veg_delight = plans
            .iter()
            .find(|p| p.title == "Veg Delight")
            .expect("Veg Delight visible");
        assert_eq!(veg_delight.price_label(s.pricing_duration()), "₹1,299");
        assert_eq!(veg_delight.meals_label(s.pricing_duration()), "7 days");
    }

    #[test]
    fn migrant_worker_default_includes_worker_basic() {
        let mut s = PlanSelector::new();
        s.select_category_id("Migrant Worker").unwrap();
        let plans = s.visible_plans();
        assert_eq!(titles(&plans), vec!["Worker Basic"]);
        assert_eq!(plans[0].tag, Some(Tag::Budget));
    }

    #[test]
    fn individual_default_is_capped_in_catalog_order() {
        let mut s = PlanSelector::new();
        s.select_category(Category::Individual);
        assert_eq!(
            titles(&s.visible_plans()),
            vec!["Daily Meal Plan", "Premium Combo"]
        );
    }

    #[test]
    fn no_match_yields_empty_list_not_fallback() {
        let s = full(
            Category::FamilyPack,
            Duration::Weekly,
            DietType::NonVeg,
            MealType::Lunch,
        );
        assert!(s.visible_plans().is_empty());
    }

    #[test]
    fn string_ids_drive_the_same_transitions() {
        let mut s = PlanSelector::new();
        s.select_category_id("Individual").unwrap();
        s.select_duration_id("Weekly Plan").unwrap();
        s.select_diet_type_id("veg").unwrap();
        s.select_meal_type_id("lunch").unwrap();
        assert_eq!(
            s,
            full(
                Category::Individual,
                Duration::Weekly,
                DietType::Veg,
                MealType::Lunch
            )
        );
        assert!(s.select_meal_type_id("brunch").is_err());
        assert_eq!(s.meal_type(), Some(MealType::Lunch));
    }
}
