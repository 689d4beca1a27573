//! Static plan catalog and the option vocabularies the wizard selects from.
//!
//! Every option type parses from the string id the page uses for it
//! (`"Individual"`, `"Weekly Plan"`, `"veg"`, `"lunch-dinner"`, ...), so
//! selections coming from markup attributes go through [`std::str::FromStr`]
//! and unknown ids surface as [`WizardError::UnknownOption`].
//!
//! Prices are not stored per selection: a [`Plan`] carries both its weekly and
//! monthly price and the label is picked at render time from the chosen
//! [`Duration`].

use std::fmt;
use std::str::FromStr;

use crate::error::WizardError;

/// Subscription audience. Mandatory before any plan is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Individual,
    FamilyPack,
    CorporateOffice,
    MigrantWorker,
    FestivalSpecials,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Individual,
        Category::FamilyPack,
        Category::CorporateOffice,
        Category::MigrantWorker,
        Category::FestivalSpecials,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Individual => "Individual",
            Category::FamilyPack => "Family Pack",
            Category::CorporateOffice => "Corporate Office",
            Category::MigrantWorker => "Migrant Worker",
            Category::FestivalSpecials => "Festival Specials",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Individual => "👤",
            Category::FamilyPack => "👨‍👩‍👧‍👦",
            Category::CorporateOffice => "🏢",
            Category::MigrantWorker => "👷‍♂️",
            Category::FestivalSpecials => "🎁",
        }
    }
}

/// Billing period. Only affects price and duration labels, never filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Duration {
    #[default]
    Weekly,
    Monthly,
}

impl Duration {
    pub const ALL: [Duration; 2] = [Duration::Weekly, Duration::Monthly];

    pub fn id(self) -> &'static str {
        match self {
            Duration::Weekly => "Weekly Plan",
            Duration::Monthly => "Monthly Plan",
        }
    }

    /// Length of one billing period as shown on plan cards.
    pub fn days_label(self) -> &'static str {
        match self {
            Duration::Weekly => "7 days",
            Duration::Monthly => "28 days",
        }
    }

    /// Suffix appended to fixed prices (`₹1,299/week`).
    pub fn period_suffix(self) -> &'static str {
        match self {
            Duration::Weekly => "/week",
            Duration::Monthly => "/month",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DietType {
    Veg,
    NonVeg,
    VegNonVeg,
}

impl DietType {
    pub const ALL: [DietType; 3] = [DietType::Veg, DietType::NonVeg, DietType::VegNonVeg];

    pub fn id(self) -> &'static str {
        match self {
            DietType::Veg => "veg",
            DietType::NonVeg => "non-veg",
            DietType::VegNonVeg => "veg-non-veg",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DietType::Veg => "Veg",
            DietType::NonVeg => "Non-Veg",
            DietType::VegNonVeg => "Veg + Non-Veg",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DietType::Veg => "🥬",
            DietType::NonVeg => "🍖",
            DietType::VegNonVeg => "🍽️",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MealType {
    Lunch,
    Dinner,
    LunchDinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Lunch, MealType::Dinner, MealType::LunchDinner];

    pub fn id(self) -> &'static str {
        match self {
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::LunchDinner => "lunch-dinner",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::LunchDinner => "Lunch + Dinner",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MealType::Lunch => "🍽️",
            MealType::Dinner => "🌙",
            MealType::LunchDinner => "🍽️🌙",
        }
    }
}

macro_rules! impl_option_id {
    ($ty:ident, $field:literal) => {
        impl FromStr for $ty {
            type Err = WizardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .into_iter()
                    .find(|option| option.id() == s)
                    .ok_or_else(|| WizardError::UnknownOption {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.id())
            }
        }
    };
}

impl_option_id!(Category, "category");
impl_option_id!(Duration, "duration");
impl_option_id!(DietType, "dietType");
impl_option_id!(MealType, "mealType");

/// Marketing label on a plan card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    MostPopular,
    Popular,
    Flexible,
    ComingSoon,
    Budget,
    Limited,
}

impl Tag {
    pub fn label(self) -> &'static str {
        match self {
            Tag::MostPopular => "Most Popular",
            Tag::Popular => "Popular",
            Tag::Flexible => "Flexible",
            Tag::ComingSoon => "Coming Soon",
            Tag::Budget => "Budget",
            Tag::Limited => "Limited",
        }
    }

    /// Tags eligible for the default list shown before diet/meal are chosen.
    pub fn is_featured(self) -> bool {
        matches!(self, Tag::MostPopular | Tag::Popular | Tag::Budget)
    }

    /// Badge background class.
    pub fn badge_class(self) -> &'static str {
        match self {
            Tag::MostPopular => "bg-red-500",
            Tag::Popular => "bg-blue-500",
            Tag::ComingSoon => "bg-orange-500",
            Tag::Limited => "bg-purple-500",
            Tag::Budget => "bg-green-500",
            Tag::Flexible => "bg-indigo-500",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pricing {
    Fixed {
        weekly: &'static str,
        monthly: &'static str,
    },
    Custom,
}

/// One catalog entry. Reference data, never edited at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub pricing: Pricing,
    pub tag: Option<Tag>,
    pub category: Category,
    pub diet: DietType,
    pub meal: MealType,
    pub available: bool,
}

impl Plan {
    pub fn price_label(&self, duration: Duration) -> &'static str {
        match self.pricing {
            Pricing::Fixed { weekly, .. } if duration == Duration::Weekly => weekly,
            Pricing::Fixed { monthly, .. } => monthly,
            Pricing::Custom => "Custom",
        }
    }

    /// `"7 days"` / `"28 days"`, or `"Flexible"` for custom-priced plans.
    pub fn meals_label(&self, duration: Duration) -> &'static str {
        match self.pricing {
            Pricing::Fixed { .. } => duration.days_label(),
            Pricing::Custom => "Flexible",
        }
    }

    pub fn period_suffix(&self, duration: Duration) -> &'static str {
        match self.pricing {
            Pricing::Fixed { .. } => duration.period_suffix(),
            Pricing::Custom => "",
        }
    }

    pub fn matches(
        &self,
        category: Option<Category>,
        diet: Option<DietType>,
        meal: Option<MealType>,
    ) -> bool {
        category.is_none_or(|c| self.category == c)
            && diet.is_none_or(|d| self.diet == d)
            && meal.is_none_or(|m| self.meal == m)
    }
}

const fn fixed(weekly: &'static str, monthly: &'static str) -> Pricing {
    Pricing::Fixed { weekly, monthly }
}

#[allow(clippy::too_many_arguments)]
const fn plan(
    id: u32,
    title: &'static str,
    description: &'static str,
    pricing: Pricing,
    tag: Option<Tag>,
    category: Category,
    diet: DietType,
    meal: MealType,
    available: bool,
) -> Plan {
    Plan {
        id,
        title,
        description,
        pricing,
        tag,
        category,
        diet,
        meal,
        available,
    }
}

use Category::*;
use DietType::*;
use MealType::*;

/// The full plan catalog, in display order.
#[rustfmt::skip]
pub static PLANS: &[Plan] = &[
    plan(1, "Daily Meal Plan", "Balanced breakfast, lunch & dinner — chef-curated.",
        fixed("₹1,749", "₹6,999"), Some(Tag::MostPopular), Individual, Veg, LunchDinner, true),
    plan(2, "Premium Combo", "Lunch + Dinner — chef specials.",
        fixed("₹2,499", "₹9,999"), Some(Tag::Popular), Individual, NonVeg, LunchDinner, true),
    plan(3, "Custom Plan", "Pick meals, schedule deliveries, swap anytime.",
        Pricing::Custom, Some(Tag::Flexible), Individual, VegNonVeg, LunchDinner, true),
    plan(4, "Veg Delight", "Pure vegetarian meals with fresh local ingredients.",
        fixed("₹1,299", "₹4,999"), None, Individual, Veg, Lunch, true),
    plan(5, "Non-Veg Special", "Premium non-vegetarian meals with quality proteins.",
        fixed("₹1,999", "₹7,999"), None, Individual, NonVeg, Dinner, true),
    plan(6, "Mixed Cuisine", "Best of both worlds - veg and non-veg options.",
        fixed("₹1,599", "₹5,999"), None, Individual, VegNonVeg, Lunch, true),
    plan(7, "Evening Feast", "Special dinner plans with gourmet options.",
        fixed("₹1,399", "₹5,499"), None, Individual, Veg, Dinner, true),
    plan(8, "Protein Power", "High-protein non-veg meals for fitness enthusiasts.",
        fixed("₹2,199", "₹8,799"), Some(Tag::ComingSoon), Individual, NonVeg, LunchDinner, false),
    plan(9, "Family Veg Feast", "Complete vegetarian meals for the whole family.",
        fixed("₹4,999", "₹19,999"), Some(Tag::Popular), FamilyPack, Veg, LunchDinner, true),
    plan(10, "Family Mixed", "Variety of veg and non-veg meals for family preferences.",
        fixed("₹5,999", "₹23,999"), None, FamilyPack, VegNonVeg, LunchDinner, true),
    plan(11, "Family Lunch Special", "Daily lunch plans for working families.",
        fixed("₹3,499", "₹13,999"), None, FamilyPack, Veg, Lunch, true),
    plan(12, "Family Dinner Club", "Evening meals for family bonding time.",
        fixed("₹3,999", "₹15,999"), Some(Tag::ComingSoon), FamilyPack, NonVeg, Dinner, false),
    plan(13, "Office Lunch Program", "Bulk lunch delivery for corporate offices.",
        fixed("₹2,999", "₹11,999"), Some(Tag::Popular), CorporateOffice, VegNonVeg, Lunch, true),
    plan(14, "Executive Dining", "Premium meals for corporate executives.",
        fixed("₹4,499", "₹17,999"), None, CorporateOffice, Veg, LunchDinner, true),
    plan(15, "Team Building Meals", "Special group meals for team events.",
        Pricing::Custom, Some(Tag::ComingSoon), CorporateOffice, VegNonVeg, LunchDinner, false),
    plan(16, "Worker Basic", "Affordable nutritious meals for migrant workers.",
        fixed("₹799", "₹2,999"), Some(Tag::Budget), MigrantWorker, Veg, LunchDinner, true),
    plan(17, "Worker Plus", "Enhanced meals with better variety and nutrition.",
        fixed("₹1,199", "₹4,799"), None, MigrantWorker, VegNonVeg, LunchDinner, true),
    plan(18, "Worker Dinner", "Evening meals for hardworking migrants.",
        fixed("₹599", "₹2,399"), Some(Tag::ComingSoon), MigrantWorker, Veg, Dinner, false),
    plan(19, "Diwali Special", "Traditional festive meals for Diwali celebration.",
        fixed("₹2,999", "₹11,999"), Some(Tag::Limited), FestivalSpecials, Veg, LunchDinner, true),
    plan(20, "Eid Feast", "Special non-veg meals for Eid celebrations.",
        fixed("₹3,499", "₹13,999"), Some(Tag::Limited), FestivalSpecials, NonVeg, LunchDinner, true),
    plan(21, "Christmas Special", "Festive meals for Christmas celebrations.",
        fixed("₹2,799", "₹11,199"), Some(Tag::ComingSoon), FestivalSpecials, VegNonVeg, LunchDinner, false),
];

/// Look up a plan by its catalog id.
pub fn plan_by_id(id: u32) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn option_ids_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.id().parse::<Category>().ok(), Some(category));
        }
        assert_eq!("Monthly Plan".parse::<Duration>().ok(), Some(Duration::Monthly));
        assert_eq!("veg-non-veg".parse::<DietType>().ok(), Some(DietType::VegNonVeg));
        assert_eq!("lunch-dinner".parse::<MealType>().ok(), Some(MealType::LunchDinner));
    }

    #[test]
    fn unknown_id_names_the_field() {
        let err = "vegan".parse::<DietType>().unwrap_err();
        assert_eq!(
            err,
            WizardError::UnknownOption {
                field: "dietType",
                value: "vegan".into()
            }
        );
    }

    #[test]
    fn catalog_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = PLANS.iter().map(|p| p.id).collect();
        let expected: Vec<u32> = (1..=21).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn fixed_price_follows_duration() {
        let veg_delight = plan_by_id(4).unwrap();
        assert_eq!(veg_delight.price_label(Duration::Weekly), "₹1,299");
        assert_eq!(veg_delight.price_label(Duration::Monthly), "₹4,999");
        assert_eq!(veg_delight.meals_label(Duration::Weekly), "7 days");
        assert_eq!(veg_delight.meals_label(Duration::Monthly), "28 days");
        assert_eq!(veg_delight.period_suffix(Duration::Monthly), "/month");
    }

    #[test]
    fn custom_pricing_ignores_duration() {
        let custom = plan_by_id(3).unwrap();
        for duration in Duration::ALL {
            assert_eq!(custom.price_label(duration), "Custom");
            assert_eq!(custom.meals_label(duration), "Flexible");
            assert_eq!(custom.period_suffix(duration), "");
        }
    }

    #[test]
    fn featured_tags() {
        assert!(Tag::MostPopular.is_featured());
        assert!(Tag::Popular.is_featured());
        assert!(Tag::Budget.is_featured());
        assert!(!Tag::Limited.is_featured());
        assert!(!Tag::ComingSoon.is_featured());
        assert!(!Tag::Flexible.is_featured());
    }
}
