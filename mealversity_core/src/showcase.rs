//! Slide-based subscription showcase with a three-step flow and a back button.
//!
//! Only the first slide (individual plans) hosts the flow; the remaining
//! slides are announcements. Switching away from the first slide resets the
//! flow.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub kind: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Announcement shown in place of the flow.
    pub coming_soon: &'static str,
}

pub static SLIDES: [Slide; 5] = [
    Slide {
        kind: "individual",
        title: "Individual Plans",
        subtitle: "Perfect for individuals with flexible options",
        coming_soon: "",
    },
    Slide {
        kind: "family",
        title: "Family Pack",
        subtitle: "Meal plans designed for the whole family",
        coming_soon: "We're creating special family meal plans",
    },
    Slide {
        kind: "corporate",
        title: "Corporate Office Plans",
        subtitle: "Meal solutions for your workplace",
        coming_soon: "Corporate meal plans are in development",
    },
    Slide {
        kind: "migrant",
        title: "Migrant Worker Plans",
        subtitle: "Specialized meals for migrant workers",
        coming_soon: "Specialized migrant worker meals coming soon",
    },
    Slide {
        kind: "festival",
        title: "Festival Specials",
        subtitle: "Celebrate with our special festival meals",
        coming_soon: "Festival special meals will be available soon",
    },
];

pub const FLOW_SLIDE: usize = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowStep {
    #[default]
    Frequency,
    Diet,
    Meal,
}

impl FlowStep {
    pub fn heading(self) -> &'static str {
        match self {
            FlowStep::Frequency => "Individual Plans",
            FlowStep::Diet => "Select Diet Type",
            FlowStep::Meal => "Select Meal Type",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            FlowStep::Frequency => "Perfect for individuals with flexible options",
            FlowStep::Diet => "Choose your dietary preferences",
            FlowStep::Meal => "Choose which meals you want",
        }
    }

    /// Options offered on this step, in display order.
    pub fn options(self) -> &'static [FlowOption] {
        match self {
            FlowStep::Frequency => &FREQUENCY_OPTIONS,
            FlowStep::Diet => &DIET_OPTIONS,
            FlowStep::Meal => &MEAL_OPTIONS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frequency {
    Weekly,
    Monthly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diet {
    PureVeg,
    VegNonVeg,
    NonVeg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Meal {
    Lunch,
    Dinner,
    LunchDinner,
}

/// One button in the flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowOption {
    Frequency(Frequency),
    Diet(Diet),
    Meal(Meal),
}

pub const FREQUENCY_OPTIONS: [FlowOption; 2] = [
    FlowOption::Frequency(Frequency::Weekly),
    FlowOption::Frequency(Frequency::Monthly),
];
pub const DIET_OPTIONS: [FlowOption; 3] = [
    FlowOption::Diet(Diet::PureVeg),
    FlowOption::Diet(Diet::VegNonVeg),
    FlowOption::Diet(Diet::NonVeg),
];
pub const MEAL_OPTIONS: [FlowOption; 3] = [
    FlowOption::Meal(Meal::Lunch),
    FlowOption::Meal(Meal::Dinner),
    FlowOption::Meal(Meal::LunchDinner),
];

impl FlowOption {
    pub fn id(self) -> &'static str {
        match self {
            FlowOption::Frequency(Frequency::Weekly) => "weekly",
            FlowOption::Frequency(Frequency::Monthly) => "monthly",
            FlowOption::Diet(Diet::PureVeg) => "pure-veg",
            FlowOption::Diet(Diet::VegNonVeg) => "veg-nonveg",
            FlowOption::Diet(Diet::NonVeg) => "nonveg",
            FlowOption::Meal(Meal::Lunch) => "lunch",
            FlowOption::Meal(Meal::Dinner) => "dinner",
            FlowOption::Meal(Meal::LunchDinner) => "lunch-dinner",
        }
    }

    /// Button text.
    pub fn button_label(self) -> &'static str {
        match self {
            FlowOption::Frequency(Frequency::Weekly) => "Weekly Plan",
            FlowOption::Frequency(Frequency::Monthly) => "Monthly Plan",
            FlowOption::Diet(Diet::PureVeg) => "Pure Veg",
            FlowOption::Diet(Diet::VegNonVeg) => "Veg + Non Veg",
            FlowOption::Diet(Diet::NonVeg) => "Special Non Veg",
            FlowOption::Meal(Meal::Lunch) => "Lunch",
            FlowOption::Meal(Meal::Dinner) => "Dinner",
            FlowOption::Meal(Meal::LunchDinner) => "Lunch + Dinner",
        }
    }

    /// Wording used in the selection summary.
    pub fn summary_text(self) -> &'static str {
        match self {
            FlowOption::Frequency(Frequency::Weekly) => "Weekly",
            FlowOption::Frequency(Frequency::Monthly) => "Monthly",
            FlowOption::Diet(Diet::PureVeg) => "Pure Vegetarian",
            FlowOption::Diet(Diet::VegNonVeg) => "Vegetarian + Non-Vegetarian",
            FlowOption::Diet(Diet::NonVeg) => "Non-Vegetarian Only",
            FlowOption::Meal(Meal::Lunch) => "Lunch Only",
            FlowOption::Meal(Meal::Dinner) => "Dinner Only",
            FlowOption::Meal(Meal::LunchDinner) => "Lunch + Dinner",
        }
    }

    fn step(self) -> FlowStep {
        match self {
            FlowOption::Frequency(_) => FlowStep::Frequency,
            FlowOption::Diet(_) => FlowStep::Diet,
            FlowOption::Meal(_) => FlowStep::Meal,
        }
    }
}

/// One labelled line of the selection summary, e.g. `Diet: Pure Vegetarian`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: &'static str,
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubscriptionFlow {
    slide: usize,
    step: FlowStep,
    frequency: Option<Frequency>,
    diet: Option<Diet>,
    meal: Option<Meal>,
}

impl SubscriptionFlow {
    pub fn slide(&self) -> usize {
        self.slide
    }

    pub fn step(&self) -> FlowStep {
        self.step
    }

    pub fn is_selected(&self, option: FlowOption) -> bool {
        match option {
            FlowOption::Frequency(f) => self.frequency == Some(f),
            FlowOption::Diet(d) => self.diet == Some(d),
            FlowOption::Meal(m) => self.meal == Some(m),
        }
    }

    /// All three answers are in; the showcase cards are revealed.
    pub fn is_complete(&self) -> bool {
        self.frequency.is_some() && self.diet.is_some() && self.meal.is_some()
    }

    /// Record `option` and move on to the following step.
    ///
    /// Options for a step other than the current one are ignored, as is
    /// anything chosen while an announcement slide is showing.
    pub fn select(&mut self, option: FlowOption) {
        if self.slide != FLOW_SLIDE || option.step() != self.step {
            return;
        }
        match option {
            FlowOption::Frequency(f) => {
                self.frequency = Some(f);
                self.step = FlowStep::Diet;
            }
            FlowOption::Diet(d) => {
                self.diet = Some(d);
                self.step = FlowStep::Meal;
            }
            FlowOption::Meal(m) => self.meal = Some(m),
        }
        tracing::debug!(option = option.id(), complete = self.is_complete(), "showcase option");
    }

    /// Step back once, clearing the answer of the step being left.
    pub fn back(&mut self) {
        match self.step {
            FlowStep::Meal => {
                self.meal = None;
                self.step = FlowStep::Diet;
            }
            FlowStep::Diet => {
                self.diet = None;
                self.step = FlowStep::Frequency;
            }
            FlowStep::Frequency => {}
        }
    }

    /// Show slide `index`, wrapping out-of-range indexes into the slide list.
    pub fn select_slide(&mut self, index: usize) {
        let index = index % SLIDES.len();
        if index != FLOW_SLIDE {
            *self = Self::default();
        }
        self.slide = index;
    }

    pub fn next_slide(&mut self) {
        self.select_slide(self.slide + 1);
    }

    pub fn prev_slide(&mut self) {
        self.select_slide(self.slide + SLIDES.len() - 1);
    }

    pub fn summary(&self) -> Vec<SummaryLine> {
        let line = |label, option: FlowOption| SummaryLine {
            label,
            value: option.summary_text(),
        };
        let mut lines = Vec::with_capacity(3);
        if let Some(f) = self.frequency {
            lines.push(line("Plan", FlowOption::Frequency(f)));
        }
        if let Some(d) = self.diet {
            lines.push(line("Diet", FlowOption::Diet(d)));
        }
        if let Some(m) = self.meal {
            lines.push(line("Meals", FlowOption::Meal(m)));
        }
        lines
    }
}

/// Fixed card revealed once the flow is complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowcaseCard {
    pub title: &'static str,
    pub badge: Option<&'static str>,
    pub features: [&'static str; 4],
}

pub const DELIVERY_NOTE: &str = "Free delivery above ₹299";

pub static SHOWCASE_CARDS: [ShowcaseCard; 3] = [
    ShowcaseCard {
        title: "Daily Meal Plan",
        badge: Some("Most Popular"),
        features: [
            "Balanced breakfast, lunch & dinner",
            "Chef-curated meals",
            "28-day program",
            "Nutritionist approved",
        ],
    },
    ShowcaseCard {
        title: "Custom Plan",
        badge: None,
        features: [
            "Pick meals, schedule deliveries",
            "Swap anytime",
            "Flexible scheduling",
            "Personal preferences",
        ],
    },
    ShowcaseCard {
        title: "Premium Combo",
        badge: None,
        features: [
            "Lunch + Dinner specials",
            "Chef's special recipes",
            "Premium ingredients",
            "Monthly themed menus",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn completed() -> SubscriptionFlow {
        let mut flow = SubscriptionFlow::default();
        flow.select(FlowOption::Frequency(Frequency::Weekly));
        flow.select(FlowOption::Diet(Diet::PureVeg));
        flow.select(FlowOption::Meal(Meal::LunchDinner));
        flow
    }

    #[test]
    fn three_selections_complete_the_flow() {
        let flow = completed();
        assert!(flow.is_complete());
        assert_eq!(flow.step(), FlowStep::Meal);
        let lines: Vec<String> = flow.summary().iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec!["Plan: Weekly", "Diet: Pure Vegetarian", "Meals: Lunch + Dinner"]
        );
    }

    #[test]
    fn back_clears_the_step_being_left() {
        let mut flow = completed();
        flow.back();
        assert_eq!(flow.step(), FlowStep::Diet);
        assert!(!flow.is_complete());
        assert_eq!(flow.summary().len(), 2);

        flow.back();
        assert_eq!(flow.step(), FlowStep::Frequency);
        assert_eq!(
            flow.summary(),
            vec![SummaryLine {
                label: "Plan",
                value: "Weekly"
            }]
        );

        flow.back();
        assert_eq!(flow.step(), FlowStep::Frequency);
        assert!(flow.is_selected(FlowOption::Frequency(Frequency::Weekly)));
    }

    #[test]
    fn options_for_other_steps_are_ignored() {
        let mut flow = SubscriptionFlow::default();
        flow.select(FlowOption::Meal(Meal::Dinner));
        assert_eq!(flow, SubscriptionFlow::default());
    }

    #[test]
    fn leaving_the_first_slide_resets() {
        let mut flow = completed();
        flow.select_slide(2);
        assert_eq!(flow.slide(), 2);
        assert!(flow.summary().is_empty());
        assert_eq!(flow.step(), FlowStep::Frequency);

        flow.select(FlowOption::Frequency(Frequency::Monthly));
        assert!(flow.summary().is_empty());

        flow.prev_slide();
        flow.prev_slide();
        assert_eq!(flow.slide(), FLOW_SLIDE);
        flow.prev_slide();
        assert_eq!(flow.slide(), 4);
    }

    #[test]
    fn option_ids_are_stable() {
        let ids: Vec<_> = [FlowStep::Frequency, FlowStep::Diet, FlowStep::Meal]
            .iter()
            .flat_map(|s| s.options().iter().map(|o| o.id()))
            .collect();
        assert_eq!(
            ids,
            vec![
                "weekly",
                "monthly",
                "pure-veg",
                "veg-nonveg",
                "nonveg",
                "lunch",
                "dinner",
                "lunch-dinner"
            ]
        );
    }

    #[test]
    fn only_the_first_card_carries_a_badge() {
        let badges: Vec<_> = SHOWCASE_CARDS.iter().map(|c| c.badge).collect();
        assert_eq!(badges, vec![Some("Most Popular"), None, None]);
    }
}
