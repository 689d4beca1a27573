//! Constant page content: team, open positions and the department filter.

/// Sentinel filter value that shows everything.
pub const ALL: &str = "All";

pub const DEPARTMENTS: [&str; 5] = [
    ALL,
    "Creative Team",
    "Digital Marketing Team",
    "Content & Copy",
    "Analytics",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
}

impl TeamMember {
    /// Initials shown in the avatar bubble.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect()
    }
}

pub static TEAM: &[TeamMember] = &[
    TeamMember { id: 1, name: "Tarik Anowar", role: "CEO" },
    TeamMember { id: 2, name: "Afreen Sarkar", role: "CMO" },
    TeamMember { id: 3, name: "Muklesur Rahaman", role: "CFO" },
    TeamMember { id: 4, name: "Asif Ahmed", role: "Head Chef" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JobPosting {
    pub id: u32,
    pub title: &'static str,
    pub department: &'static str,
    pub employment: &'static str,
    pub location: &'static str,
    pub experience: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    pub icon: &'static str,
    /// Gradient stops for the apply button.
    pub color_theme: &'static str,
}

impl JobPosting {
    /// First three requirements and how many were left out.
    pub fn requirement_preview(&self) -> (&'static [&'static str], usize) {
        let shown = self.requirements.len().min(3);
        (&self.requirements[..shown], self.requirements.len() - shown)
    }
}

pub static CAREERS: &[JobPosting] = &[
    JobPosting {
        id: 1,
        title: "Graphic Designer",
        department: "Creative Team",
        employment: "Full-time",
        location: "Remote/Hybrid",
        experience: "2-4 years",
        description: "Create compelling visual designs for marketing materials, social media, and brand assets.",
        requirements: &["Adobe Creative Suite", "UI/UX Design", "Brand Design", "Print & Digital Media"],
        icon: "🎨",
        color_theme: "from-pink-500 to-rose-500",
    },
    JobPosting {
        id: 2,
        title: "Video Editor",
        department: "Creative Team",
        employment: "Full-time",
        location: "Remote/Hybrid",
        experience: "2-5 years",
        description: "Edit and produce high-quality video content for marketing campaigns and social media.",
        requirements: &["Adobe Premiere Pro", "After Effects", "Video Production", "Motion Graphics"],
        icon: "🎬",
        color_theme: "from-purple-500 to-indigo-500",
    },
    JobPosting {
        id: 3,
        title: "Motion Graphics / Animation Creator",
        department: "Creative Team",
        employment: "Full-time",
        location: "Remote/Hybrid",
        experience: "3-6 years",
        description: "Create engaging motion graphics and animations for digital marketing and brand storytelling.",
        requirements: &["After Effects", "Cinema 4D/Blender", "Motion Design", "3D Animation"],
        icon: "✨",
        color_theme: "from-cyan-500 to-blue-500",
    },
    JobPosting {
        id: 4,
        title: "Photographer / Videographer",
        department: "Creative Team",
        employment: "Full-time",
        location: "On-site",
        experience: "2-4 years",
        description: "Capture stunning food photography and videography for marketing and social media content.",
        requirements: &["Food Photography", "Video Production", "Lighting Techniques", "Post-processing"],
        icon: "📸",
        color_theme: "from-orange-500 to-red-500",
    },
    JobPosting {
        id: 5,
        title: "Social Media Manager",
        department: "Digital Marketing Team",
        employment: "Full-time",
        location: "Remote/Hybrid",
        experience: "2-4 years",
        description: "Manage and grow our social media presence across all platforms with engaging content.",
        requirements: &["Social Media Strategy", "Content Creation", "Community Management", "Analytics"],
        icon: "📱",
        color_theme: "from-green-500 to-emerald-500",
    },
    JobPosting {
        id: 6,
        title: "SEO Specialist",
        department: "Digital Marketing Team",
        employment: "Full-time",
        location: "Remote",
        experience: "2-5 years",
        description: "Optimize our website and content for search engines to drive organic traffic.",
        requirements: &["SEO Strategy", "Keyword Research", "Technical SEO", "Content Optimization"],
        icon: "🔍",
        color_theme: "from-yellow-500 to-orange-500",
    },
    JobPosting {
        id: 7,
        title: "Ads Specialist",
        department: "Digital Marketing Team",
        employment: "Full-time",
        location: "Remote/Hybrid",
        experience: "2-4 years",
        description: "Create and manage paid advertising campaigns across Google, Facebook, and other platforms.",
        requirements: &["Google Ads", "Facebook Ads", "Campaign Management", "ROI Optimization"],
        icon: "📊",
        color_theme: "from-blue-500 to-purple-500",
    },
    JobPosting {
        id: 8,
        title: "Content Writer",
        department: "Content & Copy",
        employment: "Full-time",
        location: "Remote",
        experience: "1-3 years",
        description: "Create engaging written content for blogs, social media, and marketing materials.",
        requirements: &["Content Writing", "SEO Writing", "Food Industry Knowledge", "Creative Writing"],
        icon: "✍️",
        color_theme: "from-indigo-500 to-purple-500",
    },
    JobPosting {
        id: 9,
        title: "Copywriter",
        department: "Content & Copy",
        employment: "Full-time",
        location: "Remote/Hybrid",
        experience: "2-4 years",
        description: "Write compelling copy for advertisements, email campaigns, and marketing materials.",
        requirements: &["Copywriting", "Brand Voice", "A/B Testing", "Conversion Optimization"],
        icon: "📝",
        color_theme: "from-teal-500 to-cyan-500",
    },
    JobPosting {
        id: 10,
        title: "Data Analyst / Performance Tracker",
        department: "Analytics",
        employment: "Full-time",
        location: "Remote/Hybrid",
        experience: "2-5 years",
        description: "Analyze data to track performance, identify trends, and provide actionable insights.",
        requirements: &["Data Analysis", "Google Analytics", "Excel/SQL", "Reporting"],
        icon: "📈",
        color_theme: "from-emerald-500 to-green-500",
    },
];

/// Single-value exact-match filter over constant content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContentFilter {
    #[default]
    All,
    Only(String),
}

impl ContentFilter {
    /// `"All"` clears the filter; anything else narrows to exact matches.
    pub fn select_filter(&mut self, value: &str) {
        *self = if value == ALL {
            ContentFilter::All
        } else {
            ContentFilter::Only(value.to_string())
        };
    }

    /// The selected value as displayed on the filter chips.
    pub fn selected(&self) -> &str {
        match self {
            ContentFilter::All => ALL,
            ContentFilter::Only(value) => value,
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        match self {
            ContentFilter::All => true,
            ContentFilter::Only(selected) => selected == value,
        }
    }

    pub fn apply<'a, T>(&self, items: &'a [T], key: impl Fn(&T) -> &str) -> Vec<&'a T> {
        items.iter().filter(|item| self.accepts(key(item))).collect()
    }
}

pub fn job_by_id(id: u32) -> Option<&'static JobPosting> {
    CAREERS.iter().find(|job| job.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_shows_every_posting() {
        let filter = ContentFilter::default();
        assert_eq!(filter.apply(CAREERS, |j| j.department).len(), CAREERS.len());
        assert_eq!(filter.selected(), "All");
    }

    #[test]
    fn department_filter_is_exact_and_ordered() {
        let mut filter = ContentFilter::default();
        filter.select_filter("Content & Copy");
        let titles: Vec<_> = filter
            .apply(CAREERS, |j| j.department)
            .iter()
            .map(|j| j.title)
            .collect();
        assert_eq!(titles, vec!["Content Writer", "Copywriter"]);

        filter.select_filter("content & copy");
        assert!(filter.apply(CAREERS, |j| j.department).is_empty());

        filter.select_filter(ALL);
        assert_eq!(filter, ContentFilter::All);
    }

    #[test]
    fn every_department_chip_has_postings() {
        for dept in DEPARTMENTS.iter().skip(1) {
            let mut filter = ContentFilter::default();
            filter.select_filter(dept);
            assert!(!filter.apply(CAREERS, |j| j.department).is_empty(), "{dept}");
        }
    }

    #[test]
    fn requirement_preview_counts_the_rest() {
        let job = job_by_id(1).unwrap();
        let (shown, rest) = job.requirement_preview();
        assert_eq!(shown, &["Adobe Creative Suite", "UI/UX Design", "Brand Design"]);
        assert_eq!(rest, 1);
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(TEAM[2].initials(), "MR");
        assert_eq!(TEAM[3].initials(), "AA");
    }
}
