// Landing page sections
// Developed with 🍱 by The MealVersity Team (c)2025

/// Brand tagline shown in the nav and console banner
pub const TAGLINE: &str = "The Smarter Choice";

mod about;
mod careers;
mod console_banner;
mod contact;
mod fields;
mod footer;
mod hero;
mod modals;
mod nav;
mod notice;
mod plans;
mod showcase;
mod team;

pub use about::About;
pub use careers::Careers;
pub use console_banner::ConsoleBanner;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use modals::ModalHost;
pub use nav::Nav;
pub use notice::NoticeToast;
pub use plans::PlansSection;
pub use showcase::Showcase;
pub use team::Team;
