//! Shared view components for the portfolio pages.

mod navbar;
mod project_card;
mod skill_card;
mod timeline_item;

pub use navbar::Navbar;
pub use project_card::ProjectCard;
pub use skill_card::SkillCard;
pub use timeline_item::TimelineItem;
