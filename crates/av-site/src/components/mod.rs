//! Landing page components

mod cards;
mod decor;
mod nav;
mod section;
mod truth_hover;
mod word_rotator;

pub use cards::ServiceCard;
pub use decor::{BackgroundLines, FocusGlyph, NoiseLayer};
pub use nav::MarketingNav;
pub use section::Section;
pub use truth_hover::TruthHover;
pub use word_rotator::RotatingWord;
