pub mod card;
pub mod navigation;
pub mod palette;
pub mod scroll;
pub mod testimonials;
pub mod toggles;
