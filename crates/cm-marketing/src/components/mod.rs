//! Marketing site components

mod accordion;
mod cards;
mod carousel;
mod footer;
mod nav;

pub use accordion::FaqAccordion;
pub use cards::*;
pub use carousel::TestimonialCarousel;
pub use footer::Footer;
pub use nav::MarketingNav;
