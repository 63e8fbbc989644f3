//! Marketing site pages

mod features;
mod home;
mod legal;
mod pricing;
mod signup;

pub use features::FeaturesPage;
pub use home::HomePage;
pub use legal::{PrivacyPage, TermsPage};
pub use pricing::PricingPage;
pub use signup::SignupPage;
