//! Presentational widgets shared by the page views.

pub mod component_card;
pub mod feature_card;
pub mod footer;
pub mod form;
pub mod hero;
pub mod navbar;
pub mod pricing_tier;
pub mod testimonial;

pub use component_card::ComponentCard;
pub use feature_card::FeatureCard;
pub use footer::Footer;
pub use form::{
    CheckboxField, FormField, PlaceholderForm, TextAreaField, checkbox_value, collect_fields,
};
pub use hero::Hero;
pub use navbar::Navbar;
pub use pricing_tier::PricingTier;
pub use testimonial::TestimonialCard;
