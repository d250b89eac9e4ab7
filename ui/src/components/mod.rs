//! Reusable page building blocks.

// Localized application navbar with the language toggle.
mod app_navbar;
pub use app_navbar::AppNavbar;

mod comparison_chart;
pub use comparison_chart::{ComparisonChart, Method, PerformanceRow, CLINICAL_PERFORMANCE};

mod feature_card;
pub use feature_card::FeatureCard;

mod footer;
pub use footer::Footer;

mod section_heading;
pub use section_heading::SectionHeading;

mod workflow_step;
pub use workflow_step::WorkflowStep;
