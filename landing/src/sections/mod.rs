// Landing page sections
// Developed with ♥ by The PrevaCare Web Team (c)2025

mod about;
mod ai_features;
mod feature_showcase;
mod medical_stats;

pub use about::AboutSection;
pub use ai_features::AiFeatures;
pub use feature_showcase::FeatureShowcase;
pub use medical_stats::MedicalStats;
