//! Static content tables for the landing page.
//!
//! Every table here is defined once and never mutated. Display order is the
//! order of the arrays. Visual markers are named [`Glyph`]s and style tokens
//! ([`Accent`], [`Gradient`]); how they are drawn is up to the renderer.

use serde::Serialize;

/// Icon selected by name from the page's icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    /// Heart (patient monitoring)
    Heart,
    /// Video camera (telemedicine)
    Video,
    /// Pill capsule (medication)
    Pill,
    /// Bar chart (analytics)
    BarChart,
    /// Phone handset (emergency)
    Phone,
    /// Brain (AI diagnostics)
    Brain,
    /// Database cylinder
    Database,
    /// Lightning bolt
    Zap,
    /// Shield
    Shield,
    /// Processor chip
    Cpu,
    /// Group of people
    Users,
    /// Globe
    Globe,
    /// Award ribbon
    Award,
    /// Padlock
    Lock,
    /// Left chevron (previous)
    ChevronLeft,
    /// Right chevron (next)
    ChevronRight,
}

impl Glyph {
    /// Kebab-case icon name (matches the serialized form).
    pub fn name(&self) -> &'static str {
        match self {
            Glyph::Heart => "heart",
            Glyph::Video => "video",
            Glyph::Pill => "pill",
            Glyph::BarChart => "bar-chart",
            Glyph::Phone => "phone",
            Glyph::Brain => "brain",
            Glyph::Database => "database",
            Glyph::Zap => "zap",
            Glyph::Shield => "shield",
            Glyph::Cpu => "cpu",
            Glyph::Users => "users",
            Glyph::Globe => "globe",
            Glyph::Award => "award",
            Glyph::Lock => "lock",
            Glyph::ChevronLeft => "chevron-left",
            Glyph::ChevronRight => "chevron-right",
        }
    }
}

/// Accent colour token for a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Red
    Red,
    /// Blue
    Blue,
    /// Green
    Green,
    /// Purple
    Purple,
    /// Orange
    Orange,
}

impl Accent {
    /// Lowercase colour name, exposed on the showcase as `data-accent`.
    pub fn as_label(&self) -> &'static str {
        match self {
            Accent::Red => "red",
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
        }
    }

    /// CSS class for foreground (icon/text) colour.
    pub fn text_class(&self) -> &'static str {
        match self {
            Accent::Red => "accent-red",
            Accent::Blue => "accent-blue",
            Accent::Green => "accent-green",
            Accent::Purple => "accent-purple",
            Accent::Orange => "accent-orange",
        }
    }

    /// CSS class for the light background tint behind an accented icon.
    pub fn tint_class(&self) -> &'static str {
        match self {
            Accent::Red => "tint-red",
            Accent::Blue => "tint-blue",
            Accent::Green => "tint-green",
            Accent::Purple => "tint-purple",
            Accent::Orange => "tint-orange",
        }
    }
}

/// Two-stop background gradient token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gradient {
    /// Starting colour name
    pub from: &'static str,
    /// Ending colour name
    pub to: &'static str,
}

impl Gradient {
    /// CSS class, e.g. `gradient-red-pink`.
    pub fn class(&self) -> String {
        format!("gradient-{}-{}", self.from, self.to)
    }
}

/// One showcased capability in the feature carousel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureDescriptor {
    /// 1-based ordinal, unique, defines display order
    pub id: u8,
    /// Short title (list entry, phone mockup)
    pub title: &'static str,
    /// Longer heading (content column)
    pub heading: &'static str,
    /// Paragraph description
    pub description: &'static str,
    /// Visual marker
    pub glyph: Glyph,
    /// Phone-mockup background
    pub gradient: Gradient,
    /// Accent colour
    pub accent: Accent,
}

impl FeatureDescriptor {
    /// First sentence of the description, terminated with a period.
    pub fn summary(&self) -> String {
        let first = self.description.split('.').next().unwrap_or_default();
        format!("{}.", first.trim())
    }

    /// Label shown above the heading, e.g. `Feature No.3`.
    pub fn ordinal_label(&self) -> String {
        format!("Feature No.{}", self.id)
    }
}

/// One tile in the medical statistics grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    /// Icon
    pub glyph: Glyph,
    /// Headline figure, e.g. `95%`
    pub figure: &'static str,
    /// Label under the figure
    pub label: &'static str,
    /// Short explanation
    pub description: &'static str,
}

/// One card in the AI features grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AiFeatureCard {
    /// Icon
    pub glyph: Glyph,
    /// Card title
    pub title: &'static str,
    /// Card body
    pub description: &'static str,
}

/// One entry in the mission section's achievement strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    /// Icon
    pub glyph: Glyph,
    /// Caption
    pub text: &'static str,
}

/// Titled narrative block (mission highlights, closing cards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    /// Block title
    pub title: &'static str,
    /// Block body
    pub body: &'static str,
}

/// Header copy for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionCopy {
    /// Section heading
    pub title: &'static str,
    /// Lead paragraph under the heading
    pub lead: &'static str,
}

/// Showcased features, in display order.
pub const FEATURES: [FeatureDescriptor; 5] = [
    FeatureDescriptor {
        id: 1,
        title: "Patient Monitoring",
        heading: "Real-time Health Tracking",
        description: "Monitor vital signs, medication schedules, and health metrics in real-time. Get instant alerts for critical changes and maintain comprehensive patient records with our advanced monitoring system.",
        glyph: Glyph::Heart,
        gradient: Gradient { from: "red", to: "pink" },
        accent: Accent::Red,
    },
    FeatureDescriptor {
        id: 2,
        title: "Telemedicine",
        heading: "Virtual Consultations",
        description: "Connect with healthcare providers remotely through secure video calls. Schedule appointments, share medical records, and receive professional medical advice from the comfort of your home.",
        glyph: Glyph::Video,
        gradient: Gradient { from: "blue", to: "indigo" },
        accent: Accent::Blue,
    },
    FeatureDescriptor {
        id: 3,
        title: "Medication Management",
        heading: "Smart Pill Reminders",
        description: "Never miss a dose with intelligent medication reminders. Track pill inventory, set custom schedules, and receive notifications for refills and potential drug interactions.",
        glyph: Glyph::Pill,
        gradient: Gradient { from: "green", to: "emerald" },
        accent: Accent::Green,
    },
    FeatureDescriptor {
        id: 4,
        title: "Health Analytics",
        heading: "Comprehensive Reports",
        description: "Visualize your health data with detailed analytics and trends. Generate comprehensive reports for doctor visits and track your progress over time with interactive charts.",
        glyph: Glyph::BarChart,
        gradient: Gradient { from: "purple", to: "violet" },
        accent: Accent::Purple,
    },
    FeatureDescriptor {
        id: 5,
        title: "Emergency Response",
        heading: "24/7 Emergency Support",
        description: "Access emergency services instantly with one-touch SOS features. Share your location and medical information with first responders for faster, more effective emergency care.",
        glyph: Glyph::Phone,
        gradient: Gradient { from: "orange", to: "red" },
        accent: Accent::Orange,
    },
];

/// Medical stats section header.
pub const MEDICAL_STATS_COPY: SectionCopy = SectionCopy {
    title: "AI-Driven Medical Excellence",
    lead: "Our artificial intelligence platform delivers unprecedented accuracy and efficiency in medical diagnosis, treatment planning, and patient care management.",
};

/// Statistic tiles, in display order.
pub const MEDICAL_STATS: [StatCard; 4] = [
    StatCard {
        glyph: Glyph::Brain,
        figure: "95%",
        label: "Diagnostic Accuracy",
        description: "AI-powered medical diagnosis precision rate",
    },
    StatCard {
        glyph: Glyph::Database,
        figure: "10M+",
        label: "Medical Records Analyzed",
        description: "Patient data processed by our AI systems",
    },
    StatCard {
        glyph: Glyph::Zap,
        figure: "3x",
        label: "Faster Diagnosis",
        description: "Speed improvement with AI assistance",
    },
    StatCard {
        glyph: Glyph::Shield,
        figure: "100%",
        label: "HIPAA Compliance",
        description: "Secure, encrypted medical data protection",
    },
];

/// AI features section header.
pub const AI_FEATURES_COPY: SectionCopy = SectionCopy {
    title: "AI-Powered Healthcare Innovation",
    lead: "Harness the power of artificial intelligence to revolutionize patient care, streamline operations, and enhance medical decision-making with cutting-edge technology.",
};

/// AI feature cards, in display order.
pub const AI_FEATURES: [AiFeatureCard; 4] = [
    AiFeatureCard {
        glyph: Glyph::Brain,
        title: "AI-Powered Diagnostics",
        description: "Advanced machine learning algorithms analyze medical data to assist healthcare professionals in making accurate diagnoses faster than ever before.",
    },
    AiFeatureCard {
        glyph: Glyph::Cpu,
        title: "Predictive Analytics",
        description: "Our AI engine processes patient data to predict potential health risks, enabling proactive care and early intervention strategies.",
    },
    AiFeatureCard {
        glyph: Glyph::Zap,
        title: "Intelligent Automation",
        description: "Streamline administrative tasks with AI-driven automation, allowing medical staff to focus more time on direct patient care.",
    },
    AiFeatureCard {
        glyph: Glyph::Shield,
        title: "Smart Security",
        description: "AI-enhanced security protocols protect sensitive medical data while ensuring seamless access for authorized healthcare professionals.",
    },
];

/// Closing card under the AI features grid.
pub const AI_FEATURES_CLOSING: Highlight = Highlight {
    title: "The Future of Healthcare is Here",
    body: "Our AI-driven platform combines decades of medical expertise with cutting-edge technology to deliver personalized, efficient, and accurate healthcare solutions. From predictive analytics to automated diagnostics, we're transforming how healthcare is delivered worldwide.",
};

/// Mission / CTA section header.
pub const MISSION_COPY: SectionCopy = SectionCopy {
    title: "Revolutionizing Healthcare with AI",
    lead: "PrevaCare combines advanced artificial intelligence with medical expertise to create the most comprehensive healthcare management platform available today.",
};

/// Achievement strip, in display order.
pub const ACHIEVEMENTS: [Achievement; 6] = [
    Achievement { glyph: Glyph::Shield, text: "HIPAA Compliant & Secure" },
    Achievement { glyph: Glyph::Zap, text: "Real-time AI Processing" },
    Achievement { glyph: Glyph::Users, text: "24/7 Medical Support" },
    Achievement { glyph: Glyph::Globe, text: "Global Healthcare Network" },
    Achievement { glyph: Glyph::Award, text: "FDA Approved Technology" },
    Achievement { glyph: Glyph::Lock, text: "End-to-End Encryption" },
];

/// Title of the mission narrative block.
pub const MISSION_TITLE: &str = "Our Mission";

/// Mission narrative, one entry per paragraph.
pub const MISSION: [&str; 2] = [
    "We believe that every patient deserves access to the highest quality healthcare, powered by the latest technological innovations. Our AI-driven platform bridges the gap between cutting-edge technology and compassionate medical care.",
    "From predictive diagnostics to personalized treatment plans, PrevaCare empowers healthcare professionals to deliver better outcomes while reducing costs and improving efficiency across the entire healthcare ecosystem.",
];

/// Highlight cards beside the mission narrative.
pub const MISSION_HIGHLIGHTS: [Highlight; 2] = [
    Highlight {
        title: "AI-Powered Insights",
        body: "Our machine learning algorithms analyze millions of medical records to provide actionable insights and predictive analytics for better patient outcomes.",
    },
    Highlight {
        title: "Seamless Integration",
        body: "Designed to work with existing healthcare systems, our platform integrates smoothly with EHRs, medical devices, and hospital management systems.",
    },
];
