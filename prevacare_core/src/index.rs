//! Serialisable snapshot of every content table.
//!
//! Used by the `prevacare-content` binary to publish a machine-readable
//! content manifest next to the landing bundle, and by the browser console
//! commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::content::{
    ACHIEVEMENTS, AI_FEATURES, AI_FEATURES_CLOSING, AI_FEATURES_COPY, Achievement, AiFeatureCard,
    FEATURES, FeatureDescriptor, Highlight, MEDICAL_STATS, MEDICAL_STATS_COPY, MISSION,
    MISSION_COPY, MISSION_HIGHLIGHTS, MISSION_TITLE, SectionCopy, StatCard,
};
use crate::{BRAND, VERSION};

/// Which part of the index to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexSection {
    /// Every table
    #[default]
    All,
    /// Feature showcase descriptors
    Features,
    /// Medical statistics tiles
    Stats,
    /// AI feature cards
    Ai,
    /// Achievement strip
    Achievements,
    /// Mission narrative and highlights
    Mission,
}

/// Mission section content.
#[derive(Debug, Clone, Serialize)]
pub struct MissionIndex {
    /// Section header
    pub copy: SectionCopy,
    /// Narrative block title
    pub title: &'static str,
    /// Narrative paragraphs
    pub paragraphs: Vec<&'static str>,
    /// Highlight cards
    pub highlights: Vec<Highlight>,
}

/// Snapshot of the page content in display order.
#[derive(Debug, Clone, Serialize)]
pub struct ContentIndex {
    /// Brand name
    pub brand: &'static str,
    /// Page version
    pub version: &'static str,
    /// Feature showcase descriptors
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<FeatureDescriptor>,
    /// Medical stats header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_copy: Option<SectionCopy>,
    /// Medical stats tiles
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<StatCard>,
    /// AI features header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_copy: Option<SectionCopy>,
    /// AI feature cards
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ai_features: Vec<AiFeatureCard>,
    /// Closing card under the AI grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_closing: Option<Highlight>,
    /// Achievement strip
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<Achievement>,
    /// Mission narrative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<MissionIndex>,
}

impl ContentIndex {
    /// Full index of every table.
    pub fn build() -> Self {
        Self::section(IndexSection::All)
    }

    /// Index restricted to one section (brand and version are always present).
    pub fn section(section: IndexSection) -> Self {
        let wants = |s: IndexSection| section == IndexSection::All || section == s;

        let mut index = Self {
            brand: BRAND,
            version: VERSION,
            features: Vec::new(),
            stats_copy: None,
            stats: Vec::new(),
            ai_copy: None,
            ai_features: Vec::new(),
            ai_closing: None,
            achievements: Vec::new(),
            mission: None,
        };

        if wants(IndexSection::Features) {
            index.features = FEATURES.to_vec();
        }
        if wants(IndexSection::Stats) {
            index.stats_copy = Some(MEDICAL_STATS_COPY);
            index.stats = MEDICAL_STATS.to_vec();
        }
        if wants(IndexSection::Ai) {
            index.ai_copy = Some(AI_FEATURES_COPY);
            index.ai_features = AI_FEATURES.to_vec();
            index.ai_closing = Some(AI_FEATURES_CLOSING);
        }
        if wants(IndexSection::Achievements) {
            index.achievements = ACHIEVEMENTS.to_vec();
        }
        if wants(IndexSection::Mission) {
            index.mission = Some(MissionIndex {
                copy: MISSION_COPY,
                title: MISSION_TITLE,
                paragraphs: MISSION.to_vec(),
                highlights: MISSION_HIGHLIGHTS.to_vec(),
            });
        }

        index
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text outline, one entry per line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} {}", self.brand, self.version);

        if !self.features.is_empty() {
            let _ = writeln!(out, "\n## Feature Showcase");
            for f in &self.features {
                let _ = writeln!(out, "[{}] {} - {}", f.id, f.title, f.heading);
                let _ = writeln!(out, "    {}", f.summary());
            }
        }

        if let Some(copy) = &self.stats_copy {
            let _ = writeln!(out, "\n## {}", copy.title);
        }
        for s in &self.stats {
            let _ = writeln!(out, "{:>6}  {}", s.figure, s.label);
        }

        if let Some(copy) = &self.ai_copy {
            let _ = writeln!(out, "\n## {}", copy.title);
        }
        for card in &self.ai_features {
            let _ = writeln!(out, "- {}", card.title);
        }
        if let Some(closing) = &self.ai_closing {
            let _ = writeln!(out, "  > {}", closing.title);
        }

        if !self.achievements.is_empty() {
            let _ = writeln!(out, "\n## Achievements");
            for a in &self.achievements {
                let _ = writeln!(out, "- {}", a.text);
            }
        }

        if let Some(mission) = &self.mission {
            let _ = writeln!(out, "\n## {}", mission.copy.title);
            let _ = writeln!(out, "### {}", mission.title);
            for p in &mission.paragraphs {
                let _ = writeln!(out, "{p}");
            }
            for h in &mission.highlights {
                let _ = writeln!(out, "- {}", h.title);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_index_has_every_table() {
        let index = ContentIndex::build();
        assert_eq!(index.features.len(), 5);
        assert_eq!(index.stats.len(), 4);
        assert_eq!(index.ai_features.len(), 4);
        assert_eq!(index.achievements.len(), 6);
        assert!(index.mission.is_some());
    }

    #[test]
    fn section_filter_keeps_only_requested_table() {
        let index = ContentIndex::section(IndexSection::Stats);
        assert!(index.features.is_empty());
        assert_eq!(index.stats.len(), 4);
        assert!(index.ai_features.is_empty());
        assert!(index.mission.is_none());
    }

    #[test]
    fn json_preserves_feature_order() {
        let json = ContentIndex::section(IndexSection::Features)
            .to_json_pretty()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let titles: Vec<&str> = value["features"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["title"].as_str().unwrap())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Patient Monitoring",
                "Telemedicine",
                "Medication Management",
                "Health Analytics",
                "Emergency Response",
            ]
        );
        assert_eq!(value["features"][3]["glyph"], "bar-chart");
        assert_eq!(value["features"][0]["accent"], "red");
        assert!(value.get("stats").is_none());
    }

    #[test]
    fn text_outline_lists_features() {
        let text = ContentIndex::build().to_text();
        assert!(text.starts_with("PrevaCare v"));
        assert!(text.contains("[2] Telemedicine - Virtual Consultations"));
        assert!(text.contains("   95%  Diagnostic Accuracy"));
        assert!(text.contains("- End-to-End Encryption"));
        assert!(text.contains("### Our Mission"));
    }
}
