//! SVG icon components (Lucide-style outline glyphs).
//!
//! Icons are addressed by [`Glyph`] and drawn as 24×24 stroke paths that
//! inherit `currentColor`, so the surrounding accent class decides the colour.

use leptos::prelude::*;
use prevacare_core::content::Glyph;

/// Renders an inline SVG icon for a glyph.
///
/// # Props
///
/// * `glyph` - icon to draw
/// * `size` - icon size in pixels (default: "24")
/// * `class` - additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::Heart size="32" class="accent-red" /> }
/// ```
#[component]
pub fn Icon(
    /// Glyph to render
    glyph: Glyph,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let class = if class.is_empty() {
        "icon".to_string()
    } else {
        format!("icon {class}")
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            data-glyph=glyph.name()
            aria-hidden="true"
        >
            <path d=glyph_path(glyph)></path>
        </svg>
    }
}

/// Stroke path data (the `d` attribute) for a glyph.
pub fn glyph_path(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Heart => ICON_HEART,
        Glyph::Video => ICON_VIDEO,
        Glyph::Pill => ICON_PILL,
        Glyph::BarChart => ICON_BAR_CHART,
        Glyph::Phone => ICON_PHONE,
        Glyph::Brain => ICON_BRAIN,
        Glyph::Database => ICON_DATABASE,
        Glyph::Zap => ICON_ZAP,
        Glyph::Shield => ICON_SHIELD,
        Glyph::Cpu => ICON_CPU,
        Glyph::Users => ICON_USERS,
        Glyph::Globe => ICON_GLOBE,
        Glyph::Award => ICON_AWARD,
        Glyph::Lock => ICON_LOCK,
        Glyph::ChevronLeft => ICON_CHEVRON_LEFT,
        Glyph::ChevronRight => ICON_CHEVRON_RIGHT,
    }
}

// =============================================================================
// Outline icons, 24×24 viewBox, 2px stroke
// =============================================================================

/// Heart (patient monitoring)
pub const ICON_HEART: &str = "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z";

/// Video camera (telemedicine)
pub const ICON_VIDEO: &str = "m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5M4 6h10a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2Z";

/// Pill capsule
pub const ICON_PILL: &str = "m10.5 20.5 10-10a4.95 4.95 0 1 0-7-7l-10 10a4.95 4.95 0 1 0 7 7ZM8.5 8.5l7 7";

/// Bar chart with axis
pub const ICON_BAR_CHART: &str = "M3 3v18h18M18 17V9M13 17V5M8 17v-3";

/// Phone handset
pub const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92Z";

/// Brain (two hemispheres)
pub const ICON_BRAIN: &str = "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18ZM12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18ZM12 5v13";

/// Database cylinder
pub const ICON_DATABASE: &str = "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0M3 5v14a9 3 0 0 0 18 0V5M3 12a9 3 0 0 0 18 0";

/// Lightning bolt
pub const ICON_ZAP: &str = "M13 2 3 14h9l-1 8 10-12h-9l1-8Z";

/// Shield
pub const ICON_SHIELD: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10Z";

/// Processor chip
pub const ICON_CPU: &str = "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2ZM9 9h6v6H9ZM9 1v3M15 1v3M9 20v3M15 20v3M20 9h3M20 14h3M1 9h3M1 14h3";

/// Group of people
pub const ICON_USERS: &str = "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75";

/// Globe with meridian
pub const ICON_GLOBE: &str = "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0M2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10Z";

/// Award ribbon
pub const ICON_AWARD: &str = "M6 8a6 6 0 1 0 12 0a6 6 0 1 0-12 0M15.477 12.89 17 22l-5-3-5 3 1.523-9.11";

/// Padlock
pub const ICON_LOCK: &str = "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2ZM7 11V7a5 5 0 0 1 10 0v4";

/// Chevron pointing left
pub const ICON_CHEVRON_LEFT: &str = "m15 18-6-6 6-6";

/// Chevron pointing right
pub const ICON_CHEVRON_RIGHT: &str = "m9 18 6-6-6-6";

#[cfg(test)]
mod tests {
    use super::*;
    use prevacare_core::content::{ACHIEVEMENTS, AI_FEATURES, FEATURES, MEDICAL_STATS};
    use std::collections::HashSet;

    /// Every glyph the page draws, navigation chevrons included.
    fn rendered_glyphs() -> HashSet<Glyph> {
        FEATURES
            .iter()
            .map(|f| f.glyph)
            .chain(MEDICAL_STATS.iter().map(|s| s.glyph))
            .chain(AI_FEATURES.iter().map(|c| c.glyph))
            .chain(ACHIEVEMENTS.iter().map(|a| a.glyph))
            .chain([Glyph::ChevronLeft, Glyph::ChevronRight])
            .collect()
    }

    #[test]
    fn every_rendered_glyph_has_distinct_path() {
        let glyphs = rendered_glyphs();
        let paths: HashSet<&str> = glyphs.iter().copied().map(glyph_path).collect();
        assert_eq!(paths.len(), glyphs.len());
    }

    #[test]
    fn paths_start_with_move_command() {
        for glyph in rendered_glyphs() {
            let path = glyph_path(glyph);
            assert!(
                path.starts_with('M') || path.starts_with('m'),
                "{} path must start with a moveto",
                glyph.name()
            );
        }
    }
}
