//! PrevaCare landing page components.
//!
//! The page is a fixed sequence of independent sections mounted once by
//! `main.rs`. Only the feature showcase holds state; everything else renders
//! the static tables from [`prevacare_core::content`].
//!
//! Developed with ♥ by The PrevaCare Web Team (c)2025

pub mod config;
pub mod console;
pub mod icons;
pub mod sections;
pub mod styles;
pub mod telemetry;

use config::PageConfig;
use console::ConsoleCommands;
use leptos::prelude::*;
use sections::*;

/// Root view: stylesheet, console commands, then the four sections in order.
#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    view! {
        <style>{styles::LANDING_CSS}</style>
        <ConsoleCommands enabled=config.console_commands />
        <main class="landing">
            <FeatureShowcase />
            <MedicalStats />
            <AiFeatures />
            <AboutSection />
        </main>
    }
}
