// PrevaCare Landing Page - Leptos 0.8 Edition
// Developed with ♥ by The PrevaCare Web Team (c)2025

use leptos::prelude::*;
use prevacare_landing::{App, config::PageConfig, telemetry};

fn main() {
    console_error_panic_hook::set_once();

    let config = PageConfig::from_location();
    telemetry::init(&config);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
