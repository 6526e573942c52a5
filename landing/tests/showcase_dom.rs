//! Browser tests for the rendered sections.
//!
//! Run with `wasm-pack test --headless --chrome landing`.
#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use prevacare_core::content::{ACHIEVEMENTS, AI_FEATURES, FEATURES, MEDICAL_STATS};
use prevacare_landing::sections::{AboutSection, AiFeatures, FeatureShowcase, MedicalStats};
use prevacare_landing::styles::LANDING_CSS;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

fn find(host: &HtmlElement, selector: &str) -> HtmlElement {
    host.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn text(host: &HtmlElement, selector: &str) -> String {
    find(host, selector).text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
async fn showcase_starts_on_first_feature() {
    let host = container();
    let _mount = leptos::mount::mount_to(host.clone(), || view! { <FeatureShowcase /> });

    assert_eq!(text(&host, ".showcase-desktop .feature-ordinal"), "Feature No.1");
    assert_eq!(text(&host, ".showcase-desktop .showcase-heading"), FEATURES[0].heading);
    assert!(!find(&host, ".showcase-stage").class_name().contains("pinned"));
}

#[wasm_bindgen_test]
async fn next_and_previous_buttons_cycle() {
    let host = container();
    let _mount = leptos::mount::mount_to(host.clone(), || view! { <FeatureShowcase /> });

    find(&host, ".showcase-desktop .nav-next").click();
    leptos::task::tick().await;
    assert_eq!(text(&host, ".showcase-desktop .feature-ordinal"), "Feature No.2");

    find(&host, ".showcase-desktop .nav-prev").click();
    find(&host, ".showcase-desktop .nav-prev").click();
    leptos::task::tick().await;
    assert_eq!(text(&host, ".showcase-desktop .feature-ordinal"), "Feature No.5");
    assert_eq!(text(&host, ".showcase-mobile .mobile-heading"), FEATURES[4].heading);
}

#[wasm_bindgen_test]
async fn list_item_selects_feature() {
    let host = container();
    let _mount = leptos::mount::mount_to(host.clone(), || view! { <FeatureShowcase /> });

    let item = ".showcase-desktop .feature-list-items > :nth-child(4)";
    find(&host, item).click();
    leptos::task::tick().await;

    assert_eq!(text(&host, ".showcase-desktop .feature-ordinal"), "Feature No.4");
    assert!(find(&host, item).class_name().contains("active"));
    assert_eq!(text(&host, ".showcase-desktop .phone-title"), FEATURES[3].title);
}

/// Scroll the window and deliver the `scroll` event synchronously.
fn scroll_window_to(y: f64) {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, y);
    window
        .dispatch_event(&web_sys::Event::new("scroll").unwrap())
        .unwrap();
}

/// Document-relative top and height of an element.
fn document_box(element: &HtmlElement) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    let scroll_y = web_sys::window().unwrap().scroll_y().unwrap();
    (rect.top() + scroll_y, rect.height())
}

fn viewport_height() -> f64 {
    web_sys::window()
        .unwrap()
        .inner_height()
        .unwrap()
        .as_f64()
        .unwrap()
}

/// Showcase with the real stylesheet (300vh section) and room to scroll past it.
fn tall_showcase() -> impl IntoView {
    view! {
        <style>{LANDING_CSS}</style>
        <FeatureShowcase />
        <div style="height: 200vh"></div>
    }
}

#[wasm_bindgen_test]
async fn scroll_pins_stage_and_tracks_progress() {
    let host = container();
    let _mount = leptos::mount::mount_to(host.clone(), tall_showcase);

    let section = find(&host, "#showcase");
    let stage = find(&host, ".showcase-stage");
    let (top, height) = document_box(&section);
    let scrollable = height - viewport_height();
    assert!(scrollable > 0.0, "section must be taller than the viewport");

    scroll_window_to(top + 0.5 * scrollable);
    leptos::task::tick().await;
    assert!(stage.class_name().contains("pinned"));
    assert_eq!(text(&host, ".showcase-desktop .feature-ordinal"), "Feature No.3");
    assert_eq!(
        section.get_attribute("data-accent").as_deref(),
        Some(FEATURES[2].accent.as_label())
    );

    scroll_window_to(top + 0.9 * scrollable);
    leptos::task::tick().await;
    assert_eq!(text(&host, ".showcase-desktop .feature-ordinal"), "Feature No.5");

    // Past the section: released, last feature stays selected.
    scroll_window_to(top + height + 10.0);
    leptos::task::tick().await;
    assert!(!stage.class_name().contains("pinned"));
    assert_eq!(text(&host, ".showcase-desktop .feature-ordinal"), "Feature No.5");

    scroll_window_to(0.0);
}

#[wasm_bindgen_test]
async fn buttons_still_work_after_scroll_release() {
    let host = container();
    let _mount = leptos::mount::mount_to(host.clone(), tall_showcase);

    let (top, height) = document_box(&find(&host, "#showcase"));
    scroll_window_to(top + 0.1 * (height - viewport_height()));
    leptos::task::tick().await;
    assert_eq!(text(&host, ".showcase-desktop .feature-ordinal"), "Feature No.1");

    scroll_window_to(top + height + 10.0);
    find(&host, ".showcase-desktop .nav-next").click();
    leptos::task::tick().await;
    assert_eq!(text(&host, ".showcase-desktop .feature-ordinal"), "Feature No.2");

    scroll_window_to(0.0);
}

#[wasm_bindgen_test]
async fn scroll_after_unmount_is_ignored() {
    let host = container();
    let mount = leptos::mount::mount_to(host.clone(), tall_showcase);

    let stage = find(&host, ".showcase-stage");
    let ordinal = find(&host, ".showcase-desktop .feature-ordinal");
    let (top, height) = document_box(&find(&host, "#showcase"));
    let scrollable = height - viewport_height();

    scroll_window_to(top + 0.3 * scrollable);
    leptos::task::tick().await;
    assert!(stage.class_name().contains("pinned"));
    let class_before = stage.class_name();
    let ordinal_before = ordinal.text_content();

    drop(mount);
    assert!(!stage.is_connected());
    assert!(host.query_selector("#showcase").unwrap().is_none());

    // A listener left behind would touch disposed signals and panic here.
    scroll_window_to(0.0);
    scroll_window_to(top + 0.9 * scrollable);
    leptos::task::tick().await;

    assert_eq!(stage.class_name(), class_before);
    assert_eq!(ordinal.text_content(), ordinal_before);

    scroll_window_to(0.0);
}

#[wasm_bindgen_test]
async fn static_sections_render_every_entry_in_order() {
    let host = container();
    let _mount = leptos::mount::mount_to(host.clone(), || {
        view! {
            <MedicalStats />
            <AiFeatures />
            <AboutSection />
        }
    });

    assert_eq!(
        find(&host, ".stats-grid").child_element_count() as usize,
        MEDICAL_STATS.len()
    );
    assert_eq!(text(&host, ".stat-card:first-child .stat-figure"), "95%");
    assert_eq!(text(&host, ".stat-card:last-child .stat-figure"), "100%");

    assert_eq!(
        find(&host, ".ai-grid").child_element_count() as usize,
        AI_FEATURES.len()
    );
    assert_eq!(
        text(&host, ".ai-card:first-child .ai-card-title"),
        AI_FEATURES[0].title
    );

    assert_eq!(
        find(&host, ".achievements").child_element_count() as usize,
        ACHIEVEMENTS.len()
    );
    assert_eq!(text(&host, ".mission-title"), "Our Mission");
}
