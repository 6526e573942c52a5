//! Scroll-pinned feature carousel.
//!
//! The section is three viewports tall. While it is pinned the stage sticks
//! to the viewport and scrolling walks through the features; the arrows,
//! pager dots and list entries navigate directly at any time.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use prevacare_core::content::{Accent, FEATURES, FeatureDescriptor, Glyph};
use prevacare_core::showcase::{ScrollGeometry, Showcase};
use tracing::{trace, warn};

use crate::icons::Icon;

fn stage_class(pinned: bool) -> &'static str {
    if pinned {
        "showcase-stage pinned"
    } else {
        "showcase-stage"
    }
}

fn phone_dot_class(active: bool) -> &'static str {
    if active { "phone-dot active" } else { "phone-dot" }
}

fn pager_dot_class(active: bool) -> &'static str {
    if active { "pager-dot active" } else { "pager-dot" }
}

fn list_item_class(active: bool) -> &'static str {
    if active {
        "feature-item active"
    } else {
        "feature-item"
    }
}

fn accent_badge_class(accent: Accent) -> String {
    format!("accent-badge {} {}", accent.tint_class(), accent.text_class())
}

fn item_badge_class(active: bool, accent: Accent) -> String {
    if active {
        format!(
            "feature-item-badge {} {}",
            accent.tint_class(),
            accent.text_class()
        )
    } else {
        "feature-item-badge idle".to_string()
    }
}

fn current(showcase: RwSignal<Showcase>) -> FeatureDescriptor {
    showcase
        .with(|s| s.current().copied())
        .unwrap_or(FEATURES[0])
}

fn is_active(showcase: RwSignal<Showcase>, index: usize) -> bool {
    showcase.with(|s| s.is_active(index))
}

fn select(showcase: RwSignal<Showcase>, index: usize) {
    showcase.update(|s| {
        if let Err(err) = s.select(index) {
            warn!(%err, "ignoring feature selection");
        }
    });
}

/// Section bounding box against the current viewport; `None` if the window
/// height cannot be read.
fn measure(section: &web_sys::Element) -> Option<ScrollGeometry> {
    let viewport_height = window().inner_height().ok()?.as_f64()?;
    let rect = section.get_bounding_client_rect();
    Some(ScrollGeometry::new(rect.top(), rect.height(), viewport_height))
}

#[component]
pub fn FeatureShowcase() -> impl IntoView {
    let showcase = RwSignal::new(Showcase::default());
    let section_ref = NodeRef::<html::Section>::new();

    let listener = window_event_listener(ev::scroll, move |_| {
        let Some(section) = section_ref.get_untracked() else {
            return;
        };
        let Some(geometry) = measure(&section) else {
            return;
        };

        // Only notify subscribers when something visible changed.
        let mut next = showcase.get_untracked();
        match next.on_scroll(geometry) {
            Ok(_) if next != showcase.get_untracked() => showcase.set(next),
            Ok(_) => {}
            Err(err) => trace!(%err, "skipping scroll update"),
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <section
            node_ref=section_ref
            id="showcase"
            class="showcase"
            data-accent=move || current(showcase).accent.as_label()
        >
            <div class=move || stage_class(showcase.with(Showcase::is_pinned))>
                <div class="container">
                    <MobileLayout showcase=showcase />
                    <DesktopLayout showcase=showcase />
                </div>
            </div>
        </section>
    }
}

#[component]
fn MobileLayout(showcase: RwSignal<Showcase>) -> impl IntoView {
    view! {
        <div class="showcase-mobile">
            <PhoneMockup showcase=showcase compact=true />

            <div class="glass-card">
                <div class="showcase-eyebrow">
                    <span class=move || accent_badge_class(current(showcase).accent)>
                        {move || view! { <Icon glyph=current(showcase).glyph size="20" /> }}
                    </span>
                    <div>
                        <p class="mobile-ordinal">
                            {move || format!("Feature {}", showcase.with(Showcase::active) + 1)}
                        </p>
                        <h2 class="mobile-heading">{move || current(showcase).heading}</h2>
                    </div>
                </div>
                <p class="showcase-description">{move || current(showcase).description}</p>
                <ShowcasePager showcase=showcase />
            </div>

            <FeatureList showcase=showcase heading="All Features" detailed=false />
        </div>
    }
}

#[component]
fn DesktopLayout(showcase: RwSignal<Showcase>) -> impl IntoView {
    view! {
        <div class="showcase-desktop">
            <div class="showcase-copy">
                <div class="showcase-eyebrow">
                    <span class=move || accent_badge_class(current(showcase).accent)>
                        {move || view! { <Icon glyph=current(showcase).glyph size="24" /> }}
                    </span>
                    <p class="feature-ordinal">{move || current(showcase).ordinal_label()}</p>
                </div>
                <h2 class="showcase-heading">{move || current(showcase).heading}</h2>
                <p class="showcase-description">{move || current(showcase).description}</p>

                <div class="showcase-arrows">
                    <button
                        class="nav-btn nav-prev"
                        aria-label="Previous feature"
                        on:click=move |_| showcase.update(Showcase::retreat)
                    >
                        <Icon glyph=Glyph::ChevronLeft size="20" />
                    </button>
                    <button
                        class="nav-btn nav-next"
                        aria-label="Next feature"
                        on:click=move |_| showcase.update(Showcase::advance)
                    >
                        <Icon glyph=Glyph::ChevronRight size="20" />
                    </button>
                </div>
            </div>

            <div class="showcase-phone">
                <PhoneMockup showcase=showcase />
            </div>

            <div class="showcase-list">
                <FeatureList showcase=showcase heading="Feature Showcase" detailed=true />
            </div>
        </div>
    }
}

#[component]
fn PhoneMockup(showcase: RwSignal<Showcase>, #[prop(optional)] compact: bool) -> impl IntoView {
    let frame_class = if compact {
        "phone-frame compact"
    } else {
        "phone-frame"
    };

    view! {
        <div class="phone">
            <div class=frame_class>
                <div class=move || format!("phone-screen {}", current(showcase).gradient.class())>
                    <div class="phone-status">
                        <span>"9:41"</span>
                        <div class="phone-status-pill"></div>
                        <span>"100%"</span>
                    </div>
                    <div class="phone-notch"></div>

                    <div class="phone-content">
                        <div class="phone-icon">
                            {move || view! { <Icon glyph=current(showcase).glyph size="32" /> }}
                        </div>
                        <h3 class="phone-title">{move || current(showcase).title}</h3>
                        <p class="phone-summary">{move || current(showcase).summary()}</p>
                        <div class="phone-dots">
                            {(0..FEATURES.len())
                                .map(|index| {
                                    view! {
                                        <div class=move || phone_dot_class(is_active(showcase, index))></div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Prev / pager dots / Next row of the mobile content card.
#[component]
fn ShowcasePager(showcase: RwSignal<Showcase>) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                class="nav-btn nav-prev"
                aria-label="Previous feature"
                on:click=move |_| showcase.update(Showcase::retreat)
            >
                <Icon glyph=Glyph::ChevronLeft size="16" />
            </button>

            <div class="pager-dots">
                {(0..FEATURES.len())
                    .map(|index| {
                        view! {
                            <button
                                class=move || pager_dot_class(is_active(showcase, index))
                                aria-label=format!("Show feature {}", index + 1)
                                on:click=move |_| select(showcase, index)
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <button
                class="nav-btn nav-next"
                aria-label="Next feature"
                on:click=move |_| showcase.update(Showcase::advance)
            >
                <Icon glyph=Glyph::ChevronRight size="16" />
            </button>
        </div>
    }
}

/// Direct-select list of every feature.
#[component]
fn FeatureList(
    showcase: RwSignal<Showcase>,
    heading: &'static str,
    /// Show the "Feature N" label above each title
    detailed: bool,
) -> impl IntoView {
    view! {
        <div class="glass-card feature-list">
            <h3 class="feature-list-heading">{heading}</h3>
            <div class="feature-list-items">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(index, feature)| {
                        let feature = *feature;
                        view! {
                            <button
                                class=move || list_item_class(is_active(showcase, index))
                                on:click=move |_| select(showcase, index)
                            >
                                <span class=move || item_badge_class(is_active(showcase, index), feature.accent)>
                                    <Icon glyph=feature.glyph size="20" />
                                </span>
                                <span class="feature-item-text">
                                    {detailed
                                        .then(|| {
                                            view! {
                                                <span class="feature-item-label">
                                                    {format!("Feature {}", feature.id)}
                                                </span>
                                            }
                                        })}
                                    <span class="feature-item-title">{feature.title}</span>
                                </span>
                                <Show when=move || is_active(showcase, index)>
                                    <span class="feature-item-pulse"></span>
                                </Show>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_is_fixed_only_when_pinned() {
        assert_eq!(stage_class(true), "showcase-stage pinned");
        assert_eq!(stage_class(false), "showcase-stage");
    }

    #[test]
    fn indicator_classes_mark_active() {
        assert_eq!(phone_dot_class(true), "phone-dot active");
        assert_eq!(pager_dot_class(false), "pager-dot");
        assert_eq!(list_item_class(true), "feature-item active");
    }

    #[test]
    fn badges_use_feature_accent() {
        assert_eq!(
            accent_badge_class(Accent::Green),
            "accent-badge tint-green accent-green"
        );
        assert_eq!(
            item_badge_class(true, FEATURES[4].accent),
            "feature-item-badge tint-orange accent-orange"
        );
        assert_eq!(
            item_badge_class(false, FEATURES[4].accent),
            "feature-item-badge idle"
        );
    }
}
