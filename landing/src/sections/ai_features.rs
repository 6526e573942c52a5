use leptos::prelude::*;
use prevacare_core::content::{AI_FEATURES, AI_FEATURES_CLOSING, AI_FEATURES_COPY, AiFeatureCard};

use crate::icons::Icon;

#[component]
pub fn AiFeatures() -> impl IntoView {
    view! {
        <section id="ai" class="ai-features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{AI_FEATURES_COPY.title}</h2>
                    <p class="section-description">{AI_FEATURES_COPY.lead}</p>
                </div>

                <div class="ai-grid">
                    {AI_FEATURES
                        .iter()
                        .map(|card| view! { <AiCard card=*card /> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="ai-closing">
                    <h3 class="ai-closing-title">{AI_FEATURES_CLOSING.title}</h3>
                    <p class="ai-closing-body">{AI_FEATURES_CLOSING.body}</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AiCard(card: AiFeatureCard) -> impl IntoView {
    view! {
        <article class="ai-card">
            <div class="ai-card-icon">
                <Icon glyph=card.glyph size="48" />
            </div>
            <div class="ai-card-body">
                <h3 class="ai-card-title">{card.title}</h3>
                <p class="ai-card-description">{card.description}</p>
            </div>
        </article>
    }
}
