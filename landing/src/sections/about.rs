// Mission / CTA section: achievement strip, mission narrative, highlights
use leptos::prelude::*;
use prevacare_core::content::{
    ACHIEVEMENTS, MISSION, MISSION_COPY, MISSION_HIGHLIGHTS, MISSION_TITLE,
};

use crate::icons::Icon;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{MISSION_COPY.title}</h2>
                    <p class="section-description">{MISSION_COPY.lead}</p>
                </div>

                <div class="achievements">
                    {ACHIEVEMENTS
                        .iter()
                        .map(|achievement| {
                            view! {
                                <div class="achievement">
                                    <div class="achievement-icon">
                                        <Icon glyph=achievement.glyph size="24" />
                                    </div>
                                    <p class="achievement-text">{achievement.text}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="mission">
                    <div class="mission-narrative">
                        <h3 class="mission-title">{MISSION_TITLE}</h3>
                        {MISSION
                            .iter()
                            .map(|paragraph| view! { <p class="mission-paragraph">{*paragraph}</p> })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="mission-highlights">
                        {MISSION_HIGHLIGHTS
                            .iter()
                            .map(|highlight| {
                                view! {
                                    <div class="highlight-card">
                                        <h4 class="highlight-title">{highlight.title}</h4>
                                        <p class="highlight-body">{highlight.body}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
