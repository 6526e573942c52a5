use leptos::prelude::*;
use prevacare_core::content::{MEDICAL_STATS, MEDICAL_STATS_COPY, StatCard};

use crate::icons::Icon;

#[component]
pub fn MedicalStats() -> impl IntoView {
    view! {
        <section id="stats" class="stats">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{MEDICAL_STATS_COPY.title}</h2>
                    <p class="section-description">{MEDICAL_STATS_COPY.lead}</p>
                </div>
                <div class="stats-grid">
                    {MEDICAL_STATS
                        .iter()
                        .map(|stat| view! { <StatTile stat=*stat /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatTile(stat: StatCard) -> impl IntoView {
    view! {
        <article class="stat-card">
            <div class="stat-icon">
                <Icon glyph=stat.glyph size="32" />
            </div>
            <h3 class="stat-figure">{stat.figure}</h3>
            <h4 class="stat-label">{stat.label}</h4>
            <p class="stat-description">{stat.description}</p>
        </article>
    }
}
