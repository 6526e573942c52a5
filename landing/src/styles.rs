//! CSS for the landing page.
//!
//! One stylesheet, injected by [`crate::App`]. Covers:
//!
//! - Section layout and the responsive grids
//! - The feature showcase stage, including the pinned (fixed) mode
//! - Gradient and accent token classes for every feature
//! - Dark mode through `prefers-color-scheme`

/// Complete CSS for the page.
pub const LANDING_CSS: &str = r#"
:root {
    --bg-page: #ffffff;
    --bg-soft: #eff6ff;
    --bg-card: #ffffff;
    --bg-glass: rgba(255, 255, 255, 0.9);
    --text-strong: #111827;
    --text-body: #4b5563;
    --text-muted: #6b7280;
    --border-subtle: rgba(229, 231, 235, 0.5);
    --brand: #3b82f6;
    --brand-strong: #2563eb;
    --brand-deep: #4338ca;
    --radius-lg: 16px;
    --radius-md: 10px;
    --shadow-card: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1);
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --container-max: 1200px;
}

@media (prefers-color-scheme: dark) {
    :root {
        --bg-page: #111827;
        --bg-soft: #1f2937;
        --bg-card: #1f2937;
        --bg-glass: rgba(31, 41, 55, 0.9);
        --text-strong: #ffffff;
        --text-body: #d1d5db;
        --text-muted: #9ca3af;
        --border-subtle: rgba(55, 65, 81, 0.5);
    }
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    background: var(--bg-page);
    color: var(--text-body);
    line-height: 1.6;
}

h1, h2, h3, h4, p {
    margin: 0;
}

button {
    font: inherit;
    cursor: pointer;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}

.icon {
    display: block;
    flex-shrink: 0;
}

/* ---------------------------------------------------------------------
 * Section headers (stats, AI, about)
 * ------------------------------------------------------------------- */

.section-header {
    text-align: center;
    margin-bottom: 64px;
}

.section-title {
    font-size: 2.25rem;
    font-weight: 700;
    color: var(--text-strong);
    margin-bottom: 16px;
}

.section-description {
    font-size: 1.25rem;
    max-width: 48rem;
    margin: 0 auto;
}

/* ---------------------------------------------------------------------
 * Feature showcase
 * ------------------------------------------------------------------- */

.showcase {
    min-height: 300vh;
    background: linear-gradient(135deg, #f8fafc, #eff6ff 50%, #e0e7ff);
}

@media (prefers-color-scheme: dark) {
    .showcase {
        background: linear-gradient(135deg, #111827, #0f172a 50%, #1f2937);
    }
}

.showcase-stage {
    position: relative;
    transition: all 0.5s ease-out;
}

.showcase-stage > .container {
    padding-top: 16px;
    padding-bottom: 16px;
}

.showcase-stage.pinned {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: var(--bg-glass);
    backdrop-filter: blur(16px);
    border-bottom: 1px solid var(--border-subtle);
}

.glass-card {
    background: var(--bg-glass);
    backdrop-filter: blur(24px);
    border-radius: var(--radius-lg);
    padding: 16px;
    box-shadow: var(--shadow-card);
    border: 1px solid rgba(255, 255, 255, 0.2);
}

.showcase-eyebrow {
    display: flex;
    align-items: center;
    gap: 8px;
}

.accent-badge {
    display: inline-flex;
    padding: 8px;
    border-radius: var(--radius-md);
}

.feature-ordinal {
    color: var(--brand-strong);
    font-weight: 600;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.08em;
}

.mobile-ordinal {
    color: var(--text-muted);
    font-weight: 500;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.showcase-heading {
    font-size: 2.25rem;
    font-weight: 700;
    line-height: 1.2;
    color: var(--text-strong);
}

.mobile-heading {
    font-size: 1.125rem;
    font-weight: 700;
    color: var(--text-strong);
}

.showcase-description {
    font-size: 1rem;
}

.showcase-arrows {
    display: flex;
    gap: 12px;
}

.nav-btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 12px;
    border-radius: var(--radius-md);
    background: var(--bg-card);
    color: var(--text-body);
    border: 1px solid var(--border-subtle);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: all 0.2s;
}

.nav-btn:hover {
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}

/* Mobile layout */

.showcase-mobile {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.showcase-mobile .glass-card {
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.pager {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 12px;
}

.pager .nav-btn {
    padding: 8px;
}

.pager-dots {
    display: flex;
    gap: 6px;
}

.pager-dot {
    width: 8px;
    height: 8px;
    padding: 0;
    border: none;
    border-radius: 999px;
    background: #d1d5db;
    transition: all 0.3s;
}

.pager-dot.active {
    background: var(--brand);
    transform: scale(1.1);
}

/* Desktop layout */

.showcase-desktop {
    display: none;
}

@media (min-width: 1024px) {
    .showcase-mobile {
        display: none;
    }

    .showcase-stage > .container {
        padding-top: 32px;
        padding-bottom: 32px;
    }

    .showcase-desktop {
        display: grid;
        grid-template-columns: 5fr 3fr 4fr;
        gap: 24px;
        align-items: center;
        min-height: 80vh;
    }

    .showcase-copy {
        display: flex;
        flex-direction: column;
        gap: 24px;
    }

    .showcase-description {
        font-size: 1.125rem;
    }
}

@media (min-width: 1280px) {
    .showcase-desktop {
        grid-template-columns: 1fr 1fr 1fr;
        gap: 32px;
    }

    .showcase-heading {
        font-size: 2.5rem;
    }
}

/* Phone mockup */

.phone {
    display: flex;
    justify-content: center;
}

.phone-frame {
    width: 16rem;
    height: 480px;
    padding: 8px;
    border-radius: 2.5rem;
    background: linear-gradient(180deg, #1f2937, #000000);
    box-shadow: var(--shadow-card);
}

.phone-frame.compact {
    width: 14rem;
    height: 400px;
    border-radius: 2rem;
}

.phone-screen {
    position: relative;
    width: 100%;
    height: 100%;
    overflow: hidden;
    border-radius: 2rem;
    color: #ffffff;
    transition: background 0.7s;
}

.phone-frame.compact .phone-screen {
    border-radius: 1.5rem;
}

.phone-status {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    height: 40px;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 24px;
    font-size: 0.75rem;
    font-weight: 500;
    color: rgba(255, 255, 255, 0.9);
}

.phone-status-pill {
    width: 80px;
    height: 16px;
    border-radius: 999px;
    background: rgba(0, 0, 0, 0.3);
}

.phone-notch {
    position: absolute;
    top: 8px;
    left: 50%;
    transform: translateX(-50%);
    width: 96px;
    height: 20px;
    border-radius: 999px;
    background: #000000;
}

.phone-content {
    position: absolute;
    inset: 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 16px;
    padding: 64px 32px 32px;
    text-align: center;
}

.phone-icon {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 72px;
    height: 72px;
    border-radius: var(--radius-lg);
    background: rgba(255, 255, 255, 0.2);
    backdrop-filter: blur(4px);
}

.phone-title {
    font-size: 1.125rem;
    font-weight: 700;
}

.phone-summary {
    max-width: 12rem;
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.8);
}

.phone-dots {
    display: flex;
    gap: 8px;
}

.phone-dot {
    width: 8px;
    height: 8px;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.4);
    transition: all 0.3s;
}

.phone-dot.active {
    background: #ffffff;
    transform: scale(1.1);
}

/* Feature list */

.feature-list-heading {
    font-size: 1.25rem;
    font-weight: 700;
    color: var(--text-strong);
    margin-bottom: 16px;
}

.showcase-mobile .feature-list-heading {
    font-size: 1rem;
    text-align: center;
}

.feature-list-items {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.feature-item {
    display: flex;
    align-items: center;
    gap: 12px;
    width: 100%;
    padding: 12px;
    text-align: left;
    border-radius: var(--radius-md);
    border: 1px solid transparent;
    background: transparent;
    color: var(--text-body);
    transition: all 0.3s;
}

.feature-item:hover {
    background: rgba(249, 250, 251, 0.8);
}

.feature-item.active {
    background: #eff6ff;
    border-color: #bfdbfe;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07);
}

.feature-item-badge {
    display: inline-flex;
    padding: 8px;
    border-radius: var(--radius-md);
    transform: scale(0.75);
    transition: all 0.3s;
}

.feature-item-badge.idle {
    background: #f3f4f6;
    color: var(--text-muted);
}

.feature-item-text {
    display: flex;
    flex-direction: column;
    flex: 1;
}

.feature-item-label {
    font-size: 0.875rem;
    font-weight: 600;
    color: var(--text-body);
}

.feature-item-title {
    font-size: 0.75rem;
    color: var(--text-muted);
}

.feature-item.active .feature-item-label {
    color: #1d4ed8;
}

.feature-item.active .feature-item-title {
    color: var(--brand-strong);
}

.feature-item-pulse {
    width: 8px;
    height: 8px;
    border-radius: 999px;
    background: var(--brand);
    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

@keyframes pulse {
    50% { opacity: 0.5; }
}

/* ---------------------------------------------------------------------
 * Style tokens
 * ------------------------------------------------------------------- */

.gradient-red-pink { background: linear-gradient(135deg, #f87171, #ec4899); }
.gradient-blue-indigo { background: linear-gradient(135deg, #60a5fa, #6366f1); }
.gradient-green-emerald { background: linear-gradient(135deg, #4ade80, #10b981); }
.gradient-purple-violet { background: linear-gradient(135deg, #c084fc, #8b5cf6); }
.gradient-orange-red { background: linear-gradient(135deg, #fb923c, #ef4444); }

.accent-red { color: #ef4444; }
.accent-blue { color: #3b82f6; }
.accent-green { color: #22c55e; }
.accent-purple { color: #a855f7; }
.accent-orange { color: #f97316; }

.tint-red { background: #fee2e2; }
.tint-blue { background: #dbeafe; }
.tint-green { background: #dcfce7; }
.tint-purple { background: #f3e8ff; }
.tint-orange { background: #ffedd5; }

/* ---------------------------------------------------------------------
 * Medical stats
 * ------------------------------------------------------------------- */

.stats {
    padding: 80px 0;
    background: var(--bg-page);
}

.stats-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

.stat-card {
    text-align: center;
    padding: 24px;
    border-radius: var(--radius-lg);
    background: linear-gradient(135deg, #eff6ff, #e0e7ff);
    transition: box-shadow 0.3s;
}

.stat-card:hover {
    box-shadow: var(--shadow-card);
}

.stat-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 64px;
    height: 64px;
    margin-bottom: 16px;
    border-radius: 12px;
    background: var(--brand);
    color: #ffffff;
}

.stat-figure {
    font-size: 1.875rem;
    font-weight: 700;
    color: var(--text-strong);
    margin-bottom: 8px;
}

.stat-label {
    font-size: 1.125rem;
    font-weight: 600;
    color: var(--brand-strong);
    margin-bottom: 8px;
}

.stat-description {
    font-size: 0.875rem;
}

/* ---------------------------------------------------------------------
 * AI features
 * ------------------------------------------------------------------- */

.ai-features {
    padding: 80px 0;
    background: linear-gradient(135deg, #eff6ff, #e0e7ff);
}

.ai-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

.ai-card {
    display: flex;
    align-items: flex-start;
    gap: 24px;
    padding: 32px;
    border-radius: var(--radius-lg);
    background: var(--bg-card);
    box-shadow: var(--shadow-card);
    transition: box-shadow 0.3s;
}

.ai-card-icon {
    flex-shrink: 0;
    padding: 16px;
    border-radius: 12px;
    color: #ffffff;
    background: linear-gradient(135deg, var(--brand), var(--brand-deep));
    transition: transform 0.3s;
}

.ai-card:hover .ai-card-icon {
    transform: scale(1.1);
}

.ai-card-title {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--text-strong);
    margin-bottom: 16px;
}

.ai-closing {
    max-width: 56rem;
    margin: 64px auto 0;
    padding: 32px;
    text-align: center;
    border-radius: var(--radius-lg);
    background: var(--bg-card);
    box-shadow: var(--shadow-card);
}

.ai-closing-title {
    font-size: 1.875rem;
    font-weight: 700;
    color: var(--text-strong);
    margin-bottom: 24px;
}

.ai-closing-body {
    font-size: 1.125rem;
}

/* ---------------------------------------------------------------------
 * Mission / CTA
 * ------------------------------------------------------------------- */

.about {
    padding: 80px 0;
    background: linear-gradient(90deg, #2563eb, #4338ca);
    color: #dbeafe;
}

.about .section-title {
    color: #ffffff;
}

.about .section-description {
    color: #dbeafe;
}

.achievements {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 24px;
    margin-bottom: 64px;
}

.achievement {
    text-align: center;
}

.achievement-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 48px;
    height: 48px;
    margin-bottom: 12px;
    border-radius: 12px;
    background: rgba(255, 255, 255, 0.2);
    color: #bfdbfe;
}

.achievement-text {
    font-size: 0.875rem;
    font-weight: 500;
}

.mission {
    display: grid;
    grid-template-columns: 1fr;
    gap: 48px;
    align-items: center;
    padding: 32px;
    border-radius: 24px;
    background: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(4px);
}

.mission-title {
    font-size: 1.875rem;
    font-weight: 700;
    color: #ffffff;
    margin-bottom: 24px;
}

.mission-paragraph {
    font-size: 1.125rem;
    margin-bottom: 24px;
}

.mission-paragraph:last-child {
    margin-bottom: 0;
}

.mission-highlights {
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.highlight-card {
    padding: 24px;
    border-radius: var(--radius-lg);
    background: rgba(255, 255, 255, 0.1);
}

.highlight-title {
    font-size: 1.25rem;
    font-weight: 700;
    color: #ffffff;
    margin-bottom: 12px;
}

/* ---------------------------------------------------------------------
 * Breakpoints
 * ------------------------------------------------------------------- */

@media (min-width: 768px) {
    .stats-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .achievements {
        grid-template-columns: repeat(3, 1fr);
    }
}

@media (min-width: 1024px) {
    .stats-grid {
        grid-template-columns: repeat(4, 1fr);
    }

    .ai-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .achievements {
        grid-template-columns: repeat(6, 1fr);
    }

    .mission {
        grid-template-columns: 1fr 1fr;
        padding: 48px;
    }

    .about .section-title {
        font-size: 3rem;
    }
}
"#;
