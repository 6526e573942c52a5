//! Scroll-driven state for the feature showcase.
//!
//! The showcase section is several viewports tall. While its top edge has
//! scrolled past the viewport top and its bottom edge is still below the
//! viewport bottom, the stage is *pinned* and the distance scrolled through
//! the section selects the active feature. Outside that window the active
//! feature only changes through explicit navigation.

use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::content::{FEATURES, FeatureDescriptor};
use crate::error::{GeometryError, ShowcaseError};

const FEATURE_COUNT: NonZeroUsize = match NonZeroUsize::new(FEATURES.len()) {
    Some(count) => count,
    None => panic!("FEATURES must not be empty"),
};

/// Bounding box of the showcase section relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    /// Distance from viewport top to section top (negative once scrolled past)
    pub top: f64,
    /// Section height
    pub height: f64,
    /// Viewport (window inner) height
    pub viewport_height: f64,
}

impl ScrollGeometry {
    /// Geometry from a bounding-box top, bounding-box height and viewport height.
    pub fn new(top: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            top,
            height,
            viewport_height,
        }
    }

    /// Bottom edge of the section relative to the viewport top.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Scroll distance available while pinned.
    pub fn scrollable(&self) -> f64 {
        self.height - self.viewport_height
    }

    /// Top edge at or above the viewport top, bottom edge still below the viewport bottom.
    pub fn is_pinned(&self) -> bool {
        self.top <= 0.0 && self.bottom() > self.viewport_height
    }

    fn validate(self) -> Result<Self, GeometryError> {
        let finite =
            self.top.is_finite() && self.height.is_finite() && self.viewport_height.is_finite();
        if finite && self.height > 0.0 && self.viewport_height > 0.0 {
            Ok(self)
        } else {
            Err(GeometryError::Unmeasured {
                top: self.top,
                height: self.height,
                viewport_height: self.viewport_height,
            })
        }
    }
}

/// Fraction of the pinned extent scrolled through, clamped to `[0, 1]`.
///
/// `None` when the section is not taller than the viewport.
pub fn scroll_progress(geometry: &ScrollGeometry) -> Option<f64> {
    let scrollable = geometry.scrollable();
    if scrollable <= 0.0 {
        return None;
    }
    Some((geometry.top.abs() / scrollable).clamp(0.0, 1.0))
}

/// Maps scroll progress onto a feature index, saturating at the last one.
pub fn index_for_progress(progress: f64, len: NonZeroUsize) -> usize {
    let len = len.get();
    let scaled = (progress.clamp(0.0, 1.0) * len as f64).floor() as usize;
    scaled.min(len - 1)
}

/// What a scroll event did to the showcase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollUpdate {
    /// Not pinned; active feature untouched
    Released,
    /// Pinned, but the section has no scrollable extent; active feature untouched.
    ///
    /// Consistent geometry never pins a section that fits in the viewport.
    Held,
    /// Pinned and tracking scroll progress
    Tracked {
        /// Clamped scroll progress
        progress: f64,
        /// Active index derived from `progress`
        active: usize,
    },
}

/// Active-feature and pinned state of the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showcase {
    active: usize,
    pinned: bool,
    len: NonZeroUsize,
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            active: 0,
            pinned: false,
            len: FEATURE_COUNT,
        }
    }
}

impl Showcase {
    /// Showcase cycling through `len` features, starting at the first.
    pub fn new(len: usize) -> Result<Self, ShowcaseError> {
        let len = NonZeroUsize::new(len).ok_or(ShowcaseError::Empty)?;
        Ok(Self {
            active: 0,
            pinned: false,
            len,
        })
    }

    /// Index of the active feature.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Whether the stage is pinned to the viewport.
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Number of features cycled through.
    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// A showcase always holds at least one feature.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `index` is the active feature.
    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Active descriptor from [`FEATURES`].
    pub fn current(&self) -> Option<&'static FeatureDescriptor> {
        FEATURES.get(self.active)
    }

    /// Jump straight to `index`.
    pub fn select(&mut self, index: usize) -> Result<(), ShowcaseError> {
        if index >= self.len() {
            return Err(ShowcaseError::OutOfRange {
                index,
                len: self.len(),
            });
        }
        self.set_active(index);
        Ok(())
    }

    /// Next feature, wrapping past the last to the first.
    pub fn advance(&mut self) {
        self.set_active((self.active + 1) % self.len());
    }

    /// Previous feature, wrapping past the first to the last.
    pub fn retreat(&mut self) {
        let len = self.len();
        self.set_active((self.active + len - 1) % len);
    }

    /// Recompute pinned/active state from the section's current geometry.
    ///
    /// Unmeasurable geometry leaves the state untouched and returns an error
    /// the caller is expected to ignore.
    pub fn on_scroll(&mut self, geometry: ScrollGeometry) -> Result<ScrollUpdate, GeometryError> {
        let geometry = geometry.validate()?;

        let pinned = geometry.is_pinned();
        if pinned != self.pinned {
            debug!(pinned, top = geometry.top, "showcase pin state changed");
        }
        self.pinned = pinned;

        if !pinned {
            return Ok(ScrollUpdate::Released);
        }

        let Some(progress) = scroll_progress(&geometry) else {
            trace!(
                height = geometry.height,
                viewport = geometry.viewport_height,
                "pinned without scrollable extent"
            );
            return Ok(ScrollUpdate::Held);
        };

        let active = index_for_progress(progress, self.len);
        trace!(progress, active, "scroll progress");
        self.set_active(active);
        Ok(ScrollUpdate::Tracked { progress, active })
    }

    fn set_active(&mut self, index: usize) {
        if index != self.active {
            debug!(from = self.active, to = index, "active feature changed");
        }
        self.active = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VIEWPORT: f64 = 1000.0;

    fn showcase(len: usize) -> Showcase {
        Showcase::new(len).unwrap()
    }

    #[test]
    fn default_is_sized_to_features() {
        let s = Showcase::default();
        assert_eq!(s.len(), FEATURES.len());
        assert_eq!(s.active(), 0);
        assert!(!s.is_pinned());
        assert_eq!(s.current().map(|f| f.id), Some(1));
    }

    #[test]
    fn empty_showcase_rejected() {
        assert_eq!(Showcase::new(0), Err(ShowcaseError::Empty));
    }

    #[test]
    fn advance_cycles_back_for_every_start() {
        for len in 1..=12 {
            for start in 0..len {
                let mut s = showcase(len);
                s.select(start).unwrap();
                for _ in 0..len {
                    s.advance();
                }
                assert_eq!(s.active(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn retreat_cycles_back_for_every_start() {
        for len in 1..=12 {
            for start in 0..len {
                let mut s = showcase(len);
                s.select(start).unwrap();
                for _ in 0..len {
                    s.retreat();
                }
                assert_eq!(s.active(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn advance_then_retreat_is_identity() {
        for len in 1..=12 {
            for start in 0..len {
                let mut s = showcase(len);
                s.select(start).unwrap();
                s.advance();
                s.retreat();
                assert_eq!(s.active(), start);
            }
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut s = showcase(5);
        s.retreat();
        assert_eq!(s.active(), 4);
        s.advance();
        assert_eq!(s.active(), 0);
    }

    #[test]
    fn select_is_exact_regardless_of_prior_state() {
        let mut s = showcase(5);
        for prior in 0..5 {
            for target in 0..5 {
                s.select(prior).unwrap();
                s.select(target).unwrap();
                assert_eq!(s.active(), target);
            }
        }
    }

    #[test]
    fn select_out_of_range_leaves_state() {
        let mut s = showcase(5);
        s.select(3).unwrap();
        assert_eq!(
            s.select(5),
            Err(ShowcaseError::OutOfRange { index: 5, len: 5 })
        );
        assert_eq!(s.active(), 3);
    }

    #[test]
    fn pinned_when_top_reached_and_bottom_below_viewport() {
        let g = ScrollGeometry::new(0.0, VIEWPORT + 100.0, VIEWPORT);
        assert!(g.is_pinned());
    }

    #[test]
    fn not_pinned_before_reaching_section() {
        let g = ScrollGeometry::new(50.0, VIEWPORT * 3.0, VIEWPORT);
        assert!(!g.is_pinned());
    }

    #[test]
    fn not_pinned_after_scrolling_past() {
        // bottom == viewport
        let g = ScrollGeometry::new(-3.0 * VIEWPORT, 4.0 * VIEWPORT, VIEWPORT);
        assert!(!g.is_pinned());
        // bottom above viewport bottom
        let g = ScrollGeometry::new(-3.5 * VIEWPORT, 4.0 * VIEWPORT, VIEWPORT);
        assert!(!g.is_pinned());
    }

    #[test]
    fn halfway_through_selects_middle_feature() {
        let mut s = showcase(5);
        let g = ScrollGeometry::new(-1.5 * VIEWPORT, 4.0 * VIEWPORT, VIEWPORT);
        assert_eq!(scroll_progress(&g), Some(0.5));
        let update = s.on_scroll(g).unwrap();
        assert_eq!(
            update,
            ScrollUpdate::Tracked {
                progress: 0.5,
                active: 2
            }
        );
        assert!(s.is_pinned());
        assert_eq!(s.active(), 2);
    }

    #[test]
    fn zero_scrollable_extent_keeps_active_index() {
        let mut s = showcase(5);
        s.select(3).unwrap();
        let g = ScrollGeometry::new(0.0, VIEWPORT, VIEWPORT);
        assert_eq!(g.scrollable(), 0.0);
        assert_eq!(scroll_progress(&g), None);

        // bottom == viewport, so this never pins and `Held` stays out of reach
        assert!(!g.is_pinned());
        let update = s.on_scroll(g).unwrap();
        assert_eq!(update, ScrollUpdate::Released);
        assert_eq!(s.active(), 3);
        assert!(!s.is_pinned());
    }

    #[test]
    fn pinned_geometry_always_has_scrollable_extent() {
        for top in [0.0, -0.5, -1.0, -250.0, -999.0] {
            for height in [1000.5, 1001.0, 1500.0, 4000.0] {
                let g = ScrollGeometry::new(top, height, VIEWPORT);
                if g.is_pinned() {
                    assert!(g.scrollable() > 0.0, "top={top} height={height}");
                    assert!(scroll_progress(&g).is_some());
                }
            }
        }
    }

    #[test]
    fn section_shorter_than_viewport_never_tracks() {
        let g = ScrollGeometry::new(-10.0, 900.0, VIEWPORT);
        assert_eq!(scroll_progress(&g), None);

        let mut s = showcase(5);
        s.select(1).unwrap();
        assert_eq!(s.on_scroll(g).unwrap(), ScrollUpdate::Released);
        assert_eq!(s.active(), 1);
    }

    #[test]
    fn unpinned_scroll_leaves_active_index() {
        let mut s = showcase(5);
        s.select(4).unwrap();
        let update = s
            .on_scroll(ScrollGeometry::new(200.0, 4.0 * VIEWPORT, VIEWPORT))
            .unwrap();
        assert_eq!(update, ScrollUpdate::Released);
        assert_eq!(s.active(), 4);
        assert!(!s.is_pinned());
    }

    #[test]
    fn unmeasured_geometry_is_a_no_op() {
        let mut s = showcase(5);
        s.on_scroll(ScrollGeometry::new(-1.5 * VIEWPORT, 4.0 * VIEWPORT, VIEWPORT))
            .unwrap();
        let before = s;

        for g in [
            ScrollGeometry::new(0.0, 0.0, VIEWPORT),
            ScrollGeometry::new(f64::NAN, 4.0 * VIEWPORT, VIEWPORT),
            ScrollGeometry::new(0.0, f64::INFINITY, VIEWPORT),
            ScrollGeometry::new(0.0, 4.0 * VIEWPORT, 0.0),
        ] {
            assert!(matches!(
                s.on_scroll(g),
                Err(GeometryError::Unmeasured { .. })
            ));
            assert_eq!(s, before);
        }
    }

    #[test]
    fn progress_is_clamped() {
        // Overshoot past the extent (rubber-band scrolling) saturates.
        let g = ScrollGeometry::new(-3.2 * VIEWPORT, 4.0 * VIEWPORT, VIEWPORT);
        assert_eq!(scroll_progress(&g), Some(1.0));
        let len = NonZeroUsize::new(5).unwrap();
        assert_eq!(index_for_progress(1.0, len), 4);
        assert_eq!(index_for_progress(-0.0001, len), 0);
        assert_eq!(index_for_progress(1.0001, len), 4);
    }

    #[test]
    fn scroll_sequence_walks_through_features() {
        let mut s = showcase(5);
        assert_eq!(s.active(), 0);

        let height = 4.0 * VIEWPORT;
        let scrollable = height - VIEWPORT;
        let mut seen = Vec::new();
        for progress in [0.0, 0.21, 0.41, 0.61, 0.81, 0.99] {
            let g = ScrollGeometry::new(-(progress * scrollable), height, VIEWPORT);
            s.on_scroll(g).unwrap();
            assert!(s.is_pinned());
            seen.push(s.active());
        }

        assert_eq!(seen, vec![0, 1, 2, 3, 4, 4]);
    }
}
