use std::collections::HashMap;

use tracing::{Level, debug, instrument};

// fraction of a section's box that must be inside the viewport for it to count
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

// vertical scroll offset past which the return-to-top control is shown
pub const TOP_BUTTON_THRESHOLD: f64 = 240.0;

// a vertical extent, in the same coordinate space as the viewport
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Rect { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

// fraction of section that overlaps viewport, in [0, 1]
pub fn intersection_ratio(section: Rect, viewport: Rect) -> f64 {
    if section.height <= 0.0 {
        return 0.0;
    }

    let overlap = section.bottom().min(viewport.bottom()) - section.top.max(viewport.top);

    (overlap.max(0.0) / section.height).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    // the section whose satisfying event arrived last stays active
    #[default]
    LastObserved,
    // the first satisfying section in document order is active
    DocumentOrder,
}

// SectionTracker
//
// tracks which of a fixed, ordered set of sections is the navigation target.
// events for sections outside the set are dropped, so the active id can only
// ever be one of the configured ids
#[derive(Clone, Debug)]
pub struct SectionTracker {
    sections: Vec<String>,
    satisfying: HashMap<String, bool>,
    active: Option<usize>,
    tie_break: TieBreak,
}

impl SectionTracker {
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_tie_break(sections, TieBreak::default())
    }

    pub fn with_tie_break<I, S>(sections: I, tie_break: TieBreak) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SectionTracker {
            sections: sections.into_iter().map(Into::into).collect(),
            satisfying: HashMap::new(),
            active: None,
            tie_break,
        }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|idx| self.sections[idx].as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    // a single visibility report for one section
    //
    // once a section is active it stays active until another section satisfies
    // the threshold; falling below it does not clear the highlight
    pub fn observe(&mut self, id: &str, ratio: f64) -> Option<&str> {
        let Some(idx) = self.sections.iter().position(|s| s == id) else {
            debug!(section = id, "ignoring unknown section");
            return self.active();
        };

        let satisfies = ratio >= VISIBILITY_THRESHOLD;
        self.satisfying.insert(id.to_owned(), satisfies);

        match self.tie_break {
            TieBreak::LastObserved => {
                if satisfies {
                    self.active = Some(idx);
                }
            }
            TieBreak::DocumentOrder => {
                let topmost = self
                    .sections
                    .iter()
                    .position(|s| self.satisfying.get(s).copied().unwrap_or(false));
                if topmost.is_some() {
                    self.active = topmost;
                }
            }
        }

        self.active()
    }

    // recompute from layout
    //
    // bounds maps section ids to their boxes; sections without a box are not in
    // the document yet and are skipped.  an event is only emitted for sections
    // whose satisfying status changed since the last pass, so a section that
    // stays visible does not steal the highlight back
    #[instrument(level=Level::TRACE, skip(self, bounds))]
    pub fn recompute(&mut self, bounds: &HashMap<String, Rect>, viewport: Rect) -> Option<&str> {
        let mut events = Vec::new();

        for id in self.sections.iter() {
            let Some(rect) = bounds.get(id) else {
                continue;
            };

            let ratio = intersection_ratio(*rect, viewport);
            let was = self.satisfying.get(id).copied().unwrap_or(false);

            if (ratio >= VISIBILITY_THRESHOLD) != was {
                events.push((id.clone(), ratio));
            }
        }

        for (id, ratio) in events {
            self.observe(&id, ratio);
        }

        self.active()
    }

    pub fn reset(&mut self) {
        self.satisfying.clear();
        self.active = None;
    }
}

pub fn show_top_button(scroll_offset: f64) -> bool {
    scroll_offset > TOP_BUTTON_THRESHOLD
}

// percentage of the scrollable distance covered, in [0, 100]
//
// a document that is not taller than the viewport has nothing to scroll and
// reports 0
pub fn scroll_progress(scroll_offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;

    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_offset.is_finite() {
        return 0.0;
    }

    (scroll_offset / scrollable * 100.0).clamp(0.0, 100.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub show_top_button: bool,
    pub progress: f64,
}

impl ScrollMetrics {
    pub fn measure(scroll_offset: f64, document_height: f64, viewport_height: f64) -> Self {
        ScrollMetrics {
            offset: scroll_offset,
            show_top_button: show_top_button(scroll_offset),
            progress: scroll_progress(scroll_offset, document_height, viewport_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SECTIONS: [&str; 4] = ["home", "experience", "projects", "contact"];

    fn layout(tops: &[(&str, f64, f64)]) -> HashMap<String, Rect> {
        tops.iter()
            .map(|(id, top, height)| (id.to_string(), Rect::new(*top, *height)))
            .collect()
    }

    #[test]
    fn nothing_active_before_first_event() {
        let tracker = SectionTracker::new(SECTIONS);
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn overlapping_sections_last_event_wins() {
        let mut tracker = SectionTracker::new(SECTIONS);

        tracker.observe("projects", 0.6);
        tracker.observe("experience", 0.55);
        assert_eq!(tracker.active(), Some("experience"));

        tracker.observe("experience", 0.7);
        tracker.observe("projects", 0.9);
        assert_eq!(tracker.active(), Some("projects"));
    }

    #[test]
    fn falling_below_threshold_keeps_highlight() {
        let mut tracker = SectionTracker::new(SECTIONS);

        tracker.observe("home", 1.0);
        tracker.observe("home", 0.1);
        assert_eq!(tracker.active(), Some("home"));
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let mut tracker = SectionTracker::new(SECTIONS);

        tracker.observe("home", 0.8);
        tracker.observe("footer", 1.0);
        assert_eq!(tracker.active(), Some("home"));
    }

    #[test]
    fn exactly_half_visible_counts() {
        let mut tracker = SectionTracker::new(SECTIONS);
        tracker.observe("contact", 0.5);
        assert_eq!(tracker.active(), Some("contact"));
    }

    #[test]
    fn document_order_prefers_topmost() {
        let mut tracker = SectionTracker::with_tie_break(SECTIONS, TieBreak::DocumentOrder);

        tracker.observe("experience", 0.6);
        tracker.observe("projects", 0.6);
        assert_eq!(tracker.active(), Some("experience"));

        tracker.observe("experience", 0.2);
        assert_eq!(tracker.active(), Some("projects"));
    }

    #[test]
    fn ratio_of_partial_overlap() {
        let viewport = Rect::new(0.0, 800.0);

        assert_eq!(intersection_ratio(Rect::new(0.0, 400.0), viewport), 1.0);
        assert_eq!(intersection_ratio(Rect::new(600.0, 400.0), viewport), 0.5);
        assert_eq!(intersection_ratio(Rect::new(900.0, 400.0), viewport), 0.0);
        assert_eq!(intersection_ratio(Rect::new(-300.0, 400.0), viewport), 0.25);
        assert_eq!(intersection_ratio(Rect::new(100.0, 0.0), viewport), 0.0);
    }

    #[test]
    fn recompute_follows_scrolling() {
        let mut tracker = SectionTracker::new(SECTIONS);
        let bounds = layout(&[
            ("home", 0.0, 600.0),
            ("experience", 600.0, 1000.0),
            ("projects", 1600.0, 800.0),
            ("contact", 2400.0, 400.0),
        ]);

        assert_eq!(tracker.recompute(&bounds, Rect::new(0.0, 800.0)), Some("home"));
        assert_eq!(tracker.recompute(&bounds, Rect::new(900.0, 800.0)), Some("experience"));
        assert_eq!(tracker.recompute(&bounds, Rect::new(2000.0, 800.0)), Some("contact"));
    }

    #[test]
    fn recompute_does_not_reemit_steady_sections() {
        let mut tracker = SectionTracker::new(SECTIONS);
        let viewport = Rect::new(0.0, 1000.0);

        // both visible, projects reported after experience in document order
        let bounds = layout(&[("experience", 0.0, 400.0), ("projects", 400.0, 400.0)]);
        assert_eq!(tracker.recompute(&bounds, viewport), Some("projects"));

        // an explicit later event for experience wins, and a layout pass with
        // nothing changed leaves it alone
        tracker.observe("experience", 1.0);
        assert_eq!(tracker.recompute(&bounds, viewport), Some("experience"));
    }

    #[test]
    fn recompute_in_document_order_keeps_topmost() {
        let bounds = layout(&[("experience", 0.0, 400.0), ("projects", 400.0, 400.0)]);

        // experience is fully visible, projects only a quarter
        let first = Rect::new(0.0, 500.0);
        // both satisfy; only projects changes status
        let second = Rect::new(100.0, 800.0);

        let mut ordered = SectionTracker::with_tie_break(SECTIONS, TieBreak::DocumentOrder);
        assert_eq!(ordered.recompute(&bounds, first), Some("experience"));
        assert_eq!(ordered.recompute(&bounds, second), Some("experience"));

        let mut latest = SectionTracker::new(SECTIONS);
        assert_eq!(latest.recompute(&bounds, first), Some("experience"));
        assert_eq!(latest.recompute(&bounds, second), Some("projects"));

        // scrolling experience out hands over to projects
        assert_eq!(ordered.recompute(&bounds, Rect::new(350.0, 800.0)), Some("projects"));
    }

    #[test]
    fn missing_sections_are_not_active() {
        let mut tracker = SectionTracker::new(SECTIONS);
        let bounds = layout(&[("contact", 5000.0, 400.0)]);

        assert_eq!(tracker.recompute(&bounds, Rect::new(0.0, 800.0)), None);
    }

    #[test]
    fn top_button_threshold() {
        assert!(!show_top_button(0.0));
        assert!(!show_top_button(TOP_BUTTON_THRESHOLD));
        assert!(show_top_button(TOP_BUTTON_THRESHOLD + 1.0));
    }

    #[test]
    fn progress_endpoints() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
    }

    #[test]
    fn progress_degenerate_documents() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 500.0, 800.0), 0.0);
    }

    proptest! {
        #[test]
        fn progress_always_in_range(
            offset in -1e6f64..1e6,
            document in 0f64..1e6,
            viewport in 0f64..1e6,
        ) {
            let p = scroll_progress(offset, document, viewport);
            prop_assert!((0.0..=100.0).contains(&p));
        }

        #[test]
        fn active_is_last_satisfying_event(
            events in prop::collection::vec((0usize..6, 0f64..=1.0), 0..64)
        ) {
            let names = ["home", "experience", "projects", "contact", "footer", "nav"];
            let mut tracker = SectionTracker::new(SECTIONS);
            let mut expected = None;

            for (idx, ratio) in events {
                let id = names[idx];
                tracker.observe(id, ratio);
                if SECTIONS.contains(&id) && ratio >= VISIBILITY_THRESHOLD {
                    expected = Some(id);
                }
            }

            prop_assert_eq!(tracker.active(), expected);
        }
    }
}
