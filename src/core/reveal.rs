//! One-shot reveal-on-scroll state
//!
//! A wrapped region starts `Unseen` and becomes `Seen` the first time the
//! platform reports it intersecting the viewport. The threshold is handed to
//! the platform observer, which decides when a crossing counts; the reported
//! ratio is not compared again here. `Seen` is absorbing: later reports never
//! hide the region again.
//!
//! The platform primitive (IntersectionObserver in the browser) sits behind
//! [`VisibilityObserver`] so the lifecycle can be driven without a browser.

use std::cell::RefCell;
use std::rc::Rc;

/// Default fraction of the region that has to be on screen.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Classes shared by both reveal states.
pub const REVEAL_TRANSITION: &str = "transition-all duration-1000 ease-out";
/// Hidden state: transparent and pushed down.
pub const REVEAL_HIDDEN: &str = "opacity-0 translate-y-12";
/// Visible state: opaque and in place.
pub const REVEAL_VISIBLE: &str = "opacity-100 translate-y-0";

/// Reveal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Unseen,
    Seen,
}

/// Reveal configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the region's area that must be visible, in `[0, 1]`
    pub threshold: f64,
    /// Transition start offset. Does not delay the state change itself.
    pub delay_ms: u32,
}

impl RevealOptions {
    pub fn new(threshold: f64, delay_ms: u32) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            delay_ms,
        }
    }

    /// Inline style applying the delay to the CSS transition.
    pub fn transition_style(&self) -> String {
        format!("transition-delay: {}ms", self.delay_ms)
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, 0)
    }
}

/// One visibility report for the observed region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    /// Visible fraction of the region
    pub ratio: f64,
}

impl Visibility {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }
}

/// `Unseen -> Seen` state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reveal {
    phase: RevealPhase,
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == RevealPhase::Seen
    }

    /// Feed one report. Returns `true` only on the report that flips the state.
    pub fn observe(&mut self, visibility: Visibility) -> bool {
        if self.phase == RevealPhase::Seen {
            return false;
        }
        // Observers may report a crossing with a ratio a hair under the
        // registered threshold and then stay silent, so the flag alone decides
        if visibility.is_intersecting {
            self.phase = RevealPhase::Seen;
            return true;
        }
        false
    }

    /// Skip straight to `Seen`. Used when the platform cannot observe.
    pub fn force_visible(&mut self) {
        self.phase = RevealPhase::Seen;
    }
}

/// Subscription to platform visibility reports for one region.
pub trait VisibilityObserver {
    /// Stop reporting on the region.
    fn unobserve(&mut self);
    /// Release the observer and its callback.
    fn disconnect(&mut self);
}

/// Drives a [`Reveal`] from an observer and owns that observer's lifetime.
///
/// - `unobserve` is called once, on the report that reveals the region
/// - `disconnect` is called once, on [`RevealWatch::stop`] or drop, whether or not the region was revealed
/// - without an observer the region is visible from the start
pub struct RevealWatch<O: VisibilityObserver> {
    reveal: Reveal,
    observer: Option<O>,
}

impl<O: VisibilityObserver> RevealWatch<O> {
    pub fn start(observer: Option<O>) -> Self {
        let mut reveal = Reveal::new();
        if observer.is_none() {
            tracing::debug!("Visibility observation unavailable, revealing immediately");
            reveal.force_visible();
        }
        Self { reveal, observer }
    }

    pub fn is_visible(&self) -> bool {
        self.reveal.is_visible()
    }

    /// Handle a report. Returns `true` if this report revealed the region.
    pub fn on_visibility(&mut self, visibility: Visibility) -> bool {
        let flipped = self.reveal.observe(visibility);
        if flipped {
            if let Some(observer) = self.observer.as_mut() {
                observer.unobserve();
            }
        }
        flipped
    }

    /// Disconnect the observer. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl<O: VisibilityObserver> Drop for RevealWatch<O> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The watch of one mounted region, shared by the mount hook, the observer
/// callback and the cleanup.
///
/// Releasing the slot drops the watch, which disconnects the observer and
/// breaks the reference cycle through the callback.
pub struct RevealSlot<O: VisibilityObserver>(Rc<RefCell<Option<RevealWatch<O>>>>);

impl<O: VisibilityObserver> Clone for RevealSlot<O> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<O: VisibilityObserver> Default for RevealSlot<O> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<O: VisibilityObserver> RevealSlot<O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// Start watching unless already attached. Returns `true` if the region
    /// must be shown right away (no observer).
    pub fn attach(&self, observer: Option<O>) -> bool {
        let mut slot = self.0.borrow_mut();
        if slot.is_some() {
            return false;
        }
        let watch = RevealWatch::start(observer);
        let visible = watch.is_visible();
        *slot = Some(watch);
        visible
    }

    /// Forward a report. Reports after release are ignored.
    pub fn report(&self, visibility: Visibility) -> bool {
        self.0
            .borrow_mut()
            .as_mut()
            .is_some_and(|watch| watch.on_visibility(visibility))
    }

    pub fn release(&self) {
        let watch = self.0.borrow_mut().take();
        drop(watch);
    }
}

/// Full class list for a revealed or hidden region.
pub fn reveal_classes(visible: bool, extra: &str) -> String {
    let state = if visible { REVEAL_VISIBLE } else { REVEAL_HIDDEN };
    if extra.is_empty() {
        format!("{} {}", REVEAL_TRANSITION, state)
    } else {
        format!("{} {} {}", REVEAL_TRANSITION, state, extra)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StubObserver;
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, DEFAULT_THRESHOLD);
        assert_eq!(options.delay_ms, 0);
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealOptions::new(1.5, 0).threshold, 1.0);
        assert_eq!(RevealOptions::new(-0.2, 0).threshold, 0.0);
        assert_eq!(RevealOptions::new(f64::NAN, 0).threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_transition_style() {
        assert_eq!(
            RevealOptions::new(0.1, 200).transition_style(),
            "transition-delay: 200ms"
        );
    }

    #[test]
    fn test_intersection_just_under_threshold_reveals() {
        let mut watch = RevealWatch::start(Some(StubObserver::default()));
        assert!(watch.on_visibility(Visibility::new(true, 0.0499)));
        assert!(watch.is_visible());
    }

    #[test]
    fn test_non_intersecting_report_does_not_reveal() {
        let mut reveal = Reveal::new();
        assert!(!reveal.observe(Visibility::new(false, 0.0)));
        assert!(!reveal.is_visible());
    }

    #[test]
    fn test_any_intersection_reveals() {
        let mut reveal = Reveal::new();
        assert!(reveal.observe(Visibility::new(true, 0.0)));
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_seen_is_absorbing() {
        let mut reveal = Reveal::new();
        assert!(reveal.observe(Visibility::new(true, 0.3)));
        assert!(!reveal.observe(Visibility::new(true, 0.9)));
        assert!(!reveal.observe(Visibility::new(false, 0.0)));
        assert_eq!(reveal.phase(), RevealPhase::Seen);
    }

    #[test]
    fn test_watch_unobserves_once_on_reveal() {
        let observer = StubObserver::default();
        let log = observer.log.clone();
        let mut watch = RevealWatch::start(Some(observer));

        assert!(!watch.on_visibility(Visibility::new(false, 0.0)));
        assert_eq!(log.unobserved.get(), 0);

        assert!(watch.on_visibility(Visibility::new(true, 0.4)));
        assert!(!watch.on_visibility(Visibility::new(true, 1.0)));
        assert_eq!(log.unobserved.get(), 1);
        assert_eq!(log.disconnected.get(), 0);
    }

    #[test]
    fn test_watch_disconnects_once_even_if_never_revealed() {
        let observer = StubObserver::default();
        let log = observer.log.clone();
        {
            let mut watch = RevealWatch::start(Some(observer));
            watch.stop();
            watch.stop();
            assert!(!watch.is_visible());
        }
        assert_eq!(log.disconnected.get(), 1);
        assert_eq!(log.unobserved.get(), 0);
    }

    #[test]
    fn test_watch_disconnects_on_drop() {
        let observer = StubObserver::default();
        let log = observer.log.clone();
        drop(RevealWatch::start(Some(observer)));
        assert_eq!(log.disconnected.get(), 1);
    }

    #[test]
    fn test_missing_observer_reveals_immediately() {
        let watch = RevealWatch::<StubObserver>::start(None);
        assert!(watch.is_visible());
    }

    #[test]
    fn test_slot_attaches_once() {
        let slot = RevealSlot::new();
        let first = StubObserver::default();
        let second = StubObserver::default();
        let second_log = second.log.clone();

        assert!(!slot.attach(Some(first)));
        assert!(slot.is_attached());
        assert!(!slot.attach(Some(second)));

        assert!(slot.report(Visibility::new(true, 0.3)));
        assert!(!slot.report(Visibility::new(true, 0.6)));

        // The rejected observer is dropped without being driven
        assert_eq!(second_log.unobserved.get(), 0);
        assert_eq!(second_log.disconnected.get(), 0);
    }

    #[test]
    fn test_slot_without_observer_is_visible_at_once() {
        let slot = RevealSlot::<StubObserver>::new();
        assert!(slot.attach(None));
        assert!(!slot.report(Visibility::new(true, 1.0)));
    }

    #[test]
    fn test_slot_release_disconnects_and_ignores_late_reports() {
        let slot = RevealSlot::new();
        let callback_slot = slot.clone();
        let observer = StubObserver::default();
        let log = observer.log.clone();
        slot.attach(Some(observer));

        slot.release();
        slot.release();

        assert_eq!(log.disconnected.get(), 1);
        assert!(!slot.is_attached());
        assert!(!callback_slot.report(Visibility::new(true, 0.5)));
        assert_eq!(log.unobserved.get(), 0);
    }

    #[test]
    fn test_reveal_classes() {
        assert_eq!(
            reveal_classes(false, ""),
            "transition-all duration-1000 ease-out opacity-0 translate-y-12"
        );
        assert_eq!(
            reveal_classes(true, "text-center"),
            "transition-all duration-1000 ease-out opacity-100 translate-y-0 text-center"
        );
    }
}
