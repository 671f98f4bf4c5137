use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// Browsers report ratios a hair under the threshold they fired for
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    BecameVisible,
    BecameHidden,
}

/// Visible/hidden flag for one widget, reporting only actual flips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityTracker {
    visible: bool,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn observe(&mut self, visible: bool) -> Option<Transition> {
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(if visible {
            Transition::BecameVisible
        } else {
            Transition::BecameHidden
        })
    }
}

pub fn crosses_threshold(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio + RATIO_TOLERANCE >= threshold
}

/// Owns a browser `IntersectionObserver` watching one element.
/// Dropping it disconnects the observer, so no callback fires afterwards.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe(
        target: &Element,
        threshold: f64,
        on_change: impl Fn(bool) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(crosses_threshold(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    threshold,
                ));
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("Could not create IntersectionObserver: {:?}", e);
                return None;
            }
        };
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Latches the first sighting of an element. After that nothing needs
/// observing any more.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn wants_observer(&self) -> bool {
        !self.revealed
    }

    pub fn observe(&mut self, visible: bool) -> Option<Transition> {
        if self.revealed || !visible {
            return None;
        }
        self.revealed = true;
        Some(Transition::BecameVisible)
    }
}

/// True once the element behind `node` has been on screen. The observer is
/// dropped as soon as that happens. Stays `false` forever if the ref is
/// never attached to an element.
#[hook]
pub fn use_revealed(node: NodeRef, threshold: f64) -> bool {
    let latch = use_state_eq(RevealLatch::default);

    {
        let latch = latch.clone();
        let watching = latch.wants_observer();
        use_effect_with_deps(
            move |(node, watching): &(NodeRef, bool)| {
                let observer = if !*watching {
                    None
                } else {
                    match node.cast::<Element>() {
                        Some(element) => VisibilityObserver::observe(&element, threshold, move |visible| {
                            let mut next = *latch;
                            if next.observe(visible).is_some() {
                                latch.set(next);
                            }
                        }),
                        None => {
                            log::debug!("Reveal target not mounted, skipping observer");
                            None
                        }
                    }
                };

                move || drop(observer)
            },
            (node, watching),
        );
    }

    latch.is_revealed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!VisibilityTracker::new().is_visible());
    }

    #[test]
    fn reports_only_real_flips() {
        let mut tracker = VisibilityTracker::new();
        assert_eq!(tracker.observe(false), None);
        assert_eq!(tracker.observe(true), Some(Transition::BecameVisible));
        assert_eq!(tracker.observe(true), None);
        assert_eq!(tracker.observe(false), Some(Transition::BecameHidden));
        assert_eq!(tracker.observe(false), None);
        assert!(!tracker.is_visible());
    }

    #[test]
    fn latch_reveals_once_then_stops_watching() {
        let mut latch = RevealLatch::default();
        assert!(latch.wants_observer());
        assert_eq!(latch.observe(false), None);
        assert!(latch.wants_observer());

        assert_eq!(latch.observe(true), Some(Transition::BecameVisible));
        assert!(latch.is_revealed());
        assert!(!latch.wants_observer());

        assert_eq!(latch.observe(false), None);
        assert_eq!(latch.observe(true), None);
        assert!(latch.is_revealed());
    }

    #[test]
    fn threshold_applies_both_ways() {
        assert!(crosses_threshold(true, 0.5, 0.5));
        assert!(crosses_threshold(true, 0.4995, 0.5));
        assert!(crosses_threshold(true, 0.9, 0.5));
        assert!(!crosses_threshold(true, 0.3, 0.5));
        assert!(!crosses_threshold(false, 0.0, 0.5));
        assert!(crosses_threshold(true, 0.0, 0.0));
    }
}
