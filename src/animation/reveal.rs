use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use super::options::RevealOptions;
use super::plugin;
use super::viewport::{crosses_threshold, ViewportObserver};

/// Anything whose inline style can be driven by a reveal.
pub trait RevealTarget {
    fn set_style(&self, property: &str, value: &str);
    fn clear_style(&self, property: &str);
}

impl RevealTarget for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.style().set_property(property, value) {
            warn!("Failed to set {} on reveal target: {:?}", property, e);
        }
    }

    fn clear_style(&self, property: &str) {
        let _ = self.style().remove_property(property);
    }
}

const TOUCHED_PROPERTIES: [&str; 4] = ["opacity", "transform", "transition", "will-change"];

/// One-shot reveal of an ordered group of targets.
///
/// Targets are put in their hidden state on construction. The first time the trigger
/// crosses the threshold every target transitions to identity transform and full
/// opacity, each starting `stagger` later than the one before. After that, or after
/// `release`, the reveal ignores further trigger positions. Once the last transition
/// has run, `settle` hands the targets back to their stylesheet.
pub struct Reveal<T: RevealTarget> {
    targets: Vec<T>,
    options: RevealOptions,
    fired: bool,
    released: bool,
}

impl<T: RevealTarget> Reveal<T> {
    pub fn new(targets: Vec<T>, options: RevealOptions) -> Self {
        let hidden = options.hidden_transform();
        for target in &targets {
            target.set_style("opacity", "0");
            target.set_style("transform", &hidden);
            target.set_style("will-change", "opacity, transform");
        }
        Self {
            targets,
            options,
            fired: false,
            released: false,
        }
    }

    /// Returns true only on the call that starts the animation.
    pub fn on_trigger(&mut self, trigger_top: f64, viewport_height: f64) -> bool {
        if self.fired || self.released || self.targets.is_empty() {
            return false;
        }
        if !crosses_threshold(trigger_top, viewport_height, self.options.viewport_threshold) {
            return false;
        }

        for (index, target) in self.targets.iter().enumerate() {
            target.set_style("transition", &self.options.transition(index));
            target.set_style("opacity", "1");
            target.set_style("transform", "none");
        }
        self.fired = true;
        true
    }

    /// Milliseconds from firing until the last target has finished moving.
    pub fn settle_after_ms(&self) -> u32 {
        let last = self.targets.len().saturating_sub(1);
        ((self.options.start_delay(last) + self.options.duration_seconds) * 1000.0).round() as u32
    }

    /// Clears the inline styles of a finished reveal so hover transitions and
    /// transforms from the stylesheet apply again. The resting state of every
    /// touched property is the stylesheet's own, so nothing moves.
    pub fn settle(&mut self) {
        if !self.fired || self.released {
            return;
        }
        self.clear_inline();
    }

    /// Drops every inline style the reveal wrote, stopping any transition mid-flight.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.clear_inline();
    }

    fn clear_inline(&self) {
        for target in &self.targets {
            for property in TOUCHED_PROPERTIES {
                target.clear_style(property);
            }
        }
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

/// A reveal wired to the viewport through its trigger element.
pub struct RevealBinding {
    reveal: Option<Rc<RefCell<Reveal<HtmlElement>>>>,
    observer: Option<ViewportObserver>,
    settle_timer: Rc<RefCell<Option<Timeout>>>,
}

impl RevealBinding {
    fn inert() -> Self {
        Self {
            reveal: None,
            observer: None,
            settle_timer: Rc::new(RefCell::new(None)),
        }
    }

    /// Never fails. A missing trigger, an empty target list or a browser without
    /// intersection observers gives an inert binding.
    pub fn bind(trigger: Option<&Element>, targets: Vec<HtmlElement>, options: RevealOptions) -> Self {
        let Some(trigger) = trigger else {
            debug!("Reveal trigger not mounted, skipping");
            return Self::inert();
        };
        if targets.is_empty() || !plugin::register() {
            return Self::inert();
        }

        let threshold = options.viewport_threshold;
        let reveal = Rc::new(RefCell::new(Reveal::new(targets, options)));
        let weak = Rc::downgrade(&reveal);
        let settle_timer = Rc::new(RefCell::new(None));

        let timer_slot = Rc::clone(&settle_timer);
        let observer = ViewportObserver::observe(trigger, threshold, move |top, height| {
            let Some(reveal) = weak.upgrade() else {
                return false;
            };
            let mut reveal = reveal.borrow_mut();
            if reveal.on_trigger(top, height) {
                debug!("Reveal fired at top={} viewport={}", top, height);
                let weak = weak.clone();
                let settle = Timeout::new(reveal.settle_after_ms(), move || {
                    if let Some(reveal) = weak.upgrade() {
                        reveal.borrow_mut().settle();
                    }
                });
                *timer_slot.borrow_mut() = Some(settle);
            }
            !reveal.is_fired() && !reveal.is_released()
        });

        if observer.is_none() {
            reveal.borrow_mut().release();
        }

        Self {
            reveal: Some(reveal),
            observer,
            settle_timer,
        }
    }

    /// Detaches the observer, cancels a pending settle and reverts the targets. Idempotent.
    pub fn unbind(&mut self) {
        self.settle_timer.borrow_mut().take();
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
        if let Some(reveal) = self.reveal.take() {
            reveal.borrow_mut().release();
        }
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.unbind();
    }
}

/// Which elements animate when the observed node crosses the threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealScope {
    /// The observed node itself.
    Element,
    /// Each direct child of the observed node, staggered in document order.
    Children,
}

fn collect_targets(trigger: &Element, scope: RevealScope) -> Vec<HtmlElement> {
    match scope {
        RevealScope::Element => trigger.clone().dyn_into::<HtmlElement>().into_iter().collect(),
        RevealScope::Children => {
            let children = trigger.children();
            (0..children.length())
                .filter_map(|i| children.item(i))
                .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
                .collect()
        }
    }
}

/// Binds a reveal when the component mounts and unbinds it when it unmounts.
#[hook]
pub fn use_reveal(node: NodeRef, scope: RevealScope, options: RevealOptions) {
    use_effect_with_deps(
        move |(node, scope, options)| {
            let trigger = node.cast::<Element>();
            let targets = trigger
                .as_ref()
                .map(|t| collect_targets(t, *scope))
                .unwrap_or_default();
            let mut binding = RevealBinding::bind(trigger.as_ref(), targets, options.clone());
            move || binding.unbind()
        },
        (node, scope, options),
    );
}

#[derive(Properties, PartialEq)]
pub struct RevealItemProps {
    pub options: RevealOptions,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper giving a single list item its own reveal binding.
#[function_component(RevealItem)]
pub fn reveal_item(props: &RevealItemProps) -> Html {
    let node = use_node_ref();
    use_reveal(node.clone(), RevealScope::Element, props.options.clone());

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Clone, Default)]
    struct FakeTarget {
        styles: Rc<RefCell<HashMap<String, String>>>,
        writes: Rc<RefCell<usize>>,
    }

    impl FakeTarget {
        fn get(&self, property: &str) -> Option<String> {
            self.styles.borrow().get(property).cloned()
        }
    }

    impl RevealTarget for FakeTarget {
        fn set_style(&self, property: &str, value: &str) {
            *self.writes.borrow_mut() += 1;
            self.styles.borrow_mut().insert(property.to_string(), value.to_string());
        }

        fn clear_style(&self, property: &str) {
            self.styles.borrow_mut().remove(property);
        }
    }

    fn staggered() -> RevealOptions {
        RevealOptions::rise(60.0).with_stagger(0.2)
    }

    #[test]
    fn targets_start_hidden() {
        let target = FakeTarget::default();
        let _reveal = Reveal::new(vec![target.clone()], staggered());
        assert_eq!(target.get("opacity").as_deref(), Some("0"));
        assert_eq!(
            target.get("transform").as_deref(),
            Some("translate3d(0px, 60px, 0px) scale(1)")
        );
    }

    #[test]
    fn waits_for_threshold() {
        let target = FakeTarget::default();
        let mut reveal = Reveal::new(vec![target.clone()], staggered());
        assert!(!reveal.on_trigger(900.0, 1000.0));
        assert!(!reveal.is_fired());
        assert_eq!(target.get("opacity").as_deref(), Some("0"));

        assert!(reveal.on_trigger(780.0, 1000.0));
        assert!(reveal.is_fired());
        assert_eq!(target.get("opacity").as_deref(), Some("1"));
        assert_eq!(target.get("transform").as_deref(), Some("none"));
    }

    #[test]
    fn honours_custom_threshold() {
        let target = FakeTarget::default();
        let mut reveal = Reveal::new(vec![target], RevealOptions::rise(80.0).with_threshold(0.85));
        assert!(!reveal.on_trigger(851.0, 1000.0));
        assert!(reveal.on_trigger(840.0, 1000.0));
    }

    #[test]
    fn fires_at_most_once() {
        let target = FakeTarget::default();
        let mut reveal = Reveal::new(vec![target.clone()], staggered());
        assert!(reveal.on_trigger(100.0, 1000.0));
        let writes_after_first = *target.writes.borrow();

        // scroll away and back
        assert!(!reveal.on_trigger(1200.0, 1000.0));
        assert!(!reveal.on_trigger(100.0, 1000.0));
        assert_eq!(*target.writes.borrow(), writes_after_first);
    }

    #[test]
    fn staggers_in_order() {
        let targets: Vec<FakeTarget> = (0..3).map(|_| FakeTarget::default()).collect();
        let mut reveal = Reveal::new(targets.clone(), staggered());
        reveal.on_trigger(0.0, 1000.0);

        let transitions: Vec<String> = targets
            .iter()
            .map(|t| t.get("transition").unwrap_or_default())
            .collect();
        assert!(transitions[0].ends_with(" 0s"));
        assert!(transitions[1].ends_with(" 0.2s"));
        assert!(transitions[2].ends_with(" 0.4s"));
    }

    #[test]
    fn empty_targets_never_fire() {
        let mut reveal: Reveal<FakeTarget> = Reveal::new(Vec::new(), staggered());
        assert!(!reveal.on_trigger(0.0, 1000.0));
        assert!(!reveal.is_fired());
    }

    #[test]
    fn release_reverts_and_disarms() {
        let target = FakeTarget::default();
        let mut reveal = Reveal::new(vec![target.clone()], staggered());
        reveal.release();
        reveal.release();
        assert!(reveal.is_released());
        assert!(target.styles.borrow().is_empty());
        assert!(!reveal.on_trigger(0.0, 1000.0));
        assert!(!reveal.is_fired());
    }

    #[test]
    fn settled_reveal_leaves_no_inline_styles() {
        let targets: Vec<FakeTarget> = (0..6).map(|_| FakeTarget::default()).collect();
        let mut reveal = Reveal::new(targets.clone(), RevealOptions::rise(40.0).with_stagger(0.15));
        assert!(reveal.on_trigger(0.0, 1000.0));
        assert_eq!(reveal.settle_after_ms(), 1550);

        reveal.settle();
        for (index, target) in targets.iter().enumerate() {
            for property in ["transition", "transform", "will-change", "opacity"] {
                assert_eq!(target.get(property), None, "target {} kept {}", index, property);
            }
        }
        assert!(reveal.is_fired());
        assert!(!reveal.on_trigger(0.0, 1000.0));
    }

    #[test]
    fn settle_before_firing_keeps_targets_hidden() {
        let target = FakeTarget::default();
        let mut reveal = Reveal::new(vec![target.clone()], staggered());
        reveal.settle();
        assert_eq!(target.get("opacity").as_deref(), Some("0"));
        assert!(target.get("transform").is_some());
    }

    #[test]
    fn single_target_settles_after_its_duration() {
        let reveal = Reveal::new(vec![FakeTarget::default()], RevealOptions::rise(80.0).with_duration(1.0));
        assert_eq!(reveal.settle_after_ms(), 1000);
    }

    #[test]
    fn missing_trigger_binds_nothing() {
        let mut binding = RevealBinding::bind(None, Vec::new(), RevealOptions::default());
        assert!(binding.reveal.is_none());
        assert!(binding.observer.is_none());
        assert!(binding.settle_timer.borrow().is_none());

        binding.unbind();
        binding.unbind();
        assert!(binding.reveal.is_none());
    }

    #[test]
    fn release_cancels_in_flight_transition() {
        let target = FakeTarget::default();
        let mut reveal = Reveal::new(vec![target.clone()], staggered());
        reveal.on_trigger(0.0, 1000.0);
        assert!(target.get("transition").is_some());
        reveal.release();
        assert_eq!(target.get("transition"), None);
        assert_eq!(target.get("opacity"), None);
    }
}
