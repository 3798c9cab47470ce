//! Leptos Motion Utilities
//!
//! Declarative enter/exit/layout animations for Leptos using CSS transitions.
//! Components describe *what* should animate with [`MotionProps`]; a
//! [`MotionEngine`] decides *how* it runs on a DOM element.

use gloo_timers::callback::Timeout;

/// Layout offsets smaller than this are treated as "did not move"
const LAYOUT_EPSILON_PX: f64 = 0.5;

/// Easing curve for a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Material "standard" curve, `cubic-bezier(0.4, 0, 0.2, 1)`
    pub const STANDARD: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);

    pub fn to_css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// Timing of one transition, in seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub ease: Easing,
}

impl Timing {
    pub fn new(duration: f64, delay: f64, ease: Easing) -> Self {
        Self { duration, delay, ease }
    }

    /// Zero duration, zero delay: the value snaps into place
    pub fn instant() -> Self {
        Self::new(0.0, 0.0, Easing::Linear)
    }

    /// Delay plus duration
    pub fn total(&self) -> f64 {
        self.delay + self.duration
    }

    /// One entry of a CSS `transition` list, e.g.
    /// `opacity 300ms cubic-bezier(0.4, 0, 0.2, 1) 50ms`
    pub fn css_for(&self, property: &str) -> String {
        format!(
            "{} {}ms {} {}ms",
            property,
            to_millis(self.duration),
            self.ease.to_css(),
            to_millis(self.delay)
        )
    }
}

/// Seconds to whole milliseconds, clamped at zero
pub fn to_millis(seconds: f64) -> u32 {
    if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u32
    } else {
        0
    }
}

/// Animatable visual state of an element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub opacity: f64,
    pub scale: f64,
}

impl Keyframe {
    pub const VISIBLE: Keyframe = Keyframe { opacity: 1.0, scale: 1.0 };

    pub const fn new(opacity: f64, scale: f64) -> Self {
        Self { opacity, scale }
    }
}

/// Full declarative description of how one element moves
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionProps {
    /// Starting keyframe on mount; `None` means animate from whatever the
    /// element currently shows
    pub initial: Option<Keyframe>,
    pub animate: Keyframe,
    pub exit: Keyframe,
    /// Timing for opacity/scale while entering
    pub enter: Timing,
    /// Timing for opacity/scale while exiting
    pub exit_timing: Timing,
    /// Timing for position changes
    pub layout: Timing,
}

impl MotionProps {
    /// `transition` value used while entering or settled
    pub fn enter_transition(&self) -> String {
        transition_list(&self.enter, &self.layout)
    }

    /// `transition` value used while exiting
    pub fn exit_transition(&self) -> String {
        transition_list(&self.exit_timing, &self.layout)
    }

    /// Same motion for an element that is still on screen, e.g. one
    /// interrupted mid-exit: no jump to `initial`
    pub fn resumed(&self) -> Self {
        Self { initial: None, ..*self }
    }
}

/// Tracks which exit, if any, is allowed to unmount an element.
///
/// Exit timers cannot be recalled once started, so every enter and exit
/// bumps the generation and a finished exit only counts if nothing
/// happened since it began.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresenceGate {
    generation: u32,
}

impl PresenceGate {
    /// Start an exit; returns the token its completion must present
    pub fn begin_exit(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Element (re-)entered; any running exit is void
    pub fn enter(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Whether the exit that produced `token` is still the latest event
    pub fn is_current(&self, token: u32) -> bool {
        self.generation == token
    }
}

fn transition_list(visual: &Timing, layout: &Timing) -> String {
    format!(
        "{}, {}, {}",
        visual.css_for("opacity"),
        visual.css_for("scale"),
        layout.css_for("translate")
    )
}

/// Runs animations described by [`MotionProps`] on DOM elements
pub trait MotionEngine: Send + Sync {
    /// Element was just mounted (or became visible again)
    fn enter(&self, el: &web_sys::HtmlElement, props: &MotionProps);

    /// Element is leaving; `on_complete` fires once the exit has finished
    fn exit(
        &self,
        el: &web_sys::HtmlElement,
        props: &MotionProps,
        on_complete: Box<dyn FnOnce()>,
    );

    /// `apply` moves the element in the layout; the engine animates the move
    fn relayout(
        &self,
        el: &web_sys::HtmlElement,
        props: &MotionProps,
        apply: &dyn Fn(&web_sys::HtmlElement),
    );
}

/// Engine backed by CSS transitions on the individual
/// `opacity`, `scale` and `translate` properties
#[derive(Clone, Copy, Debug, Default)]
pub struct CssMotion;

impl MotionEngine for CssMotion {
    fn enter(&self, el: &web_sys::HtmlElement, props: &MotionProps) {
        match props.initial {
            Some(from) => {
                set_style(el, "transition", "none");
                write_keyframe(el, &from);
                force_reflow(el);
                set_style(el, "transition", &props.enter_transition());
                write_keyframe(el, &props.animate);
            }
            None => {
                set_style(el, "transition", &props.enter_transition());
                write_keyframe(el, &props.animate);
            }
        }
    }

    fn exit(
        &self,
        el: &web_sys::HtmlElement,
        props: &MotionProps,
        on_complete: Box<dyn FnOnce()>,
    ) {
        set_style(el, "transition", &props.exit_transition());
        write_keyframe(el, &props.exit);
        Timeout::new(to_millis(props.exit_timing.total()), on_complete).forget();
    }

    fn relayout(
        &self,
        el: &web_sys::HtmlElement,
        props: &MotionProps,
        apply: &dyn Fn(&web_sys::HtmlElement),
    ) {
        let first = el.get_bounding_client_rect();
        apply(el);
        let last = el.get_bounding_client_rect();

        let Some((dx, dy)) = layout_offset(
            (first.left(), first.top()),
            (last.left(), last.top()),
        ) else {
            return;
        };

        // Invert: jump back to the old spot without animating the translate
        let visual = props.enter.css_for("opacity") + ", " + &props.enter.css_for("scale");
        set_style(el, "transition", &format!("{}, translate 0ms linear 0ms", visual));
        set_style(el, "translate", &format!("{}px {}px", dx, dy));
        force_reflow(el);

        // Play: release to the new spot
        set_style(el, "transition", &props.enter_transition());
        set_style(el, "translate", "0px 0px");
    }
}

/// Offset from the new position back to the old one, or `None` if the
/// element did not move
pub fn layout_offset(first: (f64, f64), last: (f64, f64)) -> Option<(f64, f64)> {
    let dx = first.0 - last.0;
    let dy = first.1 - last.1;
    if dx.abs() < LAYOUT_EPSILON_PX && dy.abs() < LAYOUT_EPSILON_PX {
        None
    } else {
        Some((dx, dy))
    }
}

fn write_keyframe(el: &web_sys::HtmlElement, frame: &Keyframe) {
    set_style(el, "opacity", &frame.opacity.to_string());
    set_style(el, "scale", &frame.scale.to_string());
}

fn set_style(el: &web_sys::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Reading layout flushes pending style changes so the next write transitions
fn force_reflow(el: &web_sys::HtmlElement) {
    let _ = el.offset_width();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_css() {
        assert_eq!(Easing::STANDARD.to_css(), "cubic-bezier(0.4, 0, 0.2, 1)");
        assert_eq!(Easing::Linear.to_css(), "linear");
    }

    #[test]
    fn test_timing_css_for() {
        let t = Timing::new(0.3, 0.05, Easing::STANDARD);
        assert_eq!(t.css_for("opacity"), "opacity 300ms cubic-bezier(0.4, 0, 0.2, 1) 50ms");
        assert_eq!(Timing::instant().css_for("scale"), "scale 0ms linear 0ms");
    }

    #[test]
    fn test_to_millis_clamps() {
        assert_eq!(to_millis(0.25), 250);
        assert_eq!(to_millis(-1.0), 0);
        assert_eq!(to_millis(f64::NAN), 0);
        // 0.2 + 2 * 0.05 is not exactly 0.3 in floating point
        assert_eq!(to_millis(0.2 + 2.0 * 0.05), 300);
    }

    #[test]
    fn test_transition_lists() {
        let props = MotionProps {
            initial: Some(Keyframe::new(0.0, 0.8)),
            animate: Keyframe::VISIBLE,
            exit: Keyframe::new(0.0, 0.5),
            enter: Timing::new(0.3, 0.1, Easing::STANDARD),
            exit_timing: Timing::new(0.2, 0.0, Easing::Linear),
            layout: Timing::new(0.3, 0.25, Easing::Linear),
        };
        assert_eq!(
            props.enter_transition(),
            "opacity 300ms cubic-bezier(0.4, 0, 0.2, 1) 100ms, \
             scale 300ms cubic-bezier(0.4, 0, 0.2, 1) 100ms, \
             translate 300ms linear 250ms"
        );
        assert_eq!(
            props.exit_transition(),
            "opacity 200ms linear 0ms, scale 200ms linear 0ms, translate 300ms linear 250ms"
        );
    }

    #[test]
    fn test_resumed_drops_initial_only() {
        let props = MotionProps {
            initial: Some(Keyframe::new(0.0, 0.8)),
            animate: Keyframe::VISIBLE,
            exit: Keyframe::new(0.0, 0.5),
            enter: Timing::new(0.3, 0.05, Easing::STANDARD),
            exit_timing: Timing::new(0.2, 0.0, Easing::STANDARD),
            layout: Timing::new(0.3, 0.0, Easing::STANDARD),
        };
        let resumed = props.resumed();
        assert_eq!(resumed.initial, None);
        assert_eq!(resumed.animate, props.animate);
        assert_eq!(resumed.enter, props.enter);
        assert_eq!(resumed.enter_transition(), props.enter_transition());
    }

    #[test]
    fn test_presence_gate_single_exit() {
        let mut gate = PresenceGate::default();
        let token = gate.begin_exit();
        assert!(gate.is_current(token));
    }

    #[test]
    fn test_presence_gate_reenter_voids_exit() {
        let mut gate = PresenceGate::default();
        let token = gate.begin_exit();
        gate.enter();
        assert!(!gate.is_current(token));
    }

    #[test]
    fn test_presence_gate_collapse_expand_collapse() {
        let mut gate = PresenceGate::default();
        // collapse: first exit starts its timer
        let first = gate.begin_exit();
        // expand before that timer fires
        gate.enter();
        // collapse again: second exit
        let second = gate.begin_exit();

        // first timer fires mid-way through the second exit
        assert!(!gate.is_current(first));
        // second timer fires at the end of its own exit
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_layout_offset() {
        assert_eq!(layout_offset((10.0, 20.0), (10.2, 19.9)), None);
        assert_eq!(layout_offset((300.0, 0.0), (100.0, 0.0)), Some((200.0, 0.0)));
        assert_eq!(layout_offset((0.0, 266.0), (532.0, 0.0)), Some((-532.0, 266.0)));
    }
}
