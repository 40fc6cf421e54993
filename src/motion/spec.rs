use std::collections::BTreeMap;
use std::fmt::Write;

use crate::config::{DEFAULT_DURATION_SECS, DEFAULT_EASING};

/// Visual properties an entrance or exit transition can interpolate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Property {
    Opacity,
    X,
    Y,
    Scale,
    LetterSpacing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Px(f64),
    Percent(f64),
}

impl Value {
    fn css(&self) -> String {
        match self {
            Value::Number(n) => format!("{}", n),
            Value::Px(n) => format!("{}px", n),
            Value::Percent(n) => format!("{}%", n),
        }
    }
}

/// A set of property values an element sits at, either before or after its
/// transition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualState(BTreeMap<Property, Value>);

impl VisualState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: Property, value: Value) -> Self {
        self.0.insert(property, value);
        self
    }

    pub fn opacity(self, value: f64) -> Self {
        self.with(Property::Opacity, Value::Number(value))
    }

    pub fn x(self, value: Value) -> Self {
        self.with(Property::X, value)
    }

    pub fn y(self, value: Value) -> Self {
        self.with(Property::Y, value)
    }

    pub fn scale(self, value: f64) -> Self {
        self.with(Property::Scale, Value::Number(value))
    }

    pub fn letter_spacing(self, px: f64) -> Self {
        self.with(Property::LetterSpacing, Value::Px(px))
    }

    /// Inline CSS declarations for this state. Translations and scale are
    /// folded into a single `transform`.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        let mut transform = Vec::new();

        for (property, value) in &self.0 {
            match property {
                Property::Opacity => {
                    let _ = write!(css, "opacity: {};", value.css());
                }
                Property::LetterSpacing => {
                    let _ = write!(css, "letter-spacing: {};", value.css());
                }
                Property::X => transform.push(format!("translateX({})", value.css())),
                Property::Y => transform.push(format!("translateY({})", value.css())),
                Property::Scale => transform.push(format!("scale({})", value.css())),
            }
        }

        if !transform.is_empty() {
            let _ = write!(css, "transform: {};", transform.join(" "));
        }
        css
    }

    fn css_properties(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        for property in self.0.keys() {
            let name = match property {
                Property::Opacity => "opacity",
                Property::LetterSpacing => "letter-spacing",
                Property::X | Property::Y | Property::Scale => "transform",
            };
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    pub fn to_css(&self) -> String {
        match self {
            Easing::EaseOut => "ease-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    OnMount,
    OnViewportEnter,
}

/// Declarative description of one element's entrance (and optional exit).
/// Every animated element owns its own spec, even when the numbers match a
/// sibling's.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSpec {
    pub initial: VisualState,
    pub target: VisualState,
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub easing: Easing,
    pub trigger: Trigger,
    /// `false` means only the first viewport entry plays.
    pub repeat: bool,
    /// Reverse to `initial` when the owning presence is removed.
    pub exit: bool,
}

impl AnimationSpec {
    pub fn on_mount(initial: VisualState, target: VisualState) -> Self {
        Self::new(Trigger::OnMount, initial, target)
    }

    pub fn on_viewport_enter(initial: VisualState, target: VisualState) -> Self {
        Self::new(Trigger::OnViewportEnter, initial, target)
    }

    fn new(trigger: Trigger, initial: VisualState, target: VisualState) -> Self {
        Self {
            initial,
            target,
            duration_secs: DEFAULT_DURATION_SECS,
            delay_secs: 0.0,
            easing: DEFAULT_EASING,
            trigger,
            repeat: false,
            exit: false,
        }
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }

    pub fn delay(mut self, secs: f64) -> Self {
        self.delay_secs = secs;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    /// How long an exit takes before the element may leave the render tree.
    /// Exits never wait on the entrance delay.
    pub fn exit_millis(&self) -> u32 {
        (self.duration_secs * 1000.0).round().max(0.0) as u32
    }

    /// `transition` declaration for moving towards the target state.
    pub fn enter_transition(&self) -> String {
        self.transition_css(self.delay_secs)
    }

    /// `transition` declaration for moving back to the initial state.
    pub fn exit_transition(&self) -> String {
        self.transition_css(0.0)
    }

    fn transition_css(&self, delay_secs: f64) -> String {
        let mut properties = self.initial.css_properties();
        for name in self.target.css_properties() {
            if !properties.contains(&name) {
                properties.push(name);
            }
        }
        if properties.is_empty() {
            return String::new();
        }

        let easing = self.easing.to_css();
        let parts: Vec<String> = properties
            .iter()
            .map(|name| format!("{} {}s {} {}s", name, self.duration_secs, easing, delay_secs))
            .collect();
        format!("transition: {};", parts.join(", "))
    }
}

/// Delay for the `index`th sibling in a staggered group.
pub fn stagger(base_secs: f64, step_secs: f64, index: usize) -> f64 {
    base_secs + step_secs * index as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_is_folded() {
        let state = VisualState::new()
            .opacity(0.0)
            .x(Value::Percent(100.0))
            .y(Value::Px(20.0));
        assert_eq!(
            state.to_css(),
            "opacity: 0;transform: translateX(100%) translateY(20px);"
        );
    }

    #[test]
    fn test_letter_spacing_css() {
        let state = VisualState::new().letter_spacing(20.0);
        assert_eq!(state.to_css(), "letter-spacing: 20px;");
    }

    #[test]
    fn test_transition_lists_each_css_property_once() {
        let spec = AnimationSpec::on_mount(
            VisualState::new().opacity(0.0).x(Value::Percent(100.0)).y(Value::Px(4.0)),
            VisualState::new().opacity(1.0).x(Value::Px(0.0)).y(Value::Px(0.0)),
        )
        .duration(0.6)
        .delay(0.3)
        .easing(Easing::CubicBezier(0.16, 1.0, 0.3, 1.0));

        assert_eq!(
            spec.enter_transition(),
            "transition: opacity 0.6s cubic-bezier(0.16, 1, 0.3, 1) 0.3s, \
             transform 0.6s cubic-bezier(0.16, 1, 0.3, 1) 0.3s;"
        );
        assert!(spec.exit_transition().ends_with("0s;"));
    }

    #[test]
    fn test_defaults() {
        let spec = AnimationSpec::on_viewport_enter(
            VisualState::new().opacity(0.0),
            VisualState::new().opacity(1.0),
        );
        assert_eq!(spec.trigger, Trigger::OnViewportEnter);
        assert!(!spec.repeat);
        assert!(!spec.exit);
        assert_eq!(spec.duration_secs, DEFAULT_DURATION_SECS);
        assert_eq!(spec.delay_secs, 0.0);
    }

    #[test]
    fn test_exit_millis_ignores_delay() {
        let spec = AnimationSpec::on_mount(VisualState::new(), VisualState::new())
            .duration(0.6)
            .delay(2.0);
        assert_eq!(spec.exit_millis(), 600);
    }

    #[test]
    fn test_stagger() {
        let delays: Vec<f64> = (0..3).map(|i| stagger(0.0, 0.2, i)).collect();
        assert_eq!(delays[0], 0.0);
        assert!((delays[2] - 0.4).abs() < 1e-9);
        assert!((stagger(0.3, 0.1, 4) - 0.7).abs() < 1e-9);
    }
}
