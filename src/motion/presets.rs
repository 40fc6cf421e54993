//! The page's animation parameters, one constructor per animated element.
//! Each call returns a fresh spec; siblings never share one.

use super::spec::{stagger, AnimationSpec, Value, VisualState};
use crate::config::SIGNATURE_CURVE;

fn hidden() -> VisualState {
    VisualState::new().opacity(0.0)
}

fn shown() -> VisualState {
    VisualState::new().opacity(1.0)
}

pub fn nav_entrance() -> AnimationSpec {
    AnimationSpec::on_mount(
        VisualState::new().y(Value::Px(-100.0)),
        VisualState::new().y(Value::Px(0.0)),
    )
    .duration(0.8)
    .easing(SIGNATURE_CURVE)
}

pub fn mobile_overlay() -> AnimationSpec {
    AnimationSpec::on_mount(
        hidden().x(Value::Percent(100.0)),
        shown().x(Value::Px(0.0)),
    )
    .duration(0.6)
    .easing(SIGNATURE_CURVE)
    .with_exit()
}

pub fn mobile_link(index: usize) -> AnimationSpec {
    AnimationSpec::on_mount(hidden().y(Value::Px(20.0)), shown().y(Value::Px(0.0)))
        .delay(stagger(0.3, 0.1, index))
}

pub fn hero_eyebrow() -> AnimationSpec {
    AnimationSpec::on_mount(hidden().letter_spacing(20.0), shown().letter_spacing(5.0)).duration(1.5)
}

pub fn hero_title() -> AnimationSpec {
    AnimationSpec::on_mount(hidden().y(Value::Px(50.0)), shown().y(Value::Px(0.0)))
        .duration(1.2)
        .delay(0.5)
}

pub fn hero_artist() -> AnimationSpec {
    AnimationSpec::on_mount(hidden(), shown()).delay(0.8)
}

pub fn hero_actions() -> AnimationSpec {
    AnimationSpec::on_mount(hidden(), shown()).delay(1.2)
}

/// Fade up once when scrolled into view.
pub fn reveal_up(delay_secs: f64) -> AnimationSpec {
    AnimationSpec::on_viewport_enter(hidden().y(Value::Px(30.0)), shown().y(Value::Px(0.0)))
        .delay(delay_secs)
}

pub fn service_card(index: usize) -> AnimationSpec {
    reveal_up(stagger(0.0, 0.2, index))
}

/// Slide in horizontally once when scrolled into view. Negative offsets come
/// from the left.
pub fn reveal_side(offset_px: f64) -> AnimationSpec {
    AnimationSpec::on_viewport_enter(hidden().x(Value::Px(offset_px)), shown().x(Value::Px(0.0)))
}

pub fn floating_action() -> AnimationSpec {
    AnimationSpec::on_mount(VisualState::new().scale(0.0), VisualState::new().scale(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Trigger;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mobile_links_stagger_from_base() {
        let delays: Vec<f64> = (0..5).map(|i| mobile_link(i).delay_secs).collect();
        for (i, delay) in delays.iter().enumerate() {
            assert!(close(*delay, 0.3 + 0.1 * i as f64));
        }
    }

    #[test]
    fn test_service_cards_stagger() {
        assert!(close(service_card(0).delay_secs, 0.0));
        assert!(close(service_card(1).delay_secs, 0.2));
        assert!(close(service_card(2).delay_secs, 0.4));
        assert!(!service_card(1).repeat);
        assert_eq!(service_card(1).trigger, Trigger::OnViewportEnter);
    }

    #[test]
    fn test_only_overlay_has_exit() {
        assert!(mobile_overlay().exit);
        assert!(!nav_entrance().exit);
        assert!(!mobile_link(0).exit);
        assert_eq!(mobile_overlay().exit_millis(), 600);
    }

    #[test]
    fn test_nav_slides_down_on_mount() {
        let spec = nav_entrance();
        assert_eq!(spec.trigger, Trigger::OnMount);
        assert_eq!(spec.initial.to_css(), "transform: translateY(-100px);");
        assert_eq!(spec.target.to_css(), "transform: translateY(0px);");
    }

    #[test]
    fn test_reveal_side_direction() {
        assert_eq!(reveal_side(-30.0).initial.to_css(), "opacity: 0;transform: translateX(-30px);");
        assert_eq!(reveal_side(30.0).initial.to_css(), "opacity: 0;transform: translateX(30px);");
    }
}
