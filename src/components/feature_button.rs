use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::analytics::{self, AnalyticsEvent};
use crate::components::smooth_scroll::intercept_anchor_click;
use crate::config::{
    HIGHLIGHT_ANIMATION, HIGHLIGHT_BASE_DELAY_MS, HIGHLIGHT_DURATION_MS, HIGHLIGHT_STAGGER_MS,
};

/// Delay before the button at `index` starts its one-off highlight.
pub fn highlight_delay(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    HIGHLIGHT_BASE_DELAY_MS.saturating_add(HIGHLIGHT_STAGGER_MS.saturating_mul(index))
}

#[derive(Properties, PartialEq)]
pub struct FeatureButtonProps {
    pub index: usize,
    pub label: AttrValue,
    pub href: AttrValue,
}

#[function_component(FeatureButton)]
pub fn feature_button(props: &FeatureButtonProps) -> Html {
    let highlighted = use_state_eq(|| false);

    {
        let highlighted = highlighted.clone();
        use_effect_with_deps(
            move |index: &usize| {
                let start = highlight_delay(*index);
                let on = {
                    let highlighted = highlighted.clone();
                    Timeout::new(start, move || highlighted.set(true))
                };
                let off = Timeout::new(start.saturating_add(HIGHLIGHT_DURATION_MS), move || {
                    highlighted.set(false)
                });
                move || {
                    drop(on);
                    drop(off);
                }
            },
            props.index,
        );
    }

    let onclick = {
        let label = props.label.clone();
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            analytics::track(&AnalyticsEvent::cta(&label, Some(&href)));
            intercept_anchor_click(&e, &href);
        })
    };

    let style = highlighted.then(|| format!("animation: {};", HIGHLIGHT_ANIMATION));

    html! {
        <a class="feature-btn" href={props.href.clone()} {style} {onclick}>
            {props.label.clone()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_are_staggered_half_a_second_apart() {
        let delays: Vec<u32> = (0..4).map(highlight_delay).collect();
        assert_eq!(delays, vec![1_500, 2_000, 2_500, 3_000]);
    }

    #[test]
    fn huge_index_saturates_instead_of_overflowing() {
        assert_eq!(highlight_delay(usize::MAX), u32::MAX);
    }
}
