//! Auto-advancing slide carousel used by the team and achievements sections.
//!
//! The index always wraps into `0..count`. Manual input bumps an interaction
//! epoch; the timer effect depends on it, so the running interval is dropped
//! and a fresh one started after every click.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Value of the control's `data-dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Next => "1",
            Direction::Prev => "-1",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselKind {
    Team,
    Achievements,
}

impl CarouselKind {
    fn slide_class(self) -> &'static str {
        match self {
            CarouselKind::Team => "carousel-slide",
            CarouselKind::Achievements => "achievement-slide",
        }
    }

    fn dots_class(self) -> &'static str {
        match self {
            CarouselKind::Team => "carousel-dots",
            CarouselKind::Achievements => "achv-dots",
        }
    }

    fn dot_class(self) -> &'static str {
        match self {
            CarouselKind::Team => "dot",
            CarouselKind::Achievements => "achv-dot",
        }
    }

    fn control_class(self) -> &'static str {
        match self {
            CarouselKind::Team => "carousel-control",
            CarouselKind::Achievements => "achv-control",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CarouselKind::Team => "team",
            CarouselKind::Achievements => "achievements",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    count: usize,
    epoch: u32,
}

impl CarouselState {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count, epoch: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    fn next(&self) -> usize {
        (self.index + 1) % self.count
    }

    fn prev(&self) -> usize {
        (self.index + self.count - 1) % self.count
    }

    /// Whether the slide (and dot) at `slot` carries the `active` class.
    pub fn is_active(&self, slot: usize) -> bool {
        slot < self.count && slot == self.index
    }
}

/// Whether the auto-advance timer should be ticking. An external pause and a
/// hover pause both hold the timer; either one is enough.
pub fn auto_advance_running(
    count: usize,
    paused: bool,
    pause_on_hover: bool,
    hovered: bool,
) -> bool {
    count > 0 && !paused && !(pause_on_hover && hovered)
}

pub enum CarouselAction {
    /// Timer tick; does not restart the timer.
    Advance,
    Step(Direction),
    GoTo(usize),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.count == 0 {
            return self;
        }
        let bumped = self.epoch.wrapping_add(1);
        let (index, epoch) = match action {
            CarouselAction::Advance => (self.next(), self.epoch),
            CarouselAction::Step(Direction::Next) => (self.next(), bumped),
            CarouselAction::Step(Direction::Prev) => (self.prev(), bumped),
            CarouselAction::GoTo(slot) => (slot % self.count, bumped),
        };
        Rc::new(Self {
            index,
            count: self.count,
            epoch,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub id: AttrValue,
    pub kind: CarouselKind,
    pub interval_ms: u32,
    #[prop_or(true)]
    pub pause_on_hover: bool,
    /// Held by the parent, e.g. while a modal covers the carousel.
    #[prop_or_default]
    pub paused: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let kind = props.kind;
    let count = props.children.len();
    let state = use_reducer(move || CarouselState::new(count));
    let hovered = use_state_eq(|| false);

    let running = auto_advance_running(count, props.paused, props.pause_on_hover, *hovered);

    {
        let deps = (running, props.interval_ms, state.epoch());
        let state = state.clone();
        use_effect_with_deps(
            move |(running, interval_ms, _epoch)| {
                let interval = if *running {
                    debug!("{} carousel: advancing every {}ms", kind.label(), interval_ms);
                    Some(Interval::new(*interval_ms, move || {
                        state.dispatch(CarouselAction::Advance);
                    }))
                } else {
                    debug!("{} carousel: paused", kind.label());
                    None
                };
                move || drop(interval)
            },
            deps,
        );
    }

    if count == 0 {
        return html! {};
    }

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let control = |direction: Direction, label: &'static str, glyph: &'static str| {
        let state = state.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            state.dispatch(CarouselAction::Step(direction));
        });
        html! {
            <button
                type="button"
                class={classes!(
                    kind.control_class(),
                    (direction == Direction::Prev).then_some("prev"),
                    (direction == Direction::Next).then_some("next")
                )}
                data-dir={direction.as_attr()}
                aria-label={label}
                {onclick}
            >
                {glyph}
            </button>
        }
    };

    let slides = props.children.iter().enumerate().map(|(slot, child)| {
        let active = state.is_active(slot);
        html! {
            <div
                class={classes!(kind.slide_class(), active.then_some("active"))}
                aria-hidden={(!active).to_string()}
            >
                {child}
            </div>
        }
    });

    let dots = (0..count).map(|slot| {
        let active = state.is_active(slot);
        let onclick = {
            let state = state.clone();
            Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::GoTo(slot)))
        };
        html! {
            <button
                type="button"
                class={classes!(kind.dot_class(), active.then_some("active"))}
                aria-label={format!("Go to slide {}", slot + 1)}
                aria-current={active.then_some("true")}
                {onclick}
            />
        }
    });

    html! {
        <div
            id={props.id.clone()}
            class={classes!("carousel", kind.label())}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="carousel-track">
                { for slides }
            </div>
            { control(Direction::Prev, "Previous slide", "‹") }
            { control(Direction::Next, "Next slide", "›") }
            <div class={kind.dots_class()}>
                { for dots }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(
        state: CarouselState,
        actions: impl IntoIterator<Item = CarouselAction>,
    ) -> CarouselState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn three_nexts_on_three_slides_return_to_start() {
        let state = apply(
            CarouselState::new(3),
            (0..3).map(|_| CarouselAction::Step(Direction::Next)),
        );
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let state = apply(CarouselState::new(4), [CarouselAction::Step(Direction::Prev)]);
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn dot_jump_wraps_out_of_range_slots() {
        let state = apply(CarouselState::new(3), [CarouselAction::GoTo(2)]);
        assert_eq!(state.index(), 2);
        let state = apply(state, [CarouselAction::GoTo(7)]);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn index_stays_in_range_for_mixed_input() {
        let count = 5;
        let mut state = Rc::new(CarouselState::new(count));
        for step in 0..200usize {
            let action = match step % 7 {
                0 | 3 => CarouselAction::Step(Direction::Prev),
                1 => CarouselAction::GoTo(step * 13),
                2 | 5 => CarouselAction::Advance,
                _ => CarouselAction::Step(Direction::Next),
            };
            state = state.reduce(action);
            assert!(
                state.index() < count,
                "index {} escaped at step {}",
                state.index(),
                step
            );
        }
    }

    #[test]
    fn exactly_one_slot_is_active() {
        let mut state = Rc::new(CarouselState::new(4));
        for _ in 0..6 {
            let active = (0..4).filter(|slot| state.is_active(*slot)).count();
            assert_eq!(active, 1);
            state = state.reduce(CarouselAction::Step(Direction::Prev));
        }
    }

    #[test]
    fn timer_ticks_keep_epoch_but_clicks_bump_it() {
        let state = apply(
            CarouselState::new(3),
            [CarouselAction::Advance, CarouselAction::Advance],
        );
        assert_eq!(state.index(), 2);
        assert_eq!(state.epoch(), 0);

        let state = apply(
            state,
            [CarouselAction::Step(Direction::Next), CarouselAction::GoTo(1)],
        );
        assert_eq!(state.epoch(), 2);
    }

    #[test]
    fn empty_carousel_ignores_input() {
        let state = apply(
            CarouselState::new(0),
            [
                CarouselAction::Advance,
                CarouselAction::Step(Direction::Prev),
                CarouselAction::GoTo(3),
            ],
        );
        assert_eq!(state, CarouselState::new(0));
        assert!(!state.is_active(0));
    }

    #[test]
    fn empty_carousel_never_runs() {
        assert!(!auto_advance_running(0, false, true, false));
        assert!(!auto_advance_running(0, false, false, false));
    }

    #[test]
    fn hover_pauses_auto_advance() {
        assert!(auto_advance_running(3, false, true, false));
        assert!(!auto_advance_running(3, false, true, true));
    }

    #[test]
    fn open_modal_pauses_and_close_resumes() {
        assert!(!auto_advance_running(3, true, true, false));
        assert!(auto_advance_running(3, false, true, false));
    }

    #[test]
    fn closing_modal_while_hovered_stays_paused() {
        assert!(!auto_advance_running(3, true, true, true));
        assert!(!auto_advance_running(3, false, true, true));
    }

    #[test]
    fn hover_is_ignored_when_hover_pause_is_off() {
        assert!(auto_advance_running(3, false, false, true));
        assert!(!auto_advance_running(3, true, false, true));
    }

    #[test]
    fn controls_carry_signed_direction() {
        assert_eq!(Direction::Next.as_attr(), "1");
        assert_eq!(Direction::Prev.as_attr(), "-1");
    }
}
