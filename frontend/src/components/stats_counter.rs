use gloo_timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

use crate::animation::counter::{CountUp, TickOutcome};
use crate::animation::visibility::{Transition, VisibilityObserver, VisibilityTracker};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct StatsCounterProps {
    pub end: u32,
    pub title: AttrValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsCounterMsg {
    Visibility(bool),
    Tick,
}

/// What the component should do with its tick timer after a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickerCommand {
    Start,
    Stop,
    Keep,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub render: bool,
    pub ticker: TickerCommand,
}

impl Step {
    fn new(render: bool, ticker: TickerCommand) -> Self {
        Self { render, ticker }
    }
}

/// Visibility and count-up state of one counter, with no DOM attached.
/// Once closed it ignores everything.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterState {
    visibility: VisibilityTracker,
    count: CountUp,
    closed: bool,
}

impl CounterState {
    pub fn new(target: u32) -> Self {
        Self {
            visibility: VisibilityTracker::new(),
            count: CountUp::new(target),
            closed: false,
        }
    }

    pub fn value(&self) -> u32 {
        self.count.value()
    }

    pub fn tick_ms(&self) -> u32 {
        self.count.tick_ms()
    }

    pub fn is_finished(&self) -> bool {
        self.count.is_finished()
    }

    pub fn handle(&mut self, msg: StatsCounterMsg) -> Step {
        if self.closed {
            return Step::new(false, TickerCommand::Stop);
        }
        match msg {
            StatsCounterMsg::Visibility(visible) => match self.visibility.observe(visible) {
                Some(Transition::BecameVisible) => {
                    self.count.restart();
                    Step::new(true, TickerCommand::Start)
                }
                Some(Transition::BecameHidden) => {
                    self.count.reset();
                    Step::new(true, TickerCommand::Stop)
                }
                None => Step::new(false, TickerCommand::Keep),
            },
            StatsCounterMsg::Tick => {
                if !self.count.is_running() {
                    return Step::new(false, TickerCommand::Stop);
                }
                match self.count.tick() {
                    TickOutcome::Running => Step::new(true, TickerCommand::Keep),
                    TickOutcome::Finished | TickOutcome::Idle => Step::new(true, TickerCommand::Stop),
                }
            }
        }
    }

    /// New target from props. Replays from zero if currently on screen.
    pub fn retarget(&mut self, target: u32) -> Step {
        if self.closed || target == self.count.target() {
            return Step::new(false, TickerCommand::Keep);
        }
        self.count = CountUp::new(target);
        if self.visibility.is_visible() {
            self.count.restart();
            Step::new(true, TickerCommand::Start)
        } else {
            Step::new(true, TickerCommand::Stop)
        }
    }

    pub fn close(&mut self) {
        self.closed = true;
        self.count.reset();
    }
}

/// Counts up to `end` every time it scrolls into view.
pub struct StatsCounter {
    node: NodeRef,
    state: CounterState,
    ticker: Option<Interval>,
    observer: Option<VisibilityObserver>,
}

impl StatsCounter {
    fn apply(&mut self, ctx: &Context<Self>, step: Step) -> bool {
        match step.ticker {
            TickerCommand::Start => {
                let link = ctx.link().clone();
                self.ticker = Some(Interval::new(self.state.tick_ms(), move || {
                    link.send_message(StatsCounterMsg::Tick);
                }));
            }
            TickerCommand::Stop => self.ticker = None,
            TickerCommand::Keep => {}
        }
        step.render
    }
}

impl Component for StatsCounter {
    type Message = StatsCounterMsg;
    type Properties = StatsCounterProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            node: NodeRef::default(),
            state: CounterState::new(ctx.props().end),
            ticker: None,
            observer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let step = self.state.handle(msg);
        self.apply(ctx, step)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let step = self.state.retarget(ctx.props().end);
        self.apply(ctx, step)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let on_change = ctx.link().callback(StatsCounterMsg::Visibility);
        self.observer = self.node.cast::<Element>().and_then(|element| {
            VisibilityObserver::observe(&element, config::COUNTER_VISIBILITY_THRESHOLD, move |visible| {
                on_change.emit(visible)
            })
        });
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.state.close();
        self.ticker = None;
        self.observer = None;
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div
                ref={self.node.clone()}
                class={classes!("stats-counter", self.state.is_finished().then(|| "done"))}
            >
                <div class="stats-value">
                    {self.state.value()}
                    <span class="accent">{"+"}</span>
                </div>
                <p class="stats-title">{ctx.props().title.clone()}</p>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_until_stop(state: &mut CounterState) -> usize {
        let mut ticks = 0;
        loop {
            ticks += 1;
            if state.handle(StatsCounterMsg::Tick).ticker == TickerCommand::Stop {
                return ticks;
            }
        }
    }

    #[test]
    fn becoming_visible_starts_ticker() {
        let mut state = CounterState::new(5);
        let step = state.handle(StatsCounterMsg::Visibility(true));
        assert_eq!(step, Step::new(true, TickerCommand::Start));
        assert_eq!(state.value(), 0);

        let step = state.handle(StatsCounterMsg::Tick);
        assert_eq!(step, Step::new(true, TickerCommand::Keep));
        assert_eq!(state.value(), 1);
    }

    #[test]
    fn repeated_visibility_does_not_restart() {
        let mut state = CounterState::new(5);
        state.handle(StatsCounterMsg::Visibility(true));
        state.handle(StatsCounterMsg::Tick);
        let step = state.handle(StatsCounterMsg::Visibility(true));
        assert_eq!(step, Step::new(false, TickerCommand::Keep));
        assert_eq!(state.value(), 1);
    }

    #[test]
    fn hiding_mid_run_zeroes_and_stops() {
        let mut state = CounterState::new(7);
        state.handle(StatsCounterMsg::Visibility(true));
        for _ in 0..60 {
            state.handle(StatsCounterMsg::Tick);
        }
        assert!(state.value() > 0);

        let step = state.handle(StatsCounterMsg::Visibility(false));
        assert_eq!(step, Step::new(true, TickerCommand::Stop));
        assert_eq!(state.value(), 0);
    }

    #[test]
    fn stale_tick_after_hide_is_ignored() {
        let mut state = CounterState::new(7);
        state.handle(StatsCounterMsg::Visibility(true));
        state.handle(StatsCounterMsg::Tick);
        state.handle(StatsCounterMsg::Visibility(false));

        let step = state.handle(StatsCounterMsg::Tick);
        assert_eq!(step, Step::new(false, TickerCommand::Stop));
        assert_eq!(state.value(), 0);
    }

    #[test]
    fn finishing_stops_ticker_on_target() {
        let mut state = CounterState::new(4);
        state.handle(StatsCounterMsg::Visibility(true));
        assert_eq!(tick_until_stop(&mut state), 125);
        assert_eq!(state.value(), 4);
        assert!(state.is_finished());

        let step = state.handle(StatsCounterMsg::Tick);
        assert_eq!(step, Step::new(false, TickerCommand::Stop));
        assert_eq!(state.value(), 4);
    }

    #[test]
    fn scrolling_back_replays_from_zero() {
        let mut state = CounterState::new(4);
        state.handle(StatsCounterMsg::Visibility(true));
        tick_until_stop(&mut state);
        state.handle(StatsCounterMsg::Visibility(false));

        let step = state.handle(StatsCounterMsg::Visibility(true));
        assert_eq!(step.ticker, TickerCommand::Start);
        assert_eq!(state.value(), 0);
        assert_eq!(tick_until_stop(&mut state), 125);
        assert_eq!(state.value(), 4);
    }

    #[test]
    fn nothing_changes_after_close() {
        let mut state = CounterState::new(7);
        state.handle(StatsCounterMsg::Visibility(true));
        state.handle(StatsCounterMsg::Tick);
        state.close();
        let closed = state.clone();

        for msg in [
            StatsCounterMsg::Tick,
            StatsCounterMsg::Visibility(false),
            StatsCounterMsg::Visibility(true),
            StatsCounterMsg::Tick,
        ] {
            assert_eq!(state.handle(msg), Step::new(false, TickerCommand::Stop));
        }
        assert_eq!(state.retarget(9), Step::new(false, TickerCommand::Keep));
        assert_eq!(state, closed);
        assert_eq!(state.value(), 0);
    }

    #[test]
    fn retarget_while_visible_replays() {
        let mut state = CounterState::new(3);
        state.handle(StatsCounterMsg::Visibility(true));
        state.handle(StatsCounterMsg::Tick);

        assert_eq!(state.retarget(3), Step::new(false, TickerCommand::Keep));
        assert_eq!(state.retarget(10), Step::new(true, TickerCommand::Start));
        assert_eq!(state.value(), 0);
        tick_until_stop(&mut state);
        assert_eq!(state.value(), 10);
    }

    #[test]
    fn retarget_while_hidden_waits() {
        let mut state = CounterState::new(3);
        assert_eq!(state.retarget(8), Step::new(true, TickerCommand::Stop));
        assert_eq!(state.handle(StatsCounterMsg::Tick), Step::new(false, TickerCommand::Stop));
    }
}
