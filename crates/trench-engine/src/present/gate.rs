// present/gate.rs
//
// Gated transition: a slide that waits for one of several completion
// conditions and then navigates to a target slide built on demand.
//
// Usage:
//   Gate::new("loading", view)
//       .with_timer(3000.0, ctx.now())
//       .with_button(close_button)
//       .append_on(&[Trigger::TimerElapsed, Trigger::Button(0), Trigger::Key(keys::X)],
//                  |ctx, state| Box::new(Title::new(ctx, state)))

use crate::api::game::{EngineContext, RenderContext};
use crate::core::time::Timer;
use crate::input::button::Button;
use crate::input::state::InputState;
use super::slide::{Navigation, Placement, Slide};

/// Builds the slide a gate navigates to. Runs exactly once, when the gate fires.
pub type SlideFactory<S> = Box<dyn FnOnce(&mut EngineContext, &mut S) -> Box<dyn Slide<S>>>;

/// A completion condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The gate's timer reached progress 1.
    TimerElapsed,
    /// The gate button at this index is pressed.
    Button(usize),
    /// This key is held.
    Key(u32),
}

struct Route<S> {
    triggers: Vec<Trigger>,
    placement: Placement,
    target: SlideFactory<S>,
}

/// What a gate view needs to draw itself.
pub struct GateStatus<'a> {
    /// Timer progress, 0.0 for gates without a timer.
    pub progress: f32,
    pub buttons: &'a [Button],
}

/// Visual half of a gate: a dialog window, a loading bar, a confirm box.
pub trait GateView {
    fn render(&self, ctx: &mut RenderContext, status: &GateStatus<'_>);
}

/// Routes are checked in declaration order each frame; the first route with a
/// satisfied trigger fires and the gate goes inert.
pub struct Gate<S> {
    name: &'static str,
    view: Box<dyn GateView>,
    timer: Option<Timer>,
    buttons: Vec<Button>,
    routes: Vec<Route<S>>,
    fired: bool,
}

impl<S> Gate<S> {
    pub fn new(name: &'static str, view: impl GateView + 'static) -> Self {
        Self {
            name,
            view: Box::new(view),
            timer: None,
            buttons: Vec::new(),
            routes: Vec::new(),
            fired: false,
        }
    }

    // -- Builder methods --

    pub fn with_timer(mut self, duration_ms: f64, now: f64) -> Self {
        self.timer = Some(Timer::new(duration_ms, now));
        self
    }

    /// Add a button; `Trigger::Button` refers to buttons by insertion index.
    pub fn with_button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn route(
        mut self,
        triggers: &[Trigger],
        placement: Placement,
        target: impl FnOnce(&mut EngineContext, &mut S) -> Box<dyn Slide<S>> + 'static,
    ) -> Self {
        self.routes.push(Route {
            triggers: triggers.to_vec(),
            placement,
            target: Box::new(target),
        });
        self
    }

    pub fn append_on(
        self,
        triggers: &[Trigger],
        target: impl FnOnce(&mut EngineContext, &mut S) -> Box<dyn Slide<S>> + 'static,
    ) -> Self {
        self.route(triggers, Placement::After, target)
    }

    pub fn progress(&self) -> f32 {
        self.timer.map(|t| t.progress()).unwrap_or(0.0)
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }

    fn satisfied(&self, trigger: Trigger, input: &InputState) -> bool {
        match trigger {
            Trigger::TimerElapsed => self.timer.map(|t| t.is_elapsed()).unwrap_or(false),
            Trigger::Button(i) => self.buttons.get(i).map(|b| b.pressed).unwrap_or(false),
            Trigger::Key(key_code) => input.key_pressed(key_code),
        }
    }
}

impl<S> Slide<S> for Gate<S> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState, state: &mut S) -> Navigation<S> {
        if self.fired {
            return Navigation::Stay;
        }
        if let Some(timer) = &mut self.timer {
            timer.update(ctx.now());
        }
        for button in self.buttons.iter_mut() {
            button.update(input);
        }

        let ready = self.routes.iter().position(|route| {
            route.triggers.iter().any(|&t| self.satisfied(t, input))
        });
        let Some(index) = ready else {
            return Navigation::Stay;
        };

        self.fired = true;
        let route = self.routes.remove(index);
        log::debug!("{}: gate fired on route {}", self.name, index);
        Navigation::to(route.placement, (route.target)(ctx, state))
    }

    fn render(&self, ctx: &mut RenderContext, _state: &S) {
        let status = GateStatus {
            progress: self.progress(),
            buttons: &self.buttons,
        };
        self.view.render(ctx, &status);
    }

    fn controls(&self) -> Vec<&Button> {
        self.buttons.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keys;
    use crate::input::queue::InputEvent;
    use crate::renderer::command::{Baseline, Color, RenderBuffer};
    use glam::Vec2;

    struct Blank;

    impl GateView for Blank {
        fn render(&self, ctx: &mut RenderContext, status: &GateStatus<'_>) {
            let text = format!("{:.2}", status.progress);
            ctx.buffer.text(text, Vec2::ZERO, "", Color::rgb(0, 0, 0), Baseline::Top);
        }
    }

    struct Target(&'static str);

    impl Slide<u32> for Target {
        fn name(&self) -> &'static str {
            self.0
        }
        fn update(&mut self, _: &mut EngineContext, _: &InputState, _: &mut u32) -> Navigation<u32> {
            Navigation::Stay
        }
        fn render(&self, _: &mut RenderContext, _: &u32) {}
    }

    fn ctx_at(now: f64) -> EngineContext {
        let mut ctx = EngineContext::default();
        ctx.clock.advance(now);
        ctx
    }

    fn counting_gate() -> Gate<u32> {
        Gate::<u32>::new("gate", Blank)
            .with_timer(1000.0, 0.0)
            .with_button(Button::new("x", Vec2::ZERO, Vec2::splat(10.0)))
            .append_on(&[Trigger::TimerElapsed, Trigger::Button(0), Trigger::Key(keys::X)], |_, built| {
                *built += 1;
                Box::new(Target("next"))
            })
    }

    #[test]
    fn fires_on_timer_once() {
        let mut gate = counting_gate();
        let input = InputState::new();
        let mut built = 0;

        let nav = gate.update(&mut ctx_at(500.0), &input, &mut built);
        assert!(nav.is_stay());
        assert_eq!(built, 0);

        let nav = gate.update(&mut ctx_at(1000.0), &input, &mut built);
        assert_eq!(nav.target_name(), Some("next"));
        assert!(matches!(nav, Navigation::Append(_)));
        assert!(gate.is_fired());

        let nav = gate.update(&mut ctx_at(2000.0), &input, &mut built);
        assert!(nav.is_stay());
        assert_eq!(built, 1, "factory must run exactly once");
    }

    #[test]
    fn fires_on_key_or_button() {
        let mut built = 0;

        let mut gate = counting_gate();
        let mut input = InputState::new();
        input.apply(&InputEvent::KeyDown { key_code: keys::X });
        assert!(!gate.update(&mut ctx_at(1.0), &input, &mut built).is_stay());

        let mut gate = counting_gate();
        let mut input = InputState::new();
        input.apply(&InputEvent::PointerDown { x: 5.0, y: 5.0 });
        assert!(!gate.update(&mut ctx_at(1.0), &input, &mut built).is_stay());
        assert_eq!(built, 2);
    }

    #[test]
    fn first_declared_route_wins() {
        let mut gate = Gate::<u32>::new("confirm", Blank)
            .with_button(Button::new("yes", Vec2::ZERO, Vec2::splat(10.0)))
            .with_button(Button::new("no", Vec2::ZERO, Vec2::splat(10.0)))
            .append_on(&[Trigger::Button(0)], |_, _| Box::new(Target("yes")))
            .route(&[Trigger::Button(1)], Placement::Before, |_, _| Box::new(Target("no")));
        let mut input = InputState::new();
        // Both buttons overlap, so both are pressed in the same frame.
        input.apply(&InputEvent::PointerDown { x: 1.0, y: 1.0 });
        let nav = gate.update(&mut ctx_at(0.0), &input, &mut 0);
        assert_eq!(nav.target_name(), Some("yes"));
    }

    #[test]
    fn prepend_route_navigates_before() {
        let mut gate = Gate::<u32>::new("back", Blank)
            .with_timer(0.0, 0.0)
            .route(&[Trigger::TimerElapsed], Placement::Before, |_, _| Box::new(Target("parent")));
        let nav = gate.update(&mut ctx_at(0.0), &InputState::new(), &mut 0);
        assert!(matches!(nav, Navigation::Prepend(_)));
    }

    #[test]
    fn view_sees_progress() {
        let mut gate = counting_gate();
        gate.update(&mut ctx_at(250.0), &InputState::new(), &mut 0);
        let mut buf = RenderBuffer::new();
        let config = crate::api::config::GameConfig::default();
        gate.render(&mut RenderContext::new(&mut buf, &config), &0);
        assert_eq!(buf.texts().collect::<Vec<_>>(), vec!["0.25"]);
    }
}
