use crate::api::error::EngineError;
use crate::api::game::{EngineContext, RenderContext};
use crate::api::types::SoundEvent;
use crate::input::button::Button;
use crate::input::state::InputState;
use super::fade::{Fade, FadeStyle};
use super::slide::{Navigation, Placement, Slide};

/// Handle to a node in a presentation. Stays valid for the presentation's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideId(pub u32);

/// Name reported for transition placeholders.
pub const TRANSITION_NAME: &str = "transition";

/// Placeholder that fades and then lands its target next to itself.
struct Transition<S> {
    fade: Fade,
    /// Taken when the fade completes.
    target: Option<Box<dyn Slide<S>>>,
    placement: Placement,
}

enum Node<S> {
    Slide(Box<dyn Slide<S>>),
    Transition(Transition<S>),
    /// A transition that already landed. Keeps its place in `order` only.
    Spent,
}

/// Outcome of driving the head for one frame, applied once the head borrow ends.
enum Step<S> {
    Idle,
    Navigate(Navigation<S>),
    Land(Box<dyn Slide<S>>, Placement),
}

/// Ordered sequence of slides with a movable head.
///
/// Nodes live in an arena indexed by `SlideId` and are never removed, so the
/// head always refers to a live node. `order` holds the navigation sequence;
/// it is only consulted to place new nodes next to the head. A landed
/// transition drops its fade and keeps its slot as a bare marker.
pub struct Presentation<S> {
    nodes: Vec<Node<S>>,
    order: Vec<SlideId>,
    head: SlideId,
    fade: FadeStyle,
    transition_sound: Option<SoundEvent>,
}

impl<S> Presentation<S> {
    /// Start a presentation showing `initial` directly, without a fade.
    pub fn new(initial: Box<dyn Slide<S>>, fade: FadeStyle) -> Self {
        log::debug!("presentation: start at {}", initial.name());
        Self {
            nodes: vec![Node::Slide(initial)],
            order: vec![SlideId(0)],
            head: SlideId(0),
            fade,
            transition_sound: None,
        }
    }

    /// Sound emitted whenever a transition lands on its target.
    pub fn with_transition_sound(mut self, sound: SoundEvent) -> Self {
        self.transition_sound = Some(sound);
        self
    }

    fn node(&self, id: SlideId) -> Option<&Node<S>> {
        self.nodes.get(id.0 as usize)
    }

    fn position(&self, id: SlideId) -> Option<usize> {
        self.order.iter().position(|&o| o == id)
    }

    fn insert_relative(&mut self, anchor: SlideId, placement: Placement, node: Node<S>) -> SlideId {
        let id = SlideId(self.nodes.len() as u32);
        self.nodes.push(node);
        let at = match (self.position(anchor), placement) {
            (Some(pos), Placement::After) => pos + 1,
            (Some(pos), Placement::Before) => pos,
            (None, _) => self.order.len(),
        };
        self.order.insert(at, id);
        id
    }

    fn insert_transition(&mut self, slide: Box<dyn Slide<S>>, placement: Placement, now: f64) -> SlideId {
        let transition = Transition {
            fade: Fade::new(self.fade, now),
            target: Some(slide),
            placement,
        };
        self.insert_relative(self.head, placement, Node::Transition(transition))
    }

    /// Insert a fading placeholder right after the head. When its fade
    /// completes, `slide` lands after the placeholder and becomes head.
    /// Returns the placeholder handle; the caller focuses it.
    pub fn append(&mut self, slide: Box<dyn Slide<S>>, now: f64) -> SlideId {
        self.insert_transition(slide, Placement::After, now)
    }

    /// Like `append`, but placeholder and target go before the head.
    pub fn prepend(&mut self, slide: Box<dyn Slide<S>>, now: f64) -> SlideId {
        self.insert_transition(slide, Placement::Before, now)
    }

    /// Make `id` the active node.
    pub fn focus(&mut self, id: SlideId) -> Result<(), EngineError> {
        if self.node(id).is_none() {
            return Err(EngineError::UnknownSlide(id));
        }
        self.head = id;
        Ok(())
    }

    fn navigate(&mut self, navigation: Navigation<S>, now: f64) {
        let from = self.head_name();
        let id = match navigation {
            Navigation::Stay => return,
            Navigation::Append(slide) => {
                log::debug!("presentation: {} -> {} (append)", from, slide.name());
                self.append(slide, now)
            }
            Navigation::Prepend(slide) => {
                log::debug!("presentation: {} -> {} (prepend)", from, slide.name());
                self.prepend(slide, now)
            }
        };
        self.head = id;
    }

    /// Drive the head for one frame and apply any navigation it requests.
    pub fn update(&mut self, ctx: &mut EngineContext, input: &InputState, state: &mut S) {
        let head = self.head;
        let Some(node) = self.nodes.get_mut(head.0 as usize) else {
            return;
        };
        let step = match node {
            Node::Slide(slide) => Step::Navigate(slide.update(ctx, input, state)),
            Node::Spent => Step::Idle,
            Node::Transition(transition) => {
                transition.fade.update(ctx.now());
                match transition.target.take() {
                    Some(target) if transition.fade.is_complete() => {
                        Step::Land(target, transition.placement)
                    }
                    pending => {
                        transition.target = pending;
                        Step::Idle
                    }
                }
            }
        };

        match step {
            Step::Idle => {}
            Step::Navigate(navigation) => self.navigate(navigation, ctx.now()),
            Step::Land(target, placement) => {
                log::debug!("presentation: landed on {}", target.name());
                let id = self.insert_relative(head, placement, Node::Slide(target));
                if let Some(spent) = self.nodes.get_mut(head.0 as usize) {
                    *spent = Node::Spent;
                }
                self.head = id;
                if let Some(sound) = self.transition_sound {
                    ctx.emit_sound(sound);
                }
            }
        }
    }

    /// Render the head only.
    pub fn render(&self, ctx: &mut RenderContext, state: &S) {
        match self.node(self.head) {
            Some(Node::Slide(slide)) => slide.render(ctx, state),
            Some(Node::Transition(transition)) => {
                let (w, h) = (ctx.width(), ctx.height());
                transition.fade.render(ctx.buffer, w, h);
            }
            Some(Node::Spent) | None => {}
        }
    }

    pub fn head(&self) -> SlideId {
        self.head
    }

    /// Name of a node; transitions report `TRANSITION_NAME`.
    pub fn name_of(&self, id: SlideId) -> Option<&'static str> {
        self.node(id).map(|node| match node {
            Node::Slide(slide) => slide.name(),
            Node::Transition(_) | Node::Spent => TRANSITION_NAME,
        })
    }

    pub fn head_name(&self) -> &'static str {
        self.name_of(self.head).unwrap_or(TRANSITION_NAME)
    }

    /// Whether the head is a fade placeholder.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.node(self.head), Some(Node::Transition(_)))
    }

    /// Widgets of the head slide.
    pub fn head_controls(&self) -> Vec<&Button> {
        match self.node(self.head) {
            Some(Node::Slide(slide)) => slide.controls(),
            _ => Vec::new(),
        }
    }

    /// Number of nodes, placeholders included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Nodes in navigation order.
    pub fn order(&self) -> &[SlideId] {
        &self.order
    }

    /// (previous, next) neighbours of a node in navigation order.
    pub fn neighbors(&self, id: SlideId) -> Option<(Option<SlideId>, Option<SlideId>)> {
        let pos = self.position(id)?;
        let prev = pos.checked_sub(1).map(|p| self.order[p]);
        let next = self.order.get(pos + 1).copied();
        Some((prev, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keys;
    use crate::input::queue::InputEvent;
    use crate::renderer::command::{DrawCommand, RenderBuffer};

    /// Navigates to a fresh `Card` slide whenever X is held.
    struct Card {
        name: &'static str,
        next: Option<(&'static str, Placement)>,
    }

    impl Slide<u32> for Card {
        fn name(&self) -> &'static str {
            self.name
        }

        fn update(&mut self, _: &mut EngineContext, input: &InputState, updates: &mut u32) -> Navigation<u32> {
            *updates += 1;
            match self.next {
                Some((name, placement)) if input.key_pressed(keys::X) => {
                    Navigation::to(placement, Box::new(Card { name, next: None }))
                }
                _ => Navigation::Stay,
            }
        }

        fn render(&self, ctx: &mut RenderContext, _: &u32) {
            ctx.buffer.push(DrawCommand::Layer { name: self.name.into(), scroll_y: 0.0 });
        }
    }

    fn step(name: &'static str, next: Option<(&'static str, Placement)>) -> Box<dyn Slide<u32>> {
        Box::new(Card { name, next })
    }

    fn frame(p: &mut Presentation<u32>, ctx: &mut EngineContext, input: &InputState, now: f64, state: &mut u32) {
        ctx.clock.advance(now);
        p.update(ctx, input, state);
    }

    fn x_held() -> InputState {
        let mut input = InputState::new();
        input.apply(&InputEvent::KeyDown { key_code: keys::X });
        input
    }

    #[test]
    fn append_fades_then_lands_after_head() {
        let mut p = Presentation::new(step("a", Some(("b", Placement::After))), FadeStyle::default());
        let mut ctx = EngineContext::default();
        let mut updates = 0;

        frame(&mut p, &mut ctx, &x_held(), 0.0, &mut updates);
        assert!(p.is_transitioning());
        assert_eq!(p.len(), 2);

        frame(&mut p, &mut ctx, &InputState::new(), 250.0, &mut updates);
        assert!(p.is_transitioning(), "fade still running");

        frame(&mut p, &mut ctx, &InputState::new(), 500.0, &mut updates);
        assert_eq!(p.head_name(), "b");
        let names: Vec<_> = p.order().iter().map(|&id| p.name_of(id).unwrap()).collect();
        assert_eq!(names, vec!["a", TRANSITION_NAME, "b"]);
        // Only the head is ever updated: "a" once, "b" not yet.
        assert_eq!(updates, 1);
    }

    #[test]
    fn prepend_lands_before_head() {
        let mut p = Presentation::new(step("level", Some(("map", Placement::Before))), FadeStyle::default());
        let mut ctx = EngineContext::default();
        let mut updates = 0;

        frame(&mut p, &mut ctx, &x_held(), 0.0, &mut updates);
        frame(&mut p, &mut ctx, &InputState::new(), 600.0, &mut updates);
        assert_eq!(p.head_name(), "map");
        let names: Vec<_> = p.order().iter().map(|&id| p.name_of(id).unwrap()).collect();
        assert_eq!(names, vec!["map", TRANSITION_NAME, "level"]);
    }

    #[test]
    fn append_inserts_next_to_head_not_at_end() {
        let mut p = Presentation::new(step("a", None), FadeStyle::default());
        let b = p.append(step("b", None), 0.0);
        let c = p.append(step("c", None), 0.0);
        // Both placeholders sit right after "a"; the newest is closest.
        assert_eq!(p.order(), &[SlideId(0), c, b]);
        assert_eq!(p.neighbors(c), Some((Some(SlideId(0)), Some(b))));
    }

    #[test]
    fn focus_rejects_unknown_ids() {
        let mut p = Presentation::new(step("a", None), FadeStyle::default());
        assert!(matches!(p.focus(SlideId(9)), Err(EngineError::UnknownSlide(SlideId(9)))));
        assert_eq!(p.head(), SlideId(0));
        let id = p.append(step("b", None), 0.0);
        p.focus(id).unwrap();
        assert!(p.is_transitioning());
    }

    #[test]
    fn landing_emits_transition_sound() {
        let mut p = Presentation::new(step("a", Some(("b", Placement::After))), FadeStyle::default())
            .with_transition_sound(SoundEvent(1));
        let mut ctx = EngineContext::default();
        ctx.set_sound_enabled(true);
        let mut updates = 0;
        frame(&mut p, &mut ctx, &x_held(), 0.0, &mut updates);
        assert!(ctx.sounds.is_empty());
        frame(&mut p, &mut ctx, &InputState::new(), 500.0, &mut updates);
        assert_eq!(ctx.sounds, vec![SoundEvent(1)]);
    }

    #[test]
    fn landed_placeholder_is_spent() {
        let mut p = Presentation::new(step("a", Some(("b", Placement::After))), FadeStyle::default());
        let mut ctx = EngineContext::default();
        let mut updates = 0;
        frame(&mut p, &mut ctx, &x_held(), 0.0, &mut updates);
        let placeholder = p.head();
        frame(&mut p, &mut ctx, &InputState::new(), 500.0, &mut updates);
        assert_eq!(p.head_name(), "b");

        p.focus(placeholder).unwrap();
        assert_eq!(p.head_name(), TRANSITION_NAME);
        assert!(!p.is_transitioning());
        frame(&mut p, &mut ctx, &InputState::new(), 1000.0, &mut updates);
        assert_eq!(p.head(), placeholder, "a spent placeholder never lands again");
        assert_eq!(p.len(), 3);

        let mut buf = RenderBuffer::new();
        p.render(&mut RenderContext::new(&mut buf, &ctx.config), &updates);
        assert!(buf.is_empty());
    }

    #[test]
    fn renders_fade_then_target() {
        let mut p = Presentation::new(step("a", Some(("b", Placement::After))), FadeStyle::default());
        let mut ctx = EngineContext::default();
        let mut updates = 0;
        let mut buf = RenderBuffer::new();

        frame(&mut p, &mut ctx, &x_held(), 0.0, &mut updates);
        frame(&mut p, &mut ctx, &InputState::new(), 100.0, &mut updates);
        p.render(&mut RenderContext::new(&mut buf, &ctx.config), &updates);
        assert!(buf.commands.iter().any(|c| matches!(c, DrawCommand::Alpha { .. })));
        assert!(!buf.commands.iter().any(|c| matches!(c, DrawCommand::Layer { .. })));

        buf.clear();
        frame(&mut p, &mut ctx, &InputState::new(), 500.0, &mut updates);
        p.render(&mut RenderContext::new(&mut buf, &ctx.config), &updates);
        assert_eq!(buf.commands, vec![DrawCommand::Layer { name: "b".into(), scroll_y: 0.0 }]);
    }
}
