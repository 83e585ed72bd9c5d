use glam::IVec2;
use std::collections::VecDeque;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    ResetStatics,
    DecreaseSize,
    IncreaseSize,
    SpawnDynamic,
    SpawnStatic,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    ButtonPress { button: Button },
    Quit,
}

/// Per-frame input: discrete presses are polled until exhausted, held buttons and the stick are queried.
pub trait InputSource {
    /// Called once at the start of every frame, before any event is polled.
    fn pump(&mut self) {}

    fn poll_event(&mut self) -> Option<InputEvent>;
    fn is_held(&self, button: Button) -> bool;

    /// Raw stick deflection, each axis in `[-32768, 32767]`.
    fn axis(&self) -> IVec2;
}

#[derive(Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
    held: Vec<Button>,
    axis: IVec2,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn press(&mut self, button: Button) {
        self.push_event(InputEvent::ButtonPress { button });
    }

    pub fn hold(&mut self, button: Button) {
        if !self.held.contains(&button) {
            self.held.push(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        self.held.retain(|p| *p != button);
    }

    pub fn set_axis(&mut self, axis: IVec2) {
        self.axis = axis.clamp(IVec2::splat(i16::MIN as i32), IVec2::splat(i16::MAX as i32));
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    fn is_held(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    fn axis(&self) -> IVec2 {
        self.axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_polled_in_order() {
        let mut input = ScriptedInput::new();
        input.press(Button::IncreaseSize);
        input.push_event(InputEvent::Quit);

        assert_eq!(input.poll_event(), Some(InputEvent::ButtonPress { button: Button::IncreaseSize }));
        assert_eq!(input.poll_event(), Some(InputEvent::Quit));
        assert_eq!(input.poll_event(), None);
    }

    #[test]
    fn held_buttons_persist_until_released() {
        let mut input = ScriptedInput::new();
        input.hold(Button::SpawnDynamic);
        input.hold(Button::SpawnDynamic);

        assert!(input.is_held(Button::SpawnDynamic));
        assert!(!input.is_held(Button::SpawnStatic));

        input.release(Button::SpawnDynamic);
        assert!(!input.is_held(Button::SpawnDynamic));
    }

    #[test]
    fn axis_is_limited_to_stick_range() {
        let mut input = ScriptedInput::new();
        input.set_axis(IVec2::new(100000, -100000));

        assert_eq!(input.axis(), IVec2::new(32767, -32768));
    }
}
