//! winit events to [`InputEvent`]s in logical pixels.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::{
    InputEvent, InputState, Key, KeyState, Modifiers, MouseButton, MouseButtonState,
    MouseWheelDelta, PointerButtonEvent, PointerMoveEvent,
};

impl From<ModifiersState> for Modifiers {
    fn from(m: ModifiersState) -> Self {
        Self {
            shift: m.shift_key(),
            ctrl: m.control_key(),
            alt: m.alt_key(),
            meta: m.super_key(),
        }
    }
}

impl From<winit::event::MouseButton> for MouseButton {
    fn from(b: winit::event::MouseButton) -> Self {
        use winit::event::MouseButton as W;
        match b {
            W::Left => MouseButton::Left,
            W::Right => MouseButton::Right,
            W::Middle => MouseButton::Middle,
            W::Back | W::Forward | W::Other(_) => MouseButton::Other,
        }
    }
}

impl From<ElementState> for MouseButtonState {
    fn from(s: ElementState) -> Self {
        if s.is_pressed() { MouseButtonState::Pressed } else { MouseButtonState::Released }
    }
}

impl From<ElementState> for KeyState {
    fn from(s: ElementState) -> Self {
        if s.is_pressed() { KeyState::Pressed } else { KeyState::Released }
    }
}

impl From<PhysicalKey> for Key {
    fn from(k: PhysicalKey) -> Self {
        match k {
            PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
            PhysicalKey::Code(KeyCode::Home) => Key::Home,
            PhysicalKey::Code(KeyCode::KeyR) => Key::R,
            _ => Key::Other,
        }
    }
}

fn logical(p: PhysicalPosition<f64>, scale_factor: f64) -> (f32, f32) {
    let l = p.to_logical::<f64>(scale_factor);
    (l.x as f32, l.y as f32)
}

fn wheel_delta(delta: MouseScrollDelta, scale_factor: f64) -> MouseWheelDelta {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => MouseWheelDelta::Line { x, y },
        MouseScrollDelta::PixelDelta(p) => {
            let (x, y) = logical(p, scale_factor);
            MouseWheelDelta::Pixel { x, y }
        }
    }
}

/// Maps the window events the chart cares about. Button and wheel events carry
/// the last known pointer position and modifiers from `state`.
pub(crate) fn translate(
    event: &WindowEvent,
    scale_factor: f64,
    state: &InputState,
) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::ModifiersChanged(m) => InputEvent::ModifiersChanged(m.state().into()),
        WindowEvent::Focused(focused) => InputEvent::Focused(*focused),
        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,
        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = logical(*position, scale_factor);
            InputEvent::PointerMoved(PointerMoveEvent { x, y })
        }
        WindowEvent::MouseInput { state: pressed, button, .. } => {
            let (x, y) = state.pointer_pos.unwrap_or_default();
            InputEvent::PointerButton(PointerButtonEvent {
                button: (*button).into(),
                state: (*pressed).into(),
                x,
                y,
                modifiers: state.modifiers,
            })
        }
        WindowEvent::MouseWheel { delta, .. } => InputEvent::MouseWheel {
            delta: wheel_delta(*delta, scale_factor),
            modifiers: state.modifiers,
        },
        WindowEvent::KeyboardInput { event, .. } => InputEvent::Key {
            key: event.physical_key.into(),
            state: event.state.into(),
            modifiers: state.modifiers,
            repeat: event.repeat,
        },
        _ => return None,
    };
    Some(ev)
}
