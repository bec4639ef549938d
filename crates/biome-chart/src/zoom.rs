//! Pan/zoom gesture handling modelled on `d3-zoom`.
//!
//! The controller owns the view transform. Every change is reported to the
//! registered handler as a [`ZoomEvent`]; the handler decides what to do with
//! it (the graph writes it into its drawn group).

use std::fmt;

use biome_engine::coords::{Rect, Transform, Vec2};
use biome_engine::input::{
    InputEvent, Modifiers, MouseButton, MouseButtonState, MouseWheelDelta, PointerButtonEvent,
    PointerMoveEvent,
};

/// Allowed scale range.
pub const SCALE_EXTENT: [f32; 2] = [1.0, 8.0];

const LINE_WHEEL_FACTOR: f32 = 0.05;
const PIXEL_WHEEL_FACTOR: f32 = 0.002;
const CTRL_WHEEL_BOOST: f32 = 10.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ZoomPhase {
    Start,
    Zoom,
    End,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomEvent {
    pub phase: ZoomPhase,
    pub transform: Transform,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Active,
}

pub type ZoomHandler = Box<dyn FnMut(&ZoomEvent)>;

pub struct ZoomController {
    transform: Transform,
    scale_extent: [f32; 2],
    bounds: Rect,
    state: GestureState,
    /// Surface point held under the pointer while dragging.
    grab: Option<Vec2>,
    pointer: Option<Vec2>,
    modifiers: Modifiers,
    on_zoom: Option<ZoomHandler>,
}

impl fmt::Debug for ZoomController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomController")
            .field("transform", &self.transform)
            .field("scale_extent", &self.scale_extent)
            .field("bounds", &self.bounds)
            .field("state", &self.state)
            .field("has_handler", &self.on_zoom.is_some())
            .finish()
    }
}

impl ZoomController {
    /// Controller accepting gestures that start inside `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self {
            transform: Transform::identity(),
            scale_extent: SCALE_EXTENT,
            bounds,
            state: GestureState::Idle,
            grab: None,
            pointer: None,
            modifiers: Modifiers::default(),
            on_zoom: None,
        }
    }

    pub fn with_scale_extent(mut self, min: f32, max: f32) -> Self {
        self.scale_extent = [min.min(max), max.max(min)];
        self
    }

    pub fn on_zoom(&mut self, handler: impl FnMut(&ZoomEvent) + 'static) {
        self.on_zoom = Some(Box::new(handler));
    }

    /// Drops the handler; later gestures still update the transform.
    pub fn clear_handler(&mut self) {
        self.on_zoom = None;
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[inline]
    pub fn state(&self) -> GestureState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == GestureState::Active
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn scale_extent(&self) -> [f32; 2] {
        self.scale_extent
    }

    /// Feeds one platform event. Returns `true` when the view transform changed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
                false
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                let p = Vec2::new(*x, *y);
                self.pointer = Some(p);
                self.drag_to(p)
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers }) => {
                self.modifiers = *modifiers;
                let p = Vec2::new(*x, *y);
                self.pointer = Some(p);
                match state {
                    MouseButtonState::Pressed => {
                        self.press(*button, p);
                        false
                    }
                    MouseButtonState::Released => {
                        if *button == MouseButton::Left {
                            self.release();
                        }
                        false
                    }
                }
            }

            InputEvent::MouseWheel { delta, modifiers } => {
                self.modifiers = *modifiers;
                match self.pointer {
                    Some(p) => self.wheel(*delta, p),
                    None => false,
                }
            }

            InputEvent::PointerLeft => {
                // An active drag keeps tracking; the runtime captures the pointer.
                if !self.is_active() {
                    self.pointer = None;
                }
                false
            }

            InputEvent::Focused(false) => {
                self.release();
                false
            }

            InputEvent::Focused(true) | InputEvent::Key { .. } => false,
        }
    }

    /// Applies one wheel tick at `at`. Returns `true` when the scale changed.
    ///
    /// Positive `y` zooms in. The surface point under `at` stays put.
    pub fn wheel(&mut self, delta: MouseWheelDelta, at: Vec2) -> bool {
        if !self.bounds.contains(at) {
            return false;
        }

        let mut exponent = match delta {
            MouseWheelDelta::Line { y, .. } => y * LINE_WHEEL_FACTOR,
            MouseWheelDelta::Pixel { y, .. } => y * PIXEL_WHEEL_FACTOR,
        };
        if self.modifiers.ctrl {
            exponent *= CTRL_WHEEL_BOOST;
        }

        let k = self.clamp_scale(self.transform.scale * exponent.exp2());
        if !k.is_finite() || k == self.transform.scale {
            return false;
        }

        let next = scale_about(self.transform, k, at);
        self.commit(next);
        true
    }

    /// Sets the scale (clamped), keeping `anchor` (default: bounds centre) fixed.
    pub fn scale_to(&mut self, k: f32, anchor: Option<Vec2>) {
        if !k.is_finite() {
            log::debug!("zoom: ignoring non-finite scale {k}");
            return;
        }
        let anchor = anchor.unwrap_or_else(|| self.bounds.center());
        let next = scale_about(self.transform, self.clamp_scale(k), anchor);
        self.commit(next);
    }

    /// Multiplies the scale by `factor` (result clamped).
    pub fn scale_by(&mut self, factor: f32, anchor: Option<Vec2>) {
        self.scale_to(self.transform.scale * factor, anchor);
    }

    /// Shifts the view by `(dx, dy)` surface pixels.
    pub fn translate_by(&mut self, dx: f32, dy: f32) {
        let next = self.transform.translated(Vec2::new(dx, dy));
        self.commit(next);
    }

    /// Replaces the transform; the scale is clamped.
    pub fn transform_to(&mut self, t: Transform) {
        let next = t.with_scale(self.clamp_scale(t.scale));
        self.commit(next);
    }

    /// Back to identity.
    pub fn reset(&mut self) {
        self.transform_to(Transform::identity());
    }

    fn clamp_scale(&self, k: f32) -> f32 {
        k.clamp(self.scale_extent[0], self.scale_extent[1])
    }

    fn press(&mut self, button: MouseButton, p: Vec2) {
        if button != MouseButton::Left || self.modifiers.ctrl || self.is_active() {
            return;
        }
        if !self.bounds.contains(p) {
            return;
        }

        self.grab = Some(self.transform.invert(p));
        self.state = GestureState::Active;
        self.emit(ZoomPhase::Start);
    }

    fn drag_to(&mut self, p: Vec2) -> bool {
        let Some(grab) = self.grab else {
            return false;
        };
        let next = Transform::new(p - grab * self.transform.scale, self.transform.scale);
        if next == self.transform {
            return false;
        }
        self.transform = next;
        self.emit(ZoomPhase::Zoom);
        true
    }

    fn release(&mut self) {
        if !self.is_active() {
            return;
        }
        self.grab = None;
        self.state = GestureState::Idle;
        self.emit(ZoomPhase::End);
    }

    /// Applies `next`. Outside a drag this is a whole gesture (start, zoom, end);
    /// inside one it is a single zoom step and the grab point is re-anchored.
    fn commit(&mut self, next: Transform) {
        let in_gesture = self.is_active();
        if !in_gesture {
            self.emit(ZoomPhase::Start);
        }

        self.transform = next;
        log::debug!("zoom: {}", self.transform);
        if in_gesture {
            if let Some(p) = self.pointer {
                self.grab = Some(next.invert(p));
            }
        }
        self.emit(ZoomPhase::Zoom);

        if !in_gesture {
            self.emit(ZoomPhase::End);
        }
    }

    fn emit(&mut self, phase: ZoomPhase) {
        let event = ZoomEvent { phase, transform: self.transform };
        if let Some(handler) = self.on_zoom.as_mut() {
            handler(&event);
        }
    }
}

/// `t` rescaled to `k` with `anchor` (surface space) kept in place.
fn scale_about(t: Transform, k: f32, anchor: Vec2) -> Transform {
    let local = t.invert(anchor);
    Transform::new(anchor - local * k, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller() -> (ZoomController, Rc<RefCell<Vec<ZoomEvent>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut zoom = ZoomController::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let sink = Rc::clone(&log);
        zoom.on_zoom(move |e| sink.borrow_mut().push(*e));
        (zoom, log)
    }

    fn phases(log: &Rc<RefCell<Vec<ZoomEvent>>>) -> Vec<ZoomPhase> {
        log.borrow().iter().map(|e| e.phase).collect()
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    fn button(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    fn wheel_up(lines: f32) -> InputEvent {
        InputEvent::MouseWheel {
            delta: MouseWheelDelta::Line { x: 0.0, y: lines },
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn requested_scale_is_clamped_before_callback() {
        let (mut zoom, log) = controller();
        zoom.scale_to(12.0, None);

        assert_eq!(zoom.transform().scale, 8.0);
        assert_eq!(phases(&log), [ZoomPhase::Start, ZoomPhase::Zoom, ZoomPhase::End]);
        let events = log.borrow();
        // Start reports the transform the gesture began from.
        assert_eq!(events[0].transform.scale, 1.0);
        assert_eq!(events[1].transform.scale, 8.0);
        assert_eq!(events[2].transform.scale, 8.0);
        drop(events);

        zoom.scale_by(0.01, None);
        assert_eq!(zoom.transform().scale, 1.0);
    }

    #[test]
    fn scale_to_keeps_centre_fixed() {
        let (mut zoom, _) = controller();
        zoom.scale_to(2.0, None);
        let centre = Vec2::new(400.0, 300.0);
        assert!(approx(zoom.transform().apply(centre), centre));
        assert!(approx(zoom.transform().translate, Vec2::new(-400.0, -300.0)));
    }

    #[test]
    fn wheel_zooms_about_pointer() {
        let (mut zoom, log) = controller();
        zoom.handle_event(&moved(200.0, 150.0));
        // 20 notches double the scale.
        assert!(zoom.handle_event(&wheel_up(20.0)));

        let t = zoom.transform();
        assert!((t.scale - 2.0).abs() < 1e-5);
        assert!(approx(t.apply(Vec2::new(200.0, 150.0)), Vec2::new(200.0, 150.0)));
        assert_eq!(phases(&log), [ZoomPhase::Start, ZoomPhase::Zoom, ZoomPhase::End]);
        assert!(!zoom.is_active());
    }

    #[test]
    fn pixel_wheel_is_finer_than_line_wheel() {
        let (mut zoom, _) = controller();
        zoom.wheel(MouseWheelDelta::Pixel { x: 0.0, y: 100.0 }, Vec2::new(10.0, 10.0));
        assert!((zoom.transform().scale - 0.2f32.exp2()).abs() < 1e-5);
    }

    #[test]
    fn wheel_at_scale_bound_emits_nothing() {
        let (mut zoom, log) = controller();
        zoom.handle_event(&moved(100.0, 100.0));
        assert!(!zoom.handle_event(&wheel_up(-3.0)));
        assert!(log.borrow().is_empty());
        assert!(zoom.transform().is_identity());
    }

    #[test]
    fn drag_pans_by_pointer_delta() {
        let (mut zoom, log) = controller();
        zoom.handle_event(&button(MouseButton::Left, MouseButtonState::Pressed, 10.0, 10.0));
        assert_eq!(zoom.state(), GestureState::Active);
        zoom.handle_event(&moved(30.0, 25.0));
        zoom.handle_event(&button(MouseButton::Left, MouseButtonState::Released, 30.0, 25.0));

        assert_eq!(zoom.transform(), Transform::translation(20.0, 15.0));
        assert_eq!(zoom.state(), GestureState::Idle);
        assert_eq!(phases(&log), [ZoomPhase::Start, ZoomPhase::Zoom, ZoomPhase::End]);
    }

    #[test]
    fn click_without_movement_emits_start_and_end_only() {
        let (mut zoom, log) = controller();
        zoom.handle_event(&button(MouseButton::Left, MouseButtonState::Pressed, 10.0, 10.0));
        assert!(!zoom.handle_event(&moved(10.0, 10.0)));
        zoom.handle_event(&button(MouseButton::Left, MouseButtonState::Released, 10.0, 10.0));

        assert!(zoom.transform().is_identity());
        assert_eq!(phases(&log), [ZoomPhase::Start, ZoomPhase::End]);
    }

    #[test]
    fn drag_at_higher_scale_still_follows_pointer() {
        let (mut zoom, _) = controller();
        zoom.transform_to(Transform::new(Vec2::new(-100.0, -50.0), 4.0));
        zoom.handle_event(&button(MouseButton::Left, MouseButtonState::Pressed, 100.0, 100.0));
        zoom.handle_event(&moved(90.0, 120.0));
        assert!(approx(zoom.transform().translate, Vec2::new(-110.0, -30.0)));
        assert_eq!(zoom.transform().scale, 4.0);
    }

    #[test]
    fn gestures_outside_bounds_are_ignored() {
        let (mut zoom, log) = controller();
        zoom.handle_event(&button(MouseButton::Left, MouseButtonState::Pressed, -5.0, 10.0));
        zoom.handle_event(&moved(900.0, 700.0));
        zoom.handle_event(&wheel_up(5.0));
        assert!(log.borrow().is_empty());
        assert!(zoom.transform().is_identity());
    }

    #[test]
    fn non_left_and_ctrl_presses_do_not_drag() {
        let (mut zoom, log) = controller();
        zoom.handle_event(&button(MouseButton::Right, MouseButtonState::Pressed, 10.0, 10.0));
        zoom.handle_event(&InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 10.0,
            y: 10.0,
            modifiers: Modifiers { ctrl: true, ..Modifiers::default() },
        }));
        zoom.handle_event(&moved(50.0, 50.0));
        assert!(log.borrow().is_empty());
        assert!(!zoom.is_active());
    }

    #[test]
    fn focus_loss_ends_drag() {
        let (mut zoom, log) = controller();
        zoom.handle_event(&button(MouseButton::Left, MouseButtonState::Pressed, 10.0, 10.0));
        zoom.handle_event(&InputEvent::Focused(false));
        assert!(!zoom.is_active());
        assert_eq!(phases(&log), [ZoomPhase::Start, ZoomPhase::End]);
    }

    #[test]
    fn wheel_during_drag_is_part_of_the_gesture() {
        let (mut zoom, log) = controller();
        zoom.handle_event(&button(MouseButton::Left, MouseButtonState::Pressed, 100.0, 100.0));
        zoom.handle_event(&wheel_up(20.0));
        zoom.handle_event(&moved(110.0, 100.0));
        zoom.handle_event(&button(MouseButton::Left, MouseButtonState::Released, 110.0, 100.0));

        assert_eq!(
            phases(&log),
            [ZoomPhase::Start, ZoomPhase::Zoom, ZoomPhase::Zoom, ZoomPhase::End]
        );
        let t = zoom.transform();
        assert!((t.scale - 2.0).abs() < 1e-5);
        // The grabbed point (100, 100) now sits under the pointer at (110, 100).
        assert!(approx(t.apply(Vec2::new(100.0, 100.0)), Vec2::new(110.0, 100.0)));
    }

    #[test]
    fn reset_returns_to_identity() {
        let (mut zoom, _) = controller();
        zoom.scale_to(3.0, Some(Vec2::new(10.0, 10.0)));
        zoom.translate_by(5.0, -5.0);
        zoom.reset();
        assert!(zoom.transform().is_identity());
    }

    #[test]
    fn custom_scale_extent() {
        let mut zoom = ZoomController::new(Rect::new(0.0, 0.0, 10.0, 10.0)).with_scale_extent(4.0, 0.5);
        assert_eq!(zoom.scale_extent(), [0.5, 4.0]);
        zoom.scale_to(0.1, None);
        assert_eq!(zoom.transform().scale, 0.5);
    }
}
