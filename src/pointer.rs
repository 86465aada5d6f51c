use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::units::Pixels;

/// Raw pointer input as delivered by the host, mouse and touch alike
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    MousePressed,
    MouseMoved { x: Pixels },
    MouseReleased,
    CursorLeft,
    TouchStarted { id: u64, x: Pixels },
    TouchMoved { id: u64, x: Pixels },
    TouchEnded { id: u64 },
}

/// A horizontal drag, whichever device produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Grab(Pixels),
    Drag(Pixels),
    Release,
}

pub trait GestureListener {
    fn gesture(&mut self, gesture: Gesture);
}

pub type SharedListener = Rc<RefCell<dyn GestureListener>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, SharedListener)>,
    dragging: bool,
}

/// Keeps a listener registered for as long as it lives. Dropping it during a
/// drag releases that listener first, so nothing stays stuck mid-scrub.
#[must_use = "dropping the subscription unregisters the listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let (removed, dragging) = {
            let mut registry = registry.borrow_mut();
            let dragging = registry.dragging;
            let position = registry.listeners.iter().position(|(id, _)| *id == self.id);
            let removed = position.map(|index| registry.listeners.remove(index).1);
            (removed, dragging)
        };
        if let (Some(listener), true) = (removed, dragging) {
            listener.borrow_mut().gesture(Gesture::Release);
        }
    }
}

/// Handles all pointer events (mouse and touch) and converts them to drag gestures
pub struct PointerHandler {
    // Store active touches by their id
    active_touches: HashMap<u64, Pixels>,
    // The touch that owns the current drag, if it came from a touch
    dragging_touch: Option<u64>,
    mouse_position: Option<Pixels>,
    mouse_down: bool,
    registry: Rc<RefCell<Registry>>,
}

impl Default for PointerHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerHandler {
    pub fn new() -> Self {
        Self {
            active_touches: HashMap::new(),
            dragging_touch: None,
            mouse_position: None,
            mouse_down: false,
            registry: Rc::new(RefCell::new(Registry::default())),
        }
    }

    pub fn subscribe(&self, listener: SharedListener) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, listener));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn is_dragging(&self) -> bool {
        self.registry.borrow().dragging
    }

    /// Process a pointer event, returning whether it was consumed
    pub fn process(&mut self, event: &PointerEvent) -> bool {
        match *event {
            PointerEvent::MousePressed => {
                self.mouse_down = true;
                let x = self.mouse_position.unwrap_or_default();
                self.grab(x);
                true
            }
            PointerEvent::MouseMoved { x } => {
                self.mouse_position = Some(x);
                if self.mouse_down {
                    self.emit(Gesture::Drag(x));
                }
                self.mouse_down
            }
            PointerEvent::MouseReleased => {
                let was_down = self.mouse_down;
                self.mouse_down = false;
                if was_down {
                    self.release();
                }
                was_down
            }
            PointerEvent::CursorLeft => {
                // Cursor left the window - release any active drag
                if self.mouse_down {
                    self.mouse_down = false;
                    self.release();
                }
                true
            }
            PointerEvent::TouchStarted { id, x } => {
                self.active_touches.insert(id, x);
                // Only the first finger scrubs
                if self.active_touches.len() == 1 && !self.is_dragging() {
                    self.dragging_touch = Some(id);
                    self.grab(x);
                }
                true
            }
            PointerEvent::TouchMoved { id, x } => {
                self.active_touches.insert(id, x);
                if self.dragging_touch == Some(id) {
                    self.emit(Gesture::Drag(x));
                }
                true
            }
            PointerEvent::TouchEnded { id } => {
                self.active_touches.remove(&id);
                if self.dragging_touch == Some(id) {
                    self.dragging_touch = None;
                    self.release();
                }
                true
            }
        }
    }

    fn grab(&mut self, x: Pixels) {
        self.registry.borrow_mut().dragging = true;
        self.emit(Gesture::Grab(x));
    }

    fn release(&mut self) {
        self.registry.borrow_mut().dragging = false;
        self.emit(Gesture::Release);
    }

    fn emit(&self, gesture: Gesture) {
        let listeners: Vec<SharedListener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener.borrow_mut().gesture(gesture);
        }
    }
}
