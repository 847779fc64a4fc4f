use super::debounce::Debouncer;
use std::time::Instant;

/// Pointer events delivered by the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Down,
    Move,
    Up,
}

/// Maps pointer activity onto recognition requests.
///
/// Moves only count while a stroke is in progress; releasing the pointer
/// always schedules a request. Each scheduled request carries the snapshot
/// provided with the event and goes through the debouncer, so a burst of
/// moves collapses into one recognition of the latest drawing.
#[derive(Debug)]
pub struct StrokeTracker<T> {
    drawing: bool,
    queue: Debouncer<T>,
}

impl<T> Default for StrokeTracker<T> {
    fn default() -> Self {
        Self::new(Debouncer::default())
    }
}

impl<T> StrokeTracker<T> {
    pub fn new(queue: Debouncer<T>) -> Self {
        Self {
            drawing: false,
            queue,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Feed one pointer event. `snapshot` is only invoked when the event
    /// schedules a request.
    pub fn on_event<F>(&mut self, event: PointerEvent, now: Instant, snapshot: F)
    where
        F: FnOnce() -> T,
    {
        match event {
            PointerEvent::Down => self.drawing = true,
            PointerEvent::Move if self.drawing => self.queue.submit(snapshot(), now),
            PointerEvent::Move => {}
            PointerEvent::Up => {
                self.drawing = false;
                self.queue.submit(snapshot(), now);
            }
        }
    }

    /// Next request whose quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        self.queue.poll(now)
    }

    /// Forget any scheduled request.
    pub fn reset(&mut self) {
        self.drawing = false;
        self.queue.cancel();
    }

    pub fn queue(&self) -> &Debouncer<T> {
        &self.queue
    }
}
