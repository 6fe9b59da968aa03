// Host frame scheduling and the self-rescheduling loop built on it.
//
// The loop is an owned resource: `start` schedules the first frame, every
// frame runs the step and then schedules the next one, and `stop` (or drop)
// cancels whatever frame is pending. Once stopped, no callback runs again.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type FrameHandle = i32;
pub type FrameCallback = Rc<dyn Fn()>;

pub trait FrameClock {
    /// Run `callback` once on the next display refresh. `None` if the host
    /// refused to schedule it.
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle>;
    fn cancel_frame(&self, handle: FrameHandle);
}

struct LoopState<C: FrameClock> {
    clock: C,
    step: RefCell<Box<dyn FnMut()>>,
    running: Cell<bool>,
    pending: Cell<Option<FrameHandle>>,
}

fn schedule<C: FrameClock + 'static>(state: &Rc<LoopState<C>>) {
    let next = Rc::clone(state);
    let handle = state.clock.request_frame(Rc::new(move || {
        next.pending.set(None);
        if !next.running.get() {
            return;
        }
        {
            let mut step = next.step.borrow_mut();
            (*step)();
        }
        if next.running.get() {
            schedule(&next);
        }
    }));
    state.pending.set(handle);
    if handle.is_none() {
        // nothing will ever call back, so the loop is over
        state.running.set(false);
    }
}

pub struct Animation<C: FrameClock + 'static> {
    state: Rc<LoopState<C>>,
}

impl<C: FrameClock + 'static> Animation<C> {
    pub fn start<F>(clock: C, step: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let state = Rc::new(LoopState {
            clock,
            step: RefCell::new(Box::new(step)),
            running: Cell::new(true),
            pending: Cell::new(None),
        });
        schedule(&state);
        Animation { state }
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn stop(&mut self) {
        self.state.running.set(false);
        if let Some(handle) = self.state.pending.take() {
            self.state.clock.cancel_frame(handle);
        }
    }
}

impl<C: FrameClock + 'static> Drop for Animation<C> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::{FrameCallback, FrameClock, FrameHandle};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    // Frames fire only when the test calls `tick`
    #[derive(Clone, Default)]
    pub struct ManualClock {
        queue: Rc<RefCell<Vec<(FrameHandle, FrameCallback)>>>,
        next_handle: Rc<Cell<FrameHandle>>,
    }

    impl ManualClock {
        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        pub fn tick(&self) {
            let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            for (_, callback) in due {
                callback();
            }
        }
    }

    impl FrameClock for ManualClock {
        fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
            let handle = self.next_handle.get() + 1;
            self.next_handle.set(handle);
            self.queue.borrow_mut().push((handle, callback));
            Some(handle)
        }

        fn cancel_frame(&self, handle: FrameHandle) {
            self.queue.borrow_mut().retain(|(h, _)| *h != handle);
        }
    }
}
