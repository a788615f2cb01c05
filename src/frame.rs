use std::cell::RefCell;
use std::rc::Rc;

use birthday_core::{supervise, Continuation, FrameTask, Scheduler};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drives tasks with `requestAnimationFrame`. Every task gets its own loop,
/// so a stopped or failing loop never affects the others.
#[derive(Clone)]
pub struct RafScheduler {
    started: Instant,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Milliseconds since the scheduler was created.
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

impl Scheduler for RafScheduler {
    fn schedule(&mut self, label: &'static str, mut task: FrameTask) {
        let started = self.started;
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let now_ms = started.elapsed().as_secs_f64() * 1000.0;
            if supervise(label, task(now_ms)) == Continuation::Stop {
                log::info!("[{}] loop stopped", label);
                // Dropping the closure from inside itself is deferred to the next turn.
                let done = tick_clone.clone();
                crate::dom::set_timeout(0, move || {
                    done.borrow_mut().take();
                });
                return;
            }
            request_frame(&tick_clone);
        }) as Box<dyn FnMut()>));
        request_frame(&tick);
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame error: {:?}", e);
        }
    }
}
