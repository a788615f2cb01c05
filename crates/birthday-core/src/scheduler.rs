//! Frame scheduling and the per-frame error boundary.
//!
//! Each loop (stars, effects, breath) is a task invoked once per frame with
//! the scheduler clock in milliseconds. A task that fails is logged and still
//! rescheduled; only an explicit [`Continuation::Stop`] ends a loop.

use crate::error::SceneResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Stop,
}

pub type FrameTask = Box<dyn FnMut(f64) -> SceneResult<Continuation>>;

pub trait Scheduler {
    /// Runs `task` before every repaint until it returns `Stop`.
    fn schedule(&mut self, label: &'static str, task: FrameTask);
}

/// Collapses a task result into a scheduling decision. Errors never stop the loop.
pub fn supervise(label: &str, result: SceneResult<Continuation>) -> Continuation {
    match result {
        Ok(c) => c,
        Err(e) => {
            log::error!("[{}] frame error: {}", label, e);
            Continuation::Continue
        }
    }
}

struct Scheduled {
    label: &'static str,
    task: FrameTask,
    failures: u64,
}

/// Deterministic scheduler stepped by hand.
#[derive(Default)]
pub struct ManualScheduler {
    tasks: Vec<Scheduled>,
    frames: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invokes every live task once, in scheduling order.
    pub fn run_frame(&mut self, now_ms: f64) {
        self.tasks.retain_mut(|s| {
            let result = (s.task)(now_ms);
            if result.is_err() {
                s.failures += 1;
            }
            supervise(s.label, result) == Continuation::Continue
        });
        self.frames += 1;
    }

    /// Runs `count` frames spaced `frame_ms` apart, starting at `start_ms`.
    pub fn run_frames(&mut self, start_ms: f64, frame_ms: f64, count: usize) {
        for i in 0..count {
            self.run_frame(start_ms + frame_ms * i as f64);
        }
    }

    pub fn is_scheduled(&self, label: &str) -> bool {
        self.tasks.iter().any(|s| s.label == label)
    }

    /// Errors swallowed so far for `label`.
    pub fn failures(&self, label: &str) -> u64 {
        self.tasks
            .iter()
            .filter(|s| s.label == label)
            .map(|s| s.failures)
            .sum()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, label: &'static str, task: FrameTask) {
        self.tasks.push(Scheduled {
            label,
            task,
            failures: 0,
        });
    }
}
