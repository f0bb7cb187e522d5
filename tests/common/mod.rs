//! Shared test infrastructure for pipeline integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use futures_lite::future;
use pushlight::traits::{Button, Led};
use pushlight::types::{ButtonLevel, LedCommand};

// ============================================================================
// Mock Button
// ============================================================================

/// Button double that replays a scripted sequence of levels.
///
/// The last level of the script is held once the script runs out, like a
/// button left in one position. Clones share the same underlying state,
/// so a test can keep a handle while a sampler future owns the original.
#[derive(Clone)]
pub struct ScriptedButton {
    levels: Rc<RefCell<VecDeque<ButtonLevel>>>,
    reads: Rc<Cell<usize>>,
}

impl ScriptedButton {
    pub fn new(script: &[ButtonLevel]) -> Self {
        assert!(!script.is_empty(), "button script must hold at least one level");
        Self {
            levels: Rc::new(RefCell::new(script.iter().copied().collect())),
            reads: Rc::new(Cell::new(0)),
        }
    }

    /// Number of times the pipeline has sampled this button.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Button for ScriptedButton {
    fn level(&self) -> ButtonLevel {
        self.reads.set(self.reads.get() + 1);
        let mut levels = self.levels.borrow_mut();
        if levels.len() > 1 {
            levels.pop_front().unwrap()
        } else {
            *levels.front().unwrap()
        }
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// LED double that records every command applied to it, in order.
///
/// Clones share the same history, so a test can inspect it while a
/// driver future owns the original.
#[derive(Clone, Default)]
pub struct RecordingLed {
    history: Rc<RefCell<Vec<LedCommand>>>,
}

impl RecordingLed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<LedCommand> {
        self.history.borrow().clone()
    }

    pub fn last(&self) -> Option<LedCommand> {
        self.history.borrow().last().copied()
    }
}

impl Led for RecordingLed {
    fn on(&mut self) {
        self.history.borrow_mut().push(LedCommand::On);
    }

    fn off(&mut self) {
        self.history.borrow_mut().push(LedCommand::Off);
    }
}

// ============================================================================
// Stage Driving
// ============================================================================

/// Poll a pipeline stage future exactly once.
///
/// The stage loops forever, so a single poll drains everything currently
/// queued for it and then suspends; the return value is always `None`
/// for a healthy stage.
pub fn poll_stage<F: Future>(stage: Pin<&mut F>) -> Option<F::Output> {
    future::block_on(future::poll_once(stage))
}
