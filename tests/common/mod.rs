// Shared test double: a DrawSurface that records every operation so tests can
// assert on the exact drawing sequence without a browser.

use std::cell::RefCell;
use std::rc::Rc;

use hangman_canvas::DrawSurface;

pub const SURFACE_W: f64 = 300.0;
pub const SURFACE_H: f64 = 450.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear(f64, f64, f64, f64),
    Fill(f64, f64, f64, f64),
}

/// Cloning shares the op log, so tests keep one handle and move the other
/// into the session under test.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    ops: Rc<RefCell<Vec<Op>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.borrow().clone()
    }

    #[allow(dead_code)]
    pub fn op_count(&self) -> usize {
        self.ops.borrow().len()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.borrow_mut().push(Op::Clear(x, y, w, h));
    }

    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.borrow_mut().push(Op::Fill(x, y, w, h));
    }

    fn width(&self) -> f64 {
        SURFACE_W
    }

    fn height(&self) -> f64 {
        SURFACE_H
    }
}
