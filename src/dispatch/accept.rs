//! External visitor with double dispatch. Each node picks its own handler in
//! `accept`, but the visitor still controls traversal.

use log::trace;

pub use super::external::Visitor;
use crate::{expr::*, operation::Operation};

pub trait Accept {
    fn accept(&self, visitor: &mut dyn Visitor);
}

impl Accept for Lit {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_lit(self)
    }
}

impl Accept for Add {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_add(self)
    }
}

impl Accept for Mul {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_mul(self)
    }
}

impl Accept for Expr {
    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Expr::Lit(lit) => lit.accept(visitor),
            Expr::Add(add) => add.accept(visitor),
            Expr::Mul(mul) => mul.accept(visitor),
        }
    }
}

/// Uniform entry point. Implementors may override `dispatch` to hook in
/// before or after the node accepts.
pub trait Dispatcher: Visitor + Sized {
    fn dispatch(&mut self, expr: &Expr) {
        expr.accept(self)
    }
}

/// Threads the result of each handler through a single scratch slot
#[derive(Debug)]
pub struct Scratch<O, R> {
    op: O,
    result: Option<R>,
}

impl<O, R> Scratch<O, R> {
    pub fn new(op: O) -> Self {
        Scratch { op, result: None }
    }
    #[track_caller]
    fn take(&mut self) -> R {
        self.result.take().expect("No result after accept")
    }
}

impl<O, R> Visitor for Scratch<O, R>
where
    O: Operation<R>,
{
    fn visit_lit(&mut self, lit: &Lit) {
        self.result = Some(self.op.lit(lit.n));
    }
    fn visit_add(&mut self, add: &Add) {
        self.dispatch(&add.left);
        let left = self.take();
        self.dispatch(&add.right);
        let right = self.take();
        self.result = Some(self.op.add(left, right));
    }
    fn visit_mul(&mut self, mul: &Mul) {
        self.dispatch(&mul.left);
        let left = self.take();
        self.dispatch(&mul.right);
        let right = self.take();
        self.result = Some(self.op.mul(left, right));
    }
}

impl<O, R> Dispatcher for Scratch<O, R>
where
    O: Operation<R>,
{
    fn dispatch(&mut self, expr: &Expr) {
        trace!("accept {}", expr);
        expr.accept(self)
    }
}

pub fn run<R, O>(expr: &Expr, op: O) -> R
where
    O: Operation<R>,
{
    let mut scratch = Scratch::new(op);
    scratch.dispatch(expr);
    scratch.take()
}
