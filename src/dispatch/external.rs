//! External visitor with an explicit dispatcher. The tree knows nothing of the
//! operations run over it; the visitor recurses into children itself.

use crate::{expr::*, operation::Operation};

pub trait Visitor {
    fn visit_lit(&mut self, lit: &Lit);
    fn visit_add(&mut self, add: &Add);
    fn visit_mul(&mut self, mul: &Mul);
}

pub trait Dispatcher: Visitor {
    fn dispatch(&mut self, expr: &Expr) {
        match expr {
            Expr::Lit(lit) => self.visit_lit(lit),
            Expr::Add(add) => self.visit_add(add),
            Expr::Mul(mul) => self.visit_mul(mul),
        }
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
        self.result.take().expect("No result after dispatch")
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

impl<O, R> Dispatcher for Scratch<O, R> where O: Operation<R> {}

pub fn run<R, O>(expr: &Expr, op: O) -> R
where
    O: Operation<R>,
{
    let mut scratch = Scratch::new(op);
    scratch.dispatch(expr);
    scratch.take()
}

/// Keeps an explicit stack of results instead of a scratch slot. Composite
/// handlers pop their children's results, right first.
#[derive(Debug)]
pub struct Stacked<O, R> {
    op: O,
    stack: Vec<R>,
}

impl<O, R> Stacked<O, R> {
    pub fn new(op: O) -> Self {
        Stacked {
            op,
            stack: Vec::new(),
        }
    }
    #[track_caller]
    fn pop(&mut self) -> R {
        self.stack.pop().expect("Result stack underflow")
    }
}

impl<O, R> Visitor for Stacked<O, R>
where
    O: Operation<R>,
{
    fn visit_lit(&mut self, lit: &Lit) {
        let n = self.op.lit(lit.n);
        self.stack.push(n);
    }
    fn visit_add(&mut self, add: &Add) {
        self.dispatch(&add.left);
        self.dispatch(&add.right);
        let right = self.pop();
        let left = self.pop();
        let sum = self.op.add(left, right);
        self.stack.push(sum);
    }
    fn visit_mul(&mut self, mul: &Mul) {
        self.dispatch(&mul.left);
        self.dispatch(&mul.right);
        let right = self.pop();
        let left = self.pop();
        let product = self.op.mul(left, right);
        self.stack.push(product);
    }
}

impl<O, R> Dispatcher for Stacked<O, R> where O: Operation<R> {}

pub fn run_stacked<R, O>(expr: &Expr, op: O) -> R
where
    O: Operation<R>,
{
    let mut stacked = Stacked::new(op);
    stacked.dispatch(expr);
    stacked.pop()
}
