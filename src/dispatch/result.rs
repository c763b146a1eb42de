//! Double dispatch with a generic result. Handlers return their value, so no
//! scratch state is needed.

use crate::{expr::*, operation::Operation};

pub trait Visitor<R> {
    fn visit_lit(&mut self, lit: &Lit) -> R;
    fn visit_add(&mut self, add: &Add) -> R;
    fn visit_mul(&mut self, mul: &Mul) -> R;
}

pub trait Accept {
    fn accept<R>(&self, visitor: &mut dyn Visitor<R>) -> R;
}

impl Accept for Lit {
    fn accept<R>(&self, visitor: &mut dyn Visitor<R>) -> R {
        visitor.visit_lit(self)
    }
}

impl Accept for Add {
    fn accept<R>(&self, visitor: &mut dyn Visitor<R>) -> R {
        visitor.visit_add(self)
    }
}

impl Accept for Mul {
    fn accept<R>(&self, visitor: &mut dyn Visitor<R>) -> R {
        visitor.visit_mul(self)
    }
}

impl Accept for Expr {
    fn accept<R>(&self, visitor: &mut dyn Visitor<R>) -> R {
        match self {
            Expr::Lit(lit) => lit.accept(visitor),
            Expr::Add(add) => add.accept(visitor),
            Expr::Mul(mul) => mul.accept(visitor),
        }
    }
}

pub trait Dispatcher<R>: Visitor<R> + Sized {
    fn dispatch(&mut self, expr: &Expr) -> R {
        expr.accept(self)
    }
}

/// Runs an `Operation` as a result-returning visitor
#[derive(Debug, Clone, Copy, Default)]
pub struct Adapter<O>(pub O);

impl<R, O> Visitor<R> for Adapter<O>
where
    O: Operation<R>,
{
    fn visit_lit(&mut self, lit: &Lit) -> R {
        self.0.lit(lit.n)
    }
    fn visit_add(&mut self, add: &Add) -> R {
        let left: R = self.dispatch(&add.left);
        let right: R = self.dispatch(&add.right);
        self.0.add(left, right)
    }
    fn visit_mul(&mut self, mul: &Mul) -> R {
        let left: R = self.dispatch(&mul.left);
        let right: R = self.dispatch(&mul.right);
        self.0.mul(left, right)
    }
}

impl<R, O> Dispatcher<R> for Adapter<O> where O: Operation<R> {}

pub fn run<R, O>(expr: &Expr, op: O) -> R
where
    O: Operation<R>,
{
    Adapter(op).dispatch(expr)
}
