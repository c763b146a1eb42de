//! Internal visitor: the tree drives its own traversal and hands the
//! operation nothing but reduced child results.

use crate::{expr::*, operation::Operation};

pub trait Accept {
    fn accept<R, O>(&self, op: &mut O) -> R
    where
        O: Operation<R> + ?Sized;
}

impl Accept for Lit {
    fn accept<R, O>(&self, op: &mut O) -> R
    where
        O: Operation<R> + ?Sized,
    {
        op.lit(self.n)
    }
}

impl Accept for Add {
    fn accept<R, O>(&self, op: &mut O) -> R
    where
        O: Operation<R> + ?Sized,
    {
        let left = self.left.accept(op);
        let right = self.right.accept(op);
        op.add(left, right)
    }
}

impl Accept for Mul {
    fn accept<R, O>(&self, op: &mut O) -> R
    where
        O: Operation<R> + ?Sized,
    {
        let left = self.left.accept(op);
        let right = self.right.accept(op);
        op.mul(left, right)
    }
}

impl Accept for Expr {
    fn accept<R, O>(&self, op: &mut O) -> R
    where
        O: Operation<R> + ?Sized,
    {
        match self {
            Expr::Lit(lit) => lit.accept(op),
            Expr::Add(add) => add.accept(op),
            Expr::Mul(mul) => mul.accept(op),
        }
    }
}

pub fn run<R, O>(expr: &Expr, mut op: O) -> R
where
    O: Operation<R>,
{
    expr.accept(&mut op)
}
