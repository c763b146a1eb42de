use derive_more::Display;

use crate::{dispatch::internal::Accept, expr::Expr};

/// One handler per expression variant. Composite handlers receive the already
/// computed results of their children, left first.
pub trait Operation<R> {
    fn lit(&mut self, n: i64) -> R;
    fn add(&mut self, left: R, right: R) -> R;
    fn mul(&mut self, left: R, right: R) -> R;
}

impl<'a, R, O> Operation<R> for &'a mut O
where
    O: Operation<R> + ?Sized,
{
    fn lit(&mut self, n: i64) -> R {
        (**self).lit(n)
    }
    fn add(&mut self, left: R, right: R) -> R {
        (**self).add(left, right)
    }
    fn mul(&mut self, left: R, right: R) -> R {
        (**self).mul(left, right)
    }
}

/// Integer arithmetic. Overflow is not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eval;

impl Operation<i64> for Eval {
    fn lit(&mut self, n: i64) -> i64 {
        n
    }
    fn add(&mut self, left: i64, right: i64) -> i64 {
        left + right
    }
    fn mul(&mut self, left: i64, right: i64) -> i64 {
        left * right
    }
}

/// Evaluate with the internal fold
pub fn evaluate(expr: &Expr) -> i64 {
    expr.accept(&mut Eval)
}

/// Renders the fully parenthesised infix form
#[derive(Debug, Clone, Copy, Default)]
pub struct Render;

impl Operation<String> for Render {
    fn lit(&mut self, n: i64) -> String {
        n.to_string()
    }
    fn add(&mut self, left: String, right: String) -> String {
        format!("({} + {})", left, right)
    }
    fn mul(&mut self, left: String, right: String) -> String {
        format!("({} * {})", left, right)
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    #[display(fmt = "lit {}", _0)]
    Lit(i64),
    #[display(fmt = "add")]
    Add,
    #[display(fmt = "mul")]
    Mul,
}

/// Records every handler call in order before forwarding it to `inner`
#[derive(Debug, Default)]
pub struct Trace<O> {
    pub inner: O,
    pub visits: Vec<Visit>,
}

impl<O> Trace<O> {
    pub fn new(inner: O) -> Self {
        Trace {
            inner,
            visits: Vec::new(),
        }
    }
}

impl<R, O> Operation<R> for Trace<O>
where
    O: Operation<R>,
{
    fn lit(&mut self, n: i64) -> R {
        self.visits.push(Visit::Lit(n));
        self.inner.lit(n)
    }
    fn add(&mut self, left: R, right: R) -> R {
        self.visits.push(Visit::Add);
        self.inner.add(left, right)
    }
    fn mul(&mut self, left: R, right: R) -> R {
        self.visits.push(Visit::Mul);
        self.inner.mul(left, right)
    }
}
