pub mod accept;
pub mod external;
pub mod internal;
pub mod result;

use derive_more::Display;
use log::debug;

use crate::{expr::Expr, operation::Operation};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Protocol {
    /// Explicit dispatcher matching on the variant
    #[display(fmt = "external")]
    External,
    /// Explicit dispatcher with a result stack
    #[display(fmt = "stacked")]
    Stacked,
    /// Double dispatch through `accept`
    #[display(fmt = "accept")]
    Accept,
    /// Double dispatch returning typed results
    #[display(fmt = "result")]
    Result,
    /// Traversal folded into the tree
    #[display(fmt = "internal")]
    Internal,
}

impl Protocol {
    pub const ALL: [Protocol; 5] = [
        Protocol::External,
        Protocol::Stacked,
        Protocol::Accept,
        Protocol::Result,
        Protocol::Internal,
    ];
    pub fn run<R, O>(self, expr: &Expr, op: O) -> R
    where
        O: Operation<R>,
    {
        debug!("{} dispatch over {}", self, expr);
        match self {
            Protocol::External => external::run(expr, op),
            Protocol::Stacked => external::run_stacked(expr, op),
            Protocol::Accept => accept::run(expr, op),
            Protocol::Result => result::run(expr, op),
            Protocol::Internal => internal::run(expr, op),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{Eval, Render, Trace, Visit};

    fn scenarios() -> Vec<(Expr, i64)> {
        vec![
            (
                Expr::add(Expr::lit(4), Expr::mul(Expr::lit(3), Expr::lit(5))),
                19,
            ),
            (
                Expr::mul(Expr::add(Expr::lit(1), Expr::lit(2)), Expr::lit(10)),
                30,
            ),
            (Expr::lit(7), 7),
            (
                Expr::add(
                    Expr::lit(1),
                    Expr::add(Expr::lit(1), Expr::add(Expr::lit(1), Expr::lit(1))),
                ),
                4,
            ),
        ]
    }

    #[test]
    fn every_protocol_evaluates_the_scenarios() {
        for (expr, expected) in scenarios() {
            for protocol in Protocol::ALL {
                assert_eq!(protocol.run(&expr, Eval), expected, "{} on {}", protocol, expr);
            }
        }
    }

    #[test]
    fn every_protocol_renders_alike() {
        for (expr, _) in scenarios() {
            for protocol in Protocol::ALL {
                assert_eq!(protocol.run(&expr, Render), expr.to_string());
            }
        }
    }

    /// Builds a tree of the given depth where every composite has two
    /// distinct literal-bearing children, alternating add and mul by level.
    fn balanced(depth: u32, next: &mut i64) -> Expr {
        if depth == 0 {
            *next += 1;
            return Expr::lit(*next);
        }
        let left = balanced(depth - 1, next);
        let right = balanced(depth - 1, next);
        if depth % 2 == 0 {
            Expr::mul(left, right)
        } else {
            Expr::add(left, right)
        }
    }

    #[test]
    fn left_before_right_at_every_depth() {
        let expr = balanced(4, &mut 0);
        for protocol in Protocol::ALL {
            let mut trace = Trace::new(Eval);
            let _: i64 = protocol.run(&expr, &mut trace);
            let lits: Vec<i64> = trace
                .visits
                .iter()
                .filter_map(|visit| match visit {
                    Visit::Lit(n) => Some(*n),
                    _ => None,
                })
                .collect();
            assert_eq!(lits, (1..=16).collect::<Vec<_>>(), "{}", protocol);
        }
    }

    #[test]
    fn every_protocol_records_the_same_trace() {
        let expr = Expr::mul(
            Expr::add(Expr::lit(1), Expr::mul(Expr::lit(2), Expr::lit(3))),
            Expr::add(Expr::lit(4), Expr::lit(5)),
        );
        let expected = [
            Visit::Lit(1),
            Visit::Lit(2),
            Visit::Lit(3),
            Visit::Mul,
            Visit::Add,
            Visit::Lit(4),
            Visit::Lit(5),
            Visit::Add,
            Visit::Mul,
        ];
        for protocol in Protocol::ALL {
            let mut trace = Trace::new(Eval);
            assert_eq!(protocol.run(&expr, &mut trace), 63);
            assert_eq!(trace.visits, expected, "{}", protocol);
        }
    }
}
