use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "{}", n)]
pub struct Lit {
    pub n: i64,
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display(fmt = "({} + {})", left, right)]
pub struct Add {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display(fmt = "({} * {})", left, right)]
pub struct Mul {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// An immutable arithmetic tree. Every composite node owns both of its children.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Expr {
    Lit(Lit),
    Add(Add),
    Mul(Mul),
}

impl Expr {
    pub fn lit(n: i64) -> Self {
        Expr::Lit(Lit { n })
    }
    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::Add(Add {
            left: left.into(),
            right: right.into(),
        })
    }
    pub fn mul(left: Expr, right: Expr) -> Self {
        Expr::Mul(Mul {
            left: left.into(),
            right: right.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_build_the_matching_variant() {
        assert_eq!(Expr::lit(7), Expr::Lit(Lit { n: 7 }));
        match Expr::add(Expr::lit(1), Expr::lit(2)) {
            Expr::Add(Add { left, right }) => {
                assert_eq!(*left, Expr::lit(1));
                assert_eq!(*right, Expr::lit(2));
            }
            expr => panic!("expected an addition, got {:?}", expr),
        }
        assert!(matches!(
            Expr::mul(Expr::lit(1), Expr::lit(2)),
            Expr::Mul(_)
        ));
    }

    #[test]
    fn display_parenthesises_composites() {
        let expr = Expr::add(Expr::lit(4), Expr::mul(Expr::lit(3), Expr::lit(5)));
        assert_eq!(expr.to_string(), "(4 + (3 * 5))");
        assert_eq!(Expr::lit(-2).to_string(), "-2");
    }
}
