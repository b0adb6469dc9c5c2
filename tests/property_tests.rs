use proptest::prelude::*;
use rpnstack::{Operator, build_infix, convert, evaluate};

/// A reference expression tree, evaluated independently of the engine.
#[derive(Debug, Clone)]
enum Expr {
    Number(u32),
    Binary(Operator, Box<Expr>, Box<Expr>),
}

impl Expr {
    fn value(&self) -> f64 {
        match self {
            Self::Number(n) => f64::from(*n),
            Self::Binary(op, left, right) => {
                let (l, r) = (left.value(), right.value());
                match op {
                    Operator::Add => l + r,
                    Operator::Sub => l - r,
                    Operator::Mul => l * r,
                    Operator::Div => l / r,
                    Operator::Pow => l.powf(r),
                }
            },
        }
    }

    /// Renders with only the parentheses precedence and associativity
    /// require.
    fn infix(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Binary(op, left, right) => {
                let left_needs = match left.as_ref() {
                    Self::Binary(l, ..) => {
                        l.precedence() < op.precedence()
                        || (l.precedence() == op.precedence() && op.is_right_associative())
                    },
                    Self::Number(_) => false,
                };
                let right_needs = match right.as_ref() {
                    Self::Binary(r, ..) => {
                        r.precedence() < op.precedence()
                        || (r.precedence() == op.precedence() && !op.is_right_associative())
                    },
                    Self::Number(_) => false,
                };
                format!("{} {op} {}", wrap(&left.infix(), left_needs), wrap(&right.infix(), right_needs))
            },
        }
    }

    fn parenthesized(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Binary(op, left, right) => {
                format!("({} {op} {})", left.parenthesized(), right.parenthesized())
            },
        }
    }
}

fn wrap(text: &str, parens: bool) -> String {
    if parens { format!("({text})") } else { text.to_string() }
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = (0u32..50).prop_map(Expr::Number);
    leaf.prop_recursive(4, 24, 2, |inner| {
            let arithmetic = (prop_oneof![Just(Operator::Add),
                                          Just(Operator::Sub),
                                          Just(Operator::Mul),
                                          Just(Operator::Div)],
                              inner.clone(),
                              inner.clone())
                .prop_map(|(op, l, r)| Expr::Binary(op, Box::new(l), Box::new(r)))
                .prop_filter("divisor must not be zero", |e| match e {
                    Expr::Binary(Operator::Div, _, right) => right.value() != 0.0,
                    _ => true,
                });
            // Exponents are small literals.
            let power = (inner, 0u32..4).prop_map(|(base, exp)| {
                                            Expr::Binary(Operator::Pow, Box::new(base), Box::new(Expr::Number(exp)))
                                        });
            prop_oneof![3 => arithmetic, 1 => power]
        })
}

fn close(a: f64, b: f64) -> bool {
    if a == b || (a.is_nan() && b.is_nan()) {
        return true;
    }
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    /// Converting and evaluating agrees with the reference tree.
    #[test]
    fn converted_expressions_evaluate_like_the_reference(expr in arb_expr()) {
        let postfix = convert(&expr.infix(), None).unwrap();
        let value = evaluate(&postfix.to_string()).unwrap();
        prop_assert!(close(value, expr.value()), "{} -> {postfix} = {value}, expected {}", expr.infix(), expr.value());
    }

    /// Rebuilding infix from the converted postfix restores the full
    /// grouping of the expression.
    #[test]
    fn rebuilt_infix_matches_the_tree(expr in arb_expr()) {
        let postfix = convert(&expr.infix(), None).unwrap();
        prop_assert_eq!(build_infix(&postfix.to_string()).unwrap(), expr.parenthesized());
    }

    /// Converting the same text twice gives the same sequence.
    #[test]
    fn conversion_is_idempotent(expr in arb_expr()) {
        let text = expr.infix();
        prop_assert_eq!(convert(&text, None).unwrap(), convert(&text, None).unwrap());
    }

    /// Right-associative powers of small numbers evaluate like `powf`
    /// applied right to left.
    #[test]
    fn powers_group_to_the_right(a in 1u32..4, b in 0u32..3, c in 0u32..3) {
        let value = evaluate(&convert(&format!("{a}^{b}^{c}"), None).unwrap().to_string()).unwrap();
        let expected = f64::from(a).powf(f64::from(b).powf(f64::from(c)));
        prop_assert!(close(value, expected));
    }

    /// The tokenizer and converter never panic on arbitrary text.
    #[test]
    fn conversion_does_not_panic(s in "\\PC*") {
        let _ = convert(&s, None);
        let _ = build_infix(&s);
        let _ = evaluate(&s);
    }
}
