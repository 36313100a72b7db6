//! Some useful helper macros.

/// Implements `FromStr` and `Display` for an enum whose variants map one-to-one to string
/// symbols.
macro_rules! impl_str_conversion_traits {
    ($enum_name:ident { $($variant:ident: $str:literal),* $(,)? }) => {
        impl std::str::FromStr for $enum_name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($str => Ok($enum_name::$variant),)*
                    _ => Err(()),
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                let s = match self {
                    $($enum_name::$variant => $str,)*
                };
                write!(f, "{}", s)
            }
        }
    }
}

/// Builds a formula from a compact, s-expression-like description. Useful mostly in tests, where
/// writing out the validated constructors by hand gets noisy.
///
/// Identifiers are terms, `(atom p a b)` is a predicate application, `(app f a b)` is a function
/// application, and `{expr}` splices in an existing `Rc<Formula>`. The macro panics if the
/// described formula is malformed.
///
/// # Examples
///
/// ```
/// # use gentzen::build_formula;
/// let f = build_formula!((forall x (implies (atom p x) (atom q (app f x)))));
/// assert_eq!(f.to_string(), "(x + (p(x) -> q(f(x))))");
/// ```
#[macro_export]
macro_rules! build_formula {
    ({$e:expr}) => { $e };
    ((atom $name:ident $($arg:tt)*)) => {
        $crate::ast::Formula::atom(
            stringify!($name),
            vec![$($crate::build_formula!($arg)),*],
        ).expect("malformed atom in `build_formula!`")
    };
    ((app $name:ident $($arg:tt)+)) => {
        $crate::ast::Formula::term(
            stringify!($name),
            Some(vec![$($crate::build_formula!($arg)),+]),
        ).expect("malformed term in `build_formula!`")
    };
    ((not $arg:tt)) => {
        $crate::ast::Formula::not($crate::build_formula!($arg))
            .expect("malformed negation in `build_formula!`")
    };
    ((implies $l:tt $r:tt)) => {
        $crate::build_formula!(@CONNECTIVE Implies $l $r)
    };
    ((or $l:tt $r:tt)) => {
        $crate::build_formula!(@CONNECTIVE Or $l $r)
    };
    ((and $l:tt $r:tt)) => {
        $crate::build_formula!(@CONNECTIVE And $l $r)
    };
    ((forall $var:ident $body:tt)) => {
        $crate::build_formula!(@QUANT Forall $var $body)
    };
    ((exists $var:ident $body:tt)) => {
        $crate::build_formula!(@QUANT Exists $var $body)
    };
    ($name:ident) => { $crate::ast::Formula::var(stringify!($name)) };

    (@CONNECTIVE $c:ident $l:tt $r:tt) => {
        $crate::ast::Formula::connective(
            $crate::ast::Connective::$c,
            $crate::build_formula!($l),
            $crate::build_formula!($r),
        ).expect("malformed connective in `build_formula!`")
    };
    (@QUANT $q:ident $var:ident $body:tt) => {
        $crate::ast::Formula::quant(
            $crate::ast::Quantifier::$q,
            &$crate::ast::Formula::var(stringify!($var)),
            $crate::build_formula!($body),
        ).expect("malformed quantifier in `build_formula!`")
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_build_formula() {
        let cases = [
            (build_formula!((atom p)), "p"),
            (build_formula!((atom p x (app f y))), "p(x, f(y))"),
            (build_formula!((not (atom p))), "~p"),
            (build_formula!((or (atom p) (not (atom p)))), r"(p \/ ~p)"),
            (build_formula!((exists x (and (atom p x) (atom q)))), r"(x ! (p(x) /\ q))"),
        ];
        for (formula, expected) in cases {
            assert_eq!(formula.to_string(), expected);
        }
    }
}
