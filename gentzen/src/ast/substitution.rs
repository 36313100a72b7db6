use super::{Formula, FreshNames, Rc};
use ahash::AHashSet;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum SubstitutionError {
    #[error("trying to substitute '{0}', which is not a variable")]
    NotAVariable(Rc<Formula>),

    #[error("trying to substitute a variable with '{0}', which is not a term")]
    NotATerm(Rc<Formula>),
}

type SubstitutionResult<T> = Result<T, SubstitutionError>;

/// A capture-avoiding substitution of a single variable by a term.
pub struct Substitution {
    var: String,
    value: Rc<Formula>,

    // Bound variables that must be renamed when the substitution goes under their binder. This is
    // the substituted variable itself, plus every free variable of the value, since the binder
    // would otherwise capture it.
    should_be_renamed: AHashSet<String>,
}

impl Substitution {
    /// Creates the substitution `{var -> value}`. `var` must be an argless term, and `value` must
    /// be a term.
    pub fn single(var: &Rc<Formula>, value: Rc<Formula>) -> SubstitutionResult<Self> {
        let name = var
            .as_var()
            .ok_or_else(|| SubstitutionError::NotAVariable(var.clone()))?;
        if !value.is_term() {
            return Err(SubstitutionError::NotATerm(value));
        }
        Ok(Self::new(name, value))
    }

    /// Creates the substitution that replaces the variable `var` by the variable `new_name`.
    pub fn renaming(var: &str, new_name: &str) -> Self {
        Self::new(var, Formula::var(new_name))
    }

    /// Creates the substitution `{var -> value}` without checking that `value` is a term.
    pub(crate) fn new(var: &str, value: Rc<Formula>) -> Self {
        let mut should_be_renamed: AHashSet<_> = value.free_vars().into_iter().collect();
        should_be_renamed.insert(var.to_owned());
        Self { var: var.to_owned(), value, should_be_renamed }
    }

    /// Applies the substitution to `formula`, returning a new tree. Every free occurrence of the
    /// variable is replaced by the value. Bound variables that clash with the substitution are
    /// renamed to names drawn from `names`.
    pub fn apply(&self, names: &FreshNames, formula: &Rc<Formula>) -> Rc<Formula> {
        macro_rules! apply_to_sequence {
            ($sequence:expr) => {
                $sequence
                    .iter()
                    .map(|a| self.apply(names, a))
                    .collect::<Vec<_>>()
            };
        }

        match formula.as_ref() {
            Formula::Term(name, None) if *name == self.var => self.value.clone(),
            Formula::Term(_, None) => formula.clone(),
            Formula::Term(name, Some(args)) => {
                Rc::new(Formula::Term(name.clone(), Some(apply_to_sequence!(args))))
            }
            Formula::Atom(name, args) => {
                Rc::new(Formula::Atom(name.clone(), apply_to_sequence!(args)))
            }
            Formula::Not(a) => Rc::new(Formula::Not(self.apply(names, a))),
            Formula::Connective(c, l, r) => Rc::new(Formula::Connective(
                *c,
                self.apply(names, l),
                self.apply(names, r),
            )),
            Formula::Quant(q, var, body) => {
                let (var, body) = self.apply_to_binder(names, var, body);
                Rc::new(Formula::Quant(*q, var, body))
            }
            Formula::Pending(q, var, body) => {
                let (var, body) = self.apply_to_binder(names, var, body);
                Rc::new(Formula::Pending(*q, var, body))
            }
        }
    }

    fn apply_to_binder(
        &self,
        names: &FreshNames,
        var: &str,
        body: &Rc<Formula>,
    ) -> (String, Rc<Formula>) {
        if !self.should_be_renamed.contains(var) {
            return (var.to_owned(), self.apply(names, body));
        }

        // The binder either shadows the substituted variable or would capture a variable of the
        // value, so it is renamed before the substitution goes any deeper
        let new_var = names.rename(var);
        let renamed = Substitution::renaming(var, &new_var).apply(names, body);
        let body = self.apply(names, &renamed);
        (new_var, body)
    }
}

/// Returns `expr` with every free occurrence of the variable `old` replaced by the term `new`.
pub fn substitute(
    names: &FreshNames,
    old: &Rc<Formula>,
    new: &Rc<Formula>,
    expr: &Rc<Formula>,
) -> SubstitutionResult<Rc<Formula>> {
    Ok(Substitution::single(old, new.clone())?.apply(names, expr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tests::{parse_formula, parse_term};

    fn run_test(original: &str, x: &str, t: &str, result: &str) {
        let names = FreshNames::new();
        let original = parse_formula(original);
        let [x, t] = [x, t].map(parse_term);

        let got = substitute(&names, &x, &t, &original).unwrap();
        assert_eq!(got.to_string(), result, "substituting {x} by {t} in {original}");
    }

    macro_rules! run_tests {
        ($($original:literal [$x:literal -> $t:literal] => $result:literal,)*) => {{
            $(run_test($original, $x, $t, $result);)*
        }};
    }

    #[test]
    fn test_substitutions() {
        run_tests! {
            "p(x)" ["x" -> "x"] => "p(x)",
            "p(x, y)" ["x" -> "c"] => "p(c, y)",
            "p(f(x), g(x, y))" ["x" -> "h(y)"] => "p(f(h(y)), g(h(y), y))",
            "q" ["x" -> "c"] => "q",
            r"p(x) /\ ~q(x)" ["x" -> "c"] => r"(p(c) /\ ~q(c))",

            // Function symbols are never variables
            "p(x(y))" ["x" -> "c"] => "p(x(y))",

            // Bound occurrences are left alone, but the binder is still renamed
            "+ x p(x)" ["x" -> "c"] => "(_c1 + p(_c1))",
            r"p(x) /\ (! x q(x))" ["x" -> "c"] => r"(p(c) /\ (_c1 ! q(_c1)))",

            // Capture-avoidance
            "+ y p(x, y)" ["x" -> "y"] => "(_c1 + p(y, _c1))",
            "+ y p(x, y)" ["x" -> "f(y)"] => "(_c1 + p(f(y), _c1))",
            "+ y p(x, y)" ["x" -> "z"] => "(y + p(z, y))",
        }
    }

    #[test]
    fn test_eigenvariable_binders_stay_eigenvariables() {
        let names = FreshNames::new();
        let body = parse_formula("p(_v9, x)");
        let pending = Formula::pending(
            crate::ast::Quantifier::Forall,
            &Formula::var("_v9"),
            body,
        )
        .unwrap();

        let got = substitute(&names, &Formula::var("x"), &Formula::var("_v9"), &pending).unwrap();
        assert_eq!(got.to_string(), "(_v1 + p(_v1, _v9))");
    }

    #[test]
    fn test_invalid_substitutions() {
        let names = FreshNames::new();
        let expr = parse_formula("p(x)");

        let compound = parse_term("f(x)");
        let err = substitute(&names, &compound, &Formula::var("c"), &expr).unwrap_err();
        assert_eq!(err, SubstitutionError::NotAVariable(compound));

        let atom = parse_formula("q");
        let err = substitute(&names, &Formula::var("x"), &atom, &expr).unwrap_err();
        assert_eq!(err, SubstitutionError::NotATerm(atom));
    }
}
