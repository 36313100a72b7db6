use super::Rc;
use indexmap::IndexSet;
use thiserror::Error;

/// The error raised when a formula is built from operands of the wrong kind.
///
/// Formulas are validated eagerly, so a malformed tree can never be observed by the rest of the
/// crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    /// A term was required, e.g. as the argument of a function or predicate.
    #[error(
        "inappropriate argument for '{name}': '{got}' should be a term, not {}",
        .got.kind_name()
    )]
    ExpectedTerm { name: String, got: Rc<Formula> },

    /// A quantifier was given something other than a bare variable to bind.
    #[error("in {context}, '{got}' should be a variable, not {}", .got.kind_name())]
    ExpectedVariable {
        context: &'static str,
        got: Rc<Formula>,
    },

    /// A connective or quantifier was given a term where a formula was required.
    #[error("in {context}, '{got}' should be a formula, not a term")]
    ExpectedFormula {
        context: &'static str,
        got: Rc<Formula>,
    },

    /// A function application was built with an empty argument list.
    #[error("function '{0}' was applied to no arguments")]
    EmptyArguments(String),
}

pub type ConstructionResult<T> = Result<T, ConstructionError>;

/// A binary propositional connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    /// The `->` connective.
    Implies,

    /// The `\/` connective.
    Or,

    /// The `/\` connective.
    And,
}

impl_str_conversion_traits!(Connective {
    Implies: "->",
    Or: "\\/",
    And: "/\\",
});

/// A quantifier. Pending instantiations also record which quantifier they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// The universal quantifier, written `+`.
    Forall,

    /// The existential quantifier, written `!`.
    Exists,
}

impl_str_conversion_traits!(Quantifier {
    Forall: "+",
    Exists: "!",
});

/// A first-order formula.
///
/// Formulas are immutable once built, and subformulas are shared through `Rc`s. The variants are
/// public so they can be matched on, but they should be built through the validated constructors
/// (`Formula::term`, `Formula::atom`, etc.), which reject malformed trees with a
/// `ConstructionError`.
///
/// Equality (`PartialEq`) is syntactic, except for quantifiers and pending instantiations, which
/// are compared up to renaming of their bound variable. See [`super::alpha_equiv`].
#[derive(Debug, Clone)]
pub enum Formula {
    /// A first-order term. If the argument list is present, the term is a function application,
    /// and every argument is itself a term. Argless terms act as variables and constants.
    Term(String, Option<Vec<Rc<Formula>>>),

    /// A predicate applied to zero or more terms.
    Atom(String, Vec<Rc<Formula>>),

    /// A negation.
    Not(Rc<Formula>),

    /// A binary connective applied to two formulas.
    Connective(Connective, Rc<Formula>, Rc<Formula>),

    /// A quantified formula. The bound variable is the name of an argless term.
    Quant(Quantifier, String, Rc<Formula>),

    /// A deferred quantifier elimination, waiting for a witness to be substituted for the bound
    /// variable.
    Pending(Quantifier, String, Rc<Formula>),
}

impl Formula {
    /// Constructs an argless term, that is, a variable or constant.
    pub fn var(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Formula::Term(name.into(), None))
    }

    /// Constructs a term. Fails if any of the arguments is not a term, or if the argument list is
    /// present but empty.
    pub fn term(
        name: impl Into<String>,
        args: Option<Vec<Rc<Self>>>,
    ) -> ConstructionResult<Rc<Self>> {
        let name = name.into();
        if let Some(args) = &args {
            if args.is_empty() {
                return Err(ConstructionError::EmptyArguments(name));
            }
            check_term_args(&name, args)?;
        }
        Ok(Rc::new(Formula::Term(name, args)))
    }

    /// Constructs a predicate application. Fails if any of the arguments is not a term.
    pub fn atom(name: impl Into<String>, args: Vec<Rc<Self>>) -> ConstructionResult<Rc<Self>> {
        let name = name.into();
        check_term_args(&name, &args)?;
        Ok(Rc::new(Formula::Atom(name, args)))
    }

    pub fn not(argument: Rc<Self>) -> ConstructionResult<Rc<Self>> {
        check_formula("negation", &argument)?;
        Ok(Rc::new(Formula::Not(argument)))
    }

    pub fn connective(
        connective: Connective,
        left: Rc<Self>,
        right: Rc<Self>,
    ) -> ConstructionResult<Rc<Self>> {
        let context = connective.kind_name();
        check_formula(context, &left)?;
        check_formula(context, &right)?;
        Ok(Rc::new(Formula::Connective(connective, left, right)))
    }

    /// Constructs a quantified formula. `var` must be an argless term.
    pub fn quant(
        quantifier: Quantifier,
        var: &Rc<Self>,
        body: Rc<Self>,
    ) -> ConstructionResult<Rc<Self>> {
        let var = check_binder(quantifier.kind_name(), var, &body)?;
        Ok(Rc::new(Formula::Quant(quantifier, var, body)))
    }

    /// Constructs a pending instantiation that came from eliminating a `quantifier`.
    pub fn pending(
        quantifier: Quantifier,
        var: &Rc<Self>,
        body: Rc<Self>,
    ) -> ConstructionResult<Rc<Self>> {
        let var = check_binder("pending instantiation", var, &body)?;
        Ok(Rc::new(Formula::Pending(quantifier, var, body)))
    }

    /// Returns `true` if the formula is a term.
    pub fn is_term(&self) -> bool {
        matches!(self, Formula::Term(..))
    }

    /// Returns the name of the formula if it is an argless term.
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Formula::Term(name, None) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Formula::Atom(..))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Formula::Pending(..))
    }

    /// Returns `true` if a sequent-calculus introduction rule applies to this formula.
    pub fn is_decomposable(&self) -> bool {
        matches!(
            self,
            Formula::Not(_) | Formula::Connective(..) | Formula::Quant(..)
        )
    }

    /// Returns the name of the variable bound by this formula, if it is a quantifier or a pending
    /// instantiation.
    pub fn bound_var(&self) -> Option<&str> {
        match self {
            Formula::Quant(_, var, _) | Formula::Pending(_, var, _) => Some(var.as_str()),
            _ => None,
        }
    }

    /// A human-readable name for the kind of formula, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Formula::Term(..) => "term",
            Formula::Atom(..) => "atom",
            Formula::Not(_) => "negation",
            Formula::Connective(c, _, _) => c.kind_name(),
            Formula::Quant(q, _, _) => q.kind_name(),
            Formula::Pending(..) => "pending instantiation",
        }
    }

    /// Returns the free variables of the formula, in order of first appearance. Only argless
    /// terms count as variables; function and predicate names never do.
    pub fn free_vars(&self) -> IndexSet<String> {
        let mut result = IndexSet::new();
        self.collect_free_vars(&mut Vec::new(), &mut result);
        result
    }

    fn collect_free_vars(&self, bound: &mut Vec<String>, acc: &mut IndexSet<String>) {
        match self {
            Formula::Term(name, None) => {
                if !bound.contains(name) {
                    acc.insert(name.clone());
                }
            }
            Formula::Term(_, Some(args)) | Formula::Atom(_, args) => {
                for a in args {
                    a.collect_free_vars(bound, acc);
                }
            }
            Formula::Not(a) => a.collect_free_vars(bound, acc),
            Formula::Connective(_, l, r) => {
                l.collect_free_vars(bound, acc);
                r.collect_free_vars(bound, acc);
            }
            Formula::Quant(_, var, body) | Formula::Pending(_, var, body) => {
                bound.push(var.clone());
                body.collect_free_vars(bound, acc);
                bound.pop();
            }
        }
    }
}

impl Connective {
    fn kind_name(self) -> &'static str {
        match self {
            Connective::Implies => "implication",
            Connective::Or => "disjunction",
            Connective::And => "conjunction",
        }
    }
}

impl Quantifier {
    fn kind_name(self) -> &'static str {
        match self {
            Quantifier::Forall => "universal quantifier",
            Quantifier::Exists => "existential quantifier",
        }
    }
}

fn check_term_args(name: &str, args: &[Rc<Formula>]) -> ConstructionResult<()> {
    match args.iter().find(|a| !a.is_term()) {
        Some(got) => Err(ConstructionError::ExpectedTerm {
            name: name.to_owned(),
            got: got.clone(),
        }),
        None => Ok(()),
    }
}

fn check_formula(context: &'static str, operand: &Rc<Formula>) -> ConstructionResult<()> {
    if operand.is_term() {
        return Err(ConstructionError::ExpectedFormula { context, got: operand.clone() });
    }
    Ok(())
}

fn check_binder(
    context: &'static str,
    var: &Rc<Formula>,
    body: &Rc<Formula>,
) -> ConstructionResult<String> {
    let name = var
        .as_var()
        .ok_or_else(|| ConstructionError::ExpectedVariable { context, got: var.clone() })?;
    check_formula(context, body)?;
    Ok(name.to_owned())
}
