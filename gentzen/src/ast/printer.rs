use super::{Formula, Rc};
use std::fmt;

fn write_args(f: &mut fmt::Formatter, name: &str, args: &[Rc<Formula>]) -> fmt::Result {
    write!(f, "{}(", name)?;
    if let [head, tail @ ..] = args {
        write!(f, "{}", head)?;
        for arg in tail {
            write!(f, ", {}", arg)?;
        }
    }
    write!(f, ")")
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Term(name, None) => write!(f, "{}", name),
            Formula::Term(name, Some(args)) => write_args(f, name, args),
            Formula::Atom(name, args) if args.is_empty() => write!(f, "{}", name),
            Formula::Atom(name, args) => write_args(f, name, args),
            Formula::Not(a) => write!(f, "~{}", a),
            Formula::Connective(c, l, r) => write!(f, "({} {} {})", l, c, r),
            Formula::Quant(q, var, body) | Formula::Pending(q, var, body) => {
                write!(f, "({} {} {})", var, q, body)
            }
        }
    }
}
