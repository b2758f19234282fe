use super::{Delimited, Formatter, Scope, ToJs};
use settee_core::{stmt::Condition, Result};

impl ToJs for &Condition {
    fn to_js(self, scope: Scope, f: &mut Formatter<'_>) -> Result<()> {
        match self {
            Condition::Comparison(comparison) => comparison.to_js(scope, f),
            Condition::And(and) => operation(&and.operands, true, scope, f),
            Condition::Or(or) => operation(&or.operands, false, scope, f),
            Condition::Not(not) => (&*not.operand).to_js(scope.negate(), f),
        }
    }
}

/// Renders an `And` (`conjunction = true`) or `Or`. Under negation the
/// connective flips.
fn operation(
    operands: &[Condition],
    conjunction: bool,
    scope: Scope,
    f: &mut Formatter<'_>,
) -> Result<()> {
    let conjunction = conjunction != scope.negated;

    match operands {
        [] => {
            let identity = if conjunction { "true" } else { "false" };
            fmt!(scope, f, identity);
        }
        [operand] => fmt!(scope, f, operand),
        operands => {
            let delimiter = if conjunction { " && " } else { " || " };
            fmt!(scope, f, Delimited(operands.iter().map(Grouped), delimiter));
        }
    }

    Ok(())
}

/// An operand of a multi-operand operation, parenthesized when it renders
/// as one itself.
struct Grouped<'a>(&'a Condition);

impl ToJs for Grouped<'_> {
    fn to_js(self, scope: Scope, f: &mut Formatter<'_>) -> Result<()> {
        if is_compound(self.0) {
            fmt!(scope, f, "(", self.0, ")");
        } else {
            fmt!(scope, f, self.0);
        }
        Ok(())
    }
}

fn is_compound(condition: &Condition) -> bool {
    match condition {
        Condition::Comparison(_) => false,
        Condition::Not(not) => is_compound(&not.operand),
        Condition::And(and) => compound_operands(&and.operands),
        Condition::Or(or) => compound_operands(&or.operands),
    }
}

fn compound_operands(operands: &[Condition]) -> bool {
    match operands {
        [operand] => is_compound(operand),
        operands => operands.len() > 1,
    }
}
