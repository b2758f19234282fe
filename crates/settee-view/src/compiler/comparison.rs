use super::{escape_regex_source, like_to_regex, Delimited, FieldRef, Formatter, Literal, Scope, ToJs};
use settee_core::{
    stmt::{Comparison, ComparisonOp, Condition, Operand, Value, ValueRange},
    Error, Result,
};

impl ToJs for &Comparison {
    fn to_js(self, scope: Scope, f: &mut Formatter<'_>) -> Result<()> {
        let compiler = f.compiler;
        let field = FieldRef(compiler.field(self.subject));

        match self.op {
            ComparisonOp::Eq
            | ComparisonOp::Ne
            | ComparisonOp::Gt
            | ComparisonOp::Ge
            | ComparisonOp::Lt
            | ComparisonOp::Le => {
                let Operand::Value(value) = &self.operand else {
                    return Err(Error::unsupported_condition(format!(
                        "`{:?}` comparison against a {} operand",
                        self.op,
                        operand_kind(&self.operand)
                    )));
                };

                let op = binary_op(self.op, scope.negated);
                fmt!(scope, f, field, " ", op, " ", Literal(value));
            }
            ComparisonOp::In => match &self.operand {
                Operand::Value(value) => in_list(std::slice::from_ref(value), field, scope, f)?,
                Operand::List(values) => in_list(values, field, scope, f)?,
                Operand::Range(range) => in_range(self, range, scope, f)?,
                Operand::Regex(_) => {
                    return Err(Error::unsupported_condition(
                        "inclusion in a regular expression",
                    ))
                }
            },
            ComparisonOp::Regexp | ComparisonOp::Like => {
                if self.op == ComparisonOp::Like && scope.negated {
                    return Err(Error::unsupported_condition(
                        "negated `like` has no translation",
                    ));
                }

                let source = match &self.operand {
                    Operand::Regex(source) => escape_regex_source(source),
                    Operand::Value(value) => match value.as_str() {
                        Some(pattern) => like_to_regex(pattern),
                        None => {
                            return Err(Error::unsupported_condition(format!(
                                "pattern match against non-text value {value:?}"
                            )))
                        }
                    },
                    operand => {
                        return Err(Error::unsupported_condition(format!(
                            "pattern match against a {} operand",
                            operand_kind(operand)
                        )))
                    }
                };

                f.params.push(Value::String(source.clone()));

                let not = if scope.negated { "!" } else { "" };
                fmt!(scope, f, not, "/", &source[..], "/.test(", field, ")");
            }
        }

        Ok(())
    }
}

fn binary_op(op: ComparisonOp, negated: bool) -> &'static str {
    use ComparisonOp::*;

    match (op, negated) {
        (Eq, false) | (Ne, true) => "==",
        (Ne, false) | (Eq, true) => "!=",
        (Gt, false) | (Le, true) => ">",
        (Ge, false) | (Lt, true) => ">=",
        (Lt, false) | (Ge, true) => "<",
        (Le, false) | (Gt, true) => "<=",
        (In | Regexp | Like, _) => unreachable!("not a binary operator: {op:?}"),
    }
}

/// `[a, b].indexOf(doc.f) != -1`
fn in_list(values: &[Value], field: FieldRef<'_>, scope: Scope, f: &mut Formatter<'_>) -> Result<()> {
    let op = if scope.negated { "==" } else { "!=" };
    fmt!(
        scope,
        f,
        "[",
        Delimited(values.iter().map(Literal), ", "),
        "].indexOf(",
        field,
        ") ",
        op,
        " -1"
    );
    Ok(())
}

/// Rewrites a range into a pair of bound comparisons.
fn in_range(
    comparison: &Comparison,
    range: &ValueRange,
    scope: Scope,
    f: &mut Formatter<'_>,
) -> Result<()> {
    let upper = if range.exclusive {
        ComparisonOp::Lt
    } else {
        ComparisonOp::Le
    };

    let bounds = Condition::and_from_vec(vec![
        Comparison::new(comparison.subject, ComparisonOp::Ge, range.start.clone()).into(),
        Comparison::new(comparison.subject, upper, range.end.clone()).into(),
    ]);

    fmt!(scope, f, "(", &bounds, ")");
    Ok(())
}

fn operand_kind(operand: &Operand) -> &'static str {
    match operand {
        Operand::Value(_) => "value",
        Operand::List(_) => "list",
        Operand::Range(_) => "range",
        Operand::Regex(_) => "regular expression",
    }
}
