//! Condition expression evaluator

use super::ast::{CompareOp, Expression, Literal};
use crate::lesson::scope::Scope;
use serde_json::Value;

/// Evaluate a condition expression against a block's scope
pub fn evaluate(expr: &Expression, scope: &Scope) -> bool {
    match expr {
        Expression::True => true,
        Expression::False => false,
        Expression::Compare { left, op, right } => evaluate_compare(left, *op, right, scope),
        Expression::Var(name) => scope.get(name).and_then(Value::as_bool).unwrap_or(false),
        Expression::And(left, right) => evaluate(left, scope) && evaluate(right, scope),
        Expression::Or(left, right) => evaluate(left, scope) || evaluate(right, scope),
        Expression::Not(inner) => !evaluate(inner, scope),
    }
}

fn evaluate_compare(left: &str, op: CompareOp, right: &Literal, scope: &Scope) -> bool {
    let left_value = scope.get(left);

    match op {
        CompareOp::Eq => values_equal(left_value, right),
        CompareOp::NotEq => left_value.is_some() && !values_equal(left_value, right),
        CompareOp::Gt => compare_numbers(left_value, right, |a, b| a > b),
        CompareOp::Gte => compare_numbers(left_value, right, |a, b| a >= b),
        CompareOp::Lt => compare_numbers(left_value, right, |a, b| a < b),
        CompareOp::Lte => compare_numbers(left_value, right, |a, b| a <= b),
    }
}

fn values_equal(left: Option<&Value>, right: &Literal) -> bool {
    match (left, right) {
        (Some(Value::String(s)), Literal::String(rs)) => s == rs,
        (Some(Value::Number(n)), Literal::Number(rn)) => n
            .as_f64()
            .map(|f| (f - rn).abs() < f64::EPSILON)
            .unwrap_or(false),
        (Some(Value::Bool(b)), Literal::Boolean(rb)) => b == rb,
        _ => false,
    }
}

fn compare_numbers<F>(left: Option<&Value>, right: &Literal, cmp: F) -> bool
where
    F: Fn(f64, f64) -> bool,
{
    match (left, right) {
        (Some(Value::Number(n)), Literal::Number(rn)) => {
            n.as_f64().map(|f| cmp(f, *rn)).unwrap_or(false)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::condition::parser::parse;
    use serde_json::json;

    fn scope_with(pairs: Vec<(&str, Value)>) -> Scope {
        let mut scope = Scope::empty();
        for (k, v) in pairs {
            scope.set(k, v);
        }
        scope
    }

    fn holds(input: &str, scope: &Scope) -> bool {
        evaluate(&parse(input).unwrap(), scope)
    }

    #[test]
    fn test_strict_less_than() {
        let scope = scope_with(vec![("age", json!(18))]);
        assert!(!holds("age < 18", &scope));
        assert!(holds("age <= 18", &scope));
        assert!(holds("age < 19", &scope));
    }

    #[test]
    fn test_strict_greater_than() {
        let scope = scope_with(vec![("score", json!(80))]);
        assert!(!holds("score > 80", &scope));
        assert!(holds("score >= 80", &scope));
        assert!(holds("score > 79", &scope));
    }

    #[test]
    fn test_number_equality() {
        let scope = scope_with(vec![("age", json!(25))]);
        assert!(holds("age == 25", &scope));
        assert!(!holds("age != 25", &scope));
        assert!(holds("age != 26", &scope));
    }

    #[test]
    fn test_bare_boolean_variable() {
        let scope = scope_with(vec![("is_student", json!(true)), ("is_member", json!(false))]);
        assert!(holds("is_student", &scope));
        assert!(!holds("is_member", &scope));
        assert!(holds("not is_member", &scope));
    }

    #[test]
    fn test_bare_non_boolean_is_false() {
        let scope = scope_with(vec![("age", json!(1))]);
        assert!(!holds("age", &scope));
    }

    #[test]
    fn test_boolean_comparison() {
        let scope = scope_with(vec![("is_student", json!(true))]);
        assert!(holds("is_student == true", &scope));
        assert!(!holds("is_student == false", &scope));
    }

    #[test]
    fn test_string_comparison() {
        let scope = scope_with(vec![("grade", json!("A"))]);
        assert!(holds("grade == 'A'", &scope));
        assert!(holds("grade != 'B'", &scope));
    }

    #[test]
    fn test_missing_variable_never_holds() {
        let scope = Scope::empty();
        assert!(!holds("age < 18", &scope));
        assert!(!holds("age >= 18", &scope));
        assert!(!holds("age == 18", &scope));
        assert!(!holds("age != 18", &scope));
        assert!(!holds("is_student", &scope));
    }

    #[test]
    fn test_type_mismatch_is_false() {
        let scope = scope_with(vec![("age", json!("sixteen"))]);
        assert!(!holds("age < 18", &scope));
        assert!(!holds("age == 16", &scope));
    }

    #[test]
    fn test_and_requires_both() {
        let scope = scope_with(vec![("score", json!(85)), ("attendance", json!(90))]);
        assert!(holds("score > 80 and attendance > 75", &scope));

        let scope = scope_with(vec![("score", json!(81)), ("attendance", json!(70))]);
        assert!(!holds("score > 80 and attendance > 75", &scope));

        let scope = scope_with(vec![("score", json!(79)), ("attendance", json!(90))]);
        assert!(!holds("score > 80 and attendance > 75", &scope));
    }

    #[test]
    fn test_or_expression() {
        let scope = scope_with(vec![("age", json!(70)), ("is_student", json!(false))]);
        assert!(holds("age >= 65 or is_student", &scope));
        assert!(!holds("age < 18 or is_student", &scope));
    }

    #[test]
    fn test_literal_true_false() {
        let scope = Scope::empty();
        assert!(holds("true", &scope));
        assert!(!holds("false", &scope));
        assert!(holds("not false", &scope));
    }

    #[test]
    fn test_grouped_expression() {
        let scope = scope_with(vec![("age", json!(25)), ("is_student", json!(true))]);
        assert!(holds("(age < 18 or age < 30) and is_student", &scope));
        assert!(!holds("age < 18 or (age < 30 and not is_student)", &scope));
    }
}
