//! Custom operator handler chain.

use super::fields;
use crate::prelude::*;
use pretty_assertions::assert_eq;

fn like_handler(
    tag: &str,
    args: &[Operand],
    cx: &mut Compiler<'_>,
) -> SiftResult<Option<String>> {
    if tag != "like" {
        return Ok(None);
    }
    let lhs = cx.argument(&args[0])?;
    let rhs = cx.argument(&args[1])?;
    Ok(Some(format!("{lhs} LIKE {rhs}")))
}

#[test]
fn test_handler_claims_custom_operator() {
    let cond: Condition = r#"["like", ["field", 2], "jo%"]"#.parse().unwrap();
    let sql = SqlSelect::new(Dialect::Postgres, fields())
        .handler(like_handler)
        .query(Query::new().filter(cond))
        .sql()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT \"id\", \"name\", \"date_joined\", \"age\", * FROM data WHERE \"name\" LIKE 'jo%';"
    );
}

#[test]
fn test_deferring_handler_falls_through_to_builtins() {
    let cond: Condition = r#"["=", ["field", 2], "joe"]"#.parse().unwrap();
    let select = SqlSelect::new(Dialect::Postgres, fields()).handler(like_handler);
    assert_eq!(select.compile(&cond).unwrap(), "\"name\" = 'joe'");
}

#[test]
fn test_unclaimed_operator_still_fails() {
    let cond: Condition = r#"["xor", ["field", 2], "joe"]"#.parse().unwrap();
    let err = SqlSelect::new(Dialect::Postgres, fields())
        .handler(like_handler)
        .compile(&cond)
        .unwrap_err();
    assert!(matches!(err, SiftError::UnknownOperator(op) if op == "xor"));
}

#[test]
fn test_first_claiming_handler_wins() {
    let first = |tag: &str, _: &[Operand], _: &mut Compiler<'_>| -> SiftResult<Option<String>> {
        if tag == "like" {
            Ok(Some("FIRST".to_string()))
        } else {
            Ok(None)
        }
    };
    let cond: Condition = r#"["like", ["field", 2], "jo%"]"#.parse().unwrap();
    let sql = SqlSelect::new(Dialect::Postgres, fields())
        .handler(first)
        .handler(like_handler)
        .compile(&cond)
        .unwrap();
    assert_eq!(sql, "FIRST");
}

#[test]
fn test_handler_can_override_builtin() {
    let loud_eq = |tag: &str, args: &[Operand], cx: &mut Compiler<'_>| -> SiftResult<Option<String>> {
        if tag != "=" {
            return Ok(None);
        }
        let lhs = cx.argument(&args[0])?;
        let rhs = cx.argument(&args[1])?;
        Ok(Some(format!("{lhs} == {rhs}")))
    };
    let cond: Condition = r#"["=", ["field", 1], 5]"#.parse().unwrap();
    let sql = SqlSelect::new(Dialect::Postgres, fields())
        .handler(loud_eq)
        .compile(&cond)
        .unwrap();
    assert_eq!(sql, "\"id\" == 5");
}

#[test]
fn test_handler_recurses_into_sub_conditions() {
    let xor = |tag: &str, args: &[Operand], cx: &mut Compiler<'_>| -> SiftResult<Option<String>> {
        if tag != "xor" {
            return Ok(None);
        }
        let mut groups = Vec::with_capacity(args.len());
        for arg in args {
            let Operand::Condition(inner) = arg else {
                return Err(SiftError::invalid_operand("xor", "expected a nested condition"));
            };
            groups.push(format!("({})", cx.condition(inner)?));
        }
        Ok(Some(groups.join(" XOR ")))
    };
    let cond: Condition =
        r#"["xor", ["<", ["field", 1], 5], ["macro", "is_joe"]]"#.parse().unwrap();
    let macros = Macros::new().define("is_joe", r#"["=", ["field", 2], "joe"]"#.parse().unwrap());
    let sql = SqlSelect::new(Dialect::MySql, fields())
        .handler(xor)
        .macros(macros)
        .compile(&cond)
        .unwrap();
    assert_eq!(sql, "(`id` < 5) XOR (`name` = 'joe')");
}

// handlers also apply inside macro bodies
#[test]
fn test_macro_body_may_use_handler_operator() {
    let cond: Condition = r#"["macro", "name_like"]"#.parse().unwrap();
    let macros =
        Macros::new().define("name_like", r#"["like", ["field", 2], "jo%"]"#.parse().unwrap());
    let sql = SqlSelect::new(Dialect::Postgres, fields())
        .handler(like_handler)
        .macros(macros)
        .compile(&cond)
        .unwrap();
    assert_eq!(sql, "\"name\" LIKE 'jo%'");
}
