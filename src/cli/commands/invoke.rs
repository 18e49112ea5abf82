use crate::core::{CaseArg, CaseValue};
use crate::registry::Suite;
use anyhow::{Context, Result};
use tracing::debug;

/// 文字列引数を解釈してケースを1回呼び出す
pub fn invoke_case(
    suite: &Suite,
    case: &str,
    argument: &str,
    allow_undeclared: bool,
) -> Result<CaseValue> {
    let definition = suite.registry().find(case)?;
    let argument = CaseArg::parse(definition.arg_kind(), argument)?;
    debug!(case, %argument, allow_undeclared, "invoking case");

    let value = if allow_undeclared {
        suite.invoke_unchecked(case, &argument)
    } else {
        suite.invoke(case, &argument)
    }
    .with_context(|| format!("{case}({argument}) の呼び出しに失敗しました"))?;
    Ok(value)
}

/// Invoke a single case and print the result
pub fn execute_invoke(case: String, argument: String, allow_undeclared: bool) -> Result<()> {
    let suite = Suite::new()?;
    let value = invoke_case(&suite, &case, &argument, allow_undeclared)?;
    println!("{case}({argument}) = {value}");
    Ok(())
}
