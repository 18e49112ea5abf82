//! ケースレジストリとスイート
//!
//! 全ケースとそのリテラル引数を列挙し、名前と引数で呼び出す入口を提供する。
//! 非同期ケースは`Suite`が所有するcurrent-threadランタイム上で駆動する

use crate::cases::{dispatch, fault, object_size, sequence, task, wrapper};
use crate::core::{ArgKind, BenchError, BenchResult, CaseArg, CaseValue, Category};
use tokio::runtime::Runtime;
use tracing::debug;

/// ケース本体の呼び出し形式
#[derive(Clone, Copy)]
pub enum CaseBody {
    Int(fn(i32) -> CaseValue),
    Key(fn(&str) -> CaseValue),
    /// 渡されたランタイム上でFutureを完了まで駆動する（Futureはスタック上に置く）
    AsyncInt(fn(&Runtime, i32) -> CaseValue),
}

impl CaseBody {
    pub fn arg_kind(&self) -> ArgKind {
        match self {
            Self::Int(_) | Self::AsyncInt(_) => ArgKind::Int,
            Self::Key(_) => ArgKind::Key,
        }
    }
}

impl std::fmt::Debug for CaseBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(_) => f.write_str("Int"),
            Self::Key(_) => f.write_str("Key"),
            Self::AsyncInt(_) => f.write_str("AsyncInt"),
        }
    }
}

/// 1つのケースの定義
#[derive(Debug, Clone)]
pub struct CaseDefinition {
    name: &'static str,
    category: Category,
    arguments: Vec<CaseArg>,
    body: CaseBody,
}

impl CaseDefinition {
    pub fn new(
        name: &'static str,
        category: Category,
        arguments: Vec<CaseArg>,
        body: CaseBody,
    ) -> Self {
        Self {
            name,
            category,
            arguments,
            body,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// 宣言済みのリテラル引数
    pub fn arguments(&self) -> &[CaseArg] {
        &self.arguments
    }

    pub fn arg_kind(&self) -> ArgKind {
        self.body.arg_kind()
    }

    pub fn is_async(&self) -> bool {
        matches!(self.body, CaseBody::AsyncInt(_))
    }

    pub fn declares(&self, argument: &CaseArg) -> bool {
        self.arguments.contains(argument)
    }

    pub fn body(&self) -> CaseBody {
        self.body
    }
}

fn int_args(values: &[i32]) -> Vec<CaseArg> {
    values.iter().copied().map(CaseArg::Int).collect()
}

fn key_args(keys: &[&str]) -> Vec<CaseArg> {
    keys.iter().copied().map(CaseArg::key).collect()
}

fn use_task_body(runtime: &Runtime, init: i32) -> CaseValue {
    CaseValue::Float(runtime.block_on(task::use_task(init)))
}

/// ケースの一覧
#[derive(Debug, Clone)]
pub struct CaseRegistry {
    cases: Vec<CaseDefinition>,
}

impl CaseRegistry {
    pub fn new(cases: Vec<CaseDefinition>) -> Self {
        Self { cases }
    }

    /// 標準のケース構成
    pub fn standard() -> Self {
        let dispatch_keys = key_args(&["A", "Z", "AI"]);

        Self::new(vec![
            // Object Sizes
            CaseDefinition::new(
                "FlatObject",
                Category::ObjectSizes,
                int_args(&[3]),
                CaseBody::Int(|init| CaseValue::Flat(object_size::flat_object(init))),
            ),
            CaseDefinition::new(
                "NestedObject",
                Category::ObjectSizes,
                int_args(&[3]),
                CaseBody::Int(|init| CaseValue::Nested(object_size::nested_object(init))),
            ),
            // Task vs non-Task
            CaseDefinition::new(
                "UseTask",
                Category::TaskVsSync,
                int_args(&[1, 3]),
                CaseBody::AsyncInt(use_task_body),
            ),
            CaseDefinition::new(
                "DontUseTask",
                Category::TaskVsSync,
                int_args(&[1, 3]),
                CaseBody::Int(|init| CaseValue::Float(task::dont_use_task(init))),
            ),
            // Wrapper
            CaseDefinition::new(
                "IntWrapper",
                Category::Wrapper,
                int_args(&[3]),
                CaseBody::Int(|init| CaseValue::Wrappers(wrapper::int_wrapper(init))),
            ),
            CaseDefinition::new(
                "ListOfInts",
                Category::Wrapper,
                int_args(&[3]),
                CaseBody::Int(|init| CaseValue::Ints(wrapper::list_of_ints(init))),
            ),
            // IEnumerable vs List
            CaseDefinition::new(
                "GetIntsFromIEnumerable",
                Category::LazyVsList,
                int_args(&[-1]),
                CaseBody::Int(|init| CaseValue::Ints(sequence::get_ints_from_ienumerable(init))),
            ),
            CaseDefinition::new(
                "GetIntsFromList",
                Category::LazyVsList,
                int_args(&[-1]),
                CaseBody::Int(|init| CaseValue::Ints(sequence::get_ints_from_list(init))),
            ),
            // Exception vs non-exception
            CaseDefinition::new(
                "UseExceptions",
                Category::Exceptions,
                int_args(&[3, 0]),
                CaseBody::Int(|init| CaseValue::Int(fault::use_exceptions(init))),
            ),
            CaseDefinition::new(
                "UseSpecificExceptions",
                Category::Exceptions,
                int_args(&[3, 0]),
                CaseBody::Int(|init| CaseValue::Int(fault::use_specific_exceptions(init))),
            ),
            CaseDefinition::new(
                "DontUseExceptions",
                Category::Exceptions,
                int_args(&[3, 0]),
                CaseBody::Int(|init| CaseValue::Int(fault::dont_use_exceptions(init))),
            ),
            // Switch vs IfThenElse
            CaseDefinition::new(
                "GetSwitchStatement",
                Category::Dispatch,
                dispatch_keys.clone(),
                CaseBody::Key(|key| CaseValue::Int(dispatch::get_switch_statement(key))),
            ),
            CaseDefinition::new(
                "GetSwitchExpression",
                Category::Dispatch,
                dispatch_keys.clone(),
                CaseBody::Key(|key| CaseValue::Int(dispatch::get_switch_expression(key))),
            ),
            CaseDefinition::new(
                "GetIfThenElse",
                Category::Dispatch,
                dispatch_keys.clone(),
                CaseBody::Key(|key| CaseValue::Int(dispatch::get_if_then_else(key))),
            ),
            CaseDefinition::new(
                "GetDispatchTable",
                Category::Dispatch,
                dispatch_keys,
                CaseBody::Key(|key| CaseValue::Int(dispatch::get_dispatch_table(key))),
            ),
        ])
    }

    pub fn cases(&self) -> &[CaseDefinition] {
        &self.cases
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.cases.iter().map(CaseDefinition::name).collect()
    }

    /// 名前でケースを検索（大文字小文字は区別する）
    pub fn find(&self, name: &str) -> BenchResult<&CaseDefinition> {
        self.cases
            .iter()
            .find(|case| case.name == name)
            .ok_or_else(|| BenchError::unknown_case(name))
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &CaseDefinition> {
        self.cases
            .iter()
            .filter(move |case| case.category == category)
    }

    /// (ケース, 引数) の組の総数
    pub fn total_runs(&self) -> usize {
        self.cases.iter().map(|case| case.arguments.len()).sum()
    }
}

impl Default for CaseRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// レジストリと非同期ケース用ランタイムの組
pub struct Suite {
    registry: CaseRegistry,
    runtime: Runtime,
}

impl Suite {
    /// 標準レジストリでスイートを作成
    pub fn new() -> BenchResult<Self> {
        Self::with_registry(CaseRegistry::standard())
    }

    pub fn with_registry(registry: CaseRegistry) -> BenchResult<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(BenchError::runtime)?;
        fault::install_quiet_fault_hook();

        Ok(Self { registry, runtime })
    }

    pub fn registry(&self) -> &CaseRegistry {
        &self.registry
    }

    /// 宣言済みの引数でケースを呼び出す
    ///
    /// 未知のケース・種類違い・未宣言の引数はエラーとして返す
    pub fn invoke(&self, name: &str, argument: &CaseArg) -> BenchResult<CaseValue> {
        let case = self.registry.find(name)?;
        if !case.declares(argument) {
            return Err(BenchError::undeclared_argument(name, argument));
        }
        self.invoke_case(case, argument)
    }

    /// 宣言の有無を問わず、種類が合う引数でケースを呼び出す
    pub fn invoke_unchecked(&self, name: &str, argument: &CaseArg) -> BenchResult<CaseValue> {
        let case = self.registry.find(name)?;
        self.invoke_case(case, argument)
    }

    /// 定義を直接指定して呼び出す（測定ループ用）
    pub fn invoke_case(&self, case: &CaseDefinition, argument: &CaseArg) -> BenchResult<CaseValue> {
        match (case.body, argument) {
            (CaseBody::Int(body), CaseArg::Int(init)) => Ok(body(*init)),
            (CaseBody::Key(body), CaseArg::Key(key)) => Ok(body(key)),
            (CaseBody::AsyncInt(body), CaseArg::Int(init)) => Ok(body(&self.runtime, *init)),
            _ => {
                debug!(case = case.name, %argument, "argument kind mismatch");
                Err(BenchError::argument_kind_mismatch(
                    case.name,
                    case.arg_kind(),
                    argument.kind(),
                ))
            }
        }
    }
}
