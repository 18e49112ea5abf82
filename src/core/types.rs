// ケースの引数・戻り値に関連するデータ型定義

use super::error::{BenchError, BenchResult};
use crate::cases::{FlatObject, NestedObject, Wrapper};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ケースが受け取る引数の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgKind {
    Int,
    Key,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.write_str("integer"),
            Self::Key => f.write_str("string key"),
        }
    }
}

/// ケースに渡すリテラル引数
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaseArg {
    Int(i32),
    Key(String),
}

impl CaseArg {
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    pub fn kind(&self) -> ArgKind {
        match self {
            Self::Int(_) => ArgKind::Int,
            Self::Key(_) => ArgKind::Key,
        }
    }

    /// コマンドライン文字列を指定された種類の引数として解釈する
    ///
    /// 文字列キーは`"A"`のように引用符で囲まれていてもよい
    pub fn parse(kind: ArgKind, input: &str) -> BenchResult<Self> {
        let trimmed = input.trim();
        match kind {
            ArgKind::Int => trimmed
                .parse::<i32>()
                .map(Self::Int)
                .map_err(|e| BenchError::invalid_argument(input, e.to_string())),
            ArgKind::Key => {
                let unquoted = trimmed
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or(trimmed);
                Ok(Self::Key(unquoted.to_string()))
            }
        }
    }
}

impl fmt::Display for CaseArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Key(key) => write!(f, "\"{key}\""),
        }
    }
}

impl From<i32> for CaseArg {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for CaseArg {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}

/// ケースの戻り値
///
/// 呼び出しごとに新しく構築され、呼び出し間で共有されない
#[derive(Debug, Clone, PartialEq)]
pub enum CaseValue {
    Int(i32),
    Float(f64),
    Flat(FlatObject),
    Nested(NestedObject),
    Wrappers(Vec<Box<Wrapper>>),
    Ints(Vec<i32>),
}

impl CaseValue {
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// オブジェクト系の戻り値が保持する整数
    pub fn field_value(&self) -> Option<i32> {
        match self {
            Self::Flat(object) => Some(object.value()),
            Self::Nested(object) => Some(object.value()),
            _ => None,
        }
    }

    /// シーケンス系の戻り値の要素数
    pub fn sequence_len(&self) -> Option<usize> {
        match self {
            Self::Wrappers(items) => Some(items.len()),
            Self::Ints(items) => Some(items.len()),
            _ => None,
        }
    }

    /// シーケンス系の戻り値を整数列として取り出す
    pub fn to_ints(&self) -> Option<Vec<i32>> {
        match self {
            Self::Wrappers(items) => Some(items.iter().map(|w| w.int_val).collect()),
            Self::Ints(items) => Some(items.clone()),
            _ => None,
        }
    }

    /// レポート用の短い要約
    pub fn summary(&self) -> String {
        match self {
            Self::Int(value) => format!("Int({value})"),
            Self::Float(value) => format!("Float({value})"),
            Self::Flat(object) => format!("FlatObject({})", object.value()),
            Self::Nested(object) => format!("NestedObject({})", object.value()),
            Self::Wrappers(items) => format!("Wrappers(len={})", items.len()),
            Self::Ints(items) => format!("Ints(len={})", items.len()),
        }
    }
}

impl fmt::Display for CaseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// ケースの分類
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ObjectSizes,
    TaskVsSync,
    Wrapper,
    LazyVsList,
    Exceptions,
    Dispatch,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::ObjectSizes,
        Category::TaskVsSync,
        Category::Wrapper,
        Category::LazyVsList,
        Category::Exceptions,
        Category::Dispatch,
    ];

    /// 表示用の名前
    pub const fn title(&self) -> &'static str {
        match self {
            Self::ObjectSizes => "Object Sizes",
            Self::TaskVsSync => "Task vs non-Task",
            Self::Wrapper => "Wrapper",
            Self::LazyVsList => "IEnumerable vs List",
            Self::Exceptions => "Exception vs non-exception",
            Self::Dispatch => "Switch vs IfThenElse",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
