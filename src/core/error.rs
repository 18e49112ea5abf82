// ベンチマークスイート用のカスタムエラー型定義

use super::types::ArgKind;
use thiserror::Error;

/// スイート固有のエラー型
///
/// ケース本体は失敗しないため、ここに現れるのはハーネス側の誤用か
/// 測定環境の問題のみ
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("未知のケース: {name}")]
    UnknownCase { name: String },

    #[error("未宣言の引数: {case}({argument})")]
    UndeclaredArgument { case: String, argument: String },

    #[error("引数の種類が一致しません: {case} は {expected} を受け取りますが {actual} が渡されました")]
    ArgumentKindMismatch {
        case: String,
        expected: ArgKind,
        actual: ArgKind,
    },

    #[error("引数を解釈できません: {input} - {reason}")]
    InvalidArgument { input: String, reason: String },

    #[error("結果が一致しません: {case}({argument}) 期待値 {expected}, 実際 {actual}")]
    InconsistentResult {
        case: String,
        argument: String,
        expected: String,
        actual: String,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("ランタイム初期化エラー: {source}")]
    RuntimeError {
        #[source]
        source: std::io::Error,
    },

    #[error("レポート出力エラー: {path} - {source}")]
    ExportError {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

impl BenchError {
    /// 未知ケースエラーの作成
    pub fn unknown_case(name: impl Into<String>) -> Self {
        Self::UnknownCase { name: name.into() }
    }

    /// 未宣言引数エラーの作成
    pub fn undeclared_argument(case: impl Into<String>, argument: impl ToString) -> Self {
        Self::UndeclaredArgument {
            case: case.into(),
            argument: argument.to_string(),
        }
    }

    /// 引数種別不一致エラーの作成
    pub fn argument_kind_mismatch(
        case: impl Into<String>,
        expected: ArgKind,
        actual: ArgKind,
    ) -> Self {
        Self::ArgumentKindMismatch {
            case: case.into(),
            expected,
            actual,
        }
    }

    /// 引数解釈エラーの作成
    pub fn invalid_argument(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// 結果不一致エラーの作成
    pub fn inconsistent_result(
        case: impl Into<String>,
        argument: impl ToString,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InconsistentResult {
            case: case.into(),
            argument: argument.to_string(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// ランタイムエラーの作成
    pub fn runtime(source: std::io::Error) -> Self {
        Self::RuntimeError { source }
    }

    /// レポート出力エラーの作成
    pub fn export(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::ExportError {
            path: path.into(),
            source,
        }
    }

    /// ハーネス側の誤用によるエラーかどうか
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCase { .. }
                | Self::UndeclaredArgument { .. }
                | Self::ArgumentKindMismatch { .. }
                | Self::InvalidArgument { .. }
                | Self::ConfigurationError { .. }
                | Self::ValidationError { .. }
        )
    }
}

/// スイートの結果型
pub type BenchResult<T> = std::result::Result<T, BenchError>;

/// 検証結果 - バリデーション専用の結果型
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// バリデーション専用エラー型
#[derive(Error, Debug, Clone)]
#[error("バリデーションエラー: {field} - {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    /// 新しいバリデーションエラーを作成
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for BenchError {
    fn from(error: ValidationError) -> Self {
        BenchError::ValidationError {
            field: error.field,
            reason: error.reason,
        }
    }
}
