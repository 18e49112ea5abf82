// 測定設定の具象実装

use crate::core::{Category, ValidationError, ValidationResult};
use crate::registry::CaseDefinition;
use serde::Serialize;

/// 測定プリセット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RunPreset {
    /// バランスの取れたデフォルト設定
    #[default]
    Default,
    /// 動作確認用の短い設定
    Quick,
    /// ばらつきを抑えるための長い設定
    Thorough,
}

impl RunPreset {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Quick => "quick",
            Self::Thorough => "thorough",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "ウォームアップ3回 + 測定10回",
            Self::Quick => "ウォームアップ1回 + 測定3回",
            Self::Thorough => "ウォームアップ10回 + 測定50回",
        }
    }

    pub const fn warmup_iterations(&self) -> usize {
        match self {
            Self::Default => 3,
            Self::Quick => 1,
            Self::Thorough => 10,
        }
    }

    pub const fn measured_iterations(&self) -> usize {
        match self {
            Self::Default => 10,
            Self::Quick => 3,
            Self::Thorough => 50,
        }
    }
}

/// 測定ランナーの設定
#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    preset: RunPreset,
    warmup_iterations: usize,
    measured_iterations: usize,
    case_filter: Vec<String>,
    category: Option<Category>,
}

impl RunConfig {
    pub fn from_preset(preset: RunPreset) -> Self {
        Self {
            preset,
            warmup_iterations: preset.warmup_iterations(),
            measured_iterations: preset.measured_iterations(),
            case_filter: Vec::new(),
            category: None,
        }
    }

    pub fn with_warmup_iterations(mut self, iterations: usize) -> Self {
        self.warmup_iterations = iterations;
        self
    }

    pub fn with_measured_iterations(mut self, iterations: usize) -> Self {
        self.measured_iterations = iterations;
        self
    }

    /// 測定対象をケース名で絞り込む（空なら全ケース）
    pub fn with_case_filter(mut self, names: Vec<String>) -> Self {
        self.case_filter = names;
        self
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn preset(&self) -> RunPreset {
        self.preset
    }

    pub fn warmup_iterations(&self) -> usize {
        self.warmup_iterations
    }

    pub fn measured_iterations(&self) -> usize {
        self.measured_iterations
    }

    pub fn case_filter(&self) -> &[String] {
        &self.case_filter
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// ケースが測定対象に含まれるかどうか
    pub fn selects(&self, case: &CaseDefinition) -> bool {
        let name_matches =
            self.case_filter.is_empty() || self.case_filter.iter().any(|name| name == case.name());
        let category_matches = self.category.map_or(true, |c| c == case.category());
        name_matches && category_matches
    }

    /// 設定値の検証
    ///
    /// 最初のウォームアップ結果を結果要約と一貫性チェックの基準にするため、
    /// ウォームアップも1回以上必要
    pub fn validate(&self) -> ValidationResult<()> {
        if self.warmup_iterations == 0 {
            return Err(ValidationError::new(
                "warmup_iterations",
                "1以上である必要があります",
            ));
        }
        if self.measured_iterations == 0 {
            return Err(ValidationError::new(
                "measured_iterations",
                "1以上である必要があります",
            ));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::from_preset(RunPreset::Default)
    }
}
