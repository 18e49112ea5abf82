use crate::core::Category;
use crate::registry::{CaseDefinition, CaseRegistry};
use anyhow::Result;

/// 1ケース分の一覧表示行
pub fn format_case_line(case: &CaseDefinition) -> String {
    let arguments: Vec<String> = case.arguments().iter().map(ToString::to_string).collect();
    let suffix = if case.is_async() { " [async]" } else { "" };
    format!(
        "  {:<24} ({}) [{}]{suffix}",
        case.name(),
        case.arg_kind(),
        arguments.join(", ")
    )
}

/// カテゴリごとにまとめた一覧
pub fn format_case_listing(registry: &CaseRegistry, category: Option<Category>) -> Vec<String> {
    let mut lines = Vec::new();
    for current in Category::ALL {
        if category.is_some_and(|c| c != current) {
            continue;
        }
        let cases: Vec<&CaseDefinition> = registry.by_category(current).collect();
        if cases.is_empty() {
            continue;
        }
        lines.push(format!("{current}:"));
        lines.extend(cases.into_iter().map(format_case_line));
    }
    lines
}

/// List all cases
pub fn execute_list(category: Option<Category>) -> Result<()> {
    let registry = CaseRegistry::standard();
    for line in format_case_listing(&registry, category) {
        println!("{line}");
    }
    Ok(())
}
