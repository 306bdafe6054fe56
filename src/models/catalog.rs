// ============================================================================
// LocSync - 目录清单数据模型
// ============================================================================
//
// 文件: src/models/catalog.rs
// 职责: 计算器目录清单的数据结构定义和加载
// 边界:
//   - ✅ 计算器记录结构定义
//   - ✅ 清单文件反序列化
//   - ❌ 不应包含键解析逻辑
//   - ❌ 不应包含清单生成逻辑（由外部扫描器产出）
//
// 清单由组件扫描器生成，形如:
//   [{ "slug": "cat-calorie-calculator", "category": "pet",
//      "keys": ["calc/pet:cat_calorie.results_title", ...] }, ...]
//
// ============================================================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 一个计算器及其引用的翻译键
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorRecord {
    /// 计算器标识（页面 slug）
    pub slug: String,
    /// 所属分类
    pub category: String,
    /// 源码扫描出的原始键引用
    #[serde(default)]
    pub keys: Vec<String>,
}

/// 加载目录清单
///
/// 清单不可读是前置条件失败，调用方应当终止整次运行。
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<CalculatorRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog: {}", path.display()))?;
    let records: Vec<CalculatorRecord> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse catalog: {}", path.display()))?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_records() {
        let json = r#"[
            {"slug": "cat-calorie-calculator", "category": "pet",
             "keys": ["cat_calorie.results_title"]},
            {"slug": "aquarium-calculator", "category": "calc/pet"}
        ]"#;
        let records: Vec<CalculatorRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].slug, "cat-calorie-calculator");
        assert_eq!(records[0].keys.len(), 1);
        assert!(records[1].keys.is_empty());
    }

    #[test]
    fn unreadable_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_catalog(&dir.path().join("missing.json")).is_err());
    }
}
