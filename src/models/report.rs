// ============================================================================
// LocSync - 运行报告数据模型
// ============================================================================
//
// 文件: src/models/report.rs
// 职责: 同步运行结果的数据结构定义
// 边界:
//   - ✅ 单个计算器处理结果结构
//   - ✅ 全局运行报告结构和汇总统计
//   - ✅ 报告序列化（--format json）
//   - ❌ 不应包含表格渲染逻辑（那是 ui::summary 的职责）
//   - ❌ 不应包含同步执行逻辑
//
// 报告原则: 每一次跳过和失败都带着计算器名和原因出现在报告里，
// 绝不静默丢弃。
//
// ============================================================================

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// 单个计算器的处理状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// 写入了新键
    Updated,
    /// 所有键均已存在，无需写入
    Clean,
    /// 整体跳过（文件缺失 / 根键冲突）
    Skipped,
    /// 处理失败（序列化或写盘错误）
    Failed,
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            OutcomeStatus::Updated => "updated",
            OutcomeStatus::Clean => "clean",
            OutcomeStatus::Skipped => "skipped",
            OutcomeStatus::Failed => "failed",
        };
        write!(f, "{}", text)
    }
}

/// 单个计算器的处理结果
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorOutcome {
    /// 计算器标识
    pub slug: String,
    /// 所属分类
    pub category: String,
    /// 处理状态
    pub status: OutcomeStatus,
    /// 跳过/失败原因
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// 来自人工覆盖表的新增键数
    pub added_manual: usize,
    /// 启发式生成的新增键数
    pub added_generated: usize,
    /// 两侧均已存在而跳过的键数
    pub skipped_existing: usize,
    /// 无法解析而跳过的原始键
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub malformed_keys: Vec<String>,
    /// 合并中记录的结构错位路径
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub mismatches: Vec<String>,
}

impl CalculatorOutcome {
    /// 创建跳过结果
    pub fn skipped(slug: &str, category: &str, reason: String) -> Self {
        Self {
            slug: slug.to_string(),
            category: category.to_string(),
            status: OutcomeStatus::Skipped,
            reason: Some(reason),
            added_manual: 0,
            added_generated: 0,
            skipped_existing: 0,
            malformed_keys: Vec::new(),
            mismatches: Vec::new(),
        }
    }

    /// 创建失败结果
    pub fn failed(slug: &str, category: &str, reason: String) -> Self {
        Self {
            status: OutcomeStatus::Failed,
            ..Self::skipped(slug, category, reason)
        }
    }

    /// 新增键总数
    pub fn added_total(&self) -> usize {
        self.added_manual + self.added_generated
    }
}

/// 整次运行的报告
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// 是否为预演运行（未写盘）
    pub dry_run: bool,
    /// 逐计算器结果（目录顺序）
    pub calculators: Vec<CalculatorOutcome>,
    /// 实际写入过的语言文件
    pub files_touched: BTreeSet<PathBuf>,
    /// 基准语言新增键数
    pub keys_added_base: usize,
    /// 目标语言新增键数
    pub keys_added_target: usize,
    /// 目标侧回退为基准文本的键（全限定），等待人工翻译
    pub unverified: Vec<String>,
}

impl RunReport {
    /// 有计算器被跳过或失败
    pub fn has_issues(&self) -> bool {
        self.calculators.iter().any(|c| {
            matches!(c.status, OutcomeStatus::Skipped | OutcomeStatus::Failed)
        })
    }

    /// 写入过键的计算器数量
    pub fn updated_count(&self) -> usize {
        self.calculators
            .iter()
            .filter(|c| c.status == OutcomeStatus::Updated)
            .count()
    }

    /// 新增键总数
    pub fn keys_added_total(&self) -> usize {
        self.keys_added_base + self.keys_added_target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_aggregates_outcomes() {
        let mut report = RunReport::default();
        report.calculators.push(CalculatorOutcome {
            slug: "a".into(),
            category: "pet".into(),
            status: OutcomeStatus::Updated,
            reason: None,
            added_manual: 1,
            added_generated: 2,
            skipped_existing: 3,
            malformed_keys: Vec::new(),
            mismatches: Vec::new(),
        });
        report.calculators.push(CalculatorOutcome::skipped("b", "pet", "missing files".into()));

        assert_eq!(report.updated_count(), 1);
        assert!(report.has_issues());
        assert_eq!(report.calculators[0].added_total(), 3);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = RunReport::default();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["dry_run"], false);
        assert!(json["calculators"].as_array().unwrap().is_empty());
    }
}
