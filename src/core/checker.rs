// ============================================================================
// LocSync - 结构漂移检查器
// ============================================================================
//
// 文件: src/core/checker.rs
// 职责: 两套语言树之间结构漂移的只读分析
// 边界:
//   - ✅ 分类文件配对扫描
//   - ✅ 两侧键集合差异计算
//   - ✅ 目标侧未翻译文本识别
//   - ❌ 不应修改任何文件
//   - ❌ 不应包含补丁生成逻辑
//   - ❌ 不应包含结果格式化输出
//
// ============================================================================

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::core::translator::contains_arabic;
use crate::models::tree::LocaleTree;
use crate::utils::constants::CALC_SUBDIR;
use crate::utils::logger::Logger;
use crate::tf;

/// 目标侧疑似未翻译的值
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UntranslatedValue {
    /// 点号键路径
    pub key: String,
    /// 当前值
    pub value: String,
}

/// 单个分类的漂移结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryDrift {
    /// 分类名
    pub category: String,
    /// 基准侧有、目标侧缺的键
    pub missing_in_target: Vec<String>,
    /// 目标侧有、基准侧缺的键
    pub missing_in_base: Vec<String>,
    /// 目标侧不含目标文字的值（待人工翻译）
    pub untranslated: Vec<UntranslatedValue>,
}

impl CategoryDrift {
    /// 该分类是否存在问题
    pub fn has_issues(&self) -> bool {
        !self.missing_in_target.is_empty()
            || !self.missing_in_base.is_empty()
            || !self.untranslated.is_empty()
    }
}

/// 结构漂移检查器
pub struct DriftChecker {
    /// 语言包根目录
    locales_root: PathBuf,
    /// 基准语言
    base_locale: String,
    /// 目标语言
    target_locale: String,
    /// 是否启用详细日志
    verbose: bool,
}

impl DriftChecker {
    /// 创建新的漂移检查器
    pub fn new(locales_root: PathBuf, base_locale: String, target_locale: String) -> Self {
        Self {
            locales_root,
            base_locale,
            target_locale,
            verbose: false,
        }
    }

    /// 启用详细日志
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 扫描全部分类并计算漂移
    pub fn check(&self) -> Result<Vec<CategoryDrift>> {
        let mut categories = BTreeSet::new();
        for locale in [&self.base_locale, &self.target_locale] {
            self.collect_categories(locale, &mut categories)?;
        }

        if self.verbose {
            Logger::info(tf!("check.found_categories", categories.len()));
        }

        let mut drifts = Vec::new();
        for category in categories {
            drifts.push(self.check_category(&category)?);
        }

        Ok(drifts)
    }

    /// 单个分类的漂移
    fn check_category(&self, category: &str) -> Result<CategoryDrift> {
        let base_tree = self.load_or_empty(&self.base_locale, category)?;
        let target_tree = self.load_or_empty(&self.target_locale, category)?;

        let base_flat = base_tree.flatten();
        let target_flat = target_tree.flatten();

        let mut drift = CategoryDrift {
            category: category.to_string(),
            ..CategoryDrift::default()
        };

        for key in base_flat.keys() {
            if !target_flat.contains_key(key) {
                drift.missing_in_target.push(key.clone());
            }
        }
        for key in target_flat.keys() {
            if !base_flat.contains_key(key) {
                drift.missing_in_base.push(key.clone());
            }
        }

        for (key, value) in &target_flat {
            // 含拉丁字母却无一个目标文字字符，视为未翻译
            if !contains_arabic(value) && value.chars().any(|c| c.is_ascii_alphabetic()) {
                drift.untranslated.push(UntranslatedValue {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
        }

        Ok(drift)
    }

    /// 加载分类文件，文件不存在时按空树处理（缺整份文件本身会
    /// 以整组 missing 键的形式体现在结果里）
    fn load_or_empty(&self, locale: &str, category: &str) -> Result<LocaleTree> {
        let path = self.category_file(locale, category);
        if !path.exists() {
            return Ok(LocaleTree::empty());
        }
        LocaleTree::load(&path).with_context(|| format!("failed to load {}", path.display()))
    }

    /// 收集某语言目录下的全部分类名
    fn collect_categories(&self, locale: &str, categories: &mut BTreeSet<String>) -> Result<()> {
        let dir = self.locales_root.join(locale).join(CALC_SUBDIR);
        if !dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(&dir).min_depth(1) {
            let entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(category) = Self::category_name(&dir, path) {
                categories.insert(category);
            }
        }

        Ok(())
    }

    /// 相对路径去掉扩展名即分类名（子目录用 '/' 连接）
    fn category_name(dir: &Path, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(dir).ok()?;
        let without_ext = relative.with_extension("");
        let name = without_ext
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        (!name.is_empty()).then_some(name)
    }

    /// 分类文件路径
    fn category_file(&self, locale: &str, category: &str) -> PathBuf {
        let mut path = self.locales_root.join(locale).join(CALC_SUBDIR);
        for part in category.split('/') {
            path.push(part);
        }
        path.set_extension("json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(files: &[(&str, &str, &str)]) -> (tempfile::TempDir, DriftChecker) {
        let dir = tempfile::tempdir().unwrap();
        for (locale, category, content) in files {
            let path = dir
                .path()
                .join(locale)
                .join("calc")
                .join(format!("{}.json", category));
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, content).unwrap();
        }
        let checker = DriftChecker::new(
            dir.path().to_path_buf(),
            "en".to_string(),
            "ar".to_string(),
        );
        (dir, checker)
    }

    #[test]
    fn reports_keys_missing_on_either_side() {
        let (_dir, checker) = fixture(&[
            ("en", "pet", r#"{"cat": {"title": "Cat", "hint": "Hint"}}"#),
            ("ar", "pet", r#"{"cat": {"title": "قطة", "extra": "إضافي"}}"#),
        ]);

        let drifts = checker.check().unwrap();
        assert_eq!(drifts.len(), 1);
        assert_eq!(drifts[0].missing_in_target, ["cat.hint"]);
        assert_eq!(drifts[0].missing_in_base, ["cat.extra"]);
    }

    #[test]
    fn flags_latin_only_target_values() {
        let (_dir, checker) = fixture(&[
            ("en", "pet", r#"{"cat": {"title": "Cat"}}"#),
            ("ar", "pet", r#"{"cat": {"title": "Cat"}}"#),
        ]);

        let drifts = checker.check().unwrap();
        assert_eq!(drifts[0].untranslated.len(), 1);
        assert_eq!(drifts[0].untranslated[0].key, "cat.title");
    }

    #[test]
    fn numeric_only_values_are_not_flagged() {
        let (_dir, checker) = fixture(&[
            ("en", "misc", r#"{"calc": {"ratio": "1:2"}}"#),
            ("ar", "misc", r#"{"calc": {"ratio": "1:2"}}"#),
        ]);

        let drifts = checker.check().unwrap();
        assert!(drifts[0].untranslated.is_empty());
    }

    #[test]
    fn whole_missing_file_shows_as_missing_keys() {
        let (_dir, checker) = fixture(&[("en", "pet", r#"{"cat": {"title": "Cat"}}"#)]);

        let drifts = checker.check().unwrap();
        assert_eq!(drifts[0].missing_in_target, ["cat.title"]);
    }

    #[test]
    fn clean_pair_has_no_issues() {
        let (_dir, checker) = fixture(&[
            ("en", "pet", r#"{"cat": {"title": "Cat"}}"#),
            ("ar", "pet", r#"{"cat": {"title": "قطة"}}"#),
        ]);

        let drifts = checker.check().unwrap();
        assert!(!drifts[0].has_issues());
    }
}
