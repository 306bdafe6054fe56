// ============================================================================
// LocSync - 分类路由
// ============================================================================
//
// 文件: src/core/router.rs
// 职责: 计算器到语言文件对和根键的解析
// 边界:
//   - ✅ 计算器 slug 到根键的推导
//   - ✅ 分类到语言文件对的定位
//   - ✅ 根键抢占登记和冲突检测
//   - ❌ 不应包含文件内容读写
//   - ❌ 不应包含键路径解析
//
// 根键推导规则（与既有语言文件中的既成命名保持一致）:
//   "car-depreciation-calculator" → 去掉 "-calculator" 后缀 → '-' 换 '_'
//   → "car_depreciation"
//
// ============================================================================

use std::collections::HashMap;
use std::path::PathBuf;

use crate::core::error::ReconcileError;
use crate::models::catalog::CalculatorRecord;
use crate::utils::constants::CALC_SUBDIR;

/// 解析结果：一个计算器的写入目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTarget {
    /// 归一化后的分类名
    pub category: String,
    /// 计算器子树在分类文件中的根键
    pub root_key: String,
    /// 基准语言文件
    pub base_path: PathBuf,
    /// 目标语言文件
    pub target_path: PathBuf,
}

/// 分类路由器
#[derive(Debug)]
pub struct CategoryRouter {
    /// 语言包根目录
    locales_root: PathBuf,
    /// 基准语言
    base_locale: String,
    /// 目标语言
    target_locale: String,
    /// 根键抢占登记：(分类, 根键) → 首个占用的 slug
    claims: HashMap<(String, String), String>,
}

impl CategoryRouter {
    /// 创建新的分类路由器
    pub fn new(locales_root: PathBuf, base_locale: String, target_locale: String) -> Self {
        Self {
            locales_root,
            base_locale,
            target_locale,
            claims: HashMap::new(),
        }
    }

    /// 解析计算器的写入目标
    ///
    /// 同一 slug 重复解析是幂等的；不同 slug 解析到同一 (分类, 根键)
    /// 视为命名冲突，后到者被拒绝。
    pub fn resolve(&mut self, record: &CalculatorRecord) -> Result<RouteTarget, ReconcileError> {
        let category = Self::normalize_category(&record.category);
        let root_key = Self::derive_root_key(&record.slug);

        // 根键抢占检测
        let claim_key = (category.clone(), root_key.clone());
        match self.claims.get(&claim_key) {
            Some(claimed_by) if claimed_by != &record.slug => {
                return Err(ReconcileError::RootKeyCollision {
                    category,
                    root_key,
                    claimed_by: claimed_by.clone(),
                });
            }
            _ => {
                self.claims.insert(claim_key, record.slug.clone());
            }
        }

        let base_path = self.locale_file(&self.base_locale, &category);
        let target_path = self.locale_file(&self.target_locale, &category);

        for path in [&base_path, &target_path] {
            if !path.exists() {
                return Err(ReconcileError::MissingCategoryFiles {
                    category,
                    path: path.clone(),
                });
            }
        }

        Ok(RouteTarget {
            category,
            root_key,
            base_path,
            target_path,
        })
    }

    /// 从 slug 推导根键
    pub fn derive_root_key(slug: &str) -> String {
        slug.strip_suffix("-calculator").unwrap_or(slug).replace('-', "_")
    }

    /// 归一化分类名（目录清单中 "calc/pet" 与 "pet" 等价）
    fn normalize_category(category: &str) -> String {
        category
            .strip_prefix("calc/")
            .unwrap_or(category)
            .to_string()
    }

    /// 语言文件路径: <root>/<locale>/calc/<category>.json
    fn locale_file(&self, locale: &str, category: &str) -> PathBuf {
        self.locales_root
            .join(locale)
            .join(CALC_SUBDIR)
            .join(format!("{}.json", category))
    }
}
