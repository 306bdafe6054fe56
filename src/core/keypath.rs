// ============================================================================
// LocSync - 键路径解析
// ============================================================================
//
// 文件: src/core/keypath.rs
// 职责: 翻译键引用字符串的解析和归一化
// 边界:
//   - ✅ 命名空间前缀解析
//   - ✅ 计算器根键前缀剥离
//   - ✅ 共享命名空间识别
//   - ❌ 不应包含文件路径解析（那是 router 的职责）
//   - ❌ 不应包含树结构操作
//
// 归一化规则（与组件扫描器输出的引用格式对应）:
// 1. 首个 ':' 之前为命名空间，如 "calc/misc:abjad.standard_title"
// 2. 其余部分按 '.' 切分为路径段
// 3. 首段等于所属计算器根键时剥离（补丁本身挂在根键之下，前缀冗余）
// 4. 剥离后路径为空或含空段视为格式错误
//
// ============================================================================

use crate::core::error::ReconcileError;
use crate::utils::constants::COMMON_NAMESPACE;

/// i18next 默认命名空间，原始项目中与 common 等价使用
const DEFAULT_NAMESPACE: &str = "translation";

/// 归一化后的键路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    /// 命名空间前缀（引用中的 "ns:" 部分）
    namespace: Option<String>,
    /// 路径段
    segments: Vec<String>,
}

impl KeyPath {
    /// 解析原始键引用
    ///
    /// `root_key` 为所属计算器的根键，用于剥离冗余前缀。
    pub fn parse(raw: &str, root_key: &str) -> Result<Self, ReconcileError> {
        let (namespace, remainder) = match raw.split_once(':') {
            Some((ns, rest)) => (Some(ns.trim().to_string()), rest),
            None => (None, raw),
        };

        let remainder = remainder.trim();
        if remainder.is_empty() {
            return Err(ReconcileError::MalformedKeyPath(raw.to_string()));
        }

        let mut segments: Vec<String> = remainder.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(ReconcileError::MalformedKeyPath(raw.to_string()));
        }

        // 首段与根键一致时剥离
        if segments.first().map(String::as_str) == Some(root_key) {
            segments.remove(0);
        }

        if segments.is_empty() {
            return Err(ReconcileError::MalformedKeyPath(raw.to_string()));
        }

        Ok(Self { namespace, segments })
    }

    /// 是否属于共享命名空间
    ///
    /// 共享命名空间由人工维护，同步流程对其中的键一律硬跳过。
    pub fn is_common(&self) -> bool {
        match self.namespace.as_deref() {
            Some(COMMON_NAMESPACE) | Some(DEFAULT_NAMESPACE) => true,
            _ => self.segments.first().map(String::as_str) == Some(COMMON_NAMESPACE),
        }
    }

    /// 命名空间前缀
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// 路径段
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// 叶子键名（最后一段）
    pub fn leaf_key(&self) -> &str {
        // parse 保证 segments 非空
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// 点号连接的路径
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

impl std::fmt::Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}:{}", ns, self.dotted()),
            None => write!(f, "{}", self.dotted()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_namespaced_reference() {
        let path = KeyPath::parse("calc/agriculture:fertilizer.error_soil_negative", "other").unwrap();
        assert_eq!(path.namespace(), Some("calc/agriculture"));
        assert_eq!(path.segments(), ["fertilizer", "error_soil_negative"]);
        assert_eq!(path.leaf_key(), "error_soil_negative");
        assert!(!path.is_common());
    }

    #[test]
    fn strips_redundant_root_key_prefix() {
        let path = KeyPath::parse("cat_calorie.results_title", "cat_calorie").unwrap();
        assert_eq!(path.segments(), ["results_title"]);
    }

    #[test]
    fn keeps_unrelated_first_segment() {
        let path = KeyPath::parse("labels.weight", "cat_calorie").unwrap();
        assert_eq!(path.segments(), ["labels", "weight"]);
    }

    #[test]
    fn rejects_paths_left_empty_after_stripping() {
        let err = KeyPath::parse("cat_calorie", "cat_calorie").unwrap_err();
        assert!(matches!(err, ReconcileError::MalformedKeyPath(_)));
    }

    #[test]
    fn rejects_empty_segments() {
        assert!(KeyPath::parse("a..b", "x").is_err());
        assert!(KeyPath::parse(".a", "x").is_err());
        assert!(KeyPath::parse("", "x").is_err());
        assert!(KeyPath::parse("ns:", "x").is_err());
    }

    #[test]
    fn accepts_unicode_identifiers() {
        let path = KeyPath::parse("القسم.العنوان", "x").unwrap();
        assert_eq!(path.segments().len(), 2);
    }

    #[test]
    fn common_namespace_is_detected() {
        assert!(KeyPath::parse("common:errors.invalid_input", "x").unwrap().is_common());
        assert!(KeyPath::parse("translation:common.error", "x").unwrap().is_common());
        assert!(KeyPath::parse("common.errors.invalid_input", "x").unwrap().is_common());
        assert!(!KeyPath::parse("calc/misc:abjad.title", "x").unwrap().is_common());
    }
}
