// ============================================================================
// LocSync - 错误类型定义
// ============================================================================
//
// 文件: src/core/error.rs
// 职责: 同步流程中可识别错误的类型定义
// 边界:
//   - ✅ 错误枚举定义
//   - ✅ 错误展示文案
//   - ❌ 不应包含错误恢复逻辑（在 driver 中按计算器粒度处理）
//   - ❌ 不应包含日志输出
//
// 错误分级:
// 1. MalformedKeyPath     —— 跳过该键，计算器继续
// 2. MissingCategoryFiles —— 跳过该计算器，运行继续
// 3. RootKeyCollision     —— 跳过后到的计算器，需人工处理命名冲突
// 4. SerializationFailure —— 该文件保持原样不写入，计算器记为失败
// 5. Io                   —— 文件读写失败，同样按计算器粒度处理
//
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// 同步流程错误
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// 原始键无法解析出非空路径
    #[error("malformed key path: '{0}'")]
    MalformedKeyPath(String),

    /// 分类对应的语言文件缺失
    #[error("missing locale file for category '{category}': {path}")]
    MissingCategoryFiles { category: String, path: PathBuf },

    /// 两个计算器解析出同一根键
    #[error(
        "root key collision in '{category}': '{root_key}' already claimed by '{claimed_by}'"
    )]
    RootKeyCollision {
        category: String,
        root_key: String,
        claimed_by: String,
    },

    /// 语言树无法序列化/反序列化
    #[error("serialization failure for {path}: {message}")]
    SerializationFailure { path: PathBuf, message: String },

    /// 文件读写失败
    #[error("io error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
