// ============================================================================
// LocSync - 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 同步流水线核心子模块导出
// 边界:
//   - ✅ 子模块声明和导出
//   - ❌ 不应包含业务逻辑实现
//
// ============================================================================

pub mod checker;
pub mod driver;
pub mod error;
pub mod keypath;
pub mod merger;
pub mod router;
pub mod translator;
