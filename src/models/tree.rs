// ============================================================================
// LocSync - 语言树数据模型
// ============================================================================
//
// 文件: src/models/tree.rs
// 职责: 单个语言文件的嵌套键值树结构定义和读写
// 边界:
//   - ✅ 语言树数据结构定义（叶子字符串 / 嵌套节点）
//   - ✅ 语言树序列化/反序列化
//   - ✅ 路径查找和扁平化工具
//   - ✅ 语言文件原子读写
//   - ❌ 不应包含合并逻辑（那是 core::merger 的职责）
//   - ❌ 不应包含键路径解析逻辑
//   - ❌ 不应包含翻译生成逻辑
//
// 数据约束:
// 1. 叶子只允许字符串，数组/数字/null 在反序列化阶段即被拒绝
// 2. 节点使用插入序映射，重复运行产生的序列化结果对版本管理友好
// 3. 写盘先完整序列化到同目录临时文件再原子替换，中断不会产生半截文件
//
// ============================================================================

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::core::error::ReconcileError;

/// 语言树：叶子字符串或嵌套子树
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocaleTree {
    /// 终端翻译文本
    Leaf(String),
    /// 嵌套子树（保持插入顺序）
    Node(IndexMap<String, LocaleTree>),
}

impl Default for LocaleTree {
    fn default() -> Self {
        LocaleTree::Node(IndexMap::new())
    }
}

impl LocaleTree {
    /// 创建空节点
    pub fn empty() -> Self {
        Self::default()
    }

    /// 创建叶子
    pub fn leaf<S: Into<String>>(value: S) -> Self {
        LocaleTree::Leaf(value.into())
    }

    /// 是否为叶子
    pub fn is_leaf(&self) -> bool {
        matches!(self, LocaleTree::Leaf(_))
    }

    /// 取叶子文本
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            LocaleTree::Leaf(value) => Some(value.as_str()),
            LocaleTree::Node(_) => None,
        }
    }

    /// 取节点映射
    pub fn as_node(&self) -> Option<&IndexMap<String, LocaleTree>> {
        match self {
            LocaleTree::Leaf(_) => None,
            LocaleTree::Node(children) => Some(children),
        }
    }

    /// 取可变节点映射
    pub fn as_node_mut(&mut self) -> Option<&mut IndexMap<String, LocaleTree>> {
        match self {
            LocaleTree::Leaf(_) => None,
            LocaleTree::Node(children) => Some(children),
        }
    }

    /// 按路径段查找子树
    pub fn get_path<S: AsRef<str>>(&self, segments: &[S]) -> Option<&LocaleTree> {
        let mut current = self;
        for segment in segments {
            match current {
                LocaleTree::Node(children) => {
                    current = children.get(segment.as_ref())?;
                }
                LocaleTree::Leaf(_) => return None,
            }
        }
        Some(current)
    }

    /// 路径上是否已存在字符串叶子
    pub fn contains_leaf<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        matches!(self.get_path(segments), Some(LocaleTree::Leaf(_)))
    }

    /// 在路径处写入叶子，必要时创建中间节点
    ///
    /// 路径中途遇到叶子时以空节点替换后继续（补丁构造期的结构错位，
    /// 最终合并阶段会再次比对并记录）。
    pub fn insert_leaf<S: AsRef<str>>(&mut self, segments: &[S], value: &str) {
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut current = self;
        for segment in parents {
            if current.is_leaf() {
                *current = LocaleTree::empty();
            }
            current = match current {
                LocaleTree::Node(children) => children
                    .entry(segment.as_ref().to_string())
                    .or_insert_with(LocaleTree::empty),
                LocaleTree::Leaf(_) => unreachable!("leaf replaced above"),
            };
        }

        if current.is_leaf() {
            *current = LocaleTree::empty();
        }
        if let LocaleTree::Node(children) = current {
            children.insert(last.as_ref().to_string(), LocaleTree::leaf(value));
        }
    }

    /// 扁平化为点号路径到叶子文本的映射
    pub fn flatten(&self) -> IndexMap<String, String> {
        let mut result = IndexMap::new();
        self.flatten_into("", &mut result);
        result
    }

    fn flatten_into(&self, prefix: &str, result: &mut IndexMap<String, String>) {
        match self {
            LocaleTree::Leaf(value) => {
                result.insert(prefix.to_string(), value.clone());
            }
            LocaleTree::Node(children) => {
                for (key, child) in children {
                    let child_prefix = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    child.flatten_into(&child_prefix, result);
                }
            }
        }
    }

    /// 统计叶子数量
    pub fn leaf_count(&self) -> usize {
        match self {
            LocaleTree::Leaf(_) => 1,
            LocaleTree::Node(children) => children.values().map(LocaleTree::leaf_count).sum(),
        }
    }

    /// 从语言文件加载
    pub fn load(path: &Path) -> Result<Self, ReconcileError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReconcileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ReconcileError::SerializationFailure {
            path: path.to_path_buf(),
            message: source.to_string(),
        })
    }

    /// 原子写回语言文件
    ///
    /// 先完整序列化并写入同目录临时文件，成功后再原子替换目标文件，
    /// 任何一步失败都不会破坏原文件。
    pub fn save(&self, path: &Path) -> Result<(), ReconcileError> {
        let serialized = serde_json::to_string_pretty(self).map_err(|source| {
            ReconcileError::SerializationFailure {
                path: path.to_path_buf(),
                message: source.to_string(),
            }
        })?;

        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).map_err(|source| ReconcileError::Io {
            path: parent.to_path_buf(),
            source,
        })?;

        let io_err = |source: std::io::Error| ReconcileError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(io_err)?;
        tmp.write_all(serialized.as_bytes()).map_err(io_err)?;
        // 文件尾保留换行，与项目内既有 JSON 格式一致
        tmp.write_all(b"\n").map_err(io_err)?;
        tmp.flush().map_err(io_err)?;
        tmp.persist(path).map_err(|e| io_err(e.error))?;

        Ok(())
    }
}
