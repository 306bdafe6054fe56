// ============================================================================
// LocSync - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置验证和默认值
//   - ✅ 配置文件读写操作
//   - ❌ 不应包含配置应用逻辑
//   - ❌ 不应包含业务规则验证
//   - ❌ 不应包含 CLI 参数处理
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// LocSync 配置文件结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 语言包目录配置
    #[serde(default)]
    pub locales: LocalesConfig,
    /// 同步任务配置
    #[serde(default)]
    pub reconcile: ReconcileConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 语言包目录配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalesConfig {
    /// 语言包根目录（相对于项目根目录）
    #[serde(default = "LocalesConfig::default_root")]
    pub root: String,
    /// 基准语言
    #[serde(default = "LocalesConfig::default_base")]
    pub base: String,
    /// 目标语言
    #[serde(default = "LocalesConfig::default_target")]
    pub target: String,
}

impl LocalesConfig {
    fn default_root() -> String {
        "public/locales".to_string()
    }

    fn default_base() -> String {
        "en".to_string()
    }

    fn default_target() -> String {
        "ar".to_string()
    }
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            base: Self::default_base(),
            target: Self::default_target(),
        }
    }
}

/// 同步任务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// 计算器目录清单文件（外部扫描器产物）
    #[serde(default = "ReconcileConfig::default_catalog")]
    pub catalog: String,
    /// 人工翻译覆盖表文件（可选）
    #[serde(default)]
    pub overrides: Option<String>,
}

impl ReconcileConfig {
    fn default_catalog() -> String {
        "translation-catalog.json".to_string()
    }
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            catalog: Self::default_catalog(),
            overrides: None,
        }
    }
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "OutputConfig::default_colored")]
    pub colored: bool,
}

impl OutputConfig {
    fn default_colored() -> bool {
        true
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            colored: true,
        }
    }
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "I18nConfig::default_language")]
    pub language: String,
}

impl I18nConfig {
    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Self::default_language(),
        }
    }
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub project_root: Option<String>,
    pub language: Option<String>,
}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize() -> anyhow::Result<()> {
        let config = Self::load_config()?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件
    fn load_config() -> anyhow::Result<Self> {
        let config_path = PathBuf::from("locsync.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config = toml::from_str(&content)?;
            Ok(config)
        } else {
            // 如果配置文件不存在，使用默认配置
            Ok(Self::default())
        }
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let mut config = Self::write_global()?;

        if let Some(verbose) = args.verbose {
            config.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            config.output.colored = colored;
        }
        if let Some(project_root) = args.project_root {
            PROJECT_ROOT
                .set(PathBuf::from(project_root))
                .map_err(|_| anyhow::anyhow!("Project root already set"))?;
        }
        if let Some(language) = args.language {
            config.i18n.language = language;
        }

        Ok(())
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        let default_config = Self::default();
        default_config.save_to_file(config_path)?;
        Ok(())
    }

    /// 获取项目根目录（带默认值）
    pub fn get_project_root() -> PathBuf {
        if let Some(root) = PROJECT_ROOT.get() {
            return root.clone();
        }
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    /// 获取语言包根目录
    pub fn get_locales_root() -> PathBuf {
        let root = Self::read_global()
            .map(|c| c.locales.root.clone())
            .unwrap_or_else(|_| LocalesConfig::default_root());
        Self::get_project_root().join(root)
    }

    /// 获取基准语言
    pub fn get_base_locale() -> String {
        Self::read_global()
            .map(|c| c.locales.base.clone())
            .unwrap_or_else(|_| LocalesConfig::default_base())
    }

    /// 获取目标语言
    pub fn get_target_locale() -> String {
        Self::read_global()
            .map(|c| c.locales.target.clone())
            .unwrap_or_else(|_| LocalesConfig::default_target())
    }

    /// 获取目录清单文件路径
    pub fn get_catalog_path() -> PathBuf {
        let catalog = Self::read_global()
            .map(|c| c.reconcile.catalog.clone())
            .unwrap_or_else(|_| ReconcileConfig::default_catalog());
        Self::get_project_root().join(catalog)
    }

    /// 获取人工覆盖表文件路径（未配置时为 None）
    pub fn get_overrides_path() -> Option<PathBuf> {
        let overrides = Self::read_global().ok().and_then(|c| c.reconcile.overrides.clone());
        overrides.map(|p| Self::get_project_root().join(p))
    }

    /// 获取是否详细输出
    pub fn get_verbose() -> bool {
        Self::read_global().map(|c| c.output.verbose).unwrap_or(false)
    }

    /// 获取是否彩色输出（配置未初始化时默认彩色）
    pub fn get_colored() -> bool {
        Self::read_global().map(|c| c.output.colored).unwrap_or(true)
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Ok(Self::read_global()?.i18n.language.clone())
    }

    /// 读取全局配置
    fn read_global() -> anyhow::Result<std::sync::RwLockReadGuard<'static, Config>> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))
    }

    /// 写入全局配置
    fn write_global() -> anyhow::Result<std::sync::RwLockWriteGuard<'static, Config>> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))
    }
}

/// 项目根目录覆盖（-C 参数）
static PROJECT_ROOT: std::sync::OnceLock<PathBuf> = std::sync::OnceLock::new();
