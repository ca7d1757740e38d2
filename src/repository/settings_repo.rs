// ==========================================
// 价格目录导入系统 - 汇率设置仓储
// ==========================================
// 存储: settings.json {"usd_billete": .., "usd_divisa": ..}
// 约束: 读取失败一律回退默认值,不阻断导入
// ==========================================

use crate::domain::settings::ExchangeSettings;
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::path::{Path, PathBuf};
use tracing::warn;

pub struct SettingsRepository {
    path: PathBuf,
}

impl SettingsRepository {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取汇率设置
    ///
    /// 文件不存在: 静默返回默认值; 无法读取/解析: 记录警告后返回默认值
    pub fn load(&self) -> ExchangeSettings {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return ExchangeSettings::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "设置文件读取失败,使用默认汇率");
                return ExchangeSettings::default();
            }
        };

        match serde_json::from_str::<ExchangeSettings>(&raw) {
            Ok(settings) => ExchangeSettings::new(
                self.checked_rate("usd_billete", settings.usd_billete),
                self.checked_rate("usd_divisa", settings.usd_divisa),
            ),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "设置文件格式错误,使用默认汇率");
                ExchangeSettings::default()
            }
        }
    }

    /// 0 或非有限值按 1 处理; 负数回退默认值并告警
    fn checked_rate(&self, field: &str, value: f64) -> f64 {
        if !value.is_finite() || value == 0.0 {
            return 1.0;
        }
        if value < 0.0 {
            warn!(
                path = %self.path.display(),
                field = %field,
                value = value,
                "汇率为负数,使用默认汇率"
            );
            return 1.0;
        }
        value
    }

    /// 保存汇率设置（格式化 JSON）
    pub fn save(&self, settings: &ExchangeSettings) -> RepositoryResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RepositoryError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, json).map_err(|e| RepositoryError::io(&self.path, e))
    }
}
