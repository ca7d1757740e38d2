// ==========================================
// 价格目录导入系统 - 汇率设置 API
// ==========================================
// 职责: 汇率设置查询、保存
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::settings::ExchangeSettings;
use crate::repository::SettingsRepository;
use tracing::info;

pub struct SettingsApi {
    settings_repo: SettingsRepository,
}

impl SettingsApi {
    pub fn new(settings_repo: SettingsRepository) -> Self {
        Self { settings_repo }
    }

    /// 查询汇率设置（文件缺失时为默认值）
    pub fn get_settings(&self) -> ExchangeSettings {
        self.settings_repo.load()
    }

    /// 保存汇率设置
    ///
    /// # 规则
    /// - 0 或非有限值按 1 保存
    /// - 负数拒绝
    pub fn save_settings(&self, usd_billete: f64, usd_divisa: f64) -> ApiResult<ExchangeSettings> {
        let settings = ExchangeSettings::new(
            normalize_rate("usd_billete", usd_billete)?,
            normalize_rate("usd_divisa", usd_divisa)?,
        );

        self.settings_repo.save(&settings)?;
        info!(
            usd_billete = settings.usd_billete,
            usd_divisa = settings.usd_divisa,
            "汇率设置已保存"
        );
        Ok(settings)
    }
}

fn normalize_rate(field: &str, value: f64) -> ApiResult<f64> {
    if !value.is_finite() || value == 0.0 {
        return Ok(1.0);
    }
    if value < 0.0 {
        return Err(ApiError::InvalidInput(format!(
            "{} 不能为负数: {}",
            field, value
        )));
    }
    Ok(value)
}
