// ==========================================
// 价格目录导入系统 - 列定位器
// ==========================================
// 职责: 表头行 + 别名集合 → 列索引
// 规则: 小写后删除 [a-z0-9] 以外的字符再做全等比较,无模糊匹配
// ==========================================

use crate::domain::cell::CellValue;

// ==========================================
// 表头别名表（逻辑字段 → 可接受的表头写法）
// ==========================================

/// 主数据表的表头别名
pub mod master_aliases {
    pub const CODE: &[&str] = &["Codigo", "Cod.Producto"];
    pub const DESCRIPTION: &[&str] = &["Descripcion"];
    pub const TAX_CLASS: &[&str] = &["TES"];
}

/// 价格表的表头别名
pub mod price_aliases {
    pub const CODE: &[&str] = &["Cod.Producto", "Codigo"];
    pub const DESCRIPTION: &[&str] = &["Descripcion"];
    pub const STOCK: &[&str] = &["Grupo", "Stock"];
    pub const NETO: &[&str] = &["Precio Venta", "Neto"];
    pub const FINAL: &[&str] = &["Final", "Precio Final"];
    pub const TAX_CLASS: &[&str] = &["TES"];
    pub const CURRENCY: &[&str] = &["Moneda", "Currency"];
}

/// 标准化表头文本
///
/// 先小写,再删除所有非 `[a-z0-9]` 字符（带重音的字母同样被删除）
pub fn normalize_header(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// 在表头行中查找与任一别名匹配的第一列
///
/// # 返回
/// - Some(index): 按列顺序第一个匹配的列
/// - None: 没有任何列匹配
pub fn resolve(headers: &[CellValue], aliases: &[&str]) -> Option<usize> {
    let targets: Vec<String> = aliases
        .iter()
        .map(|alias| normalize_header(alias))
        .filter(|alias| !alias.is_empty())
        .collect();

    if targets.is_empty() {
        return None;
    }

    headers.iter().position(|cell| {
        let normalized = normalize_header(&cell.as_text());
        !normalized.is_empty() && targets.iter().any(|t| *t == normalized)
    })
}
