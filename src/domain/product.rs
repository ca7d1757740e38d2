// ==========================================
// 价格目录导入系统 - 商品领域模型
// ==========================================
// 用途: 导入层写入,目录文件只读
// 对齐: products.json 字段名（前台直接消费）
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ProductRecord - 商品价格记录（输出单元）
// ==========================================
// 红线: 价格非负; price_neto 保留 4 位, price 保留 2 位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,                  // 与 code 相同（前台以 id 作为行键）
    pub code: String,                // 商品编码（主键）
    pub description: String,         // 描述（主数据优先）
    pub stock: String,               // 库存/分组标签
    pub price_neto: f64,             // 不含税价（已按汇率换算）
    pub price: f64,                  // 含税价
    pub tes: String,                 // 税类标记（501/503）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,    // 实际使用的币种标记
}

// ==========================================
// MasterRecord - 主数据记录
// ==========================================
// 来源: 主数据工作表（SB1）
// 约束: 每个 code 最多一条,同表内先出现者有效
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MasterRecord {
    pub code: String,
    pub description: Option<String>,
    pub tax_class: Option<String>,
}
