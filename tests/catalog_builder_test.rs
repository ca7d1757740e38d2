// ==========================================
// CatalogBuilder 集成测试
// ==========================================
// 测试目标: 主数据回退、汇率记忆、按表顺序覆盖、跳过规则
// ==========================================

mod test_helpers;

use price_catalog::domain::{ExchangeSettings, WarningKind};
use price_catalog::importer::price_normalizer::round_to;
use price_catalog::importer::{CatalogBuilder, InMemoryWorkbook};
use price_catalog::logging;
use test_helpers::{layout, row, sample_workbook};

fn build(
    workbook: &mut InMemoryWorkbook,
    sheets: &[&str],
    settings: ExchangeSettings,
) -> price_catalog::ImportReport {
    CatalogBuilder::new(layout(sheets))
        .build(workbook, &settings)
        .expect("build should succeed")
}

#[test]
fn test_header_aliases_are_punctuation_insensitive() {
    logging::init_test();

    let mut workbook = InMemoryWorkbook::new().with_sheet(
        "001",
        vec![
            row(&["COD. PRODUCTO", "descripcion", "precio-venta"]),
            row(&["A1", "Arandela", "$1.234,56"]),
        ],
    );

    let report = build(&mut workbook, &["001"], ExchangeSettings::default());
    assert_eq!(report.products.len(), 1);
    assert_eq!(report.products[0].price_neto, 1234.56);
    assert_eq!(report.sheets[0].columns.code, Some(0));
    assert_eq!(report.sheets[0].columns.neto, Some(2));
}

#[test]
fn test_final_price_back_solves_net() {
    let mut workbook = InMemoryWorkbook::new().with_sheet(
        "001",
        vec![
            row(&["Cod.Producto", "Descripcion", "Final", "TES"]),
            row(&["F1", "Solo final", "1210", "503"]),
        ],
    );

    let report = build(&mut workbook, &["001"], ExchangeSettings::default());
    let product = &report.products[0];

    let expected_net = 1210.0 / (1.04 * 1.21);
    assert_eq!(product.price_neto, round_to(expected_net, 4));
    assert_eq!(product.price, round_to(expected_net * 1.21, 2));
    assert_eq!(product.tes, "503");
}

#[test]
fn test_neto_takes_priority_over_final() {
    let mut workbook = InMemoryWorkbook::new().with_sheet(
        "001",
        vec![
            row(&["Cod.Producto", "Descripcion", "Precio Venta", "Final"]),
            row(&["N1", "Ambos", "100", "9999"]),
        ],
    );

    let report = build(&mut workbook, &["001"], ExchangeSettings::default());
    assert_eq!(report.products[0].price_neto, 100.0);
    assert_eq!(report.products[0].price, 121.0);
}

#[test]
fn test_tax_class_falls_back_to_master() {
    let mut workbook = InMemoryWorkbook::new()
        .with_sheet(
            "SB1",
            vec![row(&["Codigo", "Descripcion", "TES"]), row(&["M1", "Maestro", "501"])],
        )
        .with_sheet(
            "001",
            vec![
                row(&["Cod.Producto", "Descripcion", "Precio Venta", "TES"]),
                row(&["M1", "", "100", ""]),
                row(&["M2", "Sin maestro", "100", ""]),
            ],
        );

    let report = build(&mut workbook, &["001"], ExchangeSettings::default());
    assert_eq!(report.master_records, 1);

    let m1 = report.products.iter().find(|p| p.code == "M1").unwrap();
    assert_eq!(m1.price, 110.5);
    assert_eq!(m1.tes, "501");
    assert_eq!(m1.description, "Maestro");

    let m2 = report.products.iter().find(|p| p.code == "M2").unwrap();
    assert_eq!(m2.price, 121.0);
    assert_eq!(m2.tes, "503");
}

#[test]
fn test_row_tax_class_overrides_master() {
    let mut workbook = InMemoryWorkbook::new()
        .with_sheet(
            "SB1",
            vec![row(&["Codigo", "Descripcion", "TES"]), row(&["M1", "Maestro", "501"])],
        )
        .with_sheet(
            "001",
            vec![
                row(&["Cod.Producto", "Precio Venta", "TES"]),
                row(&["M1", "100", "503"]),
            ],
        );

    let report = build(&mut workbook, &["001"], ExchangeSettings::default());
    assert_eq!(report.products[0].price, 121.0);
    assert_eq!(report.products[0].tes, "503");
}

#[test]
fn test_currency_remembered_across_sheets() {
    let mut workbook = InMemoryWorkbook::new()
        .with_sheet(
            "A",
            vec![
                row(&["Cod.Producto", "Descripcion", "Precio Venta", "Moneda"]),
                row(&["X1", "Importado", "10", "USD"]),
            ],
        )
        .with_sheet(
            "B",
            vec![
                row(&["Cod.Producto", "Descripcion", "Precio Venta"]),
                row(&["X1", "Importado", "20"]),
                row(&["L1", "Local", "20"]),
            ],
        );

    let settings = ExchangeSettings::new(1000.0, 900.0);
    let report = build(&mut workbook, &["A", "B"], settings);

    let x1 = report.products.iter().find(|p| p.code == "X1").unwrap();
    assert_eq!(x1.price_neto, 20_000.0);
    assert_eq!(x1.price, 24_200.0);
    assert_eq!(x1.currency.as_deref(), Some("USD"));

    let l1 = report.products.iter().find(|p| p.code == "L1").unwrap();
    assert_eq!(l1.price_neto, 20.0);
    assert_eq!(l1.currency, None);
}

#[test]
fn test_divisa_tier_rate() {
    let mut workbook = InMemoryWorkbook::new().with_sheet(
        "001",
        vec![
            row(&["Cod.Producto", "Descripcion", "Precio Venta", "Moneda"]),
            row(&["D1", "Divisa", "2", "divisa"]),
            row(&["D2", "Numerica", "2", "3"]),
        ],
    );

    let report = build(&mut workbook, &["001"], ExchangeSettings::new(1000.0, 900.0));
    assert_eq!(report.products[0].price_neto, 1800.0);
    assert_eq!(report.products[1].price_neto, 1800.0);
}

#[test]
fn test_later_sheet_wins_and_order_is_first_seen() {
    let mut workbook = InMemoryWorkbook::new()
        .with_sheet(
            "001",
            vec![
                row(&["Cod.Producto", "Descripcion", "Precio Venta"]),
                row(&["P1", "Primero", "100"]),
                row(&["P2", "Segundo", "50"]),
            ],
        )
        .with_sheet(
            "ListaCorte",
            vec![
                row(&["Cod.Producto", "Descripcion", "Precio Venta"]),
                row(&["P3", "Tercero", "10"]),
                row(&["P1", "Primero bis", "200"]),
            ],
        );

    let report = build(&mut workbook, &["001", "ListaCorte"], ExchangeSettings::default());
    let codes: Vec<&str> = report.products.iter().map(|p| p.code.as_str()).collect();
    assert_eq!(codes, vec!["P1", "P2", "P3"]);

    let p1 = &report.products[0];
    assert_eq!(p1.price_neto, 200.0);
    assert_eq!(p1.description, "Primero bis");

    // 顺序反过来则先处理的表被覆盖
    let report = build(&mut workbook, &["ListaCorte", "001"], ExchangeSettings::default());
    let p1 = report.products.iter().find(|p| p.code == "P1").unwrap();
    assert_eq!(p1.price_neto, 100.0);
}

#[test]
fn test_invalid_rows_never_emitted() {
    let mut workbook = sample_workbook();
    let report = build(&mut workbook, &["001", "ListaCorte"], ExchangeSettings::default());

    let codes: Vec<&str> = report.products.iter().map(|p| p.code.as_str()).collect();
    assert!(!codes.contains(&"undefined"));
    assert!(!codes.contains(&""));
    assert!(!codes.contains(&"Z9"));

    let sheet_001 = &report.sheets[0];
    assert_eq!(sheet_001.data_rows, 5);
    assert_eq!(sheet_001.skipped_code, 2);
    assert_eq!(sheet_001.skipped_price, 1);
    assert_eq!(sheet_001.emitted, 2);
}

#[test]
fn test_repeated_header_row_is_skipped() {
    let mut workbook = InMemoryWorkbook::new().with_sheet(
        "001",
        vec![
            row(&["Codigo", "Descripcion", "Precio Venta"]),
            row(&["A1", "Uno", "10"]),
            row(&["Codigo", "Descripcion", "Precio Venta"]),
            row(&["A2", "Dos", "20"]),
        ],
    );

    let report = build(&mut workbook, &["001"], ExchangeSettings::default());
    assert_eq!(report.products.len(), 2);
    assert_eq!(report.sheets[0].skipped_code, 1);
}

#[test]
fn test_sample_workbook_end_to_end() {
    let mut workbook = sample_workbook();
    let settings = ExchangeSettings::new(1000.0, 950.0);
    let report = build(&mut workbook, &["001", "ListaCorte"], settings);

    assert!(report.warnings.is_empty());
    assert_eq!(report.master_records, 3);
    assert_eq!(report.products.len(), 3);

    // A1: 本币, 主数据描述与税类
    let a1 = &report.products[0];
    assert_eq!(a1.code, "A1");
    assert_eq!(a1.description, "Tornillo 6mm");
    assert_eq!(a1.stock, "FERR");
    assert_eq!(a1.price_neto, 100.0);
    assert_eq!(a1.price, 110.5);
    assert_eq!(a1.tes, "501");

    // X1: 在 ListaCorte 被覆盖,币种沿用 001 的 USD
    let x1 = &report.products[1];
    assert_eq!(x1.code, "X1");
    let expected_net = 1258.4 / (1.04 * 1.21) * 1000.0;
    assert_eq!(x1.price_neto, round_to(expected_net, 4));
    assert_eq!(x1.price, round_to(expected_net * 1.21, 2));
    assert_eq!(x1.stock, "CORTE");
    assert_eq!(x1.currency.as_deref(), Some("USD"));

    // A2: 只在 ListaCorte, 文本价格
    let a2 = &report.products[2];
    assert_eq!(a2.code, "A2");
    let expected_net = 1258.4 / (1.04 * 1.21);
    assert_eq!(a2.price_neto, round_to(expected_net, 4));
    assert_eq!(a2.currency, None);
}

#[test]
fn test_missing_sheets_are_warnings() {
    let mut workbook = sample_workbook();
    let report = build(&mut workbook, &["001", "NoExiste"], ExchangeSettings::default());

    assert_eq!(report.sheets.len(), 1);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].kind, WarningKind::MissingSheet);
    assert_eq!(report.warnings[0].sheet, "NoExiste");
    assert!(!report.products.is_empty());
}
