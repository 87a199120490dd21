//! Inventory dialog translations (en, zh-CN, ja, es).
//!
//! Keys are paths: `ui/inventory/...` for labels and captions,
//! `error/inventory/...` for inline messages.

use std::collections::HashMap;

use crate::error::FieldParseError;
use crate::model::Field;
use crate::validate::FieldError;

const EN: usize = 0;
const ZH: usize = 1;
const JA: usize = 2;
const ES: usize = 3;

fn locale_index(locale: &str) -> usize {
    match locale {
        "zh-CN" | "zh" => ZH,
        "ja" => JA,
        "es" => ES,
        _ => EN,
    }
}

/// Label key for a field.
pub fn field_key(field: Field) -> &'static str {
    match field {
        Field::Name => "ui/inventory/field/name",
        Field::ProductType => "ui/inventory/field/product_type",
        Field::Description => "ui/inventory/field/description",
        Field::AveragePrice => "ui/inventory/field/average_price",
        Field::Amount => "ui/inventory/field/amount",
        Field::UnitOfMeasurement => "ui/inventory/field/unit_of_measurement",
        Field::BestBeforeDate => "ui/inventory/field/best_before_date",
        Field::NeverExpires => "ui/inventory/field/never_expires",
    }
}

pub struct InventoryStrings {
    data: HashMap<&'static str, [&'static str; 4]>, // [en, zh-CN, ja, es]
    locale: String,
}

impl InventoryStrings {
    pub fn new(locale: &str) -> Self {
        let mut m = HashMap::new();

        // Dialog
        m.insert("ui/inventory/heading", ["{title} Inventory", "{title}库存", "在庫を{title}", "{title} inventario"]);
        m.insert("ui/inventory/action/cancel", ["Cancel", "取消", "キャンセル", "Cancelar"]);
        m.insert("ui/inventory/action/save", ["Save", "保存", "保存", "Guardar"]);

        // Fields
        m.insert("ui/inventory/field/name", ["Name", "名称", "名前", "Nombre"]);
        m.insert("ui/inventory/field/product_type", ["Product Type", "产品类型", "製品タイプ", "Tipo de producto"]);
        m.insert("ui/inventory/field/description", ["Description", "描述", "説明", "Descripción"]);
        m.insert("ui/inventory/field/average_price", ["Average Price", "平均价格", "平均価格", "Precio medio"]);
        m.insert("ui/inventory/field/amount", ["Amount", "数量", "数量", "Cantidad"]);
        m.insert("ui/inventory/field/unit_of_measurement", ["Unit of Measurement", "计量单位", "単位", "Unidad de medida"]);
        m.insert("ui/inventory/field/best_before_date", ["Best Before Date", "最佳食用日期", "賞味期限", "Consumir preferentemente antes de"]);
        m.insert("ui/inventory/field/never_expires", ["Never Expires", "永不过期", "期限なし", "No caduca"]);

        // Validation
        m.insert("error/inventory/name_required", ["An inventory name is required.", "库存名称为必填项。", "在庫名は必須です。", "El nombre del inventario es obligatorio."]);
        m.insert("error/inventory/product_type_required", ["A product type must be selected.", "必须选择产品类型。", "製品タイプを選択してください。", "Debe seleccionar un tipo de producto."]);
        m.insert("error/inventory/average_price_negative", ["Average price cannot be negative.", "平均价格不能为负数。", "平均価格は負の値にできません。", "El precio medio no puede ser negativo."]);
        m.insert("error/inventory/amount_negative", ["Amount cannot be negative.", "数量不能为负数。", "数量は負の値にできません。", "La cantidad no puede ser negativa."]);
        m.insert("error/inventory/unit_required", ["A unit of measurement must be selected.", "必须选择计量单位。", "単位を選択してください。", "Debe seleccionar una unidad de medida."]);

        // Input parsing
        m.insert("error/inventory/invalid_number", ["{field} must be a number.", "{field}必须是数字。", "{field}は数値で入力してください。", "{field} debe ser un número."]);
        m.insert("error/inventory/invalid_date", ["{field} must be a date (YYYY-MM-DD).", "{field}必须是日期（YYYY-MM-DD）。", "{field}は日付（YYYY-MM-DD）で入力してください。", "{field} debe ser una fecha (AAAA-MM-DD)."]);
        m.insert("error/inventory/invalid_flag", ["{field} must be checked or unchecked.", "{field}只能勾选或取消勾选。", "{field}はオンかオフで指定してください。", "{field} debe estar marcado o desmarcado."]);
        m.insert("error/inventory/unknown_field", ["Unknown field.", "未知字段。", "不明なフィールドです。", "Campo desconocido."]);

        Self {
            data: m,
            locale: locale.to_string(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: &str) {
        self.locale = locale.to_string();
    }

    /// Translation for `key` in the current locale; the key itself if unknown.
    pub fn get(&self, key: &str) -> String {
        match self.data.get(key) {
            Some(texts) => texts[locale_index(&self.locale)].to_string(),
            None => key.to_string(),
        }
    }

    /// Dialog heading for a title prefix such as "Create" or "Edit".
    pub fn heading(&self, title: &str) -> String {
        self.get("ui/inventory/heading").replace("{title}", title)
    }

    pub fn field_label(&self, field: Field) -> String {
        self.get(field_key(field))
    }

    pub fn field_error(&self, err: FieldError) -> String {
        self.get(err.i18n_key())
    }

    pub fn parse_error(&self, err: &FieldParseError) -> String {
        let text = self.get(err.i18n_key());
        match err {
            FieldParseError::InvalidNumber { field, .. }
            | FieldParseError::InvalidDate { field, .. }
            | FieldParseError::InvalidFlag { field, .. } => {
                text.replace("{field}", &self.field_label(*field))
            }
            FieldParseError::UnknownField(_) => text,
        }
    }
}

impl Default for InventoryStrings {
    fn default() -> Self {
        Self::new("en")
    }
}
