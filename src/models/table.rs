// Modelo de la tabla de productos: lo que se pinta, sin DOM.
// Se reconstruye entero en cada refresh (sin diff incremental).

use crate::models::product::{Product, ProductForm};
use crate::utils::{EMPTY_CELL, MSG_NO_PRODUCTS, PRODUCT_TABLE_COLUMNS};

#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    /// id, nazwa, cena, kategoria, ilosc, producent, data_dodania
    pub cells: Vec<String>,
    /// Valores con los que "Edytuj" precarga el formulario
    pub edit_values: ProductForm,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableRow {
    Placeholder { text: String, colspan: u32 },
    Product(ProductRow),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductTable {
    pub rows: Vec<TableRow>,
}

impl ProductTable {
    pub fn from_products(products: &[Product]) -> Self {
        if products.is_empty() {
            return Self {
                rows: vec![TableRow::Placeholder {
                    text: MSG_NO_PRODUCTS.to_string(),
                    colspan: PRODUCT_TABLE_COLUMNS,
                }],
            };
        }

        let rows = products
            .iter()
            .map(|p| {
                TableRow::Product(ProductRow {
                    id: p.id,
                    cells: vec![
                        p.id.to_string(),
                        p.nazwa.clone(),
                        p.cena.to_string(),
                        p.kategoria.clone(),
                        p.ilosc.to_string(),
                        or_dash(p.producent.as_deref()),
                        or_dash(p.data_dodania.as_deref()),
                    ],
                    edit_values: ProductForm::from_product(p),
                })
            })
            .collect();

        Self { rows }
    }

    pub fn product_rows(&self) -> impl Iterator<Item = &ProductRow> {
        self.rows.iter().filter_map(|row| match row {
            TableRow::Product(p) => Some(p),
            TableRow::Placeholder { .. } => None,
        })
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.rows.as_slice(), [TableRow::Placeholder { .. }])
    }
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => EMPTY_CELL.to_string(),
    }
}
