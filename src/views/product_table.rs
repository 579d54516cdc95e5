// ============================================================================
// PRODUCT TABLE VIEW - Pinta un ProductTable en #produktyList
// ============================================================================
// Re-render completo: se vacía el tbody y se reconstruyen todas las filas.
// Celdas con textContent; los botones sólo llevan data-action y data-id.
// Un único listener delegado en el tbody (bind) resuelve la fila pulsada.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{clear_children, on_click, require_element, ElementBuilder};
use crate::models::{ProductForm, ProductRow, ProductTable, TableRow};
use crate::utils::{BUTTON_DELETE, BUTTON_EDIT, PRODUCT_LIST_BODY_ID};
use crate::views::traits::ListView;

/// Acción pedida desde una fila
#[derive(Clone, Debug, PartialEq)]
pub enum RowAction {
    Edit(ProductForm),
    Delete(i64),
}

type RowHandler = Rc<dyn Fn(RowAction)>;

const ACTION_ATTR: &str = "data-action";
const ID_ATTR: &str = "data-id";
const ACTION_EDIT: &str = "edit";
const ACTION_DELETE: &str = "delete";

#[derive(Clone, Default)]
pub struct ProductTableView {
    /// Se asigna después de construir los viewmodels (dependencia circular)
    handler: Rc<RefCell<Option<RowHandler>>>,
    /// Filas del último render, para resolver los clicks delegados
    rows: Rc<RefCell<Vec<ProductRow>>>,
}

impl ProductTableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_row_handler<F>(&self, handler: F)
    where
        F: Fn(RowAction) + 'static,
    {
        *self.handler.borrow_mut() = Some(Rc::new(handler));
    }

    /// Listener delegado sobre #produktyList (una sola vez al arrancar)
    pub fn bind(&self) -> Result<(), JsValue> {
        let body = require_element(PRODUCT_LIST_BODY_ID)?;
        let handler = self.handler.clone();
        let rows = self.rows.clone();
        on_click(&body, move |event| {
            let Some(button) = clicked_button(&event) else {
                return;
            };
            let action = button.get_attribute(ACTION_ATTR).unwrap_or_default();
            let id = button.get_attribute(ID_ATTR).unwrap_or_default();
            let resolved = resolve_row_action(&action, &id, &rows.borrow());
            match resolved {
                Some(action) => dispatch(&handler, action),
                None => log::warn!("⚠️ [TABLA] Click sin fila: {}={} id={}", ACTION_ATTR, action, id),
            }
        })
    }

    fn render_rows(&self, table: &ProductTable) -> Result<(), JsValue> {
        let body = require_element(PRODUCT_LIST_BODY_ID)?;
        clear_children(&body);
        *self.rows.borrow_mut() = table.product_rows().cloned().collect();

        for row in &table.rows {
            let tr = match row {
                TableRow::Placeholder { text, colspan } => {
                    let cell = ElementBuilder::new("td")?
                        .attr("colspan", &colspan.to_string())?
                        .text(text)
                        .build();
                    ElementBuilder::new("tr")?.child(cell)?.build()
                }
                TableRow::Product(product) => product_row(product)?,
            };
            body.append_child(&tr)?;
        }
        Ok(())
    }
}

fn product_row(row: &ProductRow) -> Result<Element, JsValue> {
    let mut tr = ElementBuilder::new("tr")?;
    for value in &row.cells {
        tr = tr.child(ElementBuilder::new("td")?.text(value).build())?;
    }

    let id = row.id.to_string();
    let edit = ElementBuilder::new("button")?
        .attr("type", "button")?
        .attr(ACTION_ATTR, ACTION_EDIT)?
        .attr(ID_ATTR, &id)?
        .class("btn-edit")
        .text(BUTTON_EDIT)
        .build();
    let delete = ElementBuilder::new("button")?
        .attr("type", "button")?
        .attr(ACTION_ATTR, ACTION_DELETE)?
        .attr(ID_ATTR, &id)?
        .class("btn-delete")
        .text(BUTTON_DELETE)
        .build();

    let actions = ElementBuilder::new("td")?.child(edit)?.child(delete)?.build();
    Ok(tr.child(actions)?.build())
}

/// Botón de acción que contiene el target del click (texto, icono...)
fn clicked_button(event: &MouseEvent) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest("button[data-action]").ok().flatten()
}

/// Traduce los data-* de un botón a la acción sobre la fila renderizada
pub fn resolve_row_action(action: &str, id: &str, rows: &[ProductRow]) -> Option<RowAction> {
    let id: i64 = id.trim().parse().ok()?;
    let row = rows.iter().find(|row| row.id == id)?;
    match action {
        ACTION_EDIT => Some(RowAction::Edit(row.edit_values.clone())),
        ACTION_DELETE => Some(RowAction::Delete(row.id)),
        _ => None,
    }
}

fn dispatch(handler: &Rc<RefCell<Option<RowHandler>>>, action: RowAction) {
    // Clonar antes de llamar: el handler puede provocar un re-render
    let current = handler.borrow().clone();
    match current {
        Some(handler) => handler(action),
        None => log::warn!("⚠️ [TABLA] Acción de fila sin handler: {:?}", action),
    }
}

impl ListView for ProductTableView {
    fn render(&self, table: &ProductTable) {
        if let Err(e) = self.render_rows(table) {
            log::error!("❌ [TABLA] Error renderizando productos: {:?}", e);
        }
    }
}
