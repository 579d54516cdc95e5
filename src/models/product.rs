use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Producto tal como lo devuelve el backend (copia transitoria, nunca cacheada)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub nazwa: String,
    pub cena: f64,
    pub kategoria: String,
    pub ilosc: i64,
    #[serde(default)]
    pub producent: Option<String>,
    /// String crudo: un formato inesperado no debe romper el decode de la lista
    #[serde(default)]
    pub data_dodania: Option<String>,
}

/// Body de POST/PUT (producto sin id), ya validado
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductPayload {
    pub nazwa: String,
    pub cena: f64,
    pub kategoria: String,
    pub ilosc: i64,
    pub producent: Option<String>,
    pub data_dodania: Option<NaiveDate>,
}

/// Valores crudos del formulario de producto. `id` vacío = crear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub id: String,
    pub nazwa: String,
    pub cena: String,
    pub kategoria: String,
    pub ilosc: String,
    pub producent: String,
    pub data_dodania: String,
}

impl ProductForm {
    /// Valores actuales de una fila, para precargar el formulario al editar
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            nazwa: product.nazwa.clone(),
            cena: product.cena.to_string(),
            kategoria: product.kategoria.clone(),
            ilosc: product.ilosc.to_string(),
            producent: product.producent.clone().unwrap_or_default(),
            data_dodania: product.data_dodania.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        !self.id.trim().is_empty()
    }
}
