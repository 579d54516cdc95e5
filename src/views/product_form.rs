// ============================================================================
// PRODUCT FORM VIEW - Lectura/escritura de los inputs de #productForm
// ============================================================================

use crate::dom::{input_value, set_input_value};
use crate::models::ProductForm;
use crate::utils::PRODUCT_ID_INPUT_ID;
use crate::views::traits::ProductFormView;

const NAZWA_INPUT_ID: &str = "nazwa";
const CENA_INPUT_ID: &str = "cena";
const KATEGORIA_INPUT_ID: &str = "kategoria";
const ILOSC_INPUT_ID: &str = "ilosc";
const PRODUCENT_INPUT_ID: &str = "producent";
const DATA_DODANIA_INPUT_ID: &str = "data_dodania";

#[derive(Clone, Copy, Debug, Default)]
pub struct DomProductForm;

impl DomProductForm {
    /// Valores crudos actuales (la validación vive en el viewmodel)
    pub fn read(&self) -> ProductForm {
        ProductForm {
            id: input_value(PRODUCT_ID_INPUT_ID),
            nazwa: input_value(NAZWA_INPUT_ID),
            cena: input_value(CENA_INPUT_ID),
            kategoria: input_value(KATEGORIA_INPUT_ID),
            ilosc: input_value(ILOSC_INPUT_ID),
            producent: input_value(PRODUCENT_INPUT_ID),
            data_dodania: input_value(DATA_DODANIA_INPUT_ID),
        }
    }
}

impl ProductFormView for DomProductForm {
    fn fill(&self, values: &ProductForm) {
        set_input_value(PRODUCT_ID_INPUT_ID, &values.id);
        set_input_value(NAZWA_INPUT_ID, &values.nazwa);
        set_input_value(CENA_INPUT_ID, &values.cena);
        set_input_value(KATEGORIA_INPUT_ID, &values.kategoria);
        set_input_value(ILOSC_INPUT_ID, &values.ilosc);
        set_input_value(PRODUCENT_INPUT_ID, &values.producent);
        set_input_value(DATA_DODANIA_INPUT_ID, &values.data_dodania);
    }

    fn reset(&self) {
        self.fill(&ProductForm::default());
    }
}
