// ============================================================================
// IN-FLIGHT - Un flag "request en curso" por tipo de acción
// ============================================================================
// Evita envíos duplicados por clicks repetidos. El ticket libera el flag al
// hacer drop, también si la acción termina con error.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Login,
    Register,
    SaveProduct,
    DeleteProduct,
}

#[derive(Clone, Default)]
pub struct InFlight {
    active: Rc<RefCell<HashSet<Action>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marca la acción como en curso. `None` si ya lo estaba.
    pub fn try_begin(&self, action: Action) -> Option<InFlightTicket> {
        if !self.active.borrow_mut().insert(action) {
            log::debug!("⏳ [IN-FLIGHT] {:?} ya en curso, ignorando", action);
            return None;
        }
        Some(InFlightTicket {
            action,
            active: self.active.clone(),
        })
    }

    pub fn is_active(&self, action: Action) -> bool {
        self.active.borrow().contains(&action)
    }
}

pub struct InFlightTicket {
    action: Action,
    active: Rc<RefCell<HashSet<Action>>>,
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        self.active.borrow_mut().remove(&self.action);
    }
}
