// Utils compartidos

pub mod constants;
pub mod storage;
pub mod html;
pub mod swal_ffi;

pub use constants::*;
pub use storage::{LocalTokenStorage, MemoryTokenStorage, TokenStorage};
pub use html::escape_html;
