pub mod memento;
pub mod modification;

pub use memento::{Memento, DEFAULT_PRIORITY};
pub use modification::{Modification, ModifyField};
