pub mod assemble;
pub mod layout;

pub use assemble::{AssembleOutcome, assemble_records};
pub use layout::{FieldKind, FieldSpec, SheetLayout};
