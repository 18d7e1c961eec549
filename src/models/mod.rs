pub mod fase;
pub mod fecha;
pub mod importe;
pub mod subvencion;

pub use fase::{FASE_LABELS, Fase, Fases};
pub use fecha::Fecha;
pub use importe::Importe;
pub use subvencion::Subvencion;
