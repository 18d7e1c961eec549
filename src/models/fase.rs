use serde::{Serialize, Serializer};

/// Workflow phase marker as kept in the source sheet: an "X" means the
/// milestone was reached, free text means reached with an annotation,
/// anything blank or a dash means not reached / not part of the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Fase {
    #[default]
    Inactiva,
    Activa,
    ActivaConNota(String),
}

impl Fase {
    pub fn is_activa(&self) -> bool {
        !matches!(self, Fase::Inactiva)
    }

    /// Raw marker used in the sheet and in the store column:
    /// "" / "X" / the annotation text.
    pub fn marcador(&self) -> &str {
        match self {
            Fase::Inactiva => "",
            Fase::Activa => "X",
            Fase::ActivaConNota(t) => t,
        }
    }
}

impl Serialize for Fase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.marcador())
    }
}

/// Labels for the 8 ordered milestones, in sheet row order.
pub const FASE_LABELS: [&str; 8] = [
    "Solicitud",
    "Resolución",
    "Aceptación",
    "Primer abono",
    "Justificación parcial",
    "Segundo abono",
    "Justificación final",
    "Cierre",
];

/// The 8 ordered workflow milestones of one subsidy project.
/// Default is all-inactive: absence means "not part of this project's
/// workflow", not "unknown".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Fases(pub [Fase; 8]);

impl Fases {
    pub fn is_activa(&self, idx: usize) -> bool {
        self.0.get(idx).map(Fase::is_activa).unwrap_or(false)
    }

    pub fn ninguna_activa(&self) -> bool {
        self.0.iter().all(|f| !f.is_activa())
    }

    pub fn activas(&self) -> usize {
        self.0.iter().filter(|f| f.is_activa()).count()
    }
}
