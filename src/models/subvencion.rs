use super::{Fases, Fecha, Importe};
use chrono::Local;
use serde::Serialize;

/// One normalized subsidy record, assembled from a single sheet column.
///
/// Scalar fields mirror the `subvenciones` table columns one to one
/// (snake_case on both sides). `id == 0` means "not yet persisted";
/// the store assigns rowids on insert.
#[derive(Debug, Clone, Serialize)]
pub struct Subvencion {
    pub id: i64,
    pub nombre: String,

    pub organismo: Option<String>,
    pub convocatoria: Option<String>,
    pub programa: Option<String>,
    pub proyecto: Option<String>,
    pub codigo: Option<String>,
    pub expediente: Option<String>,
    pub modalidad: Option<String>,
    pub anyo_otorgamiento: Option<String>,
    pub estado: Option<String>,
    pub responsable: Option<String>,

    pub fecha_presentacion: Option<Fecha>,
    pub fecha_resolucion: Option<Fecha>,
    pub fecha_aceptacion: Option<Fecha>,
    pub fecha_inicio: Option<Fecha>,
    pub fecha_fin: Option<Fecha>,
    pub fecha_justificacion: Option<Fecha>,

    pub importe_solicitado: Importe,
    pub importe_otorgado: Importe,
    pub importe_presupuesto: Importe,

    pub primer_abono: Importe,
    pub fecha_primer_abono: Option<Fecha>,
    pub segundo_abono: Importe,
    pub fecha_segundo_abono: Option<Fecha>,

    pub gastos_justificados: Importe,
    pub cuenta_abono: Option<String>,

    pub fases: Fases,

    pub observaciones: Option<String>,
    pub notas: Option<String>,

    pub created_at: String,
}

impl Subvencion {
    /// Empty record: every field at its default canonical value.
    pub fn new(nombre: impl Into<String>) -> Self {
        Subvencion {
            id: 0,
            nombre: nombre.into(),
            organismo: None,
            convocatoria: None,
            programa: None,
            proyecto: None,
            codigo: None,
            expediente: None,
            modalidad: None,
            anyo_otorgamiento: None,
            estado: None,
            responsable: None,
            fecha_presentacion: None,
            fecha_resolucion: None,
            fecha_aceptacion: None,
            fecha_inicio: None,
            fecha_fin: None,
            fecha_justificacion: None,
            importe_solicitado: Importe::ZERO,
            importe_otorgado: Importe::ZERO,
            importe_presupuesto: Importe::ZERO,
            primer_abono: Importe::ZERO,
            fecha_primer_abono: None,
            segundo_abono: Importe::ZERO,
            fecha_segundo_abono: None,
            gastos_justificados: Importe::ZERO,
            cuenta_abono: None,
            fases: Fases::default(),
            observaciones: None,
            notas: None,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Amount already paid out (first + second installment).
    pub fn abonado(&self) -> Importe {
        self.primer_abono + self.segundo_abono
    }

    /// Outstanding balance: granted minus paid.
    pub fn pendiente(&self) -> Importe {
        self.importe_otorgado - self.abonado()
    }
}
