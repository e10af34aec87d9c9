//! Frontend Models
//!
//! Backend record shapes and the UI-side shapes they map into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Movement type (closed set, wire name == display name)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MovementType {
    #[default]
    Entrada,
    Salida,
    Carga,
    Descarga,
    Transferencia,
    #[serde(rename = "Inspección")]
    Inspeccion,
}

impl MovementType {
    /// All types in display order
    pub const ALL: [MovementType; 6] = [
        MovementType::Entrada,
        MovementType::Salida,
        MovementType::Carga,
        MovementType::Descarga,
        MovementType::Transferencia,
        MovementType::Inspeccion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Entrada => "Entrada",
            MovementType::Salida => "Salida",
            MovementType::Carga => "Carga",
            MovementType::Descarga => "Descarga",
            MovementType::Transferencia => "Transferencia",
            MovementType::Inspeccion => "Inspección",
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MovementType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown movement type: {s}"))
    }
}

/// Movement as returned by `GET movimientos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementRecord {
    #[serde(rename = "ID_MOVIMIENTO")]
    pub id: u32,
    #[serde(rename = "ID_CONTENEDOR")]
    pub container_id: u32,
    #[serde(rename = "CODIGO_CONTENEDOR", default)]
    pub container_code: Option<String>,
    #[serde(rename = "TIPO_MOVIMIENTO", default)]
    pub movement_type: Option<String>,
    #[serde(rename = "FECHA_MOVIMIENTO", default)]
    pub timestamp: Option<String>,
    #[serde(rename = "OBSERVACIONES", default)]
    pub notes: Option<String>,
}

/// Container as returned by `GET contenedores`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerRecord {
    #[serde(rename = "ID_CONTENEDOR")]
    pub id: u32,
    #[serde(rename = "CODIGO_CONTENEDOR", default)]
    pub code: Option<String>,
    #[serde(rename = "CLIENTE_NOMBRE", default)]
    pub client_name: Option<String>,
}

/// Movement row shown in the table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Movement {
    pub id: u32,
    pub container_id: u32,
    /// Denormalized container code, display only
    pub container_code: String,
    /// `None` when the backend sent a missing or unrecognized type
    pub movement_type: Option<MovementType>,
    pub timestamp: String,
    pub notes: String,
}

/// Container entry for the form selector
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContainerOption {
    pub id: u32,
    pub code: String,
    pub client: String,
}

impl ContainerOption {
    pub fn label(&self) -> String {
        if self.client.is_empty() {
            self.code.clone()
        } else {
            format!("{} - {}", self.code, self.client)
        }
    }
}

/// Create/edit form contents
#[derive(Debug, Clone, PartialEq)]
pub struct MovementForm {
    pub container_id: Option<u32>,
    /// `None` when editing a row whose stored type is not recognized
    pub movement_type: Option<MovementType>,
    /// Raw `datetime-local` input value, or the stored timestamp when editing
    pub timestamp: String,
    pub notes: String,
}

impl Default for MovementForm {
    fn default() -> Self {
        Self {
            container_id: None,
            movement_type: Some(MovementType::Entrada),
            timestamp: String::new(),
            notes: String::new(),
        }
    }
}

/// Request body for `POST` and `PUT movimientos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementPayload {
    pub id_contenedor: Option<u32>,
    #[serde(rename = "tipoMovimiento")]
    pub movement_type: MovementType,
    #[serde(rename = "fechaMovimiento")]
    pub timestamp: String,
    #[serde(rename = "observaciones")]
    pub notes: String,
}
