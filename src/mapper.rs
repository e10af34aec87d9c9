//! Record Mapper
//!
//! Backend records -> UI rows, and form -> request bodies.

use chrono::FixedOffset;
use leptos::logging::warn;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    ContainerOption, ContainerRecord, Movement, MovementForm, MovementPayload, MovementRecord,
    MovementType,
};
use crate::timestamp::to_backend_timestamp;

pub fn movement_from_record(record: MovementRecord) -> Movement {
    let movement_type = match record.movement_type.as_deref() {
        None | Some("") => None,
        Some(raw) => match raw.parse::<MovementType>() {
            Ok(t) => Some(t),
            Err(e) => {
                warn!("[MAPPER] movement {}: {}", record.id, e);
                None
            }
        },
    };
    Movement {
        id: record.id,
        container_id: record.container_id,
        container_code: record.container_code.unwrap_or_default(),
        movement_type,
        timestamp: record.timestamp.unwrap_or_default(),
        notes: record.notes.unwrap_or_default(),
    }
}

pub fn container_from_record(record: ContainerRecord) -> ContainerOption {
    ContainerOption {
        id: record.id,
        code: record.code.unwrap_or_default(),
        client: record.client_name.unwrap_or_default(),
    }
}

pub fn movements_from_records(records: Vec<MovementRecord>) -> Vec<Movement> {
    records.into_iter().map(movement_from_record).collect()
}

pub fn containers_from_records(records: Vec<ContainerRecord>) -> Vec<ContainerOption> {
    records.into_iter().map(container_from_record).collect()
}

/// Seed the edit form from an existing row
pub fn form_from_movement(movement: &Movement) -> MovementForm {
    MovementForm {
        container_id: Some(movement.container_id),
        movement_type: movement.movement_type,
        timestamp: movement.timestamp.clone(),
        notes: movement.notes.clone(),
    }
}

fn ensure_required(form: &MovementForm) -> ApiResult<MovementType> {
    if form.container_id.is_none() {
        return Err(ApiError::Validation("Seleccione un contenedor".to_string()));
    }
    form.movement_type
        .ok_or_else(|| ApiError::Validation("Seleccione un tipo de movimiento".to_string()))
}

/// Body for `PUT`: the form as entered
pub fn update_payload(form: &MovementForm) -> ApiResult<MovementPayload> {
    let movement_type = ensure_required(form)?;
    Ok(MovementPayload {
        id_contenedor: form.container_id,
        movement_type,
        timestamp: form.timestamp.clone(),
        notes: form.notes.clone(),
    })
}

/// Body for `POST`: the form with its timestamp converted to backend UTC
pub fn create_payload(form: &MovementForm, offset: FixedOffset) -> ApiResult<MovementPayload> {
    let movement_type = ensure_required(form)?;
    Ok(MovementPayload {
        id_contenedor: form.container_id,
        movement_type,
        timestamp: to_backend_timestamp(&form.timestamp, offset)?,
        notes: form.notes.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MovementRecord {
        serde_json::from_value(serde_json::json!({
            "ID_MOVIMIENTO": 7,
            "ID_CONTENEDOR": 3,
            "CODIGO_CONTENEDOR": "MSKU1",
            "TIPO_MOVIMIENTO": "Entrada",
            "FECHA_MOVIMIENTO": "2024-01-01 10:00:00",
            "OBSERVACIONES": null
        }))
        .unwrap()
    }

    #[test]
    fn test_movement_from_record() {
        let movement = movement_from_record(record());
        assert_eq!(
            movement,
            Movement {
                id: 7,
                container_id: 3,
                container_code: "MSKU1".into(),
                movement_type: Some(MovementType::Entrada),
                timestamp: "2024-01-01 10:00:00".into(),
                notes: String::new(),
            }
        );
    }

    #[test]
    fn test_unknown_and_missing_types_map_to_none() {
        let mut rec = record();
        rec.movement_type = Some("Reparación".into());
        assert_eq!(movement_from_record(rec.clone()).movement_type, None);
        rec.movement_type = None;
        rec.container_code = None;
        rec.timestamp = None;
        let movement = movement_from_record(rec);
        assert_eq!(movement.movement_type, None);
        assert_eq!(movement.container_code, "");
        assert_eq!(movement.timestamp, "");
    }

    #[test]
    fn test_container_from_record() {
        let rec: ContainerRecord = serde_json::from_value(serde_json::json!({
            "ID_CONTENEDOR": 3,
            "CODIGO_CONTENEDOR": "MSKU1",
            "CLIENTE_NOMBRE": null
        }))
        .unwrap();
        assert_eq!(
            container_from_record(rec),
            ContainerOption { id: 3, code: "MSKU1".into(), client: String::new() }
        );
    }

    #[test]
    fn test_form_seeded_from_movement() {
        let movement = movement_from_record(record());
        let form = form_from_movement(&movement);
        assert_eq!(
            form,
            MovementForm {
                container_id: Some(3),
                movement_type: Some(MovementType::Entrada),
                timestamp: "2024-01-01 10:00:00".into(),
                notes: String::new(),
            }
        );
    }

    #[test]
    fn test_update_payload_sends_form_unchanged() {
        let form = MovementForm {
            container_id: Some(9),
            movement_type: Some(MovementType::Salida),
            timestamp: "2024-01-01 10:00:00".into(),
            notes: "gate 4".into(),
        };
        let payload = update_payload(&form).unwrap();
        assert_eq!(payload.timestamp, "2024-01-01 10:00:00");
        assert_eq!(payload.id_contenedor, Some(9));
        assert_eq!(payload.notes, "gate 4");
    }

    #[test]
    fn test_create_payload_converts_timestamp() {
        let form = MovementForm {
            container_id: Some(3),
            timestamp: "2024-06-01T09:30".into(),
            ..Default::default()
        };
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let payload = create_payload(&form, offset).unwrap();
        assert_eq!(payload.timestamp, "2024-06-01 14:30:00");
        assert_eq!(payload.movement_type, MovementType::Entrada);
        // form itself is untouched
        assert_eq!(form.timestamp, "2024-06-01T09:30");
    }

    #[test]
    fn test_unknown_type_row_is_not_retyped_on_edit() {
        let mut rec = record();
        rec.id = 9;
        rec.movement_type = Some("Reparación".into());
        let mut form = form_from_movement(&movement_from_record(rec));
        assert_eq!(form.movement_type, None);

        // only the notes were touched
        form.notes = "sello roto".into();
        assert_eq!(
            update_payload(&form),
            Err(ApiError::Validation("Seleccione un tipo de movimiento".into()))
        );

        form.movement_type = Some(MovementType::Inspeccion);
        assert_eq!(update_payload(&form).unwrap().movement_type, MovementType::Inspeccion);
    }

    #[test]
    fn test_missing_container_is_rejected() {
        let form = MovementForm::default();
        assert!(matches!(update_payload(&form), Err(ApiError::Validation(_))));
        let offset = FixedOffset::east_opt(0).unwrap();
        assert!(matches!(create_payload(&form, offset), Err(ApiError::Validation(_))));
    }
}
