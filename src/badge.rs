//! Movement type badge styles

use crate::models::MovementType;

const NEUTRAL_BADGE: &str = "bg-gray-100 text-gray-700";

impl MovementType {
    pub fn badge_class(&self) -> &'static str {
        match self {
            MovementType::Entrada => "bg-green-100 text-green-700",
            MovementType::Salida => "bg-blue-100 text-blue-700",
            MovementType::Carga => "bg-yellow-100 text-yellow-700",
            MovementType::Descarga => "bg-orange-100 text-orange-700",
            MovementType::Transferencia => "bg-purple-100 text-purple-700",
            MovementType::Inspeccion => "bg-red-100 text-red-700",
        }
    }
}

/// Badge class for a possibly-missing type
pub fn badge_class(movement_type: Option<MovementType>) -> &'static str {
    movement_type.map_or(NEUTRAL_BADGE, |t| t.badge_class())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(badge_class(Some(MovementType::Entrada)), "bg-green-100 text-green-700");
        assert_eq!(badge_class(Some(MovementType::Inspeccion)), "bg-red-100 text-red-700");
    }

    #[test]
    fn test_missing_type_is_neutral() {
        assert_eq!(badge_class(None), "bg-gray-100 text-gray-700");
    }

    #[test]
    fn test_styles_are_distinct() {
        let mut classes: Vec<&str> = MovementType::ALL.iter().map(|t| t.badge_class()).collect();
        classes.push(NEUTRAL_BADGE);
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), 7);
    }
}
