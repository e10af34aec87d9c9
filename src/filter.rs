//! Movement Filter
//!
//! Type filter applied over the in-memory movement list.

use crate::models::{Movement, MovementType};

/// Active type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// "Todos": everything passes
    #[default]
    All,
    Only(MovementType),
}

impl TypeFilter {
    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::All => "Todos",
            TypeFilter::Only(t) => t.as_str(),
        }
    }

    pub fn matches(&self, movement: &Movement) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => movement.movement_type == Some(*t),
        }
    }
}

/// Movements passing `filter`, in their original order
pub fn filter_movements(movements: &[Movement], filter: TypeFilter) -> Vec<Movement> {
    movements.iter().filter(|m| filter.matches(m)).cloned().collect()
}

/// Table placeholder when nothing passes the filter
pub fn empty_message(filter: TypeFilter) -> String {
    match filter {
        TypeFilter::All => "No hay movimientos registrados".to_string(),
        TypeFilter::Only(t) => format!("No hay movimientos del tipo \"{}\"", t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_movement(id: u32, movement_type: Option<MovementType>) -> Movement {
        Movement {
            id,
            container_id: 1,
            container_code: format!("MSKU{}", id),
            movement_type,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Movement> {
        vec![
            make_movement(1, Some(MovementType::Entrada)),
            make_movement(2, Some(MovementType::Carga)),
            make_movement(3, None),
            make_movement(4, Some(MovementType::Entrada)),
            make_movement(5, Some(MovementType::Inspeccion)),
        ]
    }

    #[test]
    fn test_all_is_identity() {
        let movements = sample();
        assert_eq!(filter_movements(&movements, TypeFilter::All), movements);
    }

    #[test]
    fn test_only_keeps_matching_in_order() {
        let movements = sample();
        let filtered = filter_movements(&movements, TypeFilter::Only(MovementType::Entrada));
        let ids: Vec<u32> = filtered.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_every_type_partitions_typed_movements() {
        let movements = sample();
        let total: usize = MovementType::ALL
            .iter()
            .map(|t| filter_movements(&movements, TypeFilter::Only(*t)).len())
            .sum();
        // the untyped movement only shows under "Todos"
        assert_eq!(total, movements.len() - 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        let filtered = filter_movements(&sample(), TypeFilter::Only(MovementType::Salida));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(empty_message(TypeFilter::All), "No hay movimientos registrados");
        assert_eq!(
            empty_message(TypeFilter::Only(MovementType::Descarga)),
            "No hay movimientos del tipo \"Descarga\""
        );
    }
}
