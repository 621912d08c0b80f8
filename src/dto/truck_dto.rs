//! Truck wire representation
//!
//! Status travels as a free-form string on the wire and is validated
//! against the closed enum by the service.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::truck::Truck;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TruckDto {
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,
    pub status: String,
    pub details: String,
}

impl From<Truck> for TruckDto {
    fn from(truck: Truck) -> Self {
        Self {
            id: Some(truck.id),
            model: truck.model,
            status: truck.status.as_str().to_string(),
            details: truck.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::truck::TruckStatus;

    #[test]
    fn test_dto_echoes_id_and_upper_case_status() {
        let truck = Truck {
            id: 7,
            model: "Volvo FH16".to_string(),
            status: TruckStatus::InMaintenance,
            details: "brake overhaul".to_string(),
        };

        let dto = TruckDto::from(truck);
        assert_eq!(dto.id, Some(7));
        assert_eq!(dto.model, "Volvo FH16");
        assert_eq!(dto.status, "IN_MAINTENANCE");
        assert_eq!(dto.details, "brake overhaul");
    }

    #[test]
    fn test_dto_decodes_without_id() {
        let dto: TruckDto =
            serde_json::from_str(r#"{"model":"Actros","status":"active","details":"new"}"#)
                .unwrap();
        assert_eq!(dto.id, None);
        assert_eq!(dto.status, "active");
    }
}
