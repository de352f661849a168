use crate::shared::entity::{Entity, ID};
use crate::task::InvalidVariantError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Vehicle type of trucks, which additionally need tachograph checks
pub const TRUCK_VEHICLE_TYPE: &str = "LKW";

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: ID,
    pub plate: String,
    pub vehicle_type: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub tuv_date: Option<NaiveDate>,
    pub au_date: Option<NaiveDate>,
    pub uvv_date: Option<NaiveDate>,
    pub tachograph_last_read: Option<NaiveDate>,
    pub tachograph_next_read: Option<NaiveDate>,
    pub tachograph_last_check: Option<NaiveDate>,
    pub tachograph_next_check: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Vehicle {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Periodic inspections every vehicle has to pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionKind {
    Tuv,
    Au,
    Uvv,
}

impl InspectionKind {
    pub const ALL: [InspectionKind; 3] = [Self::Tuv, Self::Au, Self::Uvv];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Tuv => "TÜV",
            Self::Au => "AU",
            Self::Uvv => "UVV",
        }
    }
}

impl FromStr for InspectionKind {
    type Err = InvalidVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tuv" => Ok(Self::Tuv),
            "au" => Ok(Self::Au),
            "uvv" => Ok(Self::Uvv),
            _ => Err(InvalidVariantError::new("inspection type", s)),
        }
    }
}

impl Vehicle {
    pub fn new(plate: String, vehicle_type: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            plate,
            vehicle_type,
            model: None,
            year: None,
            tuv_date: None,
            au_date: None,
            uvv_date: None,
            tachograph_last_read: None,
            tachograph_next_read: None,
            tachograph_last_check: None,
            tachograph_next_check: None,
            created_at,
        }
    }

    pub fn is_truck(&self) -> bool {
        self.vehicle_type == TRUCK_VEHICLE_TYPE
    }

    pub fn inspection_date(&self, kind: InspectionKind) -> Option<NaiveDate> {
        match kind {
            InspectionKind::Tuv => self.tuv_date,
            InspectionKind::Au => self.au_date,
            InspectionKind::Uvv => self.uvv_date,
        }
    }

    pub fn set_inspection_date(&mut self, kind: InspectionKind, date: NaiveDate) {
        let field = match kind {
            InspectionKind::Tuv => &mut self.tuv_date,
            InspectionKind::Au => &mut self.au_date,
            InspectionKind::Uvv => &mut self.uvv_date,
        };
        *field = Some(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspection_dates_by_kind() {
        let mut vehicle = Vehicle::new("B-XY 123".into(), "PKW".into(), Utc::now());
        assert!(!vehicle.is_truck());
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        vehicle.set_inspection_date(InspectionKind::Au, date);
        assert_eq!(vehicle.inspection_date(InspectionKind::Au), Some(date));
        assert_eq!(vehicle.inspection_date(InspectionKind::Tuv), None);
    }

    #[test]
    fn parses_inspection_kinds() {
        assert_eq!("tuv".parse::<InspectionKind>().unwrap(), InspectionKind::Tuv);
        assert_eq!("UVV".parse::<InspectionKind>().unwrap(), InspectionKind::Uvv);
        assert!("hu".parse::<InspectionKind>().is_err());
        assert_eq!(InspectionKind::Tuv.label(), "TÜV");
    }

    #[test]
    fn only_lkw_is_a_truck() {
        let truck = Vehicle::new("B-LK 1".into(), "LKW".into(), Utc::now());
        assert!(truck.is_truck());
        let lowercase = Vehicle::new("B-LK 2".into(), "lkw".into(), Utc::now());
        assert!(!lowercase.is_truck());
    }
}
