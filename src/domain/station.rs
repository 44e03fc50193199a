use serde::{Deserialize, Serialize};

/// Identifies the station an order is placed with.
///
/// The ordering flow does not interpret these values; they are passed through
/// to the order store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRef {
    pub station_id: String,
    pub owner_id: String,
    pub station_name: String,
}

/// Display details of a refilling station.
///
/// Any field may be missing in the backing data; missing values render as
/// absent rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefillingStation {
    pub id: String,
    pub owner_id: String,
    pub station_name: String,
    pub address: Option<String>,
    pub barangay: Option<String>,
    pub landmark: Option<String>,
    pub contact_no: Option<String>,
    pub tel_no: Option<String>,
    /// Free text as entered by the station owner, e.g. "Delivery, Pick-up".
    pub delivery_mode: Option<String>,
}

impl RefillingStation {
    pub fn reference(&self) -> StationRef {
        StationRef {
            station_id: self.id.clone(),
            owner_id: self.owner_id.clone(),
            station_name: self.station_name.clone(),
        }
    }

    /// Address and barangay joined for display, skipping whichever is missing.
    pub fn full_address(&self) -> Option<String> {
        match (self.address.as_deref(), self.barangay.as_deref()) {
            (Some(address), Some(barangay)) => Some(format!("{}, {}", address, barangay)),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => None,
        }
    }

    /// Human readable summary lines, one per present field.
    pub fn details(&self) -> Vec<String> {
        let mut lines = vec![format!("Station Name: {}", self.station_name)];
        if let Some(address) = self.full_address() {
            lines.push(format!("Address: {}", address));
        }
        if let Some(landmark) = &self.landmark {
            lines.push(format!("Landmark: {}", landmark));
        }
        if let Some(contact_no) = &self.contact_no {
            lines.push(format!("Contact No: {}", contact_no));
        }
        if let Some(tel_no) = &self.tel_no {
            lines.push(format!("Tel No: {}", tel_no));
        }
        if let Some(mode) = &self.delivery_mode {
            lines.push(format!("Available delivery mode: {}", mode));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_skipped() {
        let station = RefillingStation {
            id: "st_1".into(),
            owner_id: "owner_1".into(),
            station_name: "Aqua Fresh".into(),
            barangay: Some("San Roque".into()),
            ..Default::default()
        };

        assert_eq!(station.full_address().as_deref(), Some("San Roque"));
        assert_eq!(
            station.details(),
            vec!["Station Name: Aqua Fresh".to_string(), "Address: San Roque".to_string()]
        );
    }

    #[test]
    fn test_reference_carries_ids() {
        let station = RefillingStation {
            id: "st_1".into(),
            owner_id: "owner_1".into(),
            station_name: "Aqua Fresh".into(),
            address: Some("12 Rizal St".into()),
            barangay: Some("San Roque".into()),
            ..Default::default()
        };

        let reference = station.reference();
        assert_eq!(reference.station_id, "st_1");
        assert_eq!(reference.owner_id, "owner_1");
        assert_eq!(station.full_address().as_deref(), Some("12 Rizal St, San Roque"));
    }
}
