//! Built-in demo scans used when no scan file is configured.

use chrono::NaiveDate;

use crate::entities::Scan;

const IMAGE_QUERY: &str = "?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixlib=rb-4.1.0&q=80&w=1080";

struct SeedScan {
    id: &'static str,
    patient_id: &'static str,
    patient_name: &'static str,
    age: u32,
    gender: &'static str,
    scan_type: &'static str,
    date: (i32, u32, u32),
    photo: &'static str,
    body_part: &'static str,
}

const SEED: [SeedScan; 5] = [
    SeedScan {
        id: "1",
        patient_id: "PT-2024-001",
        patient_name: "Sarah Johnson",
        age: 45,
        gender: "Female",
        scan_type: "PET/CT",
        date: (2024, 12, 24),
        photo: "photo-1706065638524-eb52e7165abf",
        body_part: "Chest",
    },
    SeedScan {
        id: "2",
        patient_id: "PT-2024-002",
        patient_name: "Michael Chen",
        age: 62,
        gender: "Male",
        scan_type: "PET Scan",
        date: (2024, 12, 24),
        photo: "photo-1587010580103-fd86b8ea14ca",
        body_part: "Full Body",
    },
    SeedScan {
        id: "3",
        patient_id: "PT-2024-003",
        patient_name: "Emma Davis",
        age: 38,
        gender: "Female",
        scan_type: "Brain MRI",
        date: (2024, 12, 25),
        photo: "photo-1758691463569-66de91d76452",
        body_part: "Brain",
    },
    SeedScan {
        id: "4",
        patient_id: "PT-2024-004",
        patient_name: "Robert Wilson",
        age: 55,
        gender: "Male",
        scan_type: "Chest X-Ray",
        date: (2024, 12, 25),
        photo: "photo-1584555684040-bad07f46a21f",
        body_part: "Chest",
    },
    SeedScan {
        id: "5",
        patient_id: "PT-2024-005",
        patient_name: "Lisa Martinez",
        age: 51,
        gender: "Female",
        scan_type: "CT Scan",
        date: (2024, 12, 26),
        photo: "photo-1631563020912-213371f1d768",
        body_part: "Abdomen",
    },
];

/// The five demo scans, in review order.
#[must_use]
pub fn default_scans() -> Vec<Scan> {
    SEED.iter()
        .map(|seed| {
            let (year, month, day) = seed.date;
            Scan {
                id: seed.id.to_string(),
                patient_id: seed.patient_id.to_string(),
                patient_name: seed.patient_name.to_string(),
                age: seed.age,
                gender: seed.gender.to_string(),
                scan_type: seed.scan_type.to_string(),
                // Seed dates are literals above.
                scan_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
                image_url: format!("https://images.unsplash.com/{}{IMAGE_QUERY}", seed.photo),
                body_part: seed.body_part.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seed_has_five_scans_in_order() {
        let scans = default_scans();
        let ids: Vec<&str> = scans.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn seed_ids_are_unique() {
        let scans = default_scans();
        let ids: HashSet<&str> = scans.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), scans.len());
        let patients: HashSet<&str> = scans.iter().map(|s| s.patient_id.as_str()).collect();
        assert_eq!(patients.len(), scans.len());
    }

    #[test]
    fn seed_dates_are_valid() {
        let first = &default_scans()[0];
        assert_eq!(first.scan_date, NaiveDate::from_ymd_opt(2024, 12, 24).unwrap());
        assert!(first.image_url.starts_with("https://images.unsplash.com/photo-"));
    }
}
