//! Flattening of structured records into ordered, titled sections.

use crate::model::{Adult, HouseholdRecord};

/// Fixed section titles, always emitted in this order.
pub const SECTION_TITLES: &[&str] = &[
    "1. Home ID/Registration Number",
    "2. Full Address",
    "3. Head of Family Details",
    "4. Spouse Details",
    "5. Children Details",
    "6. Other Family Members",
    "7. Family Income Details",
    "8. Land Ownership Status",
    "9. Additional Information",
];

/// One titled block of a generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    fn new(title: &str, body: String) -> Self {
        Self {
            title: title.to_string(),
            body,
        }
    }
}

/// Flatten a record into its nine sections in fixed order.
pub fn record_sections(record: &HouseholdRecord) -> Vec<Section> {
    let children = record
        .children
        .iter()
        .map(|child| {
            format!(
                "Full Name: {}\nDate of Birth: {}\nGender: {}\nSchool Name: {}\nGrade/Education Level: Grade {}",
                child.full_name,
                child.date_of_birth.format("%Y-%m-%d"),
                child.gender,
                child.school,
                child.grade,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let members = record
        .other_members
        .iter()
        .map(|member| {
            format!(
                "Full Name: {}\nNIC: {}\nDate of Birth: {}\nGender: {}\nRelationship to Head of Family: {}\nOccupation: {}",
                member.full_name,
                member.nic,
                member.date_of_birth.format("%Y-%m-%d"),
                member.gender,
                member.relationship,
                member.occupation,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    vec![
        Section::new(SECTION_TITLES[0], format!("Home ID: {}", record.home_id)),
        Section::new(SECTION_TITLES[1], record.address.to_string()),
        Section::new(SECTION_TITLES[2], adult_body(&record.head)),
        Section::new(SECTION_TITLES[3], adult_body(&record.spouse)),
        Section::new(SECTION_TITLES[4], children),
        Section::new(SECTION_TITLES[5], members),
        Section::new(
            SECTION_TITLES[6],
            format!(
                "Total Monthly Income: LKR {}\nPrimary Income Source: {}\nAdditional Income Sources: {}",
                record.income.monthly_lkr,
                record.income.primary_source,
                record.income.additional_source,
            ),
        ),
        Section::new(
            SECTION_TITLES[7],
            format!(
                "Status: {}\nSize: {} Perches\nLand Type: {}",
                record.land.status, record.land.size_perches, record.land.land_type,
            ),
        ),
        Section::new(
            SECTION_TITLES[8],
            format!(
                "Household Size: {} Members\nEmergency Contact: {}\nSpecial Notes: {}",
                record.summary.household_size,
                record.summary.emergency_contact,
                record.summary.special_note,
            ),
        ),
    ]
}

fn adult_body(adult: &Adult) -> String {
    format!(
        "Full Name: {}\nNIC: {}\nDate of Birth: {}\nGender: {}\nOccupation: {}\nWork Location: {}\nEducation Level: {}\nContact Number: {}",
        adult.full_name,
        adult.nic,
        adult.date_of_birth.format("%Y-%m-%d"),
        adult.gender,
        adult.occupation,
        adult.work_location,
        adult.education_level,
        adult.contact_number,
    )
}
