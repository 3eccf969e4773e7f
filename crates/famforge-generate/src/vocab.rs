//! Fixed vocabulary tables for categorical fields.
//!
//! One named constant per field/role so vocabulary changes never touch
//! generation logic, and so tests assert membership against the same
//! tables the generator samples from.

/// Prefix for every home registration identifier.
pub const HOME_ID_PREFIX: &str = "SL";

/// Fixed suffix letter on every national identity number.
pub const NIC_SUFFIX: char = 'V';

pub const STREETS: &[&str] = &[
    "Masjid Road",
    "Galle Road",
    "Kandy Street",
    "Main Street",
    "Colombo Lane",
];

pub const CITIES: &[&str] = &["Colombo", "Kandy", "Galle", "Kurunegala", "Batticaloa"];

pub const HEAD_GIVEN_NAMES: &[&str] = &["Mohamed", "Ahamed", "Farhan", "Rizwan", "Ismail"];
pub const HEAD_SURNAMES: &[&str] = &["Rahman", "Fazil", "Nawaz", "Iqbal", "Hassan"];

pub const SPOUSE_GIVEN_NAMES: &[&str] = &["Fathima", "Ayesha", "Nashwa", "Zainab", "Rashida"];
pub const SPOUSE_SURNAMES: &[&str] = &["Nafeesa", "Hassan", "Iqbal", "Rahman", "Fazil"];

pub const CHILD_GIVEN_NAMES: &[&str] =
    &["Ahamed", "Ismail", "Muneer", "Rashid", "Sameer", "Yusuf"];
pub const CHILD_SURNAMES: &[&str] = &["Rahman", "Iqbal", "Hassan", "Fazil", "Nawaz"];

pub const MEMBER_GIVEN_NAMES: &[&str] = &["Abdul", "Haleem", "Mansoor", "Zainab", "Ayesha"];
pub const MEMBER_SURNAMES: &[&str] = &["Rahman", "Fazil", "Iqbal", "Hassan"];

pub const HEAD_OCCUPATIONS: &[&str] =
    &["Businessman", "Engineer", "Doctor", "Teacher", "IT Specialist"];
pub const HEAD_WORK_LOCATIONS: &[&str] = &["Colombo", "Kandy", "Galle", "Puttalam"];
pub const HEAD_EDUCATION_LEVELS: &[&str] =
    &["Advanced Level", "Bachelor's Degree", "Master's Degree"];

pub const SPOUSE_OCCUPATIONS: &[&str] = &["Homemaker", "Teacher", "Nurse", "Doctor"];
pub const SPOUSE_WORK_LOCATIONS: &[&str] = &["N/A", "Local School", "City Hospital"];
pub const SPOUSE_EDUCATION_LEVELS: &[&str] = &["Advanced Level", "Bachelor's Degree"];

pub const SCHOOLS: &[&str] = &[
    "Zahira College",
    "Muslim Ladies College",
    "Al-Hikma International School",
];

pub const RELATIONSHIPS: &[&str] = &["Father", "Mother", "Uncle", "Aunt"];
pub const MEMBER_OCCUPATIONS: &[&str] = &["Retired", "Housewife"];

pub const PRIMARY_INCOME_SOURCES: &[&str] = &["Business", "Salary", "Investments"];
pub const ADDITIONAL_INCOME_SOURCES: &[&str] = &["Rental Property", "Online Work", "None"];

pub const OWNERSHIP_STATUSES: &[&str] = &["Owned", "Rented"];
pub const LAND_TYPES: &[&str] = &["Residential", "Commercial"];

pub const SPECIAL_NOTES: &[&str] = &[
    "Active in community events",
    "Has a prayer room",
    "Owns a small shop",
    "Participates in charity work",
];
