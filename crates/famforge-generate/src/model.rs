//! Structured household record model.
//!
//! The generator fills these types; only the section assembly step
//! flattens them into display text.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// National identity number: a 9-digit numeral plus a fixed suffix letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Nic {
    pub number: u64,
    pub suffix: char,
}

impl fmt::Display for Nic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.suffix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub house_number: u32,
    pub street: &'static str,
    pub city: &'static str,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No. {}, {}, {}, Sri Lanka",
            self.house_number, self.street, self.city
        )
    }
}

/// Head of household or spouse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adult {
    pub full_name: String,
    pub nic: Nic,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub occupation: &'static str,
    pub work_location: &'static str,
    pub education_level: &'static str,
    pub contact_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Child {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub school: &'static str,
    pub grade: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtherMember {
    pub full_name: String,
    pub nic: Nic,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub relationship: &'static str,
    pub occupation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Income {
    pub monthly_lkr: u32,
    pub primary_source: &'static str,
    pub additional_source: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Land {
    pub status: &'static str,
    pub size_perches: u32,
    pub land_type: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Always children + other members + 2, carried forward from the
    /// counts used to build those lists.
    pub household_size: usize,
    pub emergency_contact: String,
    pub special_note: &'static str,
}

/// One complete synthetic household before rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseholdRecord {
    pub home_id: String,
    pub address: Address,
    pub head: Adult,
    pub spouse: Adult,
    pub children: Vec<Child>,
    pub other_members: Vec<OtherMember>,
    pub income: Income,
    pub land: Land,
    pub summary: Summary,
}
