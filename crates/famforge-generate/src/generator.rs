//! Randomized sampling of household records.
//!
//! Every field is drawn independently and uniformly from its range or
//! vocabulary table, except the summary household size, which carries the
//! sampled children/member counts forward.

use chrono::NaiveDate;
use rand::Rng;

use crate::errors::GenerationError;
use crate::model::{
    Address, Adult, Child, Gender, HouseholdRecord, Income, Land, Nic, OtherMember, Summary,
};
use crate::vocab;

/// Generate one synthetic household record from the injected random source.
pub fn generate_record(rng: &mut impl Rng) -> Result<HouseholdRecord, GenerationError> {
    let home_id = format!(
        "{}{}",
        vocab::HOME_ID_PREFIX,
        sample_range(rng, "home_id", 10_000_000, 99_999_999)?
    );

    let address = Address {
        house_number: sample_range(rng, "house_number", 1, 100)? as u32,
        street: pick(rng, "streets", vocab::STREETS)?,
        city: pick(rng, "cities", vocab::CITIES)?,
    };

    let head = Adult {
        full_name: full_name(rng, vocab::HEAD_GIVEN_NAMES, vocab::HEAD_SURNAMES)?,
        nic: sample_nic(rng, "head_nic", 700_000_000, 999_999_999)?,
        date_of_birth: sample_dob(rng, "head_dob", 1970, 1990)?,
        gender: Gender::Male,
        occupation: pick(rng, "head_occupations", vocab::HEAD_OCCUPATIONS)?,
        work_location: pick(rng, "head_work_locations", vocab::HEAD_WORK_LOCATIONS)?,
        education_level: pick(rng, "head_education_levels", vocab::HEAD_EDUCATION_LEVELS)?,
        contact_number: contact_number(rng)?,
    };

    let spouse = Adult {
        full_name: full_name(rng, vocab::SPOUSE_GIVEN_NAMES, vocab::SPOUSE_SURNAMES)?,
        nic: sample_nic(rng, "spouse_nic", 800_000_000, 999_999_999)?,
        date_of_birth: sample_dob(rng, "spouse_dob", 1975, 1995)?,
        gender: Gender::Female,
        occupation: pick(rng, "spouse_occupations", vocab::SPOUSE_OCCUPATIONS)?,
        work_location: pick(rng, "spouse_work_locations", vocab::SPOUSE_WORK_LOCATIONS)?,
        education_level: pick(rng, "spouse_education_levels", vocab::SPOUSE_EDUCATION_LEVELS)?,
        contact_number: contact_number(rng)?,
    };

    let children_count = sample_range(rng, "children_count", 2, 5)? as usize;
    let mut children = Vec::with_capacity(children_count);
    for _ in 0..children_count {
        children.push(sample_child(rng)?);
    }

    let members_count = sample_range(rng, "members_count", 1, 3)? as usize;
    let mut other_members = Vec::with_capacity(members_count);
    for _ in 0..members_count {
        other_members.push(sample_member(rng)?);
    }

    let income = Income {
        monthly_lkr: sample_range(rng, "monthly_income", 200_000, 600_000)? as u32,
        primary_source: pick(rng, "primary_income_sources", vocab::PRIMARY_INCOME_SOURCES)?,
        additional_source: pick(
            rng,
            "additional_income_sources",
            vocab::ADDITIONAL_INCOME_SOURCES,
        )?,
    };

    let land = Land {
        status: pick(rng, "ownership_statuses", vocab::OWNERSHIP_STATUSES)?,
        size_perches: sample_range(rng, "land_size", 10, 50)? as u32,
        land_type: pick(rng, "land_types", vocab::LAND_TYPES)?,
    };

    // Household size must equal the counts used above, never re-sampled.
    let summary = Summary {
        household_size: children_count + members_count + 2,
        emergency_contact: contact_number(rng)?,
        special_note: pick(rng, "special_notes", vocab::SPECIAL_NOTES)?,
    };

    Ok(HouseholdRecord {
        home_id,
        address,
        head,
        spouse,
        children,
        other_members,
        income,
        land,
        summary,
    })
}

fn sample_child(rng: &mut impl Rng) -> Result<Child, GenerationError> {
    Ok(Child {
        full_name: full_name(rng, vocab::CHILD_GIVEN_NAMES, vocab::CHILD_SURNAMES)?,
        date_of_birth: sample_dob(rng, "child_dob", 2005, 2020)?,
        gender: sample_gender(rng),
        school: pick(rng, "schools", vocab::SCHOOLS)?,
        grade: sample_range(rng, "grade", 1, 13)? as u32,
    })
}

fn sample_member(rng: &mut impl Rng) -> Result<OtherMember, GenerationError> {
    Ok(OtherMember {
        full_name: full_name(rng, vocab::MEMBER_GIVEN_NAMES, vocab::MEMBER_SURNAMES)?,
        nic: sample_nic(rng, "member_nic", 600_000_000, 799_999_999)?,
        date_of_birth: sample_dob(rng, "member_dob", 1940, 1970)?,
        gender: sample_gender(rng),
        relationship: pick(rng, "relationships", vocab::RELATIONSHIPS)?,
        occupation: pick(rng, "member_occupations", vocab::MEMBER_OCCUPATIONS)?,
    })
}

fn sample_gender(rng: &mut impl Rng) -> Gender {
    if rng.random_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    }
}

fn full_name(
    rng: &mut impl Rng,
    given: &[&'static str],
    surnames: &[&'static str],
) -> Result<String, GenerationError> {
    let given = pick(rng, "given_names", given)?;
    let surname = pick(rng, "surnames", surnames)?;
    Ok(format!("{given} {surname}"))
}

/// NIC numbers use a half-open range: the upper bound is excluded.
fn sample_nic(
    rng: &mut impl Rng,
    field: &'static str,
    min: u64,
    max: u64,
) -> Result<Nic, GenerationError> {
    if min >= max {
        return Err(GenerationError::InvalidRange {
            field,
            min: min as i64,
            max: max as i64,
        });
    }
    Ok(Nic {
        number: rng.random_range(min..max),
        suffix: vocab::NIC_SUFFIX,
    })
}

/// Day is capped at 28 so every sampled date is a valid calendar date.
fn sample_dob(
    rng: &mut impl Rng,
    field: &'static str,
    min_year: i64,
    max_year: i64,
) -> Result<NaiveDate, GenerationError> {
    let year = sample_range(rng, field, min_year, max_year)? as i32;
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28);
    NaiveDate::from_ymd_opt(year, month, day).ok_or(GenerationError::InvalidDate {
        field,
        year,
        month,
        day,
    })
}

fn contact_number(rng: &mut impl Rng) -> Result<String, GenerationError> {
    let local = sample_range(rng, "contact_number", 1_000_000, 9_999_999)?;
    Ok(format!("+94 77{local}"))
}

fn sample_range(
    rng: &mut impl Rng,
    field: &'static str,
    min: i64,
    max: i64,
) -> Result<i64, GenerationError> {
    if min > max {
        return Err(GenerationError::InvalidRange { field, min, max });
    }
    Ok(rng.random_range(min..=max))
}

fn pick(
    rng: &mut impl Rng,
    table: &'static str,
    values: &[&'static str],
) -> Result<&'static str, GenerationError> {
    if values.is_empty() {
        return Err(GenerationError::EmptyVocabulary(table));
    }
    Ok(values[rng.random_range(0..values.len())])
}
