use crate::domain::{
    coerce_user_id, normalize_email, parse_coordinate, stripped, CleanRecord, RawUser, UserId,
};
use crate::error::{CoreError, RecordError};

pub fn normalize_user(user: &RawUser) -> Result<CleanRecord, CoreError> {
    let id = user_id(user)?;
    let address = user.section("address");
    let geo = address.section("geo");
    let company = user.section("company");

    Ok(CleanRecord {
        id,
        name: stripped(user.field("name")),
        username: stripped(user.field("username")),
        email: stripped(user.field("email"))
            .as_deref()
            .and_then(normalize_email),
        city: stripped(address.field("city")),
        zipcode: stripped(address.field("zipcode")),
        lat: parse_coordinate(geo.field("lat")),
        lng: parse_coordinate(geo.field("lng")),
        company_name: stripped(company.field("name")),
        website: stripped(user.field("website")),
    })
}

/// Normalizes the whole batch, stopping at the first record that fails.
pub fn normalize(users: &[RawUser]) -> Result<Vec<CleanRecord>, RecordError> {
    users
        .iter()
        .enumerate()
        .map(|(index, user)| normalize_at(index, user))
        .collect()
}

/// Normalizes every record independently, keeping one result per input.
pub fn normalize_each(users: &[RawUser]) -> Vec<Result<CleanRecord, RecordError>> {
    users
        .iter()
        .enumerate()
        .map(|(index, user)| normalize_at(index, user))
        .collect()
}

pub fn split_results(
    results: Vec<Result<CleanRecord, RecordError>>,
) -> (Vec<CleanRecord>, Vec<RecordError>) {
    let mut records = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(record) => records.push(record),
            Err(err) => failures.push(err),
        }
    }
    (records, failures)
}

fn normalize_at(index: usize, user: &RawUser) -> Result<CleanRecord, RecordError> {
    normalize_user(user).map_err(|source| RecordError { index, source })
}

fn user_id(user: &RawUser) -> Result<UserId, CoreError> {
    let Some(raw) = user.field("id") else {
        return Err(CoreError::MissingId {
            name: user.display_name(),
        });
    };
    coerce_user_id(raw).ok_or_else(|| CoreError::InvalidId {
        name: user.display_name(),
        value: raw.to_string(),
    })
}
