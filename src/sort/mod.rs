//! Stable, non-mutating sorts over user records.
//!
//! Every sort copies the input and orders the copy. Descending mode flips
//! the key comparison rather than reversing the ascending result, so records
//! with equal keys keep their input order in both directions.

use std::cmp::Ordering;

use clap::ValueEnum;
use strum::{Display, EnumIter};

use crate::models::UserRecord;

/// Field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    /// Case-insensitive login.
    Login,
    /// Numeric id.
    Id,
    /// Account type, absent treated as empty.
    Type,
}

impl SortKey {
    /// Name of the function implementing this key, for the operations summary.
    pub fn function_name(self) -> &'static str {
        match self {
            SortKey::Login => "sort_by_login",
            SortKey::Id => "sort_by_id",
            SortKey::Type => "sort_by_type",
        }
    }
}

/// Direction of the key comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// `true` selects [`SortOrder::Descending`].
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Sort by case-insensitive login.
pub fn sort_by_login(users: &[UserRecord], descending: bool) -> Vec<UserRecord> {
    sort_by(users, SortKey::Login, SortOrder::from_descending(descending))
}

/// Sort by numeric id.
pub fn sort_by_id(users: &[UserRecord], descending: bool) -> Vec<UserRecord> {
    sort_by(users, SortKey::Id, SortOrder::from_descending(descending))
}

/// Sort by type; records without one group before every named type
/// when ascending.
pub fn sort_by_type(users: &[UserRecord], descending: bool) -> Vec<UserRecord> {
    sort_by(users, SortKey::Type, SortOrder::from_descending(descending))
}

/// Return a new vector of `users` ordered by `key` in `order`.
pub fn sort_by(users: &[UserRecord], key: SortKey, order: SortOrder) -> Vec<UserRecord> {
    match key {
        SortKey::Login => sorted_by_key(users, order, UserRecord::sort_login),
        SortKey::Id => sorted_by_key(users, order, |u| u.id),
        SortKey::Type => sorted_by_key(users, order, |u| u.type_key().to_string()),
    }
}

// Keys are computed once per record; `sort_by` on slices is stable.
fn sorted_by_key<K, F>(users: &[UserRecord], order: SortOrder, key: F) -> Vec<UserRecord>
where
    K: Ord,
    F: Fn(&UserRecord) -> K,
{
    let mut keyed: Vec<(K, &UserRecord)> = users.iter().map(|u| (key(u), u)).collect();
    keyed.sort_by(|(a, _), (b, _)| order.apply(a.cmp(b)));
    keyed.into_iter().map(|(_, u)| u.clone()).collect()
}
