//! Picks the next excuse, never repeating the one on screen when the
//! catalog leaves any alternative.

use crate::catalog::Catalog;
use crate::core::random::RandomSource;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, ExcuseRecord};

pub fn select_next<'a>(
    catalog: &'a Catalog,
    current: Option<&ExcuseRecord>,
    rng: &mut dyn RandomSource,
) -> AppResult<&'a ExcuseRecord> {
    pick(catalog.records().iter().collect(), current, rng)
}

/// Same rule as [`select_next`], restricted to one category first.
pub fn select_next_in<'a>(
    catalog: &'a Catalog,
    category: Category,
    current: Option<&ExcuseRecord>,
    rng: &mut dyn RandomSource,
) -> AppResult<&'a ExcuseRecord> {
    let pool: Vec<&ExcuseRecord> = catalog.by_category(category).collect();

    if pool.is_empty() {
        return Err(AppError::Configuration(format!(
            "no excuses in category '{}'",
            category
        )));
    }

    pick(pool, current, rng)
}

fn pick<'a>(
    pool: Vec<&'a ExcuseRecord>,
    current: Option<&ExcuseRecord>,
    rng: &mut dyn RandomSource,
) -> AppResult<&'a ExcuseRecord> {
    let filtered: Vec<&ExcuseRecord> = match current {
        Some(cur) => pool.iter().copied().filter(|r| r.id != cur.id).collect(),
        None => pool.clone(),
    };

    // Only the current record left: allow it to recur.
    let eligible = if filtered.is_empty() { pool } else { filtered };

    if eligible.is_empty() {
        return Err(AppError::Configuration(
            "cannot select from an empty catalog".into(),
        ));
    }

    let idx = rng.next_in_range(eligible.len());
    eligible
        .get(idx)
        .copied()
        .ok_or_else(|| AppError::Other(format!("random index {idx} out of range")))
}
