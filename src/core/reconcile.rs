use crate::domain::model::Pet;
use chrono::NaiveDateTime;

/// Fold whole elapsed days since `last_updated` into each pet's age.
///
/// Partial days are dropped. A pet whose timestamp is less than a day old,
/// or in the future, is left untouched so the partial day keeps counting.
pub fn reconcile_ages(pets: &mut [Pet], now: NaiveDateTime) {
    for pet in pets.iter_mut() {
        let days_passed = (now - pet.last_updated).num_days();
        if days_passed > 0 {
            pet.age = pet.age.saturating_add(u32::try_from(days_passed).unwrap_or(u32::MAX));
            pet.last_updated = now;
            tracing::debug!("{} aged {} day(s) while away", pet.name(), days_passed);
        }
    }
}

/// Stamp every pet right before it is written out.
pub fn stamp_for_save(pets: &mut [Pet], now: NaiveDateTime) {
    for pet in pets.iter_mut() {
        pet.last_updated = now;
    }
}
