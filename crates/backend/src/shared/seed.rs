use contracts::domain::a008_day::aggregate::WEEK_DAYS;
use contracts::domain::a008_day::Day;

use crate::shared::store::Store;

/// Week days are fixed reference data every schedule needs.
pub fn seed_reference_data(store: &Store) -> anyhow::Result<()> {
    for name in WEEK_DAYS {
        store.insert_entity(&Day {
            day_name: name.to_string(),
            ..Default::default()
        })?;
    }
    tracing::info!("Seeded {} days", WEEK_DAYS.len());
    Ok(())
}
