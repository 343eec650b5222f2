use crate::core::cycle::cyclic_index;
use crate::core::tables::TONES;
use crate::domain::model::ToneRecord;

/// Galactic tone for a day index: `(day_index mod 13) + 1`, looked up in the
/// static tone table. Shared by the Mayan and Aztec resolvers; the only tone
/// implementation in the crate.
pub fn tone_for(day_index: i64) -> &'static ToneRecord {
    &TONES[cyclic_index(day_index, 13) as usize]
}
