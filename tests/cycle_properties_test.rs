use chrono::{Datelike, Days, NaiveDate};
use star_cosmic::core::cycle::{cyclic_index, day_index, default_correlation_epoch};
use star_cosmic::core::resolvers::{ChineseResolver, MayanResolver, WesternResolver};
use star_cosmic::core::tone::tone_for;
use star_cosmic::domain::ports::SignResolver;
use star_cosmic::BirthMoment;

#[test]
fn test_cyclic_index_never_leaves_range() {
    for cycle_length in [13i64, 20, 260] {
        for di in -1000..1000 {
            let idx = cyclic_index(di, cycle_length);
            assert!((0..cycle_length).contains(&idx));
        }
    }
}

#[test]
fn test_tone_window_spanning_epoch_covers_full_range() {
    let epoch = default_correlation_epoch();
    let start = epoch.checked_sub_days(Days::new(6)).unwrap();

    let mut seen = std::collections::HashSet::new();
    for offset in 0..13u64 {
        let date = start.checked_add_days(Days::new(offset)).unwrap();
        let tone = tone_for(day_index(date, epoch));
        assert!((1..=13).contains(&tone.number));
        seen.insert(tone.number);
    }
    assert_eq!(seen.len(), 13);
}

#[test]
fn test_western_assignment_has_no_boundary_overlap() {
    // each start date belongs to the new sign, the day before to the old one
    let starts = [
        (1u32, 20u32),
        (2, 19),
        (3, 21),
        (4, 20),
        (5, 21),
        (6, 21),
        (7, 23),
        (8, 23),
        (9, 23),
        (10, 23),
        (11, 22),
        (12, 22),
    ];
    for (month, day) in starts {
        let at_start = WesternResolver::sign_for(month, day);
        let day_before = NaiveDate::from_ymd_opt(2001, month, day)
            .unwrap()
            .checked_sub_days(Days::new(1))
            .unwrap();
        let before = WesternResolver::sign_for(day_before.month(), day_before.day());
        assert_ne!(at_start.name, before.name);
    }
}

#[test]
fn test_chinese_cycle_has_period_exactly_12() {
    let resolver = ChineseResolver::default();
    for year in 1850..2150 {
        assert_eq!(
            resolver.animal_for(year).name,
            resolver.animal_for(year + 12).name
        );
        // no shorter period
        for gap in 1..12 {
            assert_ne!(
                resolver.animal_for(year).name,
                resolver.animal_for(year + gap).name
            );
        }
    }
}

#[tokio::test]
async fn test_tzolkin_pair_has_period_exactly_260() {
    let resolver = MayanResolver::default();
    let base = NaiveDate::from_ymd_opt(1969, 11, 1).unwrap();

    let sign_and_tone = |profile: &star_cosmic::TraditionResult| {
        (
            profile.sign.clone(),
            profile.attributes.get("tone").unwrap().as_u64().unwrap(),
        )
    };

    let at = |date: NaiveDate| BirthMoment::from_ymd(date.year(), date.month(), date.day()).unwrap();

    let reference = resolver.resolve(&at(base)).await.unwrap();
    let after_260 = resolver
        .resolve(&at(base.checked_add_days(Days::new(260)).unwrap()))
        .await
        .unwrap();
    assert_eq!(sign_and_tone(&reference), sign_and_tone(&after_260));

    // 260 is the least common multiple of 20 and 13: no earlier repeat
    for gap in 1..260 {
        let other = resolver
            .resolve(&at(base.checked_add_days(Days::new(gap)).unwrap()))
            .await
            .unwrap();
        assert_ne!(sign_and_tone(&reference), sign_and_tone(&other));
    }
}
