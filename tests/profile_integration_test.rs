use star_cosmic::{calculate_cosmic_profile, BirthMoment, CosmicEngine, Element, Tradition};

#[tokio::test]
async fn test_date_only_profile_end_to_end() {
    // 1990-03-21, no time/location: four traditions resolve, vedic fails
    let moment = BirthMoment::from_ymd(1990, 3, 21).unwrap();
    let profile = calculate_cosmic_profile(&moment).await.unwrap();

    assert_eq!(profile.tradition_results.len(), 4);
    assert_eq!(profile.resolution_failures.len(), 1);
    assert_eq!(profile.resolution_failures[0].tradition, Tradition::Vedic);

    let western = &profile.tradition_results[0];
    assert_eq!(western.tradition, Tradition::Western);
    assert_eq!(western.sign, "Aries");

    let chinese = &profile.tradition_results[1];
    assert_eq!(chinese.sign, "Horse");
    assert_eq!(chinese.element, Some(Element::Metal));

    let mayan = &profile.tradition_results[2];
    assert_eq!(mayan.sign, "Chicchan");
    assert_eq!(mayan.attributes.get("tone").unwrap().as_u64().unwrap(), 1);

    let aztec = &profile.tradition_results[3];
    assert_eq!(aztec.sign, "Coatl");

    // majority element across Western/Mayan/Aztec fire votes
    let signature = profile.cosmic_signature.unwrap();
    assert_eq!(signature.primary_element, Element::Fire);
    assert_eq!(signature.secondary_element, Element::Metal);
    assert_eq!(signature.tone, 1);
    assert_eq!(
        signature.synthesis,
        "Fire element dominant, harmonized by Metal, under Tone 1: Magnetic"
    );
}

#[tokio::test]
async fn test_leap_day_resolves_without_invalid_date() {
    let moment = BirthMoment::from_ymd(2000, 2, 29).unwrap();
    let profile = calculate_cosmic_profile(&moment).await.unwrap();

    assert_eq!(profile.tradition_results.len(), 4);
    assert_eq!(profile.tradition_results[0].sign, "Pisces");
    assert!(profile.cosmic_signature.is_some());
}

#[tokio::test]
async fn test_full_moment_resolves_all_five_traditions() {
    let moment = BirthMoment::from_ymd(1990, 3, 21)
        .unwrap()
        .with_time(14, 30)
        .unwrap()
        .with_location(25.03, 121.56, Some("Taipei".to_string()));
    let profile = calculate_cosmic_profile(&moment).await.unwrap();

    assert_eq!(profile.tradition_results.len(), 5);
    assert!(profile.resolution_failures.is_empty());
    assert_eq!(profile.tradition_results[2].tradition, Tradition::Vedic);
}

#[tokio::test]
async fn test_chinese_animal_repeats_after_12_years() {
    let a = calculate_cosmic_profile(&BirthMoment::from_ymd(1990, 3, 21).unwrap())
        .await
        .unwrap();
    let b = calculate_cosmic_profile(&BirthMoment::from_ymd(2002, 3, 21).unwrap())
        .await
        .unwrap();

    assert_eq!(a.tradition_results[1].sign, b.tradition_results[1].sign);
}

#[tokio::test]
async fn test_chinese_animal_and_element_repeat_after_60_years() {
    // the stem element cycles every 10 years, so the full pair needs 60
    let a = calculate_cosmic_profile(&BirthMoment::from_ymd(1990, 3, 21).unwrap())
        .await
        .unwrap();
    let b = calculate_cosmic_profile(&BirthMoment::from_ymd(2050, 3, 21).unwrap())
        .await
        .unwrap();

    assert_eq!(a.tradition_results[1].sign, b.tradition_results[1].sign);
    assert_eq!(a.tradition_results[1].element, b.tradition_results[1].element);
}

#[tokio::test]
async fn test_260_days_later_reproduces_tzolkin_position() {
    let reference = calculate_cosmic_profile(&BirthMoment::from_ymd(1990, 3, 21).unwrap())
        .await
        .unwrap();
    let later = calculate_cosmic_profile(&BirthMoment::from_ymd(1990, 12, 6).unwrap())
        .await
        .unwrap();

    for index in [2usize, 3] {
        assert_eq!(
            reference.tradition_results[index].sign,
            later.tradition_results[index].sign
        );
        assert_eq!(
            reference.tradition_results[index].attributes.get("tone"),
            later.tradition_results[index].attributes.get("tone")
        );
    }
}

#[tokio::test]
async fn test_profile_calculation_is_deterministic() {
    let moment = BirthMoment::from_ymd(1988, 8, 8)
        .unwrap()
        .with_time(6, 45)
        .unwrap()
        .with_location(19.43, -99.13, Some("Mexico City".to_string()));

    let engine = CosmicEngine::new();
    let a = engine.calculate(&moment).await.unwrap();
    let b = engine.calculate(&moment).await.unwrap();

    assert_eq!(a, b);
}

#[tokio::test]
async fn test_profile_serializes_with_lowercase_tradition_tags() {
    let moment = BirthMoment::from_ymd(1990, 3, 21).unwrap();
    let profile = calculate_cosmic_profile(&moment).await.unwrap();

    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["tradition_results"][0]["tradition"], "western");
    assert_eq!(json["resolution_failures"][0]["tradition"], "vedic");
    assert_eq!(json["cosmic_signature"]["primary_element"], "fire");
}

#[cfg(feature = "cli")]
#[tokio::test]
async fn test_profile_can_be_persisted_through_local_storage() {
    use star_cosmic::core::ProfileStore;
    use star_cosmic::LocalStorage;

    let moment = BirthMoment::from_ymd(1990, 3, 21).unwrap();
    let profile = calculate_cosmic_profile(&moment).await.unwrap();
    let json = serde_json::to_string_pretty(&profile).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
    storage
        .write_file("cosmic_profile.json", json.as_bytes())
        .await
        .unwrap();

    let written = std::fs::read_to_string(dir.path().join("cosmic_profile.json")).unwrap();
    let parsed: star_cosmic::CosmicProfile = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, profile);
}
