use crate::core::tables::{element_compatibility, TONES};
use crate::domain::model::{CosmicSignature, Element, Tradition, TraditionResult};
use crate::utils::error::{CosmicError, Result};
use std::collections::HashMap;

/// Combine the per-tradition results into a single cosmic signature.
///
/// Element tally over every result that exposes one; primary is the highest
/// frequency (ties broken by the fixed element priority), secondary the
/// second highest, or the primary itself when only one element is present.
/// The galactic tone comes from the Mayan result, falling back to the Aztec
/// one. Declines with `InsufficientData` instead of fabricating values.
pub fn synthesize(results: &[TraditionResult]) -> Result<CosmicSignature> {
    let mut counts: HashMap<Element, usize> = HashMap::new();
    for result in results {
        if let Some(element) = result.element {
            *counts.entry(element).or_insert(0) += 1;
        }
    }

    if counts.is_empty() {
        return Err(CosmicError::InsufficientData {
            message: "no resolved tradition exposes an element".to_string(),
        });
    }

    let mut ranked: Vec<(Element, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| a.0.priority().cmp(&b.0.priority()))
    });

    let primary = ranked[0].0;
    let secondary = ranked.get(1).map(|(e, _)| *e).unwrap_or(primary);

    let (tone, tone_name) = tone_source(results)?;

    let synthesis = format!(
        "{} element dominant, harmonized by {}, under Tone {}: {}",
        primary, secondary, tone, tone_name
    );

    Ok(CosmicSignature {
        primary_element: primary,
        secondary_element: secondary,
        tone,
        tone_name,
        harmony: element_compatibility(primary, secondary),
        synthesis,
    })
}

/// 音調來源：優先馬雅，其次阿茲特克
fn tone_source(results: &[TraditionResult]) -> Result<(u8, String)> {
    for tradition in [Tradition::Mayan, Tradition::Aztec] {
        let tone = results
            .iter()
            .find(|r| r.tradition == tradition)
            .and_then(|r| r.attributes.get("tone"))
            .and_then(|v| v.as_u64());

        if let Some(number @ 1..=13) = tone {
            let name = TONES[(number - 1) as usize].name.to_string();
            return Ok((number as u8, name));
        }
    }

    Err(CosmicError::InsufficientData {
        message: "neither the mayan nor the aztec tradition produced a galactic tone".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn result(tradition: Tradition, element: Option<Element>, tone: Option<u8>) -> TraditionResult {
        let mut attributes = HashMap::new();
        if let Some(t) = tone {
            attributes.insert("tone".to_string(), json!(t));
        }
        TraditionResult {
            tradition,
            sign: "Test".to_string(),
            element,
            attributes,
            description: String::new(),
        }
    }

    #[test]
    fn test_primary_is_highest_frequency() {
        let results = vec![
            result(Tradition::Western, Some(Element::Water), None),
            result(Tradition::Chinese, Some(Element::Water), None),
            result(Tradition::Mayan, Some(Element::Fire), Some(5)),
        ];
        let signature = synthesize(&results).unwrap();
        assert_eq!(signature.primary_element, Element::Water);
        assert_eq!(signature.secondary_element, Element::Fire);
    }

    #[test]
    fn test_tie_breaks_by_fixed_priority() {
        // one vote each: fire outranks water
        let results = vec![
            result(Tradition::Western, Some(Element::Water), None),
            result(Tradition::Mayan, Some(Element::Fire), Some(1)),
        ];
        let signature = synthesize(&results).unwrap();
        assert_eq!(signature.primary_element, Element::Fire);
        assert_eq!(signature.secondary_element, Element::Water);
    }

    #[test]
    fn test_single_element_becomes_both_primary_and_secondary() {
        let results = vec![result(Tradition::Mayan, Some(Element::Air), Some(7))];
        let signature = synthesize(&results).unwrap();
        assert_eq!(signature.primary_element, Element::Air);
        assert_eq!(signature.secondary_element, Element::Air);
        assert_eq!(signature.harmony, 80);
    }

    #[test]
    fn test_synthesis_string_is_byte_stable() {
        let results = vec![
            result(Tradition::Western, Some(Element::Fire), None),
            result(Tradition::Mayan, Some(Element::Fire), Some(1)),
            result(Tradition::Chinese, Some(Element::Metal), None),
        ];
        let a = synthesize(&results).unwrap();
        let b = synthesize(&results).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.synthesis,
            "Fire element dominant, harmonized by Metal, under Tone 1: Magnetic"
        );
    }

    #[test]
    fn test_empty_input_fails_with_insufficient_data() {
        let err = synthesize(&[]).unwrap_err();
        assert!(matches!(err, CosmicError::InsufficientData { .. }));
    }

    #[test]
    fn test_missing_tone_fails_instead_of_fabricating() {
        let results = vec![result(Tradition::Western, Some(Element::Fire), None)];
        let err = synthesize(&results).unwrap_err();
        assert!(matches!(err, CosmicError::InsufficientData { .. }));
    }

    #[test]
    fn test_tone_falls_back_to_aztec_when_mayan_missing() {
        let results = vec![
            result(Tradition::Western, Some(Element::Earth), None),
            result(Tradition::Aztec, Some(Element::Earth), Some(9)),
        ];
        let signature = synthesize(&results).unwrap();
        assert_eq!(signature.tone, 9);
        assert_eq!(signature.tone_name, "Solar");
    }

    #[test]
    fn test_out_of_range_tone_attribute_is_ignored() {
        let results = vec![
            result(Tradition::Mayan, Some(Element::Fire), Some(0)),
            result(Tradition::Aztec, Some(Element::Fire), Some(13)),
        ];
        let signature = synthesize(&results).unwrap();
        assert_eq!(signature.tone, 13);
    }
}
