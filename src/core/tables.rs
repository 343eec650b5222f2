//! 所有傳統共用的靜態知識表。單一出處，載入後不再變動。

use crate::domain::model::{
    ChineseAnimalRecord, DaySignRecord, Element, RashiRecord, ToneRecord, WesternSignRecord,
};

/// 13 galactic tones, indexed by `tone_number - 1`.
pub static TONES: [ToneRecord; 13] = [
    ToneRecord {
        number: 1,
        name: "Magnetic",
        energy: "Unify",
        meaning: "Attracts purpose and sets the cycle in motion",
        qualities: &["purposeful", "attracting", "initiating"],
        challenges: &["scattered focus"],
        color: "Red",
        direction: "East",
    },
    ToneRecord {
        number: 2,
        name: "Lunar",
        energy: "Polarize",
        meaning: "Stabilizes through challenge and duality",
        qualities: &["balancing", "discerning"],
        challenges: &["indecision", "inner conflict"],
        color: "White",
        direction: "North",
    },
    ToneRecord {
        number: 3,
        name: "Electric",
        energy: "Activate",
        meaning: "Bonds energies into service and movement",
        qualities: &["dynamic", "connecting"],
        challenges: &["restlessness"],
        color: "Blue",
        direction: "West",
    },
    ToneRecord {
        number: 4,
        name: "Self-Existing",
        energy: "Define",
        meaning: "Gives measure and form to what was set in motion",
        qualities: &["structured", "grounded"],
        challenges: &["rigidity"],
        color: "Yellow",
        direction: "South",
    },
    ToneRecord {
        number: 5,
        name: "Overtone",
        energy: "Empower",
        meaning: "Commands radiance and gathers resources",
        qualities: &["commanding", "radiant"],
        challenges: &["domineering"],
        color: "Red",
        direction: "East",
    },
    ToneRecord {
        number: 6,
        name: "Rhythmic",
        energy: "Organize",
        meaning: "Balances unequal parts into a working whole",
        qualities: &["organizing", "steady"],
        challenges: &["monotony"],
        color: "White",
        direction: "North",
    },
    ToneRecord {
        number: 7,
        name: "Resonant",
        energy: "Channel",
        meaning: "Attunes the cycle and inspires through resonance",
        qualities: &["attuned", "mystical"],
        challenges: &["over-sensitivity"],
        color: "Blue",
        direction: "West",
    },
    ToneRecord {
        number: 8,
        name: "Galactic",
        energy: "Harmonize",
        meaning: "Models integrity between intention and action",
        qualities: &["harmonious", "principled"],
        challenges: &["self-righteousness"],
        color: "Yellow",
        direction: "South",
    },
    ToneRecord {
        number: 9,
        name: "Solar",
        energy: "Pulse",
        meaning: "Realizes intention with a larger momentum",
        qualities: &["intentional", "persevering"],
        challenges: &["impatience"],
        color: "Red",
        direction: "East",
    },
    ToneRecord {
        number: 10,
        name: "Planetary",
        energy: "Perfect",
        meaning: "Manifests what the cycle set out to produce",
        qualities: &["productive", "manifesting"],
        challenges: &["perfectionism"],
        color: "White",
        direction: "North",
    },
    ToneRecord {
        number: 11,
        name: "Spectral",
        energy: "Dissolve",
        meaning: "Releases and liberates what no longer serves",
        qualities: &["liberating", "releasing"],
        challenges: &["disorder"],
        color: "Blue",
        direction: "West",
    },
    ToneRecord {
        number: 12,
        name: "Crystal",
        energy: "Dedicate",
        meaning: "Universalizes the lesson through cooperation",
        qualities: &["cooperative", "clarifying"],
        challenges: &["over-commitment"],
        color: "Yellow",
        direction: "South",
    },
    ToneRecord {
        number: 13,
        name: "Cosmic",
        energy: "Endure",
        meaning: "Transcends the cycle and carries it into the next",
        qualities: &["enduring", "transcendent"],
        challenges: &["dispersion"],
        color: "Red",
        direction: "East",
    },
];

// 日符元素沿 4 色輪循環：紅/火、白/風、藍/水、黃/土
const DAY_SIGN_ELEMENT_WHEEL: [Element; 4] =
    [Element::Fire, Element::Air, Element::Water, Element::Earth];

const QUALITY_GROUPS: [&str; 4] = ["initiator", "refiner", "transformer", "ripener"];

pub fn day_sign_element(index: u8) -> Element {
    DAY_SIGN_ELEMENT_WHEEL[(index as usize) % 4]
}

/// 20 Tzolkin day-signs (Yucatec names), indexed by `day_index mod 20`.
pub static MAYAN_DAY_SIGNS: [DaySignRecord; 20] = [
    DaySignRecord { index: 0, name: "Imix", traits: "Primal nurturer, source of new beginnings", element: Element::Fire, quality_group: "initiator" },
    DaySignRecord { index: 1, name: "Ik", traits: "Breath and spirit, carrier of communication", element: Element::Air, quality_group: "refiner" },
    DaySignRecord { index: 2, name: "Akbal", traits: "Night and dream, keeper of the inner temple", element: Element::Water, quality_group: "transformer" },
    DaySignRecord { index: 3, name: "Kan", traits: "Seed and abundance, ripening potential", element: Element::Earth, quality_group: "ripener" },
    DaySignRecord { index: 4, name: "Chicchan", traits: "Serpent life-force, instinct and vitality", element: Element::Fire, quality_group: "initiator" },
    DaySignRecord { index: 5, name: "Cimi", traits: "Transformer, surrender and release", element: Element::Air, quality_group: "refiner" },
    DaySignRecord { index: 6, name: "Manik", traits: "Healing hand, accomplishment through skill", element: Element::Water, quality_group: "transformer" },
    DaySignRecord { index: 7, name: "Lamat", traits: "Star of harmony, multiplier of abundance", element: Element::Earth, quality_group: "ripener" },
    DaySignRecord { index: 8, name: "Muluc", traits: "Offering of water, emotional remembrance", element: Element::Fire, quality_group: "initiator" },
    DaySignRecord { index: 9, name: "Oc", traits: "Loyal companion, heart-centered guidance", element: Element::Air, quality_group: "refiner" },
    DaySignRecord { index: 10, name: "Chuen", traits: "Artisan monkey, weaver of play and craft", element: Element::Water, quality_group: "transformer" },
    DaySignRecord { index: 11, name: "Eb", traits: "Road of destiny, humble service", element: Element::Earth, quality_group: "ripener" },
    DaySignRecord { index: 12, name: "Ben", traits: "Reed pillar, courage that bridges worlds", element: Element::Fire, quality_group: "initiator" },
    DaySignRecord { index: 13, name: "Ix", traits: "Jaguar shaman, earth magic and timing", element: Element::Air, quality_group: "refiner" },
    DaySignRecord { index: 14, name: "Men", traits: "Eagle vision, hope carried on high", element: Element::Water, quality_group: "transformer" },
    DaySignRecord { index: 15, name: "Cib", traits: "Ancestral wisdom, inner fearlessness", element: Element::Earth, quality_group: "ripener" },
    DaySignRecord { index: 16, name: "Caban", traits: "Earth movement, evolution and synchronicity", element: Element::Fire, quality_group: "initiator" },
    DaySignRecord { index: 17, name: "Etznab", traits: "Flint mirror, clarity that cuts illusion", element: Element::Air, quality_group: "refiner" },
    DaySignRecord { index: 18, name: "Cauac", traits: "Storm of renewal, purification", element: Element::Water, quality_group: "transformer" },
    DaySignRecord { index: 19, name: "Ahau", traits: "Solar lord, enlightened completion", element: Element::Earth, quality_group: "ripener" },
];

/// 20 Tonalpohualli day-signs (Nahuatl names), same cycle arithmetic as the
/// Tzolkin table above.
pub static AZTEC_DAY_SIGNS: [DaySignRecord; 20] = [
    DaySignRecord { index: 0, name: "Cipactli", traits: "Crocodile of origins, fertile beginnings", element: Element::Fire, quality_group: "initiator" },
    DaySignRecord { index: 1, name: "Ehecatl", traits: "Wind of change, breath of Quetzalcoatl", element: Element::Air, quality_group: "refiner" },
    DaySignRecord { index: 2, name: "Calli", traits: "House of shelter, inward security", element: Element::Water, quality_group: "transformer" },
    DaySignRecord { index: 3, name: "Cuetzpalin", traits: "Lizard of regeneration, quiet persistence", element: Element::Earth, quality_group: "ripener" },
    DaySignRecord { index: 4, name: "Coatl", traits: "Serpent of renewal, kundalini fire", element: Element::Fire, quality_group: "initiator" },
    DaySignRecord { index: 5, name: "Miquiztli", traits: "Death that clears the path, transformation", element: Element::Air, quality_group: "refiner" },
    DaySignRecord { index: 6, name: "Mazatl", traits: "Deer of gentleness, intuition in the wild", element: Element::Water, quality_group: "transformer" },
    DaySignRecord { index: 7, name: "Tochtli", traits: "Rabbit of plenty, lunar abundance", element: Element::Earth, quality_group: "ripener" },
    DaySignRecord { index: 8, name: "Atl", traits: "Water of purification, emotional depth", element: Element::Fire, quality_group: "initiator" },
    DaySignRecord { index: 9, name: "Itzcuintli", traits: "Dog of loyalty, guide through the underworld", element: Element::Air, quality_group: "refiner" },
    DaySignRecord { index: 10, name: "Ozomahtli", traits: "Monkey of artistry, celebration and wit", element: Element::Water, quality_group: "transformer" },
    DaySignRecord { index: 11, name: "Malinalli", traits: "Grass that bends and endures, tenacity", element: Element::Earth, quality_group: "ripener" },
    DaySignRecord { index: 12, name: "Acatl", traits: "Reed of authority, upright purpose", element: Element::Fire, quality_group: "initiator" },
    DaySignRecord { index: 13, name: "Ocelotl", traits: "Jaguar warrior, courage in darkness", element: Element::Air, quality_group: "refiner" },
    DaySignRecord { index: 14, name: "Cuauhtli", traits: "Eagle of ascent, solar willpower", element: Element::Water, quality_group: "transformer" },
    DaySignRecord { index: 15, name: "Cozcacuauhtli", traits: "Vulture of wisdom, long life earned", element: Element::Earth, quality_group: "ripener" },
    DaySignRecord { index: 16, name: "Ollin", traits: "Movement of the sun, earthquake of change", element: Element::Fire, quality_group: "initiator" },
    DaySignRecord { index: 17, name: "Tecpatl", traits: "Flint blade, sacrifice and truth", element: Element::Air, quality_group: "refiner" },
    DaySignRecord { index: 18, name: "Quiahuitl", traits: "Rain of blessing, sudden renewal", element: Element::Water, quality_group: "transformer" },
    DaySignRecord { index: 19, name: "Xochitl", traits: "Flower of completion, beauty and art", element: Element::Earth, quality_group: "ripener" },
];

/// 西洋 12 星座，依起始日排序（年初為 Capricorn 尾段）
pub static WESTERN_SIGNS: [WesternSignRecord; 12] = [
    WesternSignRecord { name: "Aquarius", start_month: 1, start_day: 20, element: Element::Air, modality: "fixed", ruling_planet: "Uranus" },
    WesternSignRecord { name: "Pisces", start_month: 2, start_day: 19, element: Element::Water, modality: "mutable", ruling_planet: "Neptune" },
    WesternSignRecord { name: "Aries", start_month: 3, start_day: 21, element: Element::Fire, modality: "cardinal", ruling_planet: "Mars" },
    WesternSignRecord { name: "Taurus", start_month: 4, start_day: 20, element: Element::Earth, modality: "fixed", ruling_planet: "Venus" },
    WesternSignRecord { name: "Gemini", start_month: 5, start_day: 21, element: Element::Air, modality: "mutable", ruling_planet: "Mercury" },
    WesternSignRecord { name: "Cancer", start_month: 6, start_day: 21, element: Element::Water, modality: "cardinal", ruling_planet: "Moon" },
    WesternSignRecord { name: "Leo", start_month: 7, start_day: 23, element: Element::Fire, modality: "fixed", ruling_planet: "Sun" },
    WesternSignRecord { name: "Virgo", start_month: 8, start_day: 23, element: Element::Earth, modality: "mutable", ruling_planet: "Mercury" },
    WesternSignRecord { name: "Libra", start_month: 9, start_day: 23, element: Element::Air, modality: "cardinal", ruling_planet: "Venus" },
    WesternSignRecord { name: "Scorpio", start_month: 10, start_day: 23, element: Element::Water, modality: "fixed", ruling_planet: "Pluto" },
    WesternSignRecord { name: "Sagittarius", start_month: 11, start_day: 22, element: Element::Fire, modality: "mutable", ruling_planet: "Jupiter" },
    WesternSignRecord { name: "Capricorn", start_month: 12, start_day: 22, element: Element::Earth, modality: "cardinal", ruling_planet: "Saturn" },
];

/// 12 年獸，`(year - reference_year) mod 12` 取索引
pub static CHINESE_ANIMALS: [ChineseAnimalRecord; 12] = [
    ChineseAnimalRecord { name: "Rat", traits: "Quick-witted, resourceful, adaptable" },
    ChineseAnimalRecord { name: "Ox", traits: "Patient, dependable, methodical" },
    ChineseAnimalRecord { name: "Tiger", traits: "Brave, competitive, magnetic" },
    ChineseAnimalRecord { name: "Rabbit", traits: "Gentle, elegant, diplomatic" },
    ChineseAnimalRecord { name: "Dragon", traits: "Confident, ambitious, charismatic" },
    ChineseAnimalRecord { name: "Snake", traits: "Wise, enigmatic, intuitive" },
    ChineseAnimalRecord { name: "Horse", traits: "Energetic, independent, warm-hearted" },
    ChineseAnimalRecord { name: "Goat", traits: "Calm, creative, sympathetic" },
    ChineseAnimalRecord { name: "Monkey", traits: "Sharp, curious, mischievous" },
    ChineseAnimalRecord { name: "Rooster", traits: "Observant, hardworking, outspoken" },
    ChineseAnimalRecord { name: "Dog", traits: "Loyal, honest, protective" },
    ChineseAnimalRecord { name: "Pig", traits: "Generous, diligent, easygoing" },
];

/// 天干五行：以年份個位數索引，每個元素連續兩年
pub static STEM_ELEMENTS: [Element; 10] = [
    Element::Metal, // years ending 0
    Element::Metal, // 1
    Element::Water, // 2
    Element::Water, // 3
    Element::Wood,  // 4
    Element::Wood,  // 5
    Element::Fire,  // 6
    Element::Fire,  // 7
    Element::Earth, // 8
    Element::Earth, // 9
];

/// 12 rashis (sidereal signs), same elemental wheel as the tropical zodiac.
pub static RASHIS: [RashiRecord; 12] = [
    RashiRecord { name: "Mesha", element: Element::Fire },
    RashiRecord { name: "Vrishabha", element: Element::Earth },
    RashiRecord { name: "Mithuna", element: Element::Air },
    RashiRecord { name: "Karka", element: Element::Water },
    RashiRecord { name: "Simha", element: Element::Fire },
    RashiRecord { name: "Kanya", element: Element::Earth },
    RashiRecord { name: "Tula", element: Element::Air },
    RashiRecord { name: "Vrishchika", element: Element::Water },
    RashiRecord { name: "Dhanu", element: Element::Fire },
    RashiRecord { name: "Makara", element: Element::Earth },
    RashiRecord { name: "Kumbha", element: Element::Air },
    RashiRecord { name: "Meena", element: Element::Water },
];

/// 27 nakshatras, each spanning 13°20' of lunar longitude.
pub static NAKSHATRAS: [&str; 27] = [
    "Ashwini", "Bharani", "Krittika", "Rohini", "Mrigashira", "Ardra",
    "Punarvasu", "Pushya", "Ashlesha", "Magha", "Purva Phalguni",
    "Uttara Phalguni", "Hasta", "Chitra", "Swati", "Vishakha", "Anuradha",
    "Jyeshtha", "Mula", "Purva Ashadha", "Uttara Ashadha", "Shravana",
    "Dhanishta", "Shatabhisha", "Purva Bhadrapada", "Uttara Bhadrapada",
    "Revati",
];

// 元素相容度矩陣，列/欄順序同 Element::priority
static ELEMENT_COMPATIBILITY: [[u8; 6]; 6] = [
    // Fire Earth Air  Water Wood Metal
    [80, 70, 90, 30, 85, 40], // Fire
    [70, 80, 45, 75, 50, 90], // Earth
    [90, 45, 80, 65, 70, 60], // Air
    [30, 75, 65, 80, 85, 75], // Water
    [85, 50, 70, 85, 80, 35], // Wood
    [40, 90, 60, 75, 35, 80], // Metal
];

/// Compatibility score (0-100) between two elements.
pub fn element_compatibility(a: Element, b: Element) -> u8 {
    ELEMENT_COMPATIBILITY[a.priority()][b.priority()]
}

pub fn quality_group(index: u8) -> &'static str {
    QUALITY_GROUPS[(index as usize) % 4]
}
