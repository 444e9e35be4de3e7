//! The Golden Dawn tarot deck.
//!
//! Builds the full 78-card deck: 22 major arcana with their Hebrew letters,
//! Tree of Life paths, and astrological correspondences, plus four suits of
//! fourteen cards each. Pip cards (two through ten) carry their traditional
//! Golden Dawn "Lord of ..." titles; court cards carry their sub-element
//! attribution (e.g. the Queen of Cups is Water of Water).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four minor arcana suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Wands => "Wands",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        };
        f.write_str(name)
    }
}

/// Elemental attribution of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Air => "Air",
            Element::Earth => "Earth",
        };
        f.write_str(name)
    }
}

/// A single tarot card with its Golden Dawn attributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub number: Option<u8>,
    pub suit: Option<Suit>,
    pub element: Element,
    pub meaning_upright: String,
    pub meaning_reversed: String,
    pub golden_dawn_correspondence: String,
    pub hebrew_letter: Option<String>,
    pub astrological_correspondence: Option<String>,
    pub tree_of_life_path: Option<u8>,
}

/// The full 78-card deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the complete Golden Dawn deck.
    pub fn golden_dawn() -> Self {
        let mut cards = major_arcana();
        for suit in [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles] {
            cards.extend(minor_arcana(suit));
        }
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Sephiroth of the Tree of Life, indexed by number minus one. Pip cards map
/// onto them directly (ace = Kether ... ten = Malkuth).
const SEPHIROTH: [&str; 10] = [
    "Kether",
    "Chokmah",
    "Binah",
    "Chesed",
    "Geburah",
    "Tiphareth",
    "Netzach",
    "Hod",
    "Yesod",
    "Malkuth",
];

/// Golden Dawn titles for the pip cards two through ten of a suit.
fn pip_titles(suit: Suit) -> [&'static str; 9] {
    match suit {
        Suit::Wands => [
            "Dominion",
            "Established Strength",
            "Perfected Work",
            "Strife",
            "Victory",
            "Valour",
            "Swiftness",
            "Great Strength",
            "Oppression",
        ],
        Suit::Cups => [
            "Love",
            "Abundance",
            "Blended Pleasure",
            "Loss in Pleasure",
            "Pleasure",
            "Illusionary Success",
            "Abandoned Success",
            "Material Happiness",
            "Perfected Success",
        ],
        Suit::Swords => [
            "Peace Restored",
            "Sorrow",
            "Rest from Strife",
            "Defeat",
            "Earned Success",
            "Unstable Effort",
            "Shortened Force",
            "Despair and Cruelty",
            "Ruin",
        ],
        Suit::Pentacles => [
            "Harmonious Change",
            "Material Works",
            "Earthly Power",
            "Material Trouble",
            "Material Success",
            "Success Unfulfilled",
            "Prudence",
            "Material Gain",
            "Wealth",
        ],
    }
}

/// Upright/reversed meaning cores for pips two through ten. Combined with the
/// suit theme to produce the card meaning.
const PIP_MEANINGS: [(&str, &str); 9] = [
    (
        "Balance, partnership, a choice taking shape",
        "Imbalance, indecision, misaligned priorities",
    ),
    (
        "Growth, collaboration, first results",
        "Delays, friction, scattered effort",
    ),
    (
        "Stability, consolidation, a pause to secure gains",
        "Stagnation, complacency, holding on too tightly",
    ),
    (
        "Conflict, loss, an unavoidable test",
        "Recovery, lessons absorbed, conflict subsiding",
    ),
    (
        "Harmony, progress, support freely given",
        "Unequal exchange, nostalgia, strings attached",
    ),
    (
        "Assessment, perseverance, defending a position",
        "Overextension, hesitation, misplaced effort",
    ),
    (
        "Movement, skill, concentrated effort",
        "Haste, restriction, effort without direction",
    ),
    (
        "Fruition, resilience, strength near the goal",
        "Fatigue, anxiety, gains won at a cost",
    ),
    (
        "Culmination, completion, the full weight of the cycle",
        "Burdens released, an ending resisted, overload",
    ),
];

/// Court ranks with their sub-element and meaning templates.
const COURTS: [(&str, Element, &str, &str); 4] = [
    (
        "King",
        Element::Fire,
        "Mastery, mature authority, decisive command of",
        "Domineering control, rigidity, misuse of",
    ),
    (
        "Queen",
        Element::Water,
        "Nurturing insight, receptive wisdom, steady care in",
        "Insecurity, moodiness, neglect of",
    ),
    (
        "Prince",
        Element::Air,
        "Energetic pursuit, swift movement, bold action in",
        "Impulsiveness, scattered drive, haste in",
    ),
    (
        "Princess",
        Element::Earth,
        "Curiosity, study, a fresh venture in",
        "Immaturity, unfocused potential, false starts in",
    ),
];

fn suit_element(suit: Suit) -> Element {
    match suit {
        Suit::Wands => Element::Fire,
        Suit::Cups => Element::Water,
        Suit::Swords => Element::Air,
        Suit::Pentacles => Element::Earth,
    }
}

/// Sphere of life each suit speaks to, woven into generated minor meanings.
fn suit_theme(suit: Suit) -> &'static str {
    match suit {
        Suit::Wands => "will, creativity, and enterprise",
        Suit::Cups => "emotion, relationship, and intuition",
        Suit::Swords => "intellect, conflict, and truth",
        Suit::Pentacles => "material affairs, work, and the body",
    }
}

fn ace_meanings(suit: Suit) -> (&'static str, &'static str) {
    match suit {
        Suit::Wands => (
            "Inspiration, new opportunities, growth",
            "Lack of energy, lack of passion, boredom",
        ),
        Suit::Cups => (
            "Love, new relationships, compassion, creativity",
            "Self-love, intuition, repressed emotions",
        ),
        Suit::Swords => (
            "New ideas, mental clarity, breakthrough",
            "Inner clarity, re-thinking an idea, clouded judgment",
        ),
        Suit::Pentacles => (
            "New financial opportunity, manifestation, abundance",
            "Lost opportunity, lack of planning, poor financial decisions",
        ),
    }
}

fn rank_name(rank: u8) -> &'static str {
    match rank {
        2 => "Two",
        3 => "Three",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        10 => "Ten",
        _ => unreachable!("pip ranks run from two to ten"),
    }
}

#[allow(clippy::too_many_arguments)]
fn major(
    name: &str,
    number: u8,
    element: Element,
    upright: &str,
    reversed: &str,
    correspondence: &str,
    hebrew_letter: &str,
    path: u8,
    astro: &str,
) -> Card {
    Card {
        name: name.to_string(),
        number: Some(number),
        suit: None,
        element,
        meaning_upright: upright.to_string(),
        meaning_reversed: reversed.to_string(),
        golden_dawn_correspondence: correspondence.to_string(),
        hebrew_letter: Some(hebrew_letter.to_string()),
        astrological_correspondence: Some(astro.to_string()),
        tree_of_life_path: Some(path),
    }
}

/// The 22 trumps with their paths on the Tree of Life (11 through 32).
fn major_arcana() -> Vec<Card> {
    vec![
        major(
            "The Fool",
            0,
            Element::Air,
            "New beginnings, innocence, spontaneity, free spirit",
            "Recklessness, taken advantage of, inconsistency, foolishness",
            "Path of Aleph, Air element, Uranus",
            "Aleph",
            11,
            "Uranus",
        ),
        major(
            "The Magician",
            1,
            Element::Air,
            "Manifestation, resourcefulness, power, inspired action",
            "Manipulation, poor planning, untapped talents",
            "Path of Beth, Mercury, Magus of Power",
            "Beth",
            12,
            "Mercury",
        ),
        major(
            "The High Priestess",
            2,
            Element::Water,
            "Intuition, sacred knowledge, divine feminine, subconscious mind",
            "Secrets, disconnected from intuition, withdrawal",
            "Path of Gimel, Moon, Priestess of Silver Star",
            "Gimel",
            13,
            "Moon",
        ),
        major(
            "The Empress",
            3,
            Element::Earth,
            "Femininity, beauty, nature, nurturing, abundance",
            "Creative block, dependence on others, smothering",
            "Path of Daleth, Venus, Daughter of Mighty Ones",
            "Daleth",
            14,
            "Venus",
        ),
        major(
            "The Emperor",
            4,
            Element::Fire,
            "Authority, establishment, structure, father figure",
            "Domination, excessive control, lack of discipline",
            "Path of Heh, Aries, Son of Morning",
            "Heh",
            15,
            "Aries",
        ),
        major(
            "The Hierophant",
            5,
            Element::Earth,
            "Spiritual wisdom, religious beliefs, conformity, tradition",
            "Personal beliefs, freedom, challenging the status quo",
            "Path of Vav, Taurus, Magus of Eternal",
            "Vav",
            16,
            "Taurus",
        ),
        major(
            "The Lovers",
            6,
            Element::Air,
            "Love, harmony, relationships, values alignment",
            "Disharmony, imbalance, misaligned values",
            "Path of Zayin, Gemini, Children of Voice",
            "Zayin",
            17,
            "Gemini",
        ),
        major(
            "The Chariot",
            7,
            Element::Water,
            "Control, willpower, success, determination",
            "Self-discipline, opposition, lack of direction",
            "Path of Cheth, Cancer, Child of Powers of Waters",
            "Cheth",
            18,
            "Cancer",
        ),
        major(
            "Strength",
            8,
            Element::Fire,
            "Strength, courage, persuasion, influence, compassion",
            "Self-doubt, low energy, raw emotion",
            "Path of Teth, Leo, Daughter of Flaming Sword",
            "Teth",
            19,
            "Leo",
        ),
        major(
            "The Hermit",
            9,
            Element::Earth,
            "Soul searching, introspection, inner guidance",
            "Isolation, loneliness, withdrawal",
            "Path of Yod, Virgo, Magus of Voice of Light",
            "Yod",
            20,
            "Virgo",
        ),
        major(
            "Wheel of Fortune",
            10,
            Element::Fire,
            "Good luck, karma, life cycles, destiny, turning point",
            "Bad luck, lack of control, clinging to control",
            "Path of Kaph, Jupiter, Lord of Forces of Life",
            "Kaph",
            21,
            "Jupiter",
        ),
        major(
            "Justice",
            11,
            Element::Air,
            "Justice, fairness, truth, cause and effect, law",
            "Unfairness, lack of accountability, dishonesty",
            "Path of Lamed, Libra, Daughter of Lords of Truth",
            "Lamed",
            22,
            "Libra",
        ),
        major(
            "The Hanged Man",
            12,
            Element::Water,
            "Suspension, restriction, letting go, sacrifice",
            "Martyrdom, indecision, delay",
            "Path of Mem, Water, Spirit of Mighty Waters",
            "Mem",
            23,
            "Neptune",
        ),
        major(
            "Death",
            13,
            Element::Water,
            "Endings, transformation, transition, release",
            "Resistance to change, stagnation, decay held onto",
            "Path of Nun, Scorpio, Child of Great Transformers",
            "Nun",
            24,
            "Scorpio",
        ),
        major(
            "Temperance",
            14,
            Element::Fire,
            "Balance, moderation, patience, purpose",
            "Imbalance, excess, lack of long-term vision",
            "Path of Samekh, Sagittarius, Daughter of Reconcilers",
            "Samekh",
            25,
            "Sagittarius",
        ),
        major(
            "The Devil",
            15,
            Element::Earth,
            "Shadow self, attachment, addiction, restriction",
            "Releasing limiting beliefs, detachment, reclaimed power",
            "Path of Ayin, Capricorn, Lord of Gates of Matter",
            "Ayin",
            26,
            "Capricorn",
        ),
        major(
            "The Tower",
            16,
            Element::Fire,
            "Sudden change, upheaval, revelation, awakening",
            "Fear of change, disaster averted, delayed collapse",
            "Path of Peh, Mars, Lord of Hosts of the Mighty",
            "Peh",
            27,
            "Mars",
        ),
        major(
            "The Star",
            17,
            Element::Air,
            "Hope, faith, renewal, inspiration",
            "Despair, disconnection, faithlessness",
            "Path of Tzaddi, Aquarius, Daughter of Firmament",
            "Tzaddi",
            28,
            "Aquarius",
        ),
        major(
            "The Moon",
            18,
            Element::Water,
            "Illusion, intuition, the subconscious, dreams",
            "Confusion lifting, fear released, repressed emotion",
            "Path of Qoph, Pisces, Ruler of Flux and Reflux",
            "Qoph",
            29,
            "Pisces",
        ),
        major(
            "The Sun",
            19,
            Element::Fire,
            "Success, joy, vitality, enlightenment",
            "Temporary gloom, dimmed optimism, the inner child",
            "Path of Resh, Sun, Lord of Fire of the World",
            "Resh",
            30,
            "Sun",
        ),
        major(
            "Judgement",
            20,
            Element::Fire,
            "Rebirth, inner calling, absolution, reckoning",
            "Self-doubt, refusal of the call, harsh judgment",
            "Path of Shin, Fire element, Spirit of Primal Fire",
            "Shin",
            31,
            "Pluto",
        ),
        major(
            "The World",
            21,
            Element::Earth,
            "Completion, accomplishment, integration, travel",
            "Incompletion, delays, loose ends",
            "Path of Tau, Saturn, Great One of Night of Time",
            "Tau",
            32,
            "Saturn",
        ),
    ]
}

/// One suit of fourteen: ace, pips two through ten, and four court cards.
fn minor_arcana(suit: Suit) -> Vec<Card> {
    let element = suit_element(suit);
    let theme = suit_theme(suit);
    let mut cards = Vec::with_capacity(14);

    let (ace_upright, ace_reversed) = ace_meanings(suit);
    cards.push(Card {
        name: format!("Ace of {suit}"),
        number: Some(1),
        suit: Some(suit),
        element,
        meaning_upright: ace_upright.to_string(),
        meaning_reversed: ace_reversed.to_string(),
        golden_dawn_correspondence: format!("Root of {element}, Kether in {element}"),
        hebrew_letter: None,
        astrological_correspondence: None,
        tree_of_life_path: Some(1),
    });

    let titles = pip_titles(suit);

    for rank in 2..=10u8 {
        let idx = (rank - 2) as usize;
        let (upright, reversed) = PIP_MEANINGS[idx];
        let sephira = SEPHIROTH[(rank - 1) as usize];
        cards.push(Card {
            name: format!("{} of {suit}", rank_name(rank)),
            number: Some(rank),
            suit: Some(suit),
            element,
            meaning_upright: format!("{upright}, expressed through {theme}"),
            meaning_reversed: format!("{reversed}, expressed through {theme}"),
            golden_dawn_correspondence: format!(
                "Lord of {}, {sephira} in {element}",
                titles[idx]
            ),
            hebrew_letter: None,
            astrological_correspondence: None,
            tree_of_life_path: Some(rank),
        });
    }

    for (rank, sub_element, upright, reversed) in COURTS {
        cards.push(Card {
            name: format!("{rank} of {suit}"),
            number: None,
            suit: Some(suit),
            element,
            meaning_upright: format!("{upright} {theme}"),
            meaning_reversed: format!("{reversed} {theme}"),
            golden_dawn_correspondence: format!("{sub_element} of {element}"),
            hebrew_letter: None,
            astrological_correspondence: None,
            tree_of_life_path: None,
        });
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_has_78_cards() {
        let deck = Deck::golden_dawn();
        assert_eq!(deck.len(), 78);
    }

    #[test]
    fn deck_has_22_major_arcana() {
        let deck = Deck::golden_dawn();
        let majors = deck.cards().iter().filter(|c| c.suit.is_none()).count();
        assert_eq!(majors, 22);
    }

    #[test]
    fn each_suit_has_14_cards() {
        let deck = Deck::golden_dawn();
        for suit in [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles] {
            let count = deck.cards().iter().filter(|c| c.suit == Some(suit)).count();
            assert_eq!(count, 14, "{suit} should have 14 cards");
        }
    }

    #[test]
    fn card_names_are_unique() {
        let deck = Deck::golden_dawn();
        let names: HashSet<&str> = deck.cards().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), deck.len());
    }

    #[test]
    fn major_arcana_paths_cover_11_through_32() {
        let deck = Deck::golden_dawn();
        let paths: HashSet<u8> = deck
            .cards()
            .iter()
            .filter(|c| c.suit.is_none())
            .filter_map(|c| c.tree_of_life_path)
            .collect();
        assert_eq!(paths, (11..=32).collect::<HashSet<u8>>());
    }

    #[test]
    fn pips_carry_golden_dawn_titles() {
        let deck = Deck::golden_dawn();
        let two_of_wands = deck
            .cards()
            .iter()
            .find(|c| c.name == "Two of Wands")
            .unwrap();
        assert_eq!(
            two_of_wands.golden_dawn_correspondence,
            "Lord of Dominion, Chokmah in Fire"
        );
        assert_eq!(two_of_wands.tree_of_life_path, Some(2));
    }

    #[test]
    fn court_cards_carry_sub_elements() {
        let deck = Deck::golden_dawn();
        let queen_of_cups = deck
            .cards()
            .iter()
            .find(|c| c.name == "Queen of Cups")
            .unwrap();
        assert_eq!(queen_of_cups.golden_dawn_correspondence, "Water of Water");
        assert_eq!(queen_of_cups.number, None);
    }
}
