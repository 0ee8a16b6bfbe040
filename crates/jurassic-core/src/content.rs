//! Hand-authored landing page content.
//!
//! Every string here is rendered verbatim (after HTML escaping). The FAQ table is
//! shared by the visible `<details>` list and the FAQPage structured data, so the
//! two cannot drift apart.

/// In-page anchor of a content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Facts,
    Games,
    Vocabulary,
    Activities,
    Timeline,
    Faq,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Facts,
        SectionId::Games,
        SectionId::Vocabulary,
        SectionId::Activities,
        SectionId::Timeline,
        SectionId::Faq,
    ];

    /// The `id` attribute of the section element.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Facts => "facts",
            Self::Games => "games",
            Self::Vocabulary => "vocabulary",
            Self::Activities => "activities",
            Self::Timeline => "timeline",
            Self::Faq => "faq",
        }
    }

    /// The `id` of the section heading, referenced by `aria-labelledby`.
    #[must_use]
    pub fn heading_id(self) -> &'static str {
        match self {
            Self::Facts => "facts-title",
            Self::Games => "games-title",
            Self::Vocabulary => "vocab-title",
            Self::Activities => "activities-title",
            Self::Timeline => "timeline-title",
            Self::Faq => "faq-title",
        }
    }

    /// Link text in the primary navigation.
    #[must_use]
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Facts => "Dinosaur Facts",
            Self::Games => "Word Games",
            Self::Vocabulary => "Vocabulary",
            Self::Activities => "Printables",
            Self::Timeline => "Timeline",
            Self::Faq => "FAQ",
        }
    }
}

/// A titled entry: a species profile, a vocabulary term, or a timeline period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub title: &'static str,
    pub text: &'static str,
}

/// A printable activity card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printable {
    pub title: &'static str,
    pub summary: &'static str,
    pub href: &'static str,
    pub link_text: &'static str,
}

/// One frequently asked question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// The shape of a section's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBody {
    /// Cards with an `<h3>` heading.
    Profiles(&'static [Entry]),
    /// A bulleted list with an optional highlighted tip.
    Bullets {
        items: &'static [&'static str],
        tip: Option<Tip>,
    },
    /// Term/definition tiles laid out in a grid.
    Glossary {
        entries: &'static [Entry],
        columns: u8,
    },
    /// Printable activity cards.
    Printables(&'static [Printable]),
    /// Expandable question/answer pairs.
    Questions(&'static [FaqEntry]),
}

/// A labelled tip shown under a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub label: &'static str,
    pub text: &'static str,
}

/// A named, ordered region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSection {
    pub id: SectionId,
    pub heading: &'static str,
    pub intro: &'static str,
    pub body: SectionBody,
}

/// A hero call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: SectionId,
    pub primary: bool,
}

/// The hero block at the top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub heading: &'static str,
    pub lead: &'static str,
    pub actions: &'static [CallToAction],
}

/// Anchor of the hero section, also the skip-link target.
pub const HERO_ANCHOR: &str = "content";

pub const HERO: Hero = Hero {
    heading: "Jurassic Words. Dinosaur learning with word games and classroom activities",
    lead: "Explore the world of dinosaurs with friendly facts, clear science, and fun word games. \
           Build vocabulary, read short profiles, and try printable activities made for \
           classrooms and families.",
    actions: &[
        CallToAction {
            label: "Play word games",
            target: SectionId::Games,
            primary: true,
        },
        CallToAction {
            label: "Get printables",
            target: SectionId::Activities,
            primary: false,
        },
    ],
};

pub const SPECIES: &[Entry] = &[
    Entry {
        title: "Tyrannosaurus rex",
        text: "Large carnivore from the Late Cretaceous. Powerful jaws, strong legs, and keen senses.",
    },
    Entry {
        title: "Triceratops",
        text: "Herbivore with three horns and a large frill. Lived in herds and grazed on tough plants.",
    },
];

pub const GAMES: &[&str] = &[
    "Dinosaur word search with species names and fossil terms",
    "Crossword puzzles with clues from facts and timelines",
    "Vocabulary match with images and short definitions",
    "Scramble and build with themed letter tiles",
];

pub const VOCABULARY: &[Entry] = &[
    Entry {
        title: "Herbivore",
        text: "An animal that eats plants. Many dinosaurs were plant eaters.",
    },
    Entry {
        title: "Carnivore",
        text: "An animal that eats meat. Some dinosaurs hunted other animals.",
    },
    Entry {
        title: "Fossil",
        text: "The preserved remains or traces of a living thing from the past.",
    },
    Entry {
        title: "Paleontologist",
        text: "A scientist who studies fossils to learn about ancient life.",
    },
];

pub const PRINTABLES: &[Printable] = &[
    Printable {
        title: "Word search pack",
        summary: "Species names, body parts, and fossil terms with answer keys.",
        href: "/printables/word-search-pack",
        link_text: "Sample coming soon",
    },
    Printable {
        title: "Crossword mini set",
        summary: "Short clues based on facts and the timeline.",
        href: "/printables/crossword-mini",
        link_text: "Sample coming soon",
    },
];

pub const PERIODS: &[Entry] = &[
    Entry {
        title: "Triassic",
        text: "Early dinosaurs appear. Small and quick species begin to spread.",
    },
    Entry {
        title: "Jurassic",
        text: "Large plant eaters and fierce hunters thrive. Many classic species rise.",
    },
    Entry {
        title: "Cretaceous",
        text: "Great diversity across the world. Ends with a famous mass extinction.",
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Are the games free",
        answer: "Yes. Games will be free to play. Printable packs will include free samples.",
    },
    FaqEntry {
        question: "Is this site safe for classrooms",
        answer: "Yes. Content is written for young readers and teachers. No log in is required to play.",
    },
    FaqEntry {
        question: "Can I suggest words or topics",
        answer: "Suggestions are welcome after launch. You can request species, terms, or puzzle themes.",
    },
];

pub static SECTIONS: [ContentSection; 6] = [
    ContentSection {
        id: SectionId::Facts,
        heading: "Dinosaur facts for kids",
        intro: "Meet famous species and learn what made them special. Profiles will include size, \
                diet, habitat, and the era they lived in. Content is written for young learners \
                and classroom use.",
        body: SectionBody::Profiles(SPECIES),
    },
    ContentSection {
        id: SectionId::Games,
        heading: "Learning games with dinosaur words",
        intro: "Word games grow reading skills and reinforce science terms. Games will be simple \
                to start and friendly on phones and tablets.",
        body: SectionBody::Bullets {
            items: GAMES,
            tip: Some(Tip {
                label: "Teacher tip:",
                text: "each game will include word lists, answer keys, and difficulty settings.",
            }),
        },
    },
    ContentSection {
        id: SectionId::Vocabulary,
        heading: "Dinosaur vocabulary and science terms",
        intro: "A growing glossary for young readers. Clear definitions with a short example \
                sentence and a picture cue.",
        body: SectionBody::Glossary {
            entries: VOCABULARY,
            columns: 2,
        },
    },
    ContentSection {
        id: SectionId::Activities,
        heading: "Printable dinosaur activities",
        intro: "Ready to print worksheets for home and school. Clean outlines and readable fonts \
                help early readers.",
        body: SectionBody::Printables(PRINTABLES),
    },
    ContentSection {
        id: SectionId::Timeline,
        heading: "Prehistoric timeline for young learners",
        intro: "Three major periods help place dinosaurs in time. Jurassic is famous, but many \
                favorites lived in the Cretaceous.",
        body: SectionBody::Glossary {
            entries: PERIODS,
            columns: 3,
        },
    },
    ContentSection {
        id: SectionId::Faq,
        heading: "Frequently asked questions",
        intro: "",
        body: SectionBody::Questions(FAQ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_follow_page_order() {
        let ids: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
    }

    #[test]
    fn test_anchors_are_unique() {
        let mut anchors: Vec<_> = SectionId::ALL.iter().map(|id| id.anchor()).collect();
        anchors.push(HERO_ANCHOR);
        let total = anchors.len();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), total);
    }

    #[test]
    fn test_every_section_has_items() {
        for section in &SECTIONS {
            let count = match section.body {
                SectionBody::Profiles(entries) => entries.len(),
                SectionBody::Bullets { items, .. } => items.len(),
                SectionBody::Glossary { entries, .. } => entries.len(),
                SectionBody::Printables(cards) => cards.len(),
                SectionBody::Questions(faq) => faq.len(),
            };
            assert!(count > 0, "{} has no items", section.id.anchor());
            assert!(!section.heading.is_empty());
        }
    }

    #[test]
    fn test_faq_section_uses_faq_table() {
        assert_eq!(FAQ.len(), 3);
        let faq = SECTIONS.iter().find(|s| s.id == SectionId::Faq).unwrap();
        assert_eq!(faq.body, SectionBody::Questions(FAQ));
    }

    #[test]
    fn test_line_continuations_collapse_whitespace() {
        assert!(!HERO.lead.contains("  "));
        assert!(HERO.lead.contains("word games. Build vocabulary"));
        for section in &SECTIONS {
            assert!(!section.intro.contains("  "), "{}", section.id.anchor());
        }
    }
}
