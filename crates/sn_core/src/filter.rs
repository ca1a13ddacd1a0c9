//! Title filter deciding whether an item is shown at all. Matching is
//! case-insensitive substring matching; any rule in any class filters.
//! The same predicate runs before and after rewriting.

enum Rule {
    /// Single substring.
    Contains(&'static str),
    /// One term from each list must appear.
    Pairing {
        first: &'static [&'static str],
        second: &'static [&'static str],
    },
}

impl Rule {
    fn matches(&self, title: &str) -> bool {
        match self {
            Rule::Contains(needle) => title.contains(needle),
            Rule::Pairing { first, second } => {
                first.iter().any(|t| title.contains(t))
                    && second.iter().any(|t| title.contains(t))
            }
        }
    }
}

/// Structurally non-article content: galleries, games, service items.
const NON_ARTICLE: &[Rule] = &[
    Rule::Contains("bildergalerie"),
    Rule::Contains("galerie"),
    Rule::Contains("comic"),
    Rule::Contains("cartoon"),
    Rule::Contains("quiz"),
    Rule::Contains("rätsel"),
    Rule::Contains("sudoku"),
    Rule::Contains("horoskop"),
    Rule::Contains("wetter"),
    Rule::Contains("gewinnspiel"),
    Rule::Contains("liveticker"),
    Rule::Contains("im ticker"),
    Rule::Contains("podcast"),
];

const MINOR_TERMS: &[&str] = &["kind", "kinder", "baby", "mädchen", "bub", "schüler"];
const VIOLENCE_TERMS: &[&str] = &[
    "tot",
    "getötet",
    "stirbt",
    "gestorben",
    "missbrauch",
    "missbraucht",
    "vergewaltigt",
    "entführt",
    "ertrunken",
    "ertrinkt",
];

/// Distressing subject matter: minors in violent contexts, extreme violence.
const DISTRESSING: &[Rule] = &[
    Rule::Pairing {
        first: MINOR_TERMS,
        second: VIOLENCE_TERMS,
    },
    Rule::Contains("massaker"),
    Rule::Contains("enthauptet"),
    Rule::Contains("zerstückelt"),
    Rule::Contains("leichenteile"),
    Rule::Contains("amoklauf"),
];

/// Court and crime narratives about private individuals.
const PRIVATE_CRIME: &[Rule] = &[
    Rule::Contains("vor gericht"),
    Rule::Contains("angeklagt"),
    Rule::Contains("mordprozess"),
    Rule::Contains("prozess um"),
    Rule::Contains("vergewaltigung"),
    Rule::Contains("femizid"),
    Rule::Contains("tötungsdelikt"),
    Rule::Contains("kindsmisshandlung"),
];

const RULE_CLASSES: &[&[Rule]] = &[NON_ARTICLE, DISTRESSING, PRIVATE_CRIME];

/// True when the title should not be shown. Pure and deterministic.
pub fn should_filter(title: &str) -> bool {
    let title = title.to_lowercase();
    RULE_CLASSES
        .iter()
        .any(|class| class.iter().any(|rule| rule.matches(&title)))
}
