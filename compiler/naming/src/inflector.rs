//! English plural/singular inflection.
//!
//! Words are inflected on their last PascalCase segment, so `BlogCategory`
//! pluralizes to `BlogCategories` and `SalesPerson` to `SalesPeople`.
//! Lookup order: uncountable words, irregular words, then the ordered regex
//! rules (first match wins). A word that matches nothing is returned as-is.

use std::sync::OnceLock;

use regex::Regex;

use crate::casing::uc_first;

/// Words with identical singular and plural forms.
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "bison",
    "chassis",
    "compensation",
    "coreopsis",
    "data",
    "deer",
    "education",
    "emoji",
    "equipment",
    "evidence",
    "feedback",
    "fish",
    "furniture",
    "gold",
    "information",
    "jedi",
    "knowledge",
    "love",
    "metadata",
    "money",
    "moose",
    "news",
    "nutrition",
    "offspring",
    "plankton",
    "pokemon",
    "police",
    "rain",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "staff",
    "swine",
    "traffic",
    "wheat",
];

/// Irregular (singular, plural) pairs.
const IRREGULAR: &[(&str, &str)] = &[
    ("atlas", "atlases"),
    ("axe", "axes"),
    ("beef", "beefs"),
    ("brother", "brothers"),
    ("cafe", "cafes"),
    ("chateau", "chateaux"),
    ("child", "children"),
    ("cookie", "cookies"),
    ("corpus", "corpuses"),
    ("cow", "cows"),
    ("criterion", "criteria"),
    ("curriculum", "curricula"),
    ("demo", "demos"),
    ("domino", "dominoes"),
    ("echo", "echoes"),
    ("foot", "feet"),
    ("fungus", "fungi"),
    ("ganglion", "ganglions"),
    ("genie", "genies"),
    ("genus", "genera"),
    ("goose", "geese"),
    ("graffito", "graffiti"),
    ("hippopotamus", "hippopotami"),
    ("hoof", "hoofs"),
    ("human", "humans"),
    ("iris", "irises"),
    ("larva", "larvae"),
    ("leaf", "leaves"),
    ("loaf", "loaves"),
    ("man", "men"),
    ("medium", "media"),
    ("memorandum", "memoranda"),
    ("money", "monies"),
    ("mongoose", "mongooses"),
    ("motto", "mottoes"),
    ("move", "moves"),
    ("mythos", "mythoi"),
    ("niche", "niches"),
    ("nucleus", "nuclei"),
    ("numen", "numina"),
    ("occiput", "occiputs"),
    ("octopus", "octopuses"),
    ("opus", "opuses"),
    ("ox", "oxen"),
    ("passerby", "passersby"),
    ("penis", "penises"),
    ("person", "people"),
    ("plateau", "plateaux"),
    ("runner-up", "runners-up"),
    ("sex", "sexes"),
    ("soliloquy", "soliloquies"),
    ("son-in-law", "sons-in-law"),
    ("syllabus", "syllabi"),
    ("testis", "testes"),
    ("thief", "thieves"),
    ("tooth", "teeth"),
    ("tornado", "tornadoes"),
    ("trilby", "trilbys"),
    ("turf", "turfs"),
    ("valve", "valves"),
    ("wave", "waves"),
    ("woman", "women"),
    ("zombie", "zombies"),
];

const PLURAL_RULES: &[(&str, &str)] = &[
    (r"(?i)(quiz)$", "${1}zes"),
    (r"(?i)(matr|vert|ind)(ix|ex)$", "${1}ices"),
    (r"(?i)([ml])ouse$", "${1}ice"),
    (r"(?i)(x|ch|ss|sh)$", "${1}es"),
    (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
    (r"(?i)(hive|gulf)$", "${1}s"),
    (r"(?i)(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    (r"(?i)sis$", "ses"),
    (r"(?i)([ti])um$", "${1}a"),
    (r"(?i)(buffal|her|potat|tomat|volcan)o$", "${1}oes"),
    (r"(?i)(alumn|bacill|cact|foc|fung|nucle|radi|stimul|syllab|termin|vir)us$", "${1}i"),
    (r"(?i)us$", "uses"),
    (r"(?i)(alias)$", "${1}es"),
    (r"(?i)(analys|ax|cris|test|thes)is$", "${1}es"),
    (r"(?i)s$", "s"),
    (r"^$", ""),
    (r"$", "s"),
];

const SINGULAR_RULES: &[(&str, &str)] = &[
    (r"(?i)(s)tatuses$", "${1}tatus"),
    (r"(?i)^(.*)(menu)s$", "${1}${2}"),
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(vert|ind)ices$", "${1}ex"),
    (r"(?i)(alias)(es)*$", "${1}"),
    (r"(?i)(buffal|her|potat|tomat|volcan)oes$", "${1}o"),
    (r"(?i)(alumn|bacill|cact|foc|fung|nucle|radi|stimul|syllab|termin|viri?)i$", "${1}us"),
    (r"(?i)([ftw]ax)es$", "${1}"),
    (r"(?i)(analys|ax|cris|test|thes)es$", "${1}is"),
    (r"(?i)(shoe|slave)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"(?i)ouses$", "ouse"),
    (r"(?i)([^a])uses$", "${1}us"),
    (r"(?i)([ml])ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh)es$", "${1}"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)([lr])ves$", "${1}f"),
    (r"(?i)(tive|hive|drive)s$", "${1}"),
    (r"(?i)([^fo])ves$", "${1}fe"),
    (r"(?i)(analy|ba|diagno|parenthe|progno|synop|the)ses$", "${1}sis"),
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)eaus$", "eau"),
    (r"(?i)^(.*us)$", "${1}"),
    (r"(?i)ss$", "ss"),
    (r"(?i)s$", ""),
];

type RuleSet = Vec<(Regex, &'static str)>;

fn compile(rules: &[(&'static str, &'static str)]) -> RuleSet {
    rules
        .iter()
        .map(|(pattern, replacement)| {
            let regex = Regex::new(pattern).expect("inflection rule must be a valid regex");
            (regex, *replacement)
        })
        .collect()
}

fn plural_rules() -> &'static RuleSet {
    static RULES: OnceLock<RuleSet> = OnceLock::new();
    RULES.get_or_init(|| compile(PLURAL_RULES))
}

fn singular_rules() -> &'static RuleSet {
    static RULES: OnceLock<RuleSet> = OnceLock::new();
    RULES.get_or_init(|| compile(SINGULAR_RULES))
}

/// Split `word` into a head and its last PascalCase segment.
fn split_last_segment(word: &str) -> (&str, &str) {
    let start = word
        .char_indices()
        .skip(1)
        .filter(|(_, c)| c.is_uppercase())
        .map(|(i, _)| i)
        .last()
        .unwrap_or(0);
    word.split_at(start)
}

/// Carry the case of the first letter of `original` over to `replacement`.
fn match_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(|c| c.is_uppercase()) {
        uc_first(replacement)
    } else {
        replacement.to_string()
    }
}

fn inflect(
    word: &str,
    rules: &RuleSet,
    irregular: impl Fn(&str) -> Option<&'static str>,
) -> String {
    let (head, last) = split_last_segment(word);
    let lower = last.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some(replacement) = irregular(&lower) {
        return format!("{}{}", head, match_case(last, replacement));
    }

    for (regex, replacement) in rules {
        if regex.is_match(word) {
            return regex.replace(word, *replacement).into_owned();
        }
    }

    word.to_string()
}

/// Return the plural form of `word`.
///
/// ```
/// use naming::inflector::pluralize;
/// assert_eq!(pluralize("Product"), "Products");
/// assert_eq!(pluralize("Category"), "Categories");
/// assert_eq!(pluralize("SalesPerson"), "SalesPeople");
/// ```
pub fn pluralize(word: &str) -> String {
    inflect(word, plural_rules(), |lower| {
        IRREGULAR.iter().find(|(singular, _)| *singular == lower).map(|(_, plural)| *plural)
    })
}

/// Return the singular form of `word`.
///
/// ```
/// use naming::inflector::singularize;
/// assert_eq!(singularize("Products"), "Product");
/// assert_eq!(singularize("Categories"), "Category");
/// assert_eq!(singularize("Product"), "Product");
/// ```
pub fn singularize(word: &str) -> String {
    inflect(word, singular_rules(), |lower| {
        IRREGULAR.iter().find(|(_, plural)| *plural == lower).map(|(singular, _)| *singular)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_compile() {
        assert_eq!(plural_rules().len(), PLURAL_RULES.len());
        assert_eq!(singular_rules().len(), SINGULAR_RULES.len());
    }

    #[test]
    fn test_pluralize_regular() {
        assert_eq!(pluralize("post"), "posts");
        assert_eq!(pluralize("Box"), "Boxes");
        assert_eq!(pluralize("Address"), "Addresses");
        assert_eq!(pluralize("Status"), "Statuses");
        assert_eq!(pluralize("Wife"), "Wives");
        assert_eq!(pluralize("Half"), "Halves");
        assert_eq!(pluralize("Matrix"), "Matrices");
        assert_eq!(pluralize("Quiz"), "Quizzes");
        assert_eq!(pluralize("Day"), "Days");
        assert_eq!(pluralize("Analysis"), "Analyses");
    }

    #[test]
    fn test_pluralize_irregular_and_uncountable() {
        assert_eq!(pluralize("Person"), "People");
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("BlogChild"), "BlogChildren");
        assert_eq!(pluralize("News"), "News");
        assert_eq!(pluralize("UserFeedback"), "UserFeedback");
        assert_eq!(pluralize("sheep"), "sheep");
    }

    #[test]
    fn test_singularize_regular() {
        assert_eq!(singularize("posts"), "post");
        assert_eq!(singularize("Boxes"), "Box");
        assert_eq!(singularize("Addresses"), "Address");
        assert_eq!(singularize("Statuses"), "Status");
        assert_eq!(singularize("Status"), "Status");
        assert_eq!(singularize("Wives"), "Wife");
        assert_eq!(singularize("Halves"), "Half");
        assert_eq!(singularize("Mice"), "Mouse");
        assert_eq!(singularize("Movies"), "Movie");
        assert_eq!(singularize("Heroes"), "Hero");
        assert_eq!(singularize("Menus"), "Menu");
    }

    #[test]
    fn test_singularize_keeps_double_s() {
        assert_eq!(singularize("Address"), "Address");
        assert_eq!(singularize("Business"), "Business");
        assert_eq!(singularize("Process"), "Process");
        assert_eq!(singularize("ShippingAddress"), "ShippingAddress");
        assert_eq!(singularize("Businesses"), "Business");
        assert_eq!(pluralize("Process"), "Processes");
    }

    #[test]
    fn test_singularize_irregular_and_uncountable() {
        assert_eq!(singularize("People"), "Person");
        assert_eq!(singularize("SalesPeople"), "SalesPerson");
        assert_eq!(singularize("Teeth"), "Tooth");
        assert_eq!(singularize("Species"), "Species");
        assert_eq!(singularize("ProductRepository"), "ProductRepository");
    }

    #[test]
    fn test_split_last_segment() {
        assert_eq!(split_last_segment("BlogPost"), ("Blog", "Post"));
        assert_eq!(split_last_segment("post"), ("", "post"));
        assert_eq!(split_last_segment("Post"), ("", "Post"));
    }
}
