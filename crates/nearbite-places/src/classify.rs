//! Provider category tags to display labels and a single icon key.
//!
//! Icon selection walks [`ICON_RULES`] in order and the first rule matching
//! any tag wins, so a place tagged both `pizza` and `italian` gets the pizza
//! icon. Labels are extracted independently from namespaced tags.

/// Icon used when no rule matches or the place has no tags.
pub const DEFAULT_ICON: &str = "utensils";

/// Tag namespaces whose remainder names a cuisine or venue subtype.
const LABEL_PREFIXES: &[&str] = &[
    "catering.restaurant.",
    "catering.fast_food.",
    "catering.cafe.",
];

/// One icon rule. Matches when any keyword equals a `.`-separated segment of
/// a tag, ignoring ASCII case.
#[derive(Debug, Clone, Copy)]
pub struct IconRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub icon: &'static str,
}

impl IconRule {
    fn matches(&self, tag: &str) -> bool {
        tag.split('.').any(|segment| {
            self.keywords
                .iter()
                .any(|kw| segment.eq_ignore_ascii_case(kw))
        })
    }
}

/// Ordered icon rules. Order is the tie-break: specific cuisines come
/// before generic venue types.
pub const ICON_RULES: &[IconRule] = &[
    IconRule {
        name: "pizza",
        keywords: &["pizza"],
        icon: "pizza",
    },
    IconRule {
        name: "sushi",
        keywords: &["sushi", "japanese"],
        icon: "sushi",
    },
    IconRule {
        name: "burger",
        keywords: &["burger", "hamburger"],
        icon: "burger",
    },
    IconRule {
        name: "mexican",
        keywords: &["mexican", "tacos", "tex-mex", "burrito"],
        icon: "taco",
    },
    IconRule {
        name: "asian noodles",
        keywords: &["chinese", "ramen", "noodle", "vietnamese", "thai", "korean"],
        icon: "noodles",
    },
    IconRule {
        name: "italian",
        keywords: &["italian", "pasta"],
        icon: "pasta",
    },
    IconRule {
        name: "indian",
        keywords: &["indian", "curry", "pakistani"],
        icon: "curry",
    },
    IconRule {
        name: "seafood",
        keywords: &["seafood", "fish", "fish_and_chips"],
        icon: "fish",
    },
    IconRule {
        name: "grill",
        keywords: &["steak_house", "barbecue", "chicken"],
        icon: "steak",
    },
    IconRule {
        name: "plant based",
        keywords: &["vegetarian", "vegan", "salad"],
        icon: "leaf",
    },
    IconRule {
        name: "dessert",
        keywords: &["ice_cream", "dessert", "frozen_yogurt"],
        icon: "ice-cream",
    },
    IconRule {
        name: "bakery",
        keywords: &["bakery", "donut", "pastry"],
        icon: "bread",
    },
    IconRule {
        name: "coffee",
        keywords: &["cafe", "coffee", "coffee_shop", "tea"],
        icon: "coffee",
    },
    IconRule {
        name: "fast food",
        keywords: &["fast_food"],
        icon: "fast-food",
    },
    IconRule {
        name: "bar",
        keywords: &["bar", "pub", "biergarten", "taproom"],
        icon: "beer",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub labels: Vec<String>,
    pub icon: &'static str,
}

/// Classify raw provider tags into display labels and one icon key.
///
/// Never fails; unknown or missing tags give no labels and [`DEFAULT_ICON`].
#[must_use]
pub fn classify(raw_tags: &[String]) -> Classification {
    Classification {
        labels: extract_labels(raw_tags),
        icon: pick_icon(raw_tags),
    }
}

fn pick_icon(raw_tags: &[String]) -> &'static str {
    ICON_RULES
        .iter()
        .find(|rule| raw_tags.iter().any(|tag| rule.matches(tag)))
        .map_or(DEFAULT_ICON, |rule| rule.icon)
}

fn extract_labels(raw_tags: &[String]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for tag in raw_tags {
        let Some(label) = label_for_tag(tag) else {
            continue;
        };
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

/// `"catering.restaurant.fish_and_chips"` -> `"Fish And Chips"`.
fn label_for_tag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    let remainder = LABEL_PREFIXES.iter().find_map(|prefix| {
        let head = tag.get(..prefix.len())?;
        head.eq_ignore_ascii_case(prefix).then(|| &tag[prefix.len()..])
    })?;

    let words: Vec<String> = remainder
        .split(['_', '.'])
        .filter(|s| !s.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
