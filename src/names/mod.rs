//! Template libraries and uniqueness-aware name selection.
//!
//! Every stage draws names through [`select_name`]. Passing a `used` set
//! turns on the no-repeat contract: the returned name is guaranteed fresh
//! within that set and is inserted into it before returning.

pub mod cosmic;
pub mod divine;
pub mod dungeons;
pub mod peoples;
pub mod places;

use std::collections::HashSet;

use rand::Rng;
use rand::RngCore;

use crate::error::{Result, WorldGenError};

/// First-level epithets appended when a template pool is exhausted.
pub const DESCRIPTIVE_SUFFIXES: &[&str] = &[
    "the Elder",
    "the Younger",
    "the Ancient",
    "the Lesser",
    "the Greater",
    "the Northern",
    "the Southern",
    "the Eastern",
    "the Western",
    "the First",
    "the Last",
    "the Forgotten",
    "the Hidden",
    "the Lost",
    "the Risen",
    "the Fallen",
    "the Bright",
    "the Grim",
    "the Silent",
    "the Wild",
    "the Deep",
    "the High",
    "the Old",
    "the New",
];

/// Second-level compound suffixes.
pub const COMPOUND_SUFFIXES: &[&str] = &[
    "of the North",
    "of the South",
    "of the East",
    "of the West",
    "of the Deep",
    "of the Heights",
    "of the Dawn",
    "of the Dusk",
    "of the Ashes",
    "of the Tides",
    "of the Stars",
    "of the Veil",
];

const NUMERALS: &[&str] = &[
    "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// Pick a name from `templates`.
///
/// Without `used`, repeats are allowed. With `used`, an unused template is
/// preferred; once all are taken the fallback appends suffixes (see
/// [`suffixed_fallback`]). Fails only on an empty pool.
pub fn select_name<S: AsRef<str>>(
    pool: &str,
    templates: &[S],
    used: Option<&mut HashSet<String>>,
    rng: &mut dyn RngCore,
) -> Result<String> {
    if templates.is_empty() {
        return Err(WorldGenError::EmptyTemplatePool {
            pool: pool.to_string(),
        });
    }

    let Some(used) = used else {
        let idx = rng.random_range(0..templates.len());
        return Ok(templates[idx].as_ref().to_string());
    };

    let unused: Vec<&str> = templates
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| !used.contains(*t))
        .collect();
    let name = if unused.is_empty() {
        suffixed_fallback(templates, used, rng)
    } else {
        unused[rng.random_range(0..unused.len())].to_string()
    };
    used.insert(name.clone());
    Ok(name)
}

/// Disambiguate when every template is already taken.
///
/// 1. random base + random epithet, then random base + random compound suffix
/// 2. walking bases from the random one, every epithet, every compound suffix,
///    then every epithet+compound pair
/// 3. numerals ("II", "III", ...) on the first base, unbounded
///
/// Step 3 always terminates with a fresh name, so exhaustion is impossible.
fn suffixed_fallback<S: AsRef<str>>(
    templates: &[S],
    used: &HashSet<String>,
    rng: &mut dyn RngCore,
) -> String {
    let start = rng.random_range(0..templates.len());
    let base = templates[start].as_ref();

    let quick = [
        format!(
            "{base} {}",
            DESCRIPTIVE_SUFFIXES[rng.random_range(0..DESCRIPTIVE_SUFFIXES.len())]
        ),
        format!(
            "{base} {}",
            COMPOUND_SUFFIXES[rng.random_range(0..COMPOUND_SUFFIXES.len())]
        ),
    ];
    if let Some(name) = quick.into_iter().find(|n| !used.contains(n)) {
        return name;
    }

    for offset in 0..templates.len() {
        let base = templates[(start + offset) % templates.len()].as_ref();
        if let Some(name) = first_free_suffix(base, used) {
            return name;
        }
    }

    let mut ordinal = 0usize;
    loop {
        let candidate = numbered(base, ordinal);
        if !used.contains(&candidate) {
            return candidate;
        }
        ordinal += 1;
    }
}

fn first_free_suffix(base: &str, used: &HashSet<String>) -> Option<String> {
    let epithets = DESCRIPTIVE_SUFFIXES.iter().map(|s| format!("{base} {s}"));
    let compounds = COMPOUND_SUFFIXES.iter().map(|s| format!("{base} {s}"));
    let pairs = DESCRIPTIVE_SUFFIXES.iter().flat_map(|e| {
        COMPOUND_SUFFIXES
            .iter()
            .map(move |c| format!("{base} {e} {c}"))
    });
    epithets
        .chain(compounds)
        .chain(pairs)
        .find(|n| !used.contains(n))
}

fn numbered(base: &str, ordinal: usize) -> String {
    match NUMERALS.get(ordinal) {
        Some(numeral) => format!("{base} {numeral}"),
        None => format!("{base} {}", ordinal + 2),
    }
}

/// Make `base` unique within `used` without consuming randomness.
///
/// `hash` picks the starting suffix so the same `(base, hash)` always
/// resolves the same way given the same `used` set. The result is inserted
/// into `used`.
pub fn unique_from_hash(base: &str, hash: u64, used: &mut HashSet<String>) -> String {
    let name = if !used.contains(base) {
        base.to_string()
    } else {
        let n = DESCRIPTIVE_SUFFIXES.len();
        let start = (hash % n as u64) as usize;
        (0..n)
            .map(|i| format!("{base} {}", DESCRIPTIVE_SUFFIXES[(start + i) % n]))
            .find(|c| !used.contains(c))
            .or_else(|| first_free_suffix(base, used))
            .unwrap_or_else(|| {
                (0..)
                    .map(|i| numbered(base, i))
                    .find(|c| !used.contains(c))
                    .unwrap_or_else(|| base.to_string())
            })
    };
    used.insert(name.clone());
    name
}

/// Pick one item uniformly from a static table.
pub fn pick<'a>(items: &[&'a str], rng: &mut dyn RngCore) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Pick `count` distinct items from a static table (fewer if the table is
/// smaller), in draw order.
pub fn pick_distinct<'a>(items: &[&'a str], count: usize, rng: &mut dyn RngCore) -> Vec<&'a str> {
    let mut remaining: Vec<&'a str> = items.to_vec();
    let mut chosen = Vec::with_capacity(count.min(items.len()));
    while chosen.len() < count && !remaining.is_empty() {
        let idx = rng.random_range(0..remaining.len());
        chosen.push(remaining.remove(idx));
    }
    chosen
}

/// "a", "a and b", "a, b, and c".
pub fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{a} and {b}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Substitute `{key}` placeholders in a description template.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{key}}}"), value)
    })
}

/// Capitalize the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "mountain_range" -> "Mountain Range".
pub fn title_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn empty_pool_fails_loudly() {
        let mut rng = SmallRng::seed_from_u64(1);
        let empty: [&str; 0] = [];
        let err = select_name("empty", &empty, None, &mut rng).unwrap_err();
        assert!(matches!(err, WorldGenError::EmptyTemplatePool { .. }));
    }

    #[test]
    fn without_used_set_repeats_allowed() {
        let mut rng = SmallRng::seed_from_u64(7);
        let names: Vec<String> = (0..20)
            .map(|_| select_name("one", &["Solo"], None, &mut rng).unwrap())
            .collect();
        assert!(names.iter().all(|n| n == "Solo"));
    }

    #[test]
    fn prefers_unused_templates() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut used = HashSet::new();
        let pool = ["A", "B", "C"];
        let mut picked: Vec<String> = (0..3)
            .map(|_| select_name("abc", &pool, Some(&mut used), &mut rng).unwrap())
            .collect();
        picked.sort();
        assert_eq!(picked, vec!["A", "B", "C"]);
        assert_eq!(used.len(), 3);
    }

    #[test]
    fn exhausted_pool_gets_suffixes() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut used = HashSet::new();
        let first = select_name("solo", &["Karn"], Some(&mut used), &mut rng).unwrap();
        let second = select_name("solo", &["Karn"], Some(&mut used), &mut rng).unwrap();
        assert_eq!(first, "Karn");
        assert_ne!(second, "Karn");
        assert!(second.starts_with("Karn "), "{second}");
        assert!(used.contains(&second));
    }

    #[test]
    fn single_template_never_collides() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut used = HashSet::new();
        // More than templates × (epithets + compounds + pairs) to reach numerals.
        let total = 1 + DESCRIPTIVE_SUFFIXES.len()
            + COMPOUND_SUFFIXES.len()
            + DESCRIPTIVE_SUFFIXES.len() * COMPOUND_SUFFIXES.len()
            + 20;
        for _ in 0..total {
            select_name("solo", &["Vex"], Some(&mut used), &mut rng).unwrap();
        }
        assert_eq!(used.len(), total);
        assert!(used.contains("Vex II"));
    }

    #[test]
    fn deterministic_selection() {
        let pool = ["Ash", "Birch", "Cedar", "Doom"];
        let run = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut used = HashSet::new();
            (0..8)
                .map(|_| select_name("trees", &pool, Some(&mut used), &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn unique_from_hash_is_stable() {
        let mut used = HashSet::new();
        assert_eq!(unique_from_hash("Gorlag", 17, &mut used), "Gorlag");
        let again = unique_from_hash("Gorlag", 17, &mut used);
        let mut used2: HashSet<String> = ["Gorlag".to_string()].into_iter().collect();
        assert_eq!(unique_from_hash("Gorlag", 17, &mut used2), again);
        assert_ne!(again, "Gorlag");
    }

    #[test]
    fn join_list_forms() {
        let s = |v: &[&str]| v.iter().map(|x| x.to_string()).collect::<Vec<_>>();
        assert_eq!(join_list(&s(&["a"])), "a");
        assert_eq!(join_list(&s(&["a", "b"])), "a and b");
        assert_eq!(join_list(&s(&["a", "b", "c", "d"])), "a, b, c, and d");
    }

    #[test]
    fn fill_replaces_every_occurrence() {
        assert_eq!(
            fill("{name} and {name} of {place}", &[("name", "Ash"), ("place", "Vale")]),
            "Ash and Ash of Vale"
        );
        assert_eq!(fill("{missing}", &[]), "{missing}");
    }

    #[test]
    fn title_case_snake() {
        assert_eq!(title_case("mountain_range"), "Mountain Range");
        assert_eq!(title_case("ocean"), "Ocean");
    }

    #[test]
    fn pick_distinct_has_no_repeats() {
        let mut rng = SmallRng::seed_from_u64(2);
        let items = ["a", "b", "c", "d", "e"];
        let chosen = pick_distinct(&items, 4, &mut rng);
        let set: HashSet<_> = chosen.iter().collect();
        assert_eq!(chosen.len(), 4);
        assert_eq!(set.len(), 4);
        assert_eq!(pick_distinct(&items, 10, &mut rng).len(), 5);
    }
}
