//! Joke selection and text formatting
//!
//! Every function here is a pure read of the catalog plus draws from the
//! supplied [`RandomSource`].

use crate::domain::{
    catalog::{Catalog, Category, JokeRecord},
    random::RandomSource,
};

pub const JOKE_EMOJI: &str = "😄";
pub const JOKE_SEPARATOR: &str = "\n\n---\n\n";

pub fn random_joke(catalog: &Catalog, random: &dyn RandomSource) -> String {
    let joke = pick(catalog.all(), random);
    format!("{JOKE_EMOJI} {}\n\n{}", joke.setup, joke.punchline)
}

pub fn joke_by_category(catalog: &Catalog, random: &dyn RandomSource, category: Category) -> String {
    let joke = pick(catalog.jokes(category), random);
    format!(
        "{JOKE_EMOJI} [{} JOKE]\n\n{}\n\n{}",
        category.heading(),
        joke.setup,
        joke.punchline
    )
}

/// Formats `count` distinct jokes, clamped to the catalog size.
pub fn multiple_jokes(catalog: &Catalog, random: &dyn RandomSource, count: usize) -> String {
    sample_jokes(catalog, random, count)
        .into_iter()
        .enumerate()
        .map(|(index, joke)| {
            format!(
                "{JOKE_EMOJI} Joke {}:\n{}\n\n{}",
                index + 1,
                joke.setup,
                joke.punchline
            )
        })
        .collect::<Vec<_>>()
        .join(JOKE_SEPARATOR)
}

/// Draws up to `amount` jokes from the "all jokes" view without replacement.
pub fn sample_jokes<'a>(
    catalog: &'a Catalog,
    random: &dyn RandomSource,
    amount: usize,
) -> Vec<&'a JokeRecord> {
    let all = catalog.all();
    random
        .sample_indices(all.len(), amount.min(all.len()))
        .into_iter()
        .map(|index| &all[index])
        .collect()
}

pub fn list_categories() -> String {
    let lines = Category::ALL
        .into_iter()
        .map(|category| {
            format!(
                "{} {} - {}",
                category.icon(),
                category.heading(),
                category.description()
            )
        })
        .collect::<Vec<_>>();

    format!("Available joke categories:\n\n{}", lines.join("\n"))
}

pub fn joke_stats(catalog: &Catalog) -> String {
    // Header is followed by an empty line, not a whitespace-only one.
    let mut text = String::from("Joke Server Statistics:\n\n");
    for category in Category::ALL {
        text.push_str(&format!(
            "{} {}: {}\n",
            category.icon(),
            category.stats_label(),
            catalog.count(category)
        ));
    }
    text.push_str(&format!("📊 Total jokes: {}\n", catalog.total()));
    text
}

fn pick<'a>(jokes: &'a [JokeRecord], random: &dyn RandomSource) -> &'a JokeRecord {
    &jokes[random.pick_index(jokes.len())]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::random::{SeededRandom, ThreadRandom};

    fn split_joke(text: &str) -> (String, String) {
        let (setup, punchline) = text.rsplit_once("\n\n").expect("setup and punchline");
        (setup.to_string(), punchline.to_string())
    }

    fn contains_pair(jokes: &[JokeRecord], setup: &str, punchline: &str) -> bool {
        jokes
            .iter()
            .any(|joke| joke.setup == setup && joke.punchline == punchline)
    }

    #[test]
    fn random_joke_always_comes_from_catalog() {
        let catalog = Catalog::builtin();
        let random = ThreadRandom::new();

        for _ in 0..1000 {
            let text = random_joke(&catalog, &random);
            let body = text
                .strip_prefix("😄 ")
                .expect("random joke starts with emoji");
            let (setup, punchline) = split_joke(body);
            assert!(
                contains_pair(catalog.all(), &setup, &punchline),
                "unexpected joke: {text}"
            );
        }
    }

    #[test]
    fn joke_by_category_uses_heading_and_category_jokes() {
        let catalog = Catalog::builtin();
        let random = SeededRandom::new(1);

        for category in Category::ALL {
            for _ in 0..50 {
                let text = joke_by_category(&catalog, &random, category);
                let prefix = format!("😄 [{} JOKE]\n\n", category.heading());
                let body = text.strip_prefix(&prefix).expect("category heading");
                let (setup, punchline) = split_joke(body);
                assert!(contains_pair(catalog.jokes(category), &setup, &punchline));
            }
        }
    }

    #[test]
    fn multiple_jokes_are_distinct_and_numbered() {
        let catalog = Catalog::builtin();
        let random = SeededRandom::new(2);

        for count in 1..=10 {
            let text = multiple_jokes(&catalog, &random, count);
            let entries: Vec<&str> = text.split(JOKE_SEPARATOR).collect();
            assert_eq!(entries.len(), count.min(13));

            let mut seen = HashSet::new();
            for (index, entry) in entries.iter().enumerate() {
                let prefix = format!("😄 Joke {}:\n", index + 1);
                let body = entry.strip_prefix(&prefix).expect("numbered entry");
                let (setup, punchline) = split_joke(body);
                assert!(contains_pair(catalog.all(), &setup, &punchline));
                assert!(seen.insert((setup, punchline)), "duplicate joke in {text}");
            }
        }
    }

    #[test]
    fn sampling_whole_catalog_returns_every_joke_once() {
        let catalog = Catalog::builtin();
        let random = ThreadRandom::new();

        let sampled = sample_jokes(&catalog, &random, 13);
        assert_eq!(sampled.len(), 13);
        let unique: HashSet<&JokeRecord> = sampled.into_iter().collect();
        let expected: HashSet<&JokeRecord> = catalog.all().iter().collect();
        assert_eq!(unique, expected);
    }

    #[test]
    fn multiple_jokes_clamps_to_small_catalog() {
        let catalog = Catalog::new(
            vec![JokeRecord::new("p-setup", "p-punchline")],
            vec![JokeRecord::new("d-setup", "d-punchline")],
            vec![JokeRecord::new("k-setup", "k-punchline")],
        )
        .expect("valid catalog");
        let random = SeededRandom::new(3);

        let text = multiple_jokes(&catalog, &random, 10);
        assert_eq!(text.split(JOKE_SEPARATOR).count(), 3);
        assert!(text.contains("😄 Joke 3:\n"));
        assert!(!text.contains("😄 Joke 4:\n"));
    }

    #[test]
    fn list_categories_is_fixed() {
        assert_eq!(
            list_categories(),
            "Available joke categories:\n\n\
             📚 PROGRAMMING - Tech and coding jokes\n\
             👨 DAD - Classic dad jokes\n\
             🚪 KNOCK_KNOCK - Knock knock jokes"
        );
    }

    #[test]
    fn joke_stats_reports_live_counts() {
        assert_eq!(
            joke_stats(&Catalog::builtin()),
            "Joke Server Statistics:\n\n\
             📚 Programming jokes: 5\n\
             👨 Dad jokes: 5\n\
             🚪 Knock-knock jokes: 3\n\
             📊 Total jokes: 13\n"
        );
    }
}
