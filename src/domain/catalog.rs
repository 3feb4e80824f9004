//! The immutable joke catalog
//!
//! Jokes are partitioned into a closed set of categories. The catalog also keeps
//! an eagerly built "all jokes" view in category declaration order.

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JokeRecord {
    pub setup: &'static str,
    pub punchline: &'static str,
}

impl JokeRecord {
    pub const fn new(setup: &'static str, punchline: &'static str) -> Self {
        Self { setup, punchline }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Programming,
    Dad,
    KnockKnock,
}

impl Category {
    /// Declaration order, used for the "all jokes" view and every listing.
    pub const ALL: [Category; 3] = [Category::Programming, Category::Dad, Category::KnockKnock];

    pub fn from_id(value: &str) -> Option<Self> {
        match value {
            "programming" => Some(Self::Programming),
            "dad" => Some(Self::Dad),
            "knock_knock" => Some(Self::KnockKnock),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Programming => "programming",
            Self::Dad => "dad",
            Self::KnockKnock => "knock_knock",
        }
    }

    pub fn heading(self) -> String {
        self.id().to_ascii_uppercase()
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Programming => "📚",
            Self::Dad => "👨",
            Self::KnockKnock => "🚪",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Programming => "Tech and coding jokes",
            Self::Dad => "Classic dad jokes",
            Self::KnockKnock => "Knock knock jokes",
        }
    }

    pub fn stats_label(self) -> &'static str {
        match self {
            Self::Programming => "Programming jokes",
            Self::Dad => "Dad jokes",
            Self::KnockKnock => "Knock-knock jokes",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    programming: Vec<JokeRecord>,
    dad: Vec<JokeRecord>,
    knock_knock: Vec<JokeRecord>,
    all: Vec<JokeRecord>,
}

impl Catalog {
    pub fn new(
        programming: Vec<JokeRecord>,
        dad: Vec<JokeRecord>,
        knock_knock: Vec<JokeRecord>,
    ) -> Result<Self, AppError> {
        let mut catalog = Self {
            programming,
            dad,
            knock_knock,
            all: Vec::new(),
        };

        if let Some(empty) = Category::ALL
            .into_iter()
            .find(|category| catalog.jokes(*category).is_empty())
        {
            return Err(AppError::internal(format!(
                "category {} has no jokes",
                empty.id()
            )));
        }

        let all: Vec<JokeRecord> = Category::ALL
            .into_iter()
            .flat_map(|category| catalog.jokes(category).iter().copied())
            .collect();
        catalog.all = all;

        Ok(catalog)
    }

    pub fn builtin() -> Self {
        Self::new(
            vec![
                JokeRecord::new(
                    "Why do programmers prefer dark mode?",
                    "Because light attracts bugs!",
                ),
                JokeRecord::new(
                    "Why do Java developers wear glasses?",
                    "Because they don't C#!",
                ),
                JokeRecord::new(
                    "How many programmers does it take to change a light bulb?",
                    "None. It's a hardware problem!",
                ),
                JokeRecord::new("What's a programmer's favorite hangout place?", "Foo Bar!"),
                JokeRecord::new(
                    "Why did the programmer quit his job?",
                    "Because he didn't get arrays (a raise)!",
                ),
            ],
            vec![
                JokeRecord::new("What do you call a bear with no teeth?", "A gummy bear!"),
                JokeRecord::new("Why don't eggs tell jokes?", "They'd crack each other up!"),
                JokeRecord::new("What do you call a fake noodle?", "An impasta!"),
                JokeRecord::new(
                    "Why don't scientists trust atoms?",
                    "Because they make up everything!",
                ),
                JokeRecord::new("What did the ocean say to the beach?", "Nothing, it just waved!"),
            ],
            vec![
                JokeRecord::new(
                    "Knock knock. Who's there? Interrupting cow. Interrupting cow w—",
                    "MOOOOO!",
                ),
                JokeRecord::new(
                    "Knock knock. Who's there? Boo. Boo who?",
                    "Don't cry, it's just a joke!",
                ),
                JokeRecord::new("Knock knock. Who's there? Tank. Tank who?", "You're welcome!"),
            ],
        )
        .expect("built-in catalog categories are non-empty")
    }

    pub fn jokes(&self, category: Category) -> &[JokeRecord] {
        match category {
            Category::Programming => &self.programming,
            Category::Dad => &self.dad,
            Category::KnockKnock => &self.knock_knock,
        }
    }

    pub fn all(&self) -> &[JokeRecord] {
        &self.all
    }

    pub fn count(&self, category: Category) -> usize {
        self.jokes(category).len()
    }

    pub fn total(&self) -> usize {
        self.all.len()
    }
}
