//! Keyword-based categorisation of technology tags.
//!
//! A tag is lower-cased and checked against each category's keyword list in
//! declaration order. The first category owning a keyword that occurs as a
//! substring of the tag wins, even when a later category would match a longer
//! or more specific keyword. Tags matching nothing land in [`Category::Other`].

use serde::Serialize;

use crate::palette::Tone;

/// Display category of a technology tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Server-side languages, runtimes and patterns.
    Backend,
    /// UI frameworks, styling and client tooling.
    Frontend,
    /// Data stores and schema tooling.
    Database,
    /// Application frameworks.
    Framework,
    /// Infrastructure, hosting and developer tooling.
    DevOps,
    /// Machine learning, AI services and forecasting.
    AiMl,
    /// Authentication, authorization and validation.
    Security,
    /// Fallback for tags matching no keyword.
    Other,
}

impl Category {
    /// Human-readable category name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Backend => "Backend",
            Self::Frontend => "Frontend",
            Self::Database => "Database",
            Self::Framework => "Framework",
            Self::DevOps => "DevOps & Tools",
            Self::AiMl => "AI & Machine Learning",
            Self::Security => "Security",
            Self::Other => "Other",
        }
    }

    /// Display tone used for chips in this category.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Backend => Tone::Purple,
            Self::Frontend => Tone::Blue,
            Self::Database => Tone::Green,
            Self::Framework => Tone::Cyan,
            Self::DevOps => Tone::Orange,
            Self::AiMl => Tone::Yellow,
            Self::Security => Tone::Red,
            Self::Other => Tone::Slate,
        }
    }
}

/// Keywords owned by a single category. Keywords must be lower-case.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    /// Category returned when a keyword matches.
    pub category: Category,
    /// Lower-case substrings searched for in the tag.
    pub keywords: &'static [&'static str],
}

/// Built-in keyword table, in priority order.
pub const BUILTIN_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Backend,
        keywords: &[
            "node",
            "express",
            "python",
            "flask",
            "fastapi",
            "asp.net",
            "tkinter",
            "cobol",
            "c++",
            "sharp",
            "webhook",
            "smtp",
            "brevo",
            "php",
            "laravel",
            "composer",
            "artisan",
            "cosine similarity",
            "sqlalchemy",
            "alembic",
            "bcrypt",
            "pyjwt",
            "mvc",
            "repository pattern",
        ],
    },
    CategoryRule {
        category: Category::Frontend,
        keywords: &[
            "react",
            "vue",
            "angular",
            "tailwind",
            "tailwind css",
            "css",
            "sass",
            "html",
            "dart",
            "shadcn",
            "alpine.js",
            "vite",
            "leaflet",
            "customtkinter",
        ],
    },
    CategoryRule {
        category: Category::Database,
        keywords: &[
            "mongodb",
            "mysql",
            "postgresql",
            "sqlite",
            "typescript",
            "stripe",
            "redis",
            "prisma",
            "mariadb",
        ],
    },
    CategoryRule {
        category: Category::Framework,
        keywords: &[
            "next.js",
            "vite",
            "django",
            "flask",
            "fastapi",
            "asp.net",
            "flutter",
            "flutterflow",
            "laravel",
            "react 19",
            "next.js 16",
        ],
    },
    CategoryRule {
        category: Category::DevOps,
        keywords: &[
            "firebase",
            "aws",
            "cloud",
            "docker",
            "github",
            "git",
            "azure",
            "meilisearch",
            "mellisearch",
            "digital ocean",
            "nginx",
            "osrm",
            "nominatim",
            "geospatial",
            "routing",
        ],
    },
    CategoryRule {
        category: Category::AiMl,
        keywords: &[
            "tensorflow",
            "openai",
            "opencv",
            "ai",
            "machine learning",
            "ml",
            "fuzzy algorithm",
            "fuzzy",
            "insightface",
            "face-api",
            "gemini",
            "vector embeddings",
            "embeddings",
            "holt-winters",
            "arima",
            "regression",
            "ema",
        ],
    },
    CategoryRule {
        category: Category::Security,
        keywords: &[
            "jwt",
            "security",
            "auth",
            "authentication",
            "authorization",
            "zod",
            "auth.js",
            "nextauth",
            "supabase auth",
        ],
    },
];

/// A technology tag paired with its resolved category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagChip<'a> {
    /// Tag text exactly as authored.
    pub tag: &'a str,
    /// Category assigned by the classifier.
    pub category: Category,
}

/// Classifier over a static, ordered keyword table.
#[derive(Debug, Clone, Copy)]
pub struct TagClassifier {
    rules: &'static [CategoryRule],
}

impl Default for TagClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TagClassifier {
    /// Classifier using [`BUILTIN_RULES`].
    #[must_use]
    pub const fn builtin() -> Self {
        Self::with_rules(BUILTIN_RULES)
    }

    /// Classifier over a caller-provided table.
    #[must_use]
    pub const fn with_rules(rules: &'static [CategoryRule]) -> Self {
        Self { rules }
    }

    /// Ordered rules consulted by [`Self::classify`].
    #[must_use]
    pub const fn rules(&self) -> &'static [CategoryRule] {
        self.rules
    }

    /// Categorise a tag. Total over all strings; the empty string is `Other`.
    #[must_use]
    pub fn classify(&self, tag: &str) -> Category {
        let lowered = tag.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| lowered.contains(keyword)))
            .map_or(Category::Other, |rule| rule.category)
    }

    /// Classify every tag independently, keeping source order and duplicates.
    #[must_use]
    pub fn chips<'a, I>(&self, technologies: I) -> Vec<TagChip<'a>>
    where
        I: IntoIterator<Item = &'a String>,
    {
        technologies
            .into_iter()
            .map(|tag| TagChip {
                tag: tag.as_str(),
                category: self.classify(tag),
            })
            .collect()
    }

    /// Count tags per category, ordered by rule declaration with `Other` last.
    /// Categories with no tags are omitted.
    #[must_use]
    pub fn tally<'a, I>(&self, technologies: I) -> Vec<(Category, usize)>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut counts: Vec<(Category, usize)> = self
            .rules
            .iter()
            .map(|rule| (rule.category, 0))
            .chain(std::iter::once((Category::Other, 0)))
            .collect();
        for tag in technologies {
            let category = self.classify(tag);
            if let Some(slot) = counts.iter_mut().find(|(cat, _)| *cat == category) {
                slot.1 += 1;
            }
        }
        counts.retain(|(_, count)| *count > 0);
        counts
    }
}

/// Classify a tag with the built-in keyword table.
#[must_use]
pub fn classify(tag: &str) -> Category {
    TagClassifier::builtin().classify(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn classifies_common_tags() {
        assert_eq!(classify("Python"), Category::Backend);
        assert_eq!(classify("React"), Category::Frontend);
        assert_eq!(classify("PostgreSQL"), Category::Database);
        assert_eq!(classify("Next.js"), Category::Framework);
        assert_eq!(classify("Docker"), Category::DevOps);
        assert_eq!(classify("TensorFlow"), Category::AiMl);
        assert_eq!(classify("JWT"), Category::Security);
    }

    #[test]
    fn first_declared_category_wins_on_overlap() {
        // "flask" is listed under Backend and Framework.
        assert_eq!(classify("Flask"), Category::Backend);
        // "customtkinter" is a Frontend keyword, but Backend's "tkinter" is checked first.
        assert_eq!(classify("CustomTkinter"), Category::Backend);
        // "react 19" is a Framework keyword, shadowed by Frontend's "react".
        assert_eq!(classify("React 19"), Category::Frontend);
        // "pyjwt" is Backend, even though "jwt" belongs to Security.
        assert_eq!(classify("PyJWT"), Category::Backend);
    }

    #[test]
    fn unmatched_and_empty_tags_fall_back_to_other() {
        assert_eq!(classify(""), Category::Other);
        assert_eq!(classify("Rust"), Category::Other);
        assert_eq!(classify("COBOL").label(), "Backend");
        assert_eq!(Category::Other.tone(), Tone::Slate);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(classify("SUPABASE AUTH"), Category::Security);
        assert_eq!(classify("Tailwind CSS v4"), Category::Frontend);
        assert_eq!(classify("Amazon AWS Lambda"), Category::DevOps);
    }

    #[test]
    fn builtin_keywords_are_lower_case() {
        for rule in BUILTIN_RULES {
            for keyword in rule.keywords {
                assert_eq!(*keyword, keyword.to_lowercase(), "keyword {keyword} must be lower-case");
            }
        }
    }

    #[test]
    fn chips_preserve_source_order_and_duplicates() {
        let technologies = tags(&["React", "Python", "React", "Rust"]);
        let chips = TagClassifier::builtin().chips(&technologies);
        let rendered: Vec<_> = chips.iter().map(|chip| (chip.tag, chip.category)).collect();
        assert_eq!(
            rendered,
            vec![
                ("React", Category::Frontend),
                ("Python", Category::Backend),
                ("React", Category::Frontend),
                ("Rust", Category::Other),
            ]
        );
    }

    #[test]
    fn tally_counts_in_declaration_order() {
        let technologies = tags(&["Rust", "React", "Python", "Vue", "Docker"]);
        let tally = TagClassifier::builtin().tally(&technologies);
        assert_eq!(
            tally,
            vec![
                (Category::Backend, 1),
                (Category::Frontend, 2),
                (Category::DevOps, 1),
                (Category::Other, 1),
            ]
        );
    }

    #[test]
    fn custom_tables_follow_their_own_order() {
        static RULES: &[CategoryRule] = &[
            CategoryRule {
                category: Category::Security,
                keywords: &["auth"],
            },
            CategoryRule {
                category: Category::Backend,
                keywords: &["node"],
            },
        ];
        let classifier = TagClassifier::with_rules(RULES);
        assert_eq!(classifier.classify("node-auth"), Category::Security);
        assert_eq!(classifier.classify("Node"), Category::Backend);
        assert_eq!(classifier.classify("Python"), Category::Other);
    }
}
