//! Declarative technology catalog
//!
//! The static table the animator is built from: one entry per technology,
//! each naming a category and the technologies it relates to. The table is
//! constant content, not runtime input; a relation naming a technology that
//! has no entry of its own is a content mistake and is dropped when the
//! topology is built.

use serde::{Deserialize, Serialize};

/// Color constants per category (RGBA, normalized 0.0-1.0)
pub mod colors {
    /// Language nodes: Blue (#4A90D9)
    pub const LANGUAGE: [f32; 4] = [0.290, 0.565, 0.851, 1.0];

    /// Frontend nodes: Green (#50C878)
    pub const FRONTEND: [f32; 4] = [0.314, 0.784, 0.471, 1.0];

    /// Backend nodes: Purple (#9B59B6)
    pub const BACKEND: [f32; 4] = [0.608, 0.349, 0.714, 1.0];

    /// Data/storage nodes: Orange (#E67E22)
    pub const DATA: [f32; 4] = [0.902, 0.494, 0.133, 1.0];

    /// Infrastructure/tooling nodes: Red (#E74C3C)
    pub const INFRA: [f32; 4] = [0.906, 0.298, 0.235, 1.0];

    /// Alpha applied to edge lines (relationship, not boundary)
    pub const EDGE_ALPHA: f32 = 0.35;
}

/// Category a technology belongs to; determines node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Language,
    Frontend,
    Backend,
    Data,
    Infra,
}

impl Category {
    /// Display color for this category
    pub fn color(&self) -> [f32; 4] {
        match self {
            Category::Language => colors::LANGUAGE,
            Category::Frontend => colors::FRONTEND,
            Category::Backend => colors::BACKEND,
            Category::Data => colors::DATA,
            Category::Infra => colors::INFRA,
        }
    }
}

/// One row of the declarative table.
#[derive(Debug, Clone, Copy)]
pub struct TechEntry {
    /// Stable identity, also the display label
    pub name: &'static str,
    /// Category (determines color)
    pub category: Category,
    /// Names of related technologies; unresolved names are dropped at build time
    pub related: &'static [&'static str],
}

/// The default technology-relationship table shipped with the crate.
pub fn default_catalog() -> &'static [TechEntry] {
    DEFAULT_CATALOG
}

const DEFAULT_CATALOG: &[TechEntry] = &[
    TechEntry {
        name: "TypeScript",
        category: Category::Language,
        related: &["JavaScript", "React", "Next.js", "Node.js"],
    },
    TechEntry {
        name: "JavaScript",
        category: Category::Language,
        related: &["TypeScript", "React", "Node.js"],
    },
    TechEntry {
        name: "Python",
        category: Category::Language,
        related: &["PostgreSQL", "Docker"],
    },
    TechEntry {
        name: "React",
        category: Category::Frontend,
        related: &["TypeScript", "Next.js", "Tailwind"],
    },
    TechEntry {
        name: "Next.js",
        category: Category::Frontend,
        related: &["React", "Node.js", "Tailwind"],
    },
    TechEntry {
        name: "Tailwind",
        category: Category::Frontend,
        related: &["React", "Next.js"],
    },
    TechEntry {
        name: "Node.js",
        category: Category::Backend,
        related: &["Express", "GraphQL", "PostgreSQL"],
    },
    TechEntry {
        name: "Express",
        category: Category::Backend,
        related: &["Node.js", "MongoDB"],
    },
    TechEntry {
        name: "GraphQL",
        category: Category::Backend,
        related: &["Node.js", "PostgreSQL"],
    },
    TechEntry {
        name: "PostgreSQL",
        category: Category::Data,
        related: &["Node.js", "Python"],
    },
    TechEntry {
        name: "MongoDB",
        category: Category::Data,
        related: &["Express"],
    },
    TechEntry {
        name: "Redis",
        category: Category::Data,
        related: &["Node.js", "Docker"],
    },
    TechEntry {
        name: "Docker",
        category: Category::Infra,
        related: &["AWS", "Python", "Redis"],
    },
    TechEntry {
        name: "AWS",
        category: Category::Infra,
        related: &["Docker", "PostgreSQL"],
    },
    TechEntry {
        name: "Git",
        category: Category::Infra,
        related: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        let entries = default_catalog();
        for (i, entry) in entries.iter().enumerate() {
            for other in &entries[i + 1..] {
                assert_ne!(entry.name, other.name, "duplicate catalog entry");
            }
        }
    }

    #[test]
    fn catalog_relations_resolve() {
        let entries = default_catalog();
        for entry in entries {
            for related in entry.related {
                assert!(
                    entries.iter().any(|e| e.name == *related),
                    "{} relates to unknown technology {}",
                    entry.name,
                    related
                );
            }
        }
    }

    #[test]
    fn every_category_has_opaque_color() {
        for category in [
            Category::Language,
            Category::Frontend,
            Category::Backend,
            Category::Data,
            Category::Infra,
        ] {
            assert_eq!(category.color()[3], 1.0);
        }
    }
}
