//! Technology catalog
//!
//! The catalog is an immutable table built once at startup. Commands receive
//! it by reference instead of reaching for global state.

mod types;

pub use types::{Category, Technology};

use crate::core::{ScaffoldError, ScaffoldResult};

const TECHNOLOGIES: &[Technology] = &[
    Technology {
        id: "angular",
        category: Category::Web,
        title: "Angular",
        description: "A platform for building mobile and desktop web applications",
        documentation: "https://angular.io/docs",
    },
    Technology {
        id: "astro",
        category: Category::Web,
        title: "Astro",
        description: "Framework for building fast, content-focused websites",
        documentation: "https://docs.astro.build",
    },
    Technology {
        id: "reactjs",
        category: Category::Web,
        title: "ReactJs",
        description: "A JavaScript library for building user interfaces",
        documentation: "https://reactjs.org/docs",
    },
    Technology {
        id: "svelte",
        category: Category::Web,
        title: "Svelte",
        description: "Cybernetically enhanced web apps with less code",
        documentation: "https://svelte.dev/docs",
    },
    Technology {
        id: "vuejs",
        category: Category::Web,
        title: "VueJs",
        description: "Progressive JavaScript framework for building UIs",
        documentation: "https://vuejs.org/guide",
    },
    Technology {
        id: "flutter",
        category: Category::Mobile,
        title: "Flutter",
        description: "UI toolkit for natively compiled mobile applications from a single codebase",
        documentation: "https://docs.flutter.dev",
    },
    Technology {
        id: "apiplatform",
        category: Category::Backend,
        title: "ApiPlatform",
        description: "REST and GraphQL framework to build API-driven projects",
        documentation: "https://api-platform.com/docs",
    },
    Technology {
        id: "expressjs",
        category: Category::Backend,
        title: "ExpressJs",
        description: "Fast, unopinionated, minimalist web framework for Node.js",
        documentation: "https://expressjs.com/en/guide",
    },
    Technology {
        id: "springboot",
        category: Category::Backend,
        title: "SpringBoot",
        description: "Java-based framework for building web applications and microservices",
        documentation: "https://spring.io/projects/spring-boot",
    },
    Technology {
        id: "mariadb",
        category: Category::Database,
        title: "MariaDB",
        description: "Community-developed fork of MySQL relational database",
        documentation: "https://mariadb.org/documentation",
    },
    Technology {
        id: "mongodb",
        category: Category::Database,
        title: "MongoDB",
        description: "NoSQL document database with scalability and flexibility",
        documentation: "https://docs.mongodb.com",
    },
    Technology {
        id: "oracleenterprise",
        category: Category::Database,
        title: "Oracle Enterprise",
        description: "Enterprise-grade relational database management system",
        documentation: "https://docs.oracle.com/en/database",
    },
    Technology {
        id: "postgresql",
        category: Category::Database,
        title: "PostgreSQL",
        description: "Powerful, open source object-relational database system",
        documentation: "https://www.postgresql.org/docs",
    },
];

/// Lookup table of every technology Multitech can scaffold
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    technologies: &'static [Technology],
}

impl Catalog {
    /// The built-in catalog
    pub fn builtin() -> Self {
        Self {
            technologies: TECHNOLOGIES,
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &'static Technology> {
        self.technologies.iter()
    }

    /// Technologies of one category, in catalog order
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &'static Technology> {
        self.technologies.iter().filter(move |t| t.category == category)
    }

    /// Find a technology by id in any category
    pub fn find(&self, id: &str) -> Option<&'static Technology> {
        self.technologies.iter().find(|t| t.id == id)
    }

    /// Find a technology by id within one category
    pub fn find_in(&self, category: Category, id: &str) -> ScaffoldResult<&'static Technology> {
        self.in_category(category)
            .find(|t| t.id == id)
            .ok_or_else(|| ScaffoldError::UnknownTechnology {
                technology: id.to_string(),
                available: self.ids(category).join(", "),
            })
    }

    /// Resolve a namespaced verb such as `backends:springboot`
    pub fn resolve_verb(&self, verb: &str) -> ScaffoldResult<&'static Technology> {
        for category in Category::ALL {
            if let Some(id) = verb.strip_prefix(category.verb_prefix()) {
                return self.find_in(category, id);
            }
        }
        Err(ScaffoldError::UnknownCommand(verb.to_string()))
    }

    pub fn ids(&self, category: Category) -> Vec<&'static str> {
        self.in_category(category).map(|t| t.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_technologies() {
        let catalog = Catalog::builtin();
        for category in Category::ALL {
            assert!(catalog.in_category(category).count() > 0, "{category} is empty");
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<_> = catalog.all().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.all().count());
    }

    #[test]
    fn test_resolve_verb() {
        let catalog = Catalog::builtin();
        let tech = catalog.resolve_verb("guis:web:reactjs").unwrap();
        assert_eq!(tech.id, "reactjs");
        assert_eq!(tech.category, Category::Web);

        let tech = catalog.resolve_verb("databases:mongodb").unwrap();
        assert_eq!(tech.category, Category::Database);
        assert_eq!(tech.verb(), "databases:mongodb");
    }

    #[test]
    fn test_resolve_verb_wrong_category() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            catalog.resolve_verb("backends:reactjs"),
            Err(ScaffoldError::UnknownTechnology { .. })
        ));
        assert!(matches!(
            catalog.resolve_verb("frontends:reactjs"),
            Err(ScaffoldError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_find_in_lists_alternatives() {
        let catalog = Catalog::builtin();
        let err = catalog.find_in(Category::Backend, "django").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("apiplatform"));
        assert!(message.contains("springboot"));
    }
}
