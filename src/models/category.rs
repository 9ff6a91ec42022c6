use serde::Serialize;

/// Static reference entity. Categories are fixed at build time and never
/// persisted; the product `category` field is expected (not enforced) to
/// hold one of these slugs.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Category {
    pub slug: &'static str,
    pub name: &'static str,
}

pub const CATEGORIES: [Category; 4] = [
    Category {
        slug: "books",
        name: "Books",
    },
    Category {
        slug: "merch",
        name: "Merch",
    },
    Category {
        slug: "study",
        name: "Study Utilities",
    },
    Category {
        slug: "snacks",
        name: "Snacks",
    },
];
