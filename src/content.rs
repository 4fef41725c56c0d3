//! Built-in reference snippets
//!
//! The boilerplate content the viewer displays, embedded at build time
//! from `content/`. The highlighter itself carries none of it, so the
//! engine stays independently testable and any text can be run through it.

use crate::highlight::Language;

/// One displayable snippet.
#[derive(Debug, Clone, Copy)]
pub struct Snippet {
    /// Short name used on the command line
    pub name: &'static str,
    /// Tab label: the file name a user would save this as
    pub label: &'static str,
    /// Panel heading
    pub title: &'static str,
    /// Dialect the snippet is highlighted with
    pub language: Language,
    /// The snippet text
    pub body: &'static str,
    /// Setup notes shown beside the panel
    pub notes: &'static [&'static str],
}

/// All built-in snippets, in tab order.
pub const SNIPPETS: &[Snippet] = &[
    Snippet {
        name: "schema",
        label: "schema.prisma",
        title: "Database Schema",
        language: Language::Schema,
        body: include_str!("../content/schema.prisma"),
        notes: &[
            "Copy the schema code.",
            "Paste it into prisma/schema.prisma.",
            "Run npx prisma generate.",
        ],
    },
    Snippet {
        name: "sql",
        label: "setup.sql",
        title: "SQL Setup",
        language: Language::Schema,
        body: include_str!("../content/setup.sql"),
        notes: &[
            "Copy the entire SQL block.",
            "Open the SQL editor in your database dashboard.",
            "Paste and run: tables and seed data are created in one pass.",
        ],
    },
    Snippet {
        name: "seed",
        label: "seed.ts",
        title: "Seed Script",
        language: Language::Script,
        body: include_str!("../content/seed.ts"),
        notes: &[
            "Optional if you already ran the SQL setup.",
            "Use it for automated seeding from the CLI later.",
        ],
    },
    Snippet {
        name: "actions",
        label: "actions.ts",
        title: "Server Actions",
        language: Language::Script,
        body: include_str!("../content/actions.ts"),
        notes: &[
            "Create app/actions.ts and paste the code.",
            "Import the functions from client or server components.",
            "Uncomment the auth checks once your auth provider is installed.",
        ],
    },
    Snippet {
        name: "ui",
        label: "components.tsx",
        title: "UI Components",
        language: Language::Script,
        body: include_str!("../content/components.tsx"),
        notes: &[
            "Split into three files as marked by the banner comments.",
            "Ensure the prisma client singleton is set up.",
            "Test by navigating to /unit/pondok-pesantren.",
        ],
    },
    Snippet {
        name: "admin",
        label: "admin.tsx",
        title: "Admin CMS",
        language: Language::Script,
        body: include_str!("../content/admin.tsx"),
        notes: &[
            "Create the app/admin directory structure.",
            "Paste the layout into app/admin/layout.tsx.",
            "Re-enable the RBAC checks to protect the route.",
        ],
    },
    Snippet {
        name: "env",
        label: ".env",
        title: "Environment",
        language: Language::Schema,
        body: include_str!("../content/env.example"),
        notes: &[
            "Create a .env file in the project root.",
            "Replace the placeholder credentials with real ones.",
            "Generate an auth secret and paste it in.",
        ],
    },
];

/// Look up a snippet by name.
pub fn find(name: &str) -> Option<&'static Snippet> {
    SNIPPETS.iter().find(|s| s.name == name)
}
