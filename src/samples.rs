//! Built-in sample `.env` files.
//!
//! Samples let users try every command without a file of their own. The
//! contents are embedded at compile time from the `samples/` directory.

/// A bundled sample `.env` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Selector used on the command line.
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}

/// All bundled samples.
pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "nextjs",
        title: "Next.js App",
        description: "Typical Next.js application with authentication and database",
        content: include_str!("../samples/nextjs.env"),
    },
    Sample {
        name: "node-api",
        title: "Node.js API",
        description: "Backend API with database and external services for a Node.js app",
        content: include_str!("../samples/node-api.env"),
    },
    Sample {
        name: "problematic",
        title: "Problematic .env",
        description: "Example with common issues to demonstrate validation",
        content: include_str!("../samples/problematic.env"),
    },
];

/// Find a sample by name.
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.name == name)
}

/// Comma-separated list of sample names.
pub fn names() -> String {
    SAMPLES
        .iter()
        .map(|s| s.name)
        .collect::<Vec<_>>()
        .join(", ")
}
