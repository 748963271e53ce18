//! Static technology badge registry.
//!
//! Holds the literal key-to-badge table and the lookup helpers. The table is
//! assembled into a hash map once, on first access, and is read-only for the
//! process lifetime; any number of threads may call the accessors without
//! coordination.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::trace;

use crate::badge::Badge;

/// Key of the badge substituted when a lookup key is unrecognized.
///
/// Rendering code must never receive an absent badge, so misses resolve to
/// this entry instead of signaling an error.
pub const FALLBACK_KEY: &str = "html";

/// The literal badge table. Keys are short identifiers as they appear in
/// project/skill data; matching is exact and case-sensitive.
const TABLE: &[(&str, Badge)] = &[
    ("angular", Badge::new("Angular", "angular")),
    ("astro", Badge::new("Astro", "astro")),
    ("bootstrap", Badge::new("Bootstrap", "bootstrap")),
    ("cloudflare", Badge::new("Cloudflare", "cloudflare")),
    ("html", Badge::new("HTML 5", "html")),
    ("javascript", Badge::new("JavaScript", "javascript")),
    ("mysql", Badge::with_class("MySQL", "mysql", "bg-[#f6ece1]!")),
    ("wordpress", Badge::new("Wordpress", "wordpress")),
    ("node", Badge::new("Node.js", "node")),
    ("tailwind", Badge::new("Tailwind CSS", "tailwind")),
    ("figma", Badge::new("Figma", "figma")),
    ("firebase", Badge::new("Firebase", "firebase")),
    ("markdown", Badge::new("Markdown", "markdown")),
    ("php", Badge::new("PHP", "php")),
    ("sass", Badge::new("Sass", "sass")),
    ("ts", Badge::new("TypeScript", "typescript")),
    ("git", Badge::new("Git", "git")),
    ("css", Badge::new("CSS", "css")),
    ("vercel", Badge::new("Vercel", "vercel")),
    ("netlify", Badge::new("Netlify", "netlify")),
    ("gatsby", Badge::new("Gatsby", "gatsby")),
    ("windsurf", Badge::new("Windsurf", "windsurf-logo")),
    ("cursor", Badge::new("Cursor", "cursor-ia")),
    ("deepseek", Badge::new("DeepSeek", "deepseek")),
    ("python", Badge::new("Python", "python")),
    ("aws", Badge::new("AWS", "aws")),
    ("postgresql", Badge::new("PostgreSQL", "postgresql")),
    ("tensorflow", Badge::new("TensorFlow", "tensorflow")),
    ("pytorch", Badge::new("PyTorch", "pytorch")),
    ("matplotlib", Badge::new("Matplotlib", "matplotlib")),
    ("seaborn", Badge::new("Seaborn", "seaborn")),
    ("jupyter", Badge::new("Jupyter", "jupyter")),
    ("r", Badge::new("R", "r")),
    ("airbyte", Badge::new("Airbyte", "airbyte")),
    ("dbt", Badge::new("dbt", "dbt")),
    ("vscode", Badge::new("VS Code", "vscode")),
    ("docker", Badge::new("Docker", "docker")),
    ("kubernetes", Badge::new("Kubernetes", "kubernetes")),
    ("airflow", Badge::new("Airflow", "airflow")),
    ("fastapi", Badge::new("FastAPI", "fastapi")),
    ("flask", Badge::new("Flask", "flask")),
    ("linux", Badge::new("Linux", "linux")),
    ("terraform", Badge::new("Terraform", "terraform")),
    ("numpy", Badge::new("NumPy", "numpy")),
    ("pandas", Badge::new("Pandas", "pandas")),
    ("scikit", Badge::new("Scikit-learn", "scikit-learn")),
    ("powerbi", Badge::new("Power BI", "powerbi")),
    ("mongodb", Badge::new("MongoDB", "mongodb")),
    ("kafka", Badge::new("Kafka", "kafka")),
    ("spark", Badge::new("Apache Spark", "spark")),
];

/// The assembled registry. A duplicate key or a missing fallback entry in
/// [`TABLE`] is a programming error and fails construction outright rather
/// than silently dropping data.
static REGISTRY: LazyLock<HashMap<&'static str, &'static Badge>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(TABLE.len());
    for (key, badge) in TABLE {
        let previous = map.insert(*key, badge);
        assert!(previous.is_none(), "duplicate badge key in table: {key:?}");
    }
    assert!(
        map.contains_key(FALLBACK_KEY),
        "fallback badge {FALLBACK_KEY:?} missing from table"
    );
    map
});

/// Resolve `key` to its badge, substituting the fallback badge when the key
/// is unknown.
///
/// Total over all string inputs: the empty string, wrong-case keys, and
/// arbitrary garbage all resolve to the fallback badge. Never errors.
pub fn lookup(key: &str) -> &'static Badge {
    match get(key) {
        Some(badge) => badge,
        None => {
            trace!(key, "unknown badge key, substituting fallback");
            fallback()
        }
    }
}

/// Miss-visible variant of [`lookup`] for callers that need to distinguish
/// an unknown key from a hit.
pub fn get(key: &str) -> Option<&'static Badge> {
    REGISTRY.get(key).copied()
}

/// The designated fallback badge (keyed [`FALLBACK_KEY`]).
pub fn fallback() -> &'static Badge {
    // Presence is asserted during registry construction.
    REGISTRY[FALLBACK_KEY]
}

/// Whether `key` is registered.
pub fn contains(key: &str) -> bool {
    REGISTRY.contains_key(key)
}

/// All registered keys, in no particular order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

/// All registered entries, in no particular order.
pub fn badges() -> impl Iterator<Item = (&'static str, &'static Badge)> {
    REGISTRY.iter().map(|(key, badge)| (*key, *badge))
}

/// Number of registered badges.
pub fn len() -> usize {
    REGISTRY.len()
}

/// Whether the registry has no badges. Always false for the literal table,
/// which at minimum carries the fallback entry.
pub fn is_empty() -> bool {
    REGISTRY.is_empty()
}
