// Site generation pipeline.
// Lister ensures the repo cache, the language resolver backfills and
// aggregates per-repo caches, and the renderer produces the page.

pub mod languages;
pub mod lister;
pub mod render;
pub mod template;

pub use render::generate_site;
pub use template::site_template;
