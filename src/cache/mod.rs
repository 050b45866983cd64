// Cache module for local filesystem caching.
// Persists GitHub API responses so reruns skip already-fetched data.

pub mod paths;
pub mod store;
