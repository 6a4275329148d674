//! Background tasks for the HTTP presentation layer

mod cache_purge;

pub use cache_purge::spawn_cache_purge_task;
