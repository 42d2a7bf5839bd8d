pub mod id_source;

pub use id_source::IdSource;
