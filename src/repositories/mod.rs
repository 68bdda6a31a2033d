//! Query helpers over the SeaORM entities. Entities stay plain data; the
//! reads and upserts live here.

pub mod preference;

pub use preference::PreferenceRepository;
