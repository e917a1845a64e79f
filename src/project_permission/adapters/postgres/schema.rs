//! Diesel schema for the platform project table.

diesel::table! {
    /// Platform projects.
    t_project (id) {
        /// Surrogate key.
        id -> Int8,
        /// Project english name, the stable project code.
        #[max_length = 64]
        english_name -> Varchar,
        /// Project display name.
        #[max_length = 64]
        project_name -> Varchar,
        /// Whether the project is disabled.
        is_offlined -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
