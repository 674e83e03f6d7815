//! Diesel schema for task persistence.

diesel::table! {
    /// Caseworker task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Non-blank task title.
        title -> Text,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Task status label.
        #[max_length = 20]
        status -> Varchar,
        /// Local due date and time.
        due_date_time -> Timestamp,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
