//! Diesel schema for to-do persistence.

diesel::table! {
    /// To-do records keyed by a store-assigned serial identifier.
    todos (id) {
        /// Store-assigned identifier.
        id -> BigInt,
        /// Description text.
        description -> Text,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
