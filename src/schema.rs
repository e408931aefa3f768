table! {
    posts (id) {
        id -> Integer,
        title -> Text,
        content -> Nullable<Text>,
        published -> Bool,
        created_at -> Timestamp,
    }
}
