diesel::table! {
    words (id) {
        id -> Integer,
        burushaski -> Text,
        english -> Text,
        urdu -> Nullable<Text>,
        word_class -> Nullable<Text>,
        dialect -> Text,
        pronunciation_ipa -> Nullable<Text>,
        audio_file -> Nullable<Text>,
        example_sentence -> Nullable<Text>,
        example_translation -> Nullable<Text>,
        notes -> Nullable<Text>,
        verified -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    phrases (id) {
        id -> Integer,
        burushaski -> Text,
        english -> Text,
        urdu -> Nullable<Text>,
        context -> Nullable<Text>,
        formality -> Nullable<Text>,
        dialect -> Text,
        audio_file -> Nullable<Text>,
        usage_notes -> Nullable<Text>,
        verified -> Bool,
        created_at -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(words, phrases);
