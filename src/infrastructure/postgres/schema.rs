diesel::table! {
    recharge_plans (id) {
        id -> Uuid,
        operator -> Text,
        plan_type -> Text,
        amount -> Int4,
        validity -> Text,
        description -> Text,
        benefits -> Array<Text>,
        is_active -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
