diesel::table! {
    bar (id) {
        id -> Int4,
        name -> Varchar,
        address -> Nullable<Varchar>,
    }
}

diesel::table! {
    bar_beer (id) {
        id -> Int4,
        bar_id -> Int4,
        beer_id -> Int4,
    }
}

diesel::table! {
    beer (id) {
        id -> Int4,
        name -> Varchar,
        abv -> Float8,
    }
}

diesel::table! {
    brewery (id) {
        id -> Int4,
        name -> Varchar,
    }
}

diesel::table! {
    brewery_beer (id) {
        id -> Int4,
        brewery_id -> Int4,
        beer_id -> Int4,
    }
}

diesel::joinable!(bar_beer -> bar (bar_id));
diesel::joinable!(bar_beer -> beer (beer_id));
diesel::joinable!(brewery_beer -> brewery (brewery_id));
diesel::joinable!(brewery_beer -> beer (beer_id));

diesel::allow_tables_to_appear_in_same_query!(bar, bar_beer, beer, brewery, brewery_beer,);
