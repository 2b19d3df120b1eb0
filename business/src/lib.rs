pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear_cart;
        pub mod get_cart;
        pub mod hydrate;
        pub mod remove_item;
        pub mod session;
        pub mod sessions;
        pub mod update_quantity;
    }
    pub mod catalog {
        pub mod cache;
        pub mod get_all;
        pub mod get_by_category;
        pub mod get_by_id;
        pub mod get_categories;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod store;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear_cart;
            pub mod get_cart;
            pub mod hydrate;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod product {
        pub mod catalog;
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_category;
            pub mod get_by_id;
            pub mod get_categories;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
