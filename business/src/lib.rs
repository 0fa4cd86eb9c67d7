pub mod application {
    pub mod meal_plan {
        pub mod create;
        pub mod delete;
        pub mod get_all;
    }
    pub mod recipe {
        pub mod create;
        pub mod delete;
        pub mod get_ingredients;
        mod ingredient_lines;
        pub mod replace_ingredients;
    }
    pub mod shopping_item {
        pub mod clear_checked;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod update;
    }
    pub mod shopping_list {
        pub mod generate;
    }
    pub mod stock {
        pub mod delete;
        pub mod get_all;
        pub mod set;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod unit;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod ingredient {
        pub mod model;
        pub mod repository;
    }
    pub mod meal_plan {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_ingredients;
            pub mod replace_ingredients;
        }
    }
    pub mod shopping_item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod clear_checked;
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod update;
        }
    }
    pub mod shopping_list {
        pub mod aggregator;
        pub mod builder;
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod generate;
        }
    }
    pub mod stock {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
            pub mod set;
        }
    }
}
