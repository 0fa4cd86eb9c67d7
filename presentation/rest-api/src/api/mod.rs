pub mod error;
pub mod security;
pub mod tags;

pub mod health {
    pub mod routes;
}
pub mod meal_plan {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod recipe {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod shopping_item {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod shopping_list {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod stock {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
