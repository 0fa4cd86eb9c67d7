pub mod db;
pub mod ingredient {
    pub mod entity;
    pub mod repository;
}
pub mod meal_plan {
    pub mod entity;
    pub mod repository;
}
pub mod recipe {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_item {
    pub mod entity;
    pub mod repository;
}
pub mod stock {
    pub mod entity;
    pub mod repository;
}
