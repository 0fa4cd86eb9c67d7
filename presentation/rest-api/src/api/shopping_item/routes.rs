use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shopping_item::use_cases::clear_checked::{
    ClearCheckedItemsParams, ClearCheckedItemsUseCase,
};
use business::domain::shopping_item::use_cases::create::{
    CreateShoppingItemParams, CreateShoppingItemUseCase,
};
use business::domain::shopping_item::use_cases::delete::{
    DeleteShoppingItemParams, DeleteShoppingItemUseCase,
};
use business::domain::shopping_item::use_cases::get_all::{
    GetAllShoppingItemsParams, GetAllShoppingItemsUseCase,
};
use business::domain::shopping_item::use_cases::update::{
    UpdateShoppingItemParams, UpdateShoppingItemUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::security::JwtBearer;
use crate::api::shopping_item::dto::{
    ClearCheckedResponse, CreateShoppingItemRequest, ShoppingItemResponse,
    UpdateShoppingItemRequest,
};
use crate::api::tags::ApiTags;

pub struct ShoppingItemApi {
    create_use_case: Arc<dyn CreateShoppingItemUseCase>,
    get_all_use_case: Arc<dyn GetAllShoppingItemsUseCase>,
    update_use_case: Arc<dyn UpdateShoppingItemUseCase>,
    delete_use_case: Arc<dyn DeleteShoppingItemUseCase>,
    clear_checked_use_case: Arc<dyn ClearCheckedItemsUseCase>,
}

impl ShoppingItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateShoppingItemUseCase>,
        get_all_use_case: Arc<dyn GetAllShoppingItemsUseCase>,
        update_use_case: Arc<dyn UpdateShoppingItemUseCase>,
        delete_use_case: Arc<dyn DeleteShoppingItemUseCase>,
        clear_checked_use_case: Arc<dyn ClearCheckedItemsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            update_use_case,
            delete_use_case,
            clear_checked_use_case,
        }
    }
}

/// The user's own shopping list
#[OpenApi]
impl ShoppingItemApi {
    /// List shopping items
    ///
    /// Newest first.
    #[oai(path = "/shopping-items", method = "get", tag = "ApiTags::ShoppingItems")]
    async fn get_all(&self, auth: JwtBearer) -> GetAllShoppingItemsResponse {
        let params = GetAllShoppingItemsParams {
            user_id: auth.0.user_id,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(items) => GetAllShoppingItemsResponse::Ok(Json(
                items.into_iter().map(ShoppingItemResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllShoppingItemsResponse::InternalError(json)
            }
        }
    }

    /// Add a shopping item
    #[oai(path = "/shopping-items", method = "post", tag = "ApiTags::ShoppingItems")]
    async fn create(
        &self,
        auth: JwtBearer,
        body: Json<CreateShoppingItemRequest>,
    ) -> CreateShoppingItemResponse {
        let params = CreateShoppingItemParams {
            user_id: auth.0.user_id,
            name: body.0.name,
            quantity: body.0.quantity,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateShoppingItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateShoppingItemResponse::BadRequest(json),
                    _ => CreateShoppingItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a shopping item
    ///
    /// Only the fields present in the body change.
    #[oai(path = "/shopping-items/:id", method = "put", tag = "ApiTags::ShoppingItems")]
    async fn update(
        &self,
        auth: JwtBearer,
        id: Path<String>,
        body: Json<UpdateShoppingItemRequest>,
    ) -> UpdateShoppingItemResponse {
        let id = match parse_id(&id.0, "shopping_item.invalid_id") {
            Ok(id) => id,
            Err(json) => return UpdateShoppingItemResponse::BadRequest(json),
        };

        let params = UpdateShoppingItemParams {
            id,
            user_id: auth.0.user_id,
            name: body.0.name,
            quantity: body.0.quantity,
            is_checked: body.0.is_checked,
        };

        match self.update_use_case.execute(params).await {
            Ok(item) => UpdateShoppingItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateShoppingItemResponse::BadRequest(json),
                    404 => UpdateShoppingItemResponse::NotFound(json),
                    _ => UpdateShoppingItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a shopping item
    #[oai(path = "/shopping-items/:id", method = "delete", tag = "ApiTags::ShoppingItems")]
    async fn delete(&self, auth: JwtBearer, id: Path<String>) -> DeleteShoppingItemResponse {
        let id = match parse_id(&id.0, "shopping_item.invalid_id") {
            Ok(id) => id,
            Err(json) => return DeleteShoppingItemResponse::BadRequest(json),
        };

        let params = DeleteShoppingItemParams {
            id,
            user_id: auth.0.user_id,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteShoppingItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteShoppingItemResponse::NotFound(json),
                    _ => DeleteShoppingItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear checked items
    ///
    /// Removes every item already checked off and returns how many went.
    #[oai(
        path = "/shopping-items/checked",
        method = "delete",
        tag = "ApiTags::ShoppingItems"
    )]
    async fn clear_checked(&self, auth: JwtBearer) -> ClearCheckedItemsResponse {
        let params = ClearCheckedItemsParams {
            user_id: auth.0.user_id,
        };

        match self.clear_checked_use_case.execute(params).await {
            Ok(count) => ClearCheckedItemsResponse::Ok(Json(ClearCheckedResponse { count })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearCheckedItemsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllShoppingItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShoppingItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateShoppingItemResponse {
    #[oai(status = 201)]
    Created(Json<ShoppingItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateShoppingItemResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteShoppingItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCheckedItemsResponse {
    #[oai(status = 200)]
    Ok(Json<ClearCheckedResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
