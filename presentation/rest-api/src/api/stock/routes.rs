use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::stock::use_cases::delete::{DeleteStockParams, DeleteStockUseCase};
use business::domain::stock::use_cases::get_all::{GetStockParams, GetStockUseCase};
use business::domain::stock::use_cases::set::{SetStockParams, SetStockUseCase};
use business::domain::unit::parse_quantity;

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id, validation_error};
use crate::api::security::JwtBearer;
use crate::api::stock::dto::{SetStockRequest, StockEntryResponse};
use crate::api::tags::ApiTags;

pub struct StockApi {
    set_use_case: Arc<dyn SetStockUseCase>,
    get_all_use_case: Arc<dyn GetStockUseCase>,
    delete_use_case: Arc<dyn DeleteStockUseCase>,
}

impl StockApi {
    pub fn new(
        set_use_case: Arc<dyn SetStockUseCase>,
        get_all_use_case: Arc<dyn GetStockUseCase>,
        delete_use_case: Arc<dyn DeleteStockUseCase>,
    ) -> Self {
        Self {
            set_use_case,
            get_all_use_case,
            delete_use_case,
        }
    }
}

/// What the user already has at home
#[OpenApi]
impl StockApi {
    /// List pantry stock
    #[oai(path = "/stock", method = "get", tag = "ApiTags::Stock")]
    async fn get_all(&self, auth: JwtBearer) -> GetStockResponse {
        let params = GetStockParams {
            user_id: auth.0.user_id,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(entries) => GetStockResponse::Ok(Json(
                entries.into_iter().map(StockEntryResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetStockResponse::InternalError(json)
            }
        }
    }

    /// Set stock of an ingredient
    ///
    /// Replaces the stored amount; zero is allowed, negative amounts are not.
    #[oai(path = "/stock/:ingredient_id", method = "put", tag = "ApiTags::Stock")]
    async fn set(
        &self,
        auth: JwtBearer,
        ingredient_id: Path<String>,
        body: Json<SetStockRequest>,
    ) -> SetStockResponse {
        let ingredient_id = match parse_id(&ingredient_id.0, "stock.invalid_ingredient_id") {
            Ok(id) => id,
            Err(json) => return SetStockResponse::BadRequest(json),
        };
        let quantity = match parse_quantity(&body.0.quantity) {
            Ok(quantity) => quantity,
            Err(_) => return SetStockResponse::BadRequest(validation_error("stock.invalid_quantity")),
        };

        let params = SetStockParams {
            user_id: auth.0.user_id,
            ingredient_id,
            quantity,
        };

        match self.set_use_case.execute(params).await {
            Ok(entry) => SetStockResponse::Ok(Json(entry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SetStockResponse::BadRequest(json),
                    404 => SetStockResponse::NotFound(json),
                    _ => SetStockResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove an ingredient from stock
    #[oai(path = "/stock/:ingredient_id", method = "delete", tag = "ApiTags::Stock")]
    async fn delete(&self, auth: JwtBearer, ingredient_id: Path<String>) -> DeleteStockResponse {
        let ingredient_id = match parse_id(&ingredient_id.0, "stock.invalid_ingredient_id") {
            Ok(id) => id,
            Err(json) => return DeleteStockResponse::BadRequest(json),
        };

        let params = DeleteStockParams {
            user_id: auth.0.user_id,
            ingredient_id,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteStockResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteStockResponse::NotFound(json),
                    _ => DeleteStockResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetStockResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<StockEntryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SetStockResponse {
    #[oai(status = 200)]
    Ok(Json<StockEntryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteStockResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
