use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::shopping_list::use_cases::generate::{
    GenerateShoppingListParams, GenerateShoppingListUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::shopping_list::dto::ShoppingListEntryResponse;
use crate::api::tags::ApiTags;

pub struct ShoppingListApi {
    generate_use_case: Arc<dyn GenerateShoppingListUseCase>,
}

impl ShoppingListApi {
    pub fn new(generate_use_case: Arc<dyn GenerateShoppingListUseCase>) -> Self {
        Self { generate_use_case }
    }
}

#[OpenApi]
impl ShoppingListApi {
    /// Generate shopping list
    ///
    /// Adds up the ingredients of every planned meal, subtracts what is in
    /// stock and returns what is still needed in display units. With
    /// `save=true` the lines are also stored in the user's shopping list,
    /// skipping names already pending there.
    #[oai(
        path = "/shopping-list/generate",
        method = "post",
        tag = "ApiTags::ShoppingList"
    )]
    async fn generate(
        &self,
        auth: JwtBearer,
        save: Query<Option<bool>>,
    ) -> GenerateShoppingListResponse {
        let params = GenerateShoppingListParams {
            user_id: auth.0.user_id,
            save_to_list: save.0.unwrap_or(false),
        };

        match self.generate_use_case.execute(params).await {
            Ok(entries) => GenerateShoppingListResponse::Ok(Json(
                entries
                    .into_iter()
                    .map(ShoppingListEntryResponse::from)
                    .collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GenerateShoppingListResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GenerateShoppingListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShoppingListEntryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
