use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};
use business::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};
use business::domain::recipe::use_cases::get_ingredients::{
    GetRecipeIngredientsParams, GetRecipeIngredientsUseCase,
};
use business::domain::recipe::use_cases::replace_ingredients::{
    ReplaceRecipeIngredientsParams, ReplaceRecipeIngredientsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::recipe::dto::{
    CreateRecipeRequest, RecipeIngredientResponse, RecipeResponse, ReplaceRecipeIngredientsRequest,
};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct RecipeApi {
    create_use_case: Arc<dyn CreateRecipeUseCase>,
    delete_use_case: Arc<dyn DeleteRecipeUseCase>,
    get_ingredients_use_case: Arc<dyn GetRecipeIngredientsUseCase>,
    replace_ingredients_use_case: Arc<dyn ReplaceRecipeIngredientsUseCase>,
}

impl RecipeApi {
    pub fn new(
        create_use_case: Arc<dyn CreateRecipeUseCase>,
        delete_use_case: Arc<dyn DeleteRecipeUseCase>,
        get_ingredients_use_case: Arc<dyn GetRecipeIngredientsUseCase>,
        replace_ingredients_use_case: Arc<dyn ReplaceRecipeIngredientsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            delete_use_case,
            get_ingredients_use_case,
            replace_ingredients_use_case,
        }
    }
}

/// Recipes and their ingredient lines
#[OpenApi]
impl RecipeApi {
    /// Create recipe
    ///
    /// The caller becomes the author. Ingredient amounts are typed as text
    /// ("200 gr", "1.5kg") and unknown ingredient names are created.
    #[oai(path = "/recipes", method = "post", tag = "ApiTags::Recipes")]
    async fn create(&self, auth: JwtBearer, body: Json<CreateRecipeRequest>) -> CreateRecipeResponse {
        let request = body.0;
        let params = CreateRecipeParams {
            author_id: auth.0.user_id,
            title: request.title,
            description: request.description,
            instructions: request.instructions,
            ingredients: request.ingredients.into_iter().map(Into::into).collect(),
        };

        match self.create_use_case.execute(params).await {
            Ok(created) => CreateRecipeResponse::Created(Json(created.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateRecipeResponse::BadRequest(json),
                    _ => CreateRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete recipe
    ///
    /// Author or admin only. Its ingredient lines and meal plan entries go too.
    #[oai(path = "/recipes/:id", method = "delete", tag = "ApiTags::Recipes")]
    async fn delete(&self, auth: JwtBearer, id: Path<String>) -> DeleteRecipeResponse {
        let recipe_id = match parse_id(&id.0, "recipe.invalid_id") {
            Ok(id) => id,
            Err(json) => return DeleteRecipeResponse::BadRequest(json),
        };

        let params = DeleteRecipeParams {
            recipe_id,
            requester: auth.0,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteRecipeResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteRecipeResponse::Forbidden(json),
                    404 => DeleteRecipeResponse::NotFound(json),
                    _ => DeleteRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// Get recipe ingredients
    ///
    /// Public. Quantities are converted to display units (ounces and pounds
    /// to grams or kilograms, spoon and cup names to their short forms).
    #[oai(path = "/recipes/:id/ingredients", method = "get", tag = "ApiTags::Recipes")]
    async fn get_ingredients(&self, id: Path<String>) -> GetRecipeIngredientsResponse {
        let recipe_id = match parse_id(&id.0, "recipe.invalid_id") {
            Ok(id) => id,
            Err(json) => return GetRecipeIngredientsResponse::BadRequest(json),
        };

        match self
            .get_ingredients_use_case
            .execute(GetRecipeIngredientsParams { recipe_id })
            .await
        {
            Ok(lines) => GetRecipeIngredientsResponse::Ok(Json(
                lines.into_iter().map(RecipeIngredientResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRecipeIngredientsResponse::NotFound(json),
                    _ => GetRecipeIngredientsResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace recipe ingredients
    ///
    /// Author or admin only. Unknown ingredient names are created; an
    /// ingredient still counted in `ud` takes the unit typed here.
    #[oai(path = "/recipes/:id/ingredients", method = "put", tag = "ApiTags::Recipes")]
    async fn replace_ingredients(
        &self,
        auth: JwtBearer,
        id: Path<String>,
        body: Json<ReplaceRecipeIngredientsRequest>,
    ) -> ReplaceRecipeIngredientsResponse {
        let recipe_id = match parse_id(&id.0, "recipe.invalid_id") {
            Ok(id) => id,
            Err(json) => return ReplaceRecipeIngredientsResponse::BadRequest(json),
        };

        let params = ReplaceRecipeIngredientsParams {
            recipe_id,
            requester: auth.0,
            ingredients: body.0.ingredients.into_iter().map(Into::into).collect(),
        };

        match self.replace_ingredients_use_case.execute(params).await {
            Ok(lines) => ReplaceRecipeIngredientsResponse::Ok(Json(
                lines.into_iter().map(RecipeIngredientResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ReplaceRecipeIngredientsResponse::BadRequest(json),
                    403 => ReplaceRecipeIngredientsResponse::Forbidden(json),
                    404 => ReplaceRecipeIngredientsResponse::NotFound(json),
                    _ => ReplaceRecipeIngredientsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateRecipeResponse {
    #[oai(status = 201)]
    Created(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteRecipeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecipeIngredientsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecipeIngredientResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReplaceRecipeIngredientsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecipeIngredientResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
