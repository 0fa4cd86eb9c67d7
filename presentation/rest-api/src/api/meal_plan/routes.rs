use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::meal_plan::use_cases::create::{
    CreateMealPlanEntryParams, CreateMealPlanEntryUseCase,
};
use business::domain::meal_plan::use_cases::delete::{
    DeleteMealPlanEntryParams, DeleteMealPlanEntryUseCase,
};
use business::domain::meal_plan::use_cases::get_all::{GetMealPlanParams, GetMealPlanUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::meal_plan::dto::{CreateMealPlanEntryRequest, MealPlanEntryResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct MealPlanApi {
    create_use_case: Arc<dyn CreateMealPlanEntryUseCase>,
    get_all_use_case: Arc<dyn GetMealPlanUseCase>,
    delete_use_case: Arc<dyn DeleteMealPlanEntryUseCase>,
}

impl MealPlanApi {
    pub fn new(
        create_use_case: Arc<dyn CreateMealPlanEntryUseCase>,
        get_all_use_case: Arc<dyn GetMealPlanUseCase>,
        delete_use_case: Arc<dyn DeleteMealPlanEntryUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            delete_use_case,
        }
    }
}

/// Weekly meal planning
#[OpenApi]
impl MealPlanApi {
    /// List planned meals
    ///
    /// Ordered by date, then breakfast, lunch and dinner.
    #[oai(path = "/meal-plan", method = "get", tag = "ApiTags::MealPlan")]
    async fn get_all(&self, auth: JwtBearer) -> GetMealPlanResponse {
        let params = GetMealPlanParams {
            user_id: auth.0.user_id,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(entries) => GetMealPlanResponse::Ok(Json(
                entries.into_iter().map(MealPlanEntryResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetMealPlanResponse::InternalError(json)
            }
        }
    }

    /// Plan a recipe
    #[oai(path = "/meal-plan", method = "post", tag = "ApiTags::MealPlan")]
    async fn create(
        &self,
        auth: JwtBearer,
        body: Json<CreateMealPlanEntryRequest>,
    ) -> CreateMealPlanEntryResponse {
        let recipe_id = match parse_id(&body.0.recipe_id, "meal_plan.invalid_recipe_id") {
            Ok(id) => id,
            Err(json) => return CreateMealPlanEntryResponse::BadRequest(json),
        };

        let params = CreateMealPlanEntryParams {
            user_id: auth.0.user_id,
            recipe_id,
            plan_date: body.0.plan_date,
            meal_time: body.0.meal_time.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(entry) => CreateMealPlanEntryResponse::Created(Json(entry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CreateMealPlanEntryResponse::NotFound(json),
                    _ => CreateMealPlanEntryResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a planned meal
    #[oai(path = "/meal-plan/:id", method = "delete", tag = "ApiTags::MealPlan")]
    async fn delete(&self, auth: JwtBearer, id: Path<String>) -> DeleteMealPlanEntryResponse {
        let id = match parse_id(&id.0, "meal_plan.invalid_id") {
            Ok(id) => id,
            Err(json) => return DeleteMealPlanEntryResponse::BadRequest(json),
        };

        let params = DeleteMealPlanEntryParams {
            id,
            user_id: auth.0.user_id,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteMealPlanEntryResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteMealPlanEntryResponse::NotFound(json),
                    _ => DeleteMealPlanEntryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetMealPlanResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<MealPlanEntryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateMealPlanEntryResponse {
    #[oai(status = 201)]
    Created(Json<MealPlanEntryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteMealPlanEntryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
