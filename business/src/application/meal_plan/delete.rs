use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::meal_plan::repository::MealPlanRepository;
use crate::domain::meal_plan::use_cases::delete::{
    DeleteMealPlanEntryParams, DeleteMealPlanEntryUseCase,
};

pub struct DeleteMealPlanEntryUseCaseImpl {
    pub repository: Arc<dyn MealPlanRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteMealPlanEntryUseCase for DeleteMealPlanEntryUseCaseImpl {
    async fn execute(&self, params: DeleteMealPlanEntryParams) -> Result<(), MealPlanError> {
        self.logger
            .info(&format!("Removing meal plan entry: {}", params.id));

        self.repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MealPlanError::NotFound,
                other => MealPlanError::Repository(other),
            })?;

        self.repository.delete(params.id, &params.user_id).await?;

        self.logger
            .info(&format!("Meal plan entry removed: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meal_plan::model::MealPlanEntry;
    use crate::domain::meal_plan::value_objects::MealTime;
    use crate::domain::shared::value_objects::UserId;
    use chrono::NaiveDate;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub MealPlanRepo {}

        #[async_trait]
        impl MealPlanRepository for MealPlanRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<MealPlanEntry>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<MealPlanEntry, RepositoryError>;
            async fn save(&self, entry: &MealPlanEntry) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-id")
    }

    #[tokio::test]
    async fn should_delete_own_entry() {
        let mut mock_repo = MockMealPlanRepo::new();
        mock_repo.expect_get_by_id().returning(|id, user_id| {
            Ok(MealPlanEntry::from_repository(
                id,
                user_id.clone(),
                Uuid::new_v4(),
                NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
                MealTime::Breakfast,
                chrono::Utc::now(),
            ))
        });
        mock_repo.expect_delete().times(1).returning(|_, _| Ok(()));

        let use_case = DeleteMealPlanEntryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteMealPlanEntryParams {
                id: Uuid::new_v4(),
                user_id: test_user_id(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_for_foreign_or_missing_entry() {
        let mut mock_repo = MockMealPlanRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteMealPlanEntryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteMealPlanEntryParams {
                id: Uuid::new_v4(),
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), MealPlanError::NotFound));
    }
}
