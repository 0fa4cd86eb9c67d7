use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::stock::errors::StockError;
use crate::domain::stock::model::StockEntry;
use crate::domain::stock::repository::StockRepository;
use crate::domain::stock::use_cases::get_all::{GetStockParams, GetStockUseCase};

pub struct GetStockUseCaseImpl {
    pub repository: Arc<dyn StockRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetStockUseCase for GetStockUseCaseImpl {
    async fn execute(&self, params: GetStockParams) -> Result<Vec<StockEntry>, StockError> {
        self.logger
            .info(&format!("Fetching stock of user {}", params.user_id));
        let entries = self.repository.get_all(&params.user_id).await?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub StockRepo {}

        #[async_trait]
        impl StockRepository for StockRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<StockEntry>, RepositoryError>;
            async fn save(&self, entry: &StockEntry) -> Result<(), RepositoryError>;
            async fn delete(&self, user_id: &UserId, ingredient_id: Uuid) -> Result<u64, RepositoryError>;
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
    async fn should_return_stock_entries() {
        let mut mock_repo = MockStockRepo::new();
        mock_repo.expect_get_all().returning(|user_id| {
            Ok(vec![StockEntry::from_repository(
                user_id.clone(),
                Uuid::new_v4(),
                "Arroz".to_string(),
                Some("kg".to_string()),
                BigDecimal::from(2),
                chrono::Utc::now(),
            )])
        });

        let use_case = GetStockUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetStockParams {
                user_id: test_user_id(),
            })
            .await;

        let entries = result.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].ingredient_name, "Arroz");
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockStockRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetStockUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetStockParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), StockError::Repository(_)));
    }
}
