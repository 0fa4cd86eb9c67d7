use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::recipe::model::{Recipe, RecipeIngredient};
use business::domain::recipe::repository::{RecipeIngredientRepository, RecipeRepository};

use super::entity::{RecipeEntity, RecipeIngredientEntity};
use crate::db::query_failed;
use crate::ingredient::repository::upsert_ingredient;

/// Swaps the lines of a recipe on an open transaction. Master ingredients
/// are upserted first so a new name or unit only lands with its lines.
async fn write_lines(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    ingredients: &[RecipeIngredient],
) -> Result<(), RepositoryError> {
    for line in ingredients {
        upsert_ingredient(&mut *conn, &line.ingredient).await?;
    }

    sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
        .bind(recipe_id)
        .execute(&mut *conn)
        .await
        .map_err(query_failed)?;

    for line in ingredients {
        sqlx::query(
            r#"INSERT INTO recipe_ingredients (recipe_id, ingredient_id, quantity, position)
            VALUES ($1, $2, $3, $4)"#,
        )
        .bind(recipe_id)
        .bind(line.ingredient.id)
        .bind(&line.quantity)
        .bind(line.position)
        .execute(&mut *conn)
        .await
        .map_err(query_failed)?;
    }

    Ok(())
}

pub struct RecipeRepositoryPostgres {
    pool: PgPool,
}

impl RecipeRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError> {
        let entity = sqlx::query_as::<_, RecipeEntity>(
            "SELECT id, author_id, title, description, instructions, created_at FROM recipes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, recipe: &Recipe, ingredients: &[RecipeIngredient]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(query_failed)?;

        sqlx::query(
            r#"INSERT INTO recipes (id, author_id, title, description, instructions, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(recipe.id)
        .bind(recipe.author_id.as_str())
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(&recipe.instructions)
        .bind(recipe.created_at)
        .execute(&mut *tx)
        .await
        .map_err(query_failed)?;

        write_lines(&mut tx, recipe.id, ingredients).await?;

        tx.commit().await.map_err(query_failed)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

pub struct RecipeIngredientRepositoryPostgres {
    pool: PgPool,
}

impl RecipeIngredientRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeIngredientRepository for RecipeIngredientRepositoryPostgres {
    async fn get_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<RecipeIngredient>, RepositoryError> {
        let entities = sqlx::query_as::<_, RecipeIngredientEntity>(
            r#"SELECT ri.recipe_id, ri.ingredient_id, i.name, i.unit, ri.quantity, ri.position
            FROM recipe_ingredients ri
            JOIN ingredients i ON i.id = ri.ingredient_id
            WHERE ri.recipe_id = $1
            ORDER BY ri.position"#,
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn replace_for_recipe(
        &self,
        recipe_id: Uuid,
        ingredients: &[RecipeIngredient],
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(query_failed)?;

        write_lines(&mut tx, recipe_id, ingredients).await?;

        tx.commit().await.map_err(query_failed)?;
        Ok(())
    }
}
