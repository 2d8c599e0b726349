use crate::PostgresPool;
use repositories::client::ClientRepository;
use types::client::{Client, ClientId};

impl ClientRepository for PostgresPool {
    async fn find_all(&self) -> anyhow::Result<Vec<Client>> {
        let res = sqlx::query_as(
            r#"
        SELECT id, first_name, last_name, membership_number
        FROM clients
        ORDER BY id
        "#,
        )
        .fetch_all(&self.pg_pool)
        .await?;
        Ok(res)
    }

    async fn find(&self, client_id: ClientId) -> anyhow::Result<Option<Client>> {
        let res = sqlx::query_as(
            r#"
        SELECT id, first_name, last_name, membership_number
        FROM clients
        WHERE id = $1
        "#,
        )
        .bind(client_id)
        .fetch_optional(&self.pg_pool)
        .await?;

        tracing::debug!("Find client by id '{}' result: {:?}", client_id, res);
        Ok(res)
    }

    async fn insert(&self, client: Client) -> anyhow::Result<Client> {
        let res: Client = sqlx::query_as(
            r#"
        INSERT INTO clients (first_name, last_name, membership_number)
        VALUES ($1, $2, $3)
        RETURNING id, first_name, last_name, membership_number
        "#,
        )
        .bind(client.first_name)
        .bind(client.last_name)
        .bind(client.membership_number)
        .fetch_one(&self.pg_pool)
        .await?;

        tracing::debug!("Inserted client: {:?}", res);
        Ok(res)
    }

    async fn update(&self, client_id: ClientId, client: Client) -> anyhow::Result<Option<Client>> {
        let res = sqlx::query_as(
            r#"
        UPDATE clients
        SET first_name = $2, last_name = $3, membership_number = $4
        WHERE id = $1
        RETURNING id, first_name, last_name, membership_number
        "#,
        )
        .bind(client_id)
        .bind(client.first_name)
        .bind(client.last_name)
        .bind(client.membership_number)
        .fetch_optional(&self.pg_pool)
        .await?;

        tracing::debug!("Update client '{}' result: {:?}", client_id, res);
        Ok(res)
    }

    async fn delete(&self, client_id: ClientId) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(client_id)
            .execute(&self.pg_pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
