use crate::types::{StoreError, StoreResult};
use sqlx::PgPool;
use std::env;

/// データベース接続プールを作成
/// .envファイルからDATABASE_URLを読み込みます
pub async fn create_pool() -> StoreResult<PgPool> {
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| StoreError::unavailable("環境変数DATABASE_URLが設定されていません"))?;

    PgPool::connect(&database_url).await.map_err(|e| {
        StoreError::unavailable(format!("データベースへの接続に失敗しました: {}", e))
    })
}

/// データベースの初期化（マイグレーション実行）
pub async fn initialize_database(pool: &PgPool) -> StoreResult<()> {
    sqlx::migrate!("./migrations").run(pool).await.map_err(|e| {
        StoreError::unavailable(format!(
            "データベースマイグレーションの実行に失敗しました: {}",
            e
        ))
    })
}

/// プールの作成とデータベース初期化を一括で行う便利関数
pub async fn setup_database() -> StoreResult<PgPool> {
    let pool = create_pool().await?;
    initialize_database(&pool).await?;
    Ok(pool)
}
