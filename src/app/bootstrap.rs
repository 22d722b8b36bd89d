use crate::domain::content::{
    ContentResolver, ContentStore, ErrorPolicy, MemoryContentStore, PgContentStore,
};
use crate::infra::db::setup_database;
use crate::types::{ConfigError, ConfigResult};
use anyhow::{Context, Result};
use std::env;
use std::sync::Arc;

/// コンテンツストアのバックエンド種別
///
/// 起動時の設定で明示的に選択される。ソースの差し替えによる
/// 実装切り替えは行わない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// 固定シードを持つインメモリストア（既定）
    #[default]
    Memory,
    /// PostgreSQLバックエンドの永続ストア
    Postgres,
}

/// バックエンド名を解析する
pub fn parse_store_backend(name: &str) -> ConfigResult<StoreBackend> {
    match name {
        "memory" => Ok(StoreBackend::Memory),
        "postgres" => Ok(StoreBackend::Postgres),
        other => Err(ConfigError::invalid_value(format!(
            "未知のストアバックエンドです: {}",
            other
        ))),
    }
}

/// エラーポリシー名を解析する
pub fn parse_error_policy(name: &str) -> ConfigResult<ErrorPolicy> {
    match name {
        "degrade" => Ok(ErrorPolicy::Degrade),
        "propagate" => Ok(ErrorPolicy::Propagate),
        other => Err(ConfigError::invalid_value(format!(
            "未知のエラーポリシーです: {}",
            other
        ))),
    }
}

/// 環境変数からリゾルバ設定を読み込む
///
/// - `CONTENT_STORE`: `memory`（既定）または `postgres`
/// - `RESOLVER_ERROR_POLICY`: `degrade`（既定）または `propagate`
pub fn load_config_from_env() -> ConfigResult<(StoreBackend, ErrorPolicy)> {
    let backend = match env::var("CONTENT_STORE") {
        Ok(name) => parse_store_backend(&name)?,
        Err(_) => StoreBackend::default(),
    };
    let policy = match env::var("RESOLVER_ERROR_POLICY") {
        Ok(name) => parse_error_policy(&name)?,
        Err(_) => ErrorPolicy::default(),
    };

    Ok((backend, policy))
}

/// 設定に従ってコンテンツストアを構築する
///
/// 永続バックエンド選択時にDATABASE_URLが無い・接続できない場合は
/// この時点で利用不可エラーになる。設定不備のまま稼働を始めない。
pub async fn build_store(backend: StoreBackend) -> Result<Arc<dyn ContentStore>> {
    match backend {
        StoreBackend::Memory => Ok(Arc::new(MemoryContentStore::with_seed())),
        StoreBackend::Postgres => {
            let pool = setup_database()
                .await
                .context("永続ストアの初期化に失敗")?;
            Ok(Arc::new(PgContentStore::new(pool)))
        }
    }
}

/// 環境変数の設定からリゾルバを組み立てる
pub async fn build_resolver() -> Result<ContentResolver> {
    let (backend, policy) =
        load_config_from_env().context("リゾルバ設定の読み込みに失敗")?;
    let store = build_store(backend).await?;

    Ok(ContentResolver::with_policy(store, policy))
}
