use super::model::{seed_contents, Content};
use crate::types::{StoreError, StoreResult};
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;

/// コンテンツストアの抽象化トレイト
///
/// スラッグから高々1件のコンテンツを検索する単一の能力を定義します。
/// インメモリ実装と永続実装の両方を統一的に扱えるようにするための
/// インターフェースで、起動時の設定によって実装が選択されます。
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// 指定されたスラッグに一致するコンテンツを検索する
    ///
    /// 該当レコードが存在しない場合は `Ok(None)` を返します。
    /// 不在はエラーではありません。
    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Content>>;
}

/// 固定シードデータを保持するインメモリストア
///
/// 構築時に一度だけ投入され、以降は読み取り専用。検索はスラッグの
/// 完全一致（大文字小文字を区別）で、I/Oを伴わず失敗しません。
pub struct MemoryContentStore {
    contents: HashMap<String, Content>,
}

impl MemoryContentStore {
    /// 既定のシードセットからストアを作成
    pub fn with_seed() -> Self {
        Self::from_contents(seed_contents())
    }

    /// 任意のコンテンツ一覧からストアを作成
    pub fn from_contents(contents: Vec<Content>) -> Self {
        let contents = contents
            .into_iter()
            .map(|content| (content.slug.clone(), content))
            .collect();
        Self { contents }
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Content>> {
        Ok(self.contents.get(slug).cloned())
    }
}

/// PostgreSQLを使用した本番用の永続ストア実装
///
/// 接続プールはコンストラクタで注入されます。検索は公開済み
/// （status = 'published'）のレコードだけを対象とするため、
/// 下書きはスラッグが一致してもこの経路からは到達できません。
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    /// 注入された接続プールからストアを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Content>> {
        // スラッグは必ずバインドパラメータとして渡す（文字列連結は不可）
        let found = sqlx::query_as::<_, Content>(
            r#"
            SELECT id, slug, title, content, excerpt, kind, status, created_at, updated_at
            FROM contents
            WHERE slug = $1 AND status = 'published'
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::query(slug, e))?;

        Ok(found)
    }
}

/// テスト用のモックコンテンツストア
///
/// この実装はテスト時にDIされ、実際のバックエンドに触れずに
/// 定義済みのエラーを返します。リゾルバのエラーポリシー検証に使用します。
pub struct MockContentStore {
    /// 利用不可エラーを返すかどうか（falseならクエリ失敗を返す）
    pub fail_unavailable: bool,
    /// エラーに含めるメッセージ
    pub error_message: String,
}

impl MockContentStore {
    /// ストア利用不可エラーを返すモックを作成
    pub fn new_unavailable(reason: &str) -> Self {
        Self {
            fail_unavailable: true,
            error_message: reason.to_string(),
        }
    }

    /// クエリ失敗エラーを返すモックを作成
    pub fn new_query_error(message: &str) -> Self {
        Self {
            fail_unavailable: false,
            error_message: message.to_string(),
        }
    }
}

#[async_trait]
impl ContentStore for MockContentStore {
    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Content>> {
        if self.fail_unavailable {
            Err(StoreError::unavailable(self.error_message.clone()))
        } else {
            Err(StoreError::query(
                slug,
                sqlx::Error::Protocol(self.error_message.clone()),
            ))
        }
    }
}
