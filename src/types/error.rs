use thiserror::Error;

/// コンテンツストア層のエラー型
///
/// スラッグ解決の失敗のうち「エラー」として扱うものだけを定義します。
/// 該当レコードが存在しない場合（ミス）はエラーではなく `Ok(None)` で
/// 表現されるため、ここには含まれません。
#[derive(Error, Debug)]
pub enum StoreError {
    /// バックエンドのハンドルが存在しない・取得できない（設定不備）
    #[error("コンテンツストアが利用できません: {reason}")]
    Unavailable { reason: String },

    /// バックエンドへの問い合わせ自体が失敗した（I/O・スキーマ不整合など）
    #[error("コンテンツの検索クエリに失敗しました: {slug} - {source}")]
    Query {
        slug: String,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    /// ストア利用不可エラーを作成
    pub fn unavailable<R: Into<String>>(reason: R) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// クエリ失敗エラーを作成
    pub fn query<S: Into<String>>(slug: S, source: sqlx::Error) -> Self {
        Self::Query {
            slug: slug.into(),
            source,
        }
    }
}

/// ストアエラーのResult型エイリアス
pub type StoreResult<T> = std::result::Result<T, StoreError>;
