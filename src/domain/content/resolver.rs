use super::model::Content;
use super::store::ContentStore;
use crate::types::StoreResult;
use std::sync::Arc;

/// ストアエラー発生時のリゾルバの伝播ポリシー
///
/// 構築時に一度だけ決定され、全ての解決呼び出しで一貫して適用されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// エラーをログに記録した上で不在（`Ok(None)`）に縮退する（既定）。
    /// 利用者には常に通常のnot-foundページが表示される。
    #[default]
    Degrade,
    /// エラーをログに記録した上で呼び出し元へ伝播する。
    /// 設定不備に運用者が即座に気付けるようにする場合に使用。
    Propagate,
}

/// スラッグをコンテンツまたは不在に変換するリゾルバ
///
/// ストアは明示的に注入され、グローバル状態には依存しません。
/// 解決は呼び出しごとに独立したステートレスな非同期操作で、
/// リトライ・キャッシュ・タイムアウトはこの層では行いません。
pub struct ContentResolver {
    store: Arc<dyn ContentStore>,
    policy: ErrorPolicy,
}

impl ContentResolver {
    /// 既定ポリシー（縮退）でリゾルバを作成
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self::with_policy(store, ErrorPolicy::default())
    }

    /// ポリシーを指定してリゾルバを作成
    pub fn with_policy(store: Arc<dyn ContentStore>, policy: ErrorPolicy) -> Self {
        Self { store, policy }
    }

    /// 設定されている伝播ポリシーを取得
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// スラッグを解決してコンテンツまたは不在を返す
    ///
    /// `Ok(None)` が「該当コンテンツなし」を表す指定結果であり、
    /// 空スラッグとストアミスの両方がこれに解決されます。
    pub async fn resolve(&self, slug: &str) -> StoreResult<Option<Content>> {
        // 空スラッグは確定ミス。ストアに触れずに不在へ短絡する
        if slug.is_empty() {
            return Ok(None);
        }

        match self.store.find_by_slug(slug).await {
            Ok(found) => Ok(found),
            Err(e) => {
                tracing::error!(slug = %slug, error = %e, "コンテンツ解決中にストアエラーが発生");
                match self.policy {
                    ErrorPolicy::Degrade => Ok(None),
                    ErrorPolicy::Propagate => Err(e),
                }
            }
        }
    }

    /// ルーティング層から渡される省略可能なパスを解決する
    ///
    /// パス未指定は空スラッグと同様に不在へ解決されます。
    pub async fn resolve_path(&self, path: Option<&str>) -> StoreResult<Option<Content>> {
        self.resolve(path.unwrap_or_default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::model::seed_contents;
    use crate::domain::content::store::{MemoryContentStore, MockContentStore};
    use crate::types::StoreError;

    fn seeded_resolver() -> ContentResolver {
        ContentResolver::new(Arc::new(MemoryContentStore::with_seed()))
    }

    // 解決ロジック・振る舞い系テスト
    mod pure {
        use super::*;

        #[tokio::test]
        async fn test_resolve_known_slug() -> Result<(), anyhow::Error> {
            let resolver = seeded_resolver();

            let found = resolver.resolve("about").await?;
            let content = found.expect("aboutが解決できない");

            let expected = seed_contents()
                .into_iter()
                .find(|c| c.slug == "about")
                .unwrap();
            assert_eq!(content, expected, "格納レコードがそのまま返るべき");

            println!("✅ 既知スラッグ解決テスト成功");
            Ok(())
        }

        #[tokio::test]
        async fn test_resolve_unknown_slug() -> Result<(), anyhow::Error> {
            let resolver = seeded_resolver();

            let found = resolver.resolve("missing-page").await?;
            assert!(found.is_none(), "未知のスラッグは不在になるべき");

            println!("✅ 未知スラッグ解決テスト成功");
            Ok(())
        }

        #[tokio::test]
        async fn test_empty_slug_short_circuits() -> Result<(), anyhow::Error> {
            // ストアに触れたら必ずエラーになるモックを仕込むことで、
            // 空スラッグがストアに到達しないことを検証する
            let store = Arc::new(MockContentStore::new_query_error("到達してはいけない"));
            let resolver = ContentResolver::with_policy(store, ErrorPolicy::Propagate);

            let found = resolver.resolve("").await?;
            assert!(found.is_none(), "空スラッグは不在になるべき");

            println!("✅ 空スラッグ短絡テスト成功");
            Ok(())
        }

        #[tokio::test]
        async fn test_resolve_path_missing() -> Result<(), anyhow::Error> {
            let store = Arc::new(MockContentStore::new_query_error("到達してはいけない"));
            let resolver = ContentResolver::with_policy(store, ErrorPolicy::Propagate);

            let found = resolver.resolve_path(None).await?;
            assert!(found.is_none(), "パス未指定は不在になるべき");

            let found = resolver.resolve_path(Some("")).await?;
            assert!(found.is_none(), "空パスも不在になるべき");

            println!("✅ パス未指定解決テスト成功");
            Ok(())
        }

        #[tokio::test]
        async fn test_resolve_path_present() -> Result<(), anyhow::Error> {
            let resolver = seeded_resolver();

            let found = resolver.resolve_path(Some("blog/first-post")).await?;
            let content = found.expect("blog/first-postが解決できない");
            assert_eq!(content.title, "My First Blog Post");

            println!("✅ パス指定解決テスト成功");
            Ok(())
        }
    }

    // エラーポリシー系テスト
    mod policy {
        use super::*;

        #[tokio::test]
        async fn test_degrade_swallows_query_error() -> Result<(), anyhow::Error> {
            let store = Arc::new(MockContentStore::new_query_error("ネットワーク断"));
            let resolver = ContentResolver::with_policy(store, ErrorPolicy::Degrade);

            // 繰り返し呼んでも一貫して不在に縮退する
            for _ in 0..3 {
                let found = resolver.resolve("about").await?;
                assert!(found.is_none(), "縮退ポリシーでは不在になるべき");
            }

            println!("✅ 縮退ポリシーテスト成功");
            Ok(())
        }

        #[tokio::test]
        async fn test_propagate_surfaces_query_error() {
            let store = Arc::new(MockContentStore::new_query_error("ネットワーク断"));
            let resolver = ContentResolver::with_policy(store, ErrorPolicy::Propagate);

            for _ in 0..3 {
                let result = resolver.resolve("about").await;
                let error = result.expect_err("伝播ポリシーではエラーになるべき");
                assert!(matches!(error, StoreError::Query { .. }));
            }

            println!("✅ 伝播ポリシーテスト成功");
        }

        #[tokio::test]
        async fn test_unavailable_store_follows_policy() -> Result<(), anyhow::Error> {
            // バックエンドハンドル不在（設定不備）の場合も同じポリシーに従う
            let degrade = ContentResolver::with_policy(
                Arc::new(MockContentStore::new_unavailable("DATABASE_URLなし")),
                ErrorPolicy::Degrade,
            );
            let propagate = ContentResolver::with_policy(
                Arc::new(MockContentStore::new_unavailable("DATABASE_URLなし")),
                ErrorPolicy::Propagate,
            );

            for _ in 0..3 {
                assert!(degrade.resolve("about").await?.is_none());

                let error = propagate
                    .resolve("about")
                    .await
                    .expect_err("伝播ポリシーではエラーになるべき");
                assert!(matches!(error, StoreError::Unavailable { .. }));
            }

            println!("✅ ストア利用不可ポリシーテスト成功");
            Ok(())
        }

        #[tokio::test]
        async fn test_default_policy_is_degrade() {
            let resolver = seeded_resolver();
            assert_eq!(resolver.policy(), ErrorPolicy::Degrade);
        }
    }

    // 並行解決系テスト
    mod concurrent {
        use super::*;

        #[tokio::test(flavor = "multi_thread")]
        async fn test_interleaved_resolutions_do_not_interfere() -> Result<(), anyhow::Error> {
            let resolver = Arc::new(seeded_resolver());
            let mut handles = Vec::new();

            // 2種類のスラッグを大量に交互解決しても結果が混線しないこと
            for i in 0..500 {
                let resolver_a = Arc::clone(&resolver);
                let resolver_b = Arc::clone(&resolver);

                handles.push(tokio::spawn(async move {
                    let found = resolver_a.resolve("about").await?;
                    anyhow::ensure!(
                        found.map(|c| c.title) == Some("About Us".to_string()),
                        "aboutの解決結果が不正（{}回目）",
                        i
                    );
                    Ok::<(), anyhow::Error>(())
                }));
                handles.push(tokio::spawn(async move {
                    let found = resolver_b.resolve("blog/first-post").await?;
                    anyhow::ensure!(
                        found.map(|c| c.title) == Some("My First Blog Post".to_string()),
                        "blog/first-postの解決結果が不正（{}回目）",
                        i
                    );
                    Ok::<(), anyhow::Error>(())
                }));
            }

            for handle in handles {
                handle.await??;
            }

            println!("✅ 並行解決テスト成功: 1000件");
            Ok(())
        }
    }
}
