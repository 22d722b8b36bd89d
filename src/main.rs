use pagedoggo::app::bootstrap::build_resolver;
use pagedoggo::app::workflow::run_resolution;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // 環境変数を読み込み（.envファイルがあれば使用）
    let _ = dotenvy::dotenv();
    // ログ出力を初期化（RUST_LOGで制御）
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 解決対象のパス（未指定時はaboutを解決するデモ動作）
    let args: Vec<String> = std::env::args().collect();
    let path = args.get(1).map(|s| s.as_str()).unwrap_or("about");

    let resolver = match build_resolver().await {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("リゾルバの初期化中にエラーが発生しました: {:#}", e);
            return;
        }
    };

    if let Err(e) = run_resolution(&resolver, Some(path)).await {
        eprintln!("コンテンツ解決中にエラーが発生しました: {:#}", e);
    }
}
