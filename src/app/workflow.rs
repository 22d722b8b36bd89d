use crate::domain::content::{Content, ContentResolver};
use anyhow::Result;

/// 解決ワークフローのメイン実行関数
///
/// ルーティング層から渡されたパスをコンテンツへ解決し、結果を
/// 表示用に出力する。成功以外のケースの利用者向け表示はすべて
/// 同一のnot-foundで、内部エラーの詳細はログからのみ判別できる。
pub async fn run_resolution(resolver: &ContentResolver, path: Option<&str>) -> Result<()> {
    println!("=== コンテンツ解決を開始 ===");

    match resolver.resolve_path(path).await {
        Ok(Some(content)) => {
            print_content(&content);
        }
        Ok(None) => {
            print_not_found(path);
        }
        Err(e) => {
            // 伝播ポリシー設定時のみ到達する。利用者向け表示はnot-foundのまま
            print_not_found(path);
            return Err(e.into());
        }
    }

    println!("=== コンテンツ解決を完了 ===");
    Ok(())
}

/// 解決されたコンテンツを表示する
fn print_content(content: &Content) {
    println!("タイトル: {}", content.title);
    println!(
        "種別: {} / 作成日時: {}",
        content.kind,
        content.created_at.to_rfc3339()
    );
    if let Some(excerpt) = &content.excerpt {
        println!("抜粋: {}", excerpt);
    }
    // マークアップは加工せずそのまま出力する（エスケープは表示層の責務）
    println!("{}", content.content);
}

/// not-found表示（内部要因によらず常に同一の表示）
fn print_not_found(path: Option<&str>) {
    println!("404 - ページが見つかりません: /{}", path.unwrap_or(""));
}
