use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// コンテンツ種別を表現するenum（情報提供のみで分岐には使わない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "content_kind", rename_all = "lowercase")]
pub enum ContentKind {
    /// 固定ページ
    Page,
    /// ブログ記事
    Post,
}

// コンテンツの公開状態を表現するenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "content_status", rename_all = "lowercase")]
pub enum ContentStatus {
    /// 下書き（永続ストアの検索では到達不可能）
    Draft,
    /// 公開済み
    Published,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Page => write!(f, "page"),
            ContentKind::Post => write!(f, "post"),
        }
    }
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentStatus::Draft => write!(f, "draft"),
            ContentStatus::Published => write!(f, "published"),
        }
    }
}

// コンテンツエンティティ（ページ・記事の統合表現）
//
// スラッグをキーとして検索される読み取り専用のレコード。
// `content` には描画済みマークアップがそのまま格納されており、
// エスケープやサニタイズは表示層の責務とする。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Content {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Content {
    /// 公開済みかどうかを判定
    pub fn is_published(&self) -> bool {
        matches!(self.status, ContentStatus::Published)
    }
}

/// コンテンツ統計情報を計算する関数（下書き数, 公開数）
pub fn count_contents_by_status(contents: &[Content]) -> (usize, usize) {
    let mut draft = 0;
    let mut published = 0;

    for content in contents {
        match content.status {
            ContentStatus::Draft => draft += 1,
            ContentStatus::Published => published += 1,
        }
    }

    (draft, published)
}

/// 公開状態でフィルタリングする関数
pub fn filter_contents_by_status(
    contents: &[Content],
    status: ContentStatus,
) -> Vec<&Content> {
    contents
        .iter()
        .filter(|content| content.status == status)
        .collect()
}

// シードデータの固定タイムスタンプを生成する
fn seed_timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// インメモリストアの初期シードセットを生成する
///
/// プロセス起動時に一度だけ構築される固定データで、全件が公開済み。
/// 階層スラッグ（`about/history`）を含む。
pub fn seed_contents() -> Vec<Content> {
    vec![
        Content {
            id: 1,
            slug: "about".to_string(),
            title: "About Us".to_string(),
            content: "<h1>About Our Company</h1><p>We are a company dedicated to excellence.</p>"
                .to_string(),
            excerpt: Some("Learn about our company".to_string()),
            kind: ContentKind::Page,
            status: ContentStatus::Published,
            created_at: seed_timestamp(2024, 1, 1),
            updated_at: seed_timestamp(2024, 1, 1),
        },
        Content {
            id: 2,
            slug: "about/history".to_string(),
            title: "Company History".to_string(),
            content: "<h1>Our History</h1><p>Founded in 2020, we have grown exponentially.</p>"
                .to_string(),
            excerpt: Some("Our journey and milestones".to_string()),
            kind: ContentKind::Page,
            status: ContentStatus::Published,
            created_at: seed_timestamp(2024, 1, 2),
            updated_at: seed_timestamp(2024, 1, 2),
        },
        Content {
            id: 3,
            slug: "contact".to_string(),
            title: "Contact Us".to_string(),
            content: "<h1>Get In Touch</h1><p>Email us at hello@example.com</p>".to_string(),
            excerpt: Some("Contact information".to_string()),
            kind: ContentKind::Page,
            status: ContentStatus::Published,
            created_at: seed_timestamp(2024, 1, 3),
            updated_at: seed_timestamp(2024, 1, 3),
        },
        Content {
            id: 4,
            slug: "blog/first-post".to_string(),
            title: "My First Blog Post".to_string(),
            content: "<h1>Welcome to the Blog</h1><p>This is our first blog post!</p>".to_string(),
            excerpt: Some("Welcome to our blog".to_string()),
            kind: ContentKind::Post,
            status: ContentStatus::Published,
            created_at: seed_timestamp(2024, 1, 4),
            updated_at: seed_timestamp(2024, 1, 4),
        },
    ]
}
