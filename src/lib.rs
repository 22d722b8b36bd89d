//! pagedoggo: スラッグからコンテンツを解決する読み取り専用レイヤー
//!
//! URLパス由来のスラッグ（`about/history` のような階層も可）を
//! 交換可能なストア実装（インメモリ/PostgreSQL）に対して解決し、
//! コンテンツまたは不在を返します。描画・HTMLエスケープ・ルーティングは
//! 外部の表示層の責務であり、このクレートには含まれません。

pub mod app;
pub mod domain;
pub mod infra;
pub mod types;
