//! Job Tracker Common Library
//!
//! 応募一覧ページの振る舞い（入力検証・ステータスフィルタ・削除確認）。
//! DOMには `page` のトレイト越しにだけ触れるので、WASMとインメモリの両方で動く。

pub mod config;
pub mod delete;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod memory;
pub mod page;
pub mod status;
pub mod summary;
pub mod validation;

pub use config::{PageConfig, SummaryTargets};
pub use delete::{deletion_path, DeleteConfirmer, DeleteRequest};
pub use dispatch::ActionDispatcher;
pub use error::{Error, Result};
pub use filter::StatusFilterView;
pub use page::{
    ActionForm, ActionTrigger, Cancelable, ConfirmDialog, RowSource, SelectControl, StatusRow,
    SummaryBoard, ValidatingForm,
};
pub use status::{normalize_status, StatusCategory, StatusFilter};
pub use summary::{Summary, SummaryField};
pub use validation::{SubmitOutcome, ValidationGuard};
