mod listing;
mod package;
mod recall;
mod text_query;

pub use listing::{Categories, CategoryCount, ExportFilter, ListFilter, ListPage, OrderBy};
pub use package::{ConflictInfo, ImportPreview, ImportResult, KnowledgePackage, PackageInfo};
pub use recall::{RecallQuery, RecallResponse, RecallResult};
pub use text_query::TextQuery;
