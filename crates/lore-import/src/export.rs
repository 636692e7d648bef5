//! Export: filtered memories as a knowledge package.

use chrono::Utc;
use tracing::debug;

use lore_core::constants::{EXPORT_PACKAGE_NAME, PACKAGE_FORMAT_VERSION};
use lore_core::errors::LoreResult;
use lore_core::models::{ExportFilter, KnowledgePackage, PackageInfo};
use lore_core::traits::IKnowledgeStorage;

/// Build a package from every record matching `filter`, newest first.
/// The package version is the export timestamp.
pub fn export_package(
    storage: &dyn IKnowledgeStorage,
    filter: &ExportFilter,
) -> LoreResult<KnowledgePackage> {
    let memories = storage.export(filter)?;
    debug!(count = memories.len(), "memories exported");

    Ok(KnowledgePackage {
        version: PACKAGE_FORMAT_VERSION.to_string(),
        package: PackageInfo {
            name: EXPORT_PACKAGE_NAME.to_string(),
            version: Utc::now().format("%Y.%m.%d.%H%M%S").to_string(),
            ..PackageInfo::default()
        },
        memories,
    })
}
