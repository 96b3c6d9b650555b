//! Per-destination allow-lists used by the HTTP upload route

use std::collections::HashMap;

use stowage_core::classify::{documents, images, spreadsheets};
use stowage_core::{AllowList, AppError, Destination, ExtensionTag};

/// Default allow-list for every destination.
///
/// A request may narrow its destination's list with an `extensions` query
/// parameter; it can never widen it.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    allowed: HashMap<Destination, AllowList>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        let allowed = Destination::all()
            .iter()
            .map(|destination| {
                let list = match destination {
                    Destination::ProfileImages
                    | Destination::DailyWorkImages
                    | Destination::NewsCoverImage
                    | Destination::NewsImage => images(),
                    Destination::ImportInfo => spreadsheets(),
                    Destination::NewsDocs => documents(),
                    Destination::ReportTimestamp => {
                        let mut list = spreadsheets();
                        list.insert(ExtensionTag::Pdf);
                        list
                    }
                    Destination::LearningResultFiles | Destination::ReportDailyWork => {
                        images().union(&documents()).copied().collect()
                    }
                };
                (*destination, list)
            })
            .collect();

        Self { allowed }
    }
}

impl UploadPolicy {
    /// Default allow-list for a destination
    pub fn defaults_for(&self, destination: Destination) -> AllowList {
        self.allowed.get(&destination).cloned().unwrap_or_default()
    }

    /// Allow-list for one request.
    ///
    /// `requested` is a comma-separated list of extensions; when present the result
    /// is its intersection with the destination's defaults. Unknown extensions are
    /// rejected as invalid input.
    pub fn allow_list_for(
        &self,
        destination: Destination,
        requested: Option<&str>,
    ) -> Result<AllowList, AppError> {
        let defaults = self.defaults_for(destination);

        let Some(requested) = requested.filter(|r| !r.trim().is_empty()) else {
            return Ok(defaults);
        };

        let requested = requested
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<ExtensionTag>()
                    .map_err(|e| AppError::InvalidInput(e.to_string()))
            })
            .collect::<Result<AllowList, AppError>>()?;

        Ok(defaults.intersection(&requested).copied().collect())
    }
}
