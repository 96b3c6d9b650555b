use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Logical storage bucket for an upload.
///
/// Each variant owns a fixed relative directory below the storage root. Those
/// directories are read by other systems, so the segments returned by
/// [`Destination::path_segment`] must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    ProfileImages,
    DailyWorkImages,
    ImportInfo,
    LearningResultFiles,
    ReportDailyWork,
    ReportTimestamp,
    NewsCoverImage,
    NewsDocs,
    NewsImage,
}

impl Destination {
    /// Every destination, in declaration order.
    pub fn all() -> &'static [Destination] {
        &[
            Destination::ProfileImages,
            Destination::DailyWorkImages,
            Destination::ImportInfo,
            Destination::LearningResultFiles,
            Destination::ReportDailyWork,
            Destination::ReportTimestamp,
            Destination::NewsCoverImage,
            Destination::NewsDocs,
            Destination::NewsImage,
        ]
    }

    /// Directory below the storage root, verbatim.
    ///
    /// `NewsDocs` and `NewsImage` point at `news_images` and `news_files`
    /// respectively; existing deployments already hold files under those names.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Destination::ProfileImages => "files/profile_images",
            Destination::DailyWorkImages => "files/daily_work_images",
            Destination::ImportInfo => "files/import-info",
            Destination::LearningResultFiles => "files/learning_result_files",
            Destination::ReportDailyWork => "files/report_daily_work",
            Destination::ReportTimestamp => "files/report_timestamp",
            Destination::NewsCoverImage => "files/news/cover_images",
            Destination::NewsDocs => "files/news/news_images",
            Destination::NewsImage => "files/news/news_files",
        }
    }

    /// Short identifier used in upload routes (`/api/v0/uploads/{slug}`).
    pub fn slug(&self) -> &'static str {
        match self {
            Destination::ProfileImages => "profile_images",
            Destination::DailyWorkImages => "daily_work_images",
            Destination::ImportInfo => "import-info",
            Destination::LearningResultFiles => "learning_result_files",
            Destination::ReportDailyWork => "report_daily_work",
            Destination::ReportTimestamp => "report_timestamp",
            Destination::NewsCoverImage => "news_cover_images",
            Destination::NewsDocs => "news_docs",
            Destination::NewsImage => "news_images",
        }
    }
}

impl FromStr for Destination {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::all()
            .iter()
            .copied()
            .find(|d| d.slug() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown destination: {}", s))
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.slug())
    }
}
