//! Note Detail Viewer
//!
//! Zoom, page navigation and preview status for a note's document, plus
//! helpers for turning Google Drive share links into preview and download
//! URLs.

use regex::Regex;
use std::sync::OnceLock;

pub const MIN_SCALE: f64 = 0.6;
pub const MAX_SCALE: f64 = 2.0;
pub const SCALE_STEP: f64 = 0.2;

/// How long the UI waits for the preview before showing the fallback
pub const PREVIEW_TIMEOUT_MS: u32 = 8_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewStatus {
    #[default]
    Loading,
    Ready,
    /// The embed failed (typically a cross-origin block); show the fallback
    Failed,
}

/// Preview controls for one document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentViewer {
    scale: f64,
    page: u32,
    total_pages: u32,
    /// Whether the embed honours `#page=`; Drive's viewer pages itself
    paged: bool,
    status: PreviewStatus,
}

impl Default for DocumentViewer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl DocumentViewer {
    /// `pages` comes from the note metadata; unknown counts as one page
    pub fn new(pages: Option<u32>) -> Self {
        Self {
            scale: 1.0,
            page: 1,
            total_pages: pages.unwrap_or(1).max(1),
            paged: true,
            status: PreviewStatus::Loading,
        }
    }

    /// Viewer for a note's link. Without an openable link the preview starts
    /// out failed, so the fallback shows instead of an empty frame.
    pub fn for_link(pages: Option<u32>, link: &str) -> Self {
        let mut viewer = Self::new(pages);
        match document_link(link) {
            Some(link) => viewer.paged = drive_file_id(link).is_none(),
            None => {
                viewer.paged = false;
                viewer.status = PreviewStatus::Failed;
            }
        }
        viewer
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Scale as a whole percentage, e.g. `140`
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Page controls only make sense when the embed follows them
    pub fn is_paged(&self) -> bool {
        self.paged
    }

    pub fn status(&self) -> PreviewStatus {
        self.status
    }

    pub fn zoom_in(&mut self) {
        self.scale = step_scale(self.scale, SCALE_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.scale = step_scale(self.scale, -SCALE_STEP);
    }

    /// Back to 100% on the first page
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.page = 1;
    }

    pub fn can_zoom_in(&self) -> bool {
        self.scale < MAX_SCALE
    }

    pub fn can_zoom_out(&self) -> bool {
        self.scale > MIN_SCALE
    }

    pub fn next_page(&mut self) {
        self.page = (self.page + 1).min(self.total_pages);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Update the page count once the document reports it
    pub fn set_total_pages(&mut self, total: u32) {
        self.total_pages = total.max(1);
        self.page = self.page.min(self.total_pages);
    }

    /// A load event after the fallback is shown does not bring the frame back
    pub fn mark_loaded(&mut self) {
        if self.status == PreviewStatus::Loading {
            self.status = PreviewStatus::Ready;
        }
    }

    pub fn mark_failed(&mut self) {
        self.status = PreviewStatus::Failed;
    }

    /// The load timer fired: fall back unless the preview already loaded
    pub fn timed_out(&mut self) {
        if self.status == PreviewStatus::Loading {
            self.status = PreviewStatus::Failed;
        }
    }

    /// URL to embed for the current page and zoom, `None` without a link.
    ///
    /// Drive previews ignore page and zoom: the Drive viewer has its own.
    pub fn preview_url(&self, link: &str) -> Option<String> {
        let link = document_link(link)?;
        Some(match drive_file_id(link) {
            Some(id) => format!("https://drive.google.com/file/d/{}/preview", id),
            None => format!(
                "{}#page={}&zoom={}",
                link.split('#').next().unwrap_or(link),
                self.page,
                self.zoom_percent()
            ),
        })
    }
}

/// Move by one step and clamp, rounding to one decimal so repeated steps do
/// not drift
fn step_scale(scale: f64, step: f64) -> f64 {
    (((scale + step) * 10.0).round() / 10.0).clamp(MIN_SCALE, MAX_SCALE)
}

fn drive_id_patterns() -> &'static [Regex; 2] {
    static PATTERNS: OnceLock<[Regex; 2]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"drive\.google\.com/file/d/([A-Za-z0-9_-]+)").expect("valid regex"),
            Regex::new(r"drive\.google\.com/.*[?&]id=([A-Za-z0-9_-]+)").expect("valid regex"),
        ]
    })
}

/// The trimmed link, if it is an http(s) URL a browser can open
pub fn document_link(link: &str) -> Option<&str> {
    let link = link.trim();
    (link.starts_with("https://") || link.starts_with("http://")).then_some(link)
}

/// Extract the file id from a Google Drive share link
pub fn drive_file_id(link: &str) -> Option<&str> {
    drive_id_patterns()
        .iter()
        .find_map(|pattern| pattern.captures(link))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Direct download URL for Drive links; other links are returned unchanged
pub fn download_url(link: &str) -> Option<String> {
    let link = document_link(link)?;
    Some(match drive_file_id(link) {
        Some(id) => format!("https://drive.google.com/uc?export=download&id={}", id),
        None => link.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamps_at_max() {
        let mut viewer = DocumentViewer::new(Some(10));
        for _ in 0..5 {
            viewer.zoom_in();
            assert!(viewer.scale() <= MAX_SCALE);
        }
        assert_eq!(viewer.scale(), MAX_SCALE);
        assert!(!viewer.can_zoom_in());

        viewer.zoom_in();
        assert_eq!(viewer.scale(), MAX_SCALE);
    }

    #[test]
    fn test_zoom_clamps_at_min() {
        let mut viewer = DocumentViewer::default();
        for _ in 0..10 {
            viewer.zoom_out();
        }
        assert_eq!(viewer.scale(), MIN_SCALE);
        assert_eq!(viewer.zoom_percent(), 60);
    }

    #[test]
    fn test_reset_restores_scale_and_first_page() {
        let mut viewer = DocumentViewer::new(Some(5));
        viewer.zoom_in();
        viewer.next_page();
        viewer.next_page();
        assert_eq!(viewer.page(), 3);

        viewer.reset();
        assert_eq!(viewer.scale(), 1.0);
        assert_eq!(viewer.page(), 1);
    }

    #[test]
    fn test_page_bounds() {
        let mut viewer = DocumentViewer::new(Some(2));
        viewer.prev_page();
        assert_eq!(viewer.page(), 1);
        assert!(!viewer.has_prev());

        viewer.next_page();
        viewer.next_page();
        assert_eq!(viewer.page(), 2);
        assert!(!viewer.has_next());

        viewer.set_total_pages(1);
        assert_eq!(viewer.page(), 1);

        assert_eq!(DocumentViewer::new(Some(0)).total_pages(), 1);
    }

    #[test]
    fn test_timeout_only_fails_while_loading() {
        let mut viewer = DocumentViewer::default();
        viewer.mark_loaded();
        viewer.timed_out();
        assert_eq!(viewer.status(), PreviewStatus::Ready);

        let mut viewer = DocumentViewer::default();
        viewer.timed_out();
        assert_eq!(viewer.status(), PreviewStatus::Failed);

        viewer.mark_loaded();
        assert_eq!(viewer.status(), PreviewStatus::Failed);
    }

    #[test]
    fn test_drive_links() {
        let share = "https://drive.google.com/file/d/1AbC_d-9/view?usp=sharing";
        assert_eq!(drive_file_id(share), Some("1AbC_d-9"));
        assert_eq!(
            drive_file_id("https://drive.google.com/open?id=XYZ123"),
            Some("XYZ123")
        );
        assert_eq!(drive_file_id("https://example.com/notes.pdf"), None);

        assert_eq!(
            download_url(share).as_deref(),
            Some("https://drive.google.com/uc?export=download&id=1AbC_d-9")
        );
        assert_eq!(
            DocumentViewer::default().preview_url(share).as_deref(),
            Some("https://drive.google.com/file/d/1AbC_d-9/preview")
        );
    }

    #[test]
    fn test_missing_link_falls_back_immediately() {
        for link in ["", "   ", "notes.pdf", "javascript:alert(1)"] {
            let mut viewer = DocumentViewer::for_link(Some(3), link);
            assert_eq!(viewer.status(), PreviewStatus::Failed);
            assert!(!viewer.is_paged());
            assert_eq!(viewer.preview_url(link), None);
            assert_eq!(download_url(link), None);

            // A stray load event must not bring back an empty frame
            viewer.mark_loaded();
            assert_eq!(viewer.status(), PreviewStatus::Failed);
        }
    }

    #[test]
    fn test_drive_links_are_not_paged() {
        let drive = DocumentViewer::for_link(Some(5), "https://drive.google.com/file/d/abc/view");
        assert!(!drive.is_paged());
        assert_eq!(drive.status(), PreviewStatus::Loading);

        let pdf = DocumentViewer::for_link(Some(5), " https://example.com/notes.pdf ");
        assert!(pdf.is_paged());
        assert_eq!(
            pdf.preview_url(" https://example.com/notes.pdf ").as_deref(),
            Some("https://example.com/notes.pdf#page=1&zoom=100")
        );
    }

    #[test]
    fn test_plain_pdf_preview_tracks_page_and_zoom() {
        let mut viewer = DocumentViewer::new(Some(4));
        viewer.next_page();
        viewer.zoom_in();

        assert_eq!(
            viewer.preview_url("https://example.com/notes.pdf#old").as_deref(),
            Some("https://example.com/notes.pdf#page=2&zoom=120")
        );
    }
}
