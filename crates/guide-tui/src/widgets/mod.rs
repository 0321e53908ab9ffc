//! Custom widget components

mod confirm_dialog;
mod favorites_panel;
mod footer;
mod header;
pub mod modal_overlay;
mod search_panel;
mod section_view;
mod toast;

pub use confirm_dialog::ConfirmDialog;
pub use favorites_panel::FavoritesPanel;
pub use footer::Footer;
pub use header::GuideHeader;
pub use search_panel::{highlight_spans, SearchPanel};
pub use section_view::SectionView;
pub use toast::ToastView;
