mod preview_modal;

pub use preview_modal::PreviewModal;
