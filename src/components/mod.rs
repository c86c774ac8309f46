//! UI components for profile-popup.
//!
//! This module contains the Dioxus UI components for the profile icon and
//! the popup overlay.

mod profile_icon;
mod profile_popup;

pub use profile_icon::ProfileIcon;
pub use profile_popup::ProfilePopup;
