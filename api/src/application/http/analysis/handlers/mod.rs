pub mod analyze_image;
pub mod get_session_state;
