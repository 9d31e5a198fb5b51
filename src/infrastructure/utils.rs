pub mod html;
pub mod json_body;
pub mod media;
