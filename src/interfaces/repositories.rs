pub mod about;
pub mod contact_message;
pub mod experience;
pub mod faq;
pub mod health;
pub mod hero;
pub mod project;
pub mod sqlx_repo;
pub mod testimonial;
