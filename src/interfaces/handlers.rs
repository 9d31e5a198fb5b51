pub mod about;
pub mod contact;
pub mod experiences;
pub mod fallback;
pub mod faq;
pub mod hero;
pub mod pages;
pub mod projects;
pub mod system;
pub mod testimonials;
